//! Text layout: word wrapping and centring.
//!
//! Everything here is pure and stateless. Labels are re-wrapped on every
//! frame; scenes are small enough that caching is not worth the state.

mod align;
mod wrap;

pub use align::{center_line, center_offset, horizontal_padding, vertical_offset};
pub use wrap::wrap;

use unicode_width::UnicodeWidthStr;

/// Width of `s` in terminal columns.
#[inline]
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}
