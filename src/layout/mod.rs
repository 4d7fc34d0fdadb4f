//! Layout module: absolute rectangles and the per-node box model.
//!
//! There is no layout solver. Every node carries its own absolute
//! position and size; this module only decomposes that rectangle into
//! border, padding and content.

mod box_model;
mod rect;

pub use box_model::BoxModel;
pub use rect::Rect;
