//! Centering helpers for text lines and glyph art.

/// Floor-centred offset of an item of size `inner` inside `outer`.
///
/// Negative when the item is larger than the space it sits in.
#[inline]
pub fn center_offset(outer: usize, inner: usize) -> i32 {
    let outer = i64::try_from(outer).unwrap_or(i64::MAX);
    let inner = i64::try_from(inner).unwrap_or(i64::MAX);
    let offset = (outer - inner).div_euclid(2);
    i32::try_from(offset).unwrap_or(if offset < 0 { i32::MIN } else { i32::MAX })
}

/// Top offset of a block of `line_count` lines in `available_height` rows.
///
/// Rows above zero or past the available height are clipped by the caller.
#[inline]
pub fn vertical_offset(available_height: u16, line_count: usize) -> i32 {
    center_offset(usize::from(available_height), line_count)
}

/// Left and right padding that centre a line of `line_width` columns.
///
/// Odd leftover space goes to the right. A line that does not fit gets no
/// padding at all and overflows.
#[inline]
pub const fn horizontal_padding(available_width: usize, line_width: usize) -> (usize, usize) {
    if line_width >= available_width {
        return (0, 0);
    }
    let spare = available_width - line_width;
    let left = spare / 2;
    (left, spare - left)
}

/// `line` padded with spaces to be centred in `available_width` columns.
pub fn center_line(line: &str, available_width: usize) -> String {
    let (left, right) = horizontal_padding(available_width, super::display_width(line));
    let mut out = String::with_capacity(left + line.len() + right);
    out.extend(std::iter::repeat(' ').take(left));
    out.push_str(line);
    out.extend(std::iter::repeat(' ').take(right));
    out
}
