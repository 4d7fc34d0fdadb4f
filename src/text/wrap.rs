//! Greedy word wrap.

use super::display_width;

/// Wrap `text` into lines no wider than `max_width` columns.
///
/// Hard line breaks always start a new line. Within a segment, words are
/// packed greedily with single spaces between them. A word wider than
/// `max_width` is kept whole and overflows its line. Segments without any
/// words produce no line.
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for segment in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in segment.split_whitespace() {
            let word_width = display_width(word);

            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + 1 + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_width;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}
