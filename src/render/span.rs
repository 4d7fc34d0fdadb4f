//! Colour composition for painted rows.
//!
//! A row is wrapped in the background colour; inside it, border glyphs
//! and content text each carry their own foreground colour:
//!
//! ```text
//! bg[ fg_border[│] fg_text[  hi  ] fg_border[│] ]
//! ```

use crate::node::{Color, Style};
use crate::terminal::OutputBuffer;

/// Resolved colours of one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpanStyle {
    /// Outermost region: the whole row.
    pub background: Option<Color>,
    /// Foreground of border glyphs.
    pub border: Option<Color>,
    /// Foreground of text and glyph art.
    pub text: Option<Color>,
}

impl SpanStyle {
    /// Open the row region.
    #[inline]
    pub fn begin(&self, out: &mut OutputBuffer) {
        if let Some(bg) = self.background {
            out.set_bg(bg);
        }
    }

    /// Close the row region.
    #[inline]
    pub fn end(&self, out: &mut OutputBuffer) {
        if self.background.is_some() {
            out.reset_bg();
        }
    }

    /// Write border glyphs.
    #[inline]
    pub fn border(&self, out: &mut OutputBuffer, glyphs: &str) {
        colored(out, self.border, glyphs);
    }

    /// Write content text.
    #[inline]
    pub fn text(&self, out: &mut OutputBuffer, text: &str) {
        colored(out, self.text, text);
    }
}

impl From<&Style> for SpanStyle {
    fn from(style: &Style) -> Self {
        Self {
            background: style.background,
            border: style.border.and_then(|b| b.color),
            text: style.color,
        }
    }
}

fn colored(out: &mut OutputBuffer, color: Option<Color>, s: &str) {
    if s.is_empty() {
        return;
    }
    match color {
        Some(fg) => {
            out.set_fg(fg);
            out.write_str(s);
            out.reset_fg();
        }
        None => out.write_str(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Border;

    fn render(f: impl FnOnce(&mut OutputBuffer)) -> String {
        let mut out = OutputBuffer::new();
        f(&mut out);
        String::from_utf8(out.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn test_plain_spans_emit_no_sgr() {
        let span = SpanStyle::default();
        let s = render(|out| {
            span.begin(out);
            span.border(out, "│");
            span.text(out, "hi");
            span.end(out);
        });
        assert_eq!(s, "│hi");
    }

    #[test]
    fn test_background_is_outermost() {
        let style = Style::new()
            .background(Color::Blue)
            .color(Color::White)
            .border(Border::solid().with_color(Color::Red));
        let span = SpanStyle::from(&style);
        let s = render(|out| {
            span.begin(out);
            span.border(out, "│");
            span.text(out, "hi");
            span.end(out);
        });
        assert_eq!(s, "\x1b[44m\x1b[31m│\x1b[39m\x1b[37mhi\x1b[39m\x1b[49m");
    }

    #[test]
    fn test_empty_span_is_skipped() {
        let span = SpanStyle {
            text: Some(Color::Cyan),
            ..SpanStyle::default()
        };
        assert_eq!(render(|out| span.text(out, "")), "");
    }
}
