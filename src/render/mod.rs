//! Render loop: paint a whole scene into escape sequences, once per tick.
//!
//! There is no diffing. Every frame clears the screen and repaints every
//! visible node in paint order. A node that fails validation is logged and
//! skipped; the rest of the frame still renders.

mod border;
mod span;

pub use border::BorderGlyphs;
pub use span::SpanStyle;

use crate::error::Error;
use crate::layout::BoxModel;
use crate::node::{IconVariant, Node, NodeKind, Sides};
use crate::scene::Scene;
use crate::terminal::OutputBuffer;
use crate::text::{center_offset, display_width, horizontal_padding, vertical_offset, wrap};
use std::io::{self, Write};
use std::time::Instant;

/// Render statistics for debugging/profiling.
#[derive(Debug, Clone, Default)]
pub struct RenderStats {
    /// Total frames rendered.
    pub frames: u64,
    /// Total bytes written to the terminal.
    pub bytes_written: u64,
    /// Nodes skipped because they failed validation.
    pub nodes_skipped: u64,
    /// Average render time in microseconds.
    pub avg_render_us: u64,
    /// Last render time in microseconds.
    pub last_render_us: u64,
}

/// Outcome of painting one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Nodes that produced output.
    pub painted: usize,
    /// Hidden nodes.
    pub hidden: usize,
    /// Invalid nodes that were skipped.
    pub skipped: usize,
}

/// Owns the frame buffer and turns scenes into terminal output.
#[derive(Default)]
pub struct Renderer {
    output: OutputBuffer,
    stats: RenderStats,
}

impl Renderer {
    /// Create a renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint `scene` and return the frame bytes.
    pub fn render_frame(&mut self, scene: &Scene) -> &[u8] {
        let start = Instant::now();
        self.output.clear();

        let report = paint_frame(scene, &mut self.output);

        let elapsed_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
        self.stats.frames += 1;
        self.stats.nodes_skipped += report.skipped as u64;
        self.stats.last_render_us = elapsed_us;

        // Smoothed average
        if self.stats.avg_render_us == 0 {
            self.stats.avg_render_us = elapsed_us;
        } else {
            self.stats.avg_render_us = (self.stats.avg_render_us * 15 + elapsed_us) / 16;
        }

        tracing::debug!(
            frame = self.stats.frames,
            bytes = self.output.len(),
            painted = report.painted,
            skipped = report.skipped,
            "frame rendered"
        );

        self.output.as_bytes()
    }

    /// Paint `scene` and flush it to `writer` in a single write.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn render_to<W: Write>(&mut self, scene: &Scene, writer: &mut W) -> io::Result<()> {
        self.render_frame(scene);
        self.output.flush_to(writer)?;
        self.stats.bytes_written += self.output.len() as u64;
        Ok(())
    }

    /// Statistics accumulated so far.
    pub const fn stats(&self) -> &RenderStats {
        &self.stats
    }
}

/// Clear the screen and paint every visible node of `scene` into `out`.
pub fn paint_frame(scene: &Scene, out: &mut OutputBuffer) -> FrameReport {
    let mut report = FrameReport::default();
    out.clear_screen();

    for (index, node) in scene.iter().enumerate() {
        if !node.visible {
            report.hidden += 1;
            continue;
        }
        if let Err(reason) = node.validate() {
            let err = Error::InvalidNode { index, reason };
            tracing::warn!(%err, "skipping node");
            report.skipped += 1;
            continue;
        }

        paint_node(node, out);
        report.painted += 1;
    }

    report
}

/// Paint a single node, leaving attributes reset and the cursor homed.
///
/// Visibility and validity are the caller's concern.
pub fn paint_node(node: &Node, out: &mut OutputBuffer) {
    match &node.kind {
        NodeKind::Icon { variant } => paint_icon(node, *variant, out),
        NodeKind::Box => paint_block(node, &[], out),
        NodeKind::Label { text } => {
            let content = BoxModel::resolve(node).content;
            let lines = wrap(text, usize::from(content.width));
            paint_block(node, &lines, out);
        }
    }

    out.reset_attrs();
    out.cursor_home();
}

/// Centre the glyph art in the node's full box (border and padding ignored).
fn paint_icon(node: &Node, variant: IconVariant, out: &mut OutputBuffer) {
    let rect = node.rect();
    let span = SpanStyle {
        text: node.style.color,
        ..SpanStyle::default()
    };

    let x = offset_coord(rect.x, center_offset(usize::from(rect.width), variant.width()));
    let y = offset_coord(rect.y, center_offset(usize::from(rect.height), variant.height()));

    for (row, line) in (y..=u16::MAX).zip(variant.lines()) {
        out.cursor_move(x, row);
        span.text(out, line);
    }
}

/// Paint a box or label: border rows, then inner rows with centred text.
fn paint_block(node: &Node, lines: &[String], out: &mut OutputBuffer) {
    let model = BoxModel::resolve(node);
    let outer = model.outer;
    if outer.is_empty() {
        return;
    }

    let span = SpanStyle::from(&node.style);
    let glyphs = node.style.border.map(|b| BorderGlyphs::for_kind(b.kind));

    if let Some(glyphs) = glyphs {
        if model.has(Sides::TOP) {
            out.cursor_move(outer.x, outer.y);
            span.begin(out);
            span.border(out, &glyphs.top_row(model.edges, outer.width));
            span.end(out);
        }
    }

    let inner = model.inner;
    let content = model.content;
    let lead = usize::from(content.x - inner.x);
    let top_offset = vertical_offset(content.height, lines.len());
    let vertical = glyphs.map(|g| g.vertical.to_string());
    // A one-column box has room for the left edge only.
    let right_edge = model.has(Sides::RIGHT) && !(model.has(Sides::LEFT) && outer.width < 2);

    for row in inner.y..inner.bottom() {
        out.cursor_move(outer.x, row);
        span.begin(out);

        if let (Some(v), true) = (&vertical, model.has(Sides::LEFT)) {
            span.border(out, v);
        }

        let line = if content.is_empty() || row < content.y || row >= content.bottom() {
            None
        } else {
            let index = i32::from(row - content.y) - top_offset;
            usize::try_from(index).ok().and_then(|i| lines.get(i))
        };

        let inner_width = usize::from(inner.width);
        match line {
            Some(line) => {
                let line_width = display_width(line);
                let (left, _) = horizontal_padding(usize::from(content.width), line_width);
                out.write_spaces(lead + left);
                span.text(out, line);
                out.write_spaces(inner_width.saturating_sub(lead + left + line_width));
            }
            None => out.write_spaces(inner_width),
        }

        if let (Some(v), true) = (&vertical, right_edge) {
            span.border(out, v);
        }

        span.end(out);
    }

    if let Some(glyphs) = glyphs {
        let bottom = outer.bottom() - 1;
        let overlaps_top = model.has(Sides::TOP) && bottom == outer.y;
        if model.has(Sides::BOTTOM) && !overlaps_top {
            out.cursor_move(outer.x, bottom);
            span.begin(out);
            span.border(out, &glyphs.bottom_row(model.edges, outer.width));
            span.end(out);
        }
    }
}

/// `base + offset`, clamped to the 1-based screen.
fn offset_coord(base: u16, offset: i32) -> u16 {
    let coord = (i32::from(base) + offset).max(1);
    u16::try_from(coord).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Border, Color, Padding, Position, Size, Style};

    fn frame(scene: &Scene) -> String {
        let mut out = OutputBuffer::new();
        paint_frame(scene, &mut out);
        String::from_utf8(out.as_bytes().to_vec()).unwrap()
    }

    fn node_bytes(node: &Node) -> String {
        let mut out = OutputBuffer::new();
        paint_node(node, &mut out);
        String::from_utf8(out.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn test_frame_starts_with_clear() {
        assert_eq!(frame(&Scene::new()), "\x1b[2J\x1b[1;1H");
    }

    #[test]
    fn test_hidden_node_emits_nothing() {
        let node = Node::boxed(Position::new(1, 1), Size::new(10, 4))
            .with_style(Style::new().border(Border::solid()));
        let empty = frame(&Scene::new());
        let hidden = frame(&Scene::from(vec![node.with_visible(false)]));
        assert_eq!(hidden, empty);
    }

    #[test]
    fn test_bordered_box_rows() {
        let node = Node::boxed(Position::new(2, 3), Size::new(4, 3))
            .with_style(Style::new().border(Border::solid()));
        assert_eq!(
            node_bytes(&node),
            "\x1b[3;2H┌──┐\x1b[4;2H│  │\x1b[5;2H└──┘\x1b[0m\x1b[1;1H"
        );
    }

    #[test]
    fn test_label_without_border_is_centred() {
        let node = Node::sized_label(Position::new(1, 1), Size::new(6, 3), "hi");
        assert_eq!(
            node_bytes(&node),
            "\x1b[1;1H      \x1b[2;1H  hi  \x1b[3;1H      \x1b[0m\x1b[1;1H"
        );
    }

    #[test]
    fn test_label_padding_shifts_text() {
        let style = Style::new().padding(Padding {
            left: 2,
            ..Padding::default()
        });
        let node = Node::sized_label(Position::new(1, 1), Size::new(6, 1), "ab").with_style(style);
        // Content is 4 wide starting 2 cells in: "  " + " ab " .
        assert_eq!(node_bytes(&node), "\x1b[1;1H   ab \x1b[0m\x1b[1;1H");
    }

    #[test]
    fn test_text_color_wraps_only_text() {
        let node = Node::sized_label(Position::new(1, 1), Size::new(4, 1), "hi")
            .with_style(Style::new().color(Color::Cyan));
        assert_eq!(
            node_bytes(&node),
            "\x1b[1;1H \x1b[36mhi\x1b[39m \x1b[0m\x1b[1;1H"
        );
    }

    #[test]
    fn test_background_wraps_each_row() {
        let node = Node::boxed(Position::new(1, 1), Size::new(2, 1))
            .with_style(Style::new().background(Color::Red));
        assert_eq!(node_bytes(&node), "\x1b[1;1H\x1b[41m  \x1b[49m\x1b[0m\x1b[1;1H");
    }

    #[test]
    fn test_overflowing_word_is_written_whole() {
        let node = Node::sized_label(Position::new(1, 1), Size::new(4, 1), "abcdefgh");
        assert_eq!(node_bytes(&node), "\x1b[1;1Habcdefgh\x1b[0m\x1b[1;1H");
    }

    #[test]
    fn test_degenerate_box_draws_no_content() {
        let node = Node::sized_label(Position::new(1, 1), Size::new(2, 2), "hi")
            .with_style(Style::new().border(Border::solid()));
        assert_eq!(node_bytes(&node), "\x1b[1;1H┌┐\x1b[2;1H└┘\x1b[0m\x1b[1;1H");
    }

    #[test]
    fn test_single_row_border_is_not_drawn_twice() {
        let node = Node::boxed(Position::new(1, 1), Size::new(3, 1))
            .with_style(Style::new().border(Border::double()));
        assert_eq!(node_bytes(&node), "\x1b[1;1H╔═╗\x1b[0m\x1b[1;1H");
    }

    #[test]
    fn test_single_column_border_stays_one_cell_wide() {
        let node = Node::boxed(Position::new(1, 1), Size::new(1, 3))
            .with_style(Style::new().border(Border::solid()));
        assert_eq!(
            node_bytes(&node),
            "\x1b[1;1H┌\x1b[2;1H│\x1b[3;1H└\x1b[0m\x1b[1;1H"
        );
    }

    #[test]
    fn test_single_column_right_border_only() {
        let node = Node::boxed(Position::new(1, 1), Size::new(1, 1)).with_style(
            Style::new().border(Border::solid().with_sides(Sides::RIGHT)),
        );
        assert_eq!(node_bytes(&node), "\x1b[1;1H│\x1b[0m\x1b[1;1H");
    }

    #[test]
    fn test_icon_is_centred_in_full_box() {
        let node = Node::icon(IconVariant::Directory, Position::new(5, 4), Size::new(12, 6))
            .with_style(Style::new().border(Border::solid()).padding(Padding::uniform(3)));
        let bytes = node_bytes(&node);
        // (12 - 8) / 2 = 2 columns, (6 - 4) / 2 = 1 row; border and padding ignored.
        assert!(bytes.starts_with("\x1b[5;7H┌─╲____┐\x1b[6;7H│      │"));
        assert!(bytes.contains("\x1b[8;7H└──────┘"));
    }

    #[test]
    fn test_icon_larger_than_box_clamps_to_screen() {
        let node = Node::icon(IconVariant::Trash, Position::new(1, 1), Size::new(2, 2));
        assert!(node_bytes(&node).starts_with("\x1b[1;1H  ┌┄┬┬┄┐"));
    }

    #[test]
    fn test_invalid_node_is_skipped() {
        let bad = Node::boxed(Position::new(0, 1), Size::new(3, 3))
            .with_style(Style::new().border(Border::solid()));
        let good = Node::boxed(Position::new(1, 1), Size::new(2, 2))
            .with_style(Style::new().border(Border::solid()));

        let scene = Scene::from(vec![bad, good.clone()]);
        let mut out = OutputBuffer::new();
        let report = paint_frame(&scene, &mut out);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.painted, 1);

        let only_good = frame(&Scene::from(vec![good]));
        assert_eq!(String::from_utf8(out.as_bytes().to_vec()).unwrap(), only_good);
    }

    #[test]
    fn test_renderer_stats() {
        let scene = Scene::from(vec![Node::label(Position::new(1, 1), "hi")]);
        let mut renderer = Renderer::new();
        let mut sink = Vec::new();
        renderer.render_to(&scene, &mut sink).unwrap();
        renderer.render_to(&scene, &mut sink).unwrap();

        assert_eq!(renderer.stats().frames, 2);
        assert_eq!(renderer.stats().bytes_written, sink.len() as u64);
    }
}
