//! Drawable model: the nodes a scene is made of.
//!
//! A [`Node`] is one drawable unit (box, label or icon) placed at an
//! absolute, 1-based terminal position. Nodes are plain data; all
//! behaviour lives in [`crate::layout`] and [`crate::render`].

mod glyph;
mod style;

pub use glyph::IconVariant;
pub use style::{Border, BorderKind, Color, Padding, Sides, Style};

use crate::error::Result;
use crate::layout::Rect;
use crate::text::display_width;

/// Top-left corner of a node (1-based column and row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
}

impl Position {
    /// Create a position.
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Extent of a node in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Columns.
    pub width: u16,
    /// Rows.
    pub height: u16,
}

impl Size {
    /// Create a size.
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Variant-specific payload of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A plain rectangle: border and background only.
    Box,
    /// Wrapped, centred text.
    Label {
        /// Text to lay out; may contain hard line breaks.
        text: String,
    },
    /// Fixed glyph art centred in the node's box.
    Icon {
        /// Which art to draw.
        variant: IconVariant,
    },
}

/// One drawable unit of a scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Top-left corner.
    pub position: Position,
    /// Width and height.
    pub size: Size,
    /// Attached style.
    pub style: Style,
    /// Hidden nodes emit nothing.
    pub visible: bool,
    /// Box, label or icon payload.
    pub kind: NodeKind,
}

impl Node {
    fn new(kind: NodeKind, position: Position, size: Size) -> Self {
        Self {
            position,
            size,
            style: Style::default(),
            visible: true,
            kind,
        }
    }

    /// A box node.
    pub fn boxed(position: Position, size: Size) -> Self {
        Self::new(NodeKind::Box, position, size)
    }

    /// A label sized to its text.
    ///
    /// The size is the text's bounding box plus one cell on every side,
    /// computed once here. Later text edits do not resize the node.
    pub fn label(position: Position, text: impl Into<String>) -> Self {
        let text = text.into();
        let size = natural_size(&text);
        Self::new(NodeKind::Label { text }, position, size)
    }

    /// A label with an explicit size.
    pub fn sized_label(position: Position, size: Size, text: impl Into<String>) -> Self {
        Self::new(NodeKind::Label { text: text.into() }, position, size)
    }

    /// An icon node.
    pub fn icon(variant: IconVariant, position: Position, size: Size) -> Self {
        Self::new(NodeKind::Icon { variant }, position, size)
    }

    /// An icon node looked up by table key, e.g. `"DIRECTORY"`.
    pub fn icon_named(key: &str, position: Position, size: Size) -> Result<Self> {
        Ok(Self::icon(key.parse()?, position, size))
    }

    /// Replace the style.
    #[must_use]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set visibility.
    #[must_use]
    pub const fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// The full node rectangle.
    pub const fn rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            self.size.height,
        )
    }

    /// Label text, if this is a label.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Label { text } => Some(text),
            NodeKind::Box | NodeKind::Icon { .. } => None,
        }
    }

    /// Replace the label text. Returns `false` for non-label nodes.
    pub fn set_text(&mut self, new_text: impl Into<String>) -> bool {
        match &mut self.kind {
            NodeKind::Label { text } => {
                *text = new_text.into();
                true
            }
            NodeKind::Box | NodeKind::Icon { .. } => false,
        }
    }

    /// Check that the node can be placed on screen.
    ///
    /// Returns a short reason when it cannot.
    pub const fn validate(&self) -> std::result::Result<(), &'static str> {
        if self.position.x == 0 || self.position.y == 0 {
            return Err("position is 1-based; coordinate 0 is off screen");
        }
        if self.position.x.checked_add(self.size.width).is_none()
            || self.position.y.checked_add(self.size.height).is_none()
        {
            return Err("extent overflows the coordinate space");
        }
        Ok(())
    }
}

/// Bounding box of `text` plus a one-cell frame.
fn natural_size(text: &str) -> Size {
    let width = text.split('\n').map(display_width).max().unwrap_or(0);
    let height = text.split('\n').count();
    Size::new(
        u16::try_from(width + 2).unwrap_or(u16::MAX),
        u16::try_from(height + 2).unwrap_or(u16::MAX),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_label_natural_size() {
        let label = Node::label(Position::new(1, 1), "hi");
        assert_eq!(label.size, Size::new(4, 3));

        let multi = Node::label(Position::new(1, 1), "one\nthree\nx");
        assert_eq!(multi.size, Size::new(7, 5));
    }

    #[test]
    fn test_label_size_is_not_recomputed() {
        let mut label = Node::label(Position::new(1, 1), "hi");
        assert!(label.set_text("a much longer caption"));
        assert_eq!(label.size, Size::new(4, 3));
        assert_eq!(label.text(), Some("a much longer caption"));
    }

    #[test]
    fn test_set_text_on_box_is_rejected() {
        let mut node = Node::boxed(Position::new(1, 1), Size::new(3, 3));
        assert!(!node.set_text("nope"));
        assert_eq!(node.text(), None);
    }

    #[test]
    fn test_icon_named() {
        let icon = Node::icon_named("FILE", Position::new(2, 2), Size::new(12, 6)).unwrap();
        assert_eq!(icon.kind, NodeKind::Icon { variant: IconVariant::File });

        let err = Node::icon_named("PARENT", Position::new(2, 2), Size::new(12, 6));
        assert!(matches!(err, Err(Error::UnknownGlyph(_))));
    }

    #[test]
    fn test_defaults() {
        let node = Node::boxed(Position::new(1, 1), Size::new(3, 3));
        assert!(node.visible);
        assert_eq!(node.style, Style::default());
    }

    #[test]
    fn test_validate() {
        assert!(Node::boxed(Position::new(1, 1), Size::new(3, 3)).validate().is_ok());
        assert!(Node::boxed(Position::new(0, 1), Size::new(3, 3)).validate().is_err());
        assert!(Node::boxed(Position::new(u16::MAX, 1), Size::new(3, 3))
            .validate()
            .is_err());
    }
}
