//! Border glyph sets and the top/bottom border rows.

use crate::node::{BorderKind, Sides};

/// The six characters a border is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    /// Top and bottom edges.
    pub horizontal: char,
    /// Left and right edges.
    pub vertical: char,
    /// Top-left corner.
    pub top_left: char,
    /// Top-right corner.
    pub top_right: char,
    /// Bottom-left corner.
    pub bottom_left: char,
    /// Bottom-right corner.
    pub bottom_right: char,
}

impl BorderGlyphs {
    /// `┌─┐│└┘`
    pub const SOLID: Self = Self {
        horizontal: '─',
        vertical: '│',
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
    };

    /// Dashed edges, solid corners.
    pub const DOTTED: Self = Self {
        horizontal: '┄',
        vertical: '┆',
        ..Self::SOLID
    };

    /// `╔═╗║╚╝`
    pub const DOUBLE: Self = Self {
        horizontal: '═',
        vertical: '║',
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
    };

    /// Glyph set for a border kind.
    pub const fn for_kind(kind: BorderKind) -> &'static Self {
        match kind {
            BorderKind::Solid => &Self::SOLID,
            BorderKind::Dotted => &Self::DOTTED,
            BorderKind::Double => &Self::DOUBLE,
        }
    }

    /// Top border row, exactly `width` cells wide.
    ///
    /// A corner whose vertical side is disabled becomes a plain
    /// horizontal filler.
    pub fn top_row(&self, sides: Sides, width: u16) -> String {
        self.edge_row(sides, width, self.top_left, self.top_right)
    }

    /// Bottom border row, exactly `width` cells wide.
    pub fn bottom_row(&self, sides: Sides, width: u16) -> String {
        self.edge_row(sides, width, self.bottom_left, self.bottom_right)
    }

    fn edge_row(&self, sides: Sides, width: u16, left: char, right: char) -> String {
        let left = if sides.contains(Sides::LEFT) { left } else { self.horizontal };
        let right = if sides.contains(Sides::RIGHT) { right } else { self.horizontal };

        let mut row = String::with_capacity(usize::from(width) * 3);
        match width {
            0 => {}
            1 => row.push(left),
            _ => {
                row.push(left);
                row.extend(std::iter::repeat(self.horizontal).take(usize::from(width - 2)));
                row.push(right);
            }
        }
        row
    }
}
