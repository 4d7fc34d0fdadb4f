//! Style: border, background, padding and text colour attached to a node.

use crate::error::Error;
use bitflags::bitflags;
use std::str::FromStr;

/// Named terminal colour.
///
/// These map onto the 8 basic ANSI colours plus bright black ("gray"),
/// which every terminal renders without true-colour support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// ANSI black.
    Black,
    /// ANSI red.
    Red,
    /// ANSI green.
    Green,
    /// ANSI yellow.
    Yellow,
    /// ANSI blue.
    Blue,
    /// ANSI magenta.
    Magenta,
    /// ANSI cyan.
    Cyan,
    /// ANSI white.
    White,
    /// Bright black.
    Gray,
}

impl Color {
    /// SGR parameter selecting this colour as foreground.
    pub const fn fg_code(self) -> u8 {
        match self {
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
            Self::Gray => 90,
        }
    }

    /// SGR parameter selecting this colour as background.
    pub const fn bg_code(self) -> u8 {
        self.fg_code() + 10
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "black" => Self::Black,
            "red" => Self::Red,
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "blue" => Self::Blue,
            "magenta" => Self::Magenta,
            "cyan" => Self::Cyan,
            "white" => Self::White,
            "gray" | "grey" => Self::Gray,
            other => return Err(Error::UnknownColor(other.to_string())),
        })
    }
}

/// Line style of a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderKind {
    /// `┌─┐` light lines.
    #[default]
    Solid,
    /// `┄┆` dashed lines with light corners.
    Dotted,
    /// `╔═╗` double lines.
    Double,
}

impl FromStr for BorderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dotted" => Ok(Self::Dotted),
            "double" => Ok(Self::Double),
            other => Err(Error::UnknownBorderKind(other.to_string())),
        }
    }
}

bitflags! {
    /// Which sides of a box carry a border.
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Sides: u8 {
        /// Top edge.
        const TOP = 0b0001;
        /// Bottom edge.
        const BOTTOM = 0b0010;
        /// Left edge.
        const LEFT = 0b0100;
        /// Right edge.
        const RIGHT = 0b1000;
    }
}

impl Default for Sides {
    fn default() -> Self {
        Self::all()
    }
}

impl std::fmt::Debug for Sides {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// Border drawn around a box or label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Border {
    /// Line style.
    pub kind: BorderKind,
    /// Colour of the border glyphs.
    pub color: Option<Color>,
    /// Enabled sides.
    pub sides: Sides,
}

impl Border {
    /// A border of the given kind on all four sides.
    pub fn new(kind: BorderKind) -> Self {
        Self {
            kind,
            color: None,
            sides: Sides::all(),
        }
    }

    /// A solid border on all four sides.
    pub fn solid() -> Self {
        Self::new(BorderKind::Solid)
    }

    /// A dotted border on all four sides.
    pub fn dotted() -> Self {
        Self::new(BorderKind::Dotted)
    }

    /// A double border on all four sides.
    pub fn double() -> Self {
        Self::new(BorderKind::Double)
    }

    /// Set the border colour.
    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Restrict the border to the given sides.
    #[must_use]
    pub const fn with_sides(mut self, sides: Sides) -> Self {
        self.sides = sides;
        self
    }
}

/// Inner spacing between the border and the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Padding {
    /// Rows above the content.
    pub top: u16,
    /// Rows below the content.
    pub bottom: u16,
    /// Columns left of the content.
    pub left: u16,
    /// Columns right of the content.
    pub right: u16,
}

impl Padding {
    /// The same padding on every side.
    pub const fn uniform(n: u16) -> Self {
        Self {
            top: n,
            bottom: n,
            left: n,
            right: n,
        }
    }

    /// Vertical and horizontal padding.
    pub const fn symmetric(vertical: u16, horizontal: u16) -> Self {
        Self {
            top: vertical,
            bottom: vertical,
            left: horizontal,
            right: horizontal,
        }
    }
}

/// Visual style of a node. Styles are attached, never inherited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Optional border.
    pub border: Option<Border>,
    /// Optional background fill colour.
    pub background: Option<Color>,
    /// Padding inside the border.
    pub padding: Padding,
    /// Foreground colour of the text or glyph art.
    pub color: Option<Color>,
}

impl Style {
    /// An empty style: no border, background, padding or colour.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the border.
    #[must_use]
    pub const fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    /// Set the background colour.
    #[must_use]
    pub const fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Set the padding.
    #[must_use]
    pub const fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Set the text colour.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}
