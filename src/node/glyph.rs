//! Glyph table: fixed multi-line art for icon nodes.

use crate::error::Error;
use crate::text::display_width;
use std::str::FromStr;

const DIRECTORY_ART: &str = "┌─╲____┐\n│      │\n│      │\n└──────┘";
const FILE_ART: &str = " ╱─────┐\n╱ ╲    │\n╲ ╱    │\n └─────┘";
const TRASH_ART: &str = "  ┌┄┬┬┄┐\n ┌─┬──┬─┐\n ╲      ╱\n ┕━━━━━━┙";

/// Icon variants with an entry in the glyph table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconVariant {
    /// A folder.
    Directory,
    /// A dog-eared page.
    File,
    /// A waste bin.
    Trash,
}

impl IconVariant {
    /// Every variant, in table order.
    pub const ALL: [Self; 3] = [Self::Directory, Self::File, Self::Trash];

    /// The raw art, lines separated by `\n`.
    pub const fn art(self) -> &'static str {
        match self {
            Self::Directory => DIRECTORY_ART,
            Self::File => FILE_ART,
            Self::Trash => TRASH_ART,
        }
    }

    /// Iterate over the art's lines.
    pub fn lines(self) -> impl Iterator<Item = &'static str> {
        self.art().split('\n')
    }

    /// Art width: the widest line in columns.
    pub fn width(self) -> usize {
        self.lines().map(display_width).max().unwrap_or(0)
    }

    /// Art height: the number of lines.
    pub fn height(self) -> usize {
        self.lines().count()
    }

    /// Table key of the variant.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Directory => "DIRECTORY",
            Self::File => "FILE",
            Self::Trash => "TRASH",
        }
    }
}

impl FromStr for IconVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownGlyph(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_art_dimensions() {
        for variant in IconVariant::ALL {
            assert_eq!(variant.height(), 4, "{variant:?}");
        }
        assert_eq!(IconVariant::Directory.width(), 8);
        assert_eq!(IconVariant::File.width(), 8);
        assert_eq!(IconVariant::Trash.width(), 9);
    }

    #[test]
    fn test_parse_known_keys() {
        assert_eq!("DIRECTORY".parse::<IconVariant>().unwrap(), IconVariant::Directory);
        assert_eq!("trash".parse::<IconVariant>().unwrap(), IconVariant::Trash);
    }

    #[test]
    fn test_parse_unknown_key_fails() {
        let err = "HACK".parse::<IconVariant>().unwrap_err();
        assert!(matches!(err, Error::UnknownGlyph(ref key) if key == "HACK"));
    }
}
