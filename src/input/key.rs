//! Logical keys and the byte-chunk decode table.

/// A decoded keyboard event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Ctrl-C: leave the program.
    Exit,
    /// A lone escape byte.
    Esc,
    /// Carriage return.
    Enter,
    /// DEL, as sent by the backspace key.
    Backspace,
    /// `CSI A`.
    ArrowUp,
    /// `CSI B`.
    ArrowDown,
    /// `CSI D`.
    ArrowLeft,
    /// `CSI C`.
    ArrowRight,
    /// Anything else, passed through verbatim.
    Other(String),
}

const TABLE: [(&[u8], Key); 8] = [
    (b"\x03", Key::Exit),
    (b"\x1b", Key::Esc),
    (b"\r", Key::Enter),
    (b"\x7f", Key::Backspace),
    (b"\x1b[A", Key::ArrowUp),
    (b"\x1b[B", Key::ArrowDown),
    (b"\x1b[C", Key::ArrowRight),
    (b"\x1b[D", Key::ArrowLeft),
];

/// Decode one raw input chunk.
///
/// The whole chunk is matched against the control-sequence table; a chunk
/// that matches nothing is returned as [`Key::Other`] holding its text
/// (invalid UTF-8 is replaced, never dropped).
pub fn decode(chunk: &[u8]) -> Key {
    TABLE
        .iter()
        .find(|(bytes, _)| *bytes == chunk)
        .map_or_else(
            || Key::Other(String::from_utf8_lossy(chunk).into_owned()),
            |(_, key)| key.clone(),
        )
}

impl Key {
    /// The character, if this is a single printable character.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Other(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if !c.is_control() => Some(c),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_control_keys() {
        assert_eq!(decode(b"\x03"), Key::Exit);
        assert_eq!(decode(b"\x1b"), Key::Esc);
        assert_eq!(decode(b"\r"), Key::Enter);
        assert_eq!(decode(b"\x7f"), Key::Backspace);
    }

    #[test]
    fn test_decode_arrows() {
        assert_eq!(decode(b"\x1b[A"), Key::ArrowUp);
        assert_eq!(decode(b"\x1b[B"), Key::ArrowDown);
        assert_eq!(decode(b"\x1b[C"), Key::ArrowRight);
        assert_eq!(decode(b"\x1b[D"), Key::ArrowLeft);
    }

    #[test]
    fn test_decode_passes_through_unknown() {
        assert_eq!(decode(b"q"), Key::Other("q".into()));
        assert_eq!(decode(b"\x1b[H"), Key::Other("\x1b[H".into()));
        assert_eq!(decode("é".as_bytes()), Key::Other("é".into()));
    }

    #[test]
    fn test_decode_matches_whole_chunk_only() {
        // Two keys arriving in one chunk are not split apart.
        assert_eq!(decode(b"\x1b[A\x1b[A"), Key::Other("\x1b[A\x1b[A".into()));
    }

    #[test]
    fn test_decode_invalid_utf8_is_kept() {
        assert_eq!(decode(&[0xff]), Key::Other("\u{fffd}".into()));
    }

    #[test]
    fn test_as_char() {
        assert_eq!(decode(b"x").as_char(), Some('x'));
        assert_eq!(decode(b"xy").as_char(), None);
        assert_eq!(Key::Enter.as_char(), None);
        assert_eq!(decode(b"\t").as_char(), None);
    }
}
