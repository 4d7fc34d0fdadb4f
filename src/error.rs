//! Error type shared by the whole crate.

use std::io;

/// Errors produced while building nodes or driving the terminal.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An icon key that has no entry in the glyph table.
    #[error("unknown glyph variant `{0}`")]
    UnknownGlyph(String),

    /// A colour name outside the terminal palette.
    #[error("unknown color `{0}`")]
    UnknownColor(String),

    /// A border kind other than solid, dotted or double.
    #[error("unknown border kind `{0}`")]
    UnknownBorderKind(String),

    /// A node that cannot be placed on screen.
    #[error("node {index} is invalid: {reason}")]
    InvalidNode {
        /// Paint-order index of the node in its scene.
        index: usize,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// Terminal setup or output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
