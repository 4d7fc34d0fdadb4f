//! Message types for actor communication.

/// Messages from the input reader thread to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMessage {
    /// One raw chunk, exactly as read.
    Chunk(Vec<u8>),

    /// Reading failed. The reader exits after sending this.
    Error(String),

    /// The source is exhausted (e.g. stdin reached EOF).
    Closed,
}
