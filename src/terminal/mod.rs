//! Terminal I/O: the frame output buffer and raw-mode handling.

mod guard;
mod output;

pub use guard::TerminalGuard;
pub use output::OutputBuffer;
