//! Keyboard input: raw byte chunks in, logical keys out.
//!
//! - [`InputSource`]: where chunks come from (stdin, or a script in tests)
//! - [`decode`]: the fixed control-sequence table
//! - [`Dispatcher`]: calls the single registered [`KeyHandler`]

mod dispatcher;
mod key;
mod source;

pub use dispatcher::{Dispatch, Dispatcher, KeyHandler};
pub use key::{decode, Key};
pub use source::{InputSource, ScriptedSource, StdinSource};
