//! Actor Model: background threads feeding a single-threaded engine.
//!
//! - **Ticker Actor**: Emits a tick every frame interval
//! - **Input Actor**: Reads raw input chunks, forwards them verbatim
//! - **Engine**: Receives both, repaints on ticks, dispatches keys
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     InputMessage    ┌──────────────┐
//! │ Input Thread │ ─────────────────▶  │              │
//! └──────────────┘                     │    Engine    │ ──▶ stdout
//! ┌──────────────┐        Tick         │  (owns Scene)│
//! │Ticker Thread │ ─────────────────▶  │              │
//! └──────────────┘                     └──────────────┘
//! ```

mod engine;
mod input;
mod messages;
mod ticker;

pub use engine::{CanvasConfig, Engine};
pub use input::InputActor;
pub use messages::InputMessage;
pub use ticker::{Tick, TickerActor};
