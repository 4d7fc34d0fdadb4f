//! # tcanvas
//!
//! An immediate-mode terminal canvas.
//!
//! The application keeps a flat, ordered [`Scene`] of nodes (boxes, text
//! labels and glyph icons) at absolute screen positions. Every tick the
//! whole screen is cleared and the scene repainted; key presses are
//! decoded from raw terminal input and handed to a single handler that
//! may mutate the scene before the next frame.
//!
//! ## Core Concepts
//!
//! - **Box model**: border, padding and content rectangles per node
//! - **Text layout**: greedy word wrap, centred horizontally and vertically
//! - **Glyphs**: fixed ASCII-art icons centred in their node
//! - **Full repaint**: no diffing; one buffered write per frame
//!
//! ## Example
//!
//! ```rust,no_run
//! use tcanvas::{Border, Engine, Key, Node, Position, Scene, Size, Style};
//!
//! let scene = Scene::from(vec![
//!     Node::boxed(Position::new(1, 1), Size::new(20, 5))
//!         .with_style(Style::new().border(Border::solid())),
//!     Node::sized_label(Position::new(2, 2), Size::new(18, 3), "hello"),
//! ]);
//!
//! let mut engine = Engine::new(scene);
//! engine.on_key(|key: &Key, scene: &mut Scene| {
//!     if *key == Key::ArrowRight {
//!         for node in scene.iter_mut() {
//!             node.position.x += 1;
//!         }
//!     }
//! });
//! engine.run()?;
//! # Ok::<(), tcanvas::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod error;
pub mod input;
pub mod layout;
pub mod node;
pub mod render;
pub mod scene;
pub mod terminal;
pub mod text;

// Re-exports for convenience
pub use actor::{CanvasConfig, Engine, InputActor, TickerActor};
pub use error::{Error, Result};
pub use input::{decode, Dispatch, Dispatcher, InputSource, Key, KeyHandler, StdinSource};
pub use layout::{BoxModel, Rect};
pub use node::{
    Border, BorderKind, Color, IconVariant, Node, NodeKind, Padding, Position, Sides, Size, Style,
};
pub use render::{paint_frame, BorderGlyphs, Renderer};
pub use scene::{NodeId, Scene};
pub use terminal::{OutputBuffer, TerminalGuard};
pub use text::wrap;
