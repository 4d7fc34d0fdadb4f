//! Engine: Main coordinator that ties actors, scene and renderer together.
//!
//! The engine owns the [`Scene`], paints it on every tick and feeds key
//! presses to the registered handler. Ticks and input arrive from
//! background actors but are handled one at a time on the caller's thread,
//! so a repaint never observes a half-applied key handler.

use super::messages::InputMessage;
use super::{InputActor, TickerActor};
use crate::error::Result;
use crate::input::{Dispatch, Dispatcher, InputSource, KeyHandler, StdinSource};
use crate::render::Renderer;
use crate::scene::Scene;
use crate::terminal::{OutputBuffer, TerminalGuard};
use crossbeam_channel::select;
use std::io::{self, Write};
use std::time::Duration;

/// Configuration for the Engine.
#[derive(Debug, Clone)]
pub struct CanvasConfig {
    /// Target frames per second.
    pub target_fps: u32,
    /// Hide the cursor while running.
    pub hide_cursor: bool,
    /// Whether to use alternate screen buffer.
    pub alternate_screen: bool,
    /// Largest chunk read from stdin at once.
    pub read_buffer_size: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            target_fps: 30,
            hide_cursor: true,
            alternate_screen: false,
            read_buffer_size: 1024,
        }
    }
}

impl CanvasConfig {
    /// Time between two ticks.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps.max(1)
    }
}

/// The canvas engine.
pub struct Engine {
    /// Configuration.
    config: CanvasConfig,
    /// The application's nodes.
    scene: Scene,
    /// Frame painter.
    renderer: Renderer,
    /// Key routing.
    dispatcher: Dispatcher,
    /// Whether the engine is running.
    running: bool,
}

impl Engine {
    /// Create an engine over `scene` with default configuration.
    pub fn new(scene: Scene) -> Self {
        Self::with_config(scene, CanvasConfig::default())
    }

    /// Create an engine over `scene` with custom configuration.
    pub fn with_config(scene: Scene, config: CanvasConfig) -> Self {
        Self {
            config,
            scene,
            renderer: Renderer::new(),
            dispatcher: Dispatcher::new(),
            running: false,
        }
    }

    /// Register the key handler, replacing any previous one.
    pub fn on_key(&mut self, handler: impl KeyHandler + 'static) {
        self.dispatcher.set_handler(handler);
    }

    /// Get the configuration.
    pub const fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Get a reference to the scene.
    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Get a mutable reference to the scene.
    pub const fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Get the renderer (for its statistics).
    pub const fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Check if the engine is still running.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the engine after the current event.
    pub const fn stop(&mut self) {
        self.running = false;
    }

    /// Paint one frame of the current scene to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn tick<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.renderer.render_to(&self.scene, out)
    }

    /// Dispatch one raw input chunk; the exit key stops the engine.
    pub fn handle_chunk(&mut self, chunk: &[u8]) -> Dispatch {
        let dispatch = self.dispatcher.dispatch(chunk, &mut self.scene);
        if dispatch == Dispatch::Exit {
            self.running = false;
        }
        dispatch
    }

    /// Run on the real terminal until the exit key or end of input.
    ///
    /// Raw mode is entered for the duration of the call, and the cursor is
    /// visible again when it returns.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup or output fails.
    pub fn run(&mut self) -> Result<()> {
        let mut guard = TerminalGuard::enter(&self.config)?;
        let source = StdinSource::new(self.config.read_buffer_size);
        let result = self.run_with(source, &mut io::stdout());
        guard.restore();
        result
    }

    /// Run against any input source and writer.
    ///
    /// Paints immediately, then once per tick, dispatching input chunks as
    /// they arrive. On exit the cursor-show sequence is written to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn run_with<S, W>(&mut self, source: S, out: &mut W) -> Result<()>
    where
        S: InputSource + Send + 'static,
        W: Write,
    {
        let ticker = TickerActor::spawn(self.config.frame_interval());
        let input = InputActor::spawn(source);
        self.running = true;

        tracing::info!(
            fps = self.config.target_fps,
            nodes = self.scene.len(),
            "engine started"
        );

        self.tick(out)?;

        while self.running {
            select! {
                recv(input.receiver()) -> message => match message {
                    Ok(InputMessage::Chunk(chunk)) => {
                        self.handle_chunk(&chunk);
                    }
                    Ok(InputMessage::Error(error)) => {
                        tracing::warn!(%error, "input read failed");
                        self.running = false;
                    }
                    Ok(InputMessage::Closed) | Err(_) => {
                        tracing::info!("input closed");
                        self.running = false;
                    }
                },
                recv(ticker.receiver()) -> tick => {
                    if tick.is_ok() {
                        self.tick(out)?;
                    }
                }
            }
        }

        ticker.join();
        input.shutdown();

        let mut restore = OutputBuffer::with_capacity(16);
        restore.reset_attrs();
        restore.cursor_show();
        restore.flush_to(out)?;

        tracing::info!(frames = self.renderer.stats().frames, "engine stopped");
        Ok(())
    }
}
