//! Input Actor: Dedicated thread for reading raw input chunks.
//!
//! Reads block, so they happen off the engine thread. The actor never
//! decodes or handles anything itself; chunks are forwarded verbatim and
//! dispatched on the engine thread, between frames.

use super::messages::InputMessage;
use crate::input::InputSource;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Input actor that forwards chunks from an [`InputSource`].
pub struct InputActor {
    /// Handle to the reader thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
    /// Receiver for input messages.
    input_rx: Receiver<InputMessage>,
}

impl InputActor {
    /// Spawn the reader thread over `source`.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the reader thread.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn<S>(source: S) -> Self
    where
        S: InputSource + Send + 'static,
    {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();
        let (input_tx, input_rx) = unbounded();

        let handle = thread::Builder::new()
            .name("tcanvas-input".to_string())
            .spawn(move || {
                Self::run_loop(source, &input_tx, &shutdown_clone);
            })
            .expect("Failed to spawn input thread");

        Self {
            handle: Some(handle),
            shutdown,
            input_rx,
        }
    }

    /// Get a reference to the input receiver.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<InputMessage> {
        &self.input_rx
    }

    /// Signal the reader to stop after its current read.
    ///
    /// A read already blocked on the terminal cannot be interrupted; the
    /// thread is then left to end with the process.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the reader thread to finish.
    ///
    /// Only returns once the source yields again or ends, so call this for
    /// finite sources only.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main reader loop.
    fn run_loop<S: InputSource>(
        mut source: S,
        input_tx: &Sender<InputMessage>,
        shutdown: &Arc<AtomicBool>,
    ) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            let message = match source.next_chunk() {
                Ok(Some(chunk)) => InputMessage::Chunk(chunk),
                Ok(None) => {
                    let _ = input_tx.send(InputMessage::Closed);
                    break;
                }
                Err(e) => {
                    let _ = input_tx.send(InputMessage::Error(e.to_string()));
                    break;
                }
            };

            if input_tx.send(message).is_err() {
                // Receiver dropped, exit
                break;
            }
        }
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
