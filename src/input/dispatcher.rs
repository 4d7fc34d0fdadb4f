//! Dispatcher: decode chunks and hand them to the registered key handler.

use super::key::{decode, Key};
use super::source::InputSource;
use crate::scene::Scene;
use std::io;

/// Receives every decoded key, with mutable access to the scene.
///
/// Implemented for any `FnMut(&Key, &mut Scene)` closure.
pub trait KeyHandler {
    /// Handle one key. Runs to completion before the next chunk is read
    /// and before the next frame is painted.
    fn keydown(&mut self, key: &Key, scene: &mut Scene);
}

impl<F> KeyHandler for F
where
    F: FnMut(&Key, &mut Scene),
{
    fn keydown(&mut self, key: &Key, scene: &mut Scene) {
        self(key, scene);
    }
}

/// What the caller should do after a chunk has been dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Keep going.
    Continue,
    /// The exit key was pressed.
    Exit,
}

/// Routes input to a single key handler.
#[derive(Default)]
pub struct Dispatcher {
    handler: Option<Box<dyn KeyHandler>>,
}

impl Dispatcher {
    /// A dispatcher with no handler; keys are decoded and dropped.
    pub fn new() -> Self {
        Self::default()
    }

    /// A dispatcher calling `handler`.
    pub fn with_handler(handler: impl KeyHandler + 'static) -> Self {
        Self {
            handler: Some(Box::new(handler)),
        }
    }

    /// Register `handler`, replacing any previous one.
    pub fn set_handler(&mut self, handler: impl KeyHandler + 'static) {
        self.handler = Some(Box::new(handler));
    }

    /// Whether a handler is registered.
    pub const fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Decode `chunk` and call the handler synchronously.
    ///
    /// The handler sees [`Key::Exit`] like any other key; afterwards
    /// [`Dispatch::Exit`] tells the caller to shut down.
    pub fn dispatch(&mut self, chunk: &[u8], scene: &mut Scene) -> Dispatch {
        let key = decode(chunk);
        tracing::trace!(?key, "keydown");

        if let Some(handler) = self.handler.as_mut() {
            handler.keydown(&key, scene);
        }

        if key == Key::Exit {
            Dispatch::Exit
        } else {
            Dispatch::Continue
        }
    }

    /// Dispatch chunks from `source` until the exit key or end of input.
    ///
    /// Returns [`Dispatch::Exit`] if the exit key stopped the pump and
    /// [`Dispatch::Continue`] if the source ran dry.
    pub fn pump<S: InputSource + ?Sized>(
        &mut self,
        source: &mut S,
        scene: &mut Scene,
    ) -> io::Result<Dispatch> {
        while let Some(chunk) = source.next_chunk()? {
            if self.dispatch(&chunk, scene) == Dispatch::Exit {
                return Ok(Dispatch::Exit);
            }
        }
        Ok(Dispatch::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedSource;
    use crate::node::{Node, Position};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_dispatch_calls_handler() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        let mut dispatcher = Dispatcher::with_handler(move |key: &Key, _: &mut Scene| {
            log.borrow_mut().push(key.clone());
        });

        let mut scene = Scene::new();
        assert_eq!(dispatcher.dispatch(b"\r", &mut scene), Dispatch::Continue);
        assert_eq!(dispatcher.dispatch(b"z", &mut scene), Dispatch::Continue);
        assert_eq!(dispatcher.dispatch(b"\x03", &mut scene), Dispatch::Exit);

        assert_eq!(
            *seen.borrow(),
            vec![Key::Enter, Key::Other("z".into()), Key::Exit]
        );
    }

    #[test]
    fn test_handler_mutates_scene() {
        let mut dispatcher = Dispatcher::with_handler(|key: &Key, scene: &mut Scene| {
            if *key == Key::ArrowRight {
                for node in scene.iter_mut() {
                    node.position.x += 1;
                }
            }
        });

        let mut scene = Scene::from(vec![Node::label(Position::new(3, 1), "x")]);
        dispatcher.dispatch(b"\x1b[C", &mut scene);
        dispatcher.dispatch(b"\x1b[C", &mut scene);
        assert_eq!(scene.nodes()[0].position.x, 5);
    }

    #[test]
    fn test_without_handler_exit_still_works() {
        let mut dispatcher = Dispatcher::new();
        assert!(!dispatcher.has_handler());
        assert_eq!(dispatcher.dispatch(b"\x03", &mut Scene::new()), Dispatch::Exit);
    }

    #[test]
    fn test_pump_stops_at_exit() {
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let mut dispatcher = Dispatcher::new();
        dispatcher.set_handler(move |_: &Key, _: &mut Scene| *counter.borrow_mut() += 1);

        let mut source = ScriptedSource::new([
            b"a".to_vec(),
            b"\x03".to_vec(),
            b"never".to_vec(),
        ]);
        let result = dispatcher.pump(&mut source, &mut Scene::new()).unwrap();

        assert_eq!(result, Dispatch::Exit);
        assert_eq!(*count.borrow(), 2);
        assert_eq!(source.remaining(), 1);
    }

    #[test]
    fn test_pump_until_end_of_input() {
        let mut dispatcher = Dispatcher::new();
        let mut source = ScriptedSource::new([b"a".to_vec()]);
        let result = dispatcher.pump(&mut source, &mut Scene::new()).unwrap();
        assert_eq!(result, Dispatch::Continue);
    }
}
