//! Element-lifecycle dispatcher contract
//!
//! The host player detects video-element creation and notifies every
//! registered handler. Handlers implement the single-method
//! `ElementHandler` interface instead of passing a duck-typed callback
//! object around.

use std::sync::{Arc, Mutex};

use crate::element::VideoElement;

/// Creation callback implemented by fixup hooks
pub trait ElementHandler: Send + Sync {
    /// Invoked once per created element; `None` when no element is available
    fn on_create(&self, element: Option<&mut dyn VideoElement>);
}

/// Registration surface offered by the host's dispatcher
///
/// Registration is assumed always to succeed; there is no unregister
/// operation because hooks stay armed for the life of the host process.
pub trait ElementDispatcher: Send + Sync {
    /// Register a creation handler
    fn add_handler(&self, handler: Arc<dyn ElementHandler>);
}

/// In-memory dispatcher that hosts and tests drive by hand
#[derive(Default)]
pub struct InMemoryDispatcher {
    handlers: Mutex<Vec<Arc<dyn ElementHandler>>>,
}

impl InMemoryDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered handlers
    pub fn handler_count(&self) -> usize {
        self.handlers.lock().unwrap().len()
    }

    /// Invoke every registered handler with the new element, in
    /// registration order. Handlers run synchronously in the caller's
    /// context.
    pub fn notify_created(&self, mut element: Option<&mut dyn VideoElement>) {
        // Snapshot the list so a handler registering another handler
        // doesn't deadlock on the lock.
        let handlers: Vec<_> = self.handlers.lock().unwrap().clone();
        for handler in handlers {
            match element.as_deref_mut() {
                Some(e) => handler.on_create(Some(&mut *e)),
                None => handler.on_create(None),
            }
        }
    }
}

impl ElementDispatcher for InMemoryDispatcher {
    fn add_handler(&self, handler: Arc<dyn ElementHandler>) {
        self.handlers.lock().unwrap().push(handler);
    }
}
