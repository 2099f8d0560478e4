//! Event handler registry for console actor implementations.
//!
//! A [`ConsoleActor`](super::ConsoleActor) implementation can keep an
//! [`EventEmitter`], forward [`on`](super::ConsoleActor::on) to
//! [`EventEmitter::on`], and call [`EventEmitter::emit`] from its transport
//! when the device sends an event.
//!
//! # Example
//!
//! ```ignore
//! let emitter = EventEmitter::new();
//! emitter.on(ConsoleEvent::PageError, Box::new(|payload| println!("{payload}")));
//! emitter.emit(ConsoleEvent::PageError, json!({ "errorMessage": "boom" }));
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use serde_json::Value;
use tracing::trace;

use crate::protocol::ConsoleEvent;

use super::EventHandler;

// ============================================================================
// Types
// ============================================================================

/// Shared handler as stored in the registry.
type SharedHandler = Arc<dyn Fn(Value) + Send + Sync + 'static>;

/// Map of event kinds to their handlers, in registration order.
type HandlerMap = FxHashMap<ConsoleEvent, Vec<SharedHandler>>;

// ============================================================================
// EventEmitter
// ============================================================================

/// Additive, thread-safe event handler registry.
#[derive(Default)]
pub struct EventEmitter {
    handlers: Mutex<HandlerMap>,
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handlers = self.handlers.lock();
        f.debug_struct("EventEmitter")
            .field(
                "console_api_call",
                &handlers.get(&ConsoleEvent::ConsoleApiCall).map_or(0, Vec::len),
            )
            .field(
                "page_error",
                &handlers.get(&ConsoleEvent::PageError).map_or(0, Vec::len),
            )
            .finish()
    }
}

impl EventEmitter {
    /// Creates an empty registry.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler. Existing handlers are kept.
    pub fn on(&self, event: ConsoleEvent, handler: EventHandler) {
        self.handlers
            .lock()
            .entry(event)
            .or_default()
            .push(Arc::from(handler));
    }

    /// Calls every handler registered for `event` with a copy of `payload`.
    ///
    /// Handlers run outside the registry lock, so they may register further
    /// handlers. Returns the number of handlers called.
    pub fn emit(&self, event: ConsoleEvent, payload: Value) -> usize {
        let handlers: Vec<SharedHandler> = self
            .handlers
            .lock()
            .get(&event)
            .cloned()
            .unwrap_or_default();

        trace!(%event, handlers = handlers.len(), "Emitting event");

        for handler in &handlers {
            handler(payload.clone());
        }

        handlers.len()
    }

    /// Returns the number of handlers registered for `event`.
    #[inline]
    #[must_use]
    pub fn handler_count(&self, event: ConsoleEvent) -> usize {
        self.handlers.lock().get(&event).map_or(0, Vec::len)
    }

    /// Returns `true` if at least one handler is registered for `event`.
    #[inline]
    #[must_use]
    pub fn has_handlers(&self, event: ConsoleEvent) -> bool {
        self.handler_count(event) > 0
    }

    /// Drops every registered handler.
    pub fn clear(&self) {
        let removed: HandlerMap = std::mem::take(&mut *self.handlers.lock());
        trace!(events = removed.len(), "Cleared event handlers");
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn test_emit_reaches_all_handlers_in_order() {
        let emitter = EventEmitter::new();
        let seen: Arc<Mutex<Vec<(&str, Value)>>> = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second"] {
            let seen = Arc::clone(&seen);
            emitter.on(
                ConsoleEvent::ConsoleApiCall,
                Box::new(move |payload: Value| seen.lock().push((tag, payload))),
            );
        }

        let called = emitter.emit(ConsoleEvent::ConsoleApiCall, json!({ "level": "log" }));

        assert_eq!(called, 2);
        let seen = seen.lock();
        assert_eq!(seen[0].0, "first");
        assert_eq!(seen[1].0, "second");
        assert_eq!(seen[1].1, json!({ "level": "log" }));
    }

    #[test]
    fn test_emit_without_handlers() {
        let emitter = EventEmitter::new();
        assert_eq!(emitter.emit(ConsoleEvent::PageError, json!(null)), 0);
        assert!(!emitter.has_handlers(ConsoleEvent::PageError));
    }

    #[test]
    fn test_events_are_independent() {
        let emitter = EventEmitter::new();
        emitter.on(ConsoleEvent::PageError, Box::new(|_: Value| {}));

        assert_eq!(emitter.handler_count(ConsoleEvent::PageError), 1);
        assert_eq!(emitter.handler_count(ConsoleEvent::ConsoleApiCall), 0);
    }

    #[test]
    fn test_handler_may_register_during_emit() {
        let emitter = Arc::new(EventEmitter::new());
        let inner = Arc::clone(&emitter);
        emitter.on(
            ConsoleEvent::ConsoleApiCall,
            Box::new(move |_: Value| inner.on(ConsoleEvent::PageError, Box::new(|_: Value| {}))),
        );

        emitter.emit(ConsoleEvent::ConsoleApiCall, json!({}));
        assert!(emitter.has_handlers(ConsoleEvent::PageError));
    }

    #[test]
    fn test_clear() {
        let emitter = EventEmitter::new();
        emitter.on(ConsoleEvent::ConsoleApiCall, Box::new(|_: Value| {}));
        emitter.clear();
        assert!(!emitter.has_handlers(ConsoleEvent::ConsoleApiCall));
    }
}
