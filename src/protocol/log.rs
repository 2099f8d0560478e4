//! Console event types.
//!
//! A console actor emits two event kinds that the log stream bridges:
//!
//! | Event | Payload |
//! |-------|---------|
//! | `console-api-call` | A `console.*` call made by the app |
//! | `page-error` | An uncaught error or CSS/JS warning |

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// ConsoleEvent
// ============================================================================

/// Console actor event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsoleEvent {
    /// Console API call (`console.log`, `console.warn`, ...).
    #[serde(rename = "console-api-call")]
    ConsoleApiCall,

    /// Page error.
    #[serde(rename = "page-error")]
    PageError,
}

impl ConsoleEvent {
    /// Returns the event name used for registration on the actor.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConsoleApiCall => "console-api-call",
            Self::PageError => "page-error",
        }
    }

    /// Parses an event name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "console-api-call" => Some(Self::ConsoleApiCall),
            "page-error" => Some(Self::PageError),
            _ => None,
        }
    }
}

impl fmt::Display for ConsoleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// LogRecord
// ============================================================================

/// One item of a log stream.
///
/// `payload` is the value the actor emitted, untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Event the payload arrived on.
    pub event: ConsoleEvent,

    /// Event payload as emitted.
    pub payload: Value,
}

impl LogRecord {
    /// Creates a new log record.
    #[inline]
    #[must_use]
    pub fn new(event: ConsoleEvent, payload: Value) -> Self {
        Self { event, payload }
    }

    /// Returns `true` if the record came from a `page-error` event.
    #[inline]
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.event == ConsoleEvent::PageError
    }

    /// Returns the console level (`log`, `warn`, ...).
    ///
    /// Page errors report `error`.
    #[must_use]
    pub fn level(&self) -> Option<&str> {
        match self.event {
            ConsoleEvent::PageError => Some("error"),
            ConsoleEvent::ConsoleApiCall => self.payload.get("level").and_then(Value::as_str),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
