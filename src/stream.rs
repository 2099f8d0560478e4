//! Event-to-stream bridge for console events.
//!
//! [`LogStream`] turns `console-api-call` and `page-error` event callbacks
//! into a push-driven [`Stream`] of [`LogRecord`]s. Handlers push into a
//! channel; the consumer polls the receiving end.
//!
//! # Ordering
//!
//! Records appear in the order the actor fires the events. Log and error
//! records interleave in delivery order.
//!
//! # Buffering
//!
//! By default the channel is unbounded. With
//! [`LogStreamOptions::with_buffer`] it holds at most `n` records and
//! records that do not fit are dropped with a warning.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::task::{Context, Poll};

use futures_util::Stream;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, warn};

use crate::protocol::{ConsoleEvent, LogRecord};
use crate::remote::ConsoleActor;

// ============================================================================
// LogStreamOptions
// ============================================================================

/// Selects which console events feed a [`LogStream`].
///
/// The default subscribes to console API calls only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogStreamOptions {
    /// Subscribe to `console-api-call` events.
    pub logs: bool,

    /// Subscribe to `page-error` events.
    pub errors: bool,

    /// Maximum buffered records. `None` means unbounded.
    pub buffer: Option<usize>,
}

impl Default for LogStreamOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl LogStreamOptions {
    /// Creates options for console API calls only, unbounded.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            logs: true,
            errors: false,
            buffer: None,
        }
    }

    /// Creates options for page errors only.
    #[inline]
    #[must_use]
    pub const fn errors_only() -> Self {
        Self {
            logs: false,
            errors: true,
            buffer: None,
        }
    }

    /// Creates options for both event kinds.
    #[inline]
    #[must_use]
    pub const fn all() -> Self {
        Self {
            logs: true,
            errors: true,
            buffer: None,
        }
    }

    /// Sets whether console API calls are streamed.
    #[inline]
    #[must_use]
    pub fn with_logs(mut self, logs: bool) -> Self {
        self.logs = logs;
        self
    }

    /// Sets whether page errors are streamed.
    #[inline]
    #[must_use]
    pub fn with_errors(mut self, errors: bool) -> Self {
        self.errors = errors;
        self
    }

    /// Bounds the stream buffer to `capacity` records (minimum 1).
    #[inline]
    #[must_use]
    pub fn with_buffer(mut self, capacity: usize) -> Self {
        self.buffer = Some(capacity.max(1));
        self
    }

    /// Returns the event kinds to subscribe to, logs first.
    #[must_use]
    pub fn event_kinds(&self) -> Vec<ConsoleEvent> {
        let mut events = Vec::with_capacity(2);
        if self.logs {
            events.push(ConsoleEvent::ConsoleApiCall);
        }
        if self.errors {
            events.push(ConsoleEvent::PageError);
        }
        events
    }
}

// ============================================================================
// Channel
// ============================================================================

/// Sending half shared by the registered handlers.
#[derive(Clone)]
enum RecordSender {
    Unbounded(mpsc::UnboundedSender<LogRecord>),
    Bounded {
        tx: mpsc::Sender<LogRecord>,
        dropped: Arc<AtomicU64>,
    },
}

impl RecordSender {
    /// Pushes a record without waiting.
    fn push(&self, record: LogRecord) {
        match self {
            Self::Unbounded(tx) => {
                // Receiver gone: the consumer dropped the stream.
                let _ = tx.send(record);
            }
            Self::Bounded { tx, dropped } => match tx.try_send(record) {
                Ok(()) | Err(TrySendError::Closed(_)) => {}
                Err(TrySendError::Full(record)) => {
                    let total = dropped.fetch_add(1, Ordering::Relaxed) + 1;
                    warn!(event = %record.event, total, "Log stream buffer full, dropping record");
                }
            },
        }
    }
}

/// Receiving half owned by the stream.
enum RecordReceiver {
    Unbounded(mpsc::UnboundedReceiver<LogRecord>),
    Bounded(mpsc::Receiver<LogRecord>),
}

// ============================================================================
// LogStream
// ============================================================================

/// Infinite, push-driven stream of console records.
///
/// Not restartable. With at least one subscribed event the stream ends once
/// the actor drops every handler it registered; with none it stays pending.
pub struct LogStream {
    /// Receiving end of the bridge.
    rx: RecordReceiver,
    /// Subscribed event kinds.
    events: Vec<ConsoleEvent>,
    /// Records dropped because the bounded buffer was full.
    dropped: Arc<AtomicU64>,
    /// Keeps the channel open when no handler holds a sender.
    _idle: Option<RecordSender>,
}

impl fmt::Debug for LogStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogStream")
            .field("events", &self.events)
            .field("dropped", &self.dropped())
            .finish_non_exhaustive()
    }
}

impl LogStream {
    /// Registers handlers on `console` and returns the stream they feed.
    ///
    /// The caller must already have started listening on the actor.
    pub(crate) fn attach(console: &dyn ConsoleActor, options: &LogStreamOptions) -> Self {
        let dropped = Arc::new(AtomicU64::new(0));

        let (tx, rx) = match options.buffer {
            None => {
                let (tx, rx) = mpsc::unbounded_channel();
                (RecordSender::Unbounded(tx), RecordReceiver::Unbounded(rx))
            }
            Some(capacity) => {
                let (tx, rx) = mpsc::channel(capacity.max(1));
                (
                    RecordSender::Bounded {
                        tx,
                        dropped: Arc::clone(&dropped),
                    },
                    RecordReceiver::Bounded(rx),
                )
            }
        };

        let events = options.event_kinds();

        for &event in &events {
            let sender = tx.clone();
            console.on(
                event,
                Box::new(move |payload| sender.push(LogRecord::new(event, payload))),
            );
            debug!(%event, "Registered log stream handler");
        }

        let idle = if events.is_empty() {
            debug!("Log stream has no subscribed events");
            Some(tx)
        } else {
            None
        };

        Self {
            rx,
            events,
            dropped,
            _idle: idle,
        }
    }

    /// Returns the subscribed event kinds.
    #[inline]
    #[must_use]
    pub fn event_kinds(&self) -> &[ConsoleEvent] {
        &self.events
    }

    /// Returns the number of records dropped by a full bounded buffer.
    #[inline]
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Receives the next record.
    pub async fn recv(&mut self) -> Option<LogRecord> {
        match &mut self.rx {
            RecordReceiver::Unbounded(rx) => rx.recv().await,
            RecordReceiver::Bounded(rx) => rx.recv().await,
        }
    }
}

impl Stream for LogStream {
    type Item = LogRecord;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        match &mut self.rx {
            RecordReceiver::Unbounded(rx) => rx.poll_recv(cx),
            RecordReceiver::Bounded(rx) => rx.poll_recv(cx),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
