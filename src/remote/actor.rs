//! Callback-style actor interfaces.
//!
//! These traits describe what a connected remote debugging client must
//! provide. Every operation takes a completion [`Callback`] which the
//! implementation invokes exactly once, from any thread, with the outcome.
//!
//! # Actors
//!
//! | Trait | Operations |
//! |-------|------------|
//! | [`Client`] | `getWebapps` |
//! | [`WebAppsActor`] | `getInstalledApps`, `listRunningApps`, `getApp` |
//! | [`ConsoleActor`] | `startListening`, `stopListening`, `evaluateJS`, `getCachedLogs`, `clearCachedLogs`, `on` |

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::protocol::{ConsoleEvent, InstalledApp};

// ============================================================================
// Types
// ============================================================================

/// Completion callback handed to an actor operation.
///
/// Receives `Err` with the actor's failure or `Ok` with the result.
pub type Callback<T> = Box<dyn FnOnce(Result<T>) + Send + 'static>;

/// Event handler callback type.
///
/// Called with the raw payload of each event the handler is registered for.
pub type EventHandler = Box<dyn Fn(Value) + Send + Sync + 'static>;

// ============================================================================
// Client
// ============================================================================

/// A connected remote debugging client.
pub trait Client: Send + Sync {
    /// Looks up the webapps actor.
    fn get_webapps(&self, callback: Callback<Arc<dyn WebAppsActor>>);
}

// ============================================================================
// WebAppsActor
// ============================================================================

/// The device's webapps actor.
pub trait WebAppsActor: Send + Sync {
    /// Lists installed apps.
    fn get_installed_apps(&self, callback: Callback<Vec<InstalledApp>>);

    /// Lists manifest URLs of running apps.
    fn list_running_apps(&self, callback: Callback<Vec<String>>);

    /// Gets the actor handle of a running app.
    fn get_app(&self, manifest_url: &str, callback: Callback<RemoteApp>);
}

// ============================================================================
// ConsoleActor
// ============================================================================

/// Console actor of a running app.
///
/// Event registration is additive: every handler passed to [`on`](Self::on)
/// stays registered until the actor drops it.
pub trait ConsoleActor: Send + Sync {
    /// Starts forwarding console events.
    fn start_listening(&self, callback: Callback<Value>);

    /// Stops forwarding console events.
    fn stop_listening(&self, callback: Callback<Value>);

    /// Evaluates a JavaScript expression in the app.
    fn evaluate_js(&self, expression: &str, callback: Callback<Value>);

    /// Fetches messages logged before listening started.
    fn get_cached_logs(&self, callback: Callback<Vec<Value>>);

    /// Clears the cached messages.
    fn clear_cached_logs(&self, callback: Callback<Value>);

    /// Registers an event handler.
    fn on(&self, event: ConsoleEvent, handler: EventHandler);
}

// ============================================================================
// RemoteApp
// ============================================================================

/// App handle returned by [`WebAppsActor::get_app`].
#[derive(Clone)]
pub struct RemoteApp {
    /// Manifest URL the handle was requested for.
    pub manifest_url: String,
    /// The app's console actor.
    pub console: Arc<dyn ConsoleActor>,
}

impl RemoteApp {
    /// Creates a new app handle.
    #[inline]
    #[must_use]
    pub fn new(manifest_url: impl Into<String>, console: Arc<dyn ConsoleActor>) -> Self {
        Self {
            manifest_url: manifest_url.into(),
            console,
        }
    }
}

impl fmt::Debug for RemoteApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteApp")
            .field("manifest_url", &self.manifest_url)
            .finish_non_exhaustive()
    }
}
