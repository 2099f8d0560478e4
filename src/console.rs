//! Console handle for a running app.
//!
//! [`AppConsole`] bundles the console operations of one resolved app.
//! Obtain one with [`console`] or [`AppConsole::builder`].
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use firefox_app_console::{AppConsole, LogStreamOptions, Manifest, Result};
//! use firefox_app_console::remote::Client;
//! use futures_util::StreamExt;
//!
//! # async fn example(client: Arc<dyn Client>) -> Result<()> {
//! let manifest = Manifest::from_path("sampleApp/manifest.webapp")?;
//!
//! let console = AppConsole::builder()
//!     .client(client)
//!     .manifest(manifest)
//!     .connect()
//!     .await?;
//!
//! let result = console.evaluate("2 + 2").await?;
//! println!("{}", result.result);
//!
//! let mut logs = console.log_stream(LogStreamOptions::all()).await?;
//! while let Some(record) = logs.next().await {
//!     println!("[{}] {}", record.event, record.payload);
//! }
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::promisify::{Pending, promisify};
use crate::protocol::{EvalResult, Manifest};
use crate::remote::{Client, ConsoleActor, RemoteApp};
use crate::resolver::resolve_running_app;
use crate::stream::{LogStream, LogStreamOptions};

// ============================================================================
// Entry Point
// ============================================================================

/// Resolves the running app matching `manifest` and returns its console.
///
/// # Errors
///
/// - [`Error::AppNotInstalledAndRunning`] if the app is not installed and running
/// - Any actor error, unchanged
pub async fn console(client: &dyn Client, manifest: &Manifest) -> Result<AppConsole> {
    let app = resolve_running_app(client, manifest).await?;
    Ok(AppConsole::from_app(app))
}

// ============================================================================
// AppConsole
// ============================================================================

/// Console operations for one running app.
///
/// Cloning is cheap; clones share the underlying console actor, so event
/// handlers registered through any clone land on the same actor.
#[derive(Clone)]
pub struct AppConsole {
    /// Manifest URL of the resolved app.
    manifest_url: String,
    /// Console actor of the resolved app.
    actor: Arc<dyn ConsoleActor>,
}

impl fmt::Debug for AppConsole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConsole")
            .field("manifest_url", &self.manifest_url)
            .finish_non_exhaustive()
    }
}

impl AppConsole {
    /// Creates a builder for resolving a console.
    #[inline]
    #[must_use]
    pub fn builder() -> ConsoleBuilder {
        ConsoleBuilder::new()
    }

    /// Builds the console handle of a resolved app.
    #[must_use]
    pub fn from_app(app: RemoteApp) -> Self {
        debug!(manifest_url = %app.manifest_url, "Console built");
        Self {
            manifest_url: app.manifest_url,
            actor: app.console,
        }
    }

    /// Returns the manifest URL of the app this console belongs to.
    #[inline]
    #[must_use]
    pub fn manifest_url(&self) -> &str {
        &self.manifest_url
    }
}

// ============================================================================
// AppConsole - Operations
// ============================================================================

impl AppConsole {
    /// Starts forwarding console events.
    pub fn start_listening(&self) -> Pending<Value> {
        promisify("startListening", |cb| self.actor.start_listening(cb))
    }

    /// Stops forwarding console events.
    pub fn stop_listening(&self) -> Pending<Value> {
        promisify("stopListening", |cb| self.actor.stop_listening(cb))
    }

    /// Evaluates JavaScript in the app and returns the raw response.
    pub fn evaluate_js(&self, expression: &str) -> Pending<Value> {
        debug!(manifest_url = %self.manifest_url, expr_len = expression.len(), "Evaluating JS");
        promisify("evaluateJS", |cb| self.actor.evaluate_js(expression, cb))
    }

    /// Evaluates JavaScript in the app and parses the response.
    ///
    /// # Errors
    ///
    /// - Any actor error, unchanged
    /// - [`Error::Json`] if the response is not an evaluation result
    pub async fn evaluate(&self, expression: &str) -> Result<EvalResult> {
        let value = self.evaluate_js(expression).await?;
        EvalResult::from_value(value)
    }

    /// Fetches messages logged before listening started.
    pub fn get_cached_logs(&self) -> Pending<Vec<Value>> {
        promisify("getCachedLogs", |cb| self.actor.get_cached_logs(cb))
    }

    /// Clears the cached messages.
    pub fn clear_cached_logs(&self) -> Pending<Value> {
        promisify("clearCachedLogs", |cb| self.actor.clear_cached_logs(cb))
    }

    /// Starts listening and returns a stream of console records.
    ///
    /// No handler is registered until `startListening` succeeded.
    ///
    /// # Errors
    ///
    /// The `startListening` failure, unchanged. No stream is created then.
    pub async fn log_stream(&self, options: LogStreamOptions) -> Result<LogStream> {
        self.start_listening().await?;
        debug!(
            manifest_url = %self.manifest_url,
            logs = options.logs,
            errors = options.errors,
            "Listening started"
        );
        Ok(LogStream::attach(self.actor.as_ref(), &options))
    }
}

// ============================================================================
// ConsoleBuilder
// ============================================================================

/// Builder for resolving an [`AppConsole`].
///
/// Use [`AppConsole::builder()`] to create a new builder.
#[derive(Default, Clone)]
pub struct ConsoleBuilder {
    /// Connected client.
    client: Option<Arc<dyn Client>>,
    /// Manifest of the app to find.
    manifest: Option<Manifest>,
}

impl fmt::Debug for ConsoleBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleBuilder")
            .field("client", &self.client.is_some())
            .field("manifest", &self.manifest)
            .finish()
    }
}

impl ConsoleBuilder {
    /// Creates a builder with no configuration.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the connected client.
    #[inline]
    #[must_use]
    pub fn client(mut self, client: Arc<dyn Client>) -> Self {
        self.client = Some(client);
        self
    }

    /// Sets the manifest of the app to find.
    #[inline]
    #[must_use]
    pub fn manifest(mut self, manifest: Manifest) -> Self {
        self.manifest = Some(manifest);
        self
    }

    /// Validates the configuration and resolves the console.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if the client or manifest is missing or invalid
    /// - Everything [`console`] returns
    pub async fn connect(self) -> Result<AppConsole> {
        let client = self
            .client
            .ok_or_else(|| Error::config("Client is required"))?;
        let manifest = self
            .manifest
            .ok_or_else(|| Error::config("Manifest is required"))?;

        manifest.validate()?;

        console(client.as_ref(), &manifest).await
    }
}

// ============================================================================
// Tests
// ============================================================================
