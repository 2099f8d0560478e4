//! Firefox App Console - console access to running Firefox OS web apps.
//!
//! This library finds a running web app on a Firefox remote debugging
//! target and exposes its console: evaluate JavaScript, read and clear
//! cached messages, and stream live log output.
//!
//! # Architecture
//!
//! The crate sits on top of an already connected client:
//!
//! - **Client (external)**: Speaks the remote debugging protocol, exposes
//!   callback-based actors ([`remote`])
//! - **This crate**: Turns actor callbacks into futures and console events
//!   into a [`LogStream`]
//!
//! Key design principles:
//!
//! - Resolution is stateless: every call queries installed and running apps anew
//! - Actor errors are forwarded unchanged, no retries
//! - Event-driven log streaming (no polling)
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use firefox_app_console::{LogStreamOptions, Manifest, Result, console};
//! use firefox_app_console::remote::Client;
//! use futures_util::StreamExt;
//!
//! async fn run(client: Arc<dyn Client>) -> Result<()> {
//!     let manifest = Manifest::new("8675309", "app://8675309/manifest.webapp", "Test App");
//!
//!     // Find the running app and get its console
//!     let app_console = console(client.as_ref(), &manifest).await?;
//!
//!     // Evaluate and read back
//!     let value = app_console.evaluate_js("1 + 1").await?;
//!     println!("Result: {}", value);
//!
//!     // Follow live output
//!     let mut logs = app_console.log_stream(LogStreamOptions::default()).await?;
//!     while let Some(record) = logs.next().await {
//!         println!("{}", record.payload);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`console`](mod@console) | [`AppConsole`] handle and builder |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`promisify`](mod@promisify) | Callback-to-future adapter |
//! | [`protocol`] | Data records exchanged with actors |
//! | [`remote`] | Actor traits a client implements |
//! | [`resolver`] | Running app resolution |
//! | [`stream`] | Console event stream |
//! | [`webapps`] | Webapps actor wrapper |

// ============================================================================
// Modules
// ============================================================================

/// Console handle and builder.
pub mod console;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Callback-to-future adapter.
pub mod promisify;

/// Data records exchanged with remote actors.
pub mod protocol;

/// Remote actor interfaces.
///
/// Implement these traits on top of a remote debugging connection.
pub mod remote;

/// Running app resolution.
pub mod resolver;

/// Console event stream.
pub mod stream;

/// Webapps actor wrapper.
pub mod webapps;

// ============================================================================
// Re-exports
// ============================================================================

// Console types
pub use console::{AppConsole, ConsoleBuilder, console};

// Error types
pub use error::{Error, Result};

// Protocol types
pub use protocol::{ConsoleEvent, EvalResult, InstalledApp, LogRecord, Manifest};

// Adapter and resolution
pub use promisify::{Pending, promisify};
pub use resolver::{resolve_running_app, select_running_app};

// Stream types
pub use stream::{LogStream, LogStreamOptions};
