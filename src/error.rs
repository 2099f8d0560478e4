//! Error types for the app console.
//!
//! This module defines all error types used throughout the crate.
//!
//! # Usage
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`]:
//!
//! ```ignore
//! use firefox_app_console::{Result, Error};
//!
//! async fn example(console: &AppConsole) -> Result<()> {
//!     let value = console.evaluate_js("1 + 1").await?;
//!     println!("{value}");
//!     Ok(())
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Resolution | [`Error::AppNotInstalledAndRunning`] |
//! | Remote | [`Error::Remote`], [`Error::CallbackDropped`] |
//! | Configuration | [`Error::Config`] |
//! | External | [`Error::Io`], [`Error::Json`] |

// ============================================================================
// Imports
// ============================================================================

use std::io::Error as IoError;
use std::result::Result as StdResult;

use thiserror::Error;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
///
/// All fallible operations in this crate return this type.
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Resolution Errors
    // ========================================================================
    /// No installed app matches the manifest name while also running.
    ///
    /// Covers both the "not installed" and the "not running" case; the
    /// resolver cannot tell them apart without an extra query.
    #[error("app not installed and running")]
    AppNotInstalledAndRunning,

    // ========================================================================
    // Remote Errors
    // ========================================================================
    /// Failure reported by a remote actor through its completion callback.
    ///
    /// Constructed by actor implementations and forwarded unchanged.
    #[error("{error}: {message}")]
    Remote {
        /// Short error name reported by the actor (e.g. `noSuchActor`).
        error: String,
        /// Human readable description.
        message: String,
    },

    /// An actor dropped its completion callback without invoking it.
    #[error("Remote operation {operation} completed without a response")]
    CallbackDropped {
        /// Name of the remote operation.
        operation: &'static str,
    },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    ///
    /// Returned when console builder input is missing or invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a remote actor error.
    #[inline]
    pub fn remote(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Remote {
            error: error.into(),
            message: message.into(),
        }
    }

    /// Creates a dropped callback error.
    #[inline]
    pub fn callback_dropped(operation: &'static str) -> Self {
        Self::CallbackDropped { operation }
    }

    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if the app could not be found installed and running.
    #[inline]
    #[must_use]
    pub fn is_not_running(&self) -> bool {
        matches!(self, Self::AppNotInstalledAndRunning)
    }

    /// Returns `true` if this error came from a remote actor.
    #[inline]
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. } | Self::CallbackDropped { .. })
    }

    /// Returns `true` if this is a configuration error.
    #[inline]
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
