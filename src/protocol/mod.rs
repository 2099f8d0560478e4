//! Remote debugging data records.
//!
//! This module defines the plain data exchanged with the remote actors.
//! Field names follow the remote debugging protocol (`manifestURL`,
//! `helperResult`, ...) on the wire and Rust conventions in code.
//!
//! # Records
//!
//! | Record | Source |
//! |--------|--------|
//! | `Manifest` | Caller, usually a `manifest.webapp` file |
//! | `InstalledApp` | `getInstalledApps` |
//! | `EvalResult` | `evaluateJS` |
//! | `ConsoleEvent`, `LogRecord` | Console actor events |
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `eval` | Evaluation result |
//! | `log` | Console event kinds and log records |
//! | `manifest` | App identity records |

// ============================================================================
// Submodules
// ============================================================================

/// Evaluation result type.
pub mod eval;

/// Console event types.
pub mod log;

/// App identity records.
pub mod manifest;

// ============================================================================
// Re-exports
// ============================================================================

pub use eval::EvalResult;
pub use log::{ConsoleEvent, LogRecord};
pub use manifest::{InstalledApp, Manifest};
