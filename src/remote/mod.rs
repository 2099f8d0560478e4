//! Remote debugging actor interfaces.
//!
//! This module defines the callback-based API a connected client exposes.
//! The wire protocol and connection management live outside this crate;
//! anything implementing these traits can be used.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐                              ┌─────────────────┐
//! │  AppConsole     │      Callback<T> (once)      │  Client         │
//! │  (futures)      │◄────────────────────────────►│  → WebApps      │
//! │                 │      EventHandler (many)     │  → Console      │
//! │  LogStream      │◄─────────────────────────────│                 │
//! └─────────────────┘                              └─────────────────┘
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `actor` | Actor traits, callback and handler types |
//! | `emitter` | Handler registry for actor implementations |

// ============================================================================
// Submodules
// ============================================================================

/// Actor traits and callback types.
pub mod actor;

/// Event handler registry.
pub mod emitter;

// ============================================================================
// Re-exports
// ============================================================================

pub use actor::{Callback, Client, ConsoleActor, EventHandler, RemoteApp, WebAppsActor};
pub use emitter::EventEmitter;
