//! `evaluateJS` response type.
//!
//! # Format
//!
//! ```json
//! {
//!   "input": "2 + 2",
//!   "result": 4,
//!   "timestamp": 1436546733987,
//!   "helperResult": null
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

// ============================================================================
// EvalResult
// ============================================================================

/// Parsed result of evaluating an expression in the app's console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvalResult {
    /// Expression as evaluated.
    #[serde(default)]
    pub input: String,

    /// Value (or value grip) produced by the expression.
    #[serde(default)]
    pub result: Value,

    /// Evaluation time in milliseconds since the epoch.
    #[serde(default)]
    pub timestamp: Option<u64>,

    /// Thrown value, if evaluation threw.
    #[serde(default)]
    pub exception: Option<Value>,

    /// Message of the thrown value.
    #[serde(default)]
    pub exception_message: Option<String>,

    /// Result of a console helper function (`$`, `inspect`, ...).
    #[serde(default)]
    pub helper_result: Option<Value>,
}

impl EvalResult {
    /// Parses a raw `evaluateJS` response.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Returns `true` if the expression threw.
    #[inline]
    #[must_use]
    pub fn is_exception(&self) -> bool {
        self.exception.as_ref().is_some_and(|e| !e.is_null())
    }
}

// ============================================================================
// Tests
// ============================================================================
