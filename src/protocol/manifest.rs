//! App identity records.
//!
//! [`Manifest`] is the caller's description of the app to find.
//! [`InstalledApp`] is one entry of the webapps actor's installed list.
//!
//! # Format
//!
//! ```json
//! {
//!   "id": "8675309",
//!   "manifestURL": "app://8675309/manifest.webapp",
//!   "name": "Test App"
//! }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

use crate::error::{Error, Result};

// ============================================================================
// Manifest
// ============================================================================

/// Identity descriptor of a web application.
///
/// Only `name` takes part in resolution. `id` and `manifestURL` are optional
/// in `manifest.webapp` files and default to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// App identifier.
    #[serde(default)]
    pub id: String,

    /// URL of the installed manifest.
    #[serde(default, rename = "manifestURL")]
    pub manifest_url: String,

    /// Display name, matched against installed apps.
    pub name: String,
}

impl Manifest {
    /// Creates a manifest from its three identity fields.
    #[inline]
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        manifest_url: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            manifest_url: manifest_url.into(),
            name: name.into(),
        }
    }

    /// Parses a manifest from a JSON document.
    ///
    /// Unknown fields (`description`, `launch_path`, ...) are ignored.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a `manifest.webapp` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Checks that the manifest can be used for resolution.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if the name is empty
    /// - [`Error::Config`] if a non-empty manifest URL does not parse
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::config("Manifest name is empty"));
        }

        if !self.manifest_url.is_empty() {
            Url::parse(&self.manifest_url).map_err(|e| {
                Error::config(format!(
                    "Invalid manifest URL '{}': {e}",
                    self.manifest_url
                ))
            })?;
        }

        Ok(())
    }
}

// ============================================================================
// InstalledApp
// ============================================================================

/// An app reported by `getInstalledApps`.
///
/// Names are not unique across manifest URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstalledApp {
    /// Display name.
    pub name: String,

    /// URL of the installed manifest, also the app's running identifier.
    #[serde(rename = "manifestURL")]
    pub manifest_url: String,

    /// Remaining fields reported by the actor.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InstalledApp {
    /// Creates an installed app entry with no extra fields.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, manifest_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            manifest_url: manifest_url.into(),
            extra: Map::new(),
        }
    }
}

impl From<&Manifest> for InstalledApp {
    fn from(manifest: &Manifest) -> Self {
        let mut extra = Map::new();
        extra.insert("id".to_string(), Value::String(manifest.id.clone()));
        Self {
            name: manifest.name.clone(),
            manifest_url: manifest.manifest_url.clone(),
            extra,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
