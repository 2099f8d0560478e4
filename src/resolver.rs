//! Running app resolution.
//!
//! Finds the app described by a [`Manifest`] among the apps that are both
//! installed and running, then fetches its actor handle.
//!
//! # Pipeline
//!
//! ```text
//! getWebapps ──► getInstalledApps ─┐
//!            └─► listRunningApps  ─┴─► filter by name + running ──► getApp(first)
//! ```

// ============================================================================
// Imports
// ============================================================================

use futures_util::future::try_join;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::protocol::{InstalledApp, Manifest};
use crate::remote::{Client, RemoteApp};
use crate::webapps::WebApps;

// ============================================================================
// Resolution
// ============================================================================

/// Resolves the running app matching `manifest`.
///
/// Installed apps and running ids are fetched concurrently; the first failure
/// of either aborts resolution. `getApp` is only called once both succeeded.
///
/// # Errors
///
/// - [`Error::AppNotInstalledAndRunning`] if no installed app named
///   `manifest.name` is running
/// - Any actor error, unchanged
pub async fn resolve_running_app(client: &dyn Client, manifest: &Manifest) -> Result<RemoteApp> {
    let webapps = WebApps::from_client(client).await?;

    let (installed, running) = try_join(webapps.installed_apps(), webapps.running_apps()).await?;

    debug!(
        installed = installed.len(),
        running = running.len(),
        name = %manifest.name,
        "Fetched app lists"
    );

    let Some(manifest_url) = select_running_app(&installed, &running, manifest) else {
        debug!(name = %manifest.name, "No installed app is running under this name");
        return Err(Error::AppNotInstalledAndRunning);
    };

    info!(manifest_url, name = %manifest.name, "Selected running app");

    webapps.app(manifest_url).await
}

/// Returns the manifest URL of the first installed app that matches
/// `manifest.name` and appears in `running`.
///
/// Order follows `installed`.
#[must_use]
pub fn select_running_app<'a>(
    installed: &'a [InstalledApp],
    running: &[String],
    manifest: &Manifest,
) -> Option<&'a str> {
    let running: FxHashSet<&str> = running.iter().map(String::as_str).collect();

    installed
        .iter()
        .filter(|app| app.name == manifest.name && running.contains(app.manifest_url.as_str()))
        .map(|app| app.manifest_url.as_str())
        .next()
}

// ============================================================================
// Tests
// ============================================================================
