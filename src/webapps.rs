//! Future-returning wrapper over the webapps actor.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::promisify::{Pending, promisify};
use crate::protocol::InstalledApp;
use crate::remote::{Client, RemoteApp, WebAppsActor};

// ============================================================================
// WebApps
// ============================================================================

/// Webapps actor with future-returning operations.
///
/// Built fresh for every resolution; nothing is cached between calls.
#[derive(Clone)]
pub struct WebApps {
    actor: Arc<dyn WebAppsActor>,
}

impl fmt::Debug for WebApps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebApps").finish_non_exhaustive()
    }
}

impl WebApps {
    /// Wraps an already obtained actor.
    #[inline]
    #[must_use]
    pub fn new(actor: Arc<dyn WebAppsActor>) -> Self {
        Self { actor }
    }

    /// Obtains the webapps actor from a client.
    ///
    /// # Errors
    ///
    /// Whatever the client reports for `getWebapps`, unchanged.
    pub async fn from_client(client: &dyn Client) -> Result<Self> {
        let actor = promisify("getWebapps", |cb| client.get_webapps(cb)).await?;
        debug!("Webapps actor acquired");
        Ok(Self::new(actor))
    }

    /// Lists installed apps.
    pub fn installed_apps(&self) -> Pending<Vec<InstalledApp>> {
        promisify("getInstalledApps", |cb| self.actor.get_installed_apps(cb))
    }

    /// Lists manifest URLs of running apps.
    pub fn running_apps(&self) -> Pending<Vec<String>> {
        promisify("listRunningApps", |cb| self.actor.list_running_apps(cb))
    }

    /// Gets the handle of a running app.
    pub fn app(&self, manifest_url: &str) -> Pending<RemoteApp> {
        promisify("getApp", |cb| self.actor.get_app(manifest_url, cb))
    }
}
