//! In-memory remote debugging client for integration tests.
//!
//! Every actor call is appended to a shared call log so tests can assert
//! which operations ran and in what order.

#![allow(dead_code)]

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use firefox_app_console::remote::{
    Callback, Client, ConsoleActor, EventEmitter, EventHandler, RemoteApp, WebAppsActor,
};
use firefox_app_console::{ConsoleEvent, Error, InstalledApp, Manifest};
use parking_lot::Mutex;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

// ============================================================================
// Fixtures
// ============================================================================

pub const APP_ID: &str = "8675309";
pub const APP_NAME: &str = "Test App";
pub const APP_MANIFEST_URL: &str = "app://8675309/manifest.webapp";
pub const JS_EXPR: &str = "1 + 1";

pub fn manifest() -> Manifest {
    Manifest::new(APP_ID, APP_MANIFEST_URL, APP_NAME)
}

pub fn manifest_not_running() -> Manifest {
    Manifest::new("ou812", "app://ou812/manifest.webapp", "Not running app")
}

pub fn manifest_not_installed() -> Manifest {
    Manifest::new("lolidk", "app://lolidk/manifest.webapp", "Not installed app")
}

pub fn installed_apps() -> Vec<InstalledApp> {
    vec![
        InstalledApp::from(&manifest()),
        InstalledApp::from(&manifest_not_running()),
    ]
}

pub fn running_apps() -> Vec<String> {
    [
        "app://system.gaiamobile.org/manifest.webapp",
        "app://costcontrol.gaiamobile.org/manifest.webapp",
        "app://callscreen.gaiamobile.org/manifest.webapp",
        "app://verticalhome.gaiamobile.org/manifest.webapp",
        APP_MANIFEST_URL,
        "app://findmydevice.gaiamobile.org/manifest.webapp",
        "app://settings.gaiamobile.org/manifest.webapp",
        "app://ad97abe0-00bf-11e5-ab12-d5ad5262fbe2/manifest.webapp",
        "app://keyboard.gaiamobile.org/manifest.webapp",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Initializes test logging once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("firefox_app_console=debug")),
        )
        .with_test_writer()
        .try_init();
}

// ============================================================================
// CallLog
// ============================================================================

/// Ordered record of actor calls.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    fn record(&self, call: impl Into<String>) {
        self.0.lock().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.lock().clone()
    }

    pub fn contains(&self, call: &str) -> bool {
        self.0.lock().iter().any(|c| c == call)
    }

    pub fn position(&self, call: &str) -> Option<usize> {
        self.0.lock().iter().position(|c| c == call)
    }
}

/// Error every failing mock operation reports.
pub fn mock_error(operation: &str) -> Error {
    Error::remote("mockError", operation)
}

// ============================================================================
// MockConsole
// ============================================================================

/// Console actor backed by an [`EventEmitter`].
pub struct MockConsole {
    log: CallLog,
    failing: Option<&'static str>,
    eval_result: Value,
    cached: Vec<Value>,
    pub emitter: EventEmitter,
}

impl MockConsole {
    fn settle<T: 'static>(&self, operation: &'static str, callback: Callback<T>, value: T) {
        self.log.record(operation);
        if self.failing == Some(operation) {
            callback(Err(mock_error(operation)));
        } else {
            callback(Ok(value));
        }
    }

    /// Fires an event as the device would.
    pub fn emit(&self, event: ConsoleEvent, payload: Value) -> usize {
        self.emitter.emit(event, payload)
    }
}

impl ConsoleActor for MockConsole {
    fn start_listening(&self, callback: Callback<Value>) {
        self.settle("startListening", callback, json!(true));
    }

    fn stop_listening(&self, callback: Callback<Value>) {
        self.settle("stopListening", callback, json!(true));
    }

    fn evaluate_js(&self, expression: &str, callback: Callback<Value>) {
        self.log.record(format!("evaluateJS {expression}"));
        self.settle("evaluateJS", callback, self.eval_result.clone());
    }

    fn get_cached_logs(&self, callback: Callback<Vec<Value>>) {
        self.settle("getCachedLogs", callback, self.cached.clone());
    }

    fn clear_cached_logs(&self, callback: Callback<Value>) {
        self.settle("clearCachedLogs", callback, json!(true));
    }

    fn on(&self, event: ConsoleEvent, handler: EventHandler) {
        self.log.record(format!("on {event}"));
        self.emitter.on(event, handler);
    }
}

// ============================================================================
// MockWebApps
// ============================================================================

struct MockWebApps {
    log: CallLog,
    failing: Option<&'static str>,
    installed: Vec<InstalledApp>,
    running: Vec<String>,
    console: Arc<MockConsole>,
}

impl MockWebApps {
    fn settle<T: 'static>(&self, operation: &'static str, callback: Callback<T>, value: T) {
        self.log.record(operation);
        if self.failing == Some(operation) {
            callback(Err(mock_error(operation)));
        } else {
            callback(Ok(value));
        }
    }
}

impl WebAppsActor for MockWebApps {
    fn get_installed_apps(&self, callback: Callback<Vec<InstalledApp>>) {
        self.settle("getInstalledApps", callback, self.installed.clone());
    }

    fn list_running_apps(&self, callback: Callback<Vec<String>>) {
        self.settle("listRunningApps", callback, self.running.clone());
    }

    fn get_app(&self, manifest_url: &str, callback: Callback<RemoteApp>) {
        self.log.record(format!("getApp {manifest_url}"));
        let console: Arc<dyn ConsoleActor> = self.console.clone();
        self.settle("getApp", callback, RemoteApp::new(manifest_url, console));
    }
}

// ============================================================================
// MockClient
// ============================================================================

/// Mock client configuration.
#[derive(Debug, Clone)]
pub struct MockOptions {
    pub installed: Vec<InstalledApp>,
    pub running: Vec<String>,
    /// Operation name that reports an error instead of a result.
    pub failing: Option<&'static str>,
    pub eval_result: Value,
    pub cached: Vec<Value>,
}

impl Default for MockOptions {
    fn default() -> Self {
        Self {
            installed: installed_apps(),
            running: running_apps(),
            failing: None,
            eval_result: json!(true),
            cached: vec![json!({ "level": "log", "arguments": ["cached"] })],
        }
    }
}

/// Client handing out a single shared webapps actor.
pub struct MockClient {
    pub log: CallLog,
    pub console: Arc<MockConsole>,
    failing: Option<&'static str>,
    webapps: Arc<MockWebApps>,
}

impl MockClient {
    pub fn new() -> Arc<Self> {
        Self::with_options(MockOptions::default())
    }

    pub fn failing(operation: &'static str) -> Arc<Self> {
        Self::with_options(MockOptions {
            failing: Some(operation),
            ..MockOptions::default()
        })
    }

    pub fn with_options(options: MockOptions) -> Arc<Self> {
        let log = CallLog::default();
        let console = Arc::new(MockConsole {
            log: log.clone(),
            failing: options.failing,
            eval_result: options.eval_result,
            cached: options.cached,
            emitter: EventEmitter::new(),
        });
        let webapps = Arc::new(MockWebApps {
            log: log.clone(),
            failing: options.failing,
            installed: options.installed,
            running: options.running,
            console: Arc::clone(&console),
        });

        Arc::new(Self {
            log,
            console,
            failing: options.failing,
            webapps,
        })
    }
}

impl Client for MockClient {
    fn get_webapps(&self, callback: Callback<Arc<dyn WebAppsActor>>) {
        self.log.record("getWebapps");
        if self.failing == Some("getWebapps") {
            callback(Err(mock_error("getWebapps")));
        } else {
            let webapps: Arc<dyn WebAppsActor> = self.webapps.clone();
            callback(Ok(webapps));
        }
    }
}
