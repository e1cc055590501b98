//! Application state management

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error banner shown by the frontend. Only ever constructed with
/// `visible = true`; an absent banner means nothing to display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBanner {
    pub visible: bool,
    pub msg: String,
}

/// Shared UI session record. One instance lives for the whole process;
/// every field is replaced wholesale by its setter and never partially
/// updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiState {
    /// Currently authenticated principal, opaque to the shell
    pub user: Value,
    /// Last error to display, unset until the first failure
    pub error: Option<ErrorBanner>,
    /// UI locale identifier
    pub locale: String,
    /// Whether a download is in flight
    pub download: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            user: Value::Object(serde_json::Map::new()),
            error: None,
            locale: "it_IT".to_string(),
            download: false,
        }
    }
}

impl UiState {
    pub fn set_user(&mut self, user: Value) {
        self.user = user;
    }

    pub fn set_error(&mut self, msg: String) {
        self.error = Some(ErrorBanner { visible: true, msg });
    }

    pub fn set_locale(&mut self, locale: String) {
        self.locale = locale;
    }

    pub fn set_download(&mut self, download: bool) {
        self.download = download;
    }
}

/// Application state shared across Tauri commands
pub struct AppState {
    /// UI session record; commands may run off the main thread, so
    /// access goes through the lock
    pub ui: Mutex<UiState>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            ui: Mutex::new(UiState::default()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
