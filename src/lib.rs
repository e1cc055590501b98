//! Cruscotto - Desktop shell
//!
//! A Tauri application hosting the shared UI session state consumed by
//! the frontend (current user, error banner, locale, download flag).

use serde::{Deserialize, Serialize};
use tauri::Manager;

mod commands;
mod state;

use state::AppState;

/// Get application info
#[tauri::command]
fn get_app_info() -> AppInfo {
    AppInfo {
        name: "Cruscotto".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Desktop shell".to_string(),
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            // The session record starts empty on every launch
            app.manage(AppState::new());

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            get_app_info,
            // Session state commands
            commands::get_ui_state,
            commands::set_user,
            commands::set_error,
            commands::set_locale,
            commands::set_download,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
