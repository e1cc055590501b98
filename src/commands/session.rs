//! Session commands for the shared UI state record
//!
//! The frontend reads the record through `get_ui_state` and mutates it
//! only through the four setters below. Each setter replaces exactly
//! one field and has no other side effect.

use serde_json::Value;
use tauri::State;

use crate::state::{AppState, UiState};

#[tauri::command]
pub fn get_ui_state(state: State<'_, AppState>) -> Result<UiState, String> {
    let ui = state.ui.lock().map_err(|e| e.to_string())?;
    Ok(ui.clone())
}

#[tauri::command]
pub fn set_user(state: State<'_, AppState>, user: Value) -> Result<(), String> {
    let mut ui = state.ui.lock().map_err(|e| e.to_string())?;
    ui.set_user(user);
    Ok(())
}

#[tauri::command]
pub fn set_error(state: State<'_, AppState>, msg: String) -> Result<(), String> {
    log::debug!("showing error banner: {}", msg);
    let mut ui = state.ui.lock().map_err(|e| e.to_string())?;
    ui.set_error(msg);
    Ok(())
}

#[tauri::command]
pub fn set_locale(state: State<'_, AppState>, locale: String) -> Result<(), String> {
    log::debug!("switching locale to {}", locale);
    let mut ui = state.ui.lock().map_err(|e| e.to_string())?;
    ui.set_locale(locale);
    Ok(())
}

#[tauri::command]
pub fn set_download(state: State<'_, AppState>, flag: bool) -> Result<(), String> {
    let mut ui = state.ui.lock().map_err(|e| e.to_string())?;
    ui.set_download(flag);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::state::AppState;
    use serde_json::json;

    // Commands are thin wrappers over UiState setters behind the lock;
    // exercise the same path they take through AppState.

    #[test]
    fn mutations_through_the_shared_state() {
        let state = AppState::new();

        state.ui.lock().unwrap().set_user(json!({"id": "u-3"}));
        state.ui.lock().unwrap().set_download(true);

        let snapshot = state.ui.lock().unwrap().clone();
        assert_eq!(snapshot.user, json!({"id": "u-3"}));
        assert!(snapshot.download);
        assert_eq!(snapshot.locale, "it_IT");
        assert!(snapshot.error.is_none());
    }

    #[test]
    fn snapshot_is_a_copy_not_a_handle() {
        let state = AppState::new();
        let before = state.ui.lock().unwrap().clone();

        state.ui.lock().unwrap().set_locale("en_US".to_string());

        assert_eq!(before.locale, "it_IT");
        assert_eq!(state.ui.lock().unwrap().locale, "en_US");
    }
}
