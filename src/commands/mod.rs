//! Tauri command handlers for Cruscotto

pub mod session;

// Re-export all commands
pub use session::*;
