//! Keepsake desktop shell.
//!
//! Hosts the experience engine on a loop thread and exposes it to the
//! webview through Tauri IPC commands and events.

pub mod cli;
pub mod game_loop;
pub mod ipc;
pub mod logging;
pub mod state;

pub use keepsake_core as core;
