//! Application state shared across Tauri commands and the loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use keepsake_core::commands::PlayerCommand;
use keepsake_core::state::ExperienceSnapshot;
use keepsake_sim::ExperienceConfig;

/// Messages from the IPC layer to the loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A player command to forward to the engine.
    Player(PlayerCommand),
    /// Tear the experience down and end the thread.
    Shutdown,
}

/// Shared application state, stored as Tauri managed state.
///
/// `mpsc::Sender` is not `Sync`, so it sits behind a `Mutex`; the latest
/// snapshot is shared with the loop thread through an `Arc`.
pub struct AppState {
    /// `None` before `start_experience` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    /// Updated by the loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<ExperienceSnapshot>>>,
    pub running: Mutex<bool>,
    /// Used when the loop starts.
    pub config: ExperienceConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(ExperienceConfig::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExperienceConfig) -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
            config,
        }
    }

    /// Ask a running loop to stop. Does nothing if it never started.
    pub fn shutdown(&self) {
        if let Ok(tx) = self.command_tx.lock() {
            if let Some(tx) = tx.as_ref() {
                let _ = tx.send(LoopCommand::Shutdown);
            }
        }
    }
}
