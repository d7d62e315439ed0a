//! Tauri IPC command handlers.
//!
//! Invoked by the webview via `invoke()`; they forward to the loop thread
//! over its channel.

use log::info;
use tauri::{AppHandle, State};

use keepsake_core::commands::PlayerCommand;
use keepsake_core::state::ExperienceSnapshot;

use crate::game_loop;
use crate::state::{AppState, LoopCommand};

/// Start the experience. Spawns the loop thread if not already running.
///
/// Frontend: `invoke("start_experience")`
#[tauri::command]
pub fn start_experience(app_handle: AppHandle, state: State<'_, AppState>) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;

    if *running {
        return Err("Experience already running".into());
    }

    let cmd_tx = game_loop::spawn_game_loop(
        app_handle,
        state.config.clone(),
        state.latest_snapshot.clone(),
    )
    .map_err(|e| format!("Failed to spawn loop thread: {}", e))?;

    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
    *tx_lock = Some(cmd_tx);
    *running = true;
    info!("ipc: experience started");

    Ok(())
}

/// Forward a player command to the engine.
///
/// Frontend: `invoke("send_command", { command })`
#[tauri::command]
pub fn send_command(command: PlayerCommand, state: State<'_, AppState>) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(LoopCommand::Player(command))
            .map_err(|e| format!("Failed to send command: {}", e)),
        None => Err("Experience not started".into()),
    }
}

/// Latest snapshot, for polling and initial state.
///
/// Frontend: `invoke("get_snapshot")`
#[tauri::command]
pub fn get_snapshot(state: State<'_, AppState>) -> Result<Option<ExperienceSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}
