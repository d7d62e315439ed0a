//! Loop thread: runs the experience engine at 60 Hz and emits snapshots.
//!
//! The engine is created inside the thread and never leaves it. Commands
//! arrive over an `mpsc` channel. Snapshots go out as Tauri events and into
//! shared state for synchronous polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use log::{info, warn};
use tauri::{AppHandle, Emitter};

use keepsake_core::constants::TICK_RATE;
use keepsake_core::state::ExperienceSnapshot;
use keepsake_sim::{ExperienceConfig, ExperienceEngine};

use crate::state::LoopCommand;

/// Event name the webview listens on.
pub const SNAPSHOT_EVENT: &str = "experience:snapshot";

/// Duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Stop,
}

/// Spawns the loop thread and returns the sender the IPC layer uses.
pub fn spawn_game_loop(
    app_handle: AppHandle,
    config: ExperienceConfig,
    latest_snapshot: Arc<Mutex<Option<ExperienceSnapshot>>>,
) -> io::Result<mpsc::Sender<LoopCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    std::thread::Builder::new()
        .name("keepsake-loop".into())
        .spawn(move || {
            run_game_loop(app_handle, config, cmd_rx, &latest_snapshot);
        })?;

    Ok(cmd_tx)
}

/// Queue everything waiting on the channel. `Stop` on shutdown or when the
/// sending side is gone.
fn drain_commands(cmd_rx: &mpsc::Receiver<LoopCommand>, engine: &mut ExperienceEngine) -> LoopControl {
    loop {
        match cmd_rx.try_recv() {
            Ok(LoopCommand::Player(cmd)) => engine.queue_command(cmd),
            Ok(LoopCommand::Shutdown) => return LoopControl::Stop,
            Err(mpsc::TryRecvError::Empty) => return LoopControl::Continue,
            Err(mpsc::TryRecvError::Disconnected) => return LoopControl::Stop,
        }
    }
}

/// Runs until `Shutdown` or channel disconnect.
fn run_game_loop(
    app_handle: AppHandle,
    config: ExperienceConfig,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<ExperienceSnapshot>>,
) {
    info!("experience loop: starting with seed {}", config.seed);
    let mut engine = ExperienceEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        if drain_commands(&cmd_rx, &mut engine) == LoopControl::Stop {
            break;
        }

        let snapshot = engine.tick();

        if let Err(e) = app_handle.emit(SNAPSHOT_EVENT, &snapshot) {
            warn!("experience loop: emit failed: {e}");
        }

        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; skip ahead instead of catching up.
            next_tick_time = now;
        }
    }

    engine.teardown();
    let _ = app_handle.emit(SNAPSHOT_EVENT, &engine.tick());
    info!("experience loop: stopped");
}
