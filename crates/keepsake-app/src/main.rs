// Prevents additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use log::error;
use tauri::{Manager, RunEvent};

use keepsake_app::cli::Args;
use keepsake_app::state::AppState;
use keepsake_app::{ipc, logging};

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let app = tauri::Builder::default()
        .manage(AppState::with_config(args.experience_config()))
        .invoke_handler(tauri::generate_handler![
            ipc::start_experience,
            ipc::send_command,
            ipc::get_snapshot,
        ])
        .build(tauri::generate_context!());

    let app = match app {
        Ok(app) => app,
        Err(e) => {
            error!("failed to build the Keepsake window: {e}");
            std::process::exit(1);
        }
    };

    app.run(|handle, event| {
        if let RunEvent::Exit = event {
            handle.state::<AppState>().shutdown();
        }
    });
}
