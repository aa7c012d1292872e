#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

mod commands;
mod window;

use config::AppPaths;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tauri=info".to_string());
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() {
    init_tracing();

    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let paths = AppPaths::under(root);

    tauri::Builder::default()
        .invoke_handler(tauri::generate_handler![commands::report_print_failure])
        .setup(move |app| {
            window::create_main_window(&app.handle(), &paths)?;
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
