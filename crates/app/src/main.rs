//! Roleroll - SKT10 role assigner
//!
//! Desktop front end: five name fields, an "Assign Roles" button and a row
//! of role cards. Every roll gives each player a different role than the
//! previous one.

use roleroll_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod state;
mod viewmodel;

slint::include_modules!();

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Roleroll");

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    };

    let app_state = state::AppState::new(config);

    let main_window = match MainWindow::new() {
        Ok(w) => w,
        Err(e) => {
            tracing::error!("Failed to create main window: {}", e);
            std::process::exit(1);
        }
    };

    viewmodel::setup_bindings(&main_window, app_state);

    if let Err(e) = main_window.run() {
        tracing::error!("Event loop failed: {}", e);
        std::process::exit(1);
    }
}
