// src/main.rs
use eframe::egui;
use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;
mod config;
mod file;
mod state;
mod ui;

use crate::app::NeedsAssessmentApp;
use crate::config::Settings;
use crate::state::AppState;

fn main() -> Result<()> {
    let settings = Settings::load()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState::open(&settings)?;
    tracing::info!(hospital = %state.hospital.name, "starting needs assessment");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_title("Needs Assessment"),
        ..Default::default()
    };

    eframe::run_native(
        "Needs Assessment",
        options,
        Box::new(move |_cc| Box::new(NeedsAssessmentApp::new(state))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
