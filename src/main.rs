mod app;
mod color;
mod config;
mod data;
mod debounce;
mod jobs;
mod notify;
mod state;
mod ui;

use anyhow::anyhow;
use app::IlrBrowserApp;
use clap::Parser;
use config::{AppConfig, Args};
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from(Args::parse());
    log::info!("Using manifest {}", config.manifest_location);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "ILR Article Browser",
        options,
        Box::new(|cc| Ok(Box::new(IlrBrowserApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("running the UI: {e}"))
}
