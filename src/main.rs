mod app;
mod color;
mod config;
mod state;
mod ui;

use anyhow::{anyhow, Context};
use clap::Parser;
use eframe::egui;

use app::PrecipViewerApp;
use cmip_precip_viewer::data::loader::load_file;
use config::Args;
use state::AppState;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();

    // Loaded once before the window opens; failure here is fatal.
    let dataset = load_file(&args.data)
        .with_context(|| format!("loading dataset {}", args.data.display()))?;
    let state = AppState::new(dataset, args.data.clone(), args.viewer_config());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CMIP Precipitation – Scenario Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(PrecipViewerApp::new(state)))),
    )
    .map_err(|e| anyhow!("running viewer: {e}"))
}
