mod app;
mod chart;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::anyhow;
use app::GrainPlotApp;
use chart::Experiment;
use eframe::egui;
use state::AppState;

/// Results file written by the grain-size benchmark, relative to the working
/// directory.
const INPUT_PATH: &str = "grain_size_times.txt";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = Path::new(INPUT_PATH);
    let dataset = match data::loader::load(path) {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("Failed to load {}: {e}", path.display());
            return Err(e.into());
        }
    };
    log::info!("Loaded {} samples from {}", dataset.len(), path.display());
    if dataset.is_empty() {
        log::warn!("{} holds no samples, charts will be empty", path.display());
    }

    let state = AppState::new(dataset, path.to_path_buf(), Experiment::default());
    let title = state.figure.window_title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([1400.0, 560.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "grain-plot",
        options,
        Box::new(|_cc| Ok(Box::new(GrainPlotApp::new(state)))),
    )
    .map_err(|e| anyhow!("failed to open chart window: {e}"))
}
