mod app;
mod color;
mod state;
mod ui;

use anyhow::Result;
use app::WaterQualityApp;
use eframe::egui;
use water_quality::config::ArtifactPaths;
use water_quality::data;

fn main() -> Result<()> {
    env_logger::init();

    // Both artifacts must load before any window is shown.
    let paths = ArtifactPaths::from_env();
    let model = data::loader::load_context(&paths).inspect_err(|e| {
        log::error!("Failed to load model artifacts: {e:#}");
    })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Water Quality & Rivers",
        options,
        Box::new(|_cc| Ok(Box::new(WaterQualityApp::new(model)))),
    )
    .map_err(|e| anyhow::anyhow!("running UI: {e}"))
}
