// Chantier Planning Application
// Main entry point

use anyhow::{anyhow, Result};
use chantier_planning::config::AppConfig;
use chantier_planning::ui_egui::{initialize_database, PlanningApp};
use env_logger::Env;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    log::info!("Starting Chantier Planning");

    let config = AppConfig::load();
    let today = chrono::Local::now().date_naive();
    let database = initialize_database(&config, today)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([900.0, 560.0])
            .with_title("Planning chantiers"),
        ..Default::default()
    };

    eframe::run_native(
        "Planning chantiers",
        options,
        Box::new(move |cc| Ok(Box::new(PlanningApp::new(cc, database, today)))),
    )
    .map_err(|err| anyhow!("Failed to run application: {}", err))
}
