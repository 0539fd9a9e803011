mod app;
mod chart;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::TabPlotApp;
use config::Config;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let config = Config::load();
    let state = AppState::new(config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "TabPlot – Data Visualization",
        options,
        Box::new(|_cc| Ok(Box::new(TabPlotApp::new(state)))),
    )
}
