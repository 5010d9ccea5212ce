#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
// Entry point kept minimal: window config and app launch only; everything
// else lives in the app module (src/app.rs).

use eframe::egui;

mod app;
mod catalog;
mod logger;
mod types;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    logger::init();
    app::config::load_config_from_disk();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1080.0, 720.0])
            .with_resizable(true),
        ..Default::default()
    };

    let res = eframe::run_native(
        "Event Deck",
        native_options,
        Box::new(|_cc| Box::new(app::EventDeckApp::default())),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
