#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
// Entry point: logger, settings, like store, then the window.

use eframe::egui;

mod app;
mod gallery;
mod logger;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    logger::init();
    // First run writes defaults so the seed list and paths can be edited
    app::settings::init_settings();
    let store = app::open_like_store();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(ui_constants::WINDOW_SIZE)
            .with_min_inner_size([320.0, 240.0])
            .with_resizable(true),
        ..Default::default()
    };

    let res = eframe::run_native(
        "Card Gallery",
        native_options,
        Box::new(move |_cc| Box::new(app::GalleryApp::new(store))),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
