#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod diagram_plot;
mod fetch_worker;
mod fluid_picker;

use app::ThermoviewApp;

const DEFAULT_BASE_URL: &str = "http://localhost:5050/thermo";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let base_url =
        std::env::var("THERMOVIEW_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title("Thermoview"),
        ..Default::default()
    };

    eframe::run_native(
        "Thermoview",
        options,
        Box::new(move |cc| Ok(Box::new(ThermoviewApp::new(cc, base_url)))),
    )
}
