use eframe::egui;
use tracing_subscriber::EnvFilter;

use tombola_manager::ui::app::TombolaApp;

fn main() -> eframe::Result<()> {
    init_tracing();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Tombola Manager")
            .with_inner_size([1100.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tombola Manager",
        options,
        Box::new(|_cc| {
            Ok(Box::new(TombolaApp::new()))
        }),
    )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
