mod api;
mod app;

use app::DesktopApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Chemical Equipment Visualizer",
        options,
        Box::new(|_cc| Box::new(DesktopApp::default())),
    )
}
