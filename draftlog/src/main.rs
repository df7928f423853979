//! draftlog - records ship draft mark readings to text files
//!
//! Six hull positions, a stamped note, save and reopen.

mod app;

use app::DraftLogApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 880.0])
            .with_title("draft mark readings"),
        ..Default::default()
    };

    eframe::run_native(
        "draftlog",
        options,
        Box::new(|cc| {
            draftcore::DraftTheme::default().apply(&cc.egui_ctx);
            Box::new(DraftLogApp::new(cc))
        }),
    )
}
