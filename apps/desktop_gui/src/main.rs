mod media;
mod source;
mod ui;

use eframe::egui;

use crate::ui::QuizApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Picture Quiz")
            .with_inner_size([1080.0, 720.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Picture Quiz",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new()))),
    )
}
