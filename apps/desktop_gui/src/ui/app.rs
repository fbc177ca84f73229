//! App shell: owns the controller, mirrors its display output, and wires
//! egui widgets to the five quiz events.

use std::{
    collections::HashMap,
    path::PathBuf,
    time::Instant,
};

use eframe::egui;
use egui::TextureHandle;
use quiz_core::{
    Display, QuizController, QuizError, ResultKind, SelectionMode, Statistics,
};
use tracing::{info, warn};

use crate::{media, source};

const IMAGE_VIEW_MAX_HEIGHT: f32 = 420.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActivePanel {
    Upload,
    Game,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusBannerSeverity {
    Error,
}

#[derive(Debug, Clone)]
struct StatusBanner {
    severity: StatusBannerSeverity,
    message: String,
}

impl StatusBanner {
    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: StatusBannerSeverity::Error,
            message: message.into(),
        }
    }
}

/// Render-side mirror of the controller's outbound display calls; egui
/// paints from this every frame.
struct QuizView {
    panel: ActivePanel,
    current_image: Option<PathBuf>,
    answer_field: String,
    hint_text: String,
    result_text: String,
    result_kind: ResultKind,
    stats: Statistics,
}

impl QuizView {
    fn new() -> Self {
        Self {
            panel: ActivePanel::Upload,
            current_image: None,
            answer_field: String::new(),
            hint_text: String::new(),
            result_text: String::new(),
            result_kind: ResultKind::None,
            stats: Statistics::default(),
        }
    }
}

impl Display<PathBuf> for QuizView {
    fn render_image(&mut self, handle: &PathBuf) {
        self.current_image = Some(handle.clone());
    }

    fn set_answer_field(&mut self, value: &str) {
        self.answer_field = value.to_string();
    }

    fn set_hint_text(&mut self, text: &str) {
        self.hint_text = text.to_string();
    }

    fn set_result(&mut self, text: &str, kind: ResultKind) {
        self.result_text = text.to_string();
        self.result_kind = kind;
    }

    fn set_statistics(&mut self, stats: &Statistics) {
        self.stats = *stats;
    }

    fn show_upload_panel(&mut self) {
        self.panel = ActivePanel::Upload;
    }

    fn show_game_panel(&mut self) {
        self.panel = ActivePanel::Game;
    }
}

pub struct QuizApp {
    controller: QuizController<PathBuf>,
    view: QuizView,
    textures: HashMap<PathBuf, TextureHandle>,
    decode_failures: HashMap<PathBuf, String>,
    pending_advances: Vec<Instant>,
    banner: Option<StatusBanner>,
}

impl QuizApp {
    pub fn new() -> Self {
        Self {
            controller: QuizController::new(),
            view: QuizView::new(),
            textures: HashMap::new(),
            decode_failures: HashMap::new(),
            pending_advances: Vec::new(),
            banner: None,
        }
    }

    fn pick_folder_and_load(&mut self) {
        let Some(dir) = rfd::FileDialog::new().pick_folder() else {
            return;
        };
        let files = match source::collect_source_files(&dir) {
            Ok(files) => files,
            Err(err) => {
                self.banner = Some(StatusBanner::error(format!("Failed to scan folder: {err:#}")));
                return;
            }
        };
        match self.controller.load_image_set(files, &mut self.view) {
            Ok(()) => {
                // The previous set's handles are gone; release their textures.
                self.textures.clear();
                self.decode_failures.clear();
                self.banner = None;
                info!(items = self.controller.item_count(), folder = %dir.display(), "image set loaded");
            }
            Err(QuizError::NoImagesFound) => {
                self.banner = Some(StatusBanner::error(
                    "The selected folder contains no image files. Pick another folder.",
                ));
            }
        }
    }

    fn submit_current_answer(&mut self) {
        let input = self.view.answer_field.clone();
        let Some(outcome) = self.controller.submit_answer(&input, &mut self.view) else {
            return;
        };
        if let Some(delay) = outcome.auto_advance_after {
            // Each correct submit arms its own deferred advance; pending
            // ones are never cancelled, matching the reference behavior.
            self.pending_advances.push(Instant::now() + delay);
        }
    }

    fn fire_due_advances(&mut self) {
        let now = Instant::now();
        let due = self
            .pending_advances
            .iter()
            .filter(|at| **at <= now)
            .count();
        self.pending_advances.retain(|at| *at > now);
        for _ in 0..due {
            self.controller.next_image(&mut self.view);
        }
    }

    fn request_repaint_for_pending(&self, ctx: &egui::Context) {
        if let Some(earliest) = self.pending_advances.iter().min() {
            ctx.request_repaint_after(earliest.saturating_duration_since(Instant::now()));
        }
    }

    fn texture_for(&mut self, ctx: &egui::Context, path: &PathBuf) -> Option<TextureHandle> {
        if let Some(texture) = self.textures.get(path) {
            return Some(texture.clone());
        }
        if self.decode_failures.contains_key(path) {
            return None;
        }
        match media::decode_image_file(path) {
            Ok(decoded) => {
                let color_image = egui::ColorImage::from_rgba_unmultiplied(
                    [decoded.width, decoded.height],
                    &decoded.rgba,
                );
                let texture = ctx.load_texture(
                    format!("quiz-image:{}", path.display()),
                    color_image,
                    egui::TextureOptions::LINEAR,
                );
                self.textures.insert(path.clone(), texture.clone());
                Some(texture)
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "image decode failed");
                self.decode_failures.insert(path.clone(), format!("{err:#}"));
                None
            }
        }
    }

    fn banner_bar(&mut self, ui: &mut egui::Ui) {
        let Some(banner) = self.banner.clone() else {
            return;
        };
        let fill = match banner.severity {
            StatusBannerSeverity::Error => egui::Color32::from_rgb(84, 34, 34),
        };
        egui::Frame::new()
            .fill(fill)
            .inner_margin(egui::Margin::symmetric(10, 6))
            .corner_radius(6)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.banner = None;
                        }
                    });
                });
            });
        ui.add_space(8.0);
    }

    fn upload_panel(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(140.0);
            ui.heading("Picture Quiz");
            ui.label("Load a folder of images, then guess each file name.");
            ui.add_space(16.0);
            if ui.button("📁  Choose image folder").clicked() {
                self.pick_folder_and_load();
            }
        });
    }

    fn game_panel(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            if ui.button("📁 Load another folder").clicked() {
                self.pick_folder_and_load();
            }
            ui.separator();
            self.mode_controls(ui);
        });
        ui.separator();
        self.statistics_strip(ui);
        ui.separator();
        self.image_view(ui, ctx);
        self.hint_and_result_lines(ui);
        ui.add_space(6.0);
        self.answer_row(ui);
    }

    fn mode_controls(&mut self, ui: &mut egui::Ui) {
        let mut mode = self.controller.mode();
        ui.label("Order:");
        ui.radio_value(&mut mode, SelectionMode::Sequential, "Sequential");
        ui.radio_value(&mut mode, SelectionMode::Random, "Random");
        if mode != self.controller.mode() {
            // Switching modes restarts the scoring session.
            self.controller.set_mode(mode, &mut self.view);
        }

        ui.separator();
        let mut auto_advance = self.controller.auto_advance();
        if ui.checkbox(&mut auto_advance, "Auto next on correct").changed() {
            self.controller.set_auto_advance(auto_advance);
        }
    }

    fn statistics_strip(&self, ui: &mut egui::Ui) {
        let stats = self.view.stats;
        ui.horizontal(|ui| {
            ui.label(format!("Accuracy: {}", stats.weighted_accuracy_text()));
            ui.separator();
            ui.label(format!("Attempts: {}", stats.attempts));
            ui.separator();
            ui.label(format!("Correct: {}", stats.correct));
            ui.separator();
            ui.label(format!("Hints: {}", stats.hints));
        });
    }

    fn image_view(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let Some(path) = self.view.current_image.clone() else {
            return;
        };
        match self.texture_for(ctx, &path) {
            Some(texture) => {
                let max_size = egui::vec2(ui.available_width(), IMAGE_VIEW_MAX_HEIGHT);
                ui.vertical_centered(|ui| {
                    ui.add(egui::Image::new(&texture).max_size(max_size));
                });
            }
            None => {
                let reason = self
                    .decode_failures
                    .get(&path)
                    .cloned()
                    .unwrap_or_default();
                ui.colored_label(
                    egui::Color32::LIGHT_RED,
                    format!("Could not display image: {reason}"),
                );
            }
        }
    }

    fn hint_and_result_lines(&self, ui: &mut egui::Ui) {
        if !self.view.hint_text.is_empty() {
            ui.monospace(format!("Hint: {}", self.view.hint_text));
        }
        if !self.view.result_text.is_empty() {
            let color = match self.view.result_kind {
                ResultKind::Correct => egui::Color32::from_rgb(87, 242, 135),
                ResultKind::Incorrect => egui::Color32::from_rgb(237, 66, 69),
                ResultKind::None => ui.visuals().text_color(),
            };
            ui.colored_label(color, &self.view.result_text);
        }
    }

    fn answer_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.view.answer_field)
                    .hint_text("File name without its extension")
                    .desired_width(280.0),
            );
            let enter_submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let clicked_submit = ui.button("Submit").clicked();
            if enter_submitted || clicked_submit {
                self.submit_current_answer();
                if enter_submitted {
                    response.request_focus();
                }
            }
            if ui.button("Hint").clicked() {
                self.controller.request_hint(&mut self.view);
            }
            if ui.button("Next ▶").clicked() {
                self.controller.next_image(&mut self.view);
            }
        });
    }
}

impl eframe::App for QuizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.fire_due_advances();
        self.request_repaint_for_pending(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.banner_bar(ui);
            match self.view.panel {
                ActivePanel::Upload => self.upload_panel(ui),
                ActivePanel::Game => self.game_panel(ui, ctx),
            }
        });
    }
}
