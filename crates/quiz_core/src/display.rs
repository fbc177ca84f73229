//! Outbound rendering boundary.

use crate::domain::{ResultKind, Statistics};

/// Everything the controller publishes to the host UI. Replaces direct
/// widget wiring with an explicit interface so hosts and tests can supply
/// their own implementations.
pub trait Display<H> {
    /// Show the image behind `handle` as the current puzzle.
    fn render_image(&mut self, handle: &H);

    /// Overwrite the answer input field (used to clear it on advance).
    fn set_answer_field(&mut self, value: &str);

    /// Show the masked hint line; an empty string clears it.
    fn set_hint_text(&mut self, text: &str);

    /// Show the verdict line; an empty string with [`ResultKind::None`]
    /// clears it.
    fn set_result(&mut self, text: &str, kind: ResultKind);

    fn set_statistics(&mut self, stats: &Statistics);

    fn show_upload_panel(&mut self);

    fn show_game_panel(&mut self);
}
