//! The quiz state machine.

use std::time::Duration;

use rand::{rngs::SmallRng, Rng, SeedableRng};
use tracing::debug;

use crate::{
    display::Display,
    domain::{ImageItem, ResultKind, SelectionMode, SourceFile, Statistics, IMAGE_TYPE_PREFIX},
    error::QuizError,
};

/// Delay before a correct answer advances to the next image when
/// auto-advance is enabled. The host owns the actual timer.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(1000);

const MASK_CHAR: char = '*';
const RESULT_CORRECT: &str = "Correct!";
const RESULT_INCORRECT: &str = "Incorrect, try again!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// What a single [`QuizController::submit_answer`] call decided.
/// `auto_advance_after` is `Some` exactly when the host should arm a
/// deferred [`QuizController::next_image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub verdict: Verdict,
    pub auto_advance_after: Option<Duration>,
}

/// Owns all game state; nothing else mutates it. Generic over the opaque
/// image handle type the host renders from.
pub struct QuizController<H> {
    items: Vec<ImageItem<H>>,
    current_index: usize,
    correct_count: u32,
    attempt_count: u32,
    hint_count: u32,
    revealed_prefix: usize,
    mode: SelectionMode,
    auto_advance: bool,
    rng: SmallRng,
}

impl<H> Default for QuizController<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> QuizController<H> {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Deterministic construction for tests.
    pub fn with_rng(rng: SmallRng) -> Self {
        Self {
            items: Vec::new(),
            current_index: 0,
            correct_count: 0,
            attempt_count: 0,
            hint_count: 0,
            revealed_prefix: 0,
            mode: SelectionMode::Sequential,
            auto_advance: false,
            rng,
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_item(&self) -> Option<&ImageItem<H>> {
        self.items.get(self.current_index)
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    pub fn statistics(&self) -> Statistics {
        Statistics {
            attempts: self.attempt_count,
            correct: self.correct_count,
            hints: self.hint_count,
        }
    }

    /// Replace the image set with the qualifying entries of `files`, in
    /// input order, and restart the session on the first item. Fails with
    /// [`QuizError::NoImagesFound`] when nothing qualifies, leaving prior
    /// state (including a previously loaded set) untouched. No shuffle is
    /// applied at load time regardless of the selected mode.
    pub fn load_image_set(
        &mut self,
        files: Vec<SourceFile<H>>,
        display: &mut impl Display<H>,
    ) -> Result<(), QuizError> {
        let offered = files.len();
        let items: Vec<ImageItem<H>> = files
            .into_iter()
            .filter(|file| file.type_tag.starts_with(IMAGE_TYPE_PREFIX))
            .map(ImageItem::from_source)
            .collect();
        if items.is_empty() {
            return Err(QuizError::NoImagesFound);
        }

        debug!(offered, kept = items.len(), "image set loaded");
        self.items = items;
        display.show_game_panel();
        self.reset_session(display);
        Ok(())
    }

    /// Check `raw_input` against the current display name. Both sides are
    /// trimmed and lowercased; the comparison is exact equality. Every
    /// call counts as an attempt, repeated submissions included. Returns
    /// `None` (and changes nothing) when no set is loaded.
    pub fn submit_answer(
        &mut self,
        raw_input: &str,
        display: &mut impl Display<H>,
    ) -> Option<SubmitOutcome> {
        let expected = normalize(self.current_item()?.display_name());
        let guess = normalize(raw_input);

        self.attempt_count += 1;
        let outcome = if guess == expected {
            self.correct_count += 1;
            display.set_result(RESULT_CORRECT, ResultKind::Correct);
            SubmitOutcome {
                verdict: Verdict::Correct,
                auto_advance_after: self.auto_advance.then_some(AUTO_ADVANCE_DELAY),
            }
        } else {
            display.set_result(RESULT_INCORRECT, ResultKind::Incorrect);
            SubmitOutcome {
                verdict: Verdict::Incorrect,
                auto_advance_after: None,
            }
        };

        debug!(verdict = ?outcome.verdict, attempts = self.attempt_count, "answer submitted");
        self.publish_statistics(display);
        Some(outcome)
    }

    /// Reveal one more leading character of the current display name and
    /// publish the masked form (revealed prefix literal, one `*` per
    /// remaining character). Silent no-op once fully revealed, so hint
    /// charges can never exceed the name length per image.
    pub fn request_hint(&mut self, display: &mut impl Display<H>) {
        let name_len = match self.current_item() {
            Some(item) => item.display_name().chars().count(),
            None => return,
        };
        if self.revealed_prefix >= name_len {
            return;
        }

        self.hint_count += 1;
        self.revealed_prefix += 1;
        let masked = masked_hint(
            self.items[self.current_index].display_name(),
            self.revealed_prefix,
        );
        display.set_hint_text(&masked);
        self.publish_statistics(display);
    }

    /// Advance to another image and redisplay with cleared hint, result,
    /// and answer field. Session counters persist. No-op while no set is
    /// loaded.
    pub fn next_image(&mut self, display: &mut impl Display<H>) {
        if self.items.is_empty() {
            return;
        }
        self.current_index = match self.mode {
            SelectionMode::Sequential => (self.current_index + 1) % self.items.len(),
            SelectionMode::Random => self.random_index(),
        };
        debug!(index = self.current_index, "advanced to next image");
        self.show_current_item(display);
    }

    /// Switching modes restarts the scoring session from the first item.
    pub fn set_mode(&mut self, mode: SelectionMode, display: &mut impl Display<H>) {
        self.mode = mode;
        self.reset_session(display);
    }

    pub fn set_auto_advance(&mut self, enabled: bool) {
        self.auto_advance = enabled;
    }

    /// Random draw matching the reference behavior: a throwaway first
    /// draw, then candidates until one differs from that first draw (not
    /// from the index currently on screen). A single-item set accepts any
    /// draw immediately.
    fn random_index(&mut self) -> usize {
        let len = self.items.len();
        let first_draw = self.rng.gen_range(0..len);
        if len <= 1 {
            return first_draw;
        }
        loop {
            let candidate = self.rng.gen_range(0..len);
            if candidate != first_draw {
                return candidate;
            }
        }
    }

    /// Zero every counter, return to the first item, and redisplay it.
    fn reset_session(&mut self, display: &mut impl Display<H>) {
        self.current_index = 0;
        self.correct_count = 0;
        self.attempt_count = 0;
        self.hint_count = 0;
        self.publish_statistics(display);
        self.show_current_item(display);
    }

    fn show_current_item(&mut self, display: &mut impl Display<H>) {
        self.revealed_prefix = 0;
        let Some(item) = self.items.get(self.current_index) else {
            return;
        };
        display.render_image(item.handle());
        display.set_answer_field("");
        display.set_hint_text("");
        display.set_result("", ResultKind::None);
    }

    fn publish_statistics(&self, display: &mut impl Display<H>) {
        display.set_statistics(&self.statistics());
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

fn masked_hint(name: &str, revealed: usize) -> String {
    name.chars()
        .enumerate()
        .map(|(i, c)| if i < revealed { c } else { MASK_CHAR })
        .collect()
}
