//! Core data types shared between the controller and its hosts.

/// Type-tag prefix that qualifies a [`SourceFile`] as a quiz image.
pub const IMAGE_TYPE_PREFIX: &str = "image/";

/// A candidate file handed over by the host's file picker, before
/// filtering. `H` is an opaque handle the host uses to render the image
/// later (a path, a URL, raw bytes).
#[derive(Debug, Clone)]
pub struct SourceFile<H> {
    pub name: String,
    pub type_tag: String,
    pub handle: H,
}

/// One selectable quiz image. Immutable once built; the whole set is
/// replaced wholesale on every load, which releases the old handles.
#[derive(Debug, Clone)]
pub struct ImageItem<H> {
    display_name: String,
    handle: H,
}

impl<H> ImageItem<H> {
    pub(crate) fn from_source(file: SourceFile<H>) -> Self {
        Self {
            display_name: display_name_from_file_name(&file.name).to_string(),
            handle: file.handle,
        }
    }

    /// The answer to guess: the source name with everything from the first
    /// `.` onward stripped.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }
}

/// Portion of a file name before the first `.`, or the whole name when no
/// dot is present. A name like `".png"` yields an empty display name.
pub fn display_name_from_file_name(name: &str) -> &str {
    match name.find('.') {
        Some(dot) => &name[..dot],
        None => name,
    }
}

/// How `next` picks the following image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Sequential,
    Random,
}

/// Verdict styling for the result line on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Correct,
    Incorrect,
    None,
}

/// Session counters published to the display after every attempt, hint,
/// and reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Statistics {
    pub attempts: u32,
    pub correct: u32,
    pub hints: u32,
}

impl Statistics {
    /// Plain correct/attempts ratio. Computed for completeness; the
    /// figure shown to the user is [`Statistics::weighted_accuracy`].
    pub fn raw_accuracy(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        f64::from(self.correct) / f64::from(self.attempts)
    }

    /// Accuracy with every hint charged as half an attempt, as a
    /// percentage. Hints never change the attempt counter itself; they
    /// only inflate this denominator.
    pub fn weighted_accuracy(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        f64::from(self.correct) / (f64::from(self.attempts) + f64::from(self.hints) * 0.5) * 100.0
    }

    /// Weighted accuracy rendered with one decimal place, e.g. `"66.7%"`.
    pub fn weighted_accuracy_text(&self) -> String {
        format!("{:.1}%", self.weighted_accuracy())
    }
}

#[cfg(test)]
mod tests {
    use super::{display_name_from_file_name, Statistics};

    #[test]
    fn strips_extension_at_first_dot() {
        assert_eq!(display_name_from_file_name("dog.png"), "dog");
        assert_eq!(display_name_from_file_name("bird01.gif"), "bird01");
        assert_eq!(display_name_from_file_name("archive.tar.gz"), "archive");
        assert_eq!(display_name_from_file_name("no_extension"), "no_extension");
        assert_eq!(display_name_from_file_name(".png"), "");
    }

    #[test]
    fn accuracy_is_zero_before_any_attempt() {
        let stats = Statistics { attempts: 0, correct: 0, hints: 3 };
        assert_eq!(stats.raw_accuracy(), 0.0);
        assert_eq!(stats.weighted_accuracy(), 0.0);
        assert_eq!(stats.weighted_accuracy_text(), "0.0%");
    }

    #[test]
    fn weighted_accuracy_charges_half_an_attempt_per_hint() {
        let stats = Statistics { attempts: 4, correct: 2, hints: 2 };
        assert_eq!(stats.raw_accuracy(), 0.5);
        assert_eq!(stats.weighted_accuracy_text(), "40.0%");

        let stats = Statistics { attempts: 1, correct: 1, hints: 1 };
        assert_eq!(stats.weighted_accuracy_text(), "66.7%");
    }
}
