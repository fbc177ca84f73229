//! Host-independent state machine for the picture-guessing quiz.
//!
//! The controller owns all game state and reacts to five user-driven
//! events: image-set loaded, answer submitted, hint requested, next
//! requested, and mode/option toggled. Rendering and file access stay
//! behind the [`Display`] trait and the [`SourceFile`] input type, so this
//! crate has no GUI or filesystem dependency and every transition is
//! unit-testable.

pub mod controller;
pub mod display;
pub mod domain;
pub mod error;

pub use controller::{QuizController, SubmitOutcome, Verdict, AUTO_ADVANCE_DELAY};
pub use display::Display;
pub use domain::{ImageItem, ResultKind, SelectionMode, SourceFile, Statistics};
pub use error::QuizError;
