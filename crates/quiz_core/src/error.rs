use thiserror::Error;

/// The single failure path of the quiz; every other operation is a total
/// function over valid state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// The selected set contained zero entries with an `image/` type tag.
    /// Prior controller state is left untouched.
    #[error("selected folder contains no image files")]
    NoImagesFound,
}
