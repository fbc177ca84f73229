//! UI layer for the quiz desktop app: app shell and panels.

pub mod app;

pub use app::QuizApp;
