//! Core domain types for the puzzle engine
//!
//! Pure, framework-free building blocks: words, per-position feedback, and
//! the derived keyboard overlay.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{
    FeedbackRow, LetterFeedback, has_correct, has_present, is_all_absent, is_all_correct, score,
};
pub use keyboard::{KeyStatus, KeyboardOverlay};
pub use word::{Word, WordError, fold_letter};
