//! Per-position guess feedback
//!
//! Scoring follows Wordle's exact duplicate-letter rules: all exact matches
//! are resolved first, then misplaced letters draw from the remaining pool.

use super::Word;

/// Feedback for one letter position of a scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterFeedback {
    /// Slot not filled yet (placeholder rendering)
    Empty,
    /// Letter does not occur in the target (or all copies are spoken for)
    Absent,
    /// Letter occurs in the target at a different position
    Present,
    /// Letter matches the target at this position
    Correct,
}

/// A scored row: one feedback entry per letter position
pub type FeedbackRow = Vec<LetterFeedback>;

/// Score a guess against a target word
///
/// Comparison is accent-insensitive (both words are already normalized).
/// An empty target yields an empty row, used for "no target yet" rendering.
/// Equal lengths are a caller precondition; the engines reject mismatched
/// guesses before scoring.
///
/// # Algorithm
/// 1. First pass: mark exact position matches and remove them from the
///    target's available letter pool
/// 2. Second pass: mark remaining positions `Present` while the pool still
///    holds that letter, `Absent` otherwise
///
/// # Examples
/// ```
/// use termo_engine::core::{LetterFeedback, Word, score};
///
/// let guess = Word::new("luzas").unwrap();
/// let target = Word::new("azule").unwrap();
/// let row = score(&guess, &target);
///
/// // Z and A are misplaced, not exact
/// assert_eq!(row[1], LetterFeedback::Present);
/// assert_eq!(row[3], LetterFeedback::Present);
/// ```
#[must_use]
pub fn score(guess: &Word, target: &Word) -> FeedbackRow {
    if target.is_empty() {
        return Vec::new();
    }
    debug_assert_eq!(guess.len(), target.len(), "engines reject length mismatch");

    let len = target.len();
    let mut row = vec![LetterFeedback::Absent; len];
    let mut available = target.letter_counts();

    // First pass: exact matches consume from the pool before any
    // present/absent decision is made
    // Allow: index needed to compare guess[i] with target[i] and set row[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..len {
        if guess.letter_at(i) == target.letter_at(i) {
            row[i] = LetterFeedback::Correct;
            if let Some(count) = available.get_mut(&guess.letter_at(i)) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced letters, limited by the remaining pool
    // Allow: index needed to check row[i] against guess[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..len {
        if row[i] == LetterFeedback::Absent {
            if let Some(count) = available.get_mut(&guess.letter_at(i))
                && *count > 0
            {
                row[i] = LetterFeedback::Present;
                *count -= 1;
            }
        }
    }

    row
}

/// Every position scored `Correct` (a winning row)
#[must_use]
pub fn is_all_correct(row: &[LetterFeedback]) -> bool {
    !row.is_empty() && row.iter().all(|&f| f == LetterFeedback::Correct)
}

/// Every position scored `Absent`
#[must_use]
pub fn is_all_absent(row: &[LetterFeedback]) -> bool {
    !row.is_empty() && row.iter().all(|&f| f == LetterFeedback::Absent)
}

/// At least one position scored `Present`
#[must_use]
pub fn has_present(row: &[LetterFeedback]) -> bool {
    row.contains(&LetterFeedback::Present)
}

/// At least one position scored `Correct`
#[must_use]
pub fn has_correct(row: &[LetterFeedback]) -> bool {
    row.contains(&LetterFeedback::Correct)
}
