//! Dueto: two boards, one guess stream
//!
//! Both targets are solved from the same history under a shared budget of
//! seven attempts. Wins and losses are tracked per board; the partial-win
//! signal fires the moment one board is solved while the other still plays.

use super::session::{DrawError, MULTI_WORD_LENGTH, Session};
use crate::services::WordService;

/// Shared attempt budget for dueto sessions
pub const DUET_MAX_ATTEMPTS: usize = 7;

/// A two-board session
pub type DuetSession = Session<2>;

impl Session<2> {
    /// Start a dueto session: two distinct five-letter targets
    ///
    /// # Errors
    /// Returns `DrawError` when the source fails to produce two distinct
    /// targets.
    pub fn new_duet<S>(service: &mut S) -> Result<Self, DrawError>
    where
        S: WordService + ?Sized,
    {
        Self::draw(service, MULTI_WORD_LENGTH, DUET_MAX_ATTEMPTS)
    }
}
