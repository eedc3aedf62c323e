//! Single-board sessions (classic and speed-run)
//!
//! Both solo modes share this machine; the speed-run timer ticks outside the
//! engine and only its reported value is displayed. Solo sessions carry the
//! two assists: the one-letter-away detector and the reveal selector.

use super::session::{DrawError, Session};
use crate::services::WordService;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Shared attempt budget for solo sessions
pub const SOLO_MAX_ATTEMPTS: usize = 6;

/// A single-board session
pub type SoloSession = Session<1>;

impl Session<1> {
    /// Start a solo session: one target, board width from the word source
    ///
    /// # Errors
    /// Returns `DrawError` when the source fails to produce a target.
    pub fn new_solo<S>(service: &mut S) -> Result<Self, DrawError>
    where
        S: WordService + ?Sized,
    {
        let length = service.word_length().map_err(DrawError::Service)?;
        Self::draw(service, length, SOLO_MAX_ATTEMPTS)
    }

    /// Whether the typed buffer differs from the target at exactly one
    /// position
    ///
    /// Advisory only, never part of the win condition: it lets the host hint
    /// "almost there" while the player is still typing. Fires only on a
    /// completely filled buffer, accent-insensitively.
    #[must_use]
    pub fn one_letter_away(&self) -> bool {
        let board = &self.boards[0];
        if !board.status().is_playing() {
            return false;
        }

        let slots = self.buffer.slots();
        if slots.len() != board.target().len() || slots.iter().any(Option::is_none) {
            return false;
        }

        let differing = slots
            .iter()
            .enumerate()
            .filter(|&(i, &slot)| slot.is_some_and(|c| c as u8 != board.target().letter_at(i)))
            .count();
        differing == 1
    }

    /// Pick a uniformly-random target position not yet matched exactly by
    /// any historical guess
    ///
    /// Returns `None` when every position has been matched at some point.
    #[must_use]
    pub fn revealable_position<R>(&self, rng: &mut R) -> Option<usize>
    where
        R: Rng + ?Sized,
    {
        let target = self.boards[0].target();
        let open: Vec<usize> = (0..target.len())
            .filter(|&i| {
                !self
                    .history
                    .iter()
                    .any(|guess| guess.letter_at(i) == target.letter_at(i))
            })
            .collect();
        open.choose(rng).copied()
    }

    /// Reveal assist: pre-fill the buffer with the correct letter at a
    /// random unmatched position, consuming no guess
    ///
    /// Returns the revealed position, or `None` when the session is over or
    /// nothing remains to reveal.
    pub fn apply_reveal<R>(&mut self, rng: &mut R) -> Option<usize>
    where
        R: Rng + ?Sized,
    {
        if self.is_over() {
            return None;
        }
        let position = self.revealable_position(rng)?;
        let letter = self.boards[0].target().letter_at(position) as char;
        self.buffer.prefill(position, letter);
        Some(position)
    }
}

#[cfg(test)]
mod tests {
    use super::super::session::tests::{ScriptedService, submit, type_word};
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn solo(target: &'static str) -> (SoloSession, ScriptedService) {
        let mut service = ScriptedService::with_draws(vec![target]);
        let session = SoloSession::new_solo(&mut service).unwrap();
        (session, service)
    }

    #[test]
    fn new_solo_uses_the_service_word_length() {
        let mut service = ScriptedService::with_draws(vec!["PEDRA"]);
        let session = SoloSession::new_solo(&mut service).unwrap();

        assert_eq!(session.word_length(), 5);
        assert_eq!(session.max_attempts(), SOLO_MAX_ATTEMPTS);
        assert_eq!(session.buffer().len(), 5);
    }

    #[test]
    fn one_letter_away_on_a_full_near_miss() {
        let (mut session, _service) = solo("PEDRA");

        type_word(&mut session, "PEDRO");
        assert!(session.one_letter_away());
    }

    #[test]
    fn one_letter_away_needs_a_full_buffer() {
        let (mut session, _service) = solo("PEDRA");

        type_word(&mut session, "PEDR");
        assert!(!session.one_letter_away());
    }

    #[test]
    fn one_letter_away_is_false_on_exact_and_far_words() {
        let (mut session, _service) = solo("PEDRA");

        type_word(&mut session, "PEDRA");
        assert!(!session.one_letter_away());

        for _ in 0..5 {
            session.remove_letter();
        }
        type_word(&mut session, "MUNDO");
        assert!(!session.one_letter_away());
    }

    #[test]
    fn one_letter_away_is_accent_insensitive() {
        let (mut session, _service) = solo("AVIÃO");

        type_word(&mut session, "AVISO");
        assert!(session.one_letter_away());
    }

    #[test]
    fn revealable_position_skips_matched_positions() {
        let (mut session, mut service) = solo("PEDRA");
        let mut rng = StdRng::seed_from_u64(7);

        // PRADO matches P exactly at position 0
        submit(&mut session, &mut service, "PRADO").unwrap();

        for _ in 0..50 {
            let position = session.revealable_position(&mut rng).unwrap();
            assert_ne!(position, 0);
        }
    }

    #[test]
    fn revealable_position_exhausts_to_none() {
        let (mut session, mut service) = solo("PEDRA");
        let mut rng = StdRng::seed_from_u64(7);

        // A winning guess matches every position
        submit(&mut session, &mut service, "PEDRA").unwrap();
        assert_eq!(session.revealable_position(&mut rng), None);
    }

    #[test]
    fn apply_reveal_prefills_the_correct_letter() {
        let (mut session, _service) = solo("PEDRA");
        let mut rng = StdRng::seed_from_u64(7);

        let position = session.apply_reveal(&mut rng).unwrap();
        let revealed = session.buffer().slot(position).unwrap();
        assert_eq!(revealed as u8, session.reveal_target(0).letter_at(position));

        // No guess was consumed
        assert!(session.history().is_empty());
    }

    #[test]
    fn apply_reveal_after_session_end_is_none() {
        let (mut session, mut service) = solo("PEDRA");
        let mut rng = StdRng::seed_from_u64(7);

        submit(&mut session, &mut service, "PEDRA").unwrap();
        assert_eq!(session.apply_reveal(&mut rng), None);
    }
}
