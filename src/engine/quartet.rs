//! Quarteto: four boards, one guess stream
//!
//! Same contract as dueto, extended to four targets and nine attempts. The
//! per-guess win count (0..=4) feeds differentiated host feedback ("N words
//! at once").

use super::session::{DrawError, MULTI_WORD_LENGTH, Session};
use crate::services::WordService;

/// Shared attempt budget for quarteto sessions
pub const QUARTET_MAX_ATTEMPTS: usize = 9;

/// A four-board session
pub type QuartetSession = Session<4>;

impl Session<4> {
    /// Start a quarteto session: four distinct five-letter targets
    ///
    /// # Errors
    /// Returns `DrawError` when the source fails to produce four distinct
    /// targets.
    pub fn new_quartet<S>(service: &mut S) -> Result<Self, DrawError>
    where
        S: WordService + ?Sized,
    {
        Self::draw(service, MULTI_WORD_LENGTH, QUARTET_MAX_ATTEMPTS)
    }
}

#[cfg(test)]
mod tests {
    use super::super::session::tests::{ScriptedService, submit};
    use super::*;
    use crate::engine::BoardStatus;

    const TARGETS: [&str; 4] = ["GATOS", "MESAS", "PEDRA", "MUNDO"];

    fn quartet() -> (QuartetSession, ScriptedService) {
        let mut service = ScriptedService::with_draws(TARGETS.to_vec());
        let session = QuartetSession::new_quartet(&mut service).unwrap();
        (session, service)
    }

    #[test]
    fn new_quartet_draws_four_distinct_targets() {
        let (session, _service) = quartet();

        assert_eq!(session.max_attempts(), QUARTET_MAX_ATTEMPTS);
        for i in 0..4 {
            for j in (i + 1)..4 {
                assert_ne!(session.reveal_target(i), session.reveal_target(j));
            }
        }
    }

    #[test]
    fn boards_resolve_independently() {
        let (mut session, mut service) = quartet();

        let report = submit(&mut session, &mut service, "PEDRA").unwrap();
        assert_eq!(report.wins_this_guess, 1);
        assert!(report.partial_win);
        assert_eq!(session.board_status(2), BoardStatus::Won { attempt: 0 });
        for board in [0, 1, 3] {
            assert_eq!(session.board_status(board), BoardStatus::Playing);
        }
    }

    #[test]
    fn wins_accumulate_across_guesses_to_full_win() {
        let (mut session, mut service) = quartet();

        submit(&mut session, &mut service, "GATOS").unwrap();
        submit(&mut session, &mut service, "MESAS").unwrap();
        submit(&mut session, &mut service, "PEDRA").unwrap();
        let report = submit(&mut session, &mut service, "MUNDO").unwrap();

        assert!(report.full_win);
        assert!(report.session_over);
        assert!(session.is_won());
        assert_eq!(session.history().len(), 4);
    }

    #[test]
    fn budget_loss_marks_only_unsolved_boards() {
        let (mut session, mut service) = quartet();

        submit(&mut session, &mut service, "GATOS").unwrap();
        for word in [
            "FESTA", "NOITE", "TEMPO", "SONHO", "CARRO", "LIVRO", "VERDE", "PRAIA",
        ] {
            submit(&mut session, &mut service, word).unwrap();
        }

        assert_eq!(session.board_status(0), BoardStatus::Won { attempt: 0 });
        assert_eq!(session.board_status(1), BoardStatus::Lost);
        assert_eq!(session.board_status(2), BoardStatus::Lost);
        assert_eq!(session.board_status(3), BoardStatus::Lost);
        assert!(session.is_over());
    }

    #[test]
    fn settled_boards_get_no_rows_in_later_reports() {
        let (mut session, mut service) = quartet();

        submit(&mut session, &mut service, "GATOS").unwrap();
        submit(&mut session, &mut service, "MESAS").unwrap();
        let report = submit(&mut session, &mut service, "FESTA").unwrap();

        assert!(report.rows[0].is_none());
        assert!(report.rows[1].is_none());
        assert!(report.rows[2].is_some());
        assert!(report.rows[3].is_some());
    }

    #[test]
    fn keyboard_overlay_has_one_slot_per_board() {
        let (mut session, mut service) = quartet();
        submit(&mut session, &mut service, "GATOS").unwrap();

        let keyboard = session.keyboard();
        let statuses = keyboard.statuses('S').unwrap();
        assert_eq!(statuses.len(), 4);
    }

    #[test]
    fn last_attempt_fires_while_any_board_still_plays() {
        let (mut session, mut service) = quartet();

        submit(&mut session, &mut service, "GATOS").unwrap();
        submit(&mut session, &mut service, "MESAS").unwrap();
        submit(&mut session, &mut service, "PEDRA").unwrap();

        let words = ["FESTA", "NOITE", "TEMPO", "SONHO", "CARRO"];
        for (i, word) in words.iter().enumerate() {
            let report = submit(&mut session, &mut service, word).unwrap();
            // Budget 9: the signal fires after the eighth guess
            assert_eq!(report.last_attempt, session.history().len() == 8, "{i}");
        }
    }
}
