//! Multi-board game session state machine
//!
//! One `Session<N>` owns N target boards, the shared guess history, the
//! shared attempt budget, and the in-progress guess buffer. The board count
//! is a const generic, so solo, dueto and quarteto sessions are distinct
//! types sharing one implementation.

use super::buffer::GuessBuffer;
use crate::core::{
    FeedbackRow, KeyboardOverlay, Word, has_correct, has_present, is_all_absent, score,
};
use crate::services::{AccentCache, ServiceError, WordService};
use std::fmt;

/// Board width shared by the multi-board variants
pub const MULTI_WORD_LENGTH: usize = 5;

/// Redraw bound per session; a misbehaving word source fails the draw
/// instead of hanging it
const MAX_DRAW_ATTEMPTS: usize = 64;

/// Lifecycle of a single board
///
/// Transitions are monotonic: `Playing -> Won` or `Playing -> Lost`, never
/// back. The winning guess index is recorded at the moment of transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardStatus {
    Playing,
    Won { attempt: usize },
    Lost,
}

impl BoardStatus {
    #[inline]
    #[must_use]
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    #[inline]
    #[must_use]
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_lost(self) -> bool {
        matches!(self, Self::Lost)
    }
}

/// One target word and its status
#[derive(Debug, Clone)]
pub(super) struct Board {
    target: Word,
    status: BoardStatus,
}

impl Board {
    pub(super) const fn status(&self) -> BoardStatus {
        self.status
    }

    pub(super) const fn target(&self) -> &Word {
        &self.target
    }
}

/// Rejection taxonomy for `submit_guess`
///
/// None of these mutate the session; the player may correct and retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The buffer still has empty slots
    IncompleteGuess,
    /// The word was already submitted this session
    DuplicateGuess,
    /// The dictionary does not know the word
    UnknownWord,
    /// The validity check itself failed; the session stays playable
    Verification(ServiceError),
    /// Every board already left `Playing`
    SessionOver,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteGuess => write!(f, "Guess is incomplete"),
            Self::DuplicateGuess => write!(f, "Word was already tried"),
            Self::UnknownWord => write!(f, "Word not in the dictionary"),
            Self::Verification(e) => write!(f, "Could not verify the word: {e}"),
            Self::SessionOver => write!(f, "The game is over"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Error drawing targets for a new session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    Service(ServiceError),
    /// The source kept returning duplicates or unusable candidates
    Exhausted,
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Service(e) => write!(f, "could not draw a target: {e}"),
            Self::Exhausted => write!(f, "word source kept returning unusable candidates"),
        }
    }
}

impl std::error::Error for DrawError {}

impl From<ServiceError> for DrawError {
    fn from(e: ServiceError) -> Self {
        Self::Service(e)
    }
}

/// Outcome of one accepted guess
///
/// Carries the scored rows and the signals the presentation layer reacts
/// to. Boards that had already left `Playing` before this guess get no row.
#[derive(Debug, Clone)]
pub struct GuessReport<const N: usize> {
    /// The accepted guess, accent-corrected when the lookup succeeded
    pub guess: Word,
    /// Feedback per board; `None` for boards settled before this guess
    pub rows: [Option<FeedbackRow>; N],
    /// How many boards this guess won (0..=N)
    pub wins_this_guess: usize,
    /// A board was won while at least one other is still playing
    pub partial_win: bool,
    /// Every board is now won
    pub full_win: bool,
    /// No board is still playing
    pub session_over: bool,
    /// Exactly one attempt remains and a board is still playing
    pub last_attempt: bool,
}

impl<const N: usize> GuessReport<N> {
    /// Every position scored `Absent` on every board still in play
    #[must_use]
    pub fn all_absent(&self) -> bool {
        let mut scored = self.rows.iter().flatten();
        scored.clone().next().is_some() && scored.all(|row| is_all_absent(row))
    }

    /// Some board saw both a `Correct` and a `Present` from this guess
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.rows
            .iter()
            .flatten()
            .any(|row| has_correct(row) && has_present(row))
    }

    /// Some board saw a `Present` but no `Correct` from this guess
    #[must_use]
    pub fn has_present_only(&self) -> bool {
        self.rows
            .iter()
            .flatten()
            .any(|row| has_present(row) && !has_correct(row))
    }
}

/// A complete puzzle session over N boards
#[derive(Debug, Clone)]
pub struct Session<const N: usize> {
    pub(super) boards: [Board; N],
    pub(super) history: Vec<Word>,
    pub(super) buffer: GuessBuffer,
    max_attempts: usize,
    word_length: usize,
}

impl<const N: usize> Session<N> {
    /// Draw N pairwise-distinct targets of the given length and start a
    /// session
    ///
    /// Candidates that collide with an already-drawn target (or do not fit
    /// the board) are redrawn, up to a bound.
    ///
    /// # Errors
    /// Returns `DrawError` when the source fails or keeps producing
    /// unusable candidates.
    pub(crate) fn draw<S>(
        service: &mut S,
        word_length: usize,
        max_attempts: usize,
    ) -> Result<Self, DrawError>
    where
        S: WordService + ?Sized,
    {
        let mut targets: Vec<Word> = Vec::with_capacity(N);
        let mut draws = 0;

        while targets.len() < N {
            draws += 1;
            if draws > MAX_DRAW_ATTEMPTS {
                return Err(DrawError::Exhausted);
            }

            let candidate = service.random_word()?;
            let Ok(word) = Word::new(&candidate) else {
                continue;
            };
            if word.len() != word_length || targets.contains(&word) {
                continue;
            }
            targets.push(word);
        }

        let Ok(targets) = <[Word; N]>::try_from(targets) else {
            // Loop guard guarantees exactly N
            return Err(DrawError::Exhausted);
        };

        Ok(Self {
            boards: targets.map(|target| Board {
                target,
                status: BoardStatus::Playing,
            }),
            history: Vec::new(),
            buffer: GuessBuffer::new(word_length),
            max_attempts,
            word_length,
        })
    }

    /// Board width for this session
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Shared attempt budget
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Guesses submitted so far
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    /// Remaining shared budget
    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.max_attempts - self.history.len()
    }

    /// Accepted guesses, in submission order
    #[must_use]
    pub fn history(&self) -> &[Word] {
        &self.history
    }

    /// Status of every board
    #[must_use]
    pub fn statuses(&self) -> [BoardStatus; N] {
        std::array::from_fn(|i| self.boards[i].status)
    }

    /// Status of one board
    ///
    /// # Panics
    /// Panics if `board >= N`
    #[must_use]
    pub fn board_status(&self, board: usize) -> BoardStatus {
        self.boards[board].status
    }

    /// No board is still playing; no further guesses are accepted
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.boards.iter().all(|b| !b.status.is_playing())
    }

    /// Every board was won
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.boards.iter().all(|b| b.status.is_won())
    }

    /// The in-progress guess buffer
    #[must_use]
    pub fn buffer(&self) -> &GuessBuffer {
        &self.buffer
    }

    /// Type a letter into the current guess; no-op once the session is over
    pub fn add_letter(&mut self, c: char) {
        if !self.is_over() {
            self.buffer.add_letter(c);
        }
    }

    /// Erase from the current guess; no-op once the session is over
    pub fn remove_letter(&mut self) {
        if !self.is_over() {
            self.buffer.remove_letter();
        }
    }

    /// Move the selection cursor; no-op once the session is over
    pub fn select_slot(&mut self, index: usize) {
        if !self.is_over() {
            self.buffer.select(index);
        }
    }

    /// Submit the buffered guess
    ///
    /// Local preconditions (complete buffer, not a duplicate) are checked
    /// before any external call. The validity check is authoritative: a
    /// negative answer or a failure rejects the submission with no state
    /// change. The accent lookup is best-effort: on failure the plain form
    /// is kept and the game advances normally.
    ///
    /// # Errors
    /// Returns `SubmitError` describing the rejection; the session is
    /// unchanged in every error case.
    pub fn submit_guess<S>(
        &mut self,
        service: &mut S,
        accents: &mut AccentCache,
    ) -> Result<GuessReport<N>, SubmitError>
    where
        S: WordService + ?Sized,
    {
        if self.is_over() {
            return Err(SubmitError::SessionOver);
        }
        let Some(text) = self.buffer.text() else {
            return Err(SubmitError::IncompleteGuess);
        };
        let plain = Word::new(&text).expect("buffer slots hold folded letters");

        if self.history.contains(&plain) {
            return Err(SubmitError::DuplicateGuess);
        }

        match service.check_word(plain.display()) {
            Ok(true) => {}
            Ok(false) => return Err(SubmitError::UnknownWord),
            Err(e) => return Err(SubmitError::Verification(e)),
        }

        // Accent restoration may not change the letters, only the display
        let word = match Word::new(accents.restore(service, plain.display())) {
            Ok(restored) if restored == plain => restored,
            _ => plain,
        };

        self.history.push(word.clone());
        let attempt = self.history.len() - 1;
        let exhausted = self.history.len() >= self.max_attempts;

        let mut rows: [Option<FeedbackRow>; N] = std::array::from_fn(|_| None);
        let mut wins_this_guess = 0;
        for (i, board) in self.boards.iter_mut().enumerate() {
            if !board.status.is_playing() {
                continue;
            }
            let row = score(&word, &board.target);
            if word == board.target {
                board.status = BoardStatus::Won { attempt };
                wins_this_guess += 1;
            } else if exhausted {
                board.status = BoardStatus::Lost;
            }
            rows[i] = Some(row);
        }

        self.buffer.reset();

        let still_playing = self.boards.iter().any(|b| b.status.is_playing());
        Ok(GuessReport {
            guess: word,
            rows,
            wins_this_guess,
            partial_win: wins_this_guess > 0 && still_playing,
            full_win: self.is_won(),
            session_over: !still_playing,
            last_attempt: still_playing && self.history.len() == self.max_attempts - 1,
        })
    }

    /// Recompute the keyboard overlay from the whole history
    #[must_use]
    pub fn keyboard(&self) -> KeyboardOverlay<N> {
        KeyboardOverlay::aggregate(&self.history, std::array::from_fn(|i| &self.boards[i].target))
    }

    /// Scored rows for one board, for rendering
    ///
    /// A won board's rows stop at its winning guess; a board still playing
    /// (or lost) shows the whole history.
    ///
    /// # Panics
    /// Panics if `board >= N`
    #[must_use]
    pub fn board_rows(&self, board: usize) -> Vec<FeedbackRow> {
        let b = &self.boards[board];
        let shown = match b.status {
            BoardStatus::Won { attempt } => attempt + 1,
            _ => self.history.len(),
        };
        self.history[..shown]
            .iter()
            .map(|guess| score(guess, &b.target))
            .collect()
    }

    /// The explicit reveal affordance; targets are never otherwise exposed
    ///
    /// # Panics
    /// Panics if `board >= N`
    #[must_use]
    pub fn reveal_target(&self, board: usize) -> &Word {
        &self.boards[board].target
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Scripted service for deterministic engine tests
    pub(crate) struct ScriptedService {
        pub draws: Vec<&'static str>,
        pub next_draw: usize,
        pub length: usize,
        pub reject: Vec<&'static str>,
        pub fail_check: bool,
        pub fail_accents: bool,
        pub accents: Vec<(&'static str, &'static str)>,
    }

    impl ScriptedService {
        pub fn with_draws(draws: Vec<&'static str>) -> Self {
            Self {
                draws,
                next_draw: 0,
                length: 5,
                reject: Vec::new(),
                fail_check: false,
                fail_accents: false,
                accents: Vec::new(),
            }
        }
    }

    impl WordService for ScriptedService {
        fn random_word(&mut self) -> Result<String, ServiceError> {
            let word = self
                .draws
                .get(self.next_draw)
                .ok_or_else(|| ServiceError::Unavailable("script exhausted".to_string()))?;
            self.next_draw += 1;
            Ok((*word).to_string())
        }

        fn word_length(&mut self) -> Result<usize, ServiceError> {
            Ok(self.length)
        }

        fn check_word(&mut self, word: &str) -> Result<bool, ServiceError> {
            if self.fail_check {
                return Err(ServiceError::Unavailable("network down".to_string()));
            }
            Ok(!self.reject.contains(&word))
        }

        fn accented_form(&mut self, word: &str) -> Result<String, ServiceError> {
            if self.fail_accents {
                return Err(ServiceError::Unavailable("network down".to_string()));
            }
            Ok(self
                .accents
                .iter()
                .find(|(base, _)| *base == word)
                .map_or_else(|| word.to_string(), |(_, form)| (*form).to_string()))
        }
    }

    pub(crate) fn type_word<const N: usize>(session: &mut Session<N>, word: &str) {
        for c in word.chars() {
            session.add_letter(c);
        }
    }

    pub(crate) fn submit<const N: usize>(
        session: &mut Session<N>,
        service: &mut ScriptedService,
        word: &str,
    ) -> Result<GuessReport<N>, SubmitError> {
        let mut accents = AccentCache::new();
        type_word(session, word);
        session.submit_guess(service, &mut accents)
    }

    fn solo_session(target: &'static str) -> (Session<1>, ScriptedService) {
        let mut service = ScriptedService::with_draws(vec![target]);
        let session = Session::<1>::draw(&mut service, 5, 6).unwrap();
        (session, service)
    }

    #[test]
    fn draw_redraws_on_duplicate_targets() {
        let mut service = ScriptedService::with_draws(vec!["GATOS", "GATOS", "GATOS", "MESAS"]);
        let session = Session::<2>::draw(&mut service, 5, 7).unwrap();

        assert_eq!(session.reveal_target(0).display(), "GATOS");
        assert_eq!(session.reveal_target(1).display(), "MESAS");
    }

    #[test]
    fn draw_skips_wrong_length_candidates() {
        let mut service = ScriptedService::with_draws(vec!["GATO", "ABACAXI", "PEDRA"]);
        let session = Session::<1>::draw(&mut service, 5, 6).unwrap();
        assert_eq!(session.reveal_target(0).display(), "PEDRA");
    }

    #[test]
    fn draw_fails_when_source_fails() {
        let mut service = ScriptedService::with_draws(vec![]);
        let result = Session::<1>::draw(&mut service, 5, 6);
        assert!(matches!(result, Err(DrawError::Service(_))));
    }

    #[test]
    fn draw_gives_up_on_endless_duplicates() {
        let mut service = ScriptedService::with_draws(vec!["GATOS"; 200]);
        let result = Session::<2>::draw(&mut service, 5, 7);
        assert_eq!(result.unwrap_err(), DrawError::Exhausted);
    }

    #[test]
    fn incomplete_guess_rejected_without_external_call() {
        let (mut session, mut service) = solo_session("PEDRA");

        // Would surface as Verification if the engine called out
        service.fail_check = true;
        let mut accents = AccentCache::new();
        type_word(&mut session, "PED");
        let result = session.submit_guess(&mut service, &mut accents);

        assert_eq!(result.unwrap_err(), SubmitError::IncompleteGuess);
        assert!(session.history().is_empty());
    }

    #[test]
    fn winning_guess_sets_won_with_attempt_index() {
        let (mut session, mut service) = solo_session("PEDRA");

        submit(&mut session, &mut service, "CARRO").unwrap();
        let report = submit(&mut session, &mut service, "PEDRA").unwrap();

        assert!(report.full_win);
        assert!(report.session_over);
        assert_eq!(report.wins_this_guess, 1);
        assert_eq!(session.board_status(0), BoardStatus::Won { attempt: 1 });
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn exact_target_guess_scores_all_correct() {
        let (mut session, mut service) = solo_session("PEDRA");
        let report = submit(&mut session, &mut service, "PEDRA").unwrap();

        let row = report.rows[0].as_ref().unwrap();
        assert!(crate::core::is_all_correct(row));
    }

    #[test]
    fn budget_exhaustion_sets_lost() {
        let (mut session, mut service) = solo_session("PEDRA");

        for word in ["CARRO", "MUNDO", "FESTA", "NOITE", "TEMPO", "SONHO"] {
            submit(&mut session, &mut service, word).unwrap();
        }

        assert_eq!(session.board_status(0), BoardStatus::Lost);
        assert!(session.is_over());
        assert!(!session.is_won());
    }

    #[test]
    fn last_attempt_fires_one_before_the_budget() {
        let (mut session, mut service) = solo_session("PEDRA");

        for (i, word) in ["CARRO", "MUNDO", "FESTA", "NOITE", "TEMPO"]
            .iter()
            .enumerate()
        {
            let report = submit(&mut session, &mut service, word).unwrap();
            assert_eq!(report.last_attempt, i == 4, "guess {i}");
        }
    }

    #[test]
    fn duplicate_guess_rejected_even_when_service_would_fail() {
        let (mut session, mut service) = solo_session("PEDRA");
        submit(&mut session, &mut service, "CARRO").unwrap();

        // The duplicate scan runs before any external call
        service.fail_check = true;
        let result = submit(&mut session, &mut service, "CARRO");
        assert_eq!(result.unwrap_err(), SubmitError::DuplicateGuess);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn duplicate_detection_is_accent_insensitive() {
        let (mut session, mut service) = solo_session("PEDRA");
        service.accents = vec![("AVIAO", "AVIÃO")];

        submit(&mut session, &mut service, "AVIAO").unwrap();
        let result = submit(&mut session, &mut service, "AVIAO");
        assert_eq!(result.unwrap_err(), SubmitError::DuplicateGuess);
    }

    #[test]
    fn unknown_word_rejected_without_state_change() {
        let (mut session, mut service) = solo_session("PEDRA");
        service.reject = vec!["XYZZY"];

        let result = submit(&mut session, &mut service, "XYZZY");
        assert_eq!(result.unwrap_err(), SubmitError::UnknownWord);
        assert!(session.history().is_empty());
        assert_eq!(session.board_status(0), BoardStatus::Playing);
        // The rejected word stays in the buffer for correction
        assert!(session.buffer().is_complete());
    }

    #[test]
    fn verification_failure_aborts_but_session_stays_playable() {
        let (mut session, mut service) = solo_session("PEDRA");

        service.fail_check = true;
        let result = submit(&mut session, &mut service, "CARRO");
        assert!(matches!(result, Err(SubmitError::Verification(_))));
        assert!(session.history().is_empty());

        // Retry after the service recovers: same word, now accepted
        service.fail_check = false;
        let mut accents = AccentCache::new();
        let report = session.submit_guess(&mut service, &mut accents);
        assert!(report.is_ok());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn accent_lookup_failure_keeps_plain_form_and_advances() {
        let (mut session, mut service) = solo_session("PEDRA");
        service.fail_accents = true;

        let report = submit(&mut session, &mut service, "AVIAO").unwrap();
        assert_eq!(report.guess.display(), "AVIAO");
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn accent_lookup_success_upgrades_display_only() {
        let (mut session, mut service) = solo_session("PEDRA");
        service.accents = vec![("AVIAO", "AVIÃO")];

        let report = submit(&mut session, &mut service, "AVIAO").unwrap();
        assert_eq!(report.guess.display(), "AVIÃO");
        assert_eq!(report.guess.letters(), b"AVIAO");
    }

    #[test]
    fn bogus_accent_form_falls_back_to_plain() {
        let (mut session, mut service) = solo_session("PEDRA");
        // Service answers with a different word entirely
        service.accents = vec![("AVIAO", "MUNDO")];

        let report = submit(&mut session, &mut service, "AVIAO").unwrap();
        assert_eq!(report.guess.display(), "AVIAO");
    }

    #[test]
    fn submissions_after_session_end_are_rejected() {
        let (mut session, mut service) = solo_session("PEDRA");
        submit(&mut session, &mut service, "PEDRA").unwrap();

        let result = submit(&mut session, &mut service, "CARRO");
        assert_eq!(result.unwrap_err(), SubmitError::SessionOver);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn input_is_ignored_after_session_end() {
        let (mut session, mut service) = solo_session("PEDRA");
        submit(&mut session, &mut service, "PEDRA").unwrap();

        session.add_letter('a');
        assert!(session.buffer().is_empty());
    }

    #[test]
    fn all_absent_signal() {
        let (mut session, mut service) = solo_session("PEDRA");

        // MUITO shares no letter with PEDRA
        let report = submit(&mut session, &mut service, "MUITO").unwrap();
        assert!(report.all_absent());

        let report = submit(&mut session, &mut service, "CARRO").unwrap();
        assert!(!report.all_absent());
    }

    #[test]
    fn progress_signals() {
        let (mut session, mut service) = solo_session("PEDRA");

        // CARRO vs PEDRA: R at position 3 is Correct, A and the other R land
        // as Present/Absent
        let report = submit(&mut session, &mut service, "CARRO").unwrap();
        assert!(report.has_progress());

        // MUITO vs PEDRA: nothing shared
        let report = submit(&mut session, &mut service, "MUITO").unwrap();
        assert!(!report.has_progress());
        assert!(!report.has_present_only());
    }

    #[test]
    fn board_rows_truncate_at_the_winning_guess() {
        let mut service = ScriptedService::with_draws(vec!["GATOS", "MESAS"]);
        let mut session = Session::<2>::draw(&mut service, 5, 7).unwrap();

        submit(&mut session, &mut service, "GATOS").unwrap();
        submit(&mut session, &mut service, "PEDRA").unwrap();
        submit(&mut session, &mut service, "MESAS").unwrap();

        // Board 0 won on guess 0: one row. Board 1 won on guess 2: all three.
        assert_eq!(session.board_rows(0).len(), 1);
        assert_eq!(session.board_rows(1).len(), 3);
    }

    #[test]
    fn keyboard_is_recomputed_from_history() {
        let (mut session, mut service) = solo_session("PEDRA");
        submit(&mut session, &mut service, "PRADO").unwrap();

        let keyboard = session.keyboard();
        assert_eq!(keyboard.status('P'), crate::core::KeyStatus::Correct);
        assert_eq!(keyboard.status('O'), crate::core::KeyStatus::Absent);
    }
}
