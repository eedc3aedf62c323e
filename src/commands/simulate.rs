//! Simulation command
//!
//! Plays many sessions with a naive random guesser to measure win rates and
//! attempt distributions per mode. Useful for sanity-checking budgets.

use super::GameMode;
use crate::engine::{DuetSession, QuartetSession, Session, SoloSession};
use crate::lexicon;
use crate::services::{AccentCache, OfflineService};
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::SliceRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a simulation run
pub struct SimulationResult {
    pub mode: GameMode,
    pub games: usize,
    pub wins: usize,
    pub total_attempts: usize,
    /// Attempts used at completion, per game
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
}

impl SimulationResult {
    /// Fraction of games where every board was won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins as f64 / self.games as f64
    }

    /// Mean attempts used per game
    #[must_use]
    pub fn average_attempts(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_attempts as f64 / self.games as f64
    }
}

/// Play `games` random sessions of the given mode
#[must_use]
pub fn run_simulation(mode: GameMode, games: usize) -> SimulationResult {
    let start = Instant::now();

    let pb = ProgressBar::new(games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let outcomes: Vec<(bool, usize)> = (0..games)
        .into_par_iter()
        .map(|_| {
            let outcome = play_one(mode);
            pb.inc(1);
            outcome
        })
        .collect();
    pb.finish_and_clear();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut wins = 0;
    let mut total_attempts = 0;
    for &(won, attempts) in &outcomes {
        if won {
            wins += 1;
        }
        total_attempts += attempts;
        *distribution.entry(attempts).or_insert(0) += 1;
    }

    SimulationResult {
        mode,
        games,
        wins,
        total_attempts,
        distribution,
        duration: start.elapsed(),
    }
}

fn play_one(mode: GameMode) -> (bool, usize) {
    let mut service = OfflineService::new();
    match mode {
        GameMode::Solo => SoloSession::new_solo(&mut service)
            .map_or((false, 0), |session| play_out(session, &mut service)),
        GameMode::Duet => DuetSession::new_duet(&mut service)
            .map_or((false, 0), |session| play_out(session, &mut service)),
        GameMode::Quartet => QuartetSession::new_quartet(&mut service)
            .map_or((false, 0), |session| play_out(session, &mut service)),
    }
}

/// Submit random distinct lexicon words until the session ends
fn play_out<const N: usize>(
    mut session: Session<N>,
    service: &mut OfflineService,
) -> (bool, usize) {
    let mut accents = AccentCache::new();
    let mut pool: Vec<&str> = lexicon::WORDS.to_vec();
    pool.shuffle(&mut rand::rng());

    for word in pool {
        if session.is_over() {
            break;
        }
        for c in word.chars() {
            session.add_letter(c);
        }
        // Pool words are valid, distinct and complete, so this cannot reject
        if session.submit_guess(service, &mut accents).is_err() {
            break;
        }
    }

    (session.is_won(), session.attempts_used())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulation_accounts_every_game() {
        let result = run_simulation(GameMode::Solo, 25);

        assert_eq!(result.games, 25);
        assert_eq!(result.distribution.values().sum::<usize>(), 25);
        assert!(result.wins <= result.games);
    }

    #[test]
    fn attempts_never_exceed_the_mode_budget() {
        for mode in [GameMode::Solo, GameMode::Duet, GameMode::Quartet] {
            let result = run_simulation(mode, 10);
            for &attempts in result.distribution.keys() {
                assert!(attempts >= 1);
                assert!(attempts <= mode.max_attempts(), "{mode:?}");
            }
        }
    }

    #[test]
    fn rates_are_well_defined_on_empty_runs() {
        let result = run_simulation(GameMode::Solo, 0);
        assert!((result.win_rate() - 0.0).abs() < f64::EPSILON);
        assert!((result.average_attempts() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn average_attempts_between_one_and_budget() {
        let result = run_simulation(GameMode::Duet, 20);
        assert!(result.average_attempts() >= 1.0);
        assert!(result.average_attempts() <= GameMode::Duet.max_attempts() as f64);
    }
}
