//! Simple interactive CLI mode
//!
//! Text-based play loop without TUI. One full word per line; the engines do
//! the rest.

use super::GameMode;
use crate::engine::{DuetSession, QuartetSession, Session, SoloSession};
use crate::output::{print_session, signal_messages};
use crate::services::{AccentCache, OfflineService};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the session cannot be initialized or on an I/O error
/// reading user input.
pub fn run_simple(mode: GameMode) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!(
        "║              Termo - {:^8} mode                            ║",
        mode.label()
    );
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Type a full word and press Enter. Commands: 'quit' to exit");
    if mode == GameMode::Solo {
        println!("'hint' reveals one letter without spending a guess");
    }
    println!();

    let mut service = OfflineService::new();
    match mode {
        GameMode::Solo => {
            let session =
                SoloSession::new_solo(&mut service).map_err(|e| e.to_string())?;
            solo_loop(session, service)
        }
        GameMode::Duet => {
            let session =
                DuetSession::new_duet(&mut service).map_err(|e| e.to_string())?;
            multi_loop(session, service)
        }
        GameMode::Quartet => {
            let session =
                QuartetSession::new_quartet(&mut service).map_err(|e| e.to_string())?;
            multi_loop(session, service)
        }
    }
}

fn solo_loop(mut session: SoloSession, mut service: OfflineService) -> Result<(), String> {
    let mut accents = AccentCache::new();

    loop {
        print_session(&session);
        if session.is_over() {
            print_outcome(&session);
            return Ok(());
        }

        let input = get_user_input("Guess (word, 'hint' or 'quit')")?;
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
            "hint" | "h" => {
                if let Some(position) = session.apply_reveal(&mut rand::rng()) {
                    println!(
                        "{}",
                        format!("Revealed the letter at position {}", position + 1).cyan()
                    );
                } else {
                    println!("Nothing left to reveal");
                }
            }
            word => {
                if type_word_checked(&mut session, word) {
                    // Advisory only; shown before the guess is spent
                    if session.one_letter_away() {
                        println!("{}", "One letter away!".bright_yellow());
                    }
                    submit_and_report(&mut session, &mut service, &mut accents);
                }
            }
        }
    }
}

fn multi_loop<const N: usize>(
    mut session: Session<N>,
    mut service: OfflineService,
) -> Result<(), String> {
    let mut accents = AccentCache::new();

    loop {
        print_session(&session);
        if session.is_over() {
            print_outcome(&session);
            return Ok(());
        }

        let input = get_user_input("Guess (word or 'quit')")?;
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
            word => {
                if type_word_checked(&mut session, word) {
                    submit_and_report(&mut session, &mut service, &mut accents);
                }
            }
        }
    }
}

/// Clear the buffer and type a full word into it; false when the length does
/// not fit the board
fn type_word_checked<const N: usize>(session: &mut Session<N>, word: &str) -> bool {
    if word.chars().count() != session.word_length() {
        println!(
            "{}",
            format!("The word needs {} letters", session.word_length()).red()
        );
        return false;
    }

    clear_buffer(session);
    for c in word.chars() {
        session.add_letter(c);
    }
    true
}

fn submit_and_report<const N: usize>(
    session: &mut Session<N>,
    service: &mut OfflineService,
    accents: &mut AccentCache,
) {
    match session.submit_guess(service, accents) {
        Ok(report) => {
            for message in signal_messages(&report) {
                println!("{}", message.bright_cyan());
            }
        }
        Err(e) => println!("{}", e.to_string().red()),
    }
}

fn clear_buffer<const N: usize>(session: &mut Session<N>) {
    for i in 0..session.word_length() {
        session.select_slot(i);
        session.remove_letter();
    }
    session.select_slot(0);
}

fn print_outcome<const N: usize>(session: &Session<N>) {
    if session.is_won() {
        println!("\n{}", "═".repeat(60).bright_cyan());
        println!(
            "{}",
            format!(
                "  Solved in {} {}!",
                session.attempts_used(),
                if session.attempts_used() == 1 {
                    "guess"
                } else {
                    "guesses"
                }
            )
            .bright_green()
            .bold()
        );
        println!("{}", "═".repeat(60).bright_cyan());
    } else {
        let answers: Vec<String> = (0..N)
            .map(|board| session.reveal_target(board).display().to_string())
            .collect();
        let label = if N == 1 {
            "The answer was:"
        } else {
            "The answers were:"
        };
        println!(
            "\n{} {}",
            label.red().bold(),
            answers.join(", ").bright_white().bold()
        );
    }
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
