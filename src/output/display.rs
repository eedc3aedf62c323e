//! Colored terminal output for the CLI play and simulate commands

use crate::commands::SimulationResult;
use crate::core::{KeyStatus, LetterFeedback, Word};
use crate::engine::{BoardStatus, GuessReport, Session};
use colored::{ColoredString, Colorize};

fn paint_feedback(text: &str, feedback: LetterFeedback) -> ColoredString {
    match feedback {
        LetterFeedback::Correct => text.black().on_green(),
        LetterFeedback::Present => text.black().on_yellow(),
        LetterFeedback::Absent => text.white().on_bright_black(),
        LetterFeedback::Empty => text.normal(),
    }
}

fn paint_key(letter: char, status: KeyStatus) -> ColoredString {
    let text = letter.to_string();
    match status {
        KeyStatus::Correct => text.black().on_green(),
        KeyStatus::Present => text.black().on_yellow(),
        KeyStatus::Absent => text.bright_black(),
        KeyStatus::Unused => text.normal(),
    }
}

/// One scored guess row as colored cells
#[must_use]
pub fn format_row(guess: &Word, row: &[LetterFeedback]) -> String {
    guess
        .display()
        .chars()
        .zip(row)
        .map(|(c, &feedback)| format!("{}", paint_feedback(&format!(" {c} "), feedback)))
        .collect()
}

/// The in-progress buffer as plain cells, cursor marked
#[must_use]
pub fn format_buffer(slots: &[Option<char>], cursor: usize) -> String {
    slots
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let c = slot.unwrap_or('·');
            if i == cursor {
                format!("[{c}]")
            } else {
                format!(" {c} ")
            }
        })
        .collect()
}

/// A-Z keyboard line for one board of the overlay
#[must_use]
pub fn format_keyboard_line(statuses: impl Iterator<Item = (char, KeyStatus)>) -> String {
    let mut line = String::new();
    for (letter, status) in statuses {
        line.push_str(&format!("{} ", paint_key(letter, status)));
    }
    line
}

/// Print every board of a session: scored rows, buffer, keyboard
pub fn print_session<const N: usize>(session: &Session<N>) {
    println!();
    for board in 0..N {
        let status = session.board_status(board);
        let tag = match status {
            BoardStatus::Playing => "playing".cyan(),
            BoardStatus::Won { .. } => "won".green().bold(),
            BoardStatus::Lost => "lost".red().bold(),
        };
        if N > 1 {
            println!("Board {} ({tag})", board + 1);
        } else {
            println!("({tag})");
        }

        let rows = session.board_rows(board);
        for (guess, row) in session.history().iter().zip(&rows) {
            println!("  {}", format_row(guess, row));
        }
        if status.is_playing() {
            println!(
                "  {}",
                format_buffer(session.buffer().slots(), session.buffer().cursor())
            );
        }

        let keyboard = session.keyboard();
        let line = format_keyboard_line(
            keyboard
                .iter()
                .map(|(letter, statuses)| (letter, statuses[board])),
        );
        println!("  {line}");
        println!();
    }

    println!(
        "Attempts: {}/{}",
        session.attempts_used(),
        session.max_attempts()
    );
}

/// Presentation messages for the signals of an accepted guess
#[must_use]
pub fn signal_messages<const N: usize>(report: &GuessReport<N>) -> Vec<String> {
    let mut messages = Vec::new();

    if report.full_win {
        messages.push(if N > 1 {
            "All words solved!".to_string()
        } else {
            "You got it!".to_string()
        });
    } else if report.wins_this_guess >= 2 {
        messages.push(format!("{} words at once!", report.wins_this_guess));
    } else if report.partial_win {
        messages.push("One down!".to_string());
    } else if report.all_absent() {
        messages.push("No letter matches".to_string());
    } else if report.has_progress() {
        messages.push("Good progress".to_string());
    } else if report.has_present_only() {
        messages.push("Right letters, wrong spots".to_string());
    }

    if report.session_over && !report.full_win {
        messages.push("Out of attempts".to_string());
    }
    if report.last_attempt {
        messages.push("Last attempt!".to_string());
    }

    messages
}

/// Print the outcome statistics of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Outcome:".bright_cyan().bold());
    println!("   Mode:              {}", result.mode.label());
    println!("   Games played:      {}", result.games);
    println!(
        "   Wins:              {} ({})",
        result.wins,
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Average attempts:  {:.2}", result.average_attempts());
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());

    println!("\n{}", "Attempts used:".bright_cyan().bold());
    let max_attempts = result.mode.max_attempts();
    for used in 1..=max_attempts {
        let count = result.distribution.get(&used).copied().unwrap_or(0);
        if count == 0 {
            continue;
        }
        let pct = (count as f64 / result.games as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {used}: {bar} {count:4} ({pct:5.1}%)");
    }
}
