//! Termo - CLI
//!
//! Multi-board word puzzle: solo (with a timed variant), dueto and quarteto.

use anyhow::Result;
use clap::{Parser, Subcommand};
use termo_engine::{
    commands::{GameMode, run_simple, run_simulation},
    interactive::{App, run_tui},
    output::print_simulation_result,
};

#[derive(Parser)]
#[command(
    name = "termo",
    about = "Multi-board word-guessing puzzle (solo, dueto, quarteto)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Mode: solo (default), dueto, quarteto
    #[arg(short, long, global = true, default_value = "solo")]
    mode: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Speed-run variant with a visible clock (solo only)
        #[arg(short, long)]
        timed: bool,
    },

    /// Plain terminal mode without TUI
    Simple,

    /// Play random sessions and report outcome statistics
    Simulate {
        /// Number of sessions to play
        #[arg(short = 'n', long, default_value = "500")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mode = GameMode::from_name(&cli.mode);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { timed: false });

    match command {
        Commands::Play { timed } => {
            let app = App::new(mode, timed && mode == GameMode::Solo)?;
            run_tui(app)
        }
        Commands::Simple => run_simple(mode).map_err(|e| anyhow::anyhow!(e)),
        Commands::Simulate { count } => {
            println!(
                "Simulating {count} random {} sessions with a naive guesser...",
                mode.label()
            );
            let result = run_simulation(mode, count);
            print_simulation_result(&result);
            Ok(())
        }
    }
}
