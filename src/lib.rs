//! Termo Engine
//!
//! A word-guessing puzzle engine for solo, dueto (two-board) and quarteto
//! (four-board) play, with accent-aware scoring under Wordle's
//! duplicate-letter rules.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use termo_engine::engine::SoloSession;
//! use termo_engine::services::{AccentCache, OfflineService};
//!
//! let mut service = OfflineService::new();
//! let mut accents = AccentCache::new();
//! let mut session = SoloSession::new_solo(&mut service).unwrap();
//!
//! for c in "pedra".chars() {
//!     session.add_letter(c);
//! }
//! let report = session.submit_guess(&mut service, &mut accents).unwrap();
//! println!("won: {}", report.full_win);
//! ```

// Core domain types
pub mod core;

// Game-state engines
pub mod engine;

// External word services
pub mod services;

// Embedded word list
pub mod lexicon;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
