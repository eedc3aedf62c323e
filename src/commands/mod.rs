//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::run_simple;
pub use simulate::{SimulationResult, run_simulation};

use crate::engine::{DUET_MAX_ATTEMPTS, QUARTET_MAX_ATTEMPTS, SOLO_MAX_ATTEMPTS};

/// Which puzzle variant to play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Solo,
    Duet,
    Quartet,
}

impl GameMode {
    /// Create a mode from a name string
    ///
    /// Supported names: "solo", "dueto"/"duet"/"2", "quarteto"/"quartet"/"4".
    /// Defaults to solo if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dueto" | "duet" | "2" => Self::Duet,
            "quarteto" | "quartet" | "tetra" | "4" => Self::Quartet,
            _ => Self::Solo,
        }
    }

    /// Number of simultaneous boards
    #[must_use]
    pub const fn board_count(self) -> usize {
        match self {
            Self::Solo => 1,
            Self::Duet => 2,
            Self::Quartet => 4,
        }
    }

    /// Shared attempt budget of the mode
    #[must_use]
    pub const fn max_attempts(self) -> usize {
        match self {
            Self::Solo => SOLO_MAX_ATTEMPTS,
            Self::Duet => DUET_MAX_ATTEMPTS,
            Self::Quartet => QUARTET_MAX_ATTEMPTS,
        }
    }

    /// Display name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Solo => "solo",
            Self::Duet => "dueto",
            Self::Quartet => "quarteto",
        }
    }
}
