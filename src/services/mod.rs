//! External word-service capabilities
//!
//! The engine consumes four external capabilities through one trait: random
//! target draws, board width lookup, dictionary validation, and best-effort
//! accent restoration. All of them are fallible; the engine decides per call
//! site whether a failure aborts (validation) or degrades (accents).

mod offline;

pub use offline::OfflineService;

use rustc_hash::FxHashMap;
use std::fmt;

/// Error type for word-service failures
///
/// Every failure is local and recoverable; the engine never retries on its
/// own, the caller decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    Unavailable(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "word service unavailable: {reason}"),
        }
    }
}

impl std::error::Error for ServiceError {}

/// The external capabilities the engine depends on
///
/// Implementations are expected to be idempotent and side-effect-free from
/// the engine's perspective.
pub trait WordService {
    /// Draw one uppercase target candidate
    ///
    /// # Errors
    /// Returns `ServiceError` when no candidate can be produced.
    fn random_word(&mut self) -> Result<String, ServiceError>;

    /// Board width for a new single-board session
    ///
    /// # Errors
    /// Returns `ServiceError` when the width cannot be determined.
    fn word_length(&mut self) -> Result<usize, ServiceError>;

    /// Authoritative dictionary check
    ///
    /// # Errors
    /// Returns `ServiceError` on lookup failure; the submission is then
    /// aborted without mutating any game state.
    fn check_word(&mut self, word: &str) -> Result<bool, ServiceError>;

    /// Best-effort accent restoration for display
    ///
    /// # Errors
    /// Returns `ServiceError` on lookup failure; callers fall back to the
    /// plain form and continue.
    fn accented_form(&mut self, word: &str) -> Result<String, ServiceError>;
}

/// Injected cache for accent lookups
///
/// Keeps the engine free of hidden shared state: the cache is an explicit
/// collaborator owned by the caller. Failed lookups are not cached, so a
/// recovered service starts serving accents again on the next submission.
#[derive(Debug, Default)]
pub struct AccentCache {
    entries: FxHashMap<String, String>,
}

impl AccentCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore the accented display form of `word`, falling back to the
    /// plain form when the service fails
    pub fn restore<S>(&mut self, service: &mut S, word: &str) -> String
    where
        S: WordService + ?Sized,
    {
        if let Some(hit) = self.entries.get(word) {
            return hit.clone();
        }

        match service.accented_form(word) {
            Ok(form) => {
                self.entries.insert(word.to_string(), form.clone());
                form
            }
            Err(_) => word.to_string(),
        }
    }

    /// Number of cached lookups
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
