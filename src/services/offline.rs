//! Offline word service backed by the embedded lexicon
//!
//! Lets the binary run with no network: draws come from the embedded list,
//! validity is list membership, accents come from the embedded table.

use super::{ServiceError, WordService};
use crate::lexicon;
use rand::prelude::IndexedRandom;

/// Word service over the embedded lexicon
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineService;

impl OfflineService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl WordService for OfflineService {
    fn random_word(&mut self) -> Result<String, ServiceError> {
        lexicon::WORDS
            .choose(&mut rand::rng())
            .map(|word| (*word).to_string())
            .ok_or_else(|| ServiceError::Unavailable("empty lexicon".to_string()))
    }

    fn word_length(&mut self) -> Result<usize, ServiceError> {
        Ok(lexicon::WORD_LENGTH)
    }

    fn check_word(&mut self, word: &str) -> Result<bool, ServiceError> {
        Ok(lexicon::contains(word))
    }

    fn accented_form(&mut self, word: &str) -> Result<String, ServiceError> {
        Ok(lexicon::accented(word)
            .map_or_else(|| word.to_uppercase(), ToString::to_string))
    }
}
