//! Spelling correction against catalog vocabulary
//!
//! The dictionary is every word longer than a minimum length found in any
//! catalog value. Short words are left out so numbers and abbreviations
//! like "4WD" are not dragged towards real words.

use crate::catalog::AttributeVocabulary;
use crate::utils::fuzzy::find_best_match;
use std::collections::BTreeSet;
use tracing::debug;

/// Default minimum similarity for a correction to be accepted
pub const DEFAULT_CUTOFF: f64 = 0.8;

/// Words must be strictly longer than this to enter the dictionary
pub const DEFAULT_MIN_WORD_LEN: usize = 4;

/// Known-correct tokens
#[derive(Debug, Clone, Default)]
pub struct CorrectionDictionary {
    words: BTreeSet<String>,
}

impl CorrectionDictionary {
    /// Build from the words of every vocabulary value
    pub fn from_vocabulary(vocabulary: &AttributeVocabulary, min_word_len: usize) -> Self {
        Self::from_values(vocabulary.all_values(), min_word_len)
    }

    pub fn from_values<'a, I>(values: I, min_word_len: usize) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let words = values
            .into_iter()
            .flat_map(str::split_whitespace)
            .filter(|word| word.chars().count() > min_word_len)
            .map(str::to_string)
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Nearest-neighbour word corrector
#[derive(Debug, Clone)]
pub struct SpellingCorrector {
    dictionary: CorrectionDictionary,
    cutoff: f64,
}

impl SpellingCorrector {
    pub fn new(dictionary: CorrectionDictionary, cutoff: f64) -> Self {
        Self { dictionary, cutoff }
    }

    pub fn dictionary(&self) -> &CorrectionDictionary {
        &self.dictionary
    }

    /// Correct a single word.
    ///
    /// Exact dictionary words come back untouched. Otherwise the closest
    /// dictionary word is used if its similarity reaches the cutoff.
    pub fn correct(&self, word: &str) -> String {
        if self.dictionary.contains(word) {
            return word.to_string();
        }

        match find_best_match(word, self.dictionary.iter(), self.cutoff) {
            Some(found) => {
                debug!("✏️ Corrected '{}' -> '{}' ({:.3})", word, found.value, found.score);
                found.value
            }
            None => word.to_string(),
        }
    }

    /// Correct each whitespace-separated word, keeping order and count
    pub fn correct_text(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|word| self.correct(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
