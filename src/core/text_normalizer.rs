//! Text Normalization
//!
//! Strips punctuation and symbols before matching. Descriptions and catalog
//! values both go through [`clean_text`] so they compare on equal terms.

/// Characters removed by [`clean_text`]
const STRIPPED_CHARS: &[char] = &[
    '-', '/', ',', '.', ';', ':', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '+', '=', '[',
    ']', '{', '}', '|', '\\', '\'', '"', '<', '>', '?',
];

/// Remove punctuation/symbol characters, then trim surrounding whitespace.
///
/// Interior whitespace is left untouched.
pub fn clean_text(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| !STRIPPED_CHARS.contains(c)).collect();
    stripped.trim().to_string()
}

/// Stateless normalizer so pipeline stages share one shape
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize a description or catalog value
    pub fn normalize(&self, text: &str) -> String {
        clean_text(text)
    }
}
