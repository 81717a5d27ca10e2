//! Fuzzy attribute patterns
//!
//! Each vocabulary value becomes a case-insensitive regex anchored at a
//! word boundary that accepts any leading part of the value. For a word
//! `c0 c1 ... cn` the generated pattern is
//!
//! ```text
//! \b c0 (?: c1 (?: c2 ... (?: cn .*? )? ... )? )? \b
//! ```
//!
//! so "auto" is found for "Automatic", and a complete word may run on into
//! trailing characters ("Toyotas"). Multi-word values get one such pattern
//! for the whole phrase (spaces included) followed by one per word, joined
//! into a single alternation, so a description naming only "Camry" still
//! finds "Toyota Camry".

use super::text_normalizer::clean_text;
use crate::catalog::{AttributeColumn, AttributeVocabulary};
use regex::{Regex, RegexBuilder};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// A compiled pattern for one vocabulary value
#[derive(Debug, Clone)]
pub struct AttributePattern {
    value: String,
    cleaned: String,
    regex: Regex,
}

impl AttributePattern {
    /// The raw vocabulary value this pattern was built for
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The value after punctuation stripping, as the pattern sees it
    pub fn cleaned(&self) -> &str {
        &self.cleaned
    }

    /// Leftmost match in `haystack`
    pub fn find<'h>(&self, haystack: &'h str) -> Option<&'h str> {
        self.regex.find(haystack).map(|m| m.as_str())
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Builds [`AttributePattern`]s from vocabulary values
pub struct FuzzyPatternCompiler;

impl FuzzyPatternCompiler {
    /// Pattern source for a single word (or a whole phrase treated as one)
    pub fn word_pattern(word: &str) -> String {
        let chars: Vec<char> = word.chars().collect();
        let Some(last) = chars.len().checked_sub(1) else {
            return String::new();
        };

        let mut pattern = String::from(r"\b");
        for (i, c) in chars.iter().enumerate() {
            pattern.push_str(&escape_char(*c));
            if i < last {
                pattern.push_str("(?:");
            }
        }
        // Filler is only allowed once the whole word has matched
        pattern.push_str(".*?");
        pattern.push_str(&")?".repeat(last));
        pattern.push_str(r"\b");
        pattern
    }

    /// Pattern source for a cleaned value, `None` when there is nothing
    /// to match
    pub fn value_pattern(cleaned: &str) -> Option<String> {
        let words: Vec<&str> = cleaned.split_whitespace().collect();
        match words.len() {
            0 => None,
            1 => Some(Self::word_pattern(words[0])),
            _ => {
                let alternatives: Vec<String> = std::iter::once(cleaned)
                    .chain(words.iter().copied())
                    .map(|w| format!("(?:{})", Self::word_pattern(w)))
                    .collect();
                Some(alternatives.join("|"))
            }
        }
    }

    /// Compile the pattern for a raw vocabulary value.
    ///
    /// Values that are empty after cleaning, or whose pattern the regex
    /// engine rejects, yield `None`.
    pub fn compile(value: &str) -> Option<AttributePattern> {
        let cleaned = clean_text(value);
        let source = Self::value_pattern(&cleaned)?;

        match RegexBuilder::new(&source).case_insensitive(true).build() {
            Ok(regex) => Some(AttributePattern {
                value: value.to_string(),
                cleaned,
                regex,
            }),
            Err(e) => {
                warn!("⚠️ Skipping pattern for '{}': {}", value, e);
                None
            }
        }
    }
}

fn escape_char(c: char) -> String {
    regex::escape(c.encode_utf8(&mut [0; 4]))
}

/// Compiled patterns per column, in vocabulary order
#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    columns: BTreeMap<AttributeColumn, Vec<AttributePattern>>,
}

impl PatternTable {
    /// Compile every value of every column
    pub fn build(vocabulary: &AttributeVocabulary) -> Self {
        let mut columns = BTreeMap::new();

        for column in AttributeColumn::ALL {
            let patterns: Vec<AttributePattern> = vocabulary
                .values(column)
                .filter_map(FuzzyPatternCompiler::compile)
                .collect();

            if patterns.is_empty() {
                debug!("No usable vocabulary for {}, column will never match", column);
            }
            columns.insert(column, patterns);
        }

        let table = Self { columns };
        info!("🧩 Compiled {} attribute patterns", table.len());
        table
    }

    /// Patterns of one column
    pub fn patterns(&self, column: AttributeColumn) -> &[AttributePattern] {
        self.columns.get(&column).map_or(&[], Vec::as_slice)
    }

    /// Pattern for a specific value
    pub fn get(&self, column: AttributeColumn, value: &str) -> Option<&AttributePattern> {
        self.patterns(column).iter().find(|p| p.value() == value)
    }

    /// Total number of compiled patterns
    pub fn len(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(value: &str, text: &str) -> Option<String> {
        FuzzyPatternCompiler::compile(value)
            .expect("pattern")
            .find(text)
            .map(str::to_string)
    }

    #[test]
    fn test_word_pattern_shape() {
        assert_eq!(
            FuzzyPatternCompiler::word_pattern("abc"),
            r"\ba(?:b(?:c.*?)?)?\b"
        );
        assert_eq!(FuzzyPatternCompiler::word_pattern("a"), r"\ba.*?\b");
        assert_eq!(FuzzyPatternCompiler::word_pattern(""), "");
    }

    #[test]
    fn test_special_characters_escaped() {
        assert_eq!(
            FuzzyPatternCompiler::word_pattern("1.5"),
            r"\b1(?:\.(?:5.*?)?)?\b"
        );
    }

    #[test]
    fn test_exact_word_found() {
        assert_eq!(found("Camry", "Toyota Camry 2019").as_deref(), Some("Camry"));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(found("Toyota", "toyota camry").as_deref(), Some("toyota"));
    }

    #[test]
    fn test_leading_part_of_word_found() {
        assert_eq!(found("Automatic", "camry auto petrol").as_deref(), Some("auto"));
        assert_eq!(found("Ford", "bicycle for sale").as_deref(), Some("for"));
        assert_eq!(found("Hybrid", "h").as_deref(), Some("h"));
    }

    #[test]
    fn test_letters_must_be_contiguous() {
        assert_eq!(found("Camry", "Camery"), None);
        assert_eq!(found("Automatic", "automtic"), None);
    }

    #[test]
    fn test_complete_word_runs_on() {
        assert_eq!(found("Toyota", "Toyotas for sale").as_deref(), Some("Toyotas"));
    }

    #[test]
    fn test_word_boundaries_required() {
        assert_eq!(found("Camry", "xCamry"), None);
        assert_eq!(found("Hybrid", "nothing here"), None);
    }

    #[test]
    fn test_multi_word_prefers_whole_phrase() {
        assert_eq!(
            found("Four Wheel Drive", "Hilux Four Wheel Drive Diesel").as_deref(),
            Some("Four Wheel Drive")
        );
        assert_eq!(
            found("Four Wheel Drive", "Hilux Drive away").as_deref(),
            Some("Drive")
        );
        assert_eq!(
            found("Four Wheel Drive", "Four Wheel").as_deref(),
            Some("Four Wheel")
        );
    }

    #[test]
    fn test_empty_after_cleaning_skipped() {
        assert!(FuzzyPatternCompiler::compile("").is_none());
        assert!(FuzzyPatternCompiler::compile(" -/- ").is_none());
    }

    #[test]
    fn test_pattern_built_from_cleaned_value() {
        let pattern = FuzzyPatternCompiler::compile("C-Class").expect("pattern");
        assert_eq!(pattern.value(), "C-Class");
        assert_eq!(pattern.cleaned(), "CClass");
        assert_eq!(pattern.find("Mercedes CClass"), Some("CClass"));
    }

    #[test]
    fn test_table_build_and_lookup() {
        let mut vocabulary = AttributeVocabulary::default();
        vocabulary.insert(AttributeColumn::Make, "Toyota");
        vocabulary.insert(AttributeColumn::Make, "Mazda");
        vocabulary.insert(AttributeColumn::Badge, "--");

        let table = PatternTable::build(&vocabulary);
        assert_eq!(table.len(), 2);
        assert_eq!(table.patterns(AttributeColumn::Make).len(), 2);
        assert!(table.patterns(AttributeColumn::Badge).is_empty());
        assert!(table.patterns(AttributeColumn::Model).is_empty());
        assert!(table.get(AttributeColumn::Make, "Mazda").is_some());
    }
}
