//! Core matching modules
//!
//! Normalization, spelling correction, abbreviation expansion, fuzzy
//! pattern compilation, attribute extraction, scoring and selection.

pub mod abbreviations;
pub mod extractor;
pub mod pattern;
pub mod scorer;
pub mod selector;
pub mod spelling;
pub mod text_normalizer;

pub use abbreviations::{Abbreviation, AbbreviationExpander};
pub use extractor::{AttributeExtractor, ExtractedAttributes};
pub use pattern::{AttributePattern, FuzzyPatternCompiler, PatternTable};
pub use scorer::ConfidenceScorer;
pub use selector::{MatchResult, MatchSelector};
pub use spelling::{CorrectionDictionary, SpellingCorrector};
pub use text_normalizer::{clean_text, TextNormalizer};
