//! Literal abbreviation expansion

use serde::{Deserialize, Serialize};

/// One literal replacement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Abbreviation {
    pub abbreviation: String,
    pub expansion: String,
}

impl Abbreviation {
    pub fn new(abbreviation: &str, expansion: &str) -> Self {
        Self {
            abbreviation: abbreviation.to_string(),
            expansion: expansion.to_string(),
        }
    }
}

/// Built-in abbreviations
pub fn default_abbreviations() -> Vec<Abbreviation> {
    vec![
        Abbreviation::new("4x4", "Four Wheel Drive"),
        Abbreviation::new("4WD", "Four Wheel Drive"),
    ]
}

/// Applies abbreviations in declaration order
#[derive(Debug, Clone)]
pub struct AbbreviationExpander {
    pairs: Vec<Abbreviation>,
}

impl Default for AbbreviationExpander {
    fn default() -> Self {
        Self::new(default_abbreviations())
    }
}

impl AbbreviationExpander {
    pub fn new(pairs: Vec<Abbreviation>) -> Self {
        // An empty needle would insert the expansion between every character
        let pairs = pairs
            .into_iter()
            .filter(|p| !p.abbreviation.is_empty())
            .collect();
        Self { pairs }
    }

    /// Replace every case-sensitive occurrence of each abbreviation
    pub fn expand(&self, text: &str) -> String {
        let mut result = text.to_string();
        for pair in &self.pairs {
            if result.contains(&pair.abbreviation) {
                result = result.replace(&pair.abbreviation, &pair.expansion);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_expansions() {
        let expander = AbbreviationExpander::default();
        assert_eq!(
            expander.expand("Hilux SR5 4WD Diesel"),
            "Hilux SR5 Four Wheel Drive Diesel"
        );
        assert_eq!(expander.expand("Ranger 4x4"), "Ranger Four Wheel Drive");
    }

    #[test]
    fn test_case_sensitive() {
        let expander = AbbreviationExpander::default();
        assert_eq!(expander.expand("ranger 4wd"), "ranger 4wd");
    }

    #[test]
    fn test_declaration_order() {
        let expander = AbbreviationExpander::new(vec![
            Abbreviation::new("AWD", "All Wheel Drive"),
            Abbreviation::new("All", "Every"),
        ]);
        assert_eq!(expander.expand("AWD"), "Every Wheel Drive");
    }

    #[test]
    fn test_empty_abbreviation_ignored() {
        let expander = AbbreviationExpander::new(vec![Abbreviation::new("", "x")]);
        assert_eq!(expander.expand("abc"), "abc");
    }
}
