//! Attribute extraction
//!
//! Runs every compiled pattern over a cleaned description and keeps the
//! part of each match that actually overlaps the (cleaned) vocabulary
//! value.

use super::pattern::PatternTable;
use crate::catalog::AttributeColumn;
use crate::utils::fuzzy::longest_common_block;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Fragments found per column, in vocabulary order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedAttributes {
    fragments: BTreeMap<AttributeColumn, Vec<String>>,
}

impl Default for ExtractedAttributes {
    fn default() -> Self {
        Self {
            fragments: AttributeColumn::ALL
                .into_iter()
                .map(|column| (column, Vec::new()))
                .collect(),
        }
    }
}

impl ExtractedAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, column: AttributeColumn, fragment: impl Into<String>) {
        self.fragments.entry(column).or_default().push(fragment.into());
    }

    /// Fragments of one column
    pub fn get(&self, column: AttributeColumn) -> &[String] {
        self.fragments.get(&column).map_or(&[], Vec::as_slice)
    }

    /// First of the longest fragments of a column
    pub fn longest(&self, column: AttributeColumn) -> Option<&str> {
        let mut best: Option<&str> = None;
        for fragment in self.get(column).iter().map(String::as_str) {
            let longer = best.map_or(true, |b| fragment.chars().count() > b.chars().count());
            if longer {
                best = Some(fragment);
            }
        }
        best
    }

    pub fn iter(&self) -> impl Iterator<Item = (AttributeColumn, &[String])> {
        self.fragments.iter().map(|(c, f)| (*c, f.as_slice()))
    }

    /// True when no column produced anything
    pub fn is_empty(&self) -> bool {
        self.fragments.values().all(Vec::is_empty)
    }
}

/// Extracts attribute fragments using a shared [`PatternTable`]
pub struct AttributeExtractor<'a> {
    table: &'a PatternTable,
}

impl<'a> AttributeExtractor<'a> {
    pub fn new(table: &'a PatternTable) -> Self {
        Self { table }
    }

    /// Collect fragments from an already cleaned description
    pub fn extract(&self, description: &str) -> ExtractedAttributes {
        let mut extracted = ExtractedAttributes::new();

        for column in AttributeColumn::ALL {
            for pattern in self.table.patterns(column) {
                let Some(matched) = pattern.find(description) else {
                    continue;
                };

                let overlap = longest_common_block(matched, pattern.cleaned());
                let overlap = overlap.trim();
                if overlap.is_empty() {
                    continue;
                }

                debug!(
                    "'{}' matched {} value '{}' -> '{}'",
                    matched,
                    column,
                    pattern.value(),
                    overlap
                );
                extracted.push(column, overlap);
            }
        }

        extracted
    }
}
