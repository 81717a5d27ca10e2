//! Confidence scoring of a candidate against extracted fragments

use super::extractor::ExtractedAttributes;
use super::text_normalizer::clean_text;
use crate::catalog::{AttributeColumn, VehicleRecord};
use crate::utils::fuzzy::similarity;

/// Score reached when every column matches perfectly
pub const MAX_CONFIDENCE: f64 = 10.0;

/// Weight of a single column
pub const COLUMN_WEIGHT: f64 = MAX_CONFIDENCE / AttributeColumn::ALL.len() as f64;

/// Weighted similarity between extracted fragments and a candidate
pub struct ConfidenceScorer;

impl ConfidenceScorer {
    /// Sum over columns of `similarity(longest fragment, cleaned value) * weight`.
    ///
    /// Columns without a fragment or without a candidate value add nothing.
    pub fn score(extracted: &ExtractedAttributes, candidate: &VehicleRecord) -> f64 {
        AttributeColumn::ALL
            .into_iter()
            .map(|column| Self::column_score(extracted, candidate, column))
            .sum()
    }

    fn column_score(
        extracted: &ExtractedAttributes,
        candidate: &VehicleRecord,
        column: AttributeColumn,
    ) -> f64 {
        let Some(fragment) = extracted.longest(column) else {
            return 0.0;
        };
        let Some(value) = candidate.attribute(column).filter(|v| !v.is_empty()) else {
            return 0.0;
        };

        similarity(fragment, &clean_text(value)) * COLUMN_WEIGHT
    }
}
