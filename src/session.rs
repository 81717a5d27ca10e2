//! Matching Session
//!
//! Everything derived from the catalog is built once here: the attribute
//! vocabulary, the correction dictionary, the compiled pattern table, and
//! snapshots of the vehicles and their listing counts. A session is never
//! mutated afterwards, so one instance can serve any number of
//! descriptions.
//!
//! Per description the pipeline is
//! normalize → correct → expand → extract → score → select.
//! Expansion runs after correction. Abbreviations are short (three
//! characters for the defaults) and cannot reach the correction cutoff
//! against dictionary words, which are all longer than four characters.

use crate::catalog::{AttributeColumn, AttributeVocabulary, Catalog, ListingCounts, VehicleRecord};
use crate::config::MatcherSettings;
use crate::core::{
    AbbreviationExpander, AttributeExtractor, CorrectionDictionary, MatchResult, MatchSelector,
    PatternTable, SpellingCorrector, TextNormalizer,
};
use crate::error::CarMatchResult;
use crate::evaluation::{EvaluationReport, Miss};
use tracing::{debug, info};

pub struct Session {
    normalizer: TextNormalizer,
    corrector: SpellingCorrector,
    expander: AbbreviationExpander,
    patterns: PatternTable,
    vehicles: Vec<VehicleRecord>,
    listing_counts: ListingCounts,
}

impl Session {
    /// Snapshot a catalog and precompute all matching state
    pub fn build(catalog: &dyn Catalog, settings: &MatcherSettings) -> CarMatchResult<Self> {
        settings.validate()?;

        let vocabulary = AttributeVocabulary::from_catalog(catalog)?;
        for column in AttributeColumn::ALL {
            debug!("{}: {} distinct values", column, vocabulary.len(column));
        }

        let dictionary =
            CorrectionDictionary::from_vocabulary(&vocabulary, settings.min_dictionary_word_len);
        let patterns = PatternTable::build(&vocabulary);
        let vehicles = catalog.vehicles()?;
        let listing_counts = catalog.listing_counts()?;

        info!(
            "🚗 Session ready: {} vehicles, {} dictionary words, {} patterns",
            vehicles.len(),
            dictionary.len(),
            patterns.len()
        );

        Ok(Self {
            normalizer: TextNormalizer::new(),
            corrector: SpellingCorrector::new(dictionary, settings.correction_cutoff),
            expander: AbbreviationExpander::new(settings.abbreviations.clone()),
            patterns,
            vehicles,
            listing_counts,
        })
    }

    /// Normalize, spell-correct and expand a raw description
    pub fn clean_description(&self, raw: &str) -> String {
        let cleaned = self.normalizer.normalize(raw);
        let corrected = self.corrector.correct_text(&cleaned);
        self.expander.expand(&corrected)
    }

    /// Match one raw description against the whole catalog
    pub fn match_one(&self, raw: &str) -> MatchResult {
        let description = self.clean_description(raw);
        self.match_cleaned(&description)
    }

    /// Match a description that already went through [`clean_description`](Self::clean_description)
    pub fn match_cleaned(&self, description: &str) -> MatchResult {
        debug!("Matching '{}'", description);

        let extracted = AttributeExtractor::new(&self.patterns).extract(description);
        let (vehicle, confidence) =
            MatchSelector::new(&self.listing_counts).select(&extracted, &self.vehicles);

        MatchResult {
            extracted,
            confidence,
            vehicle: vehicle.cloned(),
        }
    }

    /// Match `(description, expected id)` pairs and tally accuracy
    pub fn evaluate<I, D, T>(&self, pairs: I) -> EvaluationReport
    where
        I: IntoIterator<Item = (D, T)>,
        D: AsRef<str>,
        T: AsRef<str>,
    {
        let mut report = EvaluationReport::new();

        for (description, truth) in pairs {
            let description = self.clean_description(description.as_ref());
            let expected = truth.as_ref().trim();
            let result = self.match_cleaned(&description);

            let hit = result.vehicle_id() == Some(expected);
            if !hit {
                report.misses.push(Miss {
                    description: description.clone(),
                    expected_id: expected.to_string(),
                    matched_id: result.vehicle_id().map(str::to_string),
                    confidence: result.confidence,
                });
            }
            report.record(hit);
        }

        info!(
            "📊 Evaluated {} descriptions: {:.2}% accuracy",
            report.total,
            report.accuracy()
        );
        report
    }

    pub fn vehicles(&self) -> &[VehicleRecord] {
        &self.vehicles
    }

    pub fn patterns(&self) -> &PatternTable {
        &self.patterns
    }

    pub fn dictionary(&self) -> &CorrectionDictionary {
        self.corrector.dictionary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;

    fn session() -> Session {
        let vehicles = vec![VehicleRecord {
            id: "v1".into(),
            make: Some("Toyota".into()),
            model: Some("Hilux".into()),
            badge: Some("SR5".into()),
            transmission_type: Some("Automatic".into()),
            fuel_type: Some("Diesel".into()),
            drive_type: Some("Four Wheel Drive".into()),
        }];
        let catalog = InMemoryCatalog::new(vehicles, ListingCounts::new());
        Session::build(&catalog, &MatcherSettings::default()).expect("session")
    }

    #[test]
    fn test_clean_description_order() {
        let s = session();
        assert_eq!(
            s.clean_description("Toyata Hilux, SR5 (4x4)!"),
            "Toyota Hilux SR5 Four Wheel Drive"
        );
    }

    #[test]
    fn test_session_state() {
        let s = session();
        assert_eq!(s.vehicles().len(), 1);
        assert!(s.dictionary().contains("Hilux"));
        assert!(!s.dictionary().contains("SR5"));
        assert_eq!(s.patterns().len(), 6);
    }

    #[test]
    fn test_evaluate_counts_hits_and_misses() {
        let s = session();
        let report = s.evaluate([("Toyota Hilux SR5", "v1"), ("Nothing relevant", "v1")]);
        assert_eq!(report.total, 2);
        assert_eq!(report.correct, 1);
        assert_eq!(report.misses.len(), 1);
        assert_eq!(report.misses[0].matched_id, None);
        assert!((report.accuracy() - 50.0).abs() < 1e-9);
    }
}
