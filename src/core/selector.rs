//! Best candidate selection

use super::extractor::ExtractedAttributes;
use super::scorer::ConfidenceScorer;
use crate::catalog::{ListingCounts, VehicleRecord};
use serde::Serialize;
use tracing::debug;

/// Outcome of matching one description
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    /// Fragments extracted from the description
    pub extracted: ExtractedAttributes,
    /// Confidence of the chosen vehicle, 0 when there is none
    pub confidence: f64,
    /// The chosen vehicle
    pub vehicle: Option<VehicleRecord>,
}

impl MatchResult {
    pub fn vehicle_id(&self) -> Option<&str> {
        self.vehicle.as_ref().map(|v| v.id.as_str())
    }

    pub fn is_match(&self) -> bool {
        self.vehicle.is_some()
    }
}

/// Picks the best candidate by confidence, then listing popularity
pub struct MatchSelector<'a> {
    listing_counts: &'a ListingCounts,
}

impl<'a> MatchSelector<'a> {
    pub fn new(listing_counts: &'a ListingCounts) -> Self {
        Self { listing_counts }
    }

    fn listings(&self, vehicle: &VehicleRecord) -> u64 {
        self.listing_counts.get(&vehicle.id).copied().unwrap_or(0)
    }

    /// Score every candidate and keep the best.
    ///
    /// A candidate takes over when its confidence is strictly higher, or
    /// equal with strictly more listings; full ties keep the earlier one.
    /// Zero-confidence candidates are never chosen.
    pub fn select<'v>(
        &self,
        extracted: &ExtractedAttributes,
        candidates: &'v [VehicleRecord],
    ) -> (Option<&'v VehicleRecord>, f64) {
        let mut best: Option<&VehicleRecord> = None;
        let mut max_confidence = 0.0;
        let mut max_listings = 0;

        for vehicle in candidates {
            let confidence = ConfidenceScorer::score(extracted, vehicle);
            if confidence <= 0.0 {
                continue;
            }

            let listings = self.listings(vehicle);
            let better = match best {
                None => true,
                Some(_) => {
                    confidence > max_confidence
                        || (confidence == max_confidence && listings > max_listings)
                }
            };

            if better {
                best = Some(vehicle);
                max_confidence = confidence;
                max_listings = listings;
            }
        }

        match best {
            Some(vehicle) => {
                debug!("Best candidate {} ({:.3})", vehicle.id, max_confidence);
                (Some(vehicle), max_confidence)
            }
            None => (None, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AttributeColumn;

    fn vehicle(id: &str, make: &str, model: &str) -> VehicleRecord {
        VehicleRecord {
            id: id.into(),
            make: Some(make.into()),
            model: Some(model.into()),
            badge: None,
            transmission_type: None,
            fuel_type: None,
            drive_type: None,
        }
    }

    fn toyota_fragments() -> ExtractedAttributes {
        let mut extracted = ExtractedAttributes::new();
        extracted.push(AttributeColumn::Make, "Toyota");
        extracted
    }

    #[test]
    fn test_highest_confidence_wins() {
        let candidates = vec![vehicle("1", "Holden", "Astra"), vehicle("2", "Toyota", "Camry")];
        let counts = ListingCounts::new();
        let (best, confidence) = MatchSelector::new(&counts).select(&toyota_fragments(), &candidates);
        assert_eq!(best.map(|v| v.id.as_str()), Some("2"));
        assert!(confidence > 1.6);
    }

    #[test]
    fn test_tie_broken_by_listings() {
        let candidates = vec![vehicle("1", "Toyota", "Camry"), vehicle("2", "Toyota", "Corolla")];
        let counts = ListingCounts::from([("1".to_string(), 3), ("2".to_string(), 9)]);
        let (best, _) = MatchSelector::new(&counts).select(&toyota_fragments(), &candidates);
        assert_eq!(best.map(|v| v.id.as_str()), Some("2"));
    }

    #[test]
    fn test_full_tie_keeps_first_seen() {
        let candidates = vec![vehicle("1", "Toyota", "Camry"), vehicle("2", "Toyota", "Corolla")];
        let counts = ListingCounts::from([("1".to_string(), 5), ("2".to_string(), 5)]);
        let (best, _) = MatchSelector::new(&counts).select(&toyota_fragments(), &candidates);
        assert_eq!(best.map(|v| v.id.as_str()), Some("1"));
    }

    #[test]
    fn test_zero_confidence_never_selected() {
        let candidates = vec![vehicle("1", "Holden", "Astra")];
        let counts = ListingCounts::from([("1".to_string(), 100)]);
        let (best, confidence) =
            MatchSelector::new(&counts).select(&ExtractedAttributes::new(), &candidates);
        assert!(best.is_none());
        assert_eq!(confidence, 0.0);
    }
}
