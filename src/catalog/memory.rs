//! In-memory catalog, optionally loaded from a JSON snapshot

use super::{AttributeColumn, Catalog, ListingCounts, VehicleRecord};
use crate::error::{CarMatchError, CarMatchResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Catalog held entirely in memory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryCatalog {
    pub vehicles: Vec<VehicleRecord>,
    #[serde(default)]
    pub listing_counts: ListingCounts,
}

impl InMemoryCatalog {
    pub fn new(vehicles: Vec<VehicleRecord>, listing_counts: ListingCounts) -> Self {
        Self {
            vehicles,
            listing_counts,
        }
    }

    /// Load a `{ "vehicles": [...], "listing_counts": {...} }` snapshot
    pub fn from_json_file(path: &Path) -> CarMatchResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CarMatchError::Catalog(format!("cannot read {}: {}", path.display(), e))
        })?;
        let catalog: Self = serde_json::from_str(&content)?;
        tracing::info!(
            "📂 Loaded {} vehicles from {}",
            catalog.vehicles.len(),
            path.display()
        );
        Ok(catalog)
    }
}

impl Catalog for InMemoryCatalog {
    fn distinct_values(&self, column: AttributeColumn) -> CarMatchResult<Vec<String>> {
        let values: BTreeSet<&str> = self
            .vehicles
            .iter()
            .filter_map(|v| v.attribute(column))
            .collect();
        Ok(values.into_iter().map(str::to_string).collect())
    }

    fn vehicles(&self) -> CarMatchResult<Vec<VehicleRecord>> {
        Ok(self.vehicles.clone())
    }

    fn listing_counts(&self) -> CarMatchResult<ListingCounts> {
        Ok(self.listing_counts.clone())
    }
}
