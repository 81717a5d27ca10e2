//! Vehicle catalog access
//!
//! The matcher never fetches catalog data on its own. A [`Catalog`] hands
//! over distinct attribute values, vehicle rows and listing counts, and
//! the session snapshots them once.

use crate::error::CarMatchResult;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryCatalog;
pub use sqlite::SqliteCatalog;

/// Popularity count per vehicle id. Missing ids count as 0.
pub type ListingCounts = HashMap<String, u64>;

/// The six vehicle fields used for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeColumn {
    Make,
    Model,
    Badge,
    TransmissionType,
    FuelType,
    DriveType,
}

impl AttributeColumn {
    /// All columns in matching order
    pub const ALL: [AttributeColumn; 6] = [
        AttributeColumn::Make,
        AttributeColumn::Model,
        AttributeColumn::Badge,
        AttributeColumn::TransmissionType,
        AttributeColumn::FuelType,
        AttributeColumn::DriveType,
    ];

    /// Column name as stored in the catalog
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeColumn::Make => "make",
            AttributeColumn::Model => "model",
            AttributeColumn::Badge => "badge",
            AttributeColumn::TransmissionType => "transmission_type",
            AttributeColumn::FuelType => "fuel_type",
            AttributeColumn::DriveType => "drive_type",
        }
    }
}

impl fmt::Display for AttributeColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: String,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub transmission_type: Option<String>,
    #[serde(default)]
    pub fuel_type: Option<String>,
    #[serde(default)]
    pub drive_type: Option<String>,
}

impl VehicleRecord {
    /// Value of a single attribute column
    pub fn attribute(&self, column: AttributeColumn) -> Option<&str> {
        let value = match column {
            AttributeColumn::Make => &self.make,
            AttributeColumn::Model => &self.model,
            AttributeColumn::Badge => &self.badge,
            AttributeColumn::TransmissionType => &self.transmission_type,
            AttributeColumn::FuelType => &self.fuel_type,
            AttributeColumn::DriveType => &self.drive_type,
        };
        value.as_deref()
    }
}

/// Source of catalog data for a matching session
pub trait Catalog {
    /// Distinct non-null values of one column
    fn distinct_values(&self, column: AttributeColumn) -> CarMatchResult<Vec<String>>;

    /// Every vehicle, in the order candidates should be considered
    fn vehicles(&self) -> CarMatchResult<Vec<VehicleRecord>>;

    /// Listing count per vehicle id
    fn listing_counts(&self) -> CarMatchResult<ListingCounts>;
}

/// Distinct known values per attribute column
#[derive(Debug, Clone, Default)]
pub struct AttributeVocabulary {
    values: BTreeMap<AttributeColumn, BTreeSet<String>>,
}

impl AttributeVocabulary {
    /// Collect the vocabulary of every column from a catalog
    pub fn from_catalog(catalog: &dyn Catalog) -> CarMatchResult<Self> {
        let mut vocabulary = Self::default();
        for column in AttributeColumn::ALL {
            for value in catalog.distinct_values(column)? {
                vocabulary.insert(column, value);
            }
        }
        Ok(vocabulary)
    }

    pub fn insert(&mut self, column: AttributeColumn, value: impl Into<String>) {
        self.values.entry(column).or_default().insert(value.into());
    }

    /// Values of one column, sorted
    pub fn values(&self, column: AttributeColumn) -> impl Iterator<Item = &str> {
        self.values
            .get(&column)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Values of every column
    pub fn all_values(&self) -> impl Iterator<Item = &str> {
        self.values.values().flat_map(|set| set.iter().map(String::as_str))
    }

    pub fn len(&self, column: AttributeColumn) -> usize {
        self.values.get(&column).map_or(0, BTreeSet::len)
    }

    pub fn is_empty(&self, column: AttributeColumn) -> bool {
        self.len(column) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camry() -> VehicleRecord {
        VehicleRecord {
            id: "v1".into(),
            make: Some("Toyota".into()),
            model: Some("Camry".into()),
            badge: None,
            transmission_type: Some("Automatic".into()),
            fuel_type: Some("Petrol".into()),
            drive_type: None,
        }
    }

    #[test]
    fn test_attribute_lookup() {
        let v = camry();
        assert_eq!(v.attribute(AttributeColumn::Make), Some("Toyota"));
        assert_eq!(v.attribute(AttributeColumn::FuelType), Some("Petrol"));
        assert_eq!(v.attribute(AttributeColumn::Badge), None);
    }

    #[test]
    fn test_column_names() {
        let names: Vec<&str> = AttributeColumn::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            ["make", "model", "badge", "transmission_type", "fuel_type", "drive_type"]
        );
        let json = serde_json::to_string(&AttributeColumn::TransmissionType).expect("serialize");
        assert_eq!(json, "\"transmission_type\"");
    }

    #[test]
    fn test_vocabulary_from_catalog() {
        let catalog = InMemoryCatalog::new(vec![camry()], ListingCounts::new());
        let vocabulary = AttributeVocabulary::from_catalog(&catalog).expect("vocabulary");
        assert_eq!(vocabulary.values(AttributeColumn::Make).collect::<Vec<_>>(), ["Toyota"]);
        assert!(vocabulary.is_empty(AttributeColumn::Badge));
        assert_eq!(vocabulary.all_values().count(), 4);
    }
}
