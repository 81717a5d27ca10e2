//! Utility modules

pub mod fuzzy;

pub use fuzzy::{find_best_match, longest_common_block, similarity, FuzzyMatch};
