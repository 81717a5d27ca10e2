//! Accuracy evaluation against ground truth
//!
//! Inputs are two line-aligned files: one description per line and one
//! expected vehicle id per line.

use crate::error::{CarMatchError, CarMatchResult};
use serde::Serialize;
use std::path::Path;
use tracing::warn;

/// A description that did not resolve to its expected vehicle
#[derive(Debug, Clone, Serialize)]
pub struct Miss {
    /// Description after cleaning
    pub description: String,
    pub expected_id: String,
    pub matched_id: Option<String>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub total: usize,
    pub correct: usize,
    pub misses: Vec<Miss>,
    pub generated_at: String,
}

impl Default for EvaluationReport {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluationReport {
    pub fn new() -> Self {
        Self {
            total: 0,
            correct: 0,
            misses: Vec::new(),
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    pub fn record(&mut self, hit: bool) {
        self.total += 1;
        if hit {
            self.correct += 1;
        }
    }

    /// Percentage of correct matches, 0 for an empty run
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }
}

/// Read line-aligned descriptions and truth ids.
///
/// Truth ids are trimmed. When the files differ in length the extra lines
/// of the longer one are ignored.
pub fn read_pairs(inputs: &Path, truth: &Path) -> CarMatchResult<Vec<(String, String)>> {
    let descriptions = read_lines(inputs)?;
    let truth_ids = read_lines(truth)?;

    if descriptions.len() != truth_ids.len() {
        warn!(
            "⚠️ {} descriptions but {} truth ids, extra lines ignored",
            descriptions.len(),
            truth_ids.len()
        );
    }

    Ok(descriptions
        .into_iter()
        .zip(truth_ids)
        .map(|(description, id)| (description, id.trim().to_string()))
        .collect())
}

fn read_lines(path: &Path) -> CarMatchResult<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        CarMatchError::Evaluation(format!("cannot read {}: {}", path.display(), e))
    })?;
    Ok(content.lines().map(str::to_string).collect())
}
