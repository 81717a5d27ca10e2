use crate::core::abbreviations::{default_abbreviations, Abbreviation};
use crate::core::spelling::{DEFAULT_CUTOFF, DEFAULT_MIN_WORD_LEN};
use crate::error::{CarMatchError, CarMatchResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the catalog comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CatalogFormat {
    Sqlite,
    Json,
}

/// Tunables of the matching pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherSettings {
    /// Minimum similarity for a spelling correction
    #[serde(default = "default_cutoff")]
    pub correction_cutoff: f64,
    /// Dictionary words must be longer than this
    #[serde(default = "default_min_word_len")]
    pub min_dictionary_word_len: usize,
    /// Applied in order after spelling correction
    #[serde(default = "default_abbreviations")]
    pub abbreviations: Vec<Abbreviation>,
}

fn default_cutoff() -> f64 {
    DEFAULT_CUTOFF
}

fn default_min_word_len() -> usize {
    DEFAULT_MIN_WORD_LEN
}

impl Default for MatcherSettings {
    fn default() -> Self {
        Self {
            correction_cutoff: DEFAULT_CUTOFF,
            min_dictionary_word_len: DEFAULT_MIN_WORD_LEN,
            abbreviations: default_abbreviations(),
        }
    }
}

impl MatcherSettings {
    pub fn validate(&self) -> CarMatchResult<()> {
        if !(0.0..=1.0).contains(&self.correction_cutoff) {
            return Err(CarMatchError::Config(format!(
                "correction_cutoff must be within [0, 1], got {}",
                self.correction_cutoff
            )));
        }
        Ok(())
    }
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Catalog
    pub catalog_path: String,
    pub catalog_format: CatalogFormat,

    // Meta
    pub log_level: String,

    // Matching
    #[serde(default)]
    pub matcher: MatcherSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: dirs::data_dir()
                .unwrap_or_default()
                .join("carmatch/catalog.db")
                .to_string_lossy()
                .to_string(),
            catalog_format: CatalogFormat::Sqlite,
            log_level: "INFO".to_string(),
            matcher: MatcherSettings::default(),
        }
    }
}

impl Config {
    /// Load config from the default location, or fall back to defaults
    pub fn load() -> CarMatchResult<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from `config_path`.
    ///
    /// A missing file gives defaults. A file that does not parse is moved
    /// aside to `*.json.corrupt` and defaults are used.
    pub fn load_from(config_path: &Path) -> CarMatchResult<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)?;
        match serde_json::from_str::<Self>(&content) {
            Ok(config) => {
                config.matcher.validate()?;
                Ok(config)
            }
            Err(e) => {
                // Graceful degradation: log warning and use defaults
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                let backup_path = config_path.with_extension("json.corrupt");
                let _ = std::fs::rename(config_path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> CarMatchResult<()> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> CarMatchResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Tracing level from `log_level`, INFO when unrecognized
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level
            .parse()
            .unwrap_or(tracing::Level::INFO)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("carmatch")
        .join("config.json")
}
