use crate::core::vector::{FeatureWeights, ScoringParams, FEATURE_COUNT};
use crate::models::ScreeningThresholds;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Nearest-neighbor count when the caller does not supply one.
    #[serde(default = "default_k")]
    pub default_k: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_k: default_k(),
        }
    }
}

fn default_k() -> usize {
    5
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub thresholds: ScreeningThresholds,
    #[serde(default)]
    pub ranges: RangeConfig,
}

/// Per-feature-group weights for distance scoring.
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_weight")]
    pub age: f64,
    #[serde(default = "default_weight")]
    pub gender: f64,
    #[serde(default = "default_weight")]
    pub availability: f64,
    #[serde(default = "default_weight")]
    pub screening: f64,
    #[serde(default = "default_weight")]
    pub need: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            age: default_weight(),
            gender: default_weight(),
            availability: default_weight(),
            screening: default_weight(),
            need: default_weight(),
        }
    }
}

fn default_weight() -> f64 {
    1.0
}

impl WeightsConfig {
    /// Expand the group weights into the fixed feature-vector layout.
    pub fn to_feature_weights(&self) -> FeatureWeights {
        let mut weights = [1.0; FEATURE_COUNT];
        weights[0] = self.age;
        weights[1] = self.gender;
        weights[2] = self.availability;
        for i in 0..3 {
            weights[3 + i] = self.screening;
            weights[6 + i] = self.need;
        }
        weights
    }
}

/// Normalization bounds for age and screening totals.
#[derive(Debug, Clone, Deserialize)]
pub struct RangeConfig {
    #[serde(default = "default_age_min")]
    pub age_min: f64,
    #[serde(default = "default_age_max")]
    pub age_max: f64,
    #[serde(default = "default_screening_min")]
    pub screening_min: f64,
    #[serde(default = "default_screening_max")]
    pub screening_max: f64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            age_min: default_age_min(),
            age_max: default_age_max(),
            screening_min: default_screening_min(),
            screening_max: default_screening_max(),
        }
    }
}

fn default_age_min() -> f64 {
    18.0
}
fn default_age_max() -> f64 {
    80.0
}
fn default_screening_min() -> f64 {
    1.0
}
fn default_screening_max() -> f64 {
    25.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with CALMA_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with CALMA_)
            // e.g., CALMA_MATCHING__DEFAULT_K -> matching.default_k
            .add_source(
                Environment::with_prefix("CALMA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("CALMA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Scoring parameters assembled from the configured sections.
    pub fn scoring_params(&self) -> ScoringParams {
        ScoringParams {
            age_min: self.scoring.ranges.age_min,
            age_max: self.scoring.ranges.age_max,
            screening_min: self.scoring.ranges.screening_min,
            screening_max: self.scoring.ranges.screening_max,
            thresholds: self.scoring.thresholds,
            weights: self.scoring.weights.to_feature_weights(),
        }
    }
}
