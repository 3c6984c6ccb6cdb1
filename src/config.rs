use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::{MatchPreferences, WeightConfig};

/// Engine configuration for embedding applications
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct MatchingSettings {
    pub min_score: Option<u32>,
    pub max_results: Option<usize>,
    pub max_distance_km: Option<f64>,
}

impl MatchingSettings {
    /// Convert into the value object the ranking pipeline consumes.
    pub fn to_preferences(&self) -> MatchPreferences {
        MatchPreferences {
            max_results: self.max_results.unwrap_or(20),
            min_compatibility_score: self.min_score,
            max_distance_km: self.max_distance_km,
            min_price: None,
            max_price: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_price_weight")]
    pub price: f64,
    #[serde(default = "default_features_weight")]
    pub features: f64,
    #[serde(default = "default_property_type_weight")]
    pub property_type: f64,
    #[serde(default = "default_timing_weight")]
    pub timing: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            location: default_location_weight(),
            price: default_price_weight(),
            features: default_features_weight(),
            property_type: default_property_type_weight(),
            timing: default_timing_weight(),
        }
    }
}

impl From<WeightsConfig> for WeightConfig {
    fn from(w: WeightsConfig) -> Self {
        Self {
            location: w.location,
            price: w.price,
            features: w.features,
            property_type: w.property_type,
            timing: w.timing,
        }
    }
}

fn default_location_weight() -> f64 { 0.30 }
fn default_price_weight() -> f64 { 0.25 }
fn default_features_weight() -> f64 { 0.20 }
fn default_property_type_weight() -> f64 { 0.15 }
fn default_timing_weight() -> f64 { 0.10 }

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

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with EMLAK_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with EMLAK_)
            // e.g., EMLAK_SCORING__WEIGHTS__LOCATION -> scoring.weights.location
            .add_source(
                Environment::with_prefix("EMLAK")
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
                Environment::with_prefix("EMLAK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
