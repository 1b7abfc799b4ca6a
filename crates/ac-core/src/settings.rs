//! Engine configuration, loadable from TOML.
//!
//! - `parse_config_toml(toml_content)` parses and validates a custom configuration
//! - `Config::default()` mirrors the embedded `default_config.toml`
//! - `Config::validate()` is re-run by every constructor, so hand-built values
//!   get the same checks as parsed ones

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_TOML: &str = include_str!("default_config.toml");

/// Returns the embedded default configuration TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_CONFIG_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    pub cache: CacheSettings,
    pub search: SearchSettings,
    pub cleanup: CleanupSettings,
    pub weights: ScoreWeights,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CacheSettings {
    pub capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SearchSettings {
    /// Limit used when the caller does not choose one.
    pub max_results: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CleanupSettings {
    pub max_age_secs: u64,
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

/// Multipliers applied by the ranking function.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ScoreWeights {
    pub base: f64,
    pub frequency: f64,
    pub recency: f64,
}

fn default_interval_secs() -> u64 {
    3600
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            base: 1.0,
            frequency: 0.3,
            recency: 0.2,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache: CacheSettings { capacity: 1000 },
            search: SearchSettings { max_results: 10 },
            cleanup: CleanupSettings {
                max_age_secs: 24 * 3600,
                interval_secs: default_interval_secs(),
            },
            weights: ScoreWeights::default(),
        }
    }
}

impl Config {
    /// Default age threshold for callers that schedule cleanup.
    pub fn cleanup_age(&self) -> Duration {
        Duration::from_secs(self.cleanup.max_age_secs)
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup.interval_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        macro_rules! check_positive {
            ($section:ident . $field:ident) => {
                if self.$section.$field == 0 {
                    return Err(ConfigError::InvalidValue {
                        field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                        reason: "must be positive".to_string(),
                    });
                }
            };
        }
        macro_rules! check_weight {
            ($field:ident) => {
                let w = self.weights.$field;
                if !w.is_finite() || w < 0.0 {
                    return Err(ConfigError::InvalidValue {
                        field: concat!("weights.", stringify!($field)).to_string(),
                        reason: "must be a finite, non-negative number".to_string(),
                    });
                }
            };
        }

        check_positive!(cache.capacity);
        check_positive!(cleanup.max_age_secs);
        check_positive!(cleanup.interval_secs);

        check_weight!(base);
        check_weight!(frequency);
        check_weight!(recency);

        Ok(())
    }
}

pub fn parse_config_toml(toml_str: &str) -> Result<Config, ConfigError> {
    let config: Config =
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}
