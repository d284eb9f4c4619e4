//! Configuration types for surprisal.
//!
//! Consumers that build many accumulators or repeatedly rank frequency
//! comparisons can keep their choices in one YAML document:
//!
//! ```yaml
//! accumulator:
//!   precision: compact
//! ranking:
//!   max_return: 25
//!   min_score: 1.0
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, SurprisalError};
use crate::significance::{compare_frequencies, FrequencyDistribution, ScoredItem};
use crate::stats::{new_accumulator, BoxedRunningStatistics};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurprisalConfig {
    /// Running statistics settings
    #[serde(default)]
    pub accumulator: AccumulatorConfig,

    /// Frequency comparison settings
    #[serde(default)]
    pub ranking: RankingConfig,
}

impl SurprisalConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            SurprisalError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&path, content).map_err(|e| {
            SurprisalError::io(
                format!("Failed to write config file: {}", path.display()),
                e,
            )
        })
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        self.ranking
            .validate()
            .map_err(|e| e.with_context("ranking"))?;
        Ok(())
    }
}

/// Storage precision of a running statistics accumulator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// `f64` state, accurate
    #[default]
    Full,
    /// `f32` state, half the memory
    Compact,
}

/// Running statistics configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccumulatorConfig {
    /// Storage precision for new accumulators
    #[serde(default)]
    pub precision: Precision,
}

impl AccumulatorConfig {
    /// Create an empty accumulator with the configured precision
    pub fn build(&self) -> BoxedRunningStatistics {
        new_accumulator(self.precision)
    }
}

/// Frequency comparison configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Maximum number of scored items returned
    pub max_return: usize,

    /// Minimum signed root-LLR score an item must reach
    pub min_score: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            max_return: 100,
            min_score: 0.0,
        }
    }
}

impl RankingConfig {
    /// Validate ranking configuration
    pub fn validate(&self) -> Result<()> {
        if self.min_score.is_nan() {
            return Err(SurprisalError::validation("min_score must not be NaN"));
        }
        Ok(())
    }

    /// Compare `sample` against `reference` with the configured limits
    pub fn compare<T, S, R>(&self, sample: &S, reference: &R) -> Result<Vec<ScoredItem<T>>>
    where
        T: Clone + Ord,
        S: FrequencyDistribution<T> + ?Sized,
        R: FrequencyDistribution<T> + ?Sized,
    {
        compare_frequencies(sample, reference, self.max_return, self.min_score)
    }
}
