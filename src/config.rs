//! @ai:module:intent Experiment definition loaded from TOML
//! @ai:module:layer infrastructure
//! @ai:module:public_api ExperimentConfig, ConditionConfig, ChartConfig
//! @ai:module:stateless true

use crate::detection::MetricUnit;
use crate::error::{Error, Result};
use crate::roc::CurveAggregator;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// @ai:intent Conditions to analyze plus chart settings
/// @ai:effects pure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub conditions: Vec<ConditionConfig>,
}

/// @ai:intent Outcome counts for one condition
/// @ai:effects pure
///
/// Counts are unsigned; a negative value in the file fails deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub hits: u64,
    pub misses: u64,
    pub false_alarms: u64,
    pub correct_rejections: u64,
}

/// @ai:intent ROC chart appearance
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_title() -> String {
    "ROC Curve".to_string()
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

impl ConditionConfig {
    /// @ai:intent Build the metric unit described by these counts
    /// @ai:effects pure
    pub fn unit(&self) -> MetricUnit {
        MetricUnit::new(
            self.hits,
            self.misses,
            self.false_alarms,
            self.correct_rejections,
        )
    }
}

impl ExperimentConfig {
    /// @ai:intent Load an experiment definition from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content)?;

        tracing::debug!(
            "Loaded {} conditions from {}",
            config.conditions.len(),
            path.display()
        );
        Ok(config)
    }

    /// @ai:intent Save the experiment definition to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @ai:intent Example definition written by `init`
    /// @ai:effects pure
    pub fn sample() -> Self {
        let condition = |label: &str, hits: u64, misses: u64, false_alarms: u64, cr: u64| {
            ConditionConfig {
                label: Some(label.to_string()),
                hits,
                misses,
                false_alarms,
                correct_rejections: cr,
            }
        };

        Self {
            chart: ChartConfig::default(),
            conditions: vec![
                condition("Strict", 25, 25, 5, 45),
                condition("Moderate", 35, 15, 12, 38),
                condition("Lenient", 45, 5, 25, 25),
            ],
        }
    }

    /// @ai:intent Build an aggregator holding every condition in file order
    /// @ai:effects pure
    pub fn to_aggregator(&self) -> CurveAggregator {
        let mut aggregator = CurveAggregator::new();
        for condition in &self.conditions {
            aggregator.add_condition(condition.unit(), condition.label.clone());
        }
        aggregator
    }
}
