//! Configuration for boxplot-core
//!
//! One [`ChartConfig`] is passed into every update. Defaults match the
//! chart's property pane: MinMax whiskers, outliers and data labels hidden,
//! major grid lines and legend shown.

use boxplot_stats::{SummaryOptions, WhiskerConvention};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Chart-wide configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(default)]
pub struct ChartConfig {
    /// Whisker convention
    pub whisker: WhiskerConvention,
    /// Draw samples beyond the whiskers
    pub show_outliers: bool,
    /// Annotate summary values next to each box
    pub show_data_labels: bool,
    /// Draw gridlines at major ticks
    pub show_major_grid: bool,
    /// Draw gridlines between major ticks (requires the major grid)
    pub show_minor_grid: bool,
    /// Reserve space for the legend strip
    pub show_legend: bool,
    /// Label layout parameters
    pub labels: LabelConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            whisker: WhiskerConvention::MinMax,
            show_outliers: false,
            show_data_labels: false,
            show_major_grid: true,
            show_minor_grid: false,
            show_legend: true,
            labels: LabelConfig::default(),
        }
    }
}

/// Label layout configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(default)]
pub struct LabelConfig {
    /// Minimum vertical distance between neighbouring labels, in pixels
    pub min_gap: f64,
    /// Labels sit this many pixels below the value they annotate
    pub baseline_offset: f64,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            min_gap: 10.0,
            baseline_offset: 4.0,
        }
    }
}

impl ChartConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the whisker convention
    pub fn with_whisker(mut self, whisker: WhiskerConvention) -> Self {
        self.whisker = whisker;
        self
    }

    /// Show outliers
    pub fn with_outliers(mut self) -> Self {
        self.show_outliers = true;
        self
    }

    /// Show data labels
    pub fn with_data_labels(mut self) -> Self {
        self.show_data_labels = true;
        self
    }

    /// Options for the per-category summarizer
    pub fn summary_options(&self) -> SummaryOptions {
        SummaryOptions {
            convention: self.whisker,
            show_outliers: self.show_outliers,
            show_data_labels: self.show_data_labels,
        }
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> ConfigResult<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> ConfigResult<Self> {
        let config: Self =
            serde_json::from_str(json_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.labels.min_gap.is_finite() || self.labels.min_gap <= 0.0 {
            return Err(ConfigError::OutOfRange(format!(
                "labels.min_gap must be positive, got {}",
                self.labels.min_gap
            )));
        }

        if !self.labels.baseline_offset.is_finite() {
            return Err(ConfigError::OutOfRange(
                "labels.baseline_offset must be finite".to_string(),
            ));
        }

        Ok(())
    }
}
