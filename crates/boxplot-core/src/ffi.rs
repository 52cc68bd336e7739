//! FFI entry points for host applications
//!
//! Thin wrappers over the Rust API with owned arguments and a flat error
//! type, exported through UniFFI when the `uniffi` feature is enabled.

use boxplot_stats::{category_label, CategorySummary, SummaryOptions};
use thiserror::Error;

use crate::axis::AxisPlan;
use crate::chart::{self, CategoryInput, ChartFrame};
use crate::config::ChartConfig;
use crate::error::{ChartError, ConfigError};
use crate::layout::Viewport;

/// FFI-safe error type for chart operations
#[derive(Error, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum ChartErrorFfi {
    /// A category's samples could not be summarized
    #[error("Category '{category}' could not be summarized: {message}")]
    Category { category: String, message: String },

    /// The value axis could not be planned
    #[error("Axis planning failed: {message}")]
    Axis { message: String },

    /// The configuration was rejected
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// A result could not be serialized
    #[error("Serialization failed: {message}")]
    Serialize { message: String },
}

impl From<ChartError> for ChartErrorFfi {
    fn from(err: ChartError) -> Self {
        match err {
            ChartError::Category { category, source } => ChartErrorFfi::Category {
                category,
                message: source.to_string(),
            },
            ChartError::Axis(e) => ChartErrorFfi::Axis {
                message: e.to_string(),
            },
            ChartError::Config(e) => e.into(),
        }
    }
}

impl From<ConfigError> for ChartErrorFfi {
    fn from(err: ConfigError) -> Self {
        ChartErrorFfi::Config {
            message: err.to_string(),
        }
    }
}

/// Run one chart update
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn build_chart_frame(
    inputs: Vec<CategoryInput>,
    config: ChartConfig,
    width: f64,
    height: f64,
) -> Result<ChartFrame, ChartErrorFfi> {
    Ok(chart::build_frame(
        &inputs,
        &config,
        Viewport::new(width, height),
    )?)
}

/// Summarize one category's samples
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn summarize_category(
    name: Option<String>,
    samples: Vec<f64>,
    options: SummaryOptions,
) -> Result<CategorySummary, ChartErrorFfi> {
    let category = category_label(name.as_deref());
    CategorySummary::summarize(category.clone(), &samples, &options).map_err(|source| {
        ChartErrorFfi::Category {
            category,
            message: source.to_string(),
        }
    })
}

/// Plan a value axis over `[global_min, global_max]`
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn plan_axis(global_min: f64, global_max: f64) -> Result<AxisPlan, ChartErrorFfi> {
    AxisPlan::plan(global_min, global_max).map_err(|e| ChartErrorFfi::Axis {
        message: e.to_string(),
    })
}

/// Default chart configuration
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn default_chart_config() -> ChartConfig {
    ChartConfig::default()
}

/// Parse a chart configuration from TOML
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn chart_config_from_toml(text: String) -> Result<ChartConfig, ChartErrorFfi> {
    Ok(ChartConfig::from_toml(&text)?)
}

/// Parse a chart configuration from JSON
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn chart_config_from_json(text: String) -> Result<ChartConfig, ChartErrorFfi> {
    Ok(ChartConfig::from_json(&text)?)
}

/// Serialize a frame to JSON for hosts that render from a web view
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn chart_frame_to_json(frame: ChartFrame) -> Result<String, ChartErrorFfi> {
    serde_json::to_string(&frame).map_err(|e| ChartErrorFfi::Serialize {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxplot_stats::WhiskerConvention;

    fn skewed() -> Vec<f64> {
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0]
    }

    #[test]
    fn test_build_chart_frame() {
        let config = default_chart_config()
            .with_whisker(WhiskerConvention::Tukey)
            .with_outliers();
        let inputs = vec![CategoryInput::new("skewed", skewed())];
        let frame = build_chart_frame(inputs, config, 640.0, 480.0).unwrap();

        assert_eq!(frame.categories.len(), 1);
        assert_eq!(frame.categories[0].summary.outliers(), &[100.0]);
        assert_eq!(frame.layout.viewport.width, 640.0);
    }

    #[test]
    fn test_category_error_is_flattened() {
        let inputs = vec![CategoryInput::new("bad", vec![f64::NAN])];
        let err = build_chart_frame(inputs, default_chart_config(), 640.0, 480.0).unwrap_err();
        match err {
            ChartErrorFfi::Category { category, message } => {
                assert_eq!(category, "bad");
                assert_eq!(message, "Sample 0 is not a finite number: NaN");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_summarize_category() {
        let options = SummaryOptions {
            convention: WhiskerConvention::Tukey,
            show_outliers: true,
            show_data_labels: false,
        };
        let summary = summarize_category(None, skewed(), options).unwrap();
        assert_eq!(summary.category(), "(blank)");
        assert_eq!((summary.whisker_low(), summary.whisker_high()), (1.0, 9.0));

        let err = summarize_category(Some("empty".into()), vec![], options).unwrap_err();
        assert!(matches!(err, ChartErrorFfi::Category { ref category, .. } if category == "empty"));
    }

    #[test]
    fn test_plan_axis() {
        let plan = plan_axis(0.0, 1000.0).unwrap();
        assert_eq!(plan.tick_count, 7);
        assert!(matches!(
            plan_axis(-1.0e308, 1.0e308),
            Err(ChartErrorFfi::Axis { .. })
        ));
    }

    #[test]
    fn test_config_parsing() {
        let config = chart_config_from_toml("whisker = \"strict_iqr\"".to_string()).unwrap();
        assert_eq!(config.whisker, WhiskerConvention::StrictIqr);

        let config = chart_config_from_json(r#"{"show_outliers": true}"#.to_string()).unwrap();
        assert!(config.show_outliers);

        let err = chart_config_from_json(r#"{"labels": {"min_gap": 0}}"#.to_string()).unwrap_err();
        assert!(matches!(err, ChartErrorFfi::Config { .. }));
    }

    #[test]
    fn test_frame_to_json() {
        let inputs = vec![CategoryInput::new("a", skewed())];
        let frame = build_chart_frame(inputs, default_chart_config(), 640.0, 480.0).unwrap();
        let json = chart_frame_to_json(frame).unwrap();
        assert!(json.contains("\"categories\""));
    }
}
