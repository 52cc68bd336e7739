//! Error types for boxplot-core
//!
//! Provides error handling for:
//! - Axis planning
//! - Chart configuration
//! - Per-category summarization failures
//!
//! Degenerate datasets (no categories, a single repeated value, too few
//! samples for a convention) are not errors; see [`crate::chart::ChartWarning`].

use boxplot_stats::StatsError;
use thiserror::Error;

/// Main error type for chart computation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// A category could not be summarized
    #[error("Category '{category}' could not be summarized: {source}")]
    Category {
        category: String,
        #[source]
        source: StatsError,
    },

    /// Axis planning errors
    #[error("Axis planning failed: {0}")]
    Axis(#[from] AxisError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to axis planning
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AxisError {
    /// Extent is not finite or is inverted
    #[error("Invalid axis extent: [{min}, {max}]")]
    InvalidExtent { min: f64, max: f64 },

    /// Padding or snapping the extent leaves the range of `f64`
    #[error("Axis for [{min}, {max}] cannot be padded within the range of f64")]
    Overflow { min: f64, max: f64 },
}

/// Errors related to chart configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// Configuration text could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// Configuration could not be serialized
    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),
}

/// Result type alias for chart operations
pub type ChartResult<T> = Result<T, ChartError>;

/// Result type alias for axis operations
pub type AxisResult<T> = Result<T, AxisError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
