//! Error types for boxplot-stats
//!
//! Degenerate inputs that still have a defined summary (two or fewer
//! samples, a convention that needs quartiles) are not errors; they are
//! handled where they occur. Only states with no meaningful result end up
//! here.

use thiserror::Error;

use crate::whisker::WhiskerSide;

/// Errors raised while summarizing a sample set
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// No samples to summarize
    #[error("Sample set is empty")]
    EmptySamples,

    /// A sample was NaN or infinite
    #[error("Sample {index} is not a finite number: {value}")]
    NonFiniteSample { index: usize, value: f64 },

    /// Tukey whisker search found no sample inside the fence
    #[error("No sample satisfies the {side} whisker bound {bound}")]
    BoundaryUnsatisfiable { side: WhiskerSide, bound: f64 },
}

/// Result type alias for statistics operations
pub type StatsResult<T> = Result<T, StatsError>;
