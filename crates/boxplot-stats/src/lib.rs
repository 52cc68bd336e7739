//! boxplot-stats - Statistics behind a box-and-whisker chart
//!
//! This crate turns an unordered sample set into an immutable per-category
//! summary:
//!
//! - **Quantiles**: median and linearly interpolated quartiles
//! - **Whiskers**: MinMax, Tukey, or strict 1.5×IQR fences
//! - **Outliers**: unique samples beyond the whiskers
//! - **Summary**: the above plus mean, extremes, and annotation candidates
//!
//! Everything here is a pure function of its inputs. Axis planning and
//! label layout live in `boxplot-core`.

pub mod error;
pub mod outlier;
pub mod quantile;
pub mod summary;
pub mod whisker;

pub use error::*;
pub use quantile::{estimate, QuantileEstimate, Quartiles};
pub use summary::*;
pub use whisker::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
