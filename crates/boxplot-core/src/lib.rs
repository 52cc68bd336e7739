//! boxplot-core - Box-and-whisker chart engine
//!
//! Turns categorized sample sets into everything a renderer needs to draw a
//! box-and-whisker chart, one update at a time.
//!
//! # Key Components
//!
//! - **Chart**: the update pipeline, [`build_frame`], and its [`ChartFrame`] output
//! - **Axis**: padded, snapped value-axis range with "nice" tick steps
//! - **Layout**: plot area, category slots, and value-to-pixel scales
//! - **Labels**: greedy, collision-free stacking of value labels
//! - **Config**: chart options, loadable from TOML or JSON
//! - **FFI**: owned-argument entry points exported through UniFFI
//!
//! Per-category statistics come from `boxplot-stats` and are re-exported here.

pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod ffi;
pub mod labels;
pub mod layout;

pub use axis::*;
pub use chart::*;
pub use config::*;
pub use error::*;
pub use ffi::*;
pub use labels::{project, LabelLayout};
pub use layout::*;

pub use boxplot_stats::{
    CategorySummary, DetailRow, LabelCandidate, Quartiles, StatsError, SummaryOptions,
    WhiskerConvention, WhiskerLabel, WhiskerSide, Whiskers,
};

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
