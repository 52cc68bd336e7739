//! Whisker conventions
//!
//! - **MinMax**: whiskers reach the absolute extremes
//! - **Tukey**: whiskers reach the most extreme samples inside the 1.5×IQR fences
//! - **StrictIqr**: whiskers sit on the fences themselves, which need not be samples

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};
use crate::quantile::Quartiles;

/// Fence multiplier applied to the interquartile range
pub const FENCE_FACTOR: f64 = 1.5;

/// Rule set used to place the whiskers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(rename_all = "snake_case")]
pub enum WhiskerConvention {
    #[default]
    MinMax,
    Tukey,
    StrictIqr,
}

/// Which end of the box a whisker belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(rename_all = "snake_case")]
pub enum WhiskerSide {
    Low,
    High,
}

impl fmt::Display for WhiskerSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WhiskerSide::Low => write!(f, "low"),
            WhiskerSide::High => write!(f, "high"),
        }
    }
}

/// Display name for a whisker end
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(rename_all = "snake_case")]
pub enum WhiskerLabel {
    Minimum,
    Maximum,
    LowerFence,
    UpperFence,
}

impl WhiskerLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            WhiskerLabel::Minimum => "Minimum",
            WhiskerLabel::Maximum => "Maximum",
            WhiskerLabel::LowerFence => "Q1 − 1.5 × IQR",
            WhiskerLabel::UpperFence => "Q3 + 1.5 × IQR",
        }
    }
}

impl fmt::Display for WhiskerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computed whisker ends for one category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Whiskers {
    /// Convention actually applied (may differ from the requested one)
    pub convention: WhiskerConvention,
    pub low: f64,
    pub high: f64,
    pub low_label: WhiskerLabel,
    pub high_label: WhiskerLabel,
}

impl Whiskers {
    /// True if the requested convention had to fall back to MinMax
    pub fn was_downgraded(&self, requested: WhiskerConvention) -> bool {
        self.convention != requested
    }
}

/// Convention that can actually be applied to `n` samples
///
/// Without quartiles there is no IQR. Three identical samples have a zero
/// IQR and collapsed fences. Both cases fall back to MinMax.
pub fn effective_convention(
    requested: WhiskerConvention,
    n: usize,
    quartiles: Option<&Quartiles>,
) -> WhiskerConvention {
    match quartiles {
        None => WhiskerConvention::MinMax,
        Some(q) if n <= 3 && q.iqr() == 0.0 => WhiskerConvention::MinMax,
        Some(_) => requested,
    }
}

/// Place the whiskers for ascending samples
pub fn classify(
    convention: WhiskerConvention,
    sorted: &[f64],
    quartiles: Option<&Quartiles>,
) -> StatsResult<Whiskers> {
    let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
        return Err(StatsError::EmptySamples);
    };

    let convention = effective_convention(convention, sorted.len(), quartiles);
    let quartiles = match (convention, quartiles) {
        (WhiskerConvention::MinMax, _) | (_, None) => {
            return Ok(Whiskers {
                convention: WhiskerConvention::MinMax,
                low: min,
                high: max,
                low_label: WhiskerLabel::Minimum,
                high_label: WhiskerLabel::Maximum,
            });
        }
        (_, Some(q)) => q,
    };

    let iqr = quartiles.iqr();
    let lower_fence = quartiles.q1 - FENCE_FACTOR * iqr;
    let upper_fence = quartiles.q3 + FENCE_FACTOR * iqr;

    match convention {
        WhiskerConvention::Tukey => {
            let low = sorted.iter().copied().find(|&v| v >= lower_fence).ok_or(
                StatsError::BoundaryUnsatisfiable {
                    side: WhiskerSide::Low,
                    bound: lower_fence,
                },
            )?;
            let high = sorted.iter().rev().copied().find(|&v| v <= upper_fence).ok_or(
                StatsError::BoundaryUnsatisfiable {
                    side: WhiskerSide::High,
                    bound: upper_fence,
                },
            )?;
            Ok(Whiskers {
                convention,
                low,
                high,
                low_label: WhiskerLabel::Minimum,
                high_label: WhiskerLabel::Maximum,
            })
        }
        _ => Ok(Whiskers {
            convention,
            low: lower_fence,
            high: upper_fence,
            low_label: WhiskerLabel::LowerFence,
            high_label: WhiskerLabel::UpperFence,
        }),
    }
}
