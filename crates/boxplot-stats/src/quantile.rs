//! Median and quartile estimation
//!
//! Quartiles use linear interpolation at fractional rank `(n - 1) / 4`
//! (and three times that for the upper quartile). Chart output depends on
//! these exact numbers, so the method must not be swapped for another
//! percentile definition.

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};

/// Lower and upper quartile of a sample set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Quartiles {
    /// 25th percentile estimate
    pub q1: f64,
    /// 75th percentile estimate
    pub q3: f64,
}

impl Quartiles {
    /// Interquartile range (q3 - q1)
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Median plus quartiles, when the sample set is large enough to have them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct QuantileEstimate {
    pub median: f64,
    /// Absent for two or fewer samples
    pub quartiles: Option<Quartiles>,
}

/// Estimate median and quartiles from ascending samples
pub fn estimate(sorted: &[f64]) -> StatsResult<QuantileEstimate> {
    let n = sorted.len();
    if n == 0 {
        return Err(StatsError::EmptySamples);
    }
    debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

    let mid = (n - 1) as f64 / 2.0;
    let median = (sorted[mid.floor() as usize] + sorted[mid.ceil() as usize]) / 2.0;

    let quartiles = match n {
        1 | 2 => None,
        3 => Some(Quartiles {
            q1: sorted[0],
            q3: sorted[2],
        }),
        _ => {
            let rank = (n - 1) as f64 / 4.0;
            Some(Quartiles {
                q1: interpolate(sorted, rank),
                q3: interpolate(sorted, 3.0 * rank),
            })
        }
    };

    Ok(QuantileEstimate { median, quartiles })
}

/// Linear interpolation between the samples bracketing a fractional rank
fn interpolate(sorted: &[f64], rank: f64) -> f64 {
    let low = sorted[rank.floor() as usize];
    let high = sorted[rank.ceil() as usize];
    low + (rank - rank.floor()) * (high - low)
}
