//! Value-axis planning
//!
//! Derives a padded, snapped axis range and a "nice" tick step from the
//! global extent of every category. Bounds always strictly contain the
//! drawn data and tick steps are always `{0.2, 0.5, 1, 2} × 10^k`.

use boxplot_stats::CategorySummary;
use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

/// Number of minor gridline intervals per major tick step
pub const MINOR_SUBDIVISIONS: usize = 5;

/// Planned value axis
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct AxisPlan {
    /// Lowest tick (multiple of `tick_step`)
    pub min: f64,
    /// Highest tick (multiple of `tick_step`)
    pub max: f64,
    pub tick_step: f64,
    /// Number of major ticks from `min` to `max` inclusive
    pub tick_count: u64,
    /// Data extent after padding, before snapping
    pub padded_min: f64,
    pub padded_max: f64,
    /// True when every drawn value was identical
    pub degenerate: bool,
}

/// A tick mark on the value axis
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct TickMark {
    /// Position in data coordinates
    pub value: f64,

    /// Position in normalized coordinates (0.0 to 1.0)
    pub normalized: f64,

    /// Whether this is a major tick
    pub is_major: bool,
}

impl AxisPlan {
    /// Plan an axis covering `[global_min, global_max]`
    pub fn plan(global_min: f64, global_max: f64) -> AxisResult<Self> {
        if !global_min.is_finite() || !global_max.is_finite() || global_min > global_max {
            return Err(AxisError::InvalidExtent {
                min: global_min,
                max: global_max,
            });
        }

        let (mut padded_min, mut padded_max) = pad_extent(global_min, global_max);
        if padded_max <= padded_min {
            padded_min = 0.0;
            padded_max = 1.0;
        }

        let overflow = AxisError::Overflow {
            min: global_min,
            max: global_max,
        };
        let span = padded_max - padded_min;
        if !padded_min.is_finite() || !padded_max.is_finite() || !span.is_finite() {
            return Err(overflow);
        }

        let p = span.log10();
        let magnitude = p.floor();
        let fraction = 10f64.powf(p - magnitude);
        let tick_step = step_multiplier(fraction) * 10f64.powf(magnitude);

        let mut max = tick_step * ((padded_max / tick_step).floor() + 1.0);
        let mut min = tick_step * (padded_min / tick_step).floor();
        // Rounding in the divide/multiply must never clip the padded data
        if max <= padded_max {
            max += tick_step;
        }
        if min > padded_min {
            min -= tick_step;
        }

        let snapped_span = max - min;
        if !tick_step.is_finite() || !snapped_span.is_finite() {
            return Err(overflow);
        }

        let tick_count = (snapped_span / tick_step).round() as u64 + 1;

        Ok(Self {
            min,
            max,
            tick_step,
            tick_count,
            padded_min,
            padded_max,
            degenerate: global_min == global_max,
        })
    }

    /// Plan an axis over everything the summaries draw
    ///
    /// Returns `None` when there are no summaries.
    pub fn from_summaries(summaries: &[CategorySummary]) -> AxisResult<Option<Self>> {
        let extent = summaries
            .iter()
            .map(CategorySummary::extent)
            .reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h)));

        match extent {
            Some((min, max)) => Self::plan(min, max).map(Some),
            None => Ok(None),
        }
    }

    /// Total span of the axis
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `value` in normalized coordinates
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }

    /// Value at which the category axis crosses the value axis
    ///
    /// Zero when the axis spans it, otherwise the lower bound.
    pub fn baseline(&self) -> f64 {
        if self.min > 0.0 || self.max < 0.0 {
            self.min
        } else {
            0.0
        }
    }

    /// Major tick marks from `min` to `max`
    pub fn major_ticks(&self) -> Vec<TickMark> {
        (0..self.tick_count)
            .map(|i| {
                let value = self.min + i as f64 * self.tick_step;
                TickMark {
                    value,
                    normalized: self.normalize(value).clamp(0.0, 1.0),
                    is_major: true,
                }
            })
            .collect()
    }

    /// Gridline positions, sorted by value
    ///
    /// Minor lines only appear together with major lines.
    pub fn grid_lines(&self, show_major: bool, show_minor: bool) -> Vec<TickMark> {
        if !show_major {
            return Vec::new();
        }

        let mut ticks = self.major_ticks();
        if show_minor && ticks.len() >= 2 {
            let minor_step = self.tick_step / MINOR_SUBDIVISIONS as f64;
            let minor_ticks: Vec<TickMark> = ticks
                .iter()
                .take(ticks.len() - 1)
                .flat_map(|tick| {
                    (1..MINOR_SUBDIVISIONS).map(move |i| tick.value + minor_step * i as f64)
                })
                .map(|value| TickMark {
                    value,
                    normalized: self.normalize(value),
                    is_major: false,
                })
                .collect();
            ticks.extend(minor_ticks);
            ticks.sort_by(|a, b| a.value.total_cmp(&b.value));
        }

        ticks
    }
}

/// Pad the raw extent outward by 1% of each bound's magnitude plus 1% of the range
///
/// A zero bound stays at zero, except that an all-zero extent opens up to `[0, 1]`.
pub fn pad_extent(min: f64, max: f64) -> (f64, f64) {
    let range = max - min;

    let padded_min = if min == 0.0 {
        0.0
    } else if min > 0.0 {
        min * 0.99 - range / 100.0
    } else {
        min * 1.01 - range / 100.0
    };

    let padded_max = if max == 0.0 {
        if min == 0.0 {
            1.0
        } else {
            0.0
        }
    } else if max < 0.0 {
        max * 0.99 + range / 100.0
    } else {
        max * 1.01 + range / 100.0
    };

    (padded_min, padded_max)
}

/// Tick step multiplier for the leading-digit fraction of the range
fn step_multiplier(fraction: f64) -> f64 {
    if fraction <= 2.5 {
        0.2
    } else if fraction <= 5.0 {
        0.5
    } else if fraction <= 10.0 {
        1.0
    } else {
        2.0
    }
}
