//! Per-category box-and-whisker summaries
//!
//! A [`CategorySummary`] is built once from a fresh sample set and never
//! mutated afterwards; any input change rebuilds it from scratch.

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};
use crate::outlier;
use crate::quantile::{self, Quartiles};
use crate::whisker::{self, WhiskerConvention, WhiskerLabel, Whiskers};

/// Name used for categories without a group name
pub const BLANK_CATEGORY: &str = "(blank)";

/// Category name for display, substituting `(blank)` for missing names
pub fn category_label(name: Option<&str>) -> String {
    name.unwrap_or(BLANK_CATEGORY).to_string()
}

/// Flags that shape a summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct SummaryOptions {
    /// Requested whisker convention
    pub convention: WhiskerConvention,
    /// Collect samples beyond the whiskers
    pub show_outliers: bool,
    /// Build annotation label candidates
    pub show_data_labels: bool,
}

/// A value to annotate next to the box, with its pixel position
///
/// Positions are placeholders (zero) until the layout pass fills them in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct LabelCandidate {
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

impl LabelCandidate {
    /// Candidate with an unassigned position
    pub fn unplaced(value: f64) -> Self {
        Self {
            value,
            x: 0.0,
            y: 0.0,
        }
    }
}

/// Named value for the tooltip collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct DetailRow {
    pub name: String,
    pub value: f64,
}

/// Box-and-whisker summary for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct CategorySummary {
    category: String,
    sample_count: u64,
    min: f64,
    max: f64,
    median: f64,
    quartiles: Option<Quartiles>,
    mean: f64,
    requested_convention: WhiskerConvention,
    whiskers: Whiskers,
    outliers: Vec<f64>,
    label_candidates: Vec<LabelCandidate>,
}

impl CategorySummary {
    /// Summarize an unordered sample set
    ///
    /// Fails on an empty set, on a non-finite sample, or when a Tukey
    /// whisker has no sample inside its fence.
    pub fn summarize(
        category: impl Into<String>,
        samples: &[f64],
        options: &SummaryOptions,
    ) -> StatsResult<Self> {
        if samples.is_empty() {
            return Err(StatsError::EmptySamples);
        }
        if let Some((index, &value)) = samples.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(StatsError::NonFiniteSample { index, value });
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let estimate = quantile::estimate(&sorted)?;
        let whiskers = whisker::classify(
            options.convention,
            &sorted,
            estimate.quartiles.as_ref(),
        )?;

        let outliers = if options.show_outliers {
            outlier::detect(&sorted, whiskers.low, whiskers.high)
        } else {
            Vec::new()
        };

        let count = sorted.len();
        let mean = arithmetic_mean(&sorted);

        let label_candidates = if options.show_data_labels {
            build_label_candidates(&whiskers, mean, estimate.median, estimate.quartiles, &outliers)
        } else {
            Vec::new()
        };

        Ok(Self {
            category: category.into(),
            sample_count: count as u64,
            min: sorted[0],
            max: sorted[count - 1],
            median: estimate.median,
            quartiles: estimate.quartiles,
            mean,
            requested_convention: options.convention,
            whiskers,
            outliers,
            label_candidates,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count as usize
    }

    /// Smallest sample
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest sample
    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn median(&self) -> f64 {
        self.median
    }

    pub fn quartiles(&self) -> Option<&Quartiles> {
        self.quartiles.as_ref()
    }

    pub fn quartile1(&self) -> Option<f64> {
        self.quartiles.map(|q| q.q1)
    }

    pub fn quartile3(&self) -> Option<f64> {
        self.quartiles.map(|q| q.q3)
    }

    /// Arithmetic mean over all samples
    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn requested_convention(&self) -> WhiskerConvention {
        self.requested_convention
    }

    /// Convention actually used for the whiskers
    pub fn convention(&self) -> WhiskerConvention {
        self.whiskers.convention
    }

    /// True when the requested convention fell back to MinMax
    pub fn convention_downgraded(&self) -> bool {
        self.whiskers.was_downgraded(self.requested_convention)
    }

    pub fn whiskers(&self) -> &Whiskers {
        &self.whiskers
    }

    pub fn whisker_low(&self) -> f64 {
        self.whiskers.low
    }

    pub fn whisker_high(&self) -> f64 {
        self.whiskers.high
    }

    pub fn whisker_low_label(&self) -> WhiskerLabel {
        self.whiskers.low_label
    }

    pub fn whisker_high_label(&self) -> WhiskerLabel {
        self.whiskers.high_label
    }

    /// Unique samples beyond the whiskers, ascending
    pub fn outliers(&self) -> &[f64] {
        &self.outliers
    }

    pub fn label_candidates(&self) -> &[LabelCandidate] {
        &self.label_candidates
    }

    /// Lowest and highest value the chart draws for this category
    pub fn extent(&self) -> (f64, f64) {
        self.outliers.iter().fold(
            (self.whiskers.low, self.whiskers.high),
            |(lo, hi), &v| (lo.min(v), hi.max(v)),
        )
    }

    /// Vertical span of the box
    ///
    /// Three samples or fewer draw the box from the minimum to the maximum.
    pub fn box_range(&self) -> (f64, f64) {
        match self.quartiles {
            Some(q) if self.sample_count > 3 => (q.q1, q.q3),
            _ => (self.min, self.max),
        }
    }

    /// Rows for the tooltip, top of the box first
    pub fn detail_rows(&self) -> Vec<DetailRow> {
        let row = |name: &str, value: f64| DetailRow {
            name: name.to_string(),
            value,
        };

        let mut rows = vec![
            row("# Samples", self.sample_count as f64),
            row(self.whiskers.high_label.as_str(), self.whiskers.high),
        ];
        if let Some(q3) = self.quartile3() {
            rows.push(row("Quartile 3", q3));
        }
        rows.push(row("Median", self.median));
        rows.push(row("Average", self.mean));
        if let Some(q1) = self.quartile1() {
            rows.push(row("Quartile 1", q1));
        }
        rows.push(row(self.whiskers.low_label.as_str(), self.whiskers.low));
        rows
    }
}

/// Unique annotation values followed by every outlier
fn build_label_candidates(
    whiskers: &Whiskers,
    mean: f64,
    median: f64,
    quartiles: Option<Quartiles>,
    outliers: &[f64],
) -> Vec<LabelCandidate> {
    let summary_values = [
        Some(whiskers.high),
        Some(whiskers.low),
        Some(mean),
        Some(median),
        quartiles.map(|q| q.q1),
        quartiles.map(|q| q.q3),
    ];

    let mut unique: Vec<f64> = Vec::with_capacity(summary_values.len());
    for value in summary_values.into_iter().flatten() {
        if !unique.contains(&value) {
            unique.push(value);
        }
    }

    unique
        .into_iter()
        .chain(outliers.iter().copied())
        .map(LabelCandidate::unplaced)
        .collect()
}

/// Arithmetic mean that stays finite for finite samples near `f64::MAX`
fn arithmetic_mean(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let sum: f64 = values.iter().sum();
    if sum.is_finite() {
        sum / n
    } else {
        values.iter().map(|v| v / n).sum()
    }
}
