//! Collision-free placement of value labels beside a box
//!
//! Labels are split at the median into an upper and a lower half. Each half
//! is walked outward from the median; a label that would sit closer than
//! `min_gap` to its predecessor is pushed away from the median until the gap
//! is exactly `min_gap`. Pushes carry forward through the predecessor's
//! position, so a tight cluster stacks up, and a label whose own position
//! already clears its predecessor goes back to its true spot.
//!
//! The pass is greedy and single-shot: labels in a dense cluster can drift
//! far from their values. Placement must stay deterministic for visual
//! parity, so do not replace this with a global optimizer.

use boxplot_stats::LabelCandidate;
use serde::{Deserialize, Serialize};

use crate::config::LabelConfig;
use crate::layout::LinearScale;

/// Label layout parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelLayout {
    /// Minimum vertical distance between neighbouring labels
    pub min_gap: f64,
    /// Labels sit this far below the value they annotate
    pub baseline_offset: f64,
}

impl Default for LabelLayout {
    fn default() -> Self {
        LabelConfig::default().into()
    }
}

impl From<LabelConfig> for LabelLayout {
    fn from(config: LabelConfig) -> Self {
        Self {
            min_gap: config.min_gap,
            baseline_offset: config.baseline_offset,
        }
    }
}

/// Direction a half of the labels grows in, in pixel `y`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::Up => 1.0,
            Direction::Down => -1.0,
        }
    }
}

/// Place candidates in the label column, at their scale-mapped height
pub fn project(candidates: &mut [LabelCandidate], scale: &LinearScale, label_x: f64) {
    for candidate in candidates {
        candidate.x = label_x;
        candidate.y = scale.map(candidate.value);
    }
}

impl LabelLayout {
    /// Resolve overlaps among projected candidates
    ///
    /// `candidates` must already carry their scale-mapped `y` (see
    /// [`project`]); `median_y` is the mapped median. Returns the placed
    /// labels in ascending value order, without those whose `x` is off the
    /// canvas.
    pub fn resolve(
        &self,
        candidates: Vec<LabelCandidate>,
        median: f64,
        median_y: f64,
    ) -> Vec<LabelCandidate> {
        let mut upper: Vec<LabelCandidate> =
            candidates.iter().copied().filter(|c| c.value >= median).collect();
        upper.sort_by(|a, b| a.value.total_cmp(&b.value));

        let mut lower: Vec<LabelCandidate> =
            candidates.into_iter().filter(|c| c.value <= median).collect();
        lower.sort_by(|a, b| b.value.total_cmp(&a.value));

        let anchor_y = median_y - self.baseline_offset;
        self.stack(&mut upper, anchor_y, Direction::Up);
        self.stack(&mut lower, anchor_y, Direction::Down);

        lower.reverse();
        lower
            .into_iter()
            .chain(upper.into_iter().filter(|c| c.value > median))
            .filter(|c| c.x > 0.0)
            .collect()
    }

    /// Walk one half outward from the median, pushing crowded labels away
    fn stack(&self, half: &mut [LabelCandidate], anchor_y: f64, direction: Direction) {
        let Some((first, rest)) = half.split_first_mut() else {
            return;
        };
        first.y = anchor_y;

        let sign = direction.sign();
        let mut previous = first.y;
        for label in rest {
            let natural = label.y - self.baseline_offset;
            let clearance = sign * (natural - previous);
            label.y = if clearance < self.min_gap {
                previous + sign * self.min_gap
            } else {
                natural
            };
            previous = label.y;
        }
    }
}
