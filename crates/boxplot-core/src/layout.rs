//! Plot layout and value-to-pixel scales
//!
//! Pixel `y` grows upward from the bottom edge of the viewport; the
//! renderer flips it when drawing into a top-down surface.

use serde::{Deserialize, Serialize};

use crate::axis::AxisPlan;

/// Gap between the value axis extremes and the plot edge, in pixels
pub const CHART_PADDING: f64 = 25.0;
/// Horizontal gutter reserved for the value axis on each side
pub const VALUE_AXIS_WIDTH: f64 = 40.0;
/// Height reserved for the category axis
pub const CATEGORY_AXIS_HEIGHT: f64 = 0.0;
/// Height of the legend strip
pub const LEGEND_HEIGHT: f64 = 20.0;
/// Padding kept above the plot whether or not the legend is shown
pub const LEGEND_PADDING: f64 = 5.0;

/// Horizontal offsets of a category's slot, in category units
const BOX_LEFT: f64 = 0.25;
const BOX_CENTER: f64 = 0.5;
const BOX_RIGHT: f64 = 0.75;
const LABEL_COLUMN: f64 = 0.77;

/// Viewport size in pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Create a viewport, clamping negative sizes to zero
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

/// Linear map from a data domain onto a pixel range
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct LinearScale {
    pub domain_start: f64,
    pub domain_end: f64,
    pub range_start: f64,
    pub range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        }
    }

    /// Transform a data value to a pixel coordinate
    ///
    /// A zero-width domain maps everything to the start of the range.
    pub fn map(&self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return self.range_start;
        }
        let t = (value - self.domain_start) / span;
        self.range_start + t * (self.range_end - self.range_start)
    }

    /// Transform a pixel coordinate back to a data value
    pub fn invert(&self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return self.domain_start;
        }
        let t = (pixel - self.range_start) / span;
        self.domain_start + t * (self.domain_end - self.domain_start)
    }
}

/// Pixel columns occupied by one category
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct CategorySlot {
    /// 1-based category position
    pub category: u32,
    pub box_left: f64,
    pub box_center: f64,
    pub box_right: f64,
    /// Left edge of the value labels
    pub label_x: f64,
}

/// Layout of the plot area for one update
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct PlotLayout {
    pub viewport: Viewport,
    pub category_count: u32,
    /// Height reserved above the plot for the legend
    pub legend_height: f64,
}

impl PlotLayout {
    /// Create a layout for `category_count` categories
    pub fn new(viewport: Viewport, category_count: u32, show_legend: bool) -> Self {
        let legend_height = if show_legend {
            LEGEND_HEIGHT + LEGEND_PADDING
        } else {
            LEGEND_PADDING
        };

        Self {
            viewport,
            category_count,
            legend_height,
        }
    }

    /// Scale from axis values to pixel `y`
    pub fn value_scale(&self, plan: &AxisPlan) -> LinearScale {
        LinearScale::new(
            (plan.min, plan.max),
            (
                CHART_PADDING,
                self.viewport.height - CATEGORY_AXIS_HEIGHT - self.legend_height,
            ),
        )
    }

    /// Scale from 1-based category positions to pixel `x`
    ///
    /// The domain is `[1, n + 1]` so each category owns one unit.
    pub fn category_scale(&self) -> LinearScale {
        LinearScale::new(
            (1.0, self.category_count as f64 + 1.0),
            (VALUE_AXIS_WIDTH, self.viewport.width - VALUE_AXIS_WIDTH),
        )
    }

    /// Pixel columns for the 1-based `category`
    pub fn slot(&self, category: u32) -> CategorySlot {
        let scale = self.category_scale();
        let at = |offset: f64| scale.map(category as f64 + offset);

        CategorySlot {
            category,
            box_left: at(BOX_LEFT),
            box_center: at(BOX_CENTER),
            box_right: at(BOX_RIGHT),
            label_x: at(LABEL_COLUMN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale_round_trip() {
        let scale = LinearScale::new((0.0, 100.0), (25.0, 275.0));
        assert_eq!(scale.map(0.0), 25.0);
        assert_eq!(scale.map(100.0), 275.0);
        assert_eq!(scale.map(50.0), 150.0);
        assert!((scale.invert(scale.map(37.5)) - 37.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_width_domain() {
        let scale = LinearScale::new((3.0, 3.0), (10.0, 20.0));
        assert_eq!(scale.map(3.0), 10.0);
    }

    #[test]
    fn test_value_scale_respects_legend() {
        let plan = AxisPlan::plan(0.0, 1000.0).unwrap();
        let viewport = Viewport::new(400.0, 300.0);

        let with_legend = PlotLayout::new(viewport, 2, true).value_scale(&plan);
        assert_eq!(with_legend.range_start, CHART_PADDING);
        assert_eq!(with_legend.range_end, 300.0 - 25.0);

        let without = PlotLayout::new(viewport, 2, false).value_scale(&plan);
        assert_eq!(without.range_end, 300.0 - 5.0);
    }

    #[test]
    fn test_slots() {
        // 2 categories over [40, 360]: 160 px per category
        let layout = PlotLayout::new(Viewport::new(400.0, 300.0), 2, true);
        let first = layout.slot(1);
        assert_eq!(first.box_left, 80.0);
        assert_eq!(first.box_center, 120.0);
        assert_eq!(first.box_right, 160.0);
        assert!((first.label_x - 163.2).abs() < 1e-9);

        let second = layout.slot(2);
        assert_eq!(second.box_center, 280.0);
    }

    #[test]
    fn test_viewport_clamps_negative() {
        let viewport = Viewport::new(-5.0, 10.0);
        assert_eq!(viewport.width, 0.0);
    }
}
