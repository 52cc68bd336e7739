//! One update cycle of the box-and-whisker chart
//!
//! Samples in, [`ChartFrame`] out. Nothing is cached between updates; every
//! input change rebuilds the whole frame.

use boxplot_stats::{
    category_label, CategorySummary, LabelCandidate, SummaryOptions, WhiskerConvention,
};
use serde::{Deserialize, Serialize};

use crate::axis::{AxisPlan, TickMark};
use crate::config::ChartConfig;
use crate::error::{ChartError, ChartResult};
use crate::labels::{self, LabelLayout};
use crate::layout::{CategorySlot, PlotLayout, Viewport};

/// Message shown when there is nothing to draw
pub const DATASET_TOO_SMALL_MESSAGE: &str =
    "Dataset is not valid or too small/empty for this visualization.";

/// Samples for one category, as handed over by the data-binding layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct CategoryInput {
    /// Group name; missing names display as `(blank)`
    pub name: Option<String>,
    pub samples: Vec<f64>,
}

impl CategoryInput {
    pub fn new(name: impl Into<String>, samples: Vec<f64>) -> Self {
        Self {
            name: Some(name.into()),
            samples,
        }
    }

    /// Display name of the category
    pub fn label(&self) -> String {
        category_label(self.name.as_deref())
    }
}

/// Conditions the caller should surface, none of which stop the update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartWarning {
    /// No category had samples
    DatasetTooSmall,
    /// The requested convention could not be applied to a category
    ConventionDowngraded {
        category: String,
        requested: WhiskerConvention,
        applied: WhiskerConvention,
    },
    /// Every drawn value is identical
    DegenerateAxis { value: f64 },
}

impl ChartWarning {
    /// Human-readable message for the host's warning banner
    pub fn message(&self) -> String {
        match self {
            ChartWarning::DatasetTooSmall => DATASET_TOO_SMALL_MESSAGE.to_string(),
            ChartWarning::ConventionDowngraded {
                category,
                requested,
                applied,
            } => format!(
                "Category '{}' cannot use {:?} whiskers; using {:?}",
                category, requested, applied
            ),
            ChartWarning::DegenerateAxis { value } => {
                format!("All values equal {}; axis is padded around that value", value)
            }
        }
    }
}

/// Everything the renderer needs for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct CategoryFrame {
    pub summary: CategorySummary,
    pub slot: CategorySlot,
    /// Placed value labels, ascending by value
    pub labels: Vec<LabelCandidate>,
}

/// Output of one update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ChartFrame {
    pub categories: Vec<CategoryFrame>,
    /// Absent when there is nothing to draw
    pub axis: Option<AxisPlan>,
    pub layout: PlotLayout,
    pub grid_lines: Vec<TickMark>,
    pub warnings: Vec<ChartWarning>,
}

impl ChartFrame {
    fn empty(layout: PlotLayout, warnings: Vec<ChartWarning>) -> Self {
        Self {
            categories: Vec::new(),
            axis: None,
            layout,
            grid_lines: Vec::new(),
            warnings,
        }
    }

    /// True when no category is drawn
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn summaries(&self) -> impl Iterator<Item = &CategorySummary> {
        self.categories.iter().map(|c| &c.summary)
    }
}

/// Summarize categories in order, stopping at the first one without samples
pub fn summarize_categories(
    inputs: &[CategoryInput],
    options: &SummaryOptions,
) -> ChartResult<Vec<CategorySummary>> {
    inputs
        .iter()
        .take_while(|input| !input.samples.is_empty())
        .map(|input| {
            let category = input.label();
            tracing::debug!("Summarizing '{}' ({} samples)", category, input.samples.len());
            CategorySummary::summarize(category.clone(), &input.samples, options)
                .map_err(|source| ChartError::Category { category, source })
        })
        .collect()
}

/// Run one full update: summaries, axis, layout, and labels
pub fn build_frame(
    inputs: &[CategoryInput],
    config: &ChartConfig,
    viewport: Viewport,
) -> ChartResult<ChartFrame> {
    config.validate()?;

    let summaries = summarize_categories(inputs, &config.summary_options())?;
    if summaries.len() < inputs.len() {
        tracing::debug!(
            "Stopped at empty category {} of {}",
            summaries.len() + 1,
            inputs.len()
        );
    }

    let layout = PlotLayout::new(viewport, summaries.len() as u32, config.show_legend);
    let mut warnings = Vec::new();

    for summary in summaries.iter().filter(|s| s.convention_downgraded()) {
        tracing::warn!(
            "Category '{}' has {} samples; {:?} whiskers fall back to {:?}",
            summary.category(),
            summary.sample_count(),
            summary.requested_convention(),
            summary.convention()
        );
        warnings.push(ChartWarning::ConventionDowngraded {
            category: summary.category().to_string(),
            requested: summary.requested_convention(),
            applied: summary.convention(),
        });
    }

    let Some(plan) = AxisPlan::from_summaries(&summaries)? else {
        tracing::warn!("{}", DATASET_TOO_SMALL_MESSAGE);
        warnings.push(ChartWarning::DatasetTooSmall);
        return Ok(ChartFrame::empty(layout, warnings));
    };

    if plan.degenerate {
        let value = summaries.first().map_or(0.0, |s| s.extent().0);
        tracing::warn!("All drawn values equal {}; padding the axis around it", value);
        warnings.push(ChartWarning::DegenerateAxis { value });
    }
    tracing::debug!(
        "Axis [{}, {}] step {} ({} ticks) for {} categories",
        plan.min,
        plan.max,
        plan.tick_step,
        plan.tick_count,
        summaries.len()
    );

    let value_scale = layout.value_scale(&plan);
    let label_layout = LabelLayout::from(config.labels);

    let categories = summaries
        .into_iter()
        .zip(1u32..)
        .map(|(summary, category)| {
            let slot = layout.slot(category);
            let labels = if config.show_data_labels {
                let mut candidates = summary.label_candidates().to_vec();
                labels::project(&mut candidates, &value_scale, slot.label_x);
                label_layout.resolve(
                    candidates,
                    summary.median(),
                    value_scale.map(summary.median()),
                )
            } else {
                Vec::new()
            };

            CategoryFrame {
                summary,
                slot,
                labels,
            }
        })
        .collect();

    Ok(ChartFrame {
        categories,
        axis: Some(plan),
        layout,
        grid_lines: plan.grid_lines(config.show_major_grid, config.show_minor_grid),
        warnings,
    })
}
