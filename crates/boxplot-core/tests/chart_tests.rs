//! Integration tests for axis planning, label layout, and the update pipeline

use boxplot_core::{
    build_frame, AxisPlan, CategoryInput, ChartConfig, ChartWarning, LabelCandidate, LabelLayout,
    LinearScale, Viewport, WhiskerConvention,
};
use proptest::prelude::*;

fn viewport() -> Viewport {
    Viewport::new(640.0, 480.0)
}

fn skewed() -> Vec<f64> {
    vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0]
}

/// Leading digit of a positive step, after scaling into [1, 10)
fn step_mantissa(step: f64) -> f64 {
    step / 10f64.powf(step.log10().floor())
}

// === Scenarios ===

#[test]
fn test_two_categories_zero_to_thousand() {
    let inputs = vec![
        CategoryInput::new("low", vec![0.0, 100.0, 250.0, 300.0]),
        CategoryInput::new("high", vec![400.0, 700.0, 900.0, 1000.0]),
    ];
    let frame = build_frame(&inputs, &ChartConfig::default(), viewport()).unwrap();
    let plan = frame.axis.unwrap();

    assert_eq!(frame.categories.len(), 2);
    assert!((plan.tick_step - 200.0).abs() < 1e-9);
    assert_eq!(plan.min, 0.0);
    assert!((plan.max - 1200.0).abs() < 1e-9);
    assert!(((plan.max / plan.tick_step).round() * plan.tick_step - plan.max).abs() < 1e-9);
    assert!(frame.warnings.is_empty());

    let first = &frame.categories[0].slot;
    let second = &frame.categories[1].slot;
    assert!(first.box_right < second.box_left);
}

#[test]
fn test_tukey_end_to_end() {
    let inputs = vec![CategoryInput::new("skewed", skewed())];
    let config = ChartConfig::new()
        .with_whisker(WhiskerConvention::Tukey)
        .with_outliers()
        .with_data_labels();
    let frame = build_frame(&inputs, &config, viewport()).unwrap();

    let category = &frame.categories[0];
    let summary = &category.summary;
    assert_eq!(summary.whisker_low(), 1.0);
    assert_eq!(summary.whisker_high(), 9.0);
    assert_eq!(summary.outliers(), &[100.0]);

    // Axis covers the outlier, not just the whiskers
    let plan = frame.axis.unwrap();
    assert!(plan.max > 100.0);

    // The outlier gets a label too
    let values: Vec<f64> = category.labels.iter().map(|l| l.value).collect();
    assert!(values.contains(&100.0));
    assert!(values.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_outliers_hidden_keep_axis_on_whiskers() {
    let inputs = vec![CategoryInput::new("skewed", skewed())];
    let config = ChartConfig::new().with_whisker(WhiskerConvention::Tukey);
    let frame = build_frame(&inputs, &config, viewport()).unwrap();

    assert!(frame.categories[0].summary.outliers().is_empty());
    assert!(frame.axis.unwrap().max < 100.0);
}

#[test]
fn test_repeated_value_forces_min_max() {
    let inputs = vec![CategoryInput::new("flat", vec![5.0, 5.0, 5.0])];
    let config = ChartConfig::new().with_whisker(WhiskerConvention::StrictIqr);
    let frame = build_frame(&inputs, &config, viewport()).unwrap();

    let summary = &frame.categories[0].summary;
    assert_eq!(summary.median(), 5.0);
    assert_eq!(summary.convention(), WhiskerConvention::MinMax);
    assert!(frame.warnings.iter().any(|w| matches!(
        w,
        ChartWarning::ConventionDowngraded {
            requested: WhiskerConvention::StrictIqr,
            ..
        }
    )));
    assert!(frame
        .warnings
        .contains(&ChartWarning::DegenerateAxis { value: 5.0 }));
}

#[test]
fn test_frame_serializes_to_json() {
    let inputs = vec![CategoryInput::new("a", skewed())];
    let frame = build_frame(&inputs, &ChartConfig::default(), viewport()).unwrap();
    let json = serde_json::to_string(&frame).unwrap();
    assert!(json.contains("\"categories\""));
    assert!(json.contains("\"tick_step\""));
}

#[test]
fn test_config_file_drives_frame() {
    let config = ChartConfig::from_toml(
        r#"
        whisker = "tukey"
        show_outliers = true
        "#,
    )
    .unwrap();
    let inputs = vec![CategoryInput::new("skewed", skewed())];
    let frame = build_frame(&inputs, &config, viewport()).unwrap();
    assert_eq!(frame.categories[0].summary.outliers(), &[100.0]);
}

// === Properties ===

proptest! {
    #[test]
    fn prop_axis_contains_data(
        a in -1.0e6f64..1.0e6,
        b in -1.0e6f64..1.0e6,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let plan = AxisPlan::plan(lo, hi).unwrap();

        prop_assert!(plan.min <= plan.padded_min);
        prop_assert!(plan.padded_min <= lo);
        prop_assert!(plan.padded_min < plan.padded_max);
        prop_assert!(hi <= plan.padded_max);
        prop_assert!(plan.padded_max < plan.max);
        prop_assert!(plan.tick_count >= 2);
    }

    #[test]
    fn prop_axis_step_is_nice(
        a in -1.0e6f64..1.0e6,
        b in -1.0e6f64..1.0e6,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let plan = AxisPlan::plan(lo, hi).unwrap();

        let mantissa = step_mantissa(plan.tick_step);
        prop_assert!(
            [1.0, 2.0, 5.0, 10.0].iter().any(|m| (mantissa - m).abs() < 1e-6),
            "step {} is not nice", plan.tick_step
        );
        let ticks = (plan.max - plan.min) / plan.tick_step;
        prop_assert!((ticks - ticks.round()).abs() < 1e-6);
    }

    #[test]
    fn prop_labels_keep_min_gap(
        mut values in prop::collection::vec(0.0f64..100.0, 1..12),
        median in 0.0f64..100.0,
    ) {
        values.push(median);
        values.sort_by(f64::total_cmp);
        values.dedup();

        let scale = LinearScale::new((0.0, 100.0), (25.0, 455.0));
        let mut candidates: Vec<LabelCandidate> =
            values.iter().copied().map(LabelCandidate::unplaced).collect();
        boxplot_core::project(&mut candidates, &scale, 120.0);

        let layout = LabelLayout::default();
        let placed = layout.resolve(candidates, median, scale.map(median));

        prop_assert_eq!(placed.len(), values.len());
        for pair in placed.windows(2) {
            prop_assert!(pair[0].value < pair[1].value);
            prop_assert!(pair[1].y - pair[0].y >= layout.min_gap - 1e-9);
        }
    }

    #[test]
    fn prop_frame_has_one_slot_per_category(
        groups in prop::collection::vec(
            prop::collection::vec(-1.0e3f64..1.0e3, 1..20),
            1..6,
        ),
    ) {
        let inputs: Vec<CategoryInput> = groups
            .into_iter()
            .enumerate()
            .map(|(i, samples)| CategoryInput::new(format!("c{}", i), samples))
            .collect();
        let config = ChartConfig::new().with_outliers().with_data_labels();
        let frame = build_frame(&inputs, &config, viewport()).unwrap();

        prop_assert_eq!(frame.categories.len(), inputs.len());
        let plan = frame.axis.unwrap();
        for (i, category) in frame.categories.iter().enumerate() {
            prop_assert_eq!(category.slot.category as usize, i + 1);
            let (lo, hi) = category.summary.extent();
            prop_assert!(plan.min <= lo && hi < plan.max);
        }
    }
}
