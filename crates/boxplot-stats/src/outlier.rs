//! Outlier detection against whisker bounds

/// Unique samples strictly outside `[low, high]`, ascending
///
/// `sorted` must be ascending; duplicates are collapsed so each outlier
/// value is reported once.
pub fn detect(sorted: &[f64], low: f64, high: f64) -> Vec<f64> {
    let mut outliers: Vec<f64> = sorted
        .iter()
        .copied()
        .filter(|&v| v < low || v > high)
        .collect();
    outliers.dedup();
    outliers
}
