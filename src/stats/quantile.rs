use ordered_float::OrderedFloat;

/// Sorts a cleaned sample ascending.
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by_key(|v| OrderedFloat(*v));
    sorted
}

/// Quantile of an ascending sample with linear interpolation between order
/// statistics (position `(n - 1) * q`). `q` is clamped to `[0, 1]`.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let position = last as f64 * q.clamp(0.0, 1.0);
    let lo = position.floor() as usize;
    let hi = (lo + 1).min(last);
    let fraction = position - lo as f64;
    Some(sorted[lo] + fraction * (sorted[hi] - sorted[lo]))
}

pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    quantile_sorted(&sorted(values), q)
}

/// Number of values outside `[q25 - 1.5 IQR, q75 + 1.5 IQR]`.
pub fn iqr_outlier_count(sorted: &[f64]) -> Option<usize> {
    let q1 = quantile_sorted(sorted, 0.25)?;
    let q3 = quantile_sorted(sorted, 0.75)?;
    let iqr = q3 - q1;
    let (lo, hi) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);
    Some(sorted.iter().filter(|&&v| v < lo || v > hi).count())
}
