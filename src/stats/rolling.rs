/// Rolling window used by the report for a series of `n` values: one fiftieth
/// of the length, kept within `3 ..= 30`.
pub fn report_window(n: usize) -> usize {
    (n / 50).min(30).max(3)
}

/// Trailing rolling mean. Each output averages the finite values among the
/// current and previous `window - 1` inputs, and is NaN when there are none.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let (sum, count) = values[start..=i]
                .iter()
                .filter(|v| v.is_finite())
                .fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
            if count == 0 {
                f64::NAN
            } else {
                sum / count as f64
            }
        })
        .collect()
}
