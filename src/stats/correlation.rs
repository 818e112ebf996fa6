/// Most lags shown in a station report.
pub const REPORT_MAX_LAGS: usize = 200;

/// Autocorrelation of a cleaned sample for lags `0 ..= nlags`, normalised by
/// lag 0. The lag count is capped at `n - 1`. Returns `None` for an empty or
/// constant sample.
pub fn autocorrelation(values: &[f64], nlags: usize) -> Option<Vec<f64>> {
    let n = values.len();
    let mean = crate::stats::moments::mean(values)?;
    let centred: Vec<f64> = values.iter().map(|v| v - mean).collect();
    let nlags = nlags.min(n - 1);

    let lag = |k: usize| -> f64 {
        centred[..n - k]
            .iter()
            .zip(&centred[k..])
            .map(|(a, b)| a * b)
            .sum()
    };
    let r0 = lag(0);
    if r0 <= 0.0 {
        return None;
    }
    Some((0..=nlags).map(|k| lag(k) / r0).collect())
}

/// Lag count used by the report for a sample of `n` values.
pub fn report_lags(n: usize) -> usize {
    REPORT_MAX_LAGS.min(n.saturating_sub(1))
}
