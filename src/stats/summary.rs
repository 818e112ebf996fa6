//! Descriptive summary of one variable.

use crate::stats::moments::{finite_values, kurtosis, mean, sample_std, skewness};
use crate::stats::quantile::{iqr_outlier_count, quantile_sorted, sorted};
use crate::stats::spectral::welch_psd;
use serde::Serialize;

/// Quantile levels reported by [`Summary`].
pub const QUANTILE_LEVELS: [f64; 7] = [0.01, 0.05, 0.25, 0.5, 0.75, 0.95, 0.99];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuantileValue {
    pub level: f64,
    pub value: f64,
}

impl QuantileValue {
    /// Metric name of this quantile, e.g. `q_25`.
    pub fn metric_name(&self) -> String {
        format!("q_{}", (self.level * 100.0).round() as u32)
    }
}

/// Descriptive statistics over the finite entries of a series.
///
/// Everything except `count` and `missing` is `None` when there is no finite
/// entry. Shape statistics are also `None` when the spread is zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub missing: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation.
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub quantiles: Vec<QuantileValue>,
    pub skew: Option<f64>,
    /// Excess (Fisher) kurtosis.
    pub kurtosis: Option<f64>,
    pub outliers_count: Option<usize>,
    /// Frequency (cycles per sample) of the Welch PSD maximum.
    pub psd_peak_freq: Option<f64>,
}

impl Summary {
    pub fn compute(values: &[f64]) -> Self {
        let clean = finite_values(values);
        let count = clean.len();
        let missing = values.len() - count;
        let ordered = sorted(&clean);

        let quantiles = QUANTILE_LEVELS
            .iter()
            .filter_map(|&level| {
                quantile_sorted(&ordered, level).map(|value| QuantileValue { level, value })
            })
            .collect();
        let psd_peak_freq = if count > 1 {
            welch_psd(&clean, 1.0).and_then(|psd| psd.peak_frequency())
        } else {
            None
        };

        Self {
            count,
            missing,
            mean: mean(&clean),
            std: sample_std(&clean),
            min: ordered.first().copied(),
            max: ordered.last().copied(),
            quantiles,
            skew: skewness(&clean),
            kurtosis: kurtosis(&clean),
            outliers_count: iqr_outlier_count(&ordered),
            psd_peak_freq,
        }
    }

    pub fn quantile(&self, level: f64) -> Option<f64> {
        self.quantiles
            .iter()
            .find(|q| (q.level - level).abs() < 1e-9)
            .map(|q| q.value)
    }

    /// `metric, value` rows in report order. An empty series only reports
    /// `count` and `missing`.
    pub fn rows(&self) -> Vec<(String, Option<f64>)> {
        let mut rows = vec![
            ("count".to_string(), Some(self.count as f64)),
            ("missing".to_string(), Some(self.missing as f64)),
        ];
        if self.count == 0 {
            return rows;
        }
        rows.push(("mean".to_string(), self.mean));
        rows.push(("std".to_string(), self.std));
        rows.push(("min".to_string(), self.min));
        rows.push(("max".to_string(), self.max));
        for q in &self.quantiles {
            rows.push((q.metric_name(), Some(q.value)));
        }
        rows.push(("skew".to_string(), self.skew));
        rows.push(("kurtosis".to_string(), self.kurtosis));
        rows.push((
            "outliers_count".to_string(),
            self.outliers_count.map(|c| c as f64),
        ));
        if self.count > 1 {
            rows.push(("psd_peak_freq".to_string(), self.psd_peak_freq));
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_summary_of_small_sample() {
        let values = [2.0, f64::NAN, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0, f64::NAN];
        let summary = Summary::compute(&values);

        assert_eq!(summary.count, 8);
        assert_eq!(summary.missing, 2);
        assert_abs_diff_eq!(summary.mean.unwrap(), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(summary.std.unwrap(), (32.0f64 / 7.0).sqrt(), epsilon = 1e-12);
        assert_eq!(summary.min, Some(2.0));
        assert_eq!(summary.max, Some(9.0));
        assert_abs_diff_eq!(summary.quantile(0.5).unwrap(), 4.5, epsilon = 1e-12);
        assert_abs_diff_eq!(summary.quantile(0.25).unwrap(), 4.0, epsilon = 1e-12);
        assert_eq!(summary.outliers_count, Some(1));
        assert!(summary.skew.unwrap() > 0.0);
        assert!(summary.psd_peak_freq.is_some());
    }

    #[test]
    fn test_empty_summary_rows() {
        let summary = Summary::compute(&[f64::NAN, f64::NAN]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.missing, 2);
        assert!(summary.mean.is_none());
        assert!(summary.quantiles.is_empty());
        assert_eq!(
            summary.rows(),
            vec![
                ("count".to_string(), Some(0.0)),
                ("missing".to_string(), Some(2.0))
            ]
        );
    }

    #[test]
    fn test_row_order() {
        let summary = Summary::compute(&[1.0, 2.0, 3.0, 10.0]);
        let names: Vec<String> = summary.rows().into_iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            [
                "count", "missing", "mean", "std", "min", "max", "q_1", "q_5", "q_25", "q_50",
                "q_75", "q_95", "q_99", "skew", "kurtosis", "outliers_count", "psd_peak_freq"
            ]
        );
    }

    #[test]
    fn test_single_value_has_no_spread() {
        let summary = Summary::compute(&[3.5]);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.std, None);
        assert_eq!(summary.skew, None);
        assert_eq!(summary.psd_peak_freq, None);
        assert_eq!(summary.quantile(0.99), Some(3.5));
        assert!(!summary.rows().iter().any(|(name, _)| name == "psd_peak_freq"));
    }
}
