use serde::Serialize;

/// Bin count used for station report histograms.
pub const DEFAULT_BINS: usize = 50;

/// Equal-width histogram. `edges` has one more entry than `counts`; every bin
/// is half-open except the last, which also includes the maximum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bins the finite entries of `values`. `None` if there are none or `bins == 0`.
    pub fn compute(values: &[f64], bins: usize) -> Option<Self> {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() || bins == 0 {
            return None;
        }
        let (mut lo, mut hi) = finite
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }
        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins).map(|i| lo + i as f64 * width).collect();

        let mut counts = vec![0; bins];
        for v in finite {
            let index = (((v - lo) / width).floor() as usize).min(bins - 1);
            counts[index] += 1;
        }
        Some(Self { edges, counts })
    }

    /// Centre of every bin, for plotting.
    pub fn centres(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_include_maximum_in_last_bin() {
        let values = [0.0, 0.5, 1.0, 1.5, 2.0, f64::NAN];
        let hist = Histogram::compute(&values, 2).unwrap();
        assert_eq!(hist.edges, vec![0.0, 1.0, 2.0]);
        assert_eq!(hist.counts, vec![2, 3]);
        assert_eq!(hist.total(), 5);
        assert_eq!(hist.centres(), vec![0.5, 1.5]);
    }

    #[test]
    fn test_constant_sample_is_widened() {
        let hist = Histogram::compute(&[4.0, 4.0], 1).unwrap();
        assert_eq!(hist.edges, vec![3.5, 4.5]);
        assert_eq!(hist.counts, vec![2]);
        assert!(Histogram::compute(&[], 10).is_none());
    }
}
