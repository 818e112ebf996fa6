//! Power spectral density by Welch's method: Hann-windowed, half-overlapping
//! segments with the segment mean removed, averaged one-sided periodograms in
//! density units.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;
use serde::Serialize;
use std::f64::consts::PI;

/// Longest segment used by [`welch_psd`].
pub const MAX_SEGMENT_LEN: usize = 256;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WelchPsd {
    /// Frequency of every bin, `0 ..= sample_rate / 2`.
    pub frequencies: Vec<f64>,
    /// Averaged one-sided power spectral density per bin.
    pub density: Vec<f64>,
    /// Number of averaged segments.
    pub segments: usize,
}

impl WelchPsd {
    /// Frequency of the first strongest bin.
    pub fn peak_frequency(&self) -> Option<f64> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &p) in self.density.iter().enumerate() {
            match best {
                Some((_, b)) if p <= b => {}
                _ if p.is_nan() => {}
                _ => best = Some((i, p)),
            }
        }
        best.map(|(i, _)| self.frequencies[i])
    }
}

/// Periodic Hann window of length `len`.
fn hann(len: usize) -> Vec<f64> {
    (0..len)
        .map(|k| 0.5 - 0.5 * (2.0 * PI * k as f64 / len as f64).cos())
        .collect()
}

/// Welch PSD of a cleaned sample. `None` for fewer than two values.
///
/// The segment length is `min(256, n)` with 50% overlap.
pub fn welch_psd(values: &[f64], sample_rate: f64) -> Option<WelchPsd> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let segment_len = n.min(MAX_SEGMENT_LEN);
    let overlap = segment_len / 2;
    let step = segment_len - overlap;
    let segments = (n - overlap) / step;

    let window = hann(segment_len);
    let scale = 1.0 / (sample_rate * window.iter().map(|w| w * w).sum::<f64>());
    let bins = segment_len / 2 + 1;

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(segment_len);

    let mut density = vec![0.0; bins];
    let mut buffer = vec![Complex::new(0.0, 0.0); segment_len];
    for s in 0..segments {
        let segment = &values[s * step..s * step + segment_len];
        let mean = segment.iter().sum::<f64>() / segment_len as f64;
        for ((slot, x), w) in buffer.iter_mut().zip(segment).zip(&window) {
            *slot = Complex::new((x - mean) * w, 0.0);
        }
        fft.process(&mut buffer);
        for (acc, c) in density.iter_mut().zip(&buffer) {
            *acc += c.norm_sqr() * scale;
        }
    }

    // Fold negative frequencies into the one-sided spectrum; DC and (for even
    // lengths) Nyquist have no mirror image.
    let doubled_end = if segment_len % 2 == 0 { bins - 1 } else { bins };
    for p in density.iter_mut().take(doubled_end).skip(1) {
        *p *= 2.0;
    }
    for p in density.iter_mut() {
        *p /= segments as f64;
    }

    let frequencies = (0..bins)
        .map(|k| k as f64 * sample_rate / segment_len as f64)
        .collect();
    Some(WelchPsd {
        frequencies,
        density,
        segments,
    })
}
