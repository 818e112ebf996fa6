//! Plot-ready frames built from computed analyses.

use crate::dataset::series::{decimate_indices, TimeSeries, DEFAULT_MAX_POINTS};
use crate::noise::estimate::NoiseEstimate;
use crate::plotting::error::PlotError;
use crate::stats::histogram::Histogram;
use crate::stats::spectral::WelchPsd;
use crate::types::variable::Variable;
use polars::prelude::*;

fn frame_error(name: &str) -> impl FnOnce(PolarsError) -> PlotError + '_ {
    move |e| PlotError::Frame(name.to_string(), e)
}

fn date_strings(series: &TimeSeries, indices: &[usize]) -> Vec<String> {
    indices
        .iter()
        .map(|&i| series.dates[i].format("%Y-%m-%d").to_string())
        .collect()
}

fn pick(values: &[f64], indices: &[usize]) -> Vec<f64> {
    indices.iter().map(|&i| values[i]).collect()
}

/// `month` (1-12) and `mean` columns.
pub fn annual_cycle_frame(cycle: &[Option<f64>; 12]) -> Result<DataFrame, PlotError> {
    let months: Vec<u32> = (1..=12).collect();
    df!("month" => months, "mean" => cycle.to_vec()).map_err(frame_error("annual cycle"))
}

/// Finite values in a `value` column, labelled by variable in a `variable` column.
pub fn boxplot_frame(variable: Variable, values: &[f64]) -> Result<DataFrame, PlotError> {
    let clean: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let labels = vec![variable.column_name(); clean.len()];
    df!("variable" => labels, "value" => clean).map_err(frame_error("boxplot"))
}

/// `bin` (centre label) and `count` columns.
pub fn histogram_frame(histogram: &Histogram) -> Result<DataFrame, PlotError> {
    let labels: Vec<String> = histogram
        .centres()
        .iter()
        .map(|c| format!("{:.2}", c))
        .collect();
    let counts: Vec<u32> = histogram.counts.iter().map(|&c| c as u32).collect();
    df!("bin" => labels, "count" => counts).map_err(frame_error("histogram"))
}

/// `lag` and `acf` columns.
pub fn autocorrelation_frame(acf: &[f64]) -> Result<DataFrame, PlotError> {
    let lags: Vec<u32> = (0..acf.len() as u32).collect();
    df!("lag" => lags, "acf" => acf.to_vec()).map_err(frame_error("autocorrelation"))
}

/// `frequency` and `log10_density` columns. Bins with zero power are dropped.
pub fn psd_frame(psd: &WelchPsd) -> Result<DataFrame, PlotError> {
    let (frequency, log_density): (Vec<f64>, Vec<f64>) = psd
        .frequencies
        .iter()
        .zip(&psd.density)
        .filter(|(_, p)| **p > 0.0)
        .map(|(f, p)| (*f, p.log10()))
        .unzip();
    df!("frequency" => frequency, "log10_density" => log_density).map_err(frame_error("psd"))
}

/// `date`, `raw` and `rolling` columns, thinned for display.
pub fn rolling_frame(series: &TimeSeries, rolling: &[f64]) -> Result<DataFrame, PlotError> {
    let indices = decimate_indices(series.len().min(rolling.len()), DEFAULT_MAX_POINTS);
    df!(
        "date" => date_strings(series, &indices),
        "raw" => pick(&series.values, &indices),
        "rolling" => pick(rolling, &indices)
    )
    .map_err(frame_error("rolling mean"))
}

/// `date`, `raw`, `smooth` and `resid` columns, thinned for display.
pub fn decomposition_frame(
    series: &TimeSeries,
    estimate: &NoiseEstimate,
) -> Result<DataFrame, PlotError> {
    let indices = decimate_indices(series.len().min(estimate.len()), DEFAULT_MAX_POINTS);
    df!(
        "date" => date_strings(series, &indices),
        "raw" => pick(&series.values, &indices),
        "smooth" => pick(&estimate.smooth, &indices),
        "resid" => pick(&estimate.resid, &indices)
    )
    .map_err(frame_error("decomposition"))
}
