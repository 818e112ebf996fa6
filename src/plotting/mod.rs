//! Exploratory plots rendered with plotlars. Each function opens the figure
//! in the default browser.

pub mod error;
pub mod frames;

use crate::dataset::series::TimeSeries;
use crate::noise::estimate::NoiseEstimate;
use crate::stats::histogram::{Histogram, DEFAULT_BINS};
use crate::stats::spectral::WelchPsd;
use crate::types::variable::Variable;
use error::PlotError;
use frames::*;
use plotlars::{
    BarPlot, BoxPlot, Line, LinePlot, Orientation, Plot, Rgb, Shape, Text, TimeSeriesPlot,
};

pub fn plot_annual_cycle(variable: Variable, cycle: &[Option<f64>; 12]) -> Result<(), PlotError> {
    let data = annual_cycle_frame(cycle)?;
    let title = format!("Annual cycle - {}", variable);
    LinePlot::builder()
        .data(&data)
        .x("month")
        .y("mean")
        .with_shape(true)
        .shape(Shape::Circle)
        .plot_title(Text::from(title.as_str()).size(18))
        .x_title("Month")
        .y_title(variable.unit())
        .build()
        .plot();
    Ok(())
}

/// Histogram of the finite values in 50 equal-width bins. Nothing is drawn for an empty input.
pub fn plot_histogram(variable: Variable, values: &[f64]) -> Result<(), PlotError> {
    let Some(histogram) = Histogram::compute(values, DEFAULT_BINS) else {
        return Ok(());
    };
    let data = histogram_frame(&histogram)?;
    let title = format!("Histogram - {}", variable);
    BarPlot::builder()
        .data(&data)
        .labels("bin")
        .values("count")
        .plot_title(title.as_str())
        .x_title(variable.unit())
        .y_title("count")
        .build()
        .plot();
    Ok(())
}

pub fn plot_boxplot(variable: Variable, values: &[f64]) -> Result<(), PlotError> {
    let data = boxplot_frame(variable, values)?;
    if data.is_empty() {
        return Ok(());
    }
    let title = format!("Boxplot - {}", variable);
    BoxPlot::builder()
        .data(&data)
        .labels("variable")
        .values("value")
        .orientation(Orientation::Horizontal)
        .plot_title(title.as_str())
        .x_title(variable.unit())
        .build()
        .plot();
    Ok(())
}

pub fn plot_autocorrelation(variable: Variable, acf: &[f64]) -> Result<(), PlotError> {
    let data = autocorrelation_frame(acf)?;
    let title = format!("Autocorrelation - {}", variable);
    LinePlot::builder()
        .data(&data)
        .x("lag")
        .y("acf")
        .with_shape(true)
        .shape(Shape::Circle)
        .size(4)
        .plot_title(title.as_str())
        .x_title("lag (days)")
        .build()
        .plot();
    Ok(())
}

pub fn plot_psd(variable: Variable, psd: &WelchPsd) -> Result<(), PlotError> {
    let data = psd_frame(psd)?;
    let title = format!("PSD (Welch) - {}", variable);
    LinePlot::builder()
        .data(&data)
        .x("frequency")
        .y("log10_density")
        .plot_title(title.as_str())
        .x_title("cycles / day")
        .y_title("log10 power")
        .build()
        .plot();
    Ok(())
}

pub fn plot_rolling_mean(
    series: &TimeSeries,
    rolling: &[f64],
    window: usize,
) -> Result<(), PlotError> {
    let data = rolling_frame(series, rolling)?;
    let title = format!("Rolling mean ({}) - {}", window, series.variable);
    TimeSeriesPlot::builder()
        .data(&data)
        .x("date")
        .y("raw")
        .additional_series(vec!["rolling"])
        .colors(vec![Rgb(170, 170, 170), Rgb(235, 117, 0)])
        .lines(vec![Line::Solid, Line::Solid])
        .plot_title(title.as_str())
        .y_title(series.variable.unit())
        .build()
        .plot();
    Ok(())
}

/// Raw series, smooth curve and residual over time.
pub fn plot_decomposition(series: &TimeSeries, estimate: &NoiseEstimate) -> Result<(), PlotError> {
    let data = decomposition_frame(series, estimate)?;
    let title = format!("{} - {}", series.variable, estimate);
    TimeSeriesPlot::builder()
        .data(&data)
        .x("date")
        .y("raw")
        .additional_series(vec!["smooth", "resid"])
        .colors(vec![Rgb(69, 157, 230), Rgb(235, 117, 0), Rgb(120, 120, 120)])
        .lines(vec![Line::Solid, Line::Solid, Line::Dot])
        .plot_title(title.as_str())
        .y_title(series.variable.unit())
        .build()
        .plot();
    Ok(())
}
