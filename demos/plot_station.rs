//! Exploratory plots for one variable of a station CSV export.
//!
//! Usage: `cargo run --example plot_station --features plotting -- data/station.csv tavg`

use station_noise::plotting::{
    plot_annual_cycle, plot_autocorrelation, plot_boxplot, plot_decomposition, plot_histogram, plot_psd,
    plot_rolling_mean,
};
use station_noise::stats::{autocorrelation, report_lags, report_window, rolling_mean, welch_psd};
use station_noise::{load_observations, SmoothingConfig, Variable};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().init();

    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .unwrap_or_else(|| "data/strasbourg_entzheim.csv".to_string());
    let variable: Variable = args.next().as_deref().unwrap_or("tavg").parse()?;

    let observations = load_observations(&input)?;
    let series = observations.series(variable);
    if series.is_empty() {
        println!("No value found for '{}'.", variable);
        return Ok(());
    }

    plot_annual_cycle(variable, &observations.monthly_cycle(variable))?;
    plot_histogram(variable, &series.values)?;
    plot_boxplot(variable, &series.values)?;
    if let Some(acf) = autocorrelation(&series.values, report_lags(series.len())) {
        plot_autocorrelation(variable, &acf)?;
    }
    if let Some(psd) = welch_psd(&series.values, 1.0) {
        plot_psd(variable, &psd)?;
    }
    let window = report_window(series.len());
    plot_rolling_mean(&series, &rolling_mean(&series.values, window), window)?;

    let estimate = series.estimate_noise(&SmoothingConfig::default());
    println!("{}", estimate);
    plot_decomposition(&series, &estimate)?;
    Ok(())
}
