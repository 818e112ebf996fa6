//! Descriptive statistics and noise estimate for every analysed variable of a
//! station CSV export.
//!
//! Usage: `cargo run --example station_report -- data/strasbourg_entzheim.csv [out_dir]`

use station_noise::{load_observations, AnalysisError, StationReport};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

fn main() -> Result<(), AnalysisError> {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::INFO)
        .init();

    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/strasbourg_entzheim.csv"));
    let out_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data_out"));

    let observations = load_observations(&input)?;
    let report = StationReport::build(&observations).call();
    println!("{}", report);

    for path in report.save_summaries(&out_dir)? {
        println!("Saved {}", path.display());
    }
    Ok(())
}
