use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("Failed to build plot data for '{0}'")]
    Frame(String, #[source] PolarsError),
}
