use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to create output directory '{0}'")]
    CreateDir(PathBuf, #[source] std::io::Error),

    #[error("Failed to write report file '{0}'")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("Failed to read report file '{0}'")]
    Read(PathBuf, #[source] PolarsError),

    #[error("Failed to build the summary table")]
    Table(#[from] PolarsError),

    #[error("Failed to serialize report")]
    Json(#[from] serde_json::Error),
}
