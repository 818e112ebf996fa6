use crate::dataset::error::DatasetError;
use crate::report::error::ReportError;
use thiserror::Error;

#[cfg(feature = "plotting")]
use crate::plotting::error::PlotError;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[cfg(feature = "plotting")]
    #[error(transparent)]
    Plot(#[from] PlotError),
}
