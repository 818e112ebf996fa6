use polars::error::PolarsError;
use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read CSV file '{0}'")]
    CsvRead(PathBuf, #[source] PolarsError),

    #[error("Failed Polars column operation on '{column}'")]
    ColumnOperation {
        column: String,
        #[source]
        source: PolarsError,
    },

    #[error("Could not resolve the requested date or period")]
    DateParsing,

    #[error("Value '{value}' at position {index} is not numeric")]
    NumericConversion {
        index: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}
