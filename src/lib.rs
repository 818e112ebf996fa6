pub mod dataset;
mod error;
mod noise;
pub mod report;
pub mod stats;
mod types;

#[cfg(feature = "plotting")]
pub mod plotting;

pub use error::AnalysisError;

pub use noise::estimate::{estimate_noise, NoiseEstimate};
pub use noise::smoother::{
    adapt_window, moving_average, smooth, AppliedSmoothing, LocalPolynomialFilter,
    SmoothingConfig, SmoothingMethod, DEFAULT_POLYORDER, DEFAULT_WINDOW,
};

pub use dataset::{load_observations, parse_values, DailyObservations, DatasetError, TimeSeries};
pub use report::{ReportError, StationReport, VariableReport};
pub use stats::Summary;

pub use types::observation::DailyObservation;
pub use types::variable::{UnknownVariable, Variable};

pub use types::traits::any::any_date::AnyDate;
pub use types::traits::period::date_period::DatePeriod;
pub use types::traits::types::Month;
pub use types::traits::types::StartEndDate;
pub use types::traits::types::Year;
