pub mod error;
pub mod loader;
pub mod observations;
pub mod series;

pub use error::DatasetError;
pub use loader::{load_observations, parse_values, DATE_COLUMNS};
pub use observations::DailyObservations;
pub use series::{decimate_indices, TimeSeries, DEFAULT_MAX_POINTS};
