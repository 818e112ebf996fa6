//! Descriptive statistics and the spectral/correlation analyses behind the
//! exploratory plots.

pub mod correlation;
pub mod histogram;
pub mod moments;
pub mod quantile;
pub mod rolling;
pub mod spectral;
pub mod summary;

pub use correlation::{autocorrelation, report_lags};
pub use histogram::Histogram;
pub use moments::{kurtosis, mean, population_variance, sample_std, skewness};
pub use quantile::quantile;
pub use rolling::{report_window, rolling_mean};
pub use spectral::{welch_psd, WelchPsd};
pub use summary::{QuantileValue, Summary};
