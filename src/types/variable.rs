//! Defines the `Variable` enum naming the observed quantities of a daily
//! station record and the CSV columns they are stored in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One observed quantity of a daily weather record.
///
/// The variants map one-to-one onto the columns of a daily station export
/// (`tavg`, `tmin`, ... `tsun`). Use [`Variable::column_name`] to get the column
/// and [`Variable::ANALYSED`] for the set covered by a full station report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variable {
    /// Average air temperature (°C).
    Tavg,
    /// Minimum air temperature (°C).
    Tmin,
    /// Maximum air temperature (°C).
    Tmax,
    /// Total precipitation (mm).
    Prcp,
    /// Maximum snow depth (mm).
    Snow,
    /// Average wind direction (degrees).
    Wdir,
    /// Average wind speed (km/h).
    Wspd,
    /// Peak wind gust (km/h).
    Wpgt,
    /// Average sea-level air pressure (hPa).
    Pres,
    /// Total sunshine duration (minutes).
    Tsun,
}

impl Variable {
    /// Every variable of a daily record, in column order.
    pub const ALL: [Variable; 10] = [
        Variable::Tavg,
        Variable::Tmin,
        Variable::Tmax,
        Variable::Prcp,
        Variable::Snow,
        Variable::Wdir,
        Variable::Wspd,
        Variable::Wpgt,
        Variable::Pres,
        Variable::Tsun,
    ];

    /// The variables covered by a station report. Wind direction is circular,
    /// so linear statistics are not meaningful for it.
    pub const ANALYSED: [Variable; 9] = [
        Variable::Tavg,
        Variable::Tmin,
        Variable::Tmax,
        Variable::Prcp,
        Variable::Snow,
        Variable::Wspd,
        Variable::Wpgt,
        Variable::Pres,
        Variable::Tsun,
    ];

    /// Name of the CSV column holding this variable.
    pub fn column_name(&self) -> &'static str {
        match self {
            Variable::Tavg => "tavg",
            Variable::Tmin => "tmin",
            Variable::Tmax => "tmax",
            Variable::Prcp => "prcp",
            Variable::Snow => "snow",
            Variable::Wdir => "wdir",
            Variable::Wspd => "wspd",
            Variable::Wpgt => "wpgt",
            Variable::Pres => "pres",
            Variable::Tsun => "tsun",
        }
    }

    /// Human readable label, used for plot titles.
    pub fn label(&self) -> &'static str {
        match self {
            Variable::Tavg => "Average temperature",
            Variable::Tmin => "Minimum temperature",
            Variable::Tmax => "Maximum temperature",
            Variable::Prcp => "Precipitation",
            Variable::Snow => "Snow depth",
            Variable::Wdir => "Wind direction",
            Variable::Wspd => "Wind speed",
            Variable::Wpgt => "Peak wind gust",
            Variable::Pres => "Air pressure",
            Variable::Tsun => "Sunshine duration",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Variable::Tavg | Variable::Tmin | Variable::Tmax => "°C",
            Variable::Prcp | Variable::Snow => "mm",
            Variable::Wdir => "°",
            Variable::Wspd | Variable::Wpgt => "km/h",
            Variable::Pres => "hPa",
            Variable::Tsun => "min",
        }
    }
}

/// Formats a `Variable` as its column name.
///
/// # Examples
///
/// ```
/// use station_noise::Variable;
///
/// assert_eq!(Variable::Tsun.to_string(), "tsun");
/// assert_eq!(format!("{}", Variable::Pres), "pres");
/// ```
impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

/// Error returned when a string is not a known column name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown weather variable '{0}'")]
pub struct UnknownVariable(pub String);

impl FromStr for Variable {
    type Err = UnknownVariable;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Variable::ALL
            .into_iter()
            .find(|v| v.column_name() == wanted)
            .ok_or_else(|| UnknownVariable(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_names_round_trip_through_from_str() {
        for variable in Variable::ALL {
            let parsed: Variable = variable.column_name().parse().unwrap();
            assert_eq!(parsed, variable);
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!(" TSUN ".parse::<Variable>(), Ok(Variable::Tsun));
        assert_eq!(
            "humidity".parse::<Variable>(),
            Err(UnknownVariable("humidity".to_string()))
        );
    }

    #[test]
    fn test_analysed_skips_wind_direction() {
        assert_eq!(Variable::ANALYSED.len(), 9);
        assert!(!Variable::ANALYSED.contains(&Variable::Wdir));
    }
}
