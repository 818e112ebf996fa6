use crate::types::variable::Variable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct DailyObservation {
    pub date: Option<NaiveDate>,        // time / date
    pub temp_avg: Option<f64>,          // tavg
    pub temp_min: Option<f64>,          // tmin
    pub temp_max: Option<f64>,          // tmax
    pub precipitation: Option<f64>,     // prcp (total mm)
    pub snow_depth: Option<f64>,        // snow (max depth mm)
    pub wind_direction: Option<f64>,    // wdir (avg degrees)
    pub wind_speed: Option<f64>,        // wspd (avg km/h)
    pub peak_wind_gust: Option<f64>,    // wpgt (km/h)
    pub pressure: Option<f64>,          // pres (avg hPa)
    pub sunshine_minutes: Option<f64>,  // tsun (total minutes)
}

impl DailyObservation {
    /// Value of `variable` in this record, `None` when missing.
    pub fn get(&self, variable: Variable) -> Option<f64> {
        match variable {
            Variable::Tavg => self.temp_avg,
            Variable::Tmin => self.temp_min,
            Variable::Tmax => self.temp_max,
            Variable::Prcp => self.precipitation,
            Variable::Snow => self.snow_depth,
            Variable::Wdir => self.wind_direction,
            Variable::Wspd => self.wind_speed,
            Variable::Wpgt => self.peak_wind_gust,
            Variable::Pres => self.pressure,
            Variable::Tsun => self.sunshine_minutes,
        }
    }

    pub fn set(&mut self, variable: Variable, value: Option<f64>) {
        let slot = match variable {
            Variable::Tavg => &mut self.temp_avg,
            Variable::Tmin => &mut self.temp_min,
            Variable::Tmax => &mut self.temp_max,
            Variable::Prcp => &mut self.precipitation,
            Variable::Snow => &mut self.snow_depth,
            Variable::Wdir => &mut self.wind_direction,
            Variable::Wspd => &mut self.wind_speed,
            Variable::Wpgt => &mut self.peak_wind_gust,
            Variable::Pres => &mut self.pressure,
            Variable::Tsun => &mut self.sunshine_minutes,
        };
        *slot = value;
    }

    /// Value of `variable` when it is present and finite.
    pub fn finite(&self, variable: Variable) -> Option<f64> {
        self.get(variable).filter(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_every_variable() {
        let mut obs = DailyObservation::default();
        for (i, variable) in Variable::ALL.into_iter().enumerate() {
            obs.set(variable, Some(i as f64));
        }
        for (i, variable) in Variable::ALL.into_iter().enumerate() {
            assert_eq!(obs.get(variable), Some(i as f64));
        }
    }

    #[test]
    fn test_finite_drops_nan() {
        let obs = DailyObservation {
            precipitation: Some(f64::NAN),
            pressure: Some(1013.2),
            ..Default::default()
        };
        assert_eq!(obs.finite(Variable::Prcp), None);
        assert_eq!(obs.finite(Variable::Pres), Some(1013.2));
        assert_eq!(obs.finite(Variable::Tsun), None);
    }
}
