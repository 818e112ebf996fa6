use crate::dataset::observations::DailyObservations;
use crate::noise::estimate::NoiseEstimate;
use crate::noise::smoother::SmoothingConfig;
use crate::report::error::ReportError;
use crate::stats::summary::Summary;
use crate::types::variable::Variable;
use log::{debug, warn};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Descriptive summary and noise decomposition of one variable of a station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableReport {
    pub variable: Variable,
    pub summary: Summary,
    /// `None` when the variable has no dated, finite value.
    pub noise: Option<NoiseEstimate>,
}

impl VariableReport {
    pub fn build(
        observations: &DailyObservations,
        variable: Variable,
        config: &SmoothingConfig,
    ) -> Self {
        let summary = Summary::compute(&observations.values(variable));
        let series = observations.series(variable);
        let noise = if series.is_empty() {
            warn!("No value found for '{}'", variable);
            None
        } else {
            let estimate = series.estimate_noise(config);
            debug!("Noise estimate for '{}': {}", variable, estimate);
            Some(estimate)
        };
        Self {
            variable,
            summary,
            noise,
        }
    }

    /// File name used by [`VariableReport::save_summary`], e.g. `summary_tavg.csv`.
    pub fn summary_file_name(&self) -> String {
        format!("summary_{}.csv", self.variable.column_name())
    }

    /// Writes the summary as `<dir>/summary_<variable>.csv` and returns the path.
    pub fn save_summary(&self, dir: impl AsRef<Path>) -> Result<PathBuf, ReportError> {
        let path = dir.as_ref().join(self.summary_file_name());
        self.summary.write_csv(&path)?;
        Ok(path)
    }
}

fn format_value(value: Option<f64>) -> String {
    value.map_or_else(String::new, |v| v.to_string())
}

impl fmt::Display for VariableReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Descriptive summary for '{}' ({}, {}):",
            self.variable,
            self.variable.label(),
            self.variable.unit()
        )?;
        for (metric, value) in self.summary.rows() {
            writeln!(f, "{}: {}", metric, format_value(value))?;
        }
        match &self.noise {
            Some(estimate) => {
                writeln!(f, "Noise estimation for '{}':", self.variable)?;
                writeln!(f, "{}", estimate)?;
            }
            None => writeln!(f, "No value found for '{}'.", self.variable)?,
        }
        write!(f, "-----------------------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::observation::DailyObservation;
    use chrono::NaiveDate;

    fn observations() -> DailyObservations {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        (0..60u64)
            .map(|i| DailyObservation {
                date: Some(start + chrono::Days::new(i)),
                temp_avg: Some((i % 7) as f64),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_report_with_values() {
        let report =
            VariableReport::build(&observations(), Variable::Tavg, &SmoothingConfig::default());
        assert_eq!(report.summary.count, 60);
        let noise = report.noise.as_ref().unwrap();
        assert_eq!(noise.len(), 60);
        assert!(noise.proportion_noise > 0.0);

        let text = report.to_string();
        assert!(text.starts_with("Descriptive summary for 'tavg'"));
        assert!(text.contains("count: 60"));
        assert!(text.contains("Noise proportion (variance): "));
    }

    #[test]
    fn test_report_without_values() {
        let report =
            VariableReport::build(&observations(), Variable::Snow, &SmoothingConfig::default());
        assert_eq!(report.summary.count, 0);
        assert_eq!(report.summary.missing, 60);
        assert!(report.noise.is_none());
        assert!(report.to_string().contains("No value found for 'snow'."));
        assert_eq!(report.summary_file_name(), "summary_snow.csv");
    }
}
