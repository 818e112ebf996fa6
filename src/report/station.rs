use crate::dataset::observations::DailyObservations;
use crate::noise::smoother::SmoothingConfig;
use crate::report::error::ReportError;
use crate::report::variable::VariableReport;
use crate::types::traits::types::StartEndDate;
use crate::types::variable::Variable;
use bon::bon;
use log::info;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Reports for a set of variables of one station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationReport {
    pub records: usize,
    pub span: Option<StartEndDate>,
    pub variables: Vec<VariableReport>,
}

#[bon]
impl StationReport {
    /// Builds one [`VariableReport`] per requested variable, in order.
    ///
    /// `variables` defaults to [`Variable::ANALYSED`] and `smoothing` to the
    /// default local-polynomial configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use station_noise::{DailyObservation, DailyObservations, StationReport, Variable};
    ///
    /// let observations: DailyObservations = (1..=5)
    ///     .map(|day| DailyObservation {
    ///         date: chrono::NaiveDate::from_ymd_opt(2024, 3, day),
    ///         pressure: Some(1010.0 + day as f64),
    ///         ..Default::default()
    ///     })
    ///     .collect();
    ///
    /// let report = StationReport::build(&observations)
    ///     .variables(vec![Variable::Pres])
    ///     .call();
    /// assert_eq!(report.variables.len(), 1);
    /// assert!(report.get(Variable::Pres).unwrap().noise.is_some());
    /// ```
    #[builder]
    pub fn build(
        #[builder(start_fn)] observations: &DailyObservations,
        #[builder(default = Variable::ANALYSED.to_vec())] variables: Vec<Variable>,
        #[builder(default)] smoothing: SmoothingConfig,
    ) -> Self {
        info!(
            "Analysing {} variables over {} records",
            variables.len(),
            observations.len()
        );
        let variables = variables
            .into_iter()
            .map(|variable| VariableReport::build(observations, variable, &smoothing))
            .collect();
        Self {
            records: observations.len(),
            span: observations.date_span(),
            variables,
        }
    }

    pub fn get(&self, variable: Variable) -> Option<&VariableReport> {
        self.variables.iter().find(|r| r.variable == variable)
    }

    /// Saves every variable summary under `dir` and returns the written paths.
    pub fn save_summaries(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, ReportError> {
        self.variables
            .iter()
            .map(|report| report.save_summary(dir.as_ref()))
            .collect()
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for StationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.span {
            Some(span) => writeln!(
                f,
                "{} records from {} to {}",
                self.records, span.start, span.end
            )?,
            None => writeln!(f, "{} records", self.records)?,
        }
        for report in &self.variables {
            writeln!(f, "{}", report)?;
        }
        Ok(())
    }
}
