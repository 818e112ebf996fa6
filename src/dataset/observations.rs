use crate::dataset::error::DatasetError;
use crate::dataset::series::TimeSeries;
use crate::types::observation::DailyObservation;
use crate::types::traits::any::any_date::AnyDate;
use crate::types::traits::period::date_period::DatePeriod;
use crate::types::traits::types::{Month, StartEndDate, Year};
use crate::types::variable::Variable;
use chrono::{Datelike, NaiveDate, Weekday};
use ordered_float::OrderedFloat;

/// An ordered collection of daily station records.
///
/// Filtering methods never mutate `self`. They return a new collection with the
/// matching records in their original order. Records without a valid date are
/// kept by [`DailyObservations::filter`] but excluded by every calendar filter.
///
/// Methods that resolve dates or periods (`get_range`, `get_at`,
/// `get_for_period`) return [`DatasetError::DateParsing`] when the input cannot
/// be turned into a calendar span.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyObservations {
    records: Vec<DailyObservation>,
}

impl DailyObservations {
    pub fn new(records: Vec<DailyObservation>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[DailyObservation] {
        &self.records
    }

    pub fn into_records(self) -> Vec<DailyObservation> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyObservation> {
        self.records.iter()
    }

    /// Keeps the records for which `predicate` returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use station_noise::{DailyObservation, DailyObservations, Variable};
    ///
    /// let observations = DailyObservations::new(vec![
    ///     DailyObservation { temp_max: Some(31.0), ..Default::default() },
    ///     DailyObservation { temp_max: Some(18.5), ..Default::default() },
    /// ]);
    /// let hot = observations.filter(|r| r.finite(Variable::Tmax).is_some_and(|t| t > 30.0));
    /// assert_eq!(hot.len(), 1);
    /// ```
    pub fn filter<F>(&self, predicate: F) -> DailyObservations
    where
        F: Fn(&DailyObservation) -> bool,
    {
        self.records
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }

    fn filter_dates<F>(&self, predicate: F) -> DailyObservations
    where
        F: Fn(NaiveDate) -> bool,
    {
        self.filter(|r| r.date.is_some_and(&predicate))
    }

    /// Records dated between the start of `start` and the end of `end`, inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::DateParsing`] if either bound cannot be resolved.
    pub fn get_range(
        &self,
        start: impl AnyDate,
        end: impl AnyDate,
    ) -> Result<DailyObservations, DatasetError> {
        let start = start
            .get_date_range()
            .ok_or(DatasetError::DateParsing)?
            .start;
        let end = end.get_date_range().ok_or(DatasetError::DateParsing)?.end;
        let span = StartEndDate { start, end };
        Ok(self.filter_dates(|d| span.contains(d)))
    }

    /// Records dated exactly on `date`.
    ///
    /// When `date` resolves to a span (such as a [`Year`]) its first day is used.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::DateParsing`] if `date` cannot be resolved.
    pub fn get_at(&self, date: impl AnyDate) -> Result<DailyObservations, DatasetError> {
        let day = date
            .get_date_range()
            .ok_or(DatasetError::DateParsing)?
            .start;
        Ok(self.filter_dates(|d| d == day))
    }

    /// Records within a calendar period, such as `Year(2023)` or `(Year(2023), Month(7))`.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::DateParsing`] if the period is not a valid calendar span.
    pub fn get_for_period(
        &self,
        period: impl DatePeriod,
    ) -> Result<DailyObservations, DatasetError> {
        let span = period.get_date_period().ok_or(DatasetError::DateParsing)?;
        Ok(self.filter_dates(|d| span.contains(d)))
    }

    pub fn for_year(&self, year: i32) -> DailyObservations {
        self.filter_dates(|d| d.year() == year)
    }

    /// Records of one month of one year. An out-of-range month matches nothing.
    pub fn for_month(&self, year: i32, month: u32) -> DailyObservations {
        self.get_for_period((Year(year), Month(month)))
            .unwrap_or_default()
    }

    pub fn for_weekday(&self, weekday: Weekday) -> DailyObservations {
        self.filter_dates(|d| d.weekday() == weekday)
    }

    /// First and last date present, if any record is dated.
    pub fn date_span(&self) -> Option<StartEndDate> {
        let mut dates = self.records.iter().filter_map(|r| r.date);
        let first = dates.next()?;
        let (start, end) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some(StartEndDate { start, end })
    }

    fn finite_values(&self, variable: Variable) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().filter_map(move |r| r.finite(variable))
    }

    /// Mean of the finite values of `variable`. `None` when there are none.
    pub fn average(&self, variable: Variable) -> Option<f64> {
        let (count, sum) = self
            .finite_values(variable)
            .fold((0usize, 0.0), |(c, s), v| (c + 1, s + v));
        (count > 0).then(|| sum / count as f64)
    }

    pub fn max(&self, variable: Variable) -> Option<f64> {
        self.finite_values(variable)
            .map(OrderedFloat)
            .max()
            .map(|v| v.0)
    }

    pub fn min(&self, variable: Variable) -> Option<f64> {
        self.finite_values(variable)
            .map(OrderedFloat)
            .min()
            .map(|v| v.0)
    }

    /// Mean of `variable` for each calendar month (index 0 is January), pooled over all years.
    pub fn monthly_cycle(&self, variable: Variable) -> [Option<f64>; 12] {
        let mut sums = [(0usize, 0.0f64); 12];
        for record in &self.records {
            if let (Some(date), Some(value)) = (record.date, record.finite(variable)) {
                let slot = &mut sums[date.month0() as usize];
                slot.0 += 1;
                slot.1 += value;
            }
        }
        sums.map(|(count, sum)| (count > 0).then(|| sum / count as f64))
    }

    /// Every value of `variable` in record order, with missing entries as NaN.
    pub fn values(&self, variable: Variable) -> Vec<f64> {
        self.records
            .iter()
            .map(|r| r.get(variable).unwrap_or(f64::NAN))
            .collect()
    }

    /// Dated, finite values of `variable`, sorted by date.
    ///
    /// Records with a missing or unparsable date are dropped, so the result can
    /// be shorter than the file and in a different order; use
    /// [`DailyObservations::values`] for file order.
    pub fn series(&self, variable: Variable) -> TimeSeries {
        let mut points: Vec<(NaiveDate, f64)> = self
            .records
            .iter()
            .filter_map(|r| Some((r.date?, r.finite(variable)?)))
            .collect();
        points.sort_by_key(|(date, _)| *date);
        let (dates, values) = points.into_iter().unzip();
        TimeSeries {
            variable,
            dates,
            values,
        }
    }
}

impl FromIterator<DailyObservation> for DailyObservations {
    fn from_iter<T: IntoIterator<Item = DailyObservation>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for DailyObservations {
    type Item = DailyObservation;
    type IntoIter = std::vec::IntoIter<DailyObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a DailyObservations {
    type Item = &'a DailyObservation;
    type IntoIter = std::slice::Iter<'a, DailyObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
