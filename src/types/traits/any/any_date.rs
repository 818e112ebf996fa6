use crate::types::traits::types::{Month, StartEndDate, Year};
use crate::types::traits::utils::month_bounds;
use chrono::NaiveDate;

/// Anything that can be resolved to an inclusive span of days.
///
/// A single `NaiveDate` (or a `YYYY-MM-DD` string) resolves to a one-day span,
/// a [`Year`] to the whole year and a `(Year, Month)` pair to the whole month.
pub trait AnyDate {
    fn get_date_range(self) -> Option<StartEndDate>;
}

impl AnyDate for NaiveDate {
    fn get_date_range(self) -> Option<StartEndDate> {
        Some(StartEndDate {
            start: self,
            end: self,
        })
    }
}

impl AnyDate for &str {
    fn get_date_range(self) -> Option<StartEndDate> {
        NaiveDate::parse_from_str(self.trim(), "%Y-%m-%d")
            .ok()?
            .get_date_range()
    }
}

impl AnyDate for String {
    fn get_date_range(self) -> Option<StartEndDate> {
        self.as_str().get_date_range()
    }
}

impl AnyDate for Year {
    fn get_date_range(self) -> Option<StartEndDate> {
        Some(StartEndDate {
            start: NaiveDate::from_ymd_opt(self.0, 1, 1)?,
            end: NaiveDate::from_ymd_opt(self.0, 12, 31)?,
        })
    }
}

impl AnyDate for (Year, Month) {
    fn get_date_range(self) -> Option<StartEndDate> {
        let (start, end) = month_bounds(self.0.get(), self.1.get())?;
        Some(StartEndDate { start, end })
    }
}
