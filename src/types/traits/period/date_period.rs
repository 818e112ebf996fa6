use crate::types::traits::types::{Month, StartEndDate, Year};
use crate::types::traits::utils::month_bounds;
use chrono::NaiveDate;

/// A calendar period (a year, or a month of a year) usable with
/// [`crate::DailyObservations::get_for_period`].
pub trait DatePeriod {
    fn get_date_period(self) -> Option<StartEndDate>;
}

impl DatePeriod for Year {
    fn get_date_period(self) -> Option<StartEndDate> {
        Some(StartEndDate {
            start: NaiveDate::from_ymd_opt(self.0, 1, 1)?,
            end: NaiveDate::from_ymd_opt(self.0, 12, 31)?,
        })
    }
}

impl DatePeriod for (Year, Month) {
    fn get_date_period(self) -> Option<StartEndDate> {
        let (start, end) = month_bounds(self.0.get(), self.1.get())?;
        Some(StartEndDate { start, end })
    }
}
