//! Window Resolver
//!
//! Converts a reference instant and a [`Period`] into the calendar start of
//! that window. Pure: the same `now` always yields the same start.

use crate::models::Period;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Start of `period` relative to `now`
///
/// `5d` keeps the time of day of `now`; every other period starts at midnight.
pub fn window_start(now: NaiveDateTime, period: Period) -> NaiveDateTime {
    let today = now.date();
    match period {
        Period::FiveDays => now - Duration::days(5),
        Period::MonthToDate => midnight(today.with_day(1).unwrap_or(today)),
        Period::YearToDate => midnight(
            NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
        ),
        Period::FiveYears | Period::TenYears => {
            let years = period.years_back().unwrap_or(0);
            midnight(same_day_years_ago(today, years))
        }
    }
}

/// Same month and day `years` earlier; Feb 29 maps to Feb 28 in non-leap years
fn same_day_years_ago(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() - years;
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), date.day() - 1))
        .unwrap_or(date)
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Every window start needed by a metrics table, resolved against one `now`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowStarts {
    pub now: NaiveDateTime,
    pub five_day: NaiveDateTime,
    pub mtd: NaiveDateTime,
    pub ytd: NaiveDateTime,
    pub five_year: NaiveDateTime,
    pub ten_year: NaiveDateTime,
}

impl WindowStarts {
    pub fn resolve(now: NaiveDateTime) -> Self {
        Self {
            now,
            five_day: window_start(now, Period::FiveDays),
            mtd: window_start(now, Period::MonthToDate),
            ytd: window_start(now, Period::YearToDate),
            five_year: window_start(now, Period::FiveYears),
            ten_year: window_start(now, Period::TenYears),
        }
    }

    /// Earliest start, i.e. how far back the history must reach
    pub fn lookback(&self) -> NaiveDateTime {
        self.ten_year
    }
}
