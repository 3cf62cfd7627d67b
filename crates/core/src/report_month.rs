//! Calendar-month scoping for reports and listings.
//!
//! Every month filter is anchored to a configured report year rather than the
//! year of the record being filtered, so `month=3` always means March of the
//! report year.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Report year used when none is configured.
pub const DEFAULT_REPORT_YEAR: i32 = 2022;

/// Message returned to clients for a missing or malformed `month` parameter.
pub const INVALID_MONTH_MESSAGE: &str =
    "Invalid month parameter. Expected value is between 1 and 12.";

/// A validated calendar month (1 = January, 12 = December).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportMonth(u32);

impl ReportMonth {
    /// Build a month from its number, rejecting anything outside 1..=12.
    pub fn new(month: u32) -> Result<Self, CoreError> {
        if (1..=12).contains(&month) {
            Ok(Self(month))
        } else {
            Err(CoreError::Validation(INVALID_MONTH_MESSAGE.to_string()))
        }
    }

    /// Parse a query-string value such as `"3"` or `"03"`.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let month: u32 = raw
            .trim()
            .parse()
            .map_err(|_| CoreError::Validation(INVALID_MONTH_MESSAGE.to_string()))?;
        Self::new(month)
    }

    /// Parse an optional parameter. Absent or blank values mean "no month".
    pub fn parse_optional(raw: Option<&str>) -> Result<Option<Self>, CoreError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => Self::parse(value).map(Some),
        }
    }

    /// Parse a parameter that must be present.
    pub fn require(raw: Option<&str>) -> Result<Self, CoreError> {
        Self::parse_optional(raw)?
            .ok_or_else(|| CoreError::Validation(INVALID_MONTH_MESSAGE.to_string()))
    }

    #[cfg(test)]
    pub(crate) fn number(self) -> u32 {
        self.0
    }

    /// The half-open range `[year-month-01, year-(month+1)-01)`.
    ///
    /// December rolls over to January 1st of the following year.
    pub fn range(self, year: i32) -> Result<MonthRange, CoreError> {
        let (end_year, end_month) = if self.0 == 12 {
            let next = year
                .checked_add(1)
                .ok_or_else(|| CoreError::Internal(format!("report year {year} is out of range")))?;
            (next, 1)
        } else {
            (year, self.0 + 1)
        };

        Ok(MonthRange {
            start: start_of_day(year, self.0)?,
            end: start_of_day(end_year, end_month)?,
        })
    }
}

/// A half-open UTC timestamp range: `start <= t < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl MonthRange {
    #[cfg(test)]
    pub(crate) fn contains(&self, ts: Timestamp) -> bool {
        self.start <= ts && ts < self.end
    }
}

fn start_of_day(year: i32, month: u32) -> Result<Timestamp, CoreError> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| CoreError::Internal(format!("report year {year} is out of range")))
}
