//! Inclusive business-date ranges

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::error::CoreError;

/// Length of the historical baseline used by the expense forecast.
pub const HISTORY_WINDOW_DAYS: i64 = 30;

/// Longest range a summary may cover (ten years).
pub const MAX_RANGE_DAYS: i64 = 3660;

/// An inclusive `[start, end]` range of business dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CoreError> {
        if end < start {
            return Err(CoreError::InvalidRange(format!(
                "end {end} precedes start {start}"
            )));
        }
        let range = Self { start, end };
        if range.days() > MAX_RANGE_DAYS {
            return Err(CoreError::InvalidRange(format!(
                "range spans {} days, max {MAX_RANGE_DAYS}",
                range.days()
            )));
        }
        // Prior block, history window and forecast day must all be real dates.
        let lookback = range.days().max(HISTORY_WINDOW_DAYS);
        if shift(start, -lookback).is_none() || end.succ_opt().is_none() {
            return Err(CoreError::InvalidRange(format!(
                "{start}..{end} is too close to the calendar limits"
            )));
        }
        Ok(range)
    }

    /// Parse `YYYY-MM-DD` bounds, both required.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, CoreError> {
        let start = parse_bound("start", start)?;
        let end = parse_bound("end", end)?;
        Self::new(start, end)
    }

    /// A single-day range.
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Number of days in the range, `end - start + 1`.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// The immediately preceding, non-overlapping range of equal length.
    pub fn prior(&self) -> Self {
        Self {
            start: shift(self.start, -self.days()).unwrap_or(NaiveDate::MIN),
            end: self.start.pred_opt().unwrap_or(NaiveDate::MIN),
        }
    }

    /// The `days` days immediately before `start`.
    pub fn history(&self, days: i64) -> Self {
        let days = days.max(1);
        Self {
            start: shift(self.start, -days).unwrap_or(NaiveDate::MIN),
            end: self.start.pred_opt().unwrap_or(NaiveDate::MIN),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every date in the range, ascending.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        let days = usize::try_from(self.days()).unwrap_or(0);
        self.start.iter_days().take(days)
    }

    /// The day after the range ends, i.e. the first day being forecast.
    pub fn next_day(&self) -> NaiveDate {
        self.end.succ_opt().unwrap_or(NaiveDate::MAX)
    }
}

/// `date + days`, `None` past the representable calendar.
fn shift(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::try_days(days)?)
}

fn parse_bound(name: &str, value: Option<&str>) -> Result<NaiveDate, CoreError> {
    let raw = value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::InvalidRange(format!("{name} date is required")))?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| CoreError::InvalidRange(format!("{name} date is not YYYY-MM-DD: {raw}")))
}
