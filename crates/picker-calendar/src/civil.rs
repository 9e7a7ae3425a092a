//! Civil calendar fields and interval units.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};

/// Granularity for [`floor`](crate::arithmetic::floor) and [`add`](crate::arithmetic::add).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl std::str::FromStr for Unit {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "year" => Ok(Unit::Year),
            "month" => Ok(Unit::Month),
            "day" => Ok(Unit::Day),
            "hour" => Ok(Unit::Hour),
            "minute" => Ok(Unit::Minute),
            "second" => Ok(Unit::Second),
            _ => Err(CalendarError::InvalidUnit(s.to_string())),
        }
    }
}

/// An instant decomposed under a timezone.
///
/// `weekday` is derived from the date and ignored when encoding back to an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilDateTime {
    pub year: i32,
    /// 1-12
    pub month: u32,
    /// 1-31
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
    pub weekday: Weekday,
}

impl CivilDateTime {
    pub fn from_naive(naive: NaiveDateTime) -> Self {
        Self {
            year: naive.year(),
            month: naive.month(),
            day: naive.day(),
            hour: naive.hour(),
            minute: naive.minute(),
            second: naive.second(),
            millisecond: naive.nanosecond() / 1_000_000,
            weekday: naive.weekday(),
        }
    }

    /// Build from date fields at midnight, computing the weekday.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidCivil` if the fields do not form a real date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| CalendarError::InvalidCivil(format!("{year:04}-{month:02}-{day:02}")))?;
        Ok(Self::from_naive(date.and_time(NaiveTime::MIN)))
    }

    /// # Errors
    /// Returns `CalendarError::InvalidCivil` if any field is out of range.
    pub fn to_naive(&self) -> Result<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|date| {
                date.and_hms_milli_opt(self.hour, self.minute, self.second, self.millisecond)
            })
            .ok_or_else(|| CalendarError::InvalidCivil(self.describe()))
    }

    /// Same date, time of day replaced.
    pub fn with_time(&self, hour: u32, minute: u32, second: u32, millisecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
            ..*self
        }
    }

    /// Truncate every field below `unit` to its minimum.
    pub fn truncate(&self, unit: Unit) -> Self {
        match unit {
            Unit::Year => Self {
                month: 1,
                day: 1,
                ..self.with_time(0, 0, 0, 0)
            },
            Unit::Month => Self {
                day: 1,
                ..self.with_time(0, 0, 0, 0)
            },
            Unit::Day => self.with_time(0, 0, 0, 0),
            Unit::Hour => self.with_time(self.hour, 0, 0, 0),
            Unit::Minute => self.with_time(self.hour, self.minute, 0, 0),
            Unit::Second => self.with_time(self.hour, self.minute, self.second, 0),
        }
    }

    pub(crate) fn describe(&self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.millisecond
        )
    }
}

/// Number of days in the given month, or `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}
