//! Ordered date ranges selected in the duration picker.

use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};
use crate::instant::Instant;

/// An inclusive `(start, end)` pair with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: Instant,
    end: Instant,
}

impl DateRange {
    /// # Errors
    /// Returns `CalendarError::InvalidRange` if `start` is after `end`.
    pub fn new(start: Instant, end: Instant) -> Result<Self> {
        if start > end {
            return Err(CalendarError::InvalidRange {
                start: start.as_millis(),
                end: end.as_millis(),
            });
        }
        Ok(Self { start, end })
    }

    /// A range covering a single instant.
    pub fn single(at: Instant) -> Self {
        Self { start: at, end: at }
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn end(&self) -> Instant {
        self.end
    }

    pub fn contains(&self, instant: Instant) -> bool {
        self.start <= instant && instant <= self.end
    }
}

#[derive(Deserialize)]
struct RawDateRange {
    start: Instant,
    end: Instant,
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawDateRange::deserialize(deserializer)?;
        DateRange::new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}
