//! Absolute points in time at millisecond precision.
//!
//! An [`Instant`] carries no timezone. Civil fields are only ever derived from it
//! through a [`CivilCalendar`](crate::zone::CivilCalendar) provider.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};

/// Milliseconds since 1970-01-01T00:00:00Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instant(i64);

impl Instant {
    pub const EPOCH: Instant = Instant(0);

    pub const fn from_millis(millis: i64) -> Self {
        Instant(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Shift by a signed number of milliseconds.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` on `i64` overflow.
    pub fn checked_add_millis(self, millis: i64) -> Result<Instant> {
        self.0
            .checked_add(millis)
            .map(Instant)
            .ok_or(CalendarError::OutOfRange(self.0))
    }

    /// Convert to a chrono UTC datetime.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` when chrono cannot represent the instant.
    pub fn to_utc(self) -> Result<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.0).ok_or(CalendarError::OutOfRange(self.0))
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(dt: DateTime<Utc>) -> Self {
        Instant(dt.timestamp_millis())
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_utc() {
            Ok(dt) => write!(f, "{}", dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)),
            Err(_) => write!(f, "{}ms", self.0),
        }
    }
}

/// Total order on the raw epoch value. Timezone-independent.
pub fn compare(a: Instant, b: Instant) -> Ordering {
    a.0.cmp(&b.0)
}
