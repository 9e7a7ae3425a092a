//! Allowed time-of-day windows and their projection across timezones.
//!
//! A window such as 08:00-17:30 is defined once in a base zone (where the business
//! operates) and shown to a client in their own zone. The projection depends on
//! the civil day because offsets change over the year.

use serde::{Deserialize, Serialize};

use crate::arithmetic::is_same_civil_day;
use crate::error::{CalendarError, Result};
use crate::instant::Instant;
use crate::zone::CivilCalendar;

/// An hour/minute window within a civil day.
///
/// Windows built with [`TimeOfDayBounds::new`] satisfy `start <= end`. Windows
/// produced by [`adjust_time_of_day_bounds_across_zones`] may be inverted, which
/// means no time is selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDayBounds {
    pub start_hour: u32,
    pub start_minute: u32,
    pub end_hour: u32,
    pub end_minute: u32,
}

impl TimeOfDayBounds {
    /// # Errors
    /// Returns `CalendarError::InvalidBounds` for out-of-range fields or `start > end`.
    pub fn new(start_hour: u32, start_minute: u32, end_hour: u32, end_minute: u32) -> Result<Self> {
        let bounds = Self {
            start_hour,
            start_minute,
            end_hour,
            end_minute,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// The whole day, 00:00-23:59.
    pub fn all_day() -> Self {
        Self {
            start_hour: 0,
            start_minute: 0,
            end_hour: 23,
            end_minute: 59,
        }
    }

    /// # Errors
    /// Returns `CalendarError::InvalidBounds` for out-of-range fields or `start > end`.
    pub fn validate(&self) -> Result<()> {
        if self.start_hour > 23 || self.end_hour > 23 || self.start_minute > 59 || self.end_minute > 59 {
            return Err(CalendarError::InvalidBounds(format!("{self} has a field out of range")));
        }
        if self.is_inverted() {
            return Err(CalendarError::InvalidBounds(format!("{self} starts after it ends")));
        }
        Ok(())
    }

    pub fn start(&self) -> (u32, u32) {
        (self.start_hour, self.start_minute)
    }

    pub fn end(&self) -> (u32, u32) {
        (self.end_hour, self.end_minute)
    }

    /// `start > end`: nothing can be selected.
    pub fn is_inverted(&self) -> bool {
        self.start() > self.end()
    }

    pub fn contains(&self, hour: u32, minute: u32) -> bool {
        !self.is_inverted() && self.start() <= (hour, minute) && (hour, minute) <= self.end()
    }

    /// Hours with at least one selectable minute.
    pub fn selectable_hours(&self) -> Vec<u32> {
        if self.is_inverted() {
            return Vec::new();
        }
        (self.start_hour..=self.end_hour).collect()
    }

    /// Selectable minutes within `hour`.
    pub fn selectable_minutes(&self, hour: u32) -> Vec<u32> {
        if self.is_inverted() || hour < self.start_hour || hour > self.end_hour {
            return Vec::new();
        }
        let first = if hour == self.start_hour { self.start_minute } else { 0 };
        let last = if hour == self.end_hour { self.end_minute } else { 59 };
        (first..=last).collect()
    }
}

impl std::fmt::Display for TimeOfDayBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start_hour, self.start_minute, self.end_hour, self.end_minute
        )
    }
}

/// Project `base_bounds` (defined in `base_zone`) onto `client_zone` for the civil
/// day of `candidate`.
///
/// Both window edges are placed on `candidate`'s civil day in `base_zone` and read
/// back as hour/minute in `client_zone`. If `candidate` is on the same client-side
/// civil day as `reference` ("today") and the reference time of day is already
/// past the projected start, the start is moved up to the reference time; the end
/// is left alone. A reference past the projected end therefore yields an inverted
/// window, which callers treat as "no times left today".
///
/// The clamp works at minute granularity: a reference of 07:00:45 leaves 07:00
/// as the first offered start.
pub fn adjust_time_of_day_bounds_across_zones<B, C>(
    base_zone: &B,
    client_zone: &C,
    reference: Instant,
    candidate: Instant,
    base_bounds: TimeOfDayBounds,
) -> Result<TimeOfDayBounds>
where
    B: CivilCalendar + ?Sized,
    C: CivilCalendar + ?Sized,
{
    let day = base_zone.decompose(candidate)?;
    let start = client_zone.decompose(
        base_zone.encode(&day.with_time(base_bounds.start_hour, base_bounds.start_minute, 0, 0))?,
    )?;
    let end = client_zone.decompose(
        base_zone.encode(&day.with_time(base_bounds.end_hour, base_bounds.end_minute, 0, 0))?,
    )?;

    let mut bounds = TimeOfDayBounds {
        start_hour: start.hour,
        start_minute: start.minute,
        end_hour: end.hour,
        end_minute: end.minute,
    };

    if is_same_civil_day(client_zone, candidate, reference)? {
        let now = client_zone.decompose(reference)?;
        if (now.hour, now.minute) > bounds.start() {
            tracing::debug!(%bounds, hour = now.hour, minute = now.minute, "clamping window start to reference time");
            bounds.start_hour = now.hour;
            bounds.start_minute = now.minute;
        }
    }

    if bounds.is_inverted() {
        tracing::debug!(%bounds, %candidate, "no selectable time left in window");
    }
    Ok(bounds)
}

/// Move `instant` to the window start on its civil day if its time of day lies
/// outside `bounds`.
///
/// Returns `None` when `bounds` is inverted.
pub fn snap_to_bounds<C: CivilCalendar + ?Sized>(
    zone: &C,
    instant: Instant,
    bounds: TimeOfDayBounds,
) -> Result<Option<Instant>> {
    if bounds.is_inverted() {
        return Ok(None);
    }
    let civil = zone.decompose(instant)?;
    if bounds.contains(civil.hour, civil.minute) {
        return Ok(Some(instant));
    }
    zone.encode(&civil.with_time(bounds.start_hour, bounds.start_minute, 0, 0))
        .map(Some)
}
