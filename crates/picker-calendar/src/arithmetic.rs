//! Zone-aware floor and add over civil calendar fields.
//!
//! Year, month and day arithmetic works on civil fields and is re-encoded through
//! the zone's DST policy. Hour, minute and second arithmetic is an exact shift of
//! elapsed time, so adding one hour across a transition still moves 3 600 000 ms.

use chrono::{Duration, NaiveDate};

use crate::civil::{days_in_month, CivilDateTime, Unit};
use crate::dst::LocalResolution;
use crate::error::{CalendarError, Result};
use crate::instant::Instant;
use crate::zone::CivilCalendar;

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;

/// Truncate `instant` to the start of its `unit` in `zone`.
///
/// The result is never after `instant`. When the truncated civil time does not
/// have exactly one instant, the zone's DST policy is not consulted:
/// - repeated (fold), day and coarser: the earlier occurrence, so both passes
///   through a repeated midnight belong to the same civil day
/// - repeated (fold), hour and finer: the later occurrence if it is not after
///   `instant`, otherwise the earlier one
/// - skipped (gap): the first instant after the gap
///
/// This keeps `floor` total even under `DstPolicy::Strict`.
pub fn floor<C: CivilCalendar + ?Sized>(unit: Unit, zone: &C, instant: Instant) -> Result<Instant> {
    let truncated = zone.decompose(instant)?.truncate(unit);
    match zone.resolve(&truncated)? {
        LocalResolution::Unique(start) => Ok(start),
        LocalResolution::Ambiguous { earlier, later } => {
            let start = match unit {
                Unit::Year | Unit::Month | Unit::Day => earlier,
                Unit::Hour | Unit::Minute | Unit::Second if later <= instant => later,
                Unit::Hour | Unit::Minute | Unit::Second => earlier,
            };
            tracing::debug!(civil = %truncated.describe(), %start, "floor landed in a fold");
            Ok(start)
        }
        LocalResolution::Skipped { transition } => {
            tracing::debug!(civil = %truncated.describe(), %transition, "floor landed in a gap");
            Ok(transition)
        }
    }
}

/// Add `n` units (negative to subtract) to `instant` as seen in `zone`.
///
/// Month and year steps keep the day of month, clamping it to the last day of a
/// shorter target month (Jan 31 + 1 month = Feb 28/29). Time of day is kept for
/// all civil steps.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if the result leaves the calendar range, and
/// propagates encoding failures from the zone (e.g. `Strict` DST rejections).
pub fn add<C: CivilCalendar + ?Sized>(unit: Unit, n: i64, zone: &C, instant: Instant) -> Result<Instant> {
    let out_of_range = || CalendarError::OutOfRange(instant.as_millis());
    match unit {
        Unit::Year => add_months(n.checked_mul(12).ok_or_else(out_of_range)?, zone, instant),
        Unit::Month => add_months(n, zone, instant),
        Unit::Day => {
            let naive = zone.decompose(instant)?.to_naive()?;
            let shifted = Duration::try_days(n)
                .and_then(|days| naive.checked_add_signed(days))
                .ok_or_else(out_of_range)?;
            zone.encode(&CivilDateTime::from_naive(shifted))
        }
        Unit::Hour => shift(instant, n, MILLIS_PER_HOUR),
        Unit::Minute => shift(instant, n, MILLIS_PER_MINUTE),
        Unit::Second => shift(instant, n, MILLIS_PER_SECOND),
    }
}

fn add_months<C: CivilCalendar + ?Sized>(months: i64, zone: &C, instant: Instant) -> Result<Instant> {
    let out_of_range = || CalendarError::OutOfRange(instant.as_millis());
    let civil = zone.decompose(instant)?;
    let index = (i64::from(civil.year) * 12 + i64::from(civil.month) - 1)
        .checked_add(months)
        .ok_or_else(out_of_range)?;
    let year = i32::try_from(index.div_euclid(12)).map_err(|_| out_of_range())?;
    let month = u32::try_from(index.rem_euclid(12) + 1).map_err(|_| out_of_range())?;
    let day = civil
        .day
        .min(days_in_month(year, month).ok_or_else(out_of_range)?);

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(out_of_range)?;
    let time = civil.to_naive()?.time();
    zone.encode(&CivilDateTime::from_naive(date.and_time(time)))
}

fn shift(instant: Instant, n: i64, unit_millis: i64) -> Result<Instant> {
    n.checked_mul(unit_millis)
        .ok_or(CalendarError::OutOfRange(instant.as_millis()))
        .and_then(|millis| instant.checked_add_millis(millis))
}

/// Whether `a` and `b` fall on the same civil day in `zone`.
pub fn is_same_civil_day<C: CivilCalendar + ?Sized>(zone: &C, a: Instant, b: Instant) -> Result<bool> {
    Ok(floor(Unit::Day, zone, a)? == floor(Unit::Day, zone, b)?)
}

/// Whether `candidate`'s civil day lies strictly before `reference`'s in `zone`.
///
/// Used to disable past days relative to "today".
pub fn is_before_civil_day<C: CivilCalendar + ?Sized>(
    zone: &C,
    reference: Instant,
    candidate: Instant,
) -> Result<bool> {
    Ok(floor(Unit::Day, zone, candidate)? < floor(Unit::Day, zone, reference)?)
}
