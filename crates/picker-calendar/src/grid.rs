//! Month grids for the calendar view.

use chrono::Weekday;
use serde::Serialize;

use crate::arithmetic::{add, floor};
use crate::civil::{days_in_month, Unit};
use crate::error::{CalendarError, Result};
use crate::instant::Instant;
use crate::zone::CivilCalendar;

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PickerDay {
    /// First instant of the civil day.
    pub start: Instant,
    /// Last millisecond of the civil day.
    pub end: Instant,
    /// False for padding days from the neighbouring months.
    pub in_month: bool,
    pub disabled: bool,
}

/// Civil-day boundaries `(start, end)` of the day containing `instant`.
pub fn civil_day<C: CivilCalendar + ?Sized>(zone: &C, instant: Instant) -> Result<(Instant, Instant)> {
    let start = floor(Unit::Day, zone, instant)?;
    let next = floor(Unit::Day, zone, add(Unit::Day, 1, zone, start)?)?;
    Ok((start, next.checked_add_millis(-1)?))
}

/// Whole weeks covering the month of `month_instant`, each starting on `first_weekday`.
///
/// Days before the 1st and after the last day of the month are padding taken from
/// the neighbouring months. `is_disabled` is asked about every cell's start.
pub fn month_grid<C, F>(
    zone: &C,
    first_weekday: Weekday,
    month_instant: Instant,
    mut is_disabled: F,
) -> Result<Vec<Vec<PickerDay>>>
where
    C: CivilCalendar + ?Sized,
    F: FnMut(Instant) -> Result<bool>,
{
    let month_start = floor(Unit::Month, zone, month_instant)?;
    let first = zone.decompose(month_start)?;
    let length = days_in_month(first.year, first.month)
        .ok_or(CalendarError::OutOfRange(month_start.as_millis()))?;

    let leading = (first.weekday.num_days_from_monday() + 7 - first_weekday.num_days_from_monday()) % 7;
    let cells = (leading + length).div_ceil(7) * 7;

    let mut days = Vec::with_capacity(cells as usize);
    for cell in 0..cells {
        let offset = i64::from(cell) - i64::from(leading);
        let (start, end) = civil_day(zone, add(Unit::Day, offset, zone, month_start)?)?;
        let civil = zone.decompose(start)?;
        days.push(PickerDay {
            start,
            end,
            in_month: civil.month == first.month && civil.year == first.year,
            disabled: is_disabled(start)?,
        });
    }

    Ok(days.chunks(7).map(<[PickerDay]>::to_vec).collect())
}
