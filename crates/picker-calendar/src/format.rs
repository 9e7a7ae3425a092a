//! Fixed-width, locale-independent date and time labels.

use crate::error::Result;
use crate::instant::Instant;
use crate::zone::CivilCalendar;

/// `"DD.MM.YY"`, with the year taken modulo 100.
pub fn format_date<C: CivilCalendar + ?Sized>(zone: &C, instant: Instant) -> Result<String> {
    let civil = zone.decompose(instant)?;
    Ok(format!(
        "{:02}.{:02}.{:02}",
        civil.day,
        civil.month,
        civil.year.rem_euclid(100)
    ))
}

/// `"HH:MM:SS"`, 24-hour clock.
pub fn format_time<C: CivilCalendar + ?Sized>(zone: &C, instant: Instant) -> Result<String> {
    let civil = zone.decompose(instant)?;
    Ok(format!(
        "{:02}:{:02}:{:02}",
        civil.hour, civil.minute, civil.second
    ))
}

/// `"DD.MM.YY HH:MM:SS"`, the label shown in the picker trigger.
pub fn format_date_time<C: CivilCalendar + ?Sized>(zone: &C, instant: Instant) -> Result<String> {
    Ok(format!(
        "{} {}",
        format_date(zone, instant)?,
        format_time(zone, instant)?
    ))
}
