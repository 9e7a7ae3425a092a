//! Named date and date-range shortcuts ("Today", "This month", ...).
//!
//! A preset is described by a [`PresetSpec`] relative to "today" and resolved
//! into a concrete [`DateRange`] with [`build_preset_range`]:
//!
//! ```text
//! base  = floor(unit, today)
//! start = base + offset_start units
//! end   = base + offset_end units        (Inclusive)
//! end   = base + offset_end units - 1 day (ExclusiveBoundary)
//! ```

use serde::{Deserialize, Serialize};

use crate::arithmetic::{add, floor};
use crate::civil::Unit;
use crate::error::Result;
use crate::instant::Instant;
use crate::range::DateRange;
use crate::zone::CivilCalendar;

/// How `offset_end` is turned into the range end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetEnd {
    /// `offset_end` already names the last day of the range.
    Inclusive,
    /// `offset_end` names the first period after the range; step back one day.
    ExclusiveBoundary,
}

/// A preset relative to "today".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetSpec {
    pub label: String,
    pub unit: Unit,
    pub offset_start: i64,
    pub offset_end: i64,
    pub end: PresetEnd,
}

impl PresetSpec {
    pub fn new(label: impl Into<String>, unit: Unit, offset_start: i64, offset_end: i64, end: PresetEnd) -> Self {
        Self {
            label: label.into(),
            unit,
            offset_start,
            offset_end,
            end,
        }
    }

    pub fn today() -> Self {
        Self::new("Today", Unit::Day, 0, 0, PresetEnd::Inclusive)
    }

    pub fn this_month() -> Self {
        Self::new("This month", Unit::Month, 0, 1, PresetEnd::ExclusiveBoundary)
    }

    pub fn next_month() -> Self {
        Self::new("Next month", Unit::Month, 1, 2, PresetEnd::ExclusiveBoundary)
    }

    /// The `months` whole months following the current one.
    pub fn next_months(months: i64) -> Self {
        Self::new(
            format!("Next {months} months"),
            Unit::Month,
            1,
            1 + months,
            PresetEnd::ExclusiveBoundary,
        )
    }
}

/// Today, This month, Next month, Next 2 months.
pub fn default_presets() -> Vec<PresetSpec> {
    vec![
        PresetSpec::today(),
        PresetSpec::this_month(),
        PresetSpec::next_month(),
        PresetSpec::next_months(2),
    ]
}

/// A preset resolved against a concrete "today".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub label: String,
    pub range: DateRange,
}

impl Preset {
    /// The single-date form used by the single-date picker.
    pub fn date(&self) -> Instant {
        self.range.start()
    }
}

/// Resolve `spec` against `today` in `zone`.
///
/// # Errors
/// Returns `CalendarError::InvalidRange` when the computed end precedes the start,
/// e.g. an `ExclusiveBoundary` spec with `offset_start == offset_end`.
pub fn build_preset_range<C: CivilCalendar + ?Sized>(
    spec: &PresetSpec,
    zone: &C,
    today: Instant,
) -> Result<Preset> {
    let base = floor(spec.unit, zone, today)?;
    let start = add(spec.unit, spec.offset_start, zone, base)?;
    let boundary = add(spec.unit, spec.offset_end, zone, base)?;
    let end = match spec.end {
        PresetEnd::Inclusive => boundary,
        PresetEnd::ExclusiveBoundary => add(Unit::Day, -1, zone, boundary)?,
    };

    Ok(Preset {
        label: spec.label.clone(),
        range: DateRange::new(start, end)?,
    })
}
