//! Picker configuration: zones, presets, disabled days and allowed times.
//!
//! Settings arrive from the host application as JSON:
//!
//! ```json
//! {
//!   "base_timezone": "America/New_York",
//!   "client_timezone": "America/Denver",
//!   "allowed_times": { "start_hour": 8, "start_minute": 0, "end_hour": 17, "end_minute": 30 },
//!   "disable_past_days": true,
//!   "first_weekday": "Mon"
//! }
//! ```
//!
//! Every field is optional. `presets` defaults to [`default_presets`].

use chrono::Weekday;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::arithmetic::is_before_civil_day;
use crate::bounds::{adjust_time_of_day_bounds_across_zones, TimeOfDayBounds};
use crate::dst::DstPolicy;
use crate::error::{CalendarError, Result};
use crate::grid::{self, PickerDay};
use crate::instant::Instant;
use crate::preset::{build_preset_range, default_presets, Preset, PresetEnd, PresetSpec};
use crate::zone::Zone;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerSettings {
    /// Zone the allowed times are defined in.
    #[serde(default = "default_timezone")]
    pub base_timezone: String,
    /// Zone the picker is displayed in.
    #[serde(default = "default_timezone")]
    pub client_timezone: String,
    #[serde(default)]
    pub allowed_times: Option<TimeOfDayBounds>,
    #[serde(default)]
    pub disable_past_days: bool,
    #[serde(default = "default_first_weekday")]
    pub first_weekday: Weekday,
    #[serde(default = "default_presets")]
    pub presets: Vec<PresetSpec>,
    #[serde(default)]
    pub dst_policy: DstPolicy,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_first_weekday() -> Weekday {
    Weekday::Mon
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            base_timezone: default_timezone(),
            client_timezone: default_timezone(),
            allowed_times: None,
            disable_past_days: false,
            first_weekday: default_first_weekday(),
            presets: default_presets(),
            dst_policy: DstPolicy::default(),
        }
    }
}

impl PickerSettings {
    /// Parse and validate settings from JSON.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidSettings` for malformed JSON, and the
    /// validation errors of [`validate`](Self::validate).
    #[tracing::instrument(skip(json))]
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json).map_err(|e| {
            tracing::warn!(error = %e, "rejected picker settings");
            CalendarError::InvalidSettings(e.to_string())
        })?;
        settings.validate()?;
        tracing::debug!(
            base = %settings.base_timezone,
            client = %settings.client_timezone,
            presets = settings.presets.len(),
            "loaded picker settings"
        );
        Ok(settings)
    }

    /// # Errors
    /// Returns `CalendarError::InvalidTimezone` for unknown zone ids and
    /// `CalendarError::InvalidBounds` for a malformed allowed-times window and
    /// `CalendarError::InvalidSettings` for a preset that ends before it starts
    /// whatever "today" is.
    pub fn validate(&self) -> Result<()> {
        self.base_zone()?;
        self.client_zone()?;
        if let Some(bounds) = &self.allowed_times {
            bounds.validate()?;
        }
        for spec in &self.presets {
            let empty = match spec.end {
                PresetEnd::Inclusive => spec.offset_end < spec.offset_start,
                PresetEnd::ExclusiveBoundary => spec.offset_end <= spec.offset_start,
            };
            if empty {
                return Err(CalendarError::InvalidSettings(format!(
                    "preset {:?} ends before it starts (offsets {}..{})",
                    spec.label, spec.offset_start, spec.offset_end
                )));
            }
        }
        Ok(())
    }

    pub fn base_zone(&self) -> Result<Zone<Tz>> {
        Ok(Zone::named(&self.base_timezone)?.with_policy(self.dst_policy))
    }

    pub fn client_zone(&self) -> Result<Zone<Tz>> {
        Ok(Zone::named(&self.client_timezone)?.with_policy(self.dst_policy))
    }

    /// Every configured preset resolved against `today` in the client zone.
    pub fn presets(&self, today: Instant) -> Result<Vec<Preset>> {
        let zone = self.client_zone()?;
        self.presets
            .iter()
            .map(|spec| build_preset_range(spec, &zone, today))
            .collect()
    }

    /// Whether `candidate` may not be picked, given that it is `today` now.
    pub fn is_day_disabled(&self, today: Instant, candidate: Instant) -> Result<bool> {
        if !self.disable_past_days {
            return Ok(false);
        }
        is_before_civil_day(&self.client_zone()?, today, candidate)
    }

    /// Allowed times on `candidate`'s day as seen in the client zone.
    ///
    /// `None` when no window is configured. An inverted window means nothing is
    /// left to pick on that day.
    pub fn allowed_times_of_day(&self, reference: Instant, candidate: Instant) -> Result<Option<TimeOfDayBounds>> {
        let Some(bounds) = self.allowed_times else {
            return Ok(None);
        };
        adjust_time_of_day_bounds_across_zones(
            &self.base_zone()?,
            &self.client_zone()?,
            reference,
            candidate,
            bounds,
        )
        .map(Some)
    }

    /// Month grid in the client zone with disabled days marked.
    pub fn month_grid(&self, month_instant: Instant, today: Instant) -> Result<Vec<Vec<PickerDay>>> {
        let zone = self.client_zone()?;
        grid::month_grid(&zone, self.first_weekday, month_instant, |day| {
            Ok(self.disable_past_days && is_before_civil_day(&zone, today, day)?)
        })
    }
}
