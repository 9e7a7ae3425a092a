//! WASM bindings for picker-calendar.
//!
//! Exposes floors, offsets, labels, presets, disabled days, allowed times and
//! month grids to the JavaScript picker widget via `wasm-bindgen`. Instants cross
//! the boundary as epoch milliseconds (`Date.getTime()`); settings and structured
//! results cross as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p picker-calendar-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/picker-calendar-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/picker_calendar_wasm.wasm
//! ```

use picker_calendar::error::Result;
use picker_calendar::{CalendarError, Instant, PickerDay, PickerSettings, Preset, TimeOfDayBounds, Unit, Zone};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct PresetDto {
    label: String,
    start: i64,
    end: i64,
}

impl From<&Preset> for PresetDto {
    fn from(p: &Preset) -> Self {
        Self {
            label: p.label.clone(),
            start: p.range.start().as_millis(),
            end: p.range.end().as_millis(),
        }
    }
}

#[derive(Serialize)]
struct AllowedTimesDto {
    start_hour: u32,
    start_minute: u32,
    end_hour: u32,
    end_minute: u32,
    /// Every hour with at least one selectable minute; empty when nothing is left.
    hours: Vec<u32>,
}

impl From<TimeOfDayBounds> for AllowedTimesDto {
    fn from(b: TimeOfDayBounds) -> Self {
        Self {
            start_hour: b.start_hour,
            start_minute: b.start_minute,
            end_hour: b.end_hour,
            end_minute: b.end_minute,
            hours: b.selectable_hours(),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Convert a JavaScript millisecond timestamp into an `Instant`.
fn instant(millis: f64) -> Result<Instant> {
    if !millis.is_finite() || millis.abs() > 8.64e15 {
        return Err(CalendarError::InvalidTimestamp(format!("{millis} ms")));
    }
    Ok(Instant::from_millis(millis.trunc() as i64))
}

fn millis(instant: Instant) -> f64 {
    instant.as_millis() as f64
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| CalendarError::Provider(format!("Serialization error: {}", e)))
}

fn js_err(e: CalendarError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// ---------------------------------------------------------------------------
// Native implementations (testable without a JS host)
// ---------------------------------------------------------------------------

fn floor_impl(unit: &str, timezone: &str, at: f64) -> Result<f64> {
    let unit: Unit = unit.parse()?;
    picker_calendar::floor(unit, &Zone::named(timezone)?, instant(at)?).map(millis)
}

fn add_impl(unit: &str, n: i32, timezone: &str, at: f64) -> Result<f64> {
    let unit: Unit = unit.parse()?;
    picker_calendar::add(unit, i64::from(n), &Zone::named(timezone)?, instant(at)?).map(millis)
}

fn format_date_impl(timezone: &str, at: f64) -> Result<String> {
    picker_calendar::format_date(&Zone::named(timezone)?, instant(at)?)
}

fn format_time_impl(timezone: &str, at: f64) -> Result<String> {
    picker_calendar::format_time(&Zone::named(timezone)?, instant(at)?)
}

fn presets_impl(settings_json: &str, today: f64) -> Result<String> {
    let settings = PickerSettings::from_json(settings_json)?;
    let dtos: Vec<PresetDto> = settings.presets(instant(today)?)?.iter().map(PresetDto::from).collect();
    to_json(&dtos)
}

fn is_day_disabled_impl(settings_json: &str, today: f64, candidate: f64) -> Result<bool> {
    PickerSettings::from_json(settings_json)?.is_day_disabled(instant(today)?, instant(candidate)?)
}

fn allowed_times_impl(settings_json: &str, now: f64, candidate: f64) -> Result<String> {
    let bounds = PickerSettings::from_json(settings_json)?.allowed_times_of_day(instant(now)?, instant(candidate)?)?;
    to_json(&bounds.map(AllowedTimesDto::from))
}

fn month_grid_impl(settings_json: &str, month: f64, today: f64) -> Result<String> {
    let weeks: Vec<Vec<PickerDay>> =
        PickerSettings::from_json(settings_json)?.month_grid(instant(month)?, instant(today)?)?;
    to_json(&weeks)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Start of the `unit` ("year", "month", "day", "hour", "minute", "second")
/// containing `at` in the IANA zone `timezone`.
#[wasm_bindgen(js_name = "floor")]
pub fn floor(unit: &str, timezone: &str, at: f64) -> std::result::Result<f64, JsValue> {
    floor_impl(unit, timezone, at).map_err(js_err)
}

/// `at` plus `n` units in `timezone`; month steps clamp the day of month.
#[wasm_bindgen(js_name = "add")]
pub fn add(unit: &str, n: i32, timezone: &str, at: f64) -> std::result::Result<f64, JsValue> {
    add_impl(unit, n, timezone, at).map_err(js_err)
}

/// `"DD.MM.YY"` label of `at` in `timezone`.
#[wasm_bindgen(js_name = "formatDate")]
pub fn format_date(timezone: &str, at: f64) -> std::result::Result<String, JsValue> {
    format_date_impl(timezone, at).map_err(js_err)
}

/// `"HH:MM:SS"` label of `at` in `timezone`.
#[wasm_bindgen(js_name = "formatTime")]
pub fn format_time(timezone: &str, at: f64) -> std::result::Result<String, JsValue> {
    format_time_impl(timezone, at).map_err(js_err)
}

/// Resolve the configured presets against `today`.
///
/// Returns a JSON array of `{label, start, end}` objects (epoch milliseconds).
#[wasm_bindgen(js_name = "presets")]
pub fn presets(settings_json: &str, today: f64) -> std::result::Result<String, JsValue> {
    presets_impl(settings_json, today).map_err(js_err)
}

/// Whether `candidate`'s day is disabled given the settings and `today`.
#[wasm_bindgen(js_name = "isDayDisabled")]
pub fn is_day_disabled(settings_json: &str, today: f64, candidate: f64) -> std::result::Result<bool, JsValue> {
    is_day_disabled_impl(settings_json, today, candidate).map_err(js_err)
}

/// Allowed times on `candidate`'s day in the client zone.
///
/// Returns `"null"` when no window is configured, otherwise a JSON object with
/// `start_hour`, `start_minute`, `end_hour`, `end_minute` and `hours`. An empty
/// `hours` array means no time is left on that day.
#[wasm_bindgen(js_name = "allowedTimesOfDay")]
pub fn allowed_times_of_day(settings_json: &str, now: f64, candidate: f64) -> std::result::Result<String, JsValue> {
    allowed_times_impl(settings_json, now, candidate).map_err(js_err)
}

/// Weeks of `{start, end, in_month, disabled}` cells covering `month`'s month.
#[wasm_bindgen(js_name = "monthGrid")]
pub fn month_grid(settings_json: &str, month: f64, today: f64) -> std::result::Result<String, JsValue> {
    month_grid_impl(settings_json, month, today).map_err(js_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-03-15T10:00:00Z
    const TODAY: f64 = 1_710_496_800_000.0;

    #[test]
    fn floor_and_add_in_named_zone() {
        assert_eq!(floor_impl("day", "UTC", TODAY).unwrap(), 1_710_460_800_000.0);
        assert_eq!(add_impl("Day", -1, "UTC", TODAY).unwrap(), TODAY - 86_400_000.0);
    }

    #[test]
    fn labels() {
        assert_eq!(format_date_impl("UTC", 0.0).unwrap(), "01.01.70");
        assert_eq!(format_time_impl("UTC", 0.0).unwrap(), "00:00:00");
    }

    #[test]
    fn bad_inputs_are_errors() {
        assert_eq!(
            floor_impl("fortnight", "UTC", TODAY),
            Err(CalendarError::InvalidUnit("fortnight".to_string()))
        );
        assert_eq!(
            floor_impl("day", "Nowhere/Special", TODAY),
            Err(CalendarError::InvalidTimezone("Nowhere/Special".to_string()))
        );
        assert_eq!(
            floor_impl("day", "UTC", f64::NAN),
            Err(CalendarError::InvalidTimestamp("NaN ms".to_string()))
        );
        assert_eq!(
            floor_impl("day", "UTC", f64::INFINITY),
            Err(CalendarError::InvalidTimestamp("inf ms".to_string()))
        );
    }

    #[test]
    fn presets_as_json() {
        let json = presets_impl("{}", TODAY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["label"], "Today");
        assert_eq!(value[0]["start"], 1_710_460_800_000i64);
        assert_eq!(value[1]["end"], 1_711_843_200_000i64); // 2024-03-31
    }

    #[test]
    fn allowed_times_as_json() {
        assert_eq!(allowed_times_impl("{}", TODAY, TODAY).unwrap(), "null");

        let settings = r#"{"allowed_times": {"start_hour": 8, "start_minute": 0, "end_hour": 9, "end_minute": 0}}"#;
        let json = allowed_times_impl(settings, TODAY, TODAY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        // 10:00 is past the whole window.
        assert_eq!(value["start_hour"], 10);
        assert_eq!(value["hours"], serde_json::json!([]));
    }

    #[test]
    fn disabled_days_and_grid() {
        let settings = r#"{"disable_past_days": true}"#;
        assert!(is_day_disabled_impl(settings, TODAY, TODAY - 86_400_000.0).unwrap());
        assert!(!is_day_disabled_impl(settings, TODAY, TODAY).unwrap());

        let json = month_grid_impl(settings, TODAY, TODAY).unwrap();
        let weeks: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(weeks.as_array().unwrap().len(), 5);
        assert_eq!(weeks[0][0]["disabled"], true);
    }
}
