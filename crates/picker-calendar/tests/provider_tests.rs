//! Tests running the engine against hand-written calendar providers.

use chrono::{DateTime, Duration, Utc};
use picker_calendar::{
    add, floor, format_date, CalendarError, CivilCalendar, CivilDateTime, DstPolicy, Instant,
    LocalResolution, Unit,
};

fn at(rfc3339: &str) -> Instant {
    rfc3339.parse::<DateTime<Utc>>().unwrap().into()
}

/// A constant whole-hour offset, no timezone database involved.
struct HourOffset(i64);

impl CivilCalendar for HourOffset {
    fn decompose(&self, instant: Instant) -> Result<CivilDateTime, CalendarError> {
        let local = instant.to_utc()?.naive_utc() + Duration::hours(self.0);
        Ok(CivilDateTime::from_naive(local))
    }

    fn resolve(&self, civil: &CivilDateTime) -> Result<LocalResolution, CalendarError> {
        let utc = civil.to_naive()? - Duration::hours(self.0);
        Ok(LocalResolution::Unique(utc.and_utc().into()))
    }
}

/// Every civil time is skipped; the gap always ends at `transition`.
struct AlwaysSkipped {
    transition: Instant,
    policy: DstPolicy,
}

impl CivilCalendar for AlwaysSkipped {
    fn decompose(&self, instant: Instant) -> Result<CivilDateTime, CalendarError> {
        Ok(CivilDateTime::from_naive(instant.to_utc()?.naive_utc()))
    }

    fn resolve(&self, _civil: &CivilDateTime) -> Result<LocalResolution, CalendarError> {
        Ok(LocalResolution::Skipped {
            transition: self.transition,
        })
    }

    fn policy(&self) -> DstPolicy {
        self.policy
    }
}

/// A provider whose rules cannot be loaded.
struct Unavailable;

impl CivilCalendar for Unavailable {
    fn decompose(&self, _instant: Instant) -> Result<CivilDateTime, CalendarError> {
        Err(CalendarError::Provider("zone rules unavailable".to_string()))
    }

    fn resolve(&self, _civil: &CivilDateTime) -> Result<LocalResolution, CalendarError> {
        Err(CalendarError::Provider("zone rules unavailable".to_string()))
    }
}

#[test]
fn custom_provider_drives_floor_and_add() {
    let zone = HourOffset(3);
    let t = at("2024-03-15T22:30:00Z"); // 01:30 on the 16th

    assert_eq!(floor(Unit::Day, &zone, t).unwrap(), at("2024-03-15T21:00:00Z"));
    assert_eq!(add(Unit::Month, 1, &zone, t).unwrap(), at("2024-04-15T22:30:00Z"));
    assert_eq!(format_date(&zone, t).unwrap(), "16.03.24");
}

#[test]
fn provider_can_be_used_as_trait_object() {
    let zone: &dyn CivilCalendar = &HourOffset(-2);
    assert_eq!(
        floor(Unit::Hour, zone, at("2024-03-15T10:59:00Z")).unwrap(),
        at("2024-03-15T10:00:00Z")
    );
}

#[test]
fn encode_applies_provider_policy_to_gaps() {
    let transition = at("2024-03-10T07:00:00Z");
    let civil = CivilDateTime::from_ymd(2024, 3, 10).unwrap().with_time(2, 30, 0, 0);

    let lenient = AlwaysSkipped {
        transition,
        policy: DstPolicy::Earliest,
    };
    assert_eq!(lenient.encode(&civil).unwrap(), transition);

    let strict = AlwaysSkipped {
        transition,
        policy: DstPolicy::Strict,
    };
    assert_eq!(
        strict.encode(&civil),
        Err(CalendarError::NonexistentLocalTime("2024-03-10T02:30:00.000".to_string()))
    );
}

#[test]
fn provider_failures_propagate_unchanged() {
    let expected = CalendarError::Provider("zone rules unavailable".to_string());
    assert_eq!(floor(Unit::Day, &Unavailable, Instant::EPOCH), Err(expected.clone()));
    assert_eq!(add(Unit::Day, 1, &Unavailable, Instant::EPOCH), Err(expected.clone()));
    assert_eq!(format_date(&Unavailable, Instant::EPOCH), Err(expected));
}

#[test]
fn invalid_civil_fields_are_rejected() {
    assert!(matches!(
        CivilDateTime::from_ymd(2023, 2, 29),
        Err(CalendarError::InvalidCivil(_))
    ));
}
