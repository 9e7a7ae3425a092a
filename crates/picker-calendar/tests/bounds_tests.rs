//! Tests for allowed time-of-day windows.

use chrono::{DateTime, Utc};
use picker_calendar::{
    adjust_time_of_day_bounds_across_zones, snap_to_bounds, CalendarError, Instant,
    TimeOfDayBounds, Zone,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn at(rfc3339: &str) -> Instant {
    rfc3339.parse::<DateTime<Utc>>().unwrap().into()
}

fn est() -> Zone<chrono::FixedOffset> {
    Zone::fixed(-5 * 3600).unwrap()
}

fn mst() -> Zone<chrono::FixedOffset> {
    Zone::fixed(-7 * 3600).unwrap()
}

fn office_hours() -> TimeOfDayBounds {
    TimeOfDayBounds::new(8, 0, 17, 30).unwrap()
}

// ── Cross-zone adjustment ───────────────────────────────────────────────────

#[test]
fn other_day_is_shifted_unclamped() {
    let reference = at("2024-03-15T14:00:00Z"); // 07:00 MST
    let candidate = at("2024-03-20T18:00:00Z");

    let bounds =
        adjust_time_of_day_bounds_across_zones(&est(), &mst(), reference, candidate, office_hours()).unwrap();

    assert_eq!(bounds, TimeOfDayBounds::new(6, 0, 15, 30).unwrap());
}

#[test]
fn today_start_clamps_to_reference_time() {
    let reference = at("2024-03-15T14:00:00Z"); // 07:00 MST
    let candidate = at("2024-03-15T18:00:00Z"); // 11:00 MST, same day

    let bounds =
        adjust_time_of_day_bounds_across_zones(&est(), &mst(), reference, candidate, office_hours()).unwrap();

    assert_eq!(bounds.start(), (7, 0));
    assert_eq!(bounds.end(), (15, 30));
}

#[test]
fn today_before_window_start_is_not_clamped() {
    let reference = at("2024-03-15T12:00:00Z"); // 05:00 MST
    let candidate = at("2024-03-15T18:00:00Z");

    let bounds =
        adjust_time_of_day_bounds_across_zones(&est(), &mst(), reference, candidate, office_hours()).unwrap();

    assert_eq!(bounds.start(), (6, 0));
}

#[test]
fn today_past_window_end_is_inverted() {
    let reference = at("2024-03-15T23:00:00Z"); // 16:00 MST
    let candidate = at("2024-03-15T18:00:00Z");

    let bounds =
        adjust_time_of_day_bounds_across_zones(&est(), &mst(), reference, candidate, office_hours()).unwrap();

    assert_eq!(bounds.start(), (16, 0));
    assert_eq!(bounds.end(), (15, 30));
    assert!(bounds.is_inverted());
    assert!(bounds.selectable_hours().is_empty());
}

#[test]
fn projection_depends_on_dst_of_the_day() {
    // Phoenix has no DST; New York does.
    let base = Zone::named("America/New_York").unwrap();
    let client = Zone::named("America/Phoenix").unwrap();
    let reference = at("2024-01-01T12:00:00Z");

    let winter =
        adjust_time_of_day_bounds_across_zones(&base, &client, reference, at("2024-01-15T17:00:00Z"), office_hours())
            .unwrap();
    let summer =
        adjust_time_of_day_bounds_across_zones(&base, &client, reference, at("2024-07-15T17:00:00Z"), office_hours())
            .unwrap();

    assert_eq!(winter, TimeOfDayBounds::new(6, 0, 15, 30).unwrap());
    assert_eq!(summer, TimeOfDayBounds::new(5, 0, 14, 30).unwrap());
}

#[test]
fn same_zone_is_identity() {
    let zone = Zone::utc();
    let bounds = adjust_time_of_day_bounds_across_zones(
        &zone,
        &zone,
        at("2024-03-01T00:00:00Z"),
        at("2024-03-15T00:00:00Z"),
        office_hours(),
    )
    .unwrap();
    assert_eq!(bounds, office_hours());
}

// ── Window helpers ──────────────────────────────────────────────────────────

#[test]
fn new_rejects_bad_windows() {
    assert!(matches!(
        TimeOfDayBounds::new(18, 0, 8, 0),
        Err(CalendarError::InvalidBounds(_))
    ));
    assert!(matches!(
        TimeOfDayBounds::new(8, 60, 17, 0),
        Err(CalendarError::InvalidBounds(_))
    ));
    assert!(matches!(
        TimeOfDayBounds::new(8, 0, 24, 0),
        Err(CalendarError::InvalidBounds(_))
    ));
}

#[test]
fn selectable_hours_and_minutes() {
    let bounds = TimeOfDayBounds::new(8, 45, 10, 15).unwrap();

    assert_eq!(bounds.selectable_hours(), vec![8, 9, 10]);
    assert_eq!(bounds.selectable_minutes(8), (45..=59u32).collect::<Vec<_>>());
    assert_eq!(bounds.selectable_minutes(9).len(), 60);
    assert_eq!(bounds.selectable_minutes(10), (0..=15u32).collect::<Vec<_>>());
    assert!(bounds.selectable_minutes(11).is_empty());
}

#[test]
fn contains_is_inclusive() {
    let bounds = office_hours();
    assert!(bounds.contains(8, 0));
    assert!(bounds.contains(17, 30));
    assert!(!bounds.contains(7, 59));
    assert!(!bounds.contains(17, 31));
    assert!(TimeOfDayBounds::all_day().contains(23, 59));
}

#[test]
fn display_is_hh_mm_range() {
    assert_eq!(office_hours().to_string(), "08:00-17:30");
}

#[test]
fn snap_moves_outside_times_to_window_start() {
    let zone = Zone::utc();
    let bounds = office_hours();

    let inside = at("2024-03-15T12:34:56Z");
    assert_eq!(snap_to_bounds(&zone, inside, bounds).unwrap(), Some(inside));

    let early = at("2024-03-15T06:10:00Z");
    assert_eq!(
        snap_to_bounds(&zone, early, bounds).unwrap(),
        Some(at("2024-03-15T08:00:00Z"))
    );

    let late = at("2024-03-15T21:00:00Z");
    assert_eq!(
        snap_to_bounds(&zone, late, bounds).unwrap(),
        Some(at("2024-03-15T08:00:00Z"))
    );
}

#[test]
fn snap_with_inverted_window_has_no_result() {
    let inverted = TimeOfDayBounds {
        start_hour: 16,
        start_minute: 0,
        end_hour: 15,
        end_minute: 30,
    };
    assert_eq!(
        snap_to_bounds(&Zone::utc(), at("2024-03-15T12:00:00Z"), inverted).unwrap(),
        None
    );
}
