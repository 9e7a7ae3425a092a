//! # picker-calendar
//!
//! Timezone-aware calendar arithmetic behind a datetime picker widget.
//!
//! The picker's rendering layer lives elsewhere; this crate answers the questions
//! it asks about time: where does this day or month start, what is one month
//! later, is this day in the past, how is the allowed time window shown in the
//! viewer's zone, and what do the "Today" / "This month" presets cover. Every
//! operation is a pure function of an [`Instant`] and a [`CivilCalendar`].
//!
//! ## Modules
//!
//! - [`instant`] — epoch-millisecond instants and their ordering
//! - [`civil`] — civil fields and interval units
//! - [`zone`] — civil calendar providers over `chrono` / `chrono-tz`
//! - [`dst`] — disambiguation of skipped and repeated civil times
//! - [`arithmetic`] — floor, add and civil-day comparisons
//! - [`format`] — `DD.MM.YY` and `HH:MM:SS` labels
//! - [`range`] — ordered date ranges
//! - [`preset`] — named range shortcuts
//! - [`bounds`] — allowed time-of-day windows across zones
//! - [`grid`] — month grids for the calendar view
//! - [`settings`] — JSON picker configuration
//! - [`error`] — Error types

pub mod arithmetic;
pub mod bounds;
pub mod civil;
pub mod dst;
pub mod error;
pub mod format;
pub mod grid;
pub mod instant;
pub mod preset;
pub mod range;
pub mod settings;
pub mod zone;

pub use arithmetic::{add, floor, is_before_civil_day, is_same_civil_day};
pub use bounds::{adjust_time_of_day_bounds_across_zones, snap_to_bounds, TimeOfDayBounds};
pub use civil::{CivilDateTime, Unit};
pub use dst::{DstPolicy, LocalResolution};
pub use error::CalendarError;
pub use format::{format_date, format_date_time, format_time};
pub use grid::{month_grid, PickerDay};
pub use instant::{compare, Instant};
pub use preset::{build_preset_range, default_presets, Preset, PresetEnd, PresetSpec};
pub use range::DateRange;
pub use settings::PickerSettings;
pub use zone::{CivilCalendar, Zone};
