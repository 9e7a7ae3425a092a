//! Civil calendar providers.
//!
//! The engine only ever talks to a [`CivilCalendar`]: decompose an instant into
//! civil fields, resolve civil fields back to instants. [`Zone`] implements it for
//! any `chrono` timezone, including IANA zones from `chrono-tz`. Tests can supply
//! their own provider without a timezone database.

use chrono::{DateTime, FixedOffset, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::civil::CivilDateTime;
use crate::dst::{DstPolicy, LocalResolution};
use crate::error::{CalendarError, Result};
use crate::instant::Instant;

/// Maps instants to civil fields and back.
pub trait CivilCalendar {
    /// Civil fields of `instant` in this zone.
    fn decompose(&self, instant: Instant) -> Result<CivilDateTime>;

    /// Every instant `civil` can denote in this zone.
    fn resolve(&self, civil: &CivilDateTime) -> Result<LocalResolution>;

    fn policy(&self) -> DstPolicy {
        DstPolicy::default()
    }

    /// Resolve `civil` and disambiguate with [`policy`](Self::policy).
    fn encode(&self, civil: &CivilDateTime) -> Result<Instant> {
        let policy = self.policy();
        match self.resolve(civil)? {
            LocalResolution::Unique(instant) => Ok(instant),
            LocalResolution::Ambiguous { earlier, later } => match policy {
                DstPolicy::Earliest => {
                    tracing::debug!(civil = %civil.describe(), %earlier, "ambiguous civil time; using earlier");
                    Ok(earlier)
                }
                DstPolicy::Latest => {
                    tracing::debug!(civil = %civil.describe(), %later, "ambiguous civil time; using later");
                    Ok(later)
                }
                DstPolicy::Strict => {
                    tracing::warn!(civil = %civil.describe(), "ambiguous civil time rejected");
                    Err(CalendarError::AmbiguousLocalTime(civil.describe()))
                }
            },
            LocalResolution::Skipped { transition } => match policy {
                DstPolicy::Strict => {
                    tracing::warn!(civil = %civil.describe(), "nonexistent civil time rejected");
                    Err(CalendarError::NonexistentLocalTime(civil.describe()))
                }
                DstPolicy::Earliest | DstPolicy::Latest => {
                    tracing::debug!(civil = %civil.describe(), %transition, "nonexistent civil time; using end of gap");
                    Ok(transition)
                }
            },
        }
    }
}

impl<C: CivilCalendar + ?Sized> CivilCalendar for &C {
    fn decompose(&self, instant: Instant) -> Result<CivilDateTime> {
        (**self).decompose(instant)
    }

    fn resolve(&self, civil: &CivilDateTime) -> Result<LocalResolution> {
        (**self).resolve(civil)
    }

    fn policy(&self) -> DstPolicy {
        (**self).policy()
    }

    fn encode(&self, civil: &CivilDateTime) -> Result<Instant> {
        (**self).encode(civil)
    }
}

/// A `chrono` timezone paired with a DST policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone<Z: TimeZone> {
    tz: Z,
    policy: DstPolicy,
}

impl<Z: TimeZone> Zone<Z> {
    pub fn new(tz: Z) -> Self {
        Self {
            tz,
            policy: DstPolicy::default(),
        }
    }

    pub fn with_policy(self, policy: DstPolicy) -> Self {
        Self { policy, ..self }
    }
}

impl Zone<Utc> {
    pub fn utc() -> Self {
        Self::new(Utc)
    }
}

impl Zone<FixedOffset> {
    /// A zone with a constant offset east of UTC.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidTimezone` if the offset is not within ±24h.
    pub fn fixed(offset_seconds: i32) -> Result<Self> {
        FixedOffset::east_opt(offset_seconds)
            .map(Self::new)
            .ok_or_else(|| CalendarError::InvalidTimezone(format!("offset {offset_seconds}s")))
    }
}

impl Zone<Tz> {
    /// An IANA zone such as `"America/Denver"`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidTimezone` if the identifier is unknown.
    pub fn named(name: &str) -> Result<Self> {
        name.parse::<Tz>()
            .map(Self::new)
            .map_err(|_| CalendarError::InvalidTimezone(name.to_string()))
    }
}

impl<Z: TimeZone> CivilCalendar for Zone<Z> {
    fn decompose(&self, instant: Instant) -> Result<CivilDateTime> {
        let utc = instant.to_utc()?;
        Ok(CivilDateTime::from_naive(
            utc.with_timezone(&self.tz).naive_local(),
        ))
    }

    fn resolve(&self, civil: &CivilDateTime) -> Result<LocalResolution> {
        let naive = civil.to_naive()?;
        match self.tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) => Ok(LocalResolution::Unique(to_instant(&dt))),
            LocalResult::Ambiguous(a, b) => {
                let (a, b) = (to_instant(&a), to_instant(&b));
                Ok(LocalResolution::Ambiguous {
                    earlier: a.min(b),
                    later: a.max(b),
                })
            }
            LocalResult::None => Ok(LocalResolution::Skipped {
                transition: self.gap_end(naive)?,
            }),
        }
    }

    fn policy(&self) -> DstPolicy {
        self.policy
    }
}

impl<Z: TimeZone> Zone<Z> {
    /// First instant after the gap containing `naive`.
    ///
    /// The transition lies between `naive - offset_after` (still before the gap)
    /// and `naive - offset_before` (already after it). Offsets are sampled a day
    /// either side, then the switch is located by bisection on whole seconds.
    fn gap_end(&self, naive: NaiveDateTime) -> Result<Instant> {
        let out_of_range = || CalendarError::InvalidCivil(naive.to_string());
        let day = chrono::Duration::days(1);
        let before = self.offset_seconds_at(naive.checked_sub_signed(day).ok_or_else(out_of_range)?);
        let after = self.offset_seconds_at(naive.checked_add_signed(day).ok_or_else(out_of_range)?);

        let local_secs = naive.and_utc().timestamp();
        // lo is before the transition, hi is at or after it.
        let mut lo = local_secs - i64::from(after);
        let mut hi = local_secs - i64::from(before);
        if lo >= hi {
            return Err(CalendarError::Provider(format!(
                "no gap found around {naive}"
            )));
        }
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            let at_mid = DateTime::<Utc>::from_timestamp(mid, 0).ok_or_else(out_of_range)?;
            if self.tz.offset_from_utc_datetime(&at_mid.naive_utc()).fix().local_minus_utc() == after {
                hi = mid;
            } else {
                lo = mid;
            }
        }
        hi.checked_mul(1000)
            .map(Instant::from_millis)
            .ok_or(CalendarError::OutOfRange(hi))
    }

    /// UTC offset in effect at the instant whose UTC wall clock reads `naive_utc`.
    fn offset_seconds_at(&self, naive_utc: NaiveDateTime) -> i32 {
        self.tz.offset_from_utc_datetime(&naive_utc).fix().local_minus_utc()
    }
}

fn to_instant<Z: TimeZone>(dt: &DateTime<Z>) -> Instant {
    Instant::from_millis(dt.timestamp_millis())
}
