//! The temporal position engine.
//!
//! Converts sampled instants into ring sweep angles and display strings. The
//! engine holds its collaborators explicitly: an injected [`WallClock`]
//! source and a display timezone. Nothing here reaches for ambient state;
//! the host constructs the engine once and passes its outputs to the
//! renderer each frame.
//!
//! # Frame contract
//!
//! Sample once, derive everything from that sample:
//!
//! ```
//! use chronoring_engine::{TemporalPositionEngine, ViewMode};
//!
//! let engine = TemporalPositionEngine::with_timezone("UTC");
//! let instant = engine.now();
//! let progress = engine.ring_progress(instant, ViewMode::Year);
//! if progress.is_valid() {
//!     for (ring, angle) in progress.visible() {
//!         // hand (ring, angle) to the renderer
//!         assert!((0.0..360.0).contains(&angle), "{ring}");
//!     }
//! }
//! ```
//!
//! # Degraded timezone mode
//!
//! Timezone resolution failures are non-fatal: the engine logs a warning and
//! falls back to UTC, so a misconfigured host still renders a correct clock,
//! just not a local one.

use crate::civil::{civil_fields, CivilDateTime};
use crate::clock::{SystemClock, WallClock};
use crate::code::TemporalCode;
use crate::conventional::ConventionalTime;
use crate::instant::Instant;
use crate::rings::{RingProgress, ViewMode};
use crate::{EngineError, EngineResult};
use chrono_tz::Tz;
use log::{debug, warn};

/// Converts wall-clock instants into ring angles and display strings.
pub struct TemporalPositionEngine {
    clock: Box<dyn WallClock>,
    timezone: Tz,
    offset_millis: f64,
}

impl TemporalPositionEngine {
    /// Engine over an injected clock source in the given zone.
    pub fn new(clock: Box<dyn WallClock>, timezone: Tz) -> Self {
        debug!(
            "temporal engine on '{}' clock, display timezone {}",
            clock.name(),
            timezone.name()
        );
        Self {
            clock,
            timezone,
            offset_millis: 0.0,
        }
    }

    /// Engine on the system clock in a host-provided IANA zone.
    ///
    /// Unresolvable names degrade to UTC.
    pub fn with_timezone(name: &str) -> Self {
        Self::new(Box::new(SystemClock::new()), resolve_timezone(name))
    }

    /// Engine on the system clock in the system's zone.
    ///
    /// Detection failure degrades to UTC.
    pub fn with_local_timezone() -> Self {
        let timezone = match iana_time_zone::get_timezone() {
            Ok(name) => resolve_timezone(&name),
            Err(err) => {
                warn!("timezone detection failed ({}), falling back to UTC", err);
                Tz::UTC
            }
        };
        Self::new(Box::new(SystemClock::new()), timezone)
    }

    /// IANA name of the display timezone.
    pub fn timezone_name(&self) -> &'static str {
        self.timezone.name()
    }

    /// Current offset applied to every sampled instant.
    pub fn offset_millis(&self) -> f64 {
        self.offset_millis
    }

    /// Shifts every sampled instant, for tests and simulated clock skew.
    pub fn set_offset_millis(&mut self, offset_millis: f64) {
        self.offset_millis = offset_millis;
    }

    /// Current wall-clock instant with the offset applied. Never fails.
    pub fn now(&self) -> Instant {
        self.clock.now().add_millis(self.offset_millis)
    }

    /// Ring sweep angles for the instant.
    ///
    /// An invalid instant yields NaN angles throughout; callers skip the
    /// frame rather than render it.
    pub fn ring_progress(&self, instant: Instant, mode: ViewMode) -> RingProgress {
        match self.civil(instant) {
            Some(fields) => RingProgress::from_civil(&fields, mode)
                .unwrap_or_else(|_| RingProgress::invalid(mode)),
            None => RingProgress::invalid(mode),
        }
    }

    /// Compact calendar-position code for the instant.
    pub fn temporal_code(&self, instant: Instant) -> EngineResult<TemporalCode> {
        let fields = self
            .civil(instant)
            .ok_or(EngineError::InvalidInstant(instant.millis()))?;
        Ok(TemporalCode::from_civil(&fields)?)
    }

    /// Conventional date and 12-hour time strings for the instant.
    pub fn conventional_time(&self, instant: Instant) -> EngineResult<ConventionalTime> {
        let fields = self
            .civil(instant)
            .ok_or(EngineError::InvalidInstant(instant.millis()))?;
        Ok(ConventionalTime::from_civil(&fields))
    }

    fn civil(&self, instant: Instant) -> Option<CivilDateTime> {
        civil_fields(instant, self.timezone)
    }
}

impl Default for TemporalPositionEngine {
    fn default() -> Self {
        Self::with_local_timezone()
    }
}

fn resolve_timezone(name: &str) -> Tz {
    match name.parse::<Tz>() {
        Ok(timezone) => timezone,
        Err(_) => {
            warn!("unknown timezone '{}', falling back to UTC", name);
            Tz::UTC
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::rings::RingId;
    use chronoring_core::calendar::days_from_civil;
    use chronoring_core::constants::MILLIS_PER_DAY;

    fn utc_instant(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Instant {
        let days = days_from_civil(year, month, day);
        let millis = days * MILLIS_PER_DAY
            + (hour as i64 * 3_600 + minute as i64 * 60 + second as i64) * 1_000;
        Instant::from_millis(millis as f64)
    }

    fn utc_engine_at(instant: Instant) -> TemporalPositionEngine {
        TemporalPositionEngine::new(Box::new(FixedClock::new(instant)), Tz::UTC)
    }

    #[test]
    fn test_now_applies_offset() {
        let start = utc_instant(2025, 6, 15, 14, 30, 0);
        let mut engine = utc_engine_at(start);
        assert_eq!(engine.now(), start);

        engine.set_offset_millis(500.0);
        assert_eq!(engine.offset_millis(), 500.0);
        assert_eq!(engine.now(), start.add_millis(500.0));
    }

    #[test]
    fn test_temporal_code_vector() {
        let engine = TemporalPositionEngine::with_timezone("UTC");
        let code = engine
            .temporal_code(utc_instant(2025, 6, 15, 14, 30, 0))
            .unwrap();
        assert_eq!(code.as_str(), "Y25-H1-Q2-M06-W24-D7");
    }

    #[test]
    fn test_conventional_time_vectors() {
        let engine = TemporalPositionEngine::with_timezone("UTC");

        let midnight = engine
            .conventional_time(utc_instant(2025, 1, 1, 0, 0, 0))
            .unwrap();
        assert_eq!(midnight.date, "2025-01-01");
        assert_eq!(midnight.time, "12:00:00 AM");

        let afternoon = engine
            .conventional_time(utc_instant(2025, 1, 1, 13, 5, 9))
            .unwrap();
        assert_eq!(afternoon.time, "01:05:09 PM");
    }

    #[test]
    fn test_conventional_time_in_other_zone() {
        // 14:30 UTC on 2025-06-15 is 10:30 in New York (EDT)
        let engine = TemporalPositionEngine::with_timezone("America/New_York");
        let conventional = engine
            .conventional_time(utc_instant(2025, 6, 15, 14, 30, 0))
            .unwrap();
        assert_eq!(conventional.date, "2025-06-15");
        assert_eq!(conventional.time, "10:30:00 AM");
    }

    #[test]
    fn test_unknown_timezone_degrades_to_utc() {
        let engine = TemporalPositionEngine::with_timezone("Not/AZone");
        assert_eq!(engine.timezone_name(), "UTC");

        let conventional = engine
            .conventional_time(utc_instant(2025, 1, 1, 0, 0, 0))
            .unwrap();
        assert_eq!(conventional.date, "2025-01-01");
    }

    #[test]
    fn test_ring_progress_continuity() {
        // Mid-minute, mid-month: one millisecond never moves a ring backward
        let engine = TemporalPositionEngine::with_timezone("UTC");
        let t1 = utc_instant(2025, 6, 15, 14, 30, 30);
        let t2 = t1.add_millis(1.0);

        let p1 = engine.ring_progress(t1, ViewMode::Year);
        let p2 = engine.ring_progress(t2, ViewMode::Year);

        for ring in RingId::ALL {
            let a1 = p1.angle(ring);
            let a2 = p2.angle(ring);
            assert!(a2 >= a1, "{} moved backward: {} -> {}", ring, a1, a2);
            assert!(a2 - a1 < 0.5, "{} jumped: {} -> {}", ring, a1, a2);
        }
    }

    #[test]
    fn test_milliseconds_ring_wraps_each_second() {
        let engine = TemporalPositionEngine::with_timezone("UTC");
        let just_before = utc_instant(2025, 6, 15, 14, 30, 30).add_millis(999.0);
        let at_second = utc_instant(2025, 6, 15, 14, 30, 31);

        let before = engine.ring_progress(just_before, ViewMode::Year);
        let after = engine.ring_progress(at_second, ViewMode::Year);

        assert!(before.angle(RingId::Milliseconds) > 359.0);
        assert_eq!(after.angle(RingId::Milliseconds), 0.0);
    }

    #[test]
    fn test_seconds_ring_wraps_each_minute() {
        let engine = TemporalPositionEngine::with_timezone("UTC");
        let just_before = utc_instant(2025, 6, 15, 14, 30, 59).add_millis(999.0);
        let at_minute = utc_instant(2025, 6, 15, 14, 31, 0);

        let before = engine.ring_progress(just_before, ViewMode::Year);
        let after = engine.ring_progress(at_minute, ViewMode::Year);

        assert!(before.angle(RingId::Seconds) > 359.9);
        assert_eq!(after.angle(RingId::Seconds), 0.0);
    }

    #[test]
    fn test_ring_progress_is_idempotent() {
        let engine = TemporalPositionEngine::with_timezone("UTC");
        let instant = utc_instant(2025, 6, 15, 14, 30, 0).add_millis(123.25);

        let a = engine.ring_progress(instant, ViewMode::Day);
        let b = engine.ring_progress(instant, ViewMode::Day);

        for ring in RingId::ALL {
            assert_eq!(a.angle(ring).to_bits(), b.angle(ring).to_bits());
        }
    }

    #[test]
    fn test_invalid_instant_skips_frame() {
        let engine = TemporalPositionEngine::with_timezone("UTC");
        let bad = Instant::from_millis(f64::NAN);

        let progress = engine.ring_progress(bad, ViewMode::Year);
        assert!(!progress.is_valid());

        assert!(matches!(
            engine.temporal_code(bad),
            Err(EngineError::InvalidInstant(_))
        ));
        assert!(matches!(
            engine.conventional_time(bad),
            Err(EngineError::InvalidInstant(_))
        ));
    }

    #[test]
    fn test_leap_day_ring_progress() {
        let engine = TemporalPositionEngine::with_timezone("UTC");
        // Noon on 2024-02-29: 28.5 of 29 days through February
        let progress = engine.ring_progress(utc_instant(2024, 2, 29, 12, 0, 0), ViewMode::Year);

        let expected = 28.5 / 29.0 * 360.0;
        assert!((progress.angle(RingId::Days) - expected).abs() < 1e-9);
        assert!(progress.is_valid());
    }
}
