//! Wall-clock sources for the engine.
//!
//! The engine never reads the host clock directly; it is handed a
//! [`WallClock`] at construction. [`SystemClock`] is the production source,
//! [`FixedClock`] the deterministic test double.
//!
//! # Monotonic reconciliation
//!
//! Frame loops want per-frame samples that never run backward, but
//! `SystemTime` may step when the host clock is adjusted. [`SystemClock`]
//! therefore samples the wall clock once at construction and advances that
//! anchor by monotonic elapsed time.

use crate::instant::Instant;
use chronoring_core::constants::MILLIS_PER_SECOND_F64;
use log::debug;
use std::sync::RwLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of wall-clock instants.
pub trait WallClock: Send + Sync {
    /// Current wall-clock time.
    fn now(&self) -> Instant;

    /// Identifier for diagnostics.
    fn name(&self) -> &str;
}

/// System clock: a wall-clock anchor advanced by a monotonic counter.
pub struct SystemClock {
    wall_anchor_millis: f64,
    monotonic_anchor: std::time::Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        let wall = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let clock = Self {
            wall_anchor_millis: wall.as_secs_f64() * MILLIS_PER_SECOND_F64,
            monotonic_anchor: std::time::Instant::now(),
        };
        debug!("system clock anchored at {:.3} ms", clock.wall_anchor_millis);
        clock
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock for SystemClock {
    fn now(&self) -> Instant {
        let elapsed_millis = self.monotonic_anchor.elapsed().as_secs_f64() * MILLIS_PER_SECOND_F64;
        Instant::from_millis(self.wall_anchor_millis + elapsed_millis)
    }

    fn name(&self) -> &str {
        "system"
    }
}

/// Settable clock for tests and simulated playback.
pub struct FixedClock {
    millis: RwLock<f64>,
}

impl FixedClock {
    pub fn new(instant: Instant) -> Self {
        Self {
            millis: RwLock::new(instant.millis()),
        }
    }

    pub fn set(&self, instant: Instant) {
        *self
            .millis
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = instant.millis();
    }

    pub fn advance_millis(&self, millis: f64) {
        *self
            .millis
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) += millis;
    }
}

impl WallClock for FixedClock {
    fn now(&self) -> Instant {
        Instant::from_millis(
            *self
                .millis
                .read()
                .unwrap_or_else(|poisoned| poisoned.into_inner()),
        )
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_system_clock_advances() {
        let clock = SystemClock::new();
        let t1 = clock.now();
        thread::sleep(Duration::from_millis(10));
        let t2 = clock.now();

        assert!(t2 > t1);
        assert!(t2.millis() - t1.millis() >= 9.0);
    }

    #[test]
    fn test_system_clock_is_plausible() {
        // Well after 2020-01-01 and finite
        let now = SystemClock::new().now();
        assert!(now.is_finite());
        assert!(now.millis() > 1_577_836_800_000.0);
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::new(Instant::from_millis(1_000.0));
        assert_eq!(clock.now().millis(), 1_000.0);

        clock.advance_millis(16.0);
        assert_eq!(clock.now().millis(), 1_016.0);

        clock.set(Instant::unix_epoch());
        assert_eq!(clock.now().millis(), 0.0);
        assert_eq!(clock.name(), "fixed");
    }
}
