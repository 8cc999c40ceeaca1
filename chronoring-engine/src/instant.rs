use chronoring_core::constants::{MILLIS_PER_SECOND_F64, NANOS_PER_MILLI_F64};
use std::fmt;

/// A point in time as milliseconds since the Unix epoch, UTC-based.
///
/// Stored as `f64` so sub-millisecond fractions from high-resolution clocks
/// survive, and so non-finite values can flow through the pipeline as NaN
/// angles instead of panics.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instant {
    millis: f64,
}

impl Instant {
    pub fn from_millis(millis: f64) -> Self {
        Self { millis }
    }

    /// From Unix seconds and nanoseconds (the `SystemTime` decomposition).
    pub fn from_unix_seconds(seconds: i64, nanos: u32) -> Self {
        Self {
            millis: seconds as f64 * MILLIS_PER_SECOND_F64 + nanos as f64 / NANOS_PER_MILLI_F64,
        }
    }

    pub fn unix_epoch() -> Self {
        Self { millis: 0.0 }
    }

    pub fn millis(&self) -> f64 {
        self.millis
    }

    pub fn add_millis(&self, millis: f64) -> Self {
        Self {
            millis: self.millis + millis,
        }
    }

    pub fn add_seconds(&self, seconds: f64) -> Self {
        self.add_millis(seconds * MILLIS_PER_SECOND_F64)
    }

    pub fn is_finite(&self) -> bool {
        self.millis.is_finite()
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} ms since epoch", self.millis)
    }
}

impl From<f64> for Instant {
    fn from(millis: f64) -> Self {
        Self::from_millis(millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_creation() {
        assert_eq!(Instant::unix_epoch().millis(), 0.0);
        assert_eq!(Instant::from_millis(1_500.5).millis(), 1_500.5);
        assert_eq!(Instant::from_unix_seconds(2, 500_000_000).millis(), 2_500.0);

        let from_trait: Instant = 42.0.into();
        assert_eq!(from_trait, Instant::from_millis(42.0));
    }

    #[test]
    fn test_arithmetic() {
        let t = Instant::from_millis(1_000.0);
        assert_eq!(t.add_millis(500.0).millis(), 1_500.0);
        assert_eq!(t.add_seconds(2.0).millis(), 3_000.0);
    }

    #[test]
    fn test_finiteness() {
        assert!(Instant::from_millis(0.0).is_finite());
        assert!(!Instant::from_millis(f64::NAN).is_finite());
        assert!(!Instant::from_millis(f64::INFINITY).is_finite());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let original = Instant::from_millis(1_718_459_400_123.456);
        let json = serde_json::to_string(&original).unwrap();
        let deserialized: Instant = serde_json::from_str(&json).unwrap();
        assert_eq!(original, deserialized);
    }
}
