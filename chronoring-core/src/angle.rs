//! Angle normalization for ring sweep angles.
//!
//! Ring progress is conventionally non-negative with the discontinuity at
//! 0/360 degrees (midnight, the top of the dial), so a single wrapping
//! convention suffices:
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Ring sweep angle | [0, 360) | [`wrap_0_360`] |
//! | Period fraction | [0, 1) turns | [`turns_to_degrees`] |
//!
//! # Algorithm Notes
//!
//! The wrap uses `libm::fmod` rather than the `%` operator because Rust's `%`
//! is a remainder, not a modulo: `-1.0 % 360.0` keeps the sign of the
//! dividend. After `fmod`, a negative result is shifted up by one turn.
//!
//! NaN inputs pass through unchanged, so an invalid instant propagates as
//! NaN-valued angles rather than a panic.

use crate::constants::DEGREES_PER_TURN;
use libm::fmod;

/// Wraps an angle to [0, 360) degrees.
///
/// # Examples
///
/// ```
/// use chronoring_core::angle::wrap_0_360;
///
/// assert_eq!(wrap_0_360(370.0), 10.0);
/// assert_eq!(wrap_0_360(-90.0), 270.0);
/// assert_eq!(wrap_0_360(360.0), 0.0);
/// ```
#[inline]
pub fn wrap_0_360(degrees: f64) -> f64 {
    let w = fmod(degrees, DEGREES_PER_TURN);
    if w < 0.0 {
        w + DEGREES_PER_TURN
    } else {
        w
    }
}

/// Converts a period fraction (in turns) to a wrapped sweep angle in degrees.
#[inline]
pub fn turns_to_degrees(turns: f64) -> f64 {
    wrap_0_360(turns * DEGREES_PER_TURN)
}
