//! Proleptic Gregorian calendar arithmetic.
//!
//! Pure integer functions relating civil dates (year, month, day) to day
//! counts, weekday indices, and ISO-8601 week numbers. Everything here is
//! deterministic and free of clock or timezone access; the engine crate feeds
//! it civil fields extracted in a display timezone.
//!
//! # Conventions
//!
//! | Quantity | Convention |
//! |----------|------------|
//! | month | 1-12 |
//! | day | 1-31 |
//! | day count | days since 1970-01-01 (can be negative) |
//! | weekday | ISO index, 0 = Monday .. 6 = Sunday |
//! | ISO week | 1-52 or 1-53, per ISO-8601 |
//! | day of year | 1-based, Jan 1 = 1 |
//!
//! # Day-count algorithms
//!
//! Civil-to-day-count uses the standard integer formula for Gregorian
//! calendar to Julian Day Number (the ERFA `eraCal2jd` convention), expressed
//! as a Modified Julian Date and rebased to the Unix epoch. The inverse is
//! the Fliegel-Van Flandern decomposition. Both are exact over the full
//! `i32` year range.
//!
//! # ISO week numbers
//!
//! [`iso_week_number`] shifts the date to the Thursday of its ISO week; that
//! Thursday's calendar year owns the week, and weeks are counted from the
//! year's first Thursday. [`weeks_in_year`] is the ISO week number of
//! December 31, with one correction: if December 31 already belongs to week 1
//! of the following year, the year counts 52 weeks.

use crate::constants::{UNIX_EPOCH_ISO_WEEKDAY, UNIX_EPOCH_JDN, UNIX_EPOCH_MJD};
use crate::errors::{CalendarError, CalendarResult};

/// Cumulative days before each month in a common year.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Gregorian leap year rule.
///
/// ```
/// use chronoring_core::calendar::is_leap_year;
///
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(2024));
/// assert!(!is_leap_year(2023));
/// ```
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0) && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the given year (365 or 366).
#[inline]
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Number of days in the given month, validating the month index.
pub fn days_in_month(year: i32, month: u32) -> CalendarResult<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 => {
            if is_leap_year(year) {
                Ok(29)
            } else {
                Ok(28)
            }
        }
        _ => Err(CalendarError::invalid_date(
            year,
            month,
            1,
            "month out of range",
        )),
    }
}

/// The calendar day following the given one, rolling over month and year ends.
pub fn next_calendar_day(year: i32, month: u32, day: u32) -> CalendarResult<(i32, u32, u32)> {
    let days_in_month = days_in_month(year, month)?;

    if day < days_in_month {
        Ok((year, month, day + 1))
    } else if month < 12 {
        Ok((year, month + 1, 1))
    } else {
        Ok((year + 1, 1, 1))
    }
}

/// 1-based ordinal day of the year (Jan 1 = 1, Dec 31 = 365/366).
pub fn day_of_year(year: i32, month: u32, day: u32) -> CalendarResult<u32> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::invalid_date(
            year,
            month,
            day,
            "month out of range",
        ));
    }

    let leap_shift = if month > 2 && is_leap_year(year) { 1 } else { 0 };
    Ok(DAYS_BEFORE_MONTH[(month - 1) as usize] + day + leap_shift)
}

/// Days since 1970-01-01 for a civil date (negative before the epoch).
///
/// Algorithm matches the ERFA `eraCal2jd` convention: a Modified Julian Date
/// is computed by integer arithmetic and rebased to the Unix epoch. Out-of-
/// range month/day inputs are not validated here; callers validate first.
pub fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let month = month as i64;
    let day = day as i64;
    let my = (month - 14) / 12;
    let iypmy = year as i64 + my;

    let mjd = (1461 * (iypmy + 4800)) / 4 + (367 * (month - 2 - 12 * my)) / 12
        - (3 * ((iypmy + 4900) / 100)) / 4
        + day
        - 2_432_076;

    mjd - UNIX_EPOCH_MJD
}

/// Civil date for a day count (inverse of [`days_from_civil`]).
///
/// Fliegel-Van Flandern integer decomposition of the Julian Day Number.
pub fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let mut l = days + UNIX_EPOCH_JDN + 68_569;
    let n = (4 * l) / 146_097;
    l -= (146_097 * n + 3) / 4;
    let i = (4_000 * (l + 1)) / 1_461_001;
    l -= (1_461 * i) / 4 - 31;
    let k = (80 * l) / 2_447;
    let day = (l - (2_447 * k) / 80) as u32;
    let l = k / 11;
    let month = (k + 2 - 12 * l) as u32;
    let year = (100 * (n - 49) + i + l) as i32;

    (year, month, day)
}

/// ISO weekday index for a day count: 0 = Monday .. 6 = Sunday.
#[inline]
fn iso_weekday_from_days(days: i64) -> u32 {
    (days + UNIX_EPOCH_ISO_WEEKDAY).rem_euclid(7) as u32
}

/// ISO weekday index for a civil date: 0 = Monday .. 6 = Sunday.
pub fn iso_weekday(year: i32, month: u32, day: u32) -> CalendarResult<u32> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::invalid_date(
            year,
            month,
            day,
            "month out of range",
        ));
    }
    Ok(iso_weekday_from_days(days_from_civil(year, month, day)))
}

fn iso_week_from_days(days: i64) -> u32 {
    // Thursday of this ISO week decides which year owns it.
    let thursday = days - iso_weekday_from_days(days) as i64 + 3;
    let (thursday_year, _, _) = civil_from_days(thursday);
    let jan1 = days_from_civil(thursday_year, 1, 1);

    ((thursday - jan1) / 7 + 1) as u32
}

/// ISO-8601 week number (1-52 or 1-53).
///
/// Early January dates may belong to the previous year's final week and late
/// December dates to the next year's week 1, exactly as ISO-8601 assigns
/// them.
///
/// ```
/// use chronoring_core::calendar::iso_week_number;
///
/// assert_eq!(iso_week_number(2021, 1, 1).unwrap(), 53);
/// assert_eq!(iso_week_number(2025, 1, 1).unwrap(), 1);
/// ```
pub fn iso_week_number(year: i32, month: u32, day: u32) -> CalendarResult<u32> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::invalid_date(
            year,
            month,
            day,
            "month out of range",
        ));
    }
    Ok(iso_week_from_days(days_from_civil(year, month, day)))
}

/// Number of ISO weeks the year is treated as having (52 or 53).
///
/// Computed as the ISO week number of December 31; when December 31 already
/// belongs to week 1 of the following year, the year counts 52 weeks.
pub fn weeks_in_year(year: i32) -> u32 {
    match iso_week_from_days(days_from_civil(year, 12, 31)) {
        1 => 52,
        weeks => weeks,
    }
}
