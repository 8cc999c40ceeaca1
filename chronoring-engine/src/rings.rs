//! Ring identifiers, display modes, and the instant-to-angle mapping.
//!
//! Each ring sweeps 0-360 degrees over one period of its unit, proportional
//! to elapsed progress through that period:
//!
//! | Ring | Period | Sub-period term |
//! |------|--------|-----------------|
//! | milliseconds | second | sub-millisecond fraction |
//! | seconds | minute | milliseconds |
//! | minutes | hour | seconds |
//! | hours | day (24h) | minutes |
//! | hours12 | half-day (12h) | minutes |
//! | days | month | hours |
//! | dayOfWeek | week | none (whole-day steps) |
//! | weeks | ISO year | hours of the current day |
//! | months | year | days |
//! | quarters | year | months and days |
//! | halves | year | months and days |
//! | year | year | hours of the current day |
//!
//! The weeks ring pins late-December dates that ISO-8601 assigns to the next
//! year's week 1 onto the ending year's final week, so the ring finishes its
//! sweep instead of snapping backward days before New Year.
//!
//! All angles of one [`RingProgress`] derive from a single civil
//! decomposition of a single sampled instant.

use crate::civil::CivilDateTime;
use crate::{EngineError, EngineResult};
use chronoring_core::angle::turns_to_degrees;
use chronoring_core::calendar::{
    day_of_year, days_in_month, days_in_year, iso_week_number, iso_weekday, weeks_in_year,
};
use chronoring_core::constants::{
    DAYS_PER_WEEK_F64, HALVES_PER_YEAR_F64, HOURS_PER_DAY_F64, HOURS_PER_HALF_DAY_F64,
    MILLIS_PER_SECOND_F64, MINUTES_PER_HOUR_F64, MONTHS_PER_HALF, MONTHS_PER_HALF_F64,
    MONTHS_PER_QUARTER, MONTHS_PER_QUARTER_F64, MONTHS_PER_YEAR_F64, QUARTERS_PER_YEAR_F64,
    SECONDS_PER_HOUR_F64, SECONDS_PER_MINUTE_F64,
};
use chronoring_core::errors::CalendarResult;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of one temporal ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum RingId {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Hours12,
    Days,
    DayOfWeek,
    Weeks,
    Months,
    Quarters,
    Halves,
    Year,
}

impl RingId {
    /// Every ring, innermost first.
    pub const ALL: [RingId; 12] = [
        RingId::Milliseconds,
        RingId::Seconds,
        RingId::Minutes,
        RingId::Hours,
        RingId::Hours12,
        RingId::Days,
        RingId::DayOfWeek,
        RingId::Weeks,
        RingId::Months,
        RingId::Quarters,
        RingId::Halves,
        RingId::Year,
    ];

    /// Identifier string as consumed by renderers.
    pub fn as_str(&self) -> &'static str {
        match self {
            RingId::Milliseconds => "milliseconds",
            RingId::Seconds => "seconds",
            RingId::Minutes => "minutes",
            RingId::Hours => "hours",
            RingId::Hours12 => "hours12",
            RingId::Days => "days",
            RingId::DayOfWeek => "dayOfWeek",
            RingId::Weeks => "weeks",
            RingId::Months => "months",
            RingId::Quarters => "quarters",
            RingId::Halves => "halves",
            RingId::Year => "year",
        }
    }
}

impl fmt::Display for RingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Display mode: the full hierarchy, or the traditional-clock day view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ViewMode {
    #[default]
    Year,
    Day,
}

impl ViewMode {
    /// Rings drawn in this mode, outermost first. Day view swaps the 12-hour
    /// ring in for the 24-hour one.
    pub fn draw_order(&self) -> &'static [RingId] {
        match self {
            ViewMode::Year => &[
                RingId::Year,
                RingId::Halves,
                RingId::Quarters,
                RingId::Months,
                RingId::Weeks,
                RingId::Days,
                RingId::DayOfWeek,
                RingId::Hours,
                RingId::Minutes,
                RingId::Seconds,
                RingId::Milliseconds,
            ],
            ViewMode::Day => &[
                RingId::Days,
                RingId::Minutes,
                RingId::Hours12,
                RingId::Seconds,
                RingId::Milliseconds,
            ],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Year => "year",
            ViewMode::Day => "day",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "year" => Ok(ViewMode::Year),
            "day" => Ok(ViewMode::Day),
            other => Err(EngineError::ParseError(format!(
                "unknown view mode: '{}'",
                other
            ))),
        }
    }
}

/// Sweep angles in degrees [0, 360) for every ring, plus the display mode
/// they were computed for.
///
/// Invalid instants produce NaN angles throughout; renderers treat a NaN
/// frame as skipped.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RingProgress {
    mode: ViewMode,
    milliseconds: f64,
    seconds: f64,
    minutes: f64,
    hours: f64,
    hours12: f64,
    days: f64,
    day_of_week: f64,
    weeks: f64,
    months: f64,
    quarters: f64,
    halves: f64,
    year: f64,
}

impl RingProgress {
    pub(crate) fn from_civil(fields: &CivilDateTime, mode: ViewMode) -> CalendarResult<Self> {
        let CivilDateTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
        } = *fields;

        let sec_frac = second as f64 + millisecond / MILLIS_PER_SECOND_F64;
        let min_frac = minute as f64 + sec_frac / SECONDS_PER_MINUTE_F64;
        let hour_frac =
            hour as f64 + minute as f64 / MINUTES_PER_HOUR_F64 + second as f64 / SECONDS_PER_HOUR_F64;

        let month0 = month - 1;
        let month_len = days_in_month(year, month)? as f64;
        let day_frac = (day - 1) as f64 + hour_frac / HOURS_PER_DAY_F64;

        let weekday = iso_weekday(year, month, day)? as f64;

        let iso_week = iso_week_number(year, month, day)?;
        let weeks_total = weeks_in_year(year) as f64;
        // Late December already in next year's week 1: hold the ring at the
        // ending year's final week instead of snapping back to week 1.
        let week = if month == 12 && iso_week == 1 {
            weeks_total
        } else {
            iso_week as f64
        };

        let quarter = (month0 / MONTHS_PER_QUARTER) as f64;
        let month_in_quarter = (month0 % MONTHS_PER_QUARTER) as f64;
        let half = (month0 / MONTHS_PER_HALF) as f64;
        let month_in_half = (month0 % MONTHS_PER_HALF) as f64;

        let ordinal_day = day_of_year(year, month, day)? as f64;
        let year_len = days_in_year(year) as f64;

        Ok(Self {
            mode,
            milliseconds: turns_to_degrees(millisecond / MILLIS_PER_SECOND_F64),
            seconds: turns_to_degrees(sec_frac / SECONDS_PER_MINUTE_F64),
            minutes: turns_to_degrees(min_frac / MINUTES_PER_HOUR_F64),
            hours: turns_to_degrees(
                (hour as f64 + min_frac / MINUTES_PER_HOUR_F64) / HOURS_PER_DAY_F64,
            ),
            hours12: turns_to_degrees(
                ((hour % 12) as f64 + min_frac / MINUTES_PER_HOUR_F64) / HOURS_PER_HALF_DAY_F64,
            ),
            days: turns_to_degrees(day_frac / month_len),
            day_of_week: turns_to_degrees(weekday / DAYS_PER_WEEK_F64),
            weeks: turns_to_degrees((week - 1.0 + hour_frac / HOURS_PER_DAY_F64) / weeks_total),
            months: turns_to_degrees((month0 as f64 + day_frac / month_len) / MONTHS_PER_YEAR_F64),
            quarters: turns_to_degrees(
                (quarter + (month_in_quarter + day_frac / month_len) / MONTHS_PER_QUARTER_F64)
                    / QUARTERS_PER_YEAR_F64,
            ),
            halves: turns_to_degrees(
                (half + (month_in_half + day_frac / month_len) / MONTHS_PER_HALF_F64)
                    / HALVES_PER_YEAR_F64,
            ),
            year: turns_to_degrees((ordinal_day + hour_frac / HOURS_PER_DAY_F64) / year_len),
        })
    }

    /// All angles NaN, for an instant the calendar cannot represent.
    pub(crate) fn invalid(mode: ViewMode) -> Self {
        Self {
            mode,
            milliseconds: f64::NAN,
            seconds: f64::NAN,
            minutes: f64::NAN,
            hours: f64::NAN,
            hours12: f64::NAN,
            days: f64::NAN,
            day_of_week: f64::NAN,
            weeks: f64::NAN,
            months: f64::NAN,
            quarters: f64::NAN,
            halves: f64::NAN,
            year: f64::NAN,
        }
    }

    /// Sweep angle in degrees for one ring.
    pub fn angle(&self, ring: RingId) -> f64 {
        match ring {
            RingId::Milliseconds => self.milliseconds,
            RingId::Seconds => self.seconds,
            RingId::Minutes => self.minutes,
            RingId::Hours => self.hours,
            RingId::Hours12 => self.hours12,
            RingId::Days => self.days,
            RingId::DayOfWeek => self.day_of_week,
            RingId::Weeks => self.weeks,
            RingId::Months => self.months,
            RingId::Quarters => self.quarters,
            RingId::Halves => self.halves,
            RingId::Year => self.year,
        }
    }

    /// The display mode this progress was computed for.
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// `(ring, angle)` pairs in the mode's draw order, outermost first.
    pub fn visible(&self) -> impl Iterator<Item = (RingId, f64)> + '_ {
        self.mode
            .draw_order()
            .iter()
            .map(move |&ring| (ring, self.angle(ring)))
    }

    /// False when the source instant was invalid and every angle is NaN.
    pub fn is_valid(&self) -> bool {
        RingId::ALL.iter().all(|&ring| self.angle(ring).is_finite())
    }
}
