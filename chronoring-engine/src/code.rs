//! Compact temporal code generation.

use crate::civil::CivilDateTime;
use chronoring_core::calendar::{iso_week_number, iso_weekday};
use chronoring_core::constants::{MONTHS_PER_HALF, MONTHS_PER_QUARTER};
use chronoring_core::errors::CalendarResult;
use std::fmt;

/// Compact position of an instant in the calendar hierarchy:
/// `Y{yy}-H{h}-Q{q}-M{mm}-W{ww}-D{d}`.
///
/// `yy` is the two-digit year, `h` the half (1-2), `q` the quarter (1-4),
/// `mm` the zero-padded month, `ww` the zero-padded ISO week number, and `d`
/// the ISO day-of-week (Monday = 1 .. Sunday = 7).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemporalCode(String);

impl TemporalCode {
    pub(crate) fn from_civil(fields: &CivilDateTime) -> CalendarResult<Self> {
        let two_digit_year = fields.year.rem_euclid(100);
        let half = (fields.month - 1) / MONTHS_PER_HALF + 1;
        let quarter = (fields.month - 1) / MONTHS_PER_QUARTER + 1;
        let week = iso_week_number(fields.year, fields.month, fields.day)?;
        let weekday = iso_weekday(fields.year, fields.month, fields.day)? + 1;

        Ok(Self(format!(
            "Y{:02}-H{}-Q{}-M{:02}-W{:02}-D{}",
            two_digit_year, half, quarter, fields.month, week, weekday
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemporalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}
