//! Civil field extraction in the display timezone.
//!
//! This is the only timezone-dependent step in the pipeline. An instant is
//! decomposed once per frame into calendar fields; every ring angle and
//! display string derives from that one decomposition, so the outputs of a
//! frame can never tear against each other.

use crate::instant::Instant;
use chrono::{Datelike, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

/// Calendar fields of an instant in a display timezone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CivilDateTime {
    pub year: i32,
    /// 1-12.
    pub month: u32,
    /// 1-31.
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Milliseconds within the second, including any sub-millisecond fraction.
    pub millisecond: f64,
}

/// Extracts civil fields, or `None` for a non-finite or unrepresentable instant.
pub(crate) fn civil_fields(instant: Instant, tz: Tz) -> Option<CivilDateTime> {
    let millis = instant.millis();
    if !millis.is_finite() {
        return None;
    }

    let whole = millis.floor();
    if whole < i64::MIN as f64 || whole > i64::MAX as f64 {
        return None;
    }
    let sub_millis = millis - whole;

    let utc = Utc.timestamp_millis_opt(whole as i64).single()?;
    let local = utc.with_timezone(&tz);

    Some(CivilDateTime {
        year: local.year(),
        month: local.month(),
        day: local.day(),
        hour: local.hour(),
        minute: local.minute(),
        second: local.second(),
        millisecond: local.timestamp_subsec_millis() as f64 + sub_millis,
    })
}
