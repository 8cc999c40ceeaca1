//! Error types for calendar arithmetic.
//!
//! A single unified error type [`CalendarError`] covers the two failure modes
//! of this crate: calendar field validation and numeric range violations.
//! Most fallible functions return [`CalendarResult<T>`].

use thiserror::Error;

/// Unified error type for calendar calculations.
///
/// Use the constructor methods ([`invalid_date`](Self::invalid_date),
/// [`out_of_range`](Self::out_of_range)) for consistent error creation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalendarError {
    /// Invalid calendar date (e.g., month 13, February 30).
    #[error("Invalid date {year}-{month:02}-{day:02}: {message}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        message: String,
    },

    /// Numeric value outside the representable or meaningful range.
    #[error("Value out of range in {context}: {value}")]
    OutOfRange { context: String, value: f64 },
}

/// Convenience alias for `Result<T, CalendarError>`.
pub type CalendarResult<T> = Result<T, CalendarError>;

impl CalendarError {
    /// Creates an [`InvalidDate`](Self::InvalidDate) error.
    pub fn invalid_date(year: i32, month: u32, day: u32, reason: &str) -> Self {
        Self::InvalidDate {
            year,
            month,
            day,
            message: reason.to_string(),
        }
    }

    /// Creates an [`OutOfRange`](Self::OutOfRange) error.
    pub fn out_of_range(context: &str, value: f64) -> Self {
        Self::OutOfRange {
            context: context.to_string(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_error() {
        let err = CalendarError::invalid_date(2000, 13, 1, "month out of range");
        assert_eq!(
            err.to_string(),
            "Invalid date 2000-13-01: month out of range"
        );
    }

    #[test]
    fn test_out_of_range_error() {
        let err = CalendarError::out_of_range("instant", f64::NAN);
        assert!(err.to_string().contains("out of range in instant"));
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<CalendarError>();
        _assert_sync::<CalendarError>();
    }
}
