//! Conventional date and 12-hour time formatting.

use crate::civil::CivilDateTime;
use std::fmt;

/// Conventional display strings: ISO date plus a 12-hour clock time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConventionalTime {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM:SS AM|PM`, hour 0 rendered as 12.
    pub time: String,
}

impl ConventionalTime {
    pub(crate) fn from_civil(fields: &CivilDateTime) -> Self {
        let date = format!("{:04}-{:02}-{:02}", fields.year, fields.month, fields.day);

        let meridiem = if fields.hour >= 12 { "PM" } else { "AM" };
        let hour12 = match fields.hour % 12 {
            0 => 12,
            hour => hour,
        };
        let time = format!(
            "{:02}:{:02}:{:02} {}",
            hour12, fields.minute, fields.second, meridiem
        );

        Self { date, time }
    }
}

impl fmt::Display for ConventionalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32, second: u32) -> CivilDateTime {
        CivilDateTime {
            year: 2025,
            month: 1,
            day: 1,
            hour,
            minute,
            second,
            millisecond: 0.0,
        }
    }

    #[test]
    fn test_midnight_is_twelve_am() {
        let conventional = ConventionalTime::from_civil(&at(0, 0, 0));
        assert_eq!(conventional.date, "2025-01-01");
        assert_eq!(conventional.time, "12:00:00 AM");
    }

    #[test]
    fn test_afternoon() {
        let conventional = ConventionalTime::from_civil(&at(13, 5, 9));
        assert_eq!(conventional.time, "01:05:09 PM");
    }

    #[test]
    fn test_noon_is_twelve_pm() {
        let conventional = ConventionalTime::from_civil(&at(12, 0, 0));
        assert_eq!(conventional.time, "12:00:00 PM");
    }

    #[test]
    fn test_late_morning() {
        let conventional = ConventionalTime::from_civil(&at(11, 59, 59));
        assert_eq!(conventional.time, "11:59:59 AM");
    }

    #[test]
    fn test_display() {
        let conventional = ConventionalTime::from_civil(&at(13, 5, 9));
        assert_eq!(conventional.to_string(), "2025-01-01 01:05:09 PM");
    }
}
