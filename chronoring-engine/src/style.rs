//! Per-ring presentation data.
//!
//! Colors, stroke widths, dial labels, and day-view sizing are host/renderer
//! concerns; the engine never reads this table. It lives here as a typed
//! default so hosts start from the canonical dial, and every type derives
//! `serde` (feature `serde`) so overrides can be loaded or persisted.

use crate::rings::RingId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// HSL color triple: hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HslColor {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl HslColor {
    pub const fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

/// Presentation data for one ring.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RingStyle {
    pub ring: RingId,
    pub color: HslColor,
    /// Stroke width in canvas units.
    pub thickness: f64,
    /// Base opacity before view-mode adjustments.
    pub alpha: f64,
    /// Dial labels, evenly spaced clockwise from the top.
    pub labels: Vec<String>,
    /// Replacement labels in day view, for rings that relabel (hours).
    pub day_labels: Option<Vec<String>>,
    /// Day-view radius multiplier for the traditional clock layout.
    pub day_radius: Option<f64>,
}

/// The full presentation table, keyed by ring identifier.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StyleTable {
    rings: Vec<RingStyle>,
}

impl StyleTable {
    pub fn get(&self, ring: RingId) -> Option<&RingStyle> {
        self.rings.iter().find(|style| style.ring == ring)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RingStyle> {
        self.rings.iter()
    }

    /// Day-view radius multiplier, 1.0 for rings without an override.
    pub fn day_radius(&self, ring: RingId) -> f64 {
        self.get(ring).and_then(|style| style.day_radius).unwrap_or(1.0)
    }
}

fn numbered(count: u32, step: u32, start: u32) -> Vec<String> {
    (0..count).map(|i| (start + i * step).to_string()).collect()
}

fn named(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

impl Default for StyleTable {
    fn default() -> Self {
        let twelve_hour = named(&[
            "12", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11",
        ]);

        Self {
            rings: vec![
                RingStyle {
                    ring: RingId::Milliseconds,
                    color: HslColor::new(350, 70, 60),
                    thickness: 1.5,
                    alpha: 0.9,
                    labels: numbered(10, 100, 0),
                    day_labels: None,
                    day_radius: Some(0.15),
                },
                RingStyle {
                    ring: RingId::Seconds,
                    color: HslColor::new(0, 75, 55),
                    thickness: 2.0,
                    alpha: 0.9,
                    labels: numbered(12, 5, 0),
                    day_labels: None,
                    day_radius: Some(0.35),
                },
                RingStyle {
                    ring: RingId::Minutes,
                    color: HslColor::new(30, 80, 60),
                    thickness: 2.5,
                    alpha: 0.8,
                    labels: numbered(12, 5, 0),
                    day_labels: None,
                    day_radius: Some(0.85),
                },
                RingStyle {
                    ring: RingId::Hours,
                    color: HslColor::new(60, 85, 65),
                    thickness: 3.0,
                    alpha: 0.8,
                    labels: numbered(24, 1, 1),
                    day_labels: Some(twelve_hour.clone()),
                    day_radius: Some(0.5),
                },
                RingStyle {
                    ring: RingId::Hours12,
                    color: HslColor::new(60, 85, 65),
                    thickness: 3.0,
                    alpha: 0.8,
                    labels: twelve_hour,
                    day_labels: None,
                    day_radius: Some(0.5),
                },
                RingStyle {
                    ring: RingId::Days,
                    color: HslColor::new(90, 70, 55),
                    thickness: 3.5,
                    alpha: 0.7,
                    labels: numbered(8, 4, 1),
                    day_labels: None,
                    day_radius: Some(1.0),
                },
                RingStyle {
                    ring: RingId::DayOfWeek,
                    color: HslColor::new(120, 75, 60),
                    thickness: 4.0,
                    alpha: 0.7,
                    labels: named(&["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"]),
                    day_labels: None,
                    day_radius: None,
                },
                RingStyle {
                    ring: RingId::Weeks,
                    color: HslColor::new(150, 75, 60),
                    thickness: 4.5,
                    alpha: 0.7,
                    labels: (0..12).map(|i| format!("W{:02}", i * 4 + 1)).collect(),
                    day_labels: None,
                    day_radius: None,
                },
                RingStyle {
                    ring: RingId::Months,
                    color: HslColor::new(180, 80, 50),
                    thickness: 5.0,
                    alpha: 0.6,
                    labels: named(&[
                        "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT",
                        "NOV", "DEC",
                    ]),
                    day_labels: None,
                    day_radius: None,
                },
                RingStyle {
                    ring: RingId::Quarters,
                    color: HslColor::new(210, 75, 55),
                    thickness: 5.5,
                    alpha: 0.6,
                    labels: named(&["Q1", "Q2", "Q3", "Q4"]),
                    day_labels: None,
                    day_radius: None,
                },
                RingStyle {
                    ring: RingId::Halves,
                    color: HslColor::new(270, 70, 60),
                    thickness: 6.0,
                    alpha: 0.5,
                    labels: named(&["H1", "H2"]),
                    day_labels: None,
                    day_radius: None,
                },
                RingStyle {
                    ring: RingId::Year,
                    // White outermost ring frames the dial
                    color: HslColor::new(0, 0, 90),
                    thickness: 6.5,
                    alpha: 0.5,
                    labels: named(&["JAN", "APR", "JUL", "OCT"]),
                    day_labels: None,
                    day_radius: None,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::ViewMode;

    #[test]
    fn test_table_covers_every_ring() {
        let table = StyleTable::default();
        for ring in RingId::ALL {
            assert!(table.get(ring).is_some(), "no style for {}", ring);
        }
        assert_eq!(table.iter().count(), RingId::ALL.len());
    }

    #[test]
    fn test_table_covers_draw_orders() {
        let table = StyleTable::default();
        for mode in [ViewMode::Year, ViewMode::Day] {
            for &ring in mode.draw_order() {
                assert!(table.get(ring).is_some());
            }
        }
    }

    #[test]
    fn test_day_view_radii() {
        let table = StyleTable::default();
        assert_eq!(table.day_radius(RingId::Milliseconds), 0.15);
        assert_eq!(table.day_radius(RingId::Minutes), 0.85);
        // No override: full size
        assert_eq!(table.day_radius(RingId::Weeks), 1.0);
    }

    #[test]
    fn test_label_counts() {
        let table = StyleTable::default();
        assert_eq!(table.get(RingId::DayOfWeek).unwrap().labels.len(), 7);
        assert_eq!(table.get(RingId::Months).unwrap().labels.len(), 12);
        assert_eq!(table.get(RingId::Hours).unwrap().labels.len(), 24);
        let hour_day_labels = table.get(RingId::Hours).unwrap().day_labels.as_ref().unwrap();
        assert_eq!(hour_day_labels.len(), 12);
        assert_eq!(hour_day_labels[0], "12");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let original = StyleTable::default();
        let json = serde_json::to_string(&original).unwrap();
        let deserialized: StyleTable = serde_json::from_str(&json).unwrap();
        assert_eq!(original, deserialized);
    }
}
