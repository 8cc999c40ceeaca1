pub mod clock;
pub mod code;
pub mod conventional;
pub mod engine;
pub mod instant;
pub mod rings;
pub mod style;

mod civil;

pub use clock::{FixedClock, SystemClock, WallClock};
pub use code::TemporalCode;
pub use conventional::ConventionalTime;
pub use engine::TemporalPositionEngine;
pub use instant::Instant;
pub use rings::{RingId, RingProgress, ViewMode};
pub use style::{HslColor, RingStyle, StyleTable};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EngineError {
    InvalidInstant(f64),
    ParseError(String),
    CalculationError(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidInstant(millis) => {
                write!(f, "Invalid instant: {} ms since epoch", millis)
            }
            EngineError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            EngineError::CalculationError(msg) => write!(f, "Calculation error: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<chronoring_core::CalendarError> for EngineError {
    fn from(err: chronoring_core::CalendarError) -> Self {
        EngineError::CalculationError(err.to_string())
    }
}
