use serde::Serialize;
use std::fmt;
use std::num::{IntErrorKind, ParseIntError};

/// Integer score in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: Rating = Rating(0);
    pub const MAX: Rating = Rating(100);
    /// Reference value plotted for every dimension.
    pub const BASELINE: Rating = Rating(50);

    /// Builds a rating, clamping `value` into range.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// Parses a requested rating. Integers too large for `i64` saturate so the
/// store can clamp them like any other out-of-range value.
pub fn parse_requested(raw: &str) -> Result<i64, ParseIntError> {
    match raw.parse::<i64>() {
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(i64::MAX),
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => Ok(i64::MIN),
        parsed => parsed,
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::BASELINE
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
