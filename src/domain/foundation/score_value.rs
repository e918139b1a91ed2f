//! Score value object for project attributes (1 to 5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A project attribute score between 1 and 5 inclusive.
///
/// Fractional values are allowed. Values outside the range are rejected,
/// never clamped.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreValue(f64);

impl ScoreValue {
    /// Lowest accepted score.
    pub const MIN: f64 = 1.0;

    /// Highest accepted score.
    pub const MAX: f64 = 5.0;

    /// Creates a ScoreValue, returning error if out of range.
    ///
    /// NaN and infinities are reported as out of range.
    pub fn try_new(field: &str, value: f64) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                field,
                Self::MIN,
                Self::MAX,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Parses a raw cell into a ScoreValue.
    ///
    /// Surrounding whitespace is ignored. A blank cell, a non-numeric cell,
    /// and an out-of-range number each produce a distinct error.
    pub fn parse(field: &str, raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field(field));
        }

        let value: f64 = trimmed
            .parse()
            .map_err(|_| ValidationError::invalid_number(field, trimmed))?;

        Self::try_new(field, value)
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value mirrored around the scale midpoint (`6 - v`).
    pub fn inverted(&self) -> f64 {
        (Self::MIN + Self::MAX) - self.0
    }
}

impl fmt::Display for ScoreValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
