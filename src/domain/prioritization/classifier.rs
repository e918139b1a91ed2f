//! Classifier - maps a priority score to a tier.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::PriorityScore;

/// Lower bound (inclusive) of the High tier.
pub const HIGH_THRESHOLD: f64 = 3.8;

/// Lower bound (inclusive) of the Medium tier.
pub const MEDIUM_THRESHOLD: f64 = 2.8;

/// Priority tier, ordered from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriorityCategory {
    High,
    Medium,
    Low,
}

impl PriorityCategory {
    /// Returns the display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            PriorityCategory::High => "High",
            PriorityCategory::Medium => "Medium",
            PriorityCategory::Low => "Low",
        }
    }
}

impl fmt::Display for PriorityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed-threshold classification.
pub struct Classifier;

impl Classifier {
    /// Classifies a score value.
    pub fn classify_value(score: f64) -> PriorityCategory {
        if score >= HIGH_THRESHOLD {
            PriorityCategory::High
        } else if score >= MEDIUM_THRESHOLD {
            PriorityCategory::Medium
        } else {
            PriorityCategory::Low
        }
    }

    /// Classifies a priority score by its displayed (two-decimal) value.
    ///
    /// A score that shows as 3.80 is always High, even when the unrounded
    /// sum landed a hair below the threshold.
    pub fn classify(score: PriorityScore) -> PriorityCategory {
        Self::classify_value(score.rounded())
    }
}
