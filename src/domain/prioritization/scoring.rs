//! Scoring Engine - fixed weighted priority formula.

use std::cmp::Ordering;
use std::fmt;

use crate::domain::foundation::ScoreValue;

use super::ValidatedProject;

pub const IMPACT_WEIGHT: f64 = 0.35;
pub const URGENCY_WEIGHT: f64 = 0.30;
pub const EFFORT_WEIGHT: f64 = 0.20;
pub const COST_WEIGHT: f64 = 0.15;

/// Composite priority score in [1.0, 5.0].
///
/// Holds the unrounded value; ordering and ranking use it directly.
/// [`PriorityScore::rounded`] is the two-decimal display value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorityScore(f64);

impl PriorityScore {
    /// Creates a score, clamped to the reachable range.
    pub fn new(value: f64) -> Self {
        Self(value.clamp(ScoreValue::MIN, ScoreValue::MAX))
    }

    /// Returns the unrounded value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value rounded to two decimal places.
    pub fn rounded(&self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }

    /// Total order on the unrounded value.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for PriorityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Weighted priority scoring.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Computes the weighted score, clamped to [1.0, 5.0].
    ///
    /// Effort and cost are inverted (`6 - v`) so higher values lower the
    /// score. The clamp absorbs floating-point spill at the extremes, e.g.
    /// `(1, 1, 5, 5)` sums to a hair under 1.0.
    pub fn score(impact: f64, urgency: f64, effort: f64, cost: f64) -> PriorityScore {
        PriorityScore::new(Self::weighted_sum(impact, urgency, effort, cost))
    }

    fn weighted_sum(impact: f64, urgency: f64, effort: f64, cost: f64) -> f64 {
        let inverted_effort = (ScoreValue::MIN + ScoreValue::MAX) - effort;
        let inverted_cost = (ScoreValue::MIN + ScoreValue::MAX) - cost;

        impact * IMPACT_WEIGHT
            + urgency * URGENCY_WEIGHT
            + inverted_effort * EFFORT_WEIGHT
            + inverted_cost * COST_WEIGHT
    }

    /// Scores a validated project.
    pub fn score_project(project: &ValidatedProject) -> PriorityScore {
        Self::score(
            project.impact.value(),
            project.urgency.value(),
            project.effort.value(),
            project.cost.value(),
        )
    }
}
