//! Tag Generator - explanatory labels from raw attribute values.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidatedProject;

/// Explanation tag, declared in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExplanationTag {
    #[serde(rename = "High Impact")]
    HighImpact,
    #[serde(rename = "Urgent")]
    Urgent,
    #[serde(rename = "Low Effort")]
    LowEffort,
    #[serde(rename = "Cost Efficient")]
    CostEfficient,
    #[serde(rename = "High Effort")]
    HighEffort,
    #[serde(rename = "Expensive")]
    Expensive,
}

impl ExplanationTag {
    /// Returns the display label for this tag.
    pub fn label(&self) -> &'static str {
        match self {
            ExplanationTag::HighImpact => "High Impact",
            ExplanationTag::Urgent => "Urgent",
            ExplanationTag::LowEffort => "Low Effort",
            ExplanationTag::CostEfficient => "Cost Efficient",
            ExplanationTag::HighEffort => "High Effort",
            ExplanationTag::Expensive => "Expensive",
        }
    }
}

impl fmt::Display for ExplanationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Separator used when tags are rendered as one string.
pub const TAG_SEPARATOR: &str = ", ";

/// Joins tags for display. No tags renders as an empty string.
pub fn join_tags(tags: &[ExplanationTag]) -> String {
    tags.iter()
        .map(ExplanationTag::label)
        .collect::<Vec<_>>()
        .join(TAG_SEPARATOR)
}

/// Threshold-based tag derivation, independent of the composite score.
pub struct TagGenerator;

impl TagGenerator {
    /// Derives the tags for a set of raw attribute values.
    pub fn tags(impact: f64, urgency: f64, effort: f64, cost: f64) -> Vec<ExplanationTag> {
        let rules = [
            (impact >= 4.0, ExplanationTag::HighImpact),
            (urgency >= 4.0, ExplanationTag::Urgent),
            (effort <= 2.0, ExplanationTag::LowEffort),
            (cost <= 2.0, ExplanationTag::CostEfficient),
            (effort >= 4.0, ExplanationTag::HighEffort),
            (cost >= 4.0, ExplanationTag::Expensive),
        ];

        rules
            .into_iter()
            .filter_map(|(applies, tag)| applies.then_some(tag))
            .collect()
    }

    /// Derives the tags for a validated project.
    pub fn tags_for(project: &ValidatedProject) -> Vec<ExplanationTag> {
        Self::tags(
            project.impact.value(),
            project.urgency.value(),
            project.effort.value(),
            project.cost.value(),
        )
    }
}
