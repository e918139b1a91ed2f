//! HTTP DTOs for the analysis endpoint.
//!
//! These types define the JSON response structure returned to the upload
//! page. Scores are rounded to two decimals here and nowhere earlier.

use serde::Serialize;

use crate::domain::foundation::ErrorCode;
use crate::domain::prioritization::{
    AnalysisResult, CategorySummary, ExplanationTag, PriorityCategory, ScoredProject,
};

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Successful analysis, projects ordered by rank.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    /// Always `true`; kept for clients that branch on it.
    pub success: bool,
    pub total_projects: usize,
    pub summary: SummaryResponse,
    pub projects: Vec<ProjectResponse>,
}

/// Project counts per tier.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SummaryResponse {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// One ranked project.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectResponse {
    pub rank: usize,
    pub project_name: String,
    pub impact: f64,
    pub urgency: f64,
    pub effort: f64,
    pub cost: f64,
    /// Rounded to two decimals.
    pub priority_score: f64,
    pub priority_category: PriorityCategory,
    /// Tags joined with ", "; empty when no tag applies.
    pub explanation: String,
    pub tags: Vec<ExplanationTag>,
}

impl From<CategorySummary> for SummaryResponse {
    fn from(summary: CategorySummary) -> Self {
        Self {
            high: summary.high,
            medium: summary.medium,
            low: summary.low,
        }
    }
}

impl From<&ScoredProject> for ProjectResponse {
    fn from(scored: &ScoredProject) -> Self {
        Self {
            rank: scored.rank,
            project_name: scored.project.name.clone(),
            impact: scored.project.impact.value(),
            urgency: scored.project.urgency.value(),
            effort: scored.project.effort.value(),
            cost: scored.project.cost.value(),
            priority_score: scored.score.rounded(),
            priority_category: scored.category,
            explanation: scored.explanation(),
            tags: scored.tags.clone(),
        }
    }
}

impl From<&AnalysisResult> for AnalysisResponse {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            success: true,
            total_projects: result.total_projects,
            summary: result.summary.into(),
            projects: result.projects.iter().map(ProjectResponse::from).collect(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prioritization::{ProjectAnalyzer, RawTable};
    use serde_json::json;

    fn analyzed(rows: &[&[&str]]) -> AnalysisResult {
        let table = RawTable::new(
            ["Project Name", "Impact Score", "Urgency Score", "Effort Score", "Cost Score"]
                .iter()
                .map(|h| h.to_string())
                .collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        );
        ProjectAnalyzer::analyze(&table).unwrap()
    }

    #[test]
    fn analysis_response_serializes_wire_shape() {
        let result = analyzed(&[&["Checkout", "5", "4", "3", "2"]]);
        let json = serde_json::to_value(AnalysisResponse::from(&result)).unwrap();

        assert_eq!(
            json,
            json!({
                "success": true,
                "total_projects": 1,
                "summary": { "high": 1, "medium": 0, "low": 0 },
                "projects": [{
                    "rank": 1,
                    "project_name": "Checkout",
                    "impact": 5.0,
                    "urgency": 4.0,
                    "effort": 3.0,
                    "cost": 2.0,
                    "priority_score": 4.15,
                    "priority_category": "High",
                    "explanation": "High Impact, Urgent, Cost Efficient",
                    "tags": ["High Impact", "Urgent", "Cost Efficient"]
                }]
            })
        );
    }

    #[test]
    fn untagged_project_has_empty_explanation() {
        let result = analyzed(&[&["Plain", "3", "3", "3", "3"]]);
        let response = AnalysisResponse::from(&result);

        assert_eq!(response.projects[0].explanation, "");
        assert!(response.projects[0].tags.is_empty());
        assert_eq!(response.projects[0].priority_score, 3.0);
    }

    #[test]
    fn error_response_serializes_error_and_code() {
        let json = serde_json::to_value(ErrorResponse::new(
            ErrorCode::NoDataRows,
            "No data rows found in file.",
        ))
        .unwrap();

        assert_eq!(
            json,
            json!({ "error": "No data rows found in file.", "code": "NO_DATA_ROWS" })
        );
    }
}
