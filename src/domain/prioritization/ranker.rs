//! Ranker - orders scored projects and tallies tiers.

use serde::{Deserialize, Serialize};

use super::{
    join_tags, Classifier, ExplanationTag, PriorityCategory, PriorityScore, ScoringEngine,
    TagGenerator, ValidatedProject,
};

/// A validated project with its score, tier, tags, and rank.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredProject {
    /// 1-based position after ranking; 0 until ranked.
    pub rank: usize,
    pub project: ValidatedProject,
    pub score: PriorityScore,
    pub category: PriorityCategory,
    pub tags: Vec<ExplanationTag>,
}

impl ScoredProject {
    /// Scores, classifies, and tags a project. The rank is assigned later.
    pub fn evaluate(project: ValidatedProject) -> Self {
        let score = ScoringEngine::score_project(&project);
        let category = Classifier::classify(score);
        let tags = TagGenerator::tags_for(&project);

        Self {
            rank: 0,
            project,
            score,
            category,
            tags,
        }
    }

    /// Returns the tags joined for display.
    pub fn explanation(&self) -> String {
        join_tags(&self.tags)
    }
}

/// Project counts per priority tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl CategorySummary {
    /// Counts one project of the given tier.
    pub fn record(&mut self, category: PriorityCategory) {
        match category {
            PriorityCategory::High => self.high += 1,
            PriorityCategory::Medium => self.medium += 1,
            PriorityCategory::Low => self.low += 1,
        }
    }

    /// Returns the number of projects counted.
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// Outcome of a successful analysis run, ordered by rank.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub total_projects: usize,
    pub summary: CategorySummary,
    pub projects: Vec<ScoredProject>,
}

/// Ranking and aggregation.
pub struct Ranker;

impl Ranker {
    /// Sorts by descending unrounded score and assigns ranks 1..=N.
    ///
    /// The sort is stable: equal scores keep their input (row) order, and
    /// every project gets its own rank even on exact ties.
    pub fn rank(mut projects: Vec<ScoredProject>) -> AnalysisResult {
        projects.sort_by(|a, b| b.score.total_cmp(&a.score));

        let mut summary = CategorySummary::default();
        for (position, project) in projects.iter_mut().enumerate() {
            project.rank = position + 1;
            summary.record(project.category);
        }

        AnalysisResult {
            total_projects: projects.len(),
            summary,
            projects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ScoreValue;

    fn project(name: &str, impact: f64, urgency: f64, effort: f64, cost: f64) -> ScoredProject {
        let value = |v: f64| ScoreValue::try_new("test", v).unwrap();
        ScoredProject::evaluate(ValidatedProject {
            name: name.to_string(),
            impact: value(impact),
            urgency: value(urgency),
            effort: value(effort),
            cost: value(cost),
        })
    }

    fn names(result: &AnalysisResult) -> Vec<&str> {
        result.projects.iter().map(|p| p.project.name.as_str()).collect()
    }

    #[test]
    fn evaluate_fills_score_category_and_tags() {
        let scored = project("Checkout", 5.0, 4.0, 3.0, 2.0);
        assert_eq!(scored.score.rounded(), 4.15);
        assert_eq!(scored.category, PriorityCategory::High);
        assert_eq!(scored.explanation(), "High Impact, Urgent, Cost Efficient");
    }

    #[test]
    fn ranks_by_descending_score() {
        let result = Ranker::rank(vec![
            project("low", 1.0, 1.0, 5.0, 5.0),
            project("high", 5.0, 5.0, 1.0, 1.0),
            project("mid", 3.0, 3.0, 3.0, 3.0),
        ]);
        assert_eq!(names(&result), vec!["high", "mid", "low"]);
        let ranks: Vec<usize> = result.projects.iter().map(|p| p.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn ties_keep_input_order_and_distinct_ranks() {
        let result = Ranker::rank(vec![
            project("first", 3.0, 3.0, 3.0, 3.0),
            project("top", 5.0, 5.0, 1.0, 1.0),
            project("second", 3.0, 3.0, 3.0, 3.0),
            project("third", 3.0, 3.0, 3.0, 3.0),
        ]);
        assert_eq!(names(&result), vec!["top", "first", "second", "third"]);
        let ranks: Vec<usize> = result.projects.iter().map(|p| p.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn ranking_uses_unrounded_scores() {
        // 3.448 and 3.4515 both display as 3.45
        let result = Ranker::rank(vec![
            project("a", 4.28, 3.0, 3.0, 3.0),
            project("b", 4.29, 3.0, 3.0, 3.0),
        ]);
        assert_eq!(
            result.projects[0].score.rounded(),
            result.projects[1].score.rounded()
        );
        assert_eq!(names(&result), vec!["b", "a"]);
    }

    #[test]
    fn summary_counts_each_tier() {
        let result = Ranker::rank(vec![
            project("h1", 5.0, 5.0, 1.0, 1.0),
            project("h2", 5.0, 4.0, 3.0, 2.0),
            project("m", 3.0, 3.0, 3.0, 3.0),
            project("l", 1.0, 1.0, 5.0, 5.0),
        ]);
        assert_eq!(
            result.summary,
            CategorySummary {
                high: 2,
                medium: 1,
                low: 1
            }
        );
        assert_eq!(result.summary.total(), result.total_projects);
    }

    #[test]
    fn empty_input_ranks_to_empty_result() {
        let result = Ranker::rank(vec![]);
        assert_eq!(result.total_projects, 0);
        assert_eq!(result.summary.total(), 0);
    }
}
