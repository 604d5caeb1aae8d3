use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;
use crate::langtool::IssueSource;
use crate::types::issue::{aggregate_by_category, CategoryBreakdown, TextIssue};
use crate::types::scoring::{round_to, Score};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrectnessResult {
    pub score: Score,
    pub word_count: usize,
    pub normalized_penalty: Score,
    pub issues: Vec<TextIssue>,
    pub breakdown: Vec<CategoryBreakdown>,
}

/// Scores overall correctness across every issue category. The penalty
/// is normalized per word and squashed so the score stays in (0, 1].
pub struct CorrectnessChecker {
    issues: Arc<dyn IssueSource>,
}

impl CorrectnessChecker {
    pub fn new(issues: Arc<dyn IssueSource>) -> Self {
        Self { issues }
    }

    pub fn evaluate(&self, text: &str) -> Result<CorrectnessResult> {
        let issues = self.issues.issues(text)?;
        let word_count = text.split_whitespace().count();
        Ok(score_issues(word_count, issues))
    }
}

pub fn score_issues(word_count: usize, issues: Vec<TextIssue>) -> CorrectnessResult {
    let (breakdown, total_penalty) = aggregate_by_category(&issues);

    let normalized_penalty = round_to(total_penalty / word_count.max(1) as Score, 4);
    let score = round_to(1.0 / (1.0 + normalized_penalty), 4);

    CorrectnessResult {
        score,
        word_count,
        normalized_penalty,
        issues,
        breakdown,
    }
}
