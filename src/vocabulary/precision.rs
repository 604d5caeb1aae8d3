use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;
use crate::langtool::IssueSource;
use crate::types::issue::{aggregate_by_category, CategoryBreakdown, ErrorCategory, TextIssue};
use crate::types::scoring::{round_to, Score};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecisionResult {
    pub score: Score,
    pub word_count: usize,
    pub normalized_penalty: Score,
    pub issues: Vec<TextIssue>,
    pub breakdown: Vec<CategoryBreakdown>,
}

/// Scores word usage and stylistic appropriateness: 1.0 for a text with
/// no relevant issues, dropping as penalties accumulate per word.
pub struct PrecisionChecker {
    issues: Arc<dyn IssueSource>,
}

impl PrecisionChecker {
    pub fn new(issues: Arc<dyn IssueSource>) -> Self {
        Self { issues }
    }

    pub fn evaluate(&self, text: &str) -> Result<PrecisionResult> {
        let relevant: Vec<TextIssue> = self
            .issues
            .issues(text)?
            .into_iter()
            .filter(|issue| is_precision_category(issue.category))
            .collect();

        let word_count = text.split_whitespace().count();
        let (mut breakdown, total_penalty) = aggregate_by_category(&relevant);
        for entry in &mut breakdown {
            entry.penalty = round_to(entry.penalty, 2);
        }

        let normalized_penalty = round_to(total_penalty / word_count.max(1) as Score, 4);
        let score = round_to(1.0 - normalized_penalty, 4);

        Ok(PrecisionResult {
            score,
            word_count,
            normalized_penalty,
            issues: relevant,
            breakdown,
        })
    }
}

fn is_precision_category(category: ErrorCategory) -> bool {
    matches!(
        category,
        ErrorCategory::WordUsage | ErrorCategory::StylisticIssues
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::issue::Replacement;

    struct StaticIssues(Vec<TextIssue>);

    impl IssueSource for StaticIssues {
        fn issues(&self, _text: &str) -> Result<Vec<TextIssue>> {
            Ok(self.0.clone())
        }
    }

    fn issue(category: ErrorCategory, error_text: &str) -> TextIssue {
        TextIssue {
            message: format!("issue at {error_text}"),
            replacements: vec![Replacement {
                value: "better".to_string(),
            }],
            sentence: String::new(),
            error_text: error_text.to_string(),
            start_offset: 0,
            issue_type: String::new(),
            category,
            rule_id: String::new(),
        }
    }

    fn checker(issues: Vec<TextIssue>) -> PrecisionChecker {
        PrecisionChecker::new(Arc::new(StaticIssues(issues)))
    }

    #[test]
    fn only_usage_and_style_categories_count() {
        let checker = checker(vec![
            issue(ErrorCategory::WordUsage, "utilize"),
            issue(ErrorCategory::StylisticIssues, "a lot"),
            issue(ErrorCategory::GrammarRules, "is"),
            issue(ErrorCategory::SpellingTyping, "typez"),
        ]);

        // 10 words; penalties 3 (usage) + 2 (style) = 5.
        let result = checker
            .evaluate("one two three four five six seven eight nine ten")
            .expect("evaluation should succeed");

        assert_eq!(result.issues.len(), 2);
        assert_eq!(result.word_count, 10);
        assert_eq!(result.normalized_penalty, 0.5);
        assert_eq!(result.score, 0.5);
        assert_eq!(result.breakdown.len(), 2);
        assert_eq!(result.breakdown[0].category, ErrorCategory::WordUsage);
        assert_eq!(result.breakdown[0].penalty, 3.0);
    }

    #[test]
    fn clean_text_scores_one() {
        let result = checker(Vec::new())
            .evaluate("nothing wrong here at all")
            .expect("evaluation should succeed");

        assert_eq!(result.score, 1.0);
        assert_eq!(result.normalized_penalty, 0.0);
        assert!(result.breakdown.is_empty());
    }

    #[test]
    fn dense_issues_in_short_text_can_push_score_negative() {
        let checker = checker(vec![
            issue(ErrorCategory::StylisticIssues, "um"),
            issue(ErrorCategory::StylisticIssues, "uh"),
        ]);

        let result = checker.evaluate("um").expect("evaluation should succeed");
        assert_eq!(result.word_count, 1);
        assert_eq!(result.normalized_penalty, 4.0);
        assert_eq!(result.score, -3.0);
    }

    #[test]
    fn empty_text_divides_by_one() {
        let result = checker(Vec::new())
            .evaluate("")
            .expect("evaluation should succeed");

        assert_eq!(result.word_count, 0);
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn source_failure_propagates_unchanged() {
        struct Failing;
        impl IssueSource for Failing {
            fn issues(&self, _text: &str) -> Result<Vec<TextIssue>> {
                Err(crate::error::GaugeError::LanguageTool(
                    "server unreachable".to_string(),
                ))
            }
        }

        let checker = PrecisionChecker::new(Arc::new(Failing));
        let error = checker.evaluate("text").unwrap_err();
        assert!(error.to_string().contains("server unreachable"));
    }
}
