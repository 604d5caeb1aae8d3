use crate::types::scoring::Score;
use serde::Serialize;

/// Issue buckets the scorers work with, each with a fixed severity
/// from 1 (low impact) to 5 (high impact).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    GrammarRules,
    Mechanics,
    SpellingTyping,
    WordUsage,
    MeaningLogic,
    StylisticIssues,
    ContextualStyle,
}

impl ErrorCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorCategory::GrammarRules => "Grammar Rules",
            ErrorCategory::Mechanics => "Mechanics",
            ErrorCategory::SpellingTyping => "Spelling & Typos",
            ErrorCategory::WordUsage => "Word Usage",
            ErrorCategory::MeaningLogic => "Meaning & Logic",
            ErrorCategory::StylisticIssues => "Stylistic Issues",
            ErrorCategory::ContextualStyle => "Contextual Style",
        }
    }

    pub fn severity(&self) -> u8 {
        match self {
            ErrorCategory::GrammarRules => 4,
            ErrorCategory::Mechanics => 2,
            ErrorCategory::SpellingTyping => 3,
            ErrorCategory::WordUsage => 3,
            ErrorCategory::MeaningLogic => 5,
            ErrorCategory::StylisticIssues => 2,
            ErrorCategory::ContextualStyle => 1,
        }
    }

    /// Map a LanguageTool category id onto one of our buckets.
    /// Anything unrecognized lands in StylisticIssues.
    pub fn from_language_tool_category(category: &str) -> Self {
        match category.to_uppercase().as_str() {
            "GRAMMAR" | "CASING" => ErrorCategory::GrammarRules,
            "PUNCTUATION" | "TYPOGRAPHY" | "COMPOUNDING" => ErrorCategory::Mechanics,
            "TYPOS" => ErrorCategory::SpellingTyping,
            "CONFUSED_WORDS" | "COLLOQUIALISMS" | "REDUNDANCY" => ErrorCategory::WordUsage,
            "FALSE_FRIENDS" | "REGIONALISMS" => ErrorCategory::MeaningLogic,
            "STYLE" | "REPETITIONS_STYLE" | "REPETITIONS" | "PLAIN_ENGLISH" | "MISC" => {
                ErrorCategory::StylisticIssues
            }
            "WIKIPEDIA" | "GENDER_NEUTRALITY" => ErrorCategory::ContextualStyle,
            _ => ErrorCategory::StylisticIssues,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replacement {
    pub value: String,
}

/// One issue reported against the analyzed text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextIssue {
    pub message: String,
    pub replacements: Vec<Replacement>,
    pub sentence: String,
    pub error_text: String,
    pub start_offset: usize,
    pub issue_type: String,
    pub category: ErrorCategory,
    pub rule_id: String,
}

impl TextIssue {
    pub fn end_offset(&self) -> usize {
        self.start_offset + self.error_text.len()
    }

    pub fn penalty(&self) -> Score {
        Score::from(self.category.severity())
    }
}

/// Per-category issue tally used in score breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub category: ErrorCategory,
    pub count: usize,
    pub penalty: Score,
}

/// Tally issues by category, preserving first-seen order.
/// Returns the breakdown and the total penalty.
pub fn aggregate_by_category(issues: &[TextIssue]) -> (Vec<CategoryBreakdown>, Score) {
    let mut breakdown: Vec<CategoryBreakdown> = Vec::new();
    let mut total_penalty = 0.0;

    for issue in issues {
        total_penalty += issue.penalty();
        match breakdown
            .iter_mut()
            .find(|entry| entry.category == issue.category)
        {
            Some(entry) => {
                entry.count += 1;
                entry.penalty += issue.penalty();
            }
            None => breakdown.push(CategoryBreakdown {
                category: issue.category,
                count: 1,
                penalty: issue.penalty(),
            }),
        }
    }

    (breakdown, total_penalty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_language_tool_categories() {
        assert_eq!(
            ErrorCategory::from_language_tool_category("TYPOS"),
            ErrorCategory::SpellingTyping
        );
        assert_eq!(
            ErrorCategory::from_language_tool_category("casing"),
            ErrorCategory::GrammarRules
        );
        assert_eq!(
            ErrorCategory::from_language_tool_category("COLLOQUIALISMS"),
            ErrorCategory::WordUsage
        );
    }

    #[test]
    fn unknown_category_falls_back_to_stylistic() {
        assert_eq!(
            ErrorCategory::from_language_tool_category("SOMETHING_NEW"),
            ErrorCategory::StylisticIssues
        );
    }

    #[test]
    fn issue_derives_offsets_and_penalty() {
        let issue = TextIssue {
            message: "Possible typo".to_string(),
            replacements: vec![Replacement {
                value: "types".to_string(),
            }],
            sentence: "Many typez of errors.".to_string(),
            error_text: "typez".to_string(),
            start_offset: 5,
            issue_type: "misspelling".to_string(),
            category: ErrorCategory::SpellingTyping,
            rule_id: "MORFOLOGIK_RULE_EN_US".to_string(),
        };

        assert_eq!(issue.end_offset(), 10);
        assert_eq!(issue.penalty(), 3.0);
    }

    fn issue(category: ErrorCategory) -> TextIssue {
        TextIssue {
            message: String::new(),
            replacements: Vec::new(),
            sentence: String::new(),
            error_text: String::new(),
            start_offset: 0,
            issue_type: String::new(),
            category,
            rule_id: String::new(),
        }
    }

    #[test]
    fn aggregates_issues_by_category_in_first_seen_order() {
        let issues = vec![
            issue(ErrorCategory::GrammarRules),
            issue(ErrorCategory::StylisticIssues),
            issue(ErrorCategory::GrammarRules),
        ];

        let (breakdown, total) = aggregate_by_category(&issues);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].category, ErrorCategory::GrammarRules);
        assert_eq!(breakdown[0].count, 2);
        assert_eq!(breakdown[0].penalty, 8.0);
        assert_eq!(breakdown[1].count, 1);
        assert_eq!(total, 10.0);
    }

    #[test]
    fn empty_issue_list_has_zero_penalty() {
        let (breakdown, total) = aggregate_by_category(&[]);
        assert!(breakdown.is_empty());
        assert_eq!(total, 0.0);
    }
}
