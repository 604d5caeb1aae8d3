use crate::correctness::CorrectnessResult;
use crate::report::BatchEntry;
use crate::types::report::TextReport;
use crate::vocabulary::VocabularyResult;

pub fn to_markdown(report: &TextReport) -> String {
    let mut output = String::new();
    output.push_str("# Text Quality Report\n\n");
    output.push_str(&format!("Overall score: {:.4}\n\n", report.score));

    output.push_str("## Component Scores\n\n");
    output.push_str(&format!(
        "- vocabulary: {:.3}\n- correctness: {:.4}\n\n",
        report.vocabulary.score, report.correctness.score
    ));

    output.push_str(&vocabulary_section(&report.vocabulary));
    output.push_str(&correctness_section(&report.correctness));

    output.push_str("## Findings\n\n");
    if report.findings.is_empty() {
        output.push_str("- none\n");
    } else {
        for finding in &report.findings {
            output.push_str(&format!(
                "- [{}] {}: {}\n",
                if finding.blocking {
                    "blocking"
                } else {
                    "warning"
                },
                finding.title,
                finding.body
            ));
        }
    }

    output
}

pub fn batch_to_markdown(entries: &[BatchEntry]) -> String {
    let mut output = String::new();
    output.push_str("# Text Quality Batch Report\n\n");
    for entry in entries {
        output.push_str(&format!(
            "- {}: {:.4} (vocabulary {:.3}, correctness {:.4})\n",
            entry.name, entry.report.score, entry.report.vocabulary.score,
            entry.report.correctness.score
        ));
    }
    output.push('\n');
    for entry in entries {
        output.push_str(&format!("---\n\n## {}\n\n", entry.name));
        output.push_str(&to_markdown(&entry.report));
        output.push('\n');
    }
    output
}

pub fn vocabulary_to_markdown(result: &VocabularyResult) -> String {
    let mut output = String::new();
    output.push_str("# Vocabulary Report\n\n");
    output.push_str(&format!("Score: {:.3}\n\n", result.score));
    output.push_str(&vocabulary_section(result));
    output
}

pub fn correctness_to_markdown(result: &CorrectnessResult) -> String {
    let mut output = String::new();
    output.push_str("# Correctness Report\n\n");
    output.push_str(&format!("Score: {:.4}\n\n", result.score));
    output.push_str(&correctness_section(result));
    output
}

fn vocabulary_section(result: &VocabularyResult) -> String {
    let mut output = String::new();
    output.push_str("## Vocabulary\n\n");
    output.push_str(&format!(
        "- lexical diversity (TTR): {:.4} ({} unique / {} words)\n",
        result.lexical_diversity.ttr,
        result.lexical_diversity.unique_count,
        result.lexical_diversity.word_count
    ));
    output.push_str(&format!(
        "- sophistication: {:.4} ({:?}; {} common / {} mid / {} rare)\n",
        result.sophistication.score,
        result.sophistication.level,
        result.sophistication.common_count,
        result.sophistication.mid_count,
        result.sophistication.rare_count
    ));
    output.push_str(&format!(
        "- precision: {:.4} ({} issue(s) over {} words)\n\n",
        result.precision.score,
        result.precision.issues.len(),
        result.precision.word_count
    ));
    output
}

fn correctness_section(result: &CorrectnessResult) -> String {
    let mut output = String::new();
    output.push_str("## Correctness\n\n");
    output.push_str(&format!(
        "- score: {:.4}, normalized penalty {:.4} over {} words\n",
        result.score, result.normalized_penalty, result.word_count
    ));
    if result.issues.is_empty() {
        output.push_str("- issues: none\n\n");
    } else {
        output.push_str("- issues:\n");
        for issue in &result.issues {
            let suggestion = issue
                .replacements
                .first()
                .map(|replacement| format!(" (suggest: {})", replacement.value))
                .unwrap_or_default();
            output.push_str(&format!(
                "  - [{}] {}{}\n",
                issue.category.label(),
                issue.message,
                suggestion
            ));
        }
        output.push_str("- breakdown:\n");
        for entry in &result.breakdown {
            output.push_str(&format!(
                "  - {}: {} issue(s), penalty {:.2}\n",
                entry.category.label(),
                entry.count,
                entry.penalty
            ));
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::test_fixtures::sample_report;
    use crate::types::issue::{ErrorCategory, Replacement, TextIssue};

    #[test]
    fn markdown_report_contains_sections() {
        let rendered = to_markdown(&sample_report());
        assert!(rendered.contains("# Text Quality Report"));
        assert!(rendered.contains("Overall score: 0.4150"));
        assert!(rendered.contains("## Vocabulary"));
        assert!(rendered.contains("## Correctness"));
        assert!(rendered.contains("[warning] Low lexical diversity"));
    }

    #[test]
    fn batch_markdown_lists_every_entry() {
        let entries = vec![
            BatchEntry {
                name: "a.txt".to_string(),
                report: sample_report(),
            },
            BatchEntry {
                name: "b.txt".to_string(),
                report: sample_report(),
            },
        ];

        let rendered = batch_to_markdown(&entries);
        assert!(rendered.contains("# Text Quality Batch Report"));
        assert!(rendered.contains("## a.txt"));
        assert!(rendered.contains("## b.txt"));
    }

    #[test]
    fn correctness_issues_render_with_category_and_suggestion() {
        let mut report = sample_report();
        report.correctness.issues.push(TextIssue {
            message: "Possible spelling mistake found.".to_string(),
            replacements: vec![Replacement {
                value: "types".to_string(),
            }],
            sentence: String::new(),
            error_text: "typez".to_string(),
            start_offset: 0,
            issue_type: "misspelling".to_string(),
            category: ErrorCategory::SpellingTyping,
            rule_id: "MORFOLOGIK_RULE_EN_US".to_string(),
        });
        report.correctness.breakdown.push(crate::types::issue::CategoryBreakdown {
            category: ErrorCategory::SpellingTyping,
            count: 1,
            penalty: 3.0,
        });

        let rendered = correctness_to_markdown(&report.correctness);
        assert!(rendered.contains("[Spelling & Typos] Possible spelling mistake found. (suggest: types)"));
        assert!(rendered.contains("Spelling & Typos: 1 issue(s), penalty 3.00"));
    }

    #[test]
    fn vocabulary_markdown_is_self_contained() {
        let rendered = vocabulary_to_markdown(&sample_report().vocabulary);
        assert!(rendered.contains("# Vocabulary Report"));
        assert!(rendered.contains("lexical diversity (TTR): 1.0000"));
        assert!(rendered.contains("sophistication: 0.5000 (Advanced; 3 common / 0 mid / 0 rare)"));
    }
}
