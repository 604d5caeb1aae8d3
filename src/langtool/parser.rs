use serde::Deserialize;

use crate::types::issue::{ErrorCategory, Replacement, TextIssue};

/// Wire shape of a LanguageTool `/v2/check` response, reduced to the
/// fields the scorers consume.
#[derive(Debug, Deserialize)]
pub struct CheckResponse {
    #[serde(default)]
    pub matches: Vec<LtMatch>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LtMatch {
    pub message: String,
    pub replacements: Vec<LtReplacement>,
    pub sentence: String,
    pub context: LtContext,
    pub rule: LtRule,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LtReplacement {
    pub value: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LtContext {
    pub text: String,
    pub offset: usize,
    pub length: usize,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LtRule {
    pub id: String,
    #[serde(rename = "issueType")]
    pub issue_type: String,
    pub category: LtCategory,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LtCategory {
    pub id: String,
}

pub fn parse_matches(matches: Vec<LtMatch>) -> Vec<TextIssue> {
    matches.into_iter().map(issue_from_match).collect()
}

fn issue_from_match(m: LtMatch) -> TextIssue {
    let error_text = m
        .context
        .text
        .get(m.context.offset..m.context.offset + m.context.length)
        .unwrap_or_default()
        .to_string();

    TextIssue {
        message: m.message,
        replacements: m
            .replacements
            .into_iter()
            .map(|r| Replacement { value: r.value })
            .collect(),
        sentence: m.sentence,
        error_text,
        start_offset: m.context.offset,
        issue_type: m.rule.issue_type,
        category: ErrorCategory::from_language_tool_category(&m.rule.category.id),
        rule_id: m.rule.id,
    }
}
