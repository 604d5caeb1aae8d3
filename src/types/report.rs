use serde::Serialize;

use crate::correctness::CorrectnessResult;
use crate::types::scoring::Score;
use crate::vocabulary::VocabularyResult;

#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
}

/// Full analysis of one text: the global score, both component results,
/// and any findings worth surfacing.
#[derive(Debug, Clone, Serialize)]
pub struct TextReport {
    pub score: Score,
    pub vocabulary: VocabularyResult,
    pub correctness: CorrectnessResult,
    pub findings: Vec<Finding>,
    pub generated_at: String,
}

impl TextReport {
    pub fn has_blocking_findings(&self) -> bool {
        self.findings.iter().any(|finding| finding.blocking)
    }
}
