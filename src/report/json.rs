use crate::correctness::CorrectnessResult;
use crate::report::BatchEntry;
use crate::types::report::TextReport;
use crate::vocabulary::VocabularyResult;

pub fn to_json(report: &TextReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn batch_to_json(entries: &[BatchEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(entries)
}

pub fn vocabulary_to_json(result: &VocabularyResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

pub fn correctness_to_json(result: &CorrectnessResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
