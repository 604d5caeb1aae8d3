pub mod json;
pub mod md;

use serde::Serialize;

use crate::error::GaugeError;
use crate::types::report::TextReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

/// One report in a batch run, labeled with the file it came from.
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub name: String,
    pub report: TextReport,
}

pub fn render(report: &TextReport, format: OutputFormat) -> Result<String, GaugeError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(GaugeError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_batch(entries: &[BatchEntry], format: OutputFormat) -> Result<String, GaugeError> {
    match format {
        OutputFormat::Json => json::batch_to_json(entries).map_err(GaugeError::Json),
        OutputFormat::Md => Ok(md::batch_to_markdown(entries)),
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;
    use crate::correctness::CorrectnessResult;
    use crate::types::report::Finding;
    use crate::vocabulary::diversity::LexicalDiversityResult;
    use crate::vocabulary::precision::PrecisionResult;
    use crate::vocabulary::sophistication::{SophisticationLevel, SophisticationResult};
    use crate::vocabulary::VocabularyResult;

    pub fn sample_report() -> TextReport {
        TextReport {
            score: 0.415,
            vocabulary: VocabularyResult {
                score: 0.825,
                lexical_diversity: LexicalDiversityResult {
                    ttr: 1.0,
                    word_count: 3,
                    unique_count: 3,
                },
                sophistication: SophisticationResult {
                    score: 0.5,
                    common_count: 3,
                    mid_count: 0,
                    rare_count: 0,
                    word_count: 3,
                    level: SophisticationLevel::Advanced,
                },
                precision: PrecisionResult {
                    score: 1.0,
                    word_count: 3,
                    normalized_penalty: 0.0,
                    issues: Vec::new(),
                    breakdown: Vec::new(),
                },
            },
            correctness: CorrectnessResult {
                score: 1.0,
                word_count: 3,
                normalized_penalty: 0.0,
                issues: Vec::new(),
                breakdown: Vec::new(),
            },
            findings: vec![Finding {
                id: "vocabulary.low_diversity".to_string(),
                title: "Low lexical diversity".to_string(),
                body: "Example finding body.".to_string(),
                blocking: false,
            }],
            generated_at: "2026-01-01T00:00:00+00:00".to_string(),
        }
    }
}
