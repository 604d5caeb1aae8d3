use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use chrono::Utc;

use crate::correctness::{CorrectnessChecker, CorrectnessResult};
use crate::error::Result;
use crate::langtool::{IssueSource, LanguageToolClient};
use crate::nlp::{
    lexicon::{CsvLexicon, EmptyLexicon, Lexicon},
    BasicPipeline, Pipeline,
};
use crate::types::config::GaugeConfig;
use crate::types::issue::{ErrorCategory, TextIssue};
use crate::types::report::{Finding, TextReport};
use crate::types::scoring::{round_to, Score};
use crate::vocabulary::{ReplacementWord, VocabularyEvaluator, VocabularyResult};

const LOW_DIVERSITY_TTR: Score = 0.3;

/// Full analysis of one text: correctness first, then vocabulary fed
/// with the replacement pairs the correctness issues suggested, then
/// the weighted global score and findings.
pub fn analyze(
    text: &str,
    evaluator: &VocabularyEvaluator,
    correctness_checker: &CorrectnessChecker,
    config: Option<&GaugeConfig>,
) -> Result<TextReport> {
    tracing::info!(chars = text.len(), "analyzing text");

    let correctness = correctness_checker.evaluate(text)?;
    let replacements = replacement_pairs(&correctness.issues);
    let vocabulary = evaluator.evaluate_with_replacements(text, &replacements)?;

    let weights = config.map(GaugeConfig::score_weights).unwrap_or_default();
    let score = round_to(
        weights.correctness * correctness.score + weights.vocabulary * vocabulary.score,
        4,
    );
    tracing::debug!(
        global = score,
        correctness = correctness.score,
        vocabulary = vocabulary.score,
        "scores computed"
    );

    let findings = collect_findings(text, score, &vocabulary, &correctness, config);
    Ok(TextReport {
        score,
        vocabulary,
        correctness,
        findings,
        generated_at: Utc::now().to_rfc3339(),
    })
}

/// Replacement pairs for the sophistication check: every word-usage or
/// stylistic issue that carries a suggestion contributes its first one.
pub fn replacement_pairs(issues: &[TextIssue]) -> HashSet<ReplacementWord> {
    issues
        .iter()
        .filter(|issue| {
            matches!(
                issue.category,
                ErrorCategory::WordUsage | ErrorCategory::StylisticIssues
            )
        })
        .filter(|issue| !issue.error_text.is_empty())
        .filter_map(|issue| {
            issue
                .replacements
                .first()
                .map(|replacement| ReplacementWord::new(&issue.error_text, &replacement.value))
        })
        .collect()
}

fn collect_findings(
    text: &str,
    score: Score,
    vocabulary: &VocabularyResult,
    correctness: &CorrectnessResult,
    config: Option<&GaugeConfig>,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    if text.trim().is_empty() {
        findings.push(Finding {
            id: "input.empty".to_string(),
            title: "Empty input".to_string(),
            body: "The analyzed text contains no words; scores reflect empty-input defaults."
                .to_string(),
            blocking: false,
        });
    }

    if vocabulary.lexical_diversity.word_count > 0
        && vocabulary.lexical_diversity.ttr < LOW_DIVERSITY_TTR
    {
        findings.push(Finding {
            id: "vocabulary.low_diversity".to_string(),
            title: "Low lexical diversity".to_string(),
            body: format!(
                "Type-token ratio {:.4} is below {:.1}; the text leans on few distinct words.",
                vocabulary.lexical_diversity.ttr, LOW_DIVERSITY_TTR
            ),
            blocking: false,
        });
    }

    let severe = correctness
        .issues
        .iter()
        .filter(|issue| issue.category.severity() >= 5)
        .count();
    if severe > 0 {
        findings.push(Finding {
            id: "correctness.severe_issues".to_string(),
            title: "Severe correctness issues".to_string(),
            body: format!("{severe} issue(s) in the highest-severity category were detected."),
            blocking: true,
        });
    }

    if let Some(min_overall) = config.and_then(GaugeConfig::min_overall) {
        if score < min_overall {
            findings.push(Finding {
                id: "score.below_threshold".to_string(),
                title: "Score below threshold".to_string(),
                body: format!(
                    "Global score {:.4} is below the configured minimum {:.4}.",
                    score, min_overall
                ),
                blocking: true,
            });
        }
    }

    findings
}

/// Build the evaluator and correctness checker from configuration.
/// Collaborators degrade gracefully: a missing lexicon downgrades to
/// the empty one with a warning, only broken files are hard errors.
pub fn build_checkers(
    config: Option<&GaugeConfig>,
    lang: &str,
) -> Result<(VocabularyEvaluator, CorrectnessChecker)> {
    let pipeline: Arc<dyn Pipeline> = match config.and_then(GaugeConfig::stopwords_path) {
        Some(path) => Arc::new(BasicPipeline::from_stopword_file(Path::new(path))?),
        None => Arc::new(BasicPipeline::new()),
    };

    let lexicon: Arc<dyn Lexicon> = match config.and_then(GaugeConfig::lexicon_path) {
        Some(path) => Arc::new(CsvLexicon::from_path(Path::new(path))?),
        None => {
            tracing::warn!("no lexicon configured; every word will look rare");
            Arc::new(EmptyLexicon)
        }
    };

    let url = config
        .map(GaugeConfig::languagetool_url)
        .unwrap_or(crate::langtool::DEFAULT_LANGUAGETOOL_URL);
    let timeout = config
        .map(GaugeConfig::languagetool_timeout_secs)
        .unwrap_or(10);
    let issues: Arc<dyn IssueSource> = Arc::new(LanguageToolClient::new(url, lang, timeout));

    let weights = config
        .map(GaugeConfig::vocabulary_weights)
        .unwrap_or_default();
    let evaluator =
        VocabularyEvaluator::with_weights(pipeline, lexicon, Arc::clone(&issues), weights);
    let correctness = CorrectnessChecker::new(issues);

    Ok((evaluator, correctness))
}
