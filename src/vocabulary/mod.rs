pub mod diversity;
pub mod precision;
pub mod sophistication;

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;
use crate::langtool::IssueSource;
use crate::nlp::{lexicon::Lexicon, Pipeline};
use crate::types::scoring::{round_to, Score};
use diversity::{LexicalDiversityCalculator, LexicalDiversityResult};
use precision::{PrecisionChecker, PrecisionResult};
use sophistication::{SophisticationChecker, SophisticationResult};

/// Component weights for the composite vocabulary score. Injected at
/// construction so tests and config can override them; the struct itself
/// does not police the sum (the config layer does).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VocabularyWeights {
    pub lexical_diversity: Score,
    pub sophistication: Score,
    pub precision: Score,
}

impl Default for VocabularyWeights {
    fn default() -> Self {
        Self {
            lexical_diversity: 0.30,
            sophistication: 0.35,
            precision: 0.35,
        }
    }
}

/// A suggested substitution: the word as written and the word proposed
/// in its place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReplacementWord {
    pub original: String,
    pub replacement: String,
}

impl ReplacementWord {
    pub fn new(original: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            replacement: replacement.into(),
        }
    }
}

/// Combined result of one vocabulary evaluation. Built fresh per call
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VocabularyResult {
    pub score: Score,
    pub lexical_diversity: LexicalDiversityResult,
    pub sophistication: SophisticationResult,
    pub precision: PrecisionResult,
}

/// Evaluates vocabulary quality as a weighted blend of lexical
/// diversity (TTR), word sophistication, and word precision.
pub struct VocabularyEvaluator {
    diversity: LexicalDiversityCalculator,
    sophistication: SophisticationChecker,
    precision: PrecisionChecker,
    weights: VocabularyWeights,
}

impl VocabularyEvaluator {
    pub fn new(
        pipeline: Arc<dyn Pipeline>,
        lexicon: Arc<dyn Lexicon>,
        issues: Arc<dyn IssueSource>,
    ) -> Self {
        Self::with_weights(pipeline, lexicon, issues, VocabularyWeights::default())
    }

    pub fn with_weights(
        pipeline: Arc<dyn Pipeline>,
        lexicon: Arc<dyn Lexicon>,
        issues: Arc<dyn IssueSource>,
        weights: VocabularyWeights,
    ) -> Self {
        Self {
            diversity: LexicalDiversityCalculator::new(Arc::clone(&pipeline)),
            sophistication: SophisticationChecker::new(pipeline, lexicon),
            precision: PrecisionChecker::new(issues),
            weights,
        }
    }

    pub fn evaluate(&self, text: &str) -> Result<VocabularyResult> {
        self.evaluate_with_replacements(text, &HashSet::new())
    }

    pub fn evaluate_with_replacements(
        &self,
        text: &str,
        replacement_words: &HashSet<ReplacementWord>,
    ) -> Result<VocabularyResult> {
        let lexical_diversity = self.diversity.compute(text);
        let sophistication = self.sophistication.evaluate(text, replacement_words);
        let precision = self.precision.evaluate(text)?;

        let score = combine(
            &self.weights,
            lexical_diversity.ttr,
            sophistication.score,
            precision.score,
        );

        Ok(VocabularyResult {
            score,
            lexical_diversity,
            sophistication,
            precision,
        })
    }
}

/// The composite score: a weighted sum of the three sub-scores, rounded
/// to 3 decimals half-to-even.
pub fn combine(
    weights: &VocabularyWeights,
    ttr: Score,
    sophistication: Score,
    precision: Score,
) -> Score {
    round_to(
        ttr * weights.lexical_diversity
            + sophistication * weights.sophistication
            + precision * weights.precision,
        3,
    )
}
