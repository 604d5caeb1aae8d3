use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use crate::nlp::Pipeline;
use crate::types::scoring::{round_to, Score};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LexicalDiversityResult {
    pub ttr: Score,
    pub word_count: usize,
    pub unique_count: usize,
}

/// Computes the type-token ratio over alphabetic, non-stopword tokens.
pub struct LexicalDiversityCalculator {
    pipeline: Arc<dyn Pipeline>,
}

impl LexicalDiversityCalculator {
    pub fn new(pipeline: Arc<dyn Pipeline>) -> Self {
        Self { pipeline }
    }

    pub fn compute(&self, text: &str) -> LexicalDiversityResult {
        let words: Vec<String> = self
            .pipeline
            .tokens(text)
            .into_iter()
            .filter(|token| token.is_alpha && !token.is_stop)
            .map(|token| token.text.to_lowercase())
            .collect();

        let total = words.len();
        let unique = words.iter().collect::<HashSet<_>>().len();

        if total == 0 {
            return LexicalDiversityResult {
                ttr: 0.0,
                word_count: 0,
                unique_count: 0,
            };
        }

        LexicalDiversityResult {
            ttr: round_to(unique as Score / total as Score, 4),
            word_count: total,
            unique_count: unique,
        }
    }
}
