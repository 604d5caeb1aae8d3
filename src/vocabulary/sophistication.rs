use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use crate::nlp::{lexicon::Lexicon, Pipeline};
use crate::types::scoring::{round_to, Score};
use crate::vocabulary::ReplacementWord;

// Zipf thresholds separating the frequency buckets.
const COMMON_THRESHOLD: Score = 5.0;
const MID_THRESHOLD: Score = 3.5;

// Bucket weights; rarer words count for more.
const COMMON_WEIGHT: Score = 1.0;
const MID_WEIGHT: Score = 1.5;
const RARE_WEIGHT: Score = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SophisticationLevel {
    Basic,
    Moderate,
    Advanced,
    Sophisticated,
}

impl SophisticationLevel {
    pub fn from_score(score: Score) -> Self {
        if score < 0.25 {
            SophisticationLevel::Basic
        } else if score < 0.5 {
            SophisticationLevel::Moderate
        } else if score < 0.75 {
            SophisticationLevel::Advanced
        } else {
            SophisticationLevel::Sophisticated
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreMethod {
    Linear,
    Sigmoid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SophisticationResult {
    pub score: Score,
    pub common_count: usize,
    pub mid_count: usize,
    pub rare_count: usize,
    pub word_count: usize,
    pub level: SophisticationLevel,
}

#[derive(Debug, Clone, Copy, Default)]
struct BucketCounts {
    common: usize,
    mid: usize,
    rare: usize,
}

/// Scores vocabulary advancedness from the frequency distribution of
/// words: 0.0 for a text of only very common words, 1.0 for only very
/// rare ones.
pub struct SophisticationChecker {
    pipeline: Arc<dyn Pipeline>,
    lexicon: Arc<dyn Lexicon>,
}

impl SophisticationChecker {
    pub fn new(pipeline: Arc<dyn Pipeline>, lexicon: Arc<dyn Lexicon>) -> Self {
        Self { pipeline, lexicon }
    }

    /// Replacement words are included in the classification: each pair's
    /// suggested word is bucketed alongside the text's own tokens.
    pub fn evaluate(
        &self,
        text: &str,
        replacement_words: &HashSet<ReplacementWord>,
    ) -> SophisticationResult {
        let tokens = self.pipeline.tokens(text);

        // Stopwords count toward length but are not classified.
        let mut total_words = tokens.iter().filter(|token| !token.is_punct).count();
        total_words += replacement_words.len();

        let mut counts = BucketCounts::default();
        for token in &tokens {
            if token.is_stop || token.is_punct {
                continue;
            }
            self.classify(&token.text, &mut counts);
        }
        for pair in replacement_words {
            self.classify(&pair.replacement, &mut counts);
        }

        let (score, level) = compute_score(counts, total_words, ScoreMethod::Linear);

        SophisticationResult {
            score,
            common_count: counts.common,
            mid_count: counts.mid,
            rare_count: counts.rare,
            word_count: total_words,
            level,
        }
    }

    fn classify(&self, word: &str, counts: &mut BucketCounts) {
        let zipf = self.lexicon.zipf_frequency(&word.to_lowercase());
        if zipf >= COMMON_THRESHOLD {
            counts.common += 1;
        } else if zipf >= MID_THRESHOLD {
            counts.mid += 1;
        } else {
            counts.rare += 1;
        }
    }
}

fn compute_score(
    counts: BucketCounts,
    total_words: usize,
    method: ScoreMethod,
) -> (Score, SophisticationLevel) {
    if total_words == 0 {
        return (0.0, SophisticationLevel::Basic);
    }

    let total = total_words as Score;
    let weighted_score = (counts.common as Score * COMMON_WEIGHT
        + counts.mid as Score * MID_WEIGHT
        + counts.rare as Score * RARE_WEIGHT)
        / total;
    let meaningful_ratio = (counts.mid + counts.rare) as Score / total;

    let score = match method {
        ScoreMethod::Linear => {
            let ratio_adjustment = 0.5 + meaningful_ratio * 0.5;
            round_to((weighted_score * ratio_adjustment).min(1.0), 4)
        }
        ScoreMethod::Sigmoid => {
            let ratio_adjustment = 1.0 / (1.0 + (-5.0 * (meaningful_ratio - 0.4)).exp());
            round_to((weighted_score * ratio_adjustment).sqrt().min(1.0), 4)
        }
    };

    (score, SophisticationLevel::from_score(score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::BasicPipeline;
    use std::collections::HashMap;

    struct StaticLexicon(HashMap<&'static str, Score>);

    impl Lexicon for StaticLexicon {
        fn zipf_frequency(&self, word: &str) -> Score {
            self.0.get(word).copied().unwrap_or(0.0)
        }
    }

    fn checker(entries: &[(&'static str, Score)]) -> SophisticationChecker {
        SophisticationChecker::new(
            Arc::new(BasicPipeline::new()),
            Arc::new(StaticLexicon(entries.iter().copied().collect())),
        )
    }

    fn no_replacements() -> HashSet<ReplacementWord> {
        HashSet::new()
    }

    #[test]
    fn buckets_words_by_zipf_frequency() {
        let checker = checker(&[("cat", 6.0), ("ubiquitous", 4.0), ("perspicacious", 1.0)]);
        let result = checker.evaluate("cat ubiquitous perspicacious", &no_replacements());

        assert_eq!(result.common_count, 1);
        assert_eq!(result.mid_count, 1);
        assert_eq!(result.rare_count, 1);
        assert_eq!(result.word_count, 3);
    }

    #[test]
    fn linear_score_matches_hand_computation() {
        // common=1, mid=1, total=2: weighted = (1.0 + 1.5)/2 = 1.25,
        // meaningful = 0.5, adjustment = 0.75, score = 0.9375.
        let checker = checker(&[("cat", 6.0), ("ubiquitous", 4.0)]);
        let result = checker.evaluate("cat ubiquitous", &no_replacements());

        assert_eq!(result.score, 0.9375);
        assert_eq!(result.level, SophisticationLevel::Sophisticated);
    }

    #[test]
    fn common_only_text_scores_low() {
        // weighted = 1.0, meaningful = 0.0, adjustment = 0.5 -> 0.5.
        let checker = checker(&[("cat", 6.0), ("dog", 6.0)]);
        let result = checker.evaluate("cat dog", &no_replacements());

        assert_eq!(result.score, 0.5);
        assert_eq!(result.level, SophisticationLevel::Advanced);
    }

    #[test]
    fn unknown_words_are_rare() {
        let checker = checker(&[]);
        let result = checker.evaluate("xylophage", &no_replacements());
        assert_eq!(result.rare_count, 1);
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn stopwords_dilute_the_score_but_are_not_classified() {
        let checker = checker(&[("cat", 6.0)]);
        // "the" is a stopword: counts toward word_count only.
        let result = checker.evaluate("the cat", &no_replacements());

        assert_eq!(result.word_count, 2);
        assert_eq!(result.common_count, 1);
        // weighted = 1.0/2 = 0.5, meaningful = 0, adjustment = 0.5 -> 0.25.
        assert_eq!(result.score, 0.25);
        assert_eq!(result.level, SophisticationLevel::Moderate);
    }

    #[test]
    fn empty_text_scores_zero_without_panicking() {
        let checker = checker(&[]);
        let result = checker.evaluate("", &no_replacements());

        assert_eq!(result.score, 0.0);
        assert_eq!(result.word_count, 0);
        assert_eq!(result.level, SophisticationLevel::Basic);
    }

    #[test]
    fn replacement_words_join_the_classification() {
        let checker = checker(&[("cat", 6.0), ("perspicacious", 1.0)]);
        let replacements: HashSet<ReplacementWord> = [ReplacementWord::new(
            "cat",
            "perspicacious",
        )]
        .into_iter()
        .collect();

        let result = checker.evaluate("cat", &replacements);
        // token: common, replacement: rare, total = 2:
        // weighted = (1.0 + 3.0)/2 = 2.0, capped at 1.0 after adjustment.
        assert_eq!(result.word_count, 2);
        assert_eq!(result.common_count, 1);
        assert_eq!(result.rare_count, 1);
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn sigmoid_method_damps_common_only_text() {
        // common=2, total=2: weighted = 1.0, meaningful = 0,
        // adjustment = 1/(1+e^2) ~= 0.1192, sqrt -> 0.3453.
        let (score, level) = compute_score(
            BucketCounts {
                common: 2,
                mid: 0,
                rare: 0,
            },
            2,
            ScoreMethod::Sigmoid,
        );

        assert_eq!(score, 0.3453);
        assert_eq!(level, SophisticationLevel::Moderate);
    }

    #[test]
    fn level_boundaries() {
        assert_eq!(
            SophisticationLevel::from_score(0.0),
            SophisticationLevel::Basic
        );
        assert_eq!(
            SophisticationLevel::from_score(0.25),
            SophisticationLevel::Moderate
        );
        assert_eq!(
            SophisticationLevel::from_score(0.5),
            SophisticationLevel::Advanced
        );
        assert_eq!(
            SophisticationLevel::from_score(0.75),
            SophisticationLevel::Sophisticated
        );
    }
}
