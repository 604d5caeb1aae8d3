use std::collections::HashMap;

use serde::Deserialize;

use crate::error::GaugeError;
use crate::langtool::DEFAULT_LANGUAGETOOL_URL;
use crate::types::scoring::Score;
use crate::vocabulary::VocabularyWeights;

pub const DEFAULT_LANGUAGE_TAG: &str = "en-US";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Weights for combining component scores into the global score.
/// The remainder up to 1.0 is reserved for components not yet scored
/// (clarity, coherence).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub correctness: Score,
    pub vocabulary: Score,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            correctness: 0.25,
            vocabulary: 0.20,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GaugeConfig {
    pub language: Option<LanguageConfig>,
    pub vocabulary: Option<VocabularyConfig>,
    pub score: Option<ScoreConfig>,
    pub languagetool: Option<LanguageToolConfig>,
    pub lexicon: Option<LexiconConfig>,
    pub nlp: Option<NlpConfig>,
    pub thresholds: Option<ThresholdConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageConfig {
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VocabularyConfig {
    pub weights: Option<HashMap<String, Score>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoreConfig {
    pub weights: Option<HashMap<String, Score>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageToolConfig {
    pub url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LexiconConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NlpConfig {
    pub stopwords_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdConfig {
    pub min_overall: Option<Score>,
}

impl GaugeConfig {
    pub fn language_tag(&self) -> &str {
        self.language
            .as_ref()
            .and_then(|language| language.tag.as_deref())
            .unwrap_or(DEFAULT_LANGUAGE_TAG)
    }

    pub fn vocabulary_weights(&self) -> VocabularyWeights {
        let defaults = VocabularyWeights::default();
        match self
            .vocabulary
            .as_ref()
            .and_then(|vocabulary| vocabulary.weights.as_ref())
        {
            Some(weights) => VocabularyWeights {
                lexical_diversity: *weights
                    .get("lexical_diversity")
                    .unwrap_or(&defaults.lexical_diversity),
                sophistication: *weights
                    .get("sophistication")
                    .unwrap_or(&defaults.sophistication),
                precision: *weights.get("precision").unwrap_or(&defaults.precision),
            },
            None => defaults,
        }
    }

    pub fn score_weights(&self) -> ScoreWeights {
        let defaults = ScoreWeights::default();
        match self.score.as_ref().and_then(|score| score.weights.as_ref()) {
            Some(weights) => ScoreWeights {
                correctness: *weights.get("correctness").unwrap_or(&defaults.correctness),
                vocabulary: *weights.get("vocabulary").unwrap_or(&defaults.vocabulary),
            },
            None => defaults,
        }
    }

    pub fn languagetool_url(&self) -> &str {
        self.languagetool
            .as_ref()
            .and_then(|languagetool| languagetool.url.as_deref())
            .unwrap_or(DEFAULT_LANGUAGETOOL_URL)
    }

    pub fn languagetool_timeout_secs(&self) -> u64 {
        self.languagetool
            .as_ref()
            .and_then(|languagetool| languagetool.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    pub fn lexicon_path(&self) -> Option<&str> {
        self.lexicon
            .as_ref()
            .and_then(|lexicon| lexicon.path.as_deref())
    }

    pub fn stopwords_path(&self) -> Option<&str> {
        self.nlp.as_ref().and_then(|nlp| nlp.stopwords_path.as_deref())
    }

    pub fn min_overall(&self) -> Option<Score> {
        self.thresholds
            .as_ref()
            .and_then(|thresholds| thresholds.min_overall)
    }

    pub fn validate(&self) -> Result<(), GaugeError> {
        if self.language_tag().trim().is_empty() {
            return Err(GaugeError::ConfigParse(
                "language.tag must not be empty".to_string(),
            ));
        }

        if let Some(weights) = self
            .vocabulary
            .as_ref()
            .and_then(|vocabulary| vocabulary.weights.as_ref())
        {
            const ALLOWED_KEYS: [&str; 3] = ["lexical_diversity", "sophistication", "precision"];
            reject_unknown_keys("vocabulary.weights", weights, &ALLOWED_KEYS)?;
        }
        let vocabulary = self.vocabulary_weights();
        let vocabulary_values = [
            vocabulary.lexical_diversity,
            vocabulary.sophistication,
            vocabulary.precision,
        ];
        if vocabulary_values
            .iter()
            .any(|weight| !(0.0..=1.0).contains(weight))
        {
            return Err(GaugeError::ConfigParse(
                "vocabulary.weights values must be between 0.0 and 1.0".to_string(),
            ));
        }
        let vocabulary_sum: Score = vocabulary_values.iter().sum();
        if (vocabulary_sum - 1.0).abs() > 0.001 {
            return Err(GaugeError::ConfigParse(format!(
                "vocabulary.weights must sum to 1.0 (found {:.3})",
                vocabulary_sum
            )));
        }

        if let Some(weights) = self.score.as_ref().and_then(|score| score.weights.as_ref()) {
            const ALLOWED_KEYS: [&str; 2] = ["correctness", "vocabulary"];
            reject_unknown_keys("score.weights", weights, &ALLOWED_KEYS)?;
        }
        let score = self.score_weights();
        if [score.correctness, score.vocabulary]
            .iter()
            .any(|weight| !(0.0..=1.0).contains(weight))
        {
            return Err(GaugeError::ConfigParse(
                "score.weights values must be between 0.0 and 1.0".to_string(),
            ));
        }
        if score.correctness + score.vocabulary > 1.001 {
            return Err(GaugeError::ConfigParse(format!(
                "score.weights must sum to at most 1.0 (found {:.3})",
                score.correctness + score.vocabulary
            )));
        }

        if let Some(min_overall) = self.min_overall() {
            if !(0.0..=1.0).contains(&min_overall) {
                return Err(GaugeError::ConfigParse(
                    "thresholds.min_overall must be between 0.0 and 1.0".to_string(),
                ));
            }
        }

        if self.languagetool_timeout_secs() == 0 {
            return Err(GaugeError::ConfigParse(
                "languagetool.timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn reject_unknown_keys(
    section: &str,
    weights: &HashMap<String, Score>,
    allowed: &[&str],
) -> Result<(), GaugeError> {
    let unknown = weights
        .keys()
        .filter(|key| !allowed.contains(&key.as_str()))
        .cloned()
        .collect::<Vec<_>>();
    if !unknown.is_empty() {
        return Err(GaugeError::ConfigParse(format!(
            "{} contains unknown key(s): {}",
            section,
            unknown.join(", ")
        )));
    }
    Ok(())
}
