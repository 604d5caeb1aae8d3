pub mod lexicon;

use std::collections::HashSet;
use std::path::Path;

use crate::error::Result;

/// One unit of text as seen by the checkers.
#[derive(Debug, Clone)]
pub struct Token {
    pub text: String,
    pub is_alpha: bool,
    pub is_stop: bool,
    pub is_punct: bool,
}

/// Seam to the tokenizing pipeline. The checkers never split text
/// themselves; they consume whatever tokens the pipeline hands them,
/// so richer linguistic pipelines can be plugged in unchanged.
pub trait Pipeline {
    fn tokens(&self, text: &str) -> Vec<Token>;
}

/// Minimal standalone pipeline: whitespace segmentation with punctuation
/// trimming and a configurable stopword list. Enough for the CLI to run
/// without any external models.
pub struct BasicPipeline {
    stopwords: HashSet<String>,
}

impl BasicPipeline {
    pub fn new() -> Self {
        Self::with_stopwords(default_stopwords())
    }

    pub fn with_stopwords(words: impl IntoIterator<Item = String>) -> Self {
        Self {
            stopwords: words
                .into_iter()
                .map(|word| word.trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    /// Load one stopword per line; blank lines and `#` comments are skipped.
    pub fn from_stopword_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::with_stopwords(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string),
        ))
    }
}

impl Default for BasicPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline for BasicPipeline {
    fn tokens(&self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .map(|chunk| {
                let trimmed = chunk.trim_matches(|c: char| !c.is_alphanumeric());
                if trimmed.is_empty() {
                    return Token {
                        text: chunk.to_string(),
                        is_alpha: false,
                        is_stop: false,
                        is_punct: true,
                    };
                }
                Token {
                    text: trimmed.to_string(),
                    is_alpha: trimmed.chars().all(char::is_alphabetic),
                    is_stop: self.stopwords.contains(&trimmed.to_lowercase()),
                    is_punct: false,
                }
            })
            .collect()
    }
}

fn default_stopwords() -> impl Iterator<Item = String> {
    [
        "a", "an", "the", "and", "or", "but", "if", "then", "else", "when", "while", "for", "to",
        "of", "in", "on", "at", "by", "with", "from", "as", "is", "am", "are", "was", "were", "be",
        "been", "being", "do", "does", "did", "have", "has", "had", "will", "would", "can",
        "could", "shall", "should", "may", "might", "must", "not", "no", "nor", "so", "too",
        "very", "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
        "my", "your", "his", "its", "our", "their", "this", "that", "these", "those", "there",
        "here", "what", "which", "who", "whom", "how", "why", "where",
    ]
    .into_iter()
    .map(str::to_string)
}
