use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use crate::error::{GaugeError, Result};
use crate::types::scoring::Score;

/// Word-frequency seam. Implementations answer in Zipf scale (roughly
/// 0 for unseen up to 8 for the most common words); 0.0 means unknown.
pub trait Lexicon {
    fn zipf_frequency(&self, word: &str) -> Score;
}

/// Frequency table loaded from a two-column CSV (`word,zipf`).
/// The table is consumed as-is; building one is someone else's job.
#[derive(Debug)]
pub struct CsvLexicon {
    table: HashMap<String, Score>,
}

impl CsvLexicon {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| GaugeError::Lexicon(format!("{}: {}", path.display(), e)))?;

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .from_reader(file);

        let mut table = HashMap::new();
        let mut skipped = 0usize;
        for record in reader.records() {
            let Ok(record) = record else {
                skipped += 1;
                continue;
            };
            if record.len() < 2 {
                skipped += 1;
                continue;
            }
            let word = record[0].trim().to_lowercase();
            let zipf: Score = match record[1].trim().parse() {
                Ok(value) => value,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            if word.is_empty() {
                skipped += 1;
                continue;
            }
            table.insert(word, zipf);
        }

        if skipped > 0 {
            tracing::warn!(path = %path.display(), skipped, "skipped invalid lexicon rows");
        }
        if table.is_empty() {
            return Err(GaugeError::Lexicon(format!(
                "{}: no usable rows",
                path.display()
            )));
        }

        Ok(Self { table })
    }
}

impl Lexicon for CsvLexicon {
    fn zipf_frequency(&self, word: &str) -> Score {
        self.table
            .get(&word.to_lowercase())
            .copied()
            .unwrap_or(0.0)
    }
}

/// Knows nothing; every word looks maximally rare. Used when no lexicon
/// file is configured and as a fixture in tests.
pub struct EmptyLexicon;

impl Lexicon for EmptyLexicon {
    fn zipf_frequency(&self, _word: &str) -> Score {
        0.0
    }
}
