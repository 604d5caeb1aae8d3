use std::path::Path;

use walkdir::WalkDir;

use crate::error::{GaugeError, Result};

const TEXT_EXTENSIONS: [&str; 3] = ["txt", "md", "markdown"];

/// One text to analyze, with a display name for reporting.
#[derive(Debug, Clone)]
pub struct TextInput {
    pub name: String,
    pub text: String,
}

/// Resolve a path into analyzable texts: a file is read directly, a
/// directory is walked for text files (sorted for stable output).
pub fn collect_inputs(path: &Path) -> Result<Vec<TextInput>> {
    if !path.exists() {
        return Err(GaugeError::PathNotFound(path.display().to_string()));
    }

    if path.is_file() {
        return Ok(vec![TextInput {
            name: path.display().to_string(),
            text: std::fs::read_to_string(path)?,
        }]);
    }

    let mut files: Vec<_> = WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|file| {
            file.extension()
                .and_then(|extension| extension.to_str())
                .map(|extension| TEXT_EXTENSIONS.contains(&extension.to_lowercase().as_str()))
                .unwrap_or(false)
        })
        .collect();
    files.sort();

    let mut inputs = Vec::with_capacity(files.len());
    for file in files {
        inputs.push(TextInput {
            name: file.display().to_string(),
            text: std::fs::read_to_string(&file)?,
        });
    }
    Ok(inputs)
}
