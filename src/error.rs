use thiserror::Error;

#[derive(Error, Debug)]
pub enum GaugeError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("lexicon error: {0}")]
    Lexicon(String),

    #[error("languagetool error: {0}")]
    LanguageTool(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GaugeError>;
