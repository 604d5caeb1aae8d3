pub mod parser;

use std::time::Duration;

use crate::error::{GaugeError, Result};
use crate::types::issue::TextIssue;

pub const DEFAULT_LANGUAGETOOL_URL: &str = "http://localhost:8081/v2/check";

/// Seam to whatever detects usage and style issues. The scorers only see
/// `TextIssue`s; where they come from is this trait's business.
pub trait IssueSource {
    fn issues(&self, text: &str) -> Result<Vec<TextIssue>>;
}

/// Client for a LanguageTool server's `/v2/check` endpoint.
/// Sync HTTP via ureq; no async runtime needed.
pub struct LanguageToolClient {
    url: String,
    language: String,
    agent: ureq::Agent,
}

impl LanguageToolClient {
    pub fn new(url: impl Into<String>, language: impl Into<String>, timeout_secs: u64) -> Self {
        let agent = ureq::config::Config::builder()
            .http_status_as_error(false)
            .timeout_global(Some(Duration::from_secs(timeout_secs)))
            .build()
            .new_agent();

        Self {
            url: url.into(),
            language: language.into(),
            agent,
        }
    }
}

impl IssueSource for LanguageToolClient {
    fn issues(&self, text: &str) -> Result<Vec<TextIssue>> {
        tracing::debug!(url = %self.url, language = %self.language, "checking text");

        let response = self
            .agent
            .post(&self.url)
            .send_form([("text", text), ("language", self.language.as_str())])
            .map_err(|e| GaugeError::LanguageTool(e.to_string()))?;

        let status = response.status().as_u16();
        if status >= 400 {
            let body = response.into_body().read_to_string().unwrap_or_default();
            return Err(GaugeError::LanguageTool(format!(
                "{} returned {}: {}",
                self.url, status, body
            )));
        }

        let parsed: parser::CheckResponse = response
            .into_body()
            .read_json()
            .map_err(|e| GaugeError::LanguageTool(e.to_string()))?;

        let issues = parser::parse_matches(parsed.matches);
        tracing::debug!(count = issues.len(), "issues received");
        Ok(issues)
    }
}
