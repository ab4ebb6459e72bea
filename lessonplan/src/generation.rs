//! Generation service client
//!
//! One opaque remote call: send the composed prompt, get Markdown text back.
//! The caller sees a [`TextGenerator`] trait so the pipeline can be exercised
//! without any network; [`GeminiClient`] is the production implementation
//! against the Gemini `generateContent` REST endpoint.

use serde::Deserialize;
use thiserror::Error;

/// Model the plan is generated with unless overridden
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Base URL of the generateContent REST API
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Errors surfaced by the generation call; all of them are distinct from
/// form validation and reported as a generic service failure to the user
#[derive(Error, Debug)]
pub enum GenerationError {
    /// No API key configured
    #[error("no API key configured: set GEMINI_API_KEY (or API_KEY) in the environment or .env")]
    MissingApiKey,

    /// Transport-level failure (connect, TLS, decode)
    #[error("generation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("generation service returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// The response parsed but carried no usable text
    #[error("generation service returned no usable content")]
    EmptyResponse,
}

/// The text-completion collaborator
pub trait TextGenerator {
    /// Send one prompt and return the raw Markdown text of the reply
    fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Blocking HTTP client for the Gemini generateContent endpoint
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    http: reqwest::blocking::Client,
}

impl GeminiClient {
    /// Create a client with an explicit key and model
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: API_BASE.to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Create a client from `GEMINI_API_KEY` / `API_KEY`, consulting a
    /// `.env` file if present
    pub fn from_env() -> Result<Self, GenerationError> {
        dotenvy::dotenv().ok();
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .map_err(|_| GenerationError::MissingApiKey)?;
        Ok(Self::new(api_key, DEFAULT_MODEL))
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        log::info!("requesting lesson plan from model {}", self.model);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()?;

        if !response.status().is_success() {
            log::warn!("generation request failed with {}", response.status());
            return Err(GenerationError::Status(response.status()));
        }

        let parsed: GenerateContentResponse = response.json()?;
        extract_text(parsed).ok_or(GenerationError::EmptyResponse)
    }
}

/// Concatenate all candidate part texts; `None` when nothing usable came back
fn extract_text(response: GenerateContentResponse) -> Option<String> {
    let text: String = response
        .candidates
        .into_iter()
        .filter_map(|candidate| candidate.content)
        .flat_map(|content| content.parts)
        .map(|part| part.text)
        .collect();

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_from_typical_response() {
        // Arrange: the usual single-candidate shape
        let json = r##"{
            "candidates": [
                { "content": { "parts": [ { "text": "# TÊN BÀI DẠY:\n" }, { "text": "nội dung" } ] } }
            ]
        }"##;

        // Act
        let parsed: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let text = extract_text(parsed);

        // Assert: parts concatenate in order
        assert_eq!(text.as_deref(), Some("# TÊN BÀI DẠY:\nnội dung"));
    }

    #[test]
    fn test_extract_text_rejects_empty_candidates() {
        let parsed: GenerateContentResponse = serde_json::from_str(r#"{ "candidates": [] }"#).unwrap();

        assert!(extract_text(parsed).is_none());
    }

    #[test]
    fn test_extract_text_rejects_blank_parts() {
        // A blocked or filtered reply may carry whitespace-only text
        let json = r#"{ "candidates": [ { "content": { "parts": [ { "text": "  \n" } ] } } ] }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(json).unwrap();

        assert!(extract_text(parsed).is_none());
    }

    #[test]
    fn test_response_tolerates_missing_fields() {
        // No candidates key at all, and a candidate without content
        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(extract_text(empty).is_none());

        let partial: GenerateContentResponse =
            serde_json::from_str(r#"{ "candidates": [ {} ] }"#).unwrap();
        assert!(extract_text(partial).is_none());
    }
}
