//! Gemini HTTP client for review generation.
//!
//! Uses the `generateContent` endpoint of the Google Generative Language
//! API. The UI exposes short model aliases; [`resolve_model`] maps them
//! to concrete model ids, falling back to the fastest model for unknown
//! input.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Default Generative Language API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Model aliases offered in the UI, mapped to Gemini model ids.
pub const AVAILABLE_MODELS: &[(&str, &str)] = &[
    ("flash", "gemini-2.5-flash"),
    ("pro", "gemini-2.5-pro"),
];

/// Resolve a UI alias to a model id. Unknown aliases fall back to flash.
pub fn resolve_model(alias: &str) -> &'static str {
    AVAILABLE_MODELS
        .iter()
        .find(|(name, _)| *name == alias)
        .map(|(_, id)| *id)
        .unwrap_or(AVAILABLE_MODELS[0].1)
}

/// Errors from the Gemini API.
///
/// Transport and API-status failures stay distinct so callers can word
/// their user-facing messages per case.
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("failed to reach the Gemini API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gemini API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Gemini response contained no candidates")]
    EmptyResponse,
}

/// Gemini generateContent client.
#[derive(Clone)]
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GeminiClient {
    /// Create a new client against the given API base URL.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        }
    }

    /// Create a client against the public API, reading the key from
    /// `GEMINI_API_KEY`. Returns `None` when the variable is unset or
    /// blank.
    pub fn from_env() -> Option<Self> {
        let key = std::env::var(API_KEY_ENV).ok()?;
        if key.trim().is_empty() {
            return None;
        }
        Some(Self::new(DEFAULT_BASE_URL, key.trim()))
    }

    /// Generate review text for the given prompt.
    pub async fn generate(&self, model_id: &str, prompt: &str) -> Result<String, GeminiError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, model_id
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api { status, body });
        }

        let result: GenerateResponse = response.json().await?;

        let text = result
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .map(|p| p.text)
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            return Err(GeminiError::EmptyResponse);
        }

        debug!(model_id, chars = text.len(), "Generated review text");

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_aliases_resolve() {
        assert_eq!(resolve_model("flash"), "gemini-2.5-flash");
        assert_eq!(resolve_model("pro"), "gemini-2.5-pro");
    }

    #[test]
    fn unknown_alias_falls_back_to_flash() {
        assert_eq!(resolve_model("turbo"), "gemini-2.5-flash");
        assert_eq!(resolve_model(""), "gemini-2.5-flash");
    }

    #[test]
    fn response_text_is_joined_across_parts() {
        let raw = r#"{"candidates": [{"content": {"parts": [{"text": "Hello "}, {"text": "world"}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        let text = parsed
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .map(|p| p.text)
            .collect::<Vec<_>>()
            .join("");
        assert_eq!(text, "Hello world");
    }

    #[test]
    fn missing_candidates_default_to_empty() {
        let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
