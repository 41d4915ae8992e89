//! Gemini Provider Implementation
//!
//! Integration with Google's Generative Language API (the Gemini model
//! family). One HTTP POST per `generate` call, no retries: the resolver's
//! contract absorbs provider faults into a user-facing message, so failing
//! fast is preferable to stacking latency onto an interactive chat turn.
//!
//! # Examples
//!
//! ```no_run
//! use parcelbot_llm::GeminiProvider;
//!
//! let provider = GeminiProvider::new("api-key", "gemini-pro");
//!
//! // The generate method is async; the TextGenerator trait impl wraps it
//! // for synchronous callers.
//! ```

use crate::ProviderError;
use parcelbot_domain::TextGenerator;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default model identifier to request
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Default base URL of the Generative Language API
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default timeout for provider requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Generative Language API provider
///
/// Sends prompts to the `models/{model}:generateContent` endpoint and returns
/// the first candidate's text.
pub struct GeminiProvider {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

/// Request body for the generateContent API
#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

/// Response from the generateContent API
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiProvider {
    /// Create a new provider for the given API key and model.
    ///
    /// # Parameters
    ///
    /// - `api_key`: Generative Language API credential
    /// - `model`: model identifier (e.g. "gemini-pro")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("reqwest client with static configuration");

        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: model.into(),
            client,
        }
    }

    /// Create a provider with the default model.
    pub fn default_model(api_key: impl Into<String>) -> Self {
        Self::new(api_key, DEFAULT_MODEL)
    }

    /// Override the API base URL. Used by tests to point at a local stub.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Generate text for a prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - no API key is configured
    /// - the network request fails or times out
    /// - the API answers with a non-success status
    /// - the response carries no candidate text
    pub async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::MissingApiKey);
        }

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ProviderError::Communication(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::Communication(format!(
                "HTTP {status}: {error_text}"
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        let candidate = body
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Blocked("no candidates in response".to_string()))?;

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|p| p.text)
            .collect();

        if text.is_empty() {
            return Err(ProviderError::InvalidResponse(
                "candidate carried no text".to_string(),
            ));
        }

        Ok(text)
    }
}

impl TextGenerator for GeminiProvider {
    type Error = ProviderError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        // Blocking wrapper for the async call; the resolver is synchronous.
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ProviderError::Other(format!("runtime: {e}")))?
            .block_on(async { self.generate(prompt).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_creation() {
        let provider = GeminiProvider::new("key", "gemini-pro");
        assert_eq!(provider.model, "gemini-pro");
        assert_eq!(provider.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_default_model() {
        let provider = GeminiProvider::default_model("key");
        assert_eq!(provider.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_with_base_url() {
        let provider = GeminiProvider::new("key", "gemini-pro")
            .with_base_url("http://localhost:8080/v1beta");
        assert_eq!(provider.base_url, "http://localhost:8080/v1beta");
    }

    #[tokio::test]
    async fn test_missing_api_key() {
        let provider = GeminiProvider::new("", "gemini-pro");
        let result = provider.generate("test").await;
        assert!(matches!(result, Err(ProviderError::MissingApiKey)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_communication_error() {
        let provider = GeminiProvider::new("key", "gemini-pro")
            .with_base_url("http://127.0.0.1:1/v1beta");
        let result = provider.generate("test").await;
        match result {
            Err(ProviderError::Communication(_)) => {}
            other => panic!("expected Communication error, got {other:?}"),
        }
    }

    #[test]
    fn test_response_parsing() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Hallo "}, {"text": "daar"}]}}
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let text: String = parsed.candidates[0]
            .content
            .parts
            .iter()
            .map(|p| p.text.clone())
            .collect();
        assert_eq!(text, "Hallo daar");
    }

    #[test]
    fn test_empty_response_parses_to_no_candidates() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
