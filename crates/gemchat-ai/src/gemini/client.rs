//! Gemini API client struct, request building, and response parsing.

use crate::{ProviderError, Role, Turn};

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    pub(crate) fn api_url(&self, model: &str) -> String {
        format!("{}/{}:generateContent", self.config.api_base, model)
    }

    /// Build the JSON request body for the Gemini API. The full history is
    /// sent so the model keeps context across turns.
    pub(crate) fn build_request_body(&self, turns: &[Turn]) -> serde_json::Value {
        let contents: Vec<_> = turns
            .iter()
            .map(|turn| {
                let role = match turn.role {
                    Role::User => "user",
                    Role::Assistant => "model",
                };
                serde_json::json!({
                    "role": role,
                    "parts": [{ "text": turn.text }]
                })
            })
            .collect();

        serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_output_tokens,
                "temperature": self.config.temperature,
            }
        })
    }

    /// Parse a Gemini response into the reply text. Multi-part candidates
    /// are joined with newlines; missing parts yield an empty reply, which
    /// the session maps to its placeholder.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<String, ProviderError> {
        let candidates = json["candidates"]
            .as_array()
            .ok_or_else(|| ProviderError::Parse("no candidates in response".to_string()))?;

        let first = candidates
            .first()
            .ok_or_else(|| ProviderError::Parse("empty candidates".to_string()))?;

        let parts = first["content"]["parts"]
            .as_array()
            .cloned()
            .unwrap_or_default();

        let text: Vec<&str> = parts
            .iter()
            .filter_map(|part| part["text"].as_str())
            .collect();

        Ok(text.join("\n"))
    }
}
