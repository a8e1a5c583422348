//! CompletionClient trait implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{CompletionClient, ProviderError, Turn};

use super::client::GeminiClient;

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(
        &self,
        credential: &str,
        model: &str,
        turns: &[Turn],
    ) -> Result<String, ProviderError> {
        let body = self.build_request_body(turns);
        let url = self.api_url(model);

        debug!(%model, turns = turns.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", credential)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        self.parse_response(json)
    }
}
