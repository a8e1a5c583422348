//! Conversation engine for gemchat.
//!
//! Provides:
//! - `Session`: ordered turn history with a one-request-in-flight guarantee
//! - The `CompletionClient` trait, the session's only external collaborator
//! - `GeminiClient`: a `CompletionClient` for the Generative Language API

pub mod gemini;
pub mod session;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};
pub use session::{Session, DEFAULT_GREETING, DEFAULT_MODEL, NO_CONTENT_PLACEHOLDER};

/// A completion provider: given a credential, a model id, and the ordered
/// turn history, produces the next assistant reply text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        credential: &str,
        model: &str,
        turns: &[Turn],
    ) -> Result<String, ProviderError>;
}

/// One message in the conversation. Immutable once appended to a session.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Failures surfaced by a completion provider. The session treats every
/// kind uniformly: the display string lands in `last_error`.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    Api(String),
    #[error("rate limited")]
    RateLimited,
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
}
