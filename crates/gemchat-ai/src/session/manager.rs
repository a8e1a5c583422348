//! Session struct and conversation state.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::{Role, Turn};

/// Model targeted when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Greeting seeded as the first assistant turn of every session.
pub const DEFAULT_GREETING: &str =
    "Hi! I'm your gaming assistant. Ask me anything about games.";

/// A conversation session: ordered, append-only turn history plus the
/// state of the single exchange a session may have in flight.
pub struct Session {
    /// Conversation history, oldest first.
    pub(super) history: Vec<Turn>,
    /// Model targeted by the next submit.
    pub(super) model_id: String,
    /// API credential; empty refuses submits.
    pub(super) credential: String,
    /// Message from the most recent failed submit.
    pub(super) last_error: Option<String>,
    /// Whether a submit is currently in flight.
    pub(super) pending: AtomicBool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            history: vec![Turn::assistant(DEFAULT_GREETING)],
            model_id: DEFAULT_MODEL.to_string(),
            credential: String::new(),
            last_error: None,
            pending: AtomicBool::new(false),
        }
    }

    pub fn with_model(mut self, id: impl Into<String>) -> Self {
        self.model_id = id.into();
        self
    }

    pub fn with_credential(mut self, value: impl Into<String>) -> Self {
        self.credential = value.into();
        self
    }

    /// Replace the text of the seeded greeting turn.
    pub fn with_greeting(mut self, text: impl Into<String>) -> Self {
        if let Some(first) = self.history.first_mut() {
            if first.role == Role::Assistant {
                first.text = text.into();
            }
        }
        self
    }

    /// Select the model targeted by the next submit. Not validated; the
    /// remote API is the source of truth for model ids.
    pub fn set_model(&mut self, id: impl Into<String>) {
        self.model_id = id.into();
    }

    /// Replace the credential. Validity is discovered at submit time.
    pub fn set_credential(&mut self, value: impl Into<String>) {
        self.credential = value.into();
    }

    /// Full conversation history, oldest first.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn credential(&self) -> &str {
        &self.credential
    }

    /// Message from the most recent failed submit, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether a submit is currently in flight.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Number of turns in history.
    pub fn turn_count(&self) -> usize {
        self.history.len()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
