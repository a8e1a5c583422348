//! The submit lifecycle: one user turn in, at most one assistant turn out.

use tracing::debug;

use crate::{CompletionClient, Turn};

use super::manager::Session;
use super::types::PendingGuard;

/// Reply text substituted when the provider returns empty content.
pub const NO_CONTENT_PLACEHOLDER: &str = "[no content]";

impl Session {
    /// Submit a user turn and await the assistant's reply.
    ///
    /// Returns `true` when the turn was accepted, telling the caller to
    /// clear its input buffer. Whitespace-only input and submits issued
    /// while another request is in flight are no-ops returning `false`.
    /// A missing credential is reported through `last_error` without
    /// contacting the provider.
    ///
    /// Provider failures never propagate: they land in `last_error` and no
    /// assistant turn is appended. The assistant turn only exists on
    /// confirmed success, with [`NO_CONTENT_PLACEHOLDER`] standing in for
    /// an empty reply. The pending flag is released on every path.
    pub async fn submit(&mut self, client: &dyn CompletionClient, text: &str) -> bool {
        let content = text.trim();
        if content.is_empty() {
            return false;
        }
        if self.credential.is_empty() {
            self.last_error = Some("credential required".to_string());
            return false;
        }
        let Some(_guard) = PendingGuard::acquire(&self.pending) else {
            return false;
        };

        self.last_error = None;
        self.history.push(Turn::user(content));

        debug!(
            model = %self.model_id,
            turns = self.history.len(),
            "dispatching completion request"
        );

        match client
            .complete(&self.credential, &self.model_id, &self.history)
            .await
        {
            Ok(reply) => {
                let text = if reply.is_empty() {
                    NO_CONTENT_PLACEHOLDER.to_string()
                } else {
                    reply
                };
                self.history.push(Turn::assistant(text));
            }
            Err(err) => {
                debug!(error = %err, "completion request failed");
                self.last_error = Some(err.to_string());
            }
        }

        true
    }
}
