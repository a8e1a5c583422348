//! Conversation session management.
//!
//! A `Session` owns the ordered turn history, the pending flag, and the
//! last error, and mediates exactly one provider exchange at a time.

mod chat;
mod manager;
mod types;


pub use chat::NO_CONTENT_PLACEHOLDER;
pub use manager::{Session, DEFAULT_GREETING, DEFAULT_MODEL};
