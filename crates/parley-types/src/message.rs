//! Message types for Parley.
//!
//! A message is a single piece of text that belongs to exactly one chat.
//! Messages are only ever read through chat-scoped listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum message length in characters. Text is stored verbatim.
pub const MAX_TEXT_CHARS: usize = 5000;

/// A persisted message.
///
/// Serialized with PascalCase keys (`Id`, `ChatId`, `Text`, `CreatedAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Message {
    pub id: i64,
    pub chat_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub chat_id: i64,
    pub text: String,
}
