//! Chat types for Parley.
//!
//! A chat is a named conversation container. Once created it never changes;
//! the only lifecycle transition is deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum chat title length, counted in characters after trimming.
pub const MAX_TITLE_CHARS: usize = 200;

/// A persisted chat.
///
/// `id` and `created_at` are assigned by the store on insert. Serialized
/// with PascalCase keys (`Id`, `Title`, `CreatedAt`) to keep the wire format
/// stable for existing clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Chat {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a chat. The title must already be validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChat {
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_serializes_pascal_case() {
        let chat = Chat {
            id: 1,
            title: "Family Chat".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&chat).unwrap();
        assert!(json.contains("\"Id\":1,\"Title\":\"Family Chat\""));
        assert!(json.contains("\"CreatedAt\""));
    }
}
