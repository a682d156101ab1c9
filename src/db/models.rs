// Data models — Rust structs that map to database rows.
//
// Kept apart from the queries so the trigger and output modules can use
// them without depending on rusqlite directly.

use serde::{Deserialize, Serialize};

/// A stored comment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    /// The text field the trigger moderates. `None` for records written
    /// without any content.
    pub comment_content: Option<String>,
    /// Whether the last write was rewritten by moderation.
    pub moderated: bool,
    /// When moderation last rewrote the text.
    pub moderated_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Store-wide counts for `status`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentCounts {
    pub total: u64,
    pub moderated: u64,
    pub empty: u64,
}
