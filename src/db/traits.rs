// Comment store trait — backend-agnostic async interface for the trigger.
//
// Implementor: SqliteCommentStore (wraps rusqlite). Methods are async so a
// natively async backend fits behind the same interface as the
// Mutex-wrapped rusqlite connection.

use anyhow::Result;
use async_trait::async_trait;

use super::models::{Comment, CommentCounts};

#[async_trait]
pub trait CommentStore: Send + Sync {
    // --- Lifecycle ---

    /// Count the number of user-created tables in the database.
    async fn table_count(&self) -> Result<i64>;

    // --- Comments ---

    /// Record a raw create/update of a comment.
    async fn upsert_comment(&self, id: &str, content: Option<&str>) -> Result<()>;

    /// Write moderated text back to the same record if it still holds
    /// `original`. Returns `false` when a newer write superseded it.
    async fn save_moderated_content(
        &self,
        id: &str,
        original: &str,
        moderated: &str,
    ) -> Result<bool>;

    /// Load a single comment.
    async fn get_comment(&self, id: &str) -> Result<Option<Comment>>;

    /// Most recently written comments, newest first.
    async fn get_recent_comments(&self, limit: u32) -> Result<Vec<Comment>>;

    /// Every stored comment.
    async fn get_all_comments(&self) -> Result<Vec<Comment>>;

    /// Total / moderated / empty counts.
    async fn comment_counts(&self) -> Result<CommentCounts>;

    // --- Moderator state ---

    /// Get a state value by key (e.g., "last_sweep_at").
    async fn get_state(&self, key: &str) -> Result<Option<String>>;

    /// Set a state value (upsert).
    async fn set_state(&self, key: &str, value: &str) -> Result<()>;
}
