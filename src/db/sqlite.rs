// SqliteCommentStore — rusqlite backend implementing the CommentStore trait.
//
// The Connection is wrapped in tokio::sync::Mutex because Connection is !Sync.
// Trait methods lock the mutex, do synchronous rusqlite work, and return.
// The lock is never held across .await points.

use anyhow::Result;
use async_trait::async_trait;
use rusqlite::Connection;
use tokio::sync::Mutex;

use super::models::{Comment, CommentCounts};
use super::traits::CommentStore;

pub struct SqliteCommentStore {
    conn: Mutex<Connection>,
}

impl SqliteCommentStore {
    /// Wrap an already-opened rusqlite Connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

#[async_trait]
impl CommentStore for SqliteCommentStore {
    async fn table_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::schema::table_count(&conn)
    }

    async fn upsert_comment(&self, id: &str, content: Option<&str>) -> Result<()> {
        let conn = self.conn.lock().await;
        super::queries::upsert_comment(&conn, id, content)
    }

    async fn save_moderated_content(
        &self,
        id: &str,
        original: &str,
        moderated: &str,
    ) -> Result<bool> {
        let conn = self.conn.lock().await;
        super::queries::save_moderated_content(&conn, id, original, moderated)
    }

    async fn get_comment(&self, id: &str) -> Result<Option<Comment>> {
        let conn = self.conn.lock().await;
        super::queries::get_comment(&conn, id)
    }

    async fn get_recent_comments(&self, limit: u32) -> Result<Vec<Comment>> {
        let conn = self.conn.lock().await;
        super::queries::get_recent_comments(&conn, limit)
    }

    async fn get_all_comments(&self) -> Result<Vec<Comment>> {
        let conn = self.conn.lock().await;
        super::queries::get_all_comments(&conn)
    }

    async fn comment_counts(&self) -> Result<CommentCounts> {
        let conn = self.conn.lock().await;
        super::queries::comment_counts(&conn)
    }

    async fn get_state(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().await;
        super::queries::get_state(&conn, key)
    }

    async fn set_state(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().await;
        super::queries::set_state(&conn, key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::create_tables;

    async fn test_db() -> SqliteCommentStore {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        SqliteCommentStore::new(conn)
    }

    #[tokio::test]
    async fn test_trait_table_count() {
        let db = test_db().await;
        assert_eq!(db.table_count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_trait_state_roundtrip() {
        let db = test_db().await;
        assert_eq!(db.get_state("last_sweep_at").await.unwrap(), None);
        db.set_state("last_sweep_at", "2026-03-01 10:00:00")
            .await
            .unwrap();
        assert_eq!(
            db.get_state("last_sweep_at").await.unwrap(),
            Some("2026-03-01 10:00:00".to_string())
        );
    }

    #[tokio::test]
    async fn test_trait_comment_roundtrip() {
        let db = test_db().await;
        assert!(db.get_comment("c1").await.unwrap().is_none());

        db.upsert_comment("c1", Some("HI THERE")).await.unwrap();
        assert!(db
            .save_moderated_content("c1", "HI THERE", "Hi there")
            .await
            .unwrap());

        let comment = db.get_comment("c1").await.unwrap().unwrap();
        assert_eq!(comment.comment_content.as_deref(), Some("Hi there"));
        assert!(comment.moderated);

        let counts = db.comment_counts().await.unwrap();
        assert_eq!(counts.total, 1);
        assert_eq!(counts.moderated, 1);
        assert_eq!(db.get_all_comments().await.unwrap().len(), 1);
        assert_eq!(db.get_recent_comments(10).await.unwrap().len(), 1);
    }
}
