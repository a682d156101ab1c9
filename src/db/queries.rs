// Database queries — CRUD operations for all tables.
//
// Every database interaction goes through this module. This keeps SQL
// contained in one place and gives the rest of the app clean Rust interfaces.

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::models::{Comment, CommentCounts};

const COMMENT_COLUMNS: &str =
    "id, comment_content, moderated, moderated_at, created_at, updated_at";

fn comment_from_row(row: &Row<'_>) -> rusqlite::Result<Comment> {
    Ok(Comment {
        id: row.get(0)?,
        comment_content: row.get(1)?,
        moderated: row.get::<_, i32>(2)? != 0,
        moderated_at: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

// --- Comments ---

/// Record a raw write to a comment (create or update).
///
/// This is the write the trigger reacts to, so it clears the `moderated`
/// flag: whatever moderation did to the previous text no longer applies.
pub fn upsert_comment(conn: &Connection, id: &str, content: Option<&str>) -> Result<()> {
    conn.execute(
        "INSERT INTO comments (id, comment_content, moderated, updated_at)
         VALUES (?1, ?2, 0, datetime('now'))
         ON CONFLICT(id) DO UPDATE SET
            comment_content = ?2,
            moderated = 0,
            updated_at = datetime('now')",
        params![id, content],
    )?;
    Ok(())
}

/// Overwrite a comment's text with its moderated version, but only if the
/// stored text is still `original` (the text that was moderated).
///
/// Returns `false` when the comment was rewritten or removed since it was
/// read. The newer write wins and nothing is changed.
pub fn save_moderated_content(
    conn: &Connection,
    id: &str,
    original: &str,
    moderated: &str,
) -> Result<bool> {
    let updated = conn.execute(
        "UPDATE comments SET
            comment_content = ?3,
            moderated = 1,
            moderated_at = datetime('now'),
            updated_at = datetime('now')
         WHERE id = ?1 AND comment_content IS ?2",
        params![id, original, moderated],
    )?;
    Ok(updated == 1)
}

/// Load a single comment by id.
pub fn get_comment(conn: &Connection, id: &str) -> Result<Option<Comment>> {
    let sql = format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE id = ?1");
    let mut stmt = conn.prepare(&sql)?;
    let result = stmt.query_row(params![id], comment_from_row).optional()?;
    Ok(result)
}

/// Most recently written comments first.
pub fn get_recent_comments(conn: &Connection, limit: u32) -> Result<Vec<Comment>> {
    let sql = format!(
        "SELECT {COMMENT_COLUMNS} FROM comments
         ORDER BY updated_at DESC, rowid DESC
         LIMIT ?1"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![limit], comment_from_row)?;

    let mut comments = Vec::new();
    for row in rows {
        comments.push(row?);
    }
    Ok(comments)
}

/// Every comment in insertion order (used by sweep).
pub fn get_all_comments(conn: &Connection) -> Result<Vec<Comment>> {
    let sql = format!("SELECT {COMMENT_COLUMNS} FROM comments ORDER BY rowid");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], comment_from_row)?;

    let mut comments = Vec::new();
    for row in rows {
        comments.push(row?);
    }
    Ok(comments)
}

/// Total, moderated and empty comment counts.
pub fn comment_counts(conn: &Connection) -> Result<CommentCounts> {
    let counts = conn.query_row(
        "SELECT COUNT(*),
                COALESCE(SUM(moderated), 0),
                COALESCE(SUM(CASE WHEN comment_content IS NULL OR comment_content = '' THEN 1 ELSE 0 END), 0)
         FROM comments",
        [],
        |row| {
            Ok(CommentCounts {
                total: row.get::<_, i64>(0)? as u64,
                moderated: row.get::<_, i64>(1)? as u64,
                empty: row.get::<_, i64>(2)? as u64,
            })
        },
    )?;
    Ok(counts)
}

// --- Moderator state ---

/// Get a state value by key (e.g., "last_sweep_at").
pub fn get_state(conn: &Connection, key: &str) -> Result<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM moderator_state WHERE key = ?1")?;
    let result = stmt.query_row(params![key], |row| row.get(0)).optional()?;
    Ok(result)
}

/// Set a state value (upsert).
pub fn set_state(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO moderator_state (key, value, updated_at)
         VALUES (?1, ?2, datetime('now'))
         ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
        params![key, value],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::create_tables;

    fn test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        conn
    }

    #[test]
    fn test_state_roundtrip() {
        let conn = test_db();
        assert_eq!(get_state(&conn, "last_sweep_at").unwrap(), None);

        set_state(&conn, "last_sweep_at", "2026-01-01").unwrap();
        assert_eq!(
            get_state(&conn, "last_sweep_at").unwrap(),
            Some("2026-01-01".to_string())
        );

        // Upsert overwrites
        set_state(&conn, "last_sweep_at", "2026-02-01").unwrap();
        assert_eq!(
            get_state(&conn, "last_sweep_at").unwrap(),
            Some("2026-02-01".to_string())
        );
    }

    #[test]
    fn test_upsert_then_moderate() {
        let conn = test_db();
        upsert_comment(&conn, "c1", Some("raw text")).unwrap();

        let comment = get_comment(&conn, "c1").unwrap().unwrap();
        assert_eq!(comment.comment_content.as_deref(), Some("raw text"));
        assert!(!comment.moderated);
        assert!(comment.moderated_at.is_none());

        assert!(save_moderated_content(&conn, "c1", "raw text", "clean text").unwrap());
        let comment = get_comment(&conn, "c1").unwrap().unwrap();
        assert_eq!(comment.comment_content.as_deref(), Some("clean text"));
        assert!(comment.moderated);
        assert!(comment.moderated_at.is_some());
    }

    #[test]
    fn test_rewrite_clears_moderated_flag() {
        let conn = test_db();
        upsert_comment(&conn, "c1", Some("first")).unwrap();
        assert!(save_moderated_content(&conn, "c1", "first", "First").unwrap());
        upsert_comment(&conn, "c1", Some("second")).unwrap();

        let comment = get_comment(&conn, "c1").unwrap().unwrap();
        assert_eq!(comment.comment_content.as_deref(), Some("second"));
        assert!(!comment.moderated);
    }

    #[test]
    fn test_save_moderated_missing_comment_is_not_saved() {
        let conn = test_db();
        assert!(!save_moderated_content(&conn, "nope", "text", "****").unwrap());
        assert!(get_comment(&conn, "nope").unwrap().is_none());
    }

    #[test]
    fn test_save_moderated_keeps_newer_write() {
        let conn = test_db();
        upsert_comment(&conn, "c1", Some("darn it")).unwrap();
        // Someone edits the comment after it was read for moderation
        upsert_comment(&conn, "c1", Some("an edited, clean comment")).unwrap();

        assert!(!save_moderated_content(&conn, "c1", "darn it", "**** it").unwrap());
        let comment = get_comment(&conn, "c1").unwrap().unwrap();
        assert_eq!(
            comment.comment_content.as_deref(),
            Some("an edited, clean comment")
        );
        assert!(!comment.moderated);
    }

    #[test]
    fn test_null_content_is_stored() {
        let conn = test_db();
        upsert_comment(&conn, "c1", None).unwrap();
        let comment = get_comment(&conn, "c1").unwrap().unwrap();
        assert!(comment.comment_content.is_none());
    }

    #[test]
    fn test_recent_comments_newest_first_and_limited() {
        let conn = test_db();
        upsert_comment(&conn, "a", Some("one")).unwrap();
        upsert_comment(&conn, "b", Some("two")).unwrap();
        upsert_comment(&conn, "c", Some("three")).unwrap();

        let recent = get_recent_comments(&conn, 2).unwrap();
        let ids: Vec<&str> = recent.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b"]);

        let all = get_all_comments(&conn).unwrap();
        let ids: Vec<&str> = all.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_comment_counts() {
        let conn = test_db();
        assert_eq!(comment_counts(&conn).unwrap(), CommentCounts::default());

        upsert_comment(&conn, "a", Some("one")).unwrap();
        upsert_comment(&conn, "b", None).unwrap();
        upsert_comment(&conn, "c", Some("")).unwrap();
        assert!(save_moderated_content(&conn, "a", "one", "One").unwrap());

        let counts = comment_counts(&conn).unwrap();
        assert_eq!(counts.total, 3);
        assert_eq!(counts.moderated, 1);
        assert_eq!(counts.empty, 2);
    }
}
