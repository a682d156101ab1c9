// Database schema — table creation and version bookkeeping.
//
// A `schema_version` table records the schema the store was created with,
// so a later layout change has something to migrate from.

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Create all tables if they don't exist yet.
///
/// This is idempotent — safe to call on every startup.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        -- Tracks schema version for future migrations
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- Comment records, as the trigger sees them after each write
        CREATE TABLE IF NOT EXISTS comments (
            id TEXT PRIMARY KEY,
            comment_content TEXT,              -- null when the record has no text
            moderated INTEGER NOT NULL DEFAULT 0,
            moderated_at TEXT,                 -- set when moderation rewrites the text
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- Key/value state (e.g. last sweep timestamp)
        CREATE TABLE IF NOT EXISTS moderator_state (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- Index for listing recently written comments
        CREATE INDEX IF NOT EXISTS idx_comments_updated
            ON comments(updated_at);
        ",
    )
    .context("Failed to create database tables")?;

    // Record initial schema version if not already set
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
        [1],
    )?;

    Ok(())
}

/// Count the number of tables in the database (useful for init confirmation).
pub fn table_count(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}
