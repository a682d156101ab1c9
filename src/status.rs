// Store status display — comment counts and last sweep time.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::db::CommentStore;
use crate::pipeline::sweep::LAST_SWEEP_KEY;

/// Display store status to the terminal.
pub async fn show(store: &Arc<dyn CommentStore>, db_display_path: &str) -> Result<()> {
    let file_size = std::fs::metadata(db_display_path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string());
    println!("Database: {} ({})", db_display_path, file_size);

    let counts = store.comment_counts().await?;
    println!(
        "Comments: {} total, {} moderated, {} without content",
        counts.total, counts.moderated, counts.empty
    );

    match store.get_state(LAST_SWEEP_KEY).await? {
        Some(last_sweep) => println!("Last sweep: {}", last_sweep),
        None => {
            println!("Last sweep: never");
            println!("  Run `comment-moderator sweep` to re-moderate stored comments");
        }
    }

    Ok(())
}

/// Whether the store file exists yet.
pub fn is_initialized(db_path: &str) -> bool {
    Path::new(db_path).exists()
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
