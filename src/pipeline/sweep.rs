// Sweep pipeline: re-run the write trigger over every stored comment.
//
// Useful after the lexicon changes, or for comments written while the
// trigger wasn't running. Moderation is CPU-bound and pure, so each comment
// is moderated on the blocking pool (bounded by `concurrency`), and the
// rewrites are then written back sequentially through the store. A
// write-back only lands if the comment still holds the text that was
// moderated; a comment edited mid-sweep keeps its newer text.

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use tracing::{info, warn};

use crate::db::CommentStore;
use crate::moderation::ProfanityFilter;
use crate::trigger::{pending_rewrite, PendingRewrite};

/// State key holding the timestamp of the last completed sweep.
pub const LAST_SWEEP_KEY: &str = "last_sweep_at";

/// What a sweep did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Comments looked at.
    pub scanned: usize,
    /// Comments whose text was rewritten.
    pub moderated: usize,
    /// Comments with no content.
    pub skipped: usize,
    /// Comments rewritten by someone else before the moderated text was saved.
    pub superseded: usize,
    /// Comments that failed to moderate or save.
    pub failed: usize,
}

/// Run the sweep over every comment in the store.
pub async fn run(
    store: &dyn CommentStore,
    filter: Arc<dyn ProfanityFilter>,
    concurrency: usize,
) -> Result<SweepSummary> {
    let comments = store.get_all_comments().await?;
    let mut summary = SweepSummary {
        scanned: comments.len(),
        ..SweepSummary::default()
    };

    if comments.is_empty() {
        info!("No comments to sweep");
        record_sweep_time(store).await?;
        return Ok(summary);
    }

    let (with_content, without_content): (Vec<_>, Vec<_>) = comments
        .into_iter()
        .partition(|c| c.comment_content.as_deref().is_some_and(|t| !t.is_empty()));
    summary.skipped = without_content.len();

    info!(
        total = summary.scanned,
        skipped = summary.skipped,
        concurrency,
        "Sweeping comments"
    );

    let pb = ProgressBar::new(with_content.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Moderating [{bar:30}] {pos}/{len} ({eta})")
            .context("Invalid progress bar template")?,
    );

    let results: Vec<(String, Result<Option<PendingRewrite>>)> =
        stream::iter(with_content.into_iter().map(|comment| {
            let filter = Arc::clone(&filter);
            async move {
                let id = comment.id.clone();
                let rewrite =
                    tokio::task::spawn_blocking(move || pending_rewrite(&comment, filter.as_ref()))
                        .await
                        .context("spawn_blocking panicked");
                (id, rewrite)
            }
        }))
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    // Write results to the store sequentially
    for (id, result) in results {
        match result {
            Ok(Some(rewrite)) => match store
                .save_moderated_content(&id, &rewrite.original, &rewrite.moderated)
                .await
            {
                Ok(true) => summary.moderated += 1,
                Ok(false) => {
                    info!(id, "Comment changed during sweep, keeping the newer write");
                    summary.superseded += 1;
                }
                Err(e) => {
                    warn!(id, error = %e, "Failed to save moderated comment, skipping");
                    summary.failed += 1;
                }
            },
            Ok(None) => {}
            Err(e) => {
                warn!(id, error = %e, "Failed to moderate comment, skipping");
                summary.failed += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    record_sweep_time(store).await?;

    info!(
        moderated = summary.moderated,
        superseded = summary.superseded,
        failed = summary.failed,
        "Sweep complete"
    );
    Ok(summary)
}

async fn record_sweep_time(store: &dyn CommentStore) -> Result<()> {
    store
        .set_state(
            LAST_SWEEP_KEY,
            &chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        )
        .await
}
