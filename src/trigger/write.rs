// Store-level trigger: persist a comment write, then moderate it in place.

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::db::models::Comment;
use crate::db::CommentStore;
use crate::moderation::{moderate_with, ProfanityFilter};

/// A moderation rewrite waiting to be written back.
///
/// Carries the text it was computed from so the write-back only lands if
/// the record still holds that text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRewrite {
    pub original: String,
    pub moderated: String,
}

/// The rewrite a stored comment needs, if any.
///
/// `None` when the comment has no content or moderation leaves it as is.
pub fn pending_rewrite(comment: &Comment, filter: &dyn ProfanityFilter) -> Option<PendingRewrite> {
    let message = comment
        .comment_content
        .as_deref()
        .filter(|text| !text.is_empty())?;
    let outcome = moderate_with(filter, message);
    (outcome.text != message).then(|| PendingRewrite {
        original: message.to_string(),
        moderated: outcome.text,
    })
}

/// Handle a create/update of comment `id`, the way the store trigger would.
///
/// The raw content is written first, then moderated and written back to
/// the same record. Records without content are stored but not moderated.
/// A rewrite that changes nothing is not written back, and neither is one
/// whose record was rewritten by someone else in the meantime.
pub async fn handle_comment_write(
    store: &dyn CommentStore,
    filter: &dyn ProfanityFilter,
    id: &str,
    content: Option<&str>,
) -> Result<Comment> {
    store.upsert_comment(id, content).await?;

    match content.filter(|text| !text.is_empty()) {
        Some(message) => {
            info!(id, raw = %message, "Retrieved message content");
            let outcome = moderate_with(filter, message);
            if outcome.text != message {
                info!(
                    id,
                    moderated = %outcome.text,
                    shouting = outcome.shouting,
                    profanity = outcome.profanity,
                    "Message has been moderated, saving"
                );
                if !store
                    .save_moderated_content(id, message, &outcome.text)
                    .await?
                {
                    warn!(
                        id,
                        "Comment was rewritten before moderation was saved, keeping the newer write"
                    );
                }
            }
        }
        None => info!(id, "Comment has no content, skipping moderation"),
    }

    store
        .get_comment(id)
        .await?
        .with_context(|| format!("Comment {id} vanished after write"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moderation::{default_filter, WordListFilter};

    fn comment(content: Option<&str>) -> Comment {
        Comment {
            id: "c1".to_string(),
            comment_content: content.map(str::to_string),
            moderated: false,
            moderated_at: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_pending_rewrite() {
        let filter = WordListFilter::new(["darn"]);
        assert_eq!(pending_rewrite(&comment(None), &filter), None);
        assert_eq!(pending_rewrite(&comment(Some("")), &filter), None);
        assert_eq!(pending_rewrite(&comment(Some("fine")), &filter), None);
        assert_eq!(
            pending_rewrite(&comment(Some("darn it")), &filter),
            Some(PendingRewrite {
                original: "darn it".to_string(),
                moderated: "**** it".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_handle_comment_write_moderates_in_place() {
        let store = crate::db::in_memory().unwrap();
        let stored = handle_comment_write(store.as_ref(), default_filter(), "c1", Some("WHY!!!"))
            .await
            .unwrap();
        assert_eq!(stored.comment_content.as_deref(), Some("Why."));
        assert!(stored.moderated);
    }

    #[tokio::test]
    async fn test_handle_comment_write_skips_missing_content() {
        let store = crate::db::in_memory().unwrap();
        let stored = handle_comment_write(store.as_ref(), default_filter(), "c1", None)
            .await
            .unwrap();
        assert!(stored.comment_content.is_none());
        assert!(!stored.moderated);
    }
}
