// Document-level trigger adapter.
//
// A comment record snapshot is a JSON object. Only `commentContent` is
// read or written; every other field is carried over as-is.

use serde_json::{Map, Value};
use tracing::info;

use crate::moderation::{moderate_with, ProfanityFilter};

/// Name of the field the trigger moderates.
pub const CONTENT_FIELD: &str = "commentContent";

/// A comment record snapshot as the trigger receives it.
pub type CommentDocument = Map<String, Value>;

/// The moderatable text of a record, if it has any.
///
/// Missing fields, non-string values and empty strings all count as "no
/// content": the trigger skips them.
pub fn comment_content(document: &CommentDocument) -> Option<&str> {
    document
        .get(CONTENT_FIELD)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

/// Run moderation for a written record.
///
/// Returns the record with `commentContent` overwritten by the moderated
/// text, or `None` when the record has nothing to moderate and no update
/// should be written.
pub fn on_write(
    document: &CommentDocument,
    filter: &dyn ProfanityFilter,
) -> Option<CommentDocument> {
    let message = comment_content(document)?;
    info!(raw = %message, "Retrieved message content");

    let outcome = moderate_with(filter, message);
    info!(
        moderated = %outcome.text,
        shouting = outcome.shouting,
        profanity = outcome.profanity,
        "Message has been moderated"
    );

    let mut updated = document.clone();
    updated.insert(CONTENT_FIELD.to_string(), Value::String(outcome.text));
    Some(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moderation::default_filter;
    use serde_json::json;

    fn doc(value: Value) -> CommentDocument {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn test_missing_content_is_skipped() {
        let document = doc(json!({"author": "sam"}));
        assert!(on_write(&document, default_filter()).is_none());
    }

    #[test]
    fn test_empty_and_non_string_content_is_skipped() {
        for value in [json!(""), json!(null), json!(42), json!(["a"])] {
            let document = doc(json!({ "commentContent": value }));
            assert!(on_write(&document, default_filter()).is_none());
        }
    }

    #[test]
    fn test_content_is_overwritten_and_other_fields_kept() {
        let document = doc(json!({
            "commentContent": "STOP YELLING!!!",
            "author": "sam",
            "likes": 3
        }));
        let updated = on_write(&document, default_filter()).unwrap();
        assert_eq!(updated["commentContent"], json!("Stop yelling."));
        assert_eq!(updated["author"], json!("sam"));
        assert_eq!(updated["likes"], json!(3));
    }

    #[test]
    fn test_clean_content_is_written_back_unchanged() {
        let document = doc(json!({"commentContent": "hello world"}));
        let updated = on_write(&document, default_filter()).unwrap();
        assert_eq!(updated, document);
    }
}
