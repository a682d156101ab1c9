// JSON output for `list --json` and `post --json`.
//
// Emits the stored records as-is so other tools can consume them.

use anyhow::Result;

use crate::db::models::Comment;

/// One comment as a pretty-printed JSON object.
pub fn render_comment(comment: &Comment) -> Result<String> {
    Ok(serde_json::to_string_pretty(comment)?)
}

/// A list of comments as a pretty-printed JSON array, newest first as given.
pub fn render_comments(comments: &[Comment]) -> Result<String> {
    Ok(serde_json::to_string_pretty(comments)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn sample() -> Comment {
        Comment {
            id: "c1".to_string(),
            comment_content: Some("Hi there.".to_string()),
            moderated: true,
            moderated_at: Some("2026-01-01 00:00:00".to_string()),
            created_at: "2026-01-01 00:00:00".to_string(),
            updated_at: "2026-01-01 00:00:00".to_string(),
        }
    }

    #[test]
    fn test_render_comment_fields() {
        let value: Value = serde_json::from_str(&render_comment(&sample()).unwrap()).unwrap();
        assert_eq!(value["id"], "c1");
        assert_eq!(value["comment_content"], "Hi there.");
        assert_eq!(value["moderated"], true);
    }

    #[test]
    fn test_render_comment_without_content_is_null() {
        let mut comment = sample();
        comment.comment_content = None;
        comment.moderated = false;
        comment.moderated_at = None;
        let value: Value = serde_json::from_str(&render_comment(&comment).unwrap()).unwrap();
        assert_eq!(value["comment_content"], Value::Null);
        assert_eq!(value["moderated_at"], Value::Null);
    }

    #[test]
    fn test_render_comments_round_trips() {
        let comments = vec![sample()];
        let rendered = render_comments(&comments).unwrap();
        let parsed: Vec<Comment> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, comments);
        assert_eq!(render_comments(&[]).unwrap(), "[]");
        assert_eq!(serde_json::from_str::<Value>(&rendered).unwrap()[0]["id"], json!("c1"));
    }
}
