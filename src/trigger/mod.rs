// Trigger collaborator — the glue between comment writes and the core.
//
// The core only knows `moderate(text) -> text`. This module pulls the text
// out of a written record, skips records without any, and hands back (or
// writes back) the moderated version. Logging of raw and moderated
// messages lives here, not in the core.

pub mod document;
pub mod write;

pub use document::{comment_content, on_write, CommentDocument, CONTENT_FIELD};
pub use write::{handle_comment_write, pending_rewrite, PendingRewrite};
