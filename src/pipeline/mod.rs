// Batch pipelines over the comment store.

pub mod sweep;
