// Comment moderator: de-shouting and profanity masking for comment records.
//
// This is the library root. `moderation` is the pure core; everything else
// is the collaborator that feeds it writes and persists the results.

pub mod config;
pub mod db;
pub mod moderation;
pub mod output;
pub mod pipeline;
pub mod status;
pub mod trigger;

pub use moderation::{
    contains_swearwords, is_shouting, moderate, moderate_swearwords, stop_shouting,
};
