// Message moderation — shout normalizing and profanity masking.
//
// The ProfanityFilter trait defines the masking interface. WordListFilter
// implements it with a fixed English lexicon matched on whole words;
// RustrictFilter hands detection to rustrict for obfuscated spellings. The
// pipeline composes the two checks in a fixed order: shouting first, then
// profanity on the (possibly) de-shouted text.

pub mod censor;
pub mod lexicon;
pub mod pipeline;
pub mod profanity;
pub mod shouting;
pub mod traits;

pub use censor::RustrictFilter;
pub use pipeline::{moderate, moderate_with, ModerationOutcome};
pub use profanity::{
    contains_swearwords, default_filter, moderate_swearwords, shared_default_filter,
    WordListFilter,
};
pub use shouting::{is_shouting, stop_shouting};
pub use traits::ProfanityFilter;
