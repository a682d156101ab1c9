// Moderation pipeline — shouting fix, then profanity masking.
//
// Each stage only rewrites when its detector fires. The profanity check
// always sees the output of the shouting stage, never the raw input.

use tracing::debug;

use super::profanity::default_filter;
use super::shouting::{is_shouting, stop_shouting};
use super::traits::ProfanityFilter;

/// The moderated text plus which stages rewrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationOutcome {
    pub text: String,
    /// The shouting detector fired and the text was re-cased.
    pub shouting: bool,
    /// The profanity detector fired and words were masked.
    pub profanity: bool,
}

/// Moderate a message with the default lexicon.
pub fn moderate(text: &str) -> String {
    moderate_with(default_filter(), text).text
}

/// Moderate a message with an explicit profanity filter.
pub fn moderate_with(filter: &dyn ProfanityFilter, text: &str) -> ModerationOutcome {
    let shouting = is_shouting(text);
    let text = if shouting {
        debug!("Message is shouting, fixing sentence case");
        stop_shouting(text)
    } else {
        text.to_string()
    };

    // Mask once and compare, rather than running the filter twice
    let masked = filter.clean(&text);
    let profanity = masked != text;
    if profanity {
        debug!("Message contains swearwords, masking");
    }

    ModerationOutcome {
        text: masked,
        shouting,
        profanity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moderation::profanity::WordListFilter;

    #[test]
    fn test_clean_message_passes_through() {
        let outcome = moderate_with(default_filter(), "hello world");
        assert_eq!(outcome.text, "hello world");
        assert!(!outcome.shouting);
        assert!(!outcome.profanity);
    }

    #[test]
    fn test_profanity_sees_deshouted_text() {
        let filter = WordListFilter::new(["bad"]);
        let outcome = moderate_with(&filter, "YOU ARE BAD!!!");
        assert_eq!(outcome.text, "You are ***.");
        assert!(outcome.shouting);
        assert!(outcome.profanity);
    }
}
