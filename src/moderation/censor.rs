// rustrict-backed profanity filter.
//
// rustrict catches spelling tricks the word list can't enumerate
// (`sh!t`, `f-u_c_k`, homoglyphs). Its censored output is only used to find
// WHICH characters to mask: the original text is kept everywhere else, so
// casing, accents and punctuation survive and the length never changes.

use rustrict::{Censor, Type};

use super::profanity::{default_filter, MASK_CHAR};
use super::traits::ProfanityFilter;

/// Filter that delegates detection to `rustrict`.
#[derive(Debug, Clone, Copy)]
pub struct RustrictFilter {
    threshold: Type,
}

impl Default for RustrictFilter {
    fn default() -> Self {
        Self {
            threshold: Type::INAPPROPRIATE,
        }
    }
}

impl RustrictFilter {
    /// Mask only content at or above `threshold` (e.g. `Type::OFFENSIVE & Type::SEVERE`).
    pub fn with_threshold(threshold: Type) -> Self {
        Self { threshold }
    }

    fn censor(&self, text: &str) -> String {
        Censor::from_str(text)
            .with_censor_threshold(self.threshold)
            // anything censored at all is masked from its first character
            .with_censor_first_character_threshold(self.threshold)
            .with_censor_replacement(MASK_CHAR)
            .censor()
    }
}

impl ProfanityFilter for RustrictFilter {
    fn clean(&self, text: &str) -> String {
        let censored = self.censor(text);
        // rustrict normalizes some characters away; if the two no longer
        // line up char for char, fall back to whole-word matching
        overlay_mask(text, &censored).unwrap_or_else(|| default_filter().clean(text))
    }
}

/// Copy the mask characters from `censored` onto `original`.
///
/// `None` when the two differ in length, since positions can't be matched.
fn overlay_mask(original: &str, censored: &str) -> Option<String> {
    if original.chars().count() != censored.chars().count() {
        return None;
    }
    Some(
        original
            .chars()
            .zip(censored.chars())
            .map(|(o, c)| if c == MASK_CHAR { MASK_CHAR } else { o })
            .collect(),
    )
}
