// Profanity filter trait — the swap-ready abstraction.
//
// The default implementation matches whole words against a fixed lexicon.
// A substring or fuzzy matcher can be dropped in behind this trait without
// touching the pipeline or the trigger.

/// Trait for masking disallowed words in a piece of text.
pub trait ProfanityFilter: Send + Sync {
    /// Return the text with every disallowed word masked.
    ///
    /// Must be total over strings and idempotent: masking already-masked
    /// text returns it unchanged.
    fn clean(&self, text: &str) -> String;

    /// Whether the text contains anything `clean` would mask.
    ///
    /// Defined in terms of `clean` so the two can never disagree.
    fn is_profane(&self, text: &str) -> bool {
        self.clean(text) != text
    }
}
