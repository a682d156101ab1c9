// Word-list profanity filter.
//
// Text is split into words (runs of ASCII letters, digits, `_`, `$`, `@`)
// and each word is looked up, lowercased, in the lexicon. Matches are
// replaced by one `*` per character. Everything between words passes
// through untouched. `*` is not a word character, so a second pass finds
// nothing new.

use regex_lite::{Captures, Regex};
use std::collections::HashSet;
use std::sync::{Arc, LazyLock};
use tracing::debug;

use super::lexicon::DEFAULT_WORDS;
use super::traits::ProfanityFilter;

/// Character used to mask a matched word.
pub const MASK_CHAR: char = '*';

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_$@]+").expect("static pattern is valid"));

static DEFAULT_FILTER: LazyLock<Arc<WordListFilter>> =
    LazyLock::new(|| Arc::new(WordListFilter::new(DEFAULT_WORDS.iter().copied())));

/// Whole-word, case-insensitive lexicon filter.
#[derive(Debug, Clone)]
pub struct WordListFilter {
    words: HashSet<String>,
}

impl WordListFilter {
    /// Build a filter from a word list. Entries are lowercased; blank
    /// entries are ignored.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_ascii_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        debug!(entries = words.len(), "Profanity lexicon loaded");
        Self { words }
    }

    /// Number of distinct entries in the lexicon.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether a single word is in the lexicon (case-insensitive).
    pub fn contains_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_lowercase())
    }
}

impl ProfanityFilter for WordListFilter {
    fn clean(&self, text: &str) -> String {
        WORD.replace_all(text, |caps: &Captures<'_>| {
            let word = &caps[0];
            if self.contains_word(word) {
                mask(word)
            } else {
                word.to_string()
            }
        })
        .into_owned()
    }
}

/// Same-length mask for a word.
fn mask(word: &str) -> String {
    std::iter::repeat(MASK_CHAR)
        .take(word.chars().count())
        .collect()
}

/// The process-wide default filter, built from the bundled lexicon on
/// first use and never mutated afterwards.
pub fn default_filter() -> &'static WordListFilter {
    &DEFAULT_FILTER
}

/// Shared ownership of the same default filter, for tasks that need a
/// `'static` handle. No copy of the lexicon is made.
pub fn shared_default_filter() -> Arc<WordListFilter> {
    Arc::clone(&DEFAULT_FILTER)
}

/// Mask every lexicon word in the text with the default filter.
pub fn moderate_swearwords(text: &str) -> String {
    default_filter().clean(text)
}

/// Detect if the text has any word the default filter would mask.
pub fn contains_swearwords(text: &str) -> bool {
    default_filter().is_profane(text)
}
