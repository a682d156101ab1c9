// Shout detection and normalization.
//
// A message is "shouting" when more than half of its characters are ASCII
// capitals, or when it carries three or more exclamation marks. Fixing it
// lowercases everything, re-capitalizes sentence starts, and collapses each
// run of `!` into a single period.

use regex_lite::Regex;
use std::sync::LazyLock;

/// Exclamation marks at or above this count always read as shouting.
pub const BANG_THRESHOLD: usize = 3;

static BANG_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!+").expect("static pattern is valid"));

/// Detect if a message is shouting.
///
/// Length is counted in characters, and the capital count only looks at
/// `A`-`Z`. The empty string is never shouting.
pub fn is_shouting(text: &str) -> bool {
    let total_len = text.chars().count();
    let upper_count = text.chars().filter(|c| c.is_ascii_uppercase()).count();
    let bang_count = text.chars().filter(|&c| c == '!').count();

    // upper > len / 2, kept in integers
    upper_count * 2 > total_len || bang_count >= BANG_THRESHOLD
}

/// Rewrite a shouted message in sentence case and drop the exclamations.
///
/// `"HELLO. WORLD!!!"` becomes `"Hello. World."`. Capitalization runs on the
/// lowercased text before the `!` runs are replaced, so a `!` still marks a
/// sentence end for the word that follows it.
pub fn stop_shouting(text: &str) -> String {
    let cased = sentence_case(&text.to_lowercase());
    BANG_RUN.replace_all(&cased, ".").into_owned()
}

/// Capitalize the first letter of the text and of every sentence.
///
/// A sentence starts after `.`, `!` or `?` followed by whitespace. The first
/// alphanumeric character ends the sentence start; a leading digit is left
/// as is and the letters after it stay lowercase.
pub fn sentence_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_sentence_start = true;
    let mut after_terminator = false;

    for c in text.chars() {
        if c.is_alphanumeric() {
            if at_sentence_start {
                out.extend(c.to_uppercase());
                at_sentence_start = false;
            } else {
                out.push(c);
            }
            after_terminator = false;
            continue;
        }

        if matches!(c, '.' | '!' | '?') {
            after_terminator = true;
        } else if c.is_whitespace() {
            if after_terminator {
                at_sentence_start = true;
            }
            after_terminator = false;
        } else {
            after_terminator = false;
        }
        out.push(c);
    }

    out
}
