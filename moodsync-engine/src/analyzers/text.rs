//! Text normalisation, negation windows and regex helpers shared by the
//! analyzers.

use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

/// Negation tokens, each of which must be followed by whitespace.
static NEGATION: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(
        r"\b(not|don't|doesn't|didn't|never|no|can't|won't|isn't|aren't|wasn't|weren't|haven't|hasn't|hadn't|wouldn't|couldn't|shouldn't|mustn't)\s+",
    )
});

/// Lowercases and trims `text`, folding typographic apostrophes to `'`.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase().replace('\u{2019}', "'")
}

/// Returns the slice of `text` covering at most `window_chars` characters
/// immediately before byte offset `match_start`.
///
/// Characters are Unicode scalar values, not UTF-16 units, so an emoji
/// outside the Basic Multilingual Plane takes one slot of the window, not two.
pub fn window_before(text: &str, match_start: usize, window_chars: usize) -> &str {
    let head = &text[..match_start];
    let start = head
        .char_indices()
        .rev()
        .nth(window_chars.saturating_sub(1))
        .map_or(0, |(index, _)| index);
    &head[start..]
}

/// Returns `true` if a negation word sits inside the window before `match_start`.
pub fn is_negated(text: &str, match_start: usize, window_chars: usize) -> bool {
    match NEGATION.as_ref() {
        Some(negation) => negation.is_match(window_before(text, match_start, window_chars)),
        None => false,
    }
}

/// Compiles `pattern`, logging and discarding it on failure.
pub(crate) fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            warn!(pattern, error = %e, "skipping mood pattern that failed to compile");
            None
        }
    }
}

/// Compiles a whole-word matcher for a literal phrase.
///
/// `\b` is Unicode-aware, so a keyword glued to an accented letter does not
/// match.
pub(crate) fn whole_word(phrase: &str) -> Option<Regex> {
    compile(&format!(r"\b{}\b", regex::escape(phrase)))
}
