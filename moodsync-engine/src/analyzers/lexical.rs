//! Direct mood-name and keyword matching with negation handling.
//!
//! Two passes over normalised text:
//!
//! 1. **Direct names**: every whole-word mention of a mood id. A negated
//!    mention credits the opposite cluster instead (see [`Valence`]).
//! 2. **Keywords**: every whole-word occurrence of every catalog keyword
//!    other than the mood's own id. Negated occurrences are dropped;
//!    phrases outweigh single words.

use super::text::{is_negated, whole_word};
use crate::catalog::{self, Valence};
use crate::config::LexicalWeights;
use crate::types::{MoodId, ScoreVector};
use regex::Regex;
use std::sync::LazyLock;

struct KeywordMatcher {
    mood: MoodId,
    /// Lowercased keyword, used as a cheap substring prefilter.
    phrase: String,
    multi_word: bool,
    regex: Regex,
}

static DIRECT_NAMES: LazyLock<Vec<(MoodId, Regex)>> = LazyLock::new(|| {
    catalog::all()
        .iter()
        .filter_map(|definition| whole_word(definition.id.as_str()).map(|regex| (definition.id, regex)))
        .collect()
});

static KEYWORDS: LazyLock<Vec<KeywordMatcher>> = LazyLock::new(|| {
    let mut matchers = Vec::new();
    for definition in catalog::all() {
        for keyword in definition.keywords {
            let phrase = keyword.to_lowercase();
            if phrase == definition.id.as_str() {
                continue;
            }
            if let Some(regex) = whole_word(&phrase) {
                matchers.push(KeywordMatcher {
                    mood: definition.id,
                    multi_word: phrase.contains(' '),
                    phrase,
                    regex,
                });
            }
        }
    }
    matchers
});

/// Scores normalised `text` on direct mood names and catalog keywords.
pub fn score(text: &str, weights: &LexicalWeights) -> ScoreVector {
    let mut scores = ScoreVector::zeroed();
    if text.is_empty() {
        return scores;
    }

    for (mood, regex) in DIRECT_NAMES.iter() {
        for found in regex.find_iter(text) {
            if is_negated(text, found.start(), weights.negation_window_chars) {
                credit_negated(&mut scores, *mood, weights);
            } else {
                scores.add(*mood, weights.direct_name);
            }
        }
    }

    for matcher in KEYWORDS.iter() {
        if !text.contains(matcher.phrase.as_str()) {
            continue;
        }
        let credit = if matcher.multi_word {
            weights.multi_word_keyword
        } else {
            weights.single_word_keyword
        };
        for found in matcher.regex.find_iter(text) {
            if !is_negated(text, found.start(), weights.negation_window_chars) {
                scores.add(matcher.mood, credit);
            }
        }
    }

    scores
}

/// Returns `true` if `mood`'s own id appears as a whole word in normalised `text`,
/// negated or not.
pub fn mentions_by_name(text: &str, mood: MoodId) -> bool {
    DIRECT_NAMES
        .iter()
        .find(|(candidate, _)| *candidate == mood)
        .is_some_and(|(_, regex)| regex.is_match(text))
}

fn credit_negated(scores: &mut ScoreVector, mood: MoodId, weights: &LexicalWeights) {
    match catalog::lookup(mood).valence {
        Valence::Positive => {
            scores.add(MoodId::Sad, weights.negated_positive_sad);
            scores.add(MoodId::Disappointed, weights.negated_positive_disappointed);
        }
        Valence::Negative => {
            scores.add(MoodId::Calm, weights.negated_negative_calm);
            scores.add(MoodId::Relaxed, weights.negated_negative_relaxed);
        }
        Valence::Neutral => {}
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::analyzers::text::normalize;

    fn lexical(text: &str) -> ScoreVector {
        score(&normalize(text), &LexicalWeights::default())
    }

    fn assert_score(scores: &ScoreVector, mood: MoodId, expected: f64) {
        assert!(
            (scores[mood] - expected).abs() < 1e-9,
            "{mood}: expected {expected}, got {}",
            scores[mood]
        );
    }

    #[test]
    fn empty_text_scores_nothing() {
        assert!(lexical("").is_zero());
        assert!(lexical("   ").is_zero());
    }

    #[test]
    fn negated_positive_name_credits_sad_and_disappointed() {
        let scores = lexical("I am not happy today");
        assert_score(&scores, MoodId::Happy, 0.0);
        assert_score(&scores, MoodId::Sad, 10.0);
        assert_score(&scores, MoodId::Disappointed, 5.0);
        assert!((scores.total() - 15.0).abs() < 1e-9);
    }

    #[test]
    fn negated_negative_name_credits_calm_and_relaxed() {
        let scores = lexical("I am not sad, just tired");
        assert_score(&scores, MoodId::Sad, 0.0);
        assert_score(&scores, MoodId::Calm, 8.0);
        assert_score(&scores, MoodId::Relaxed, 5.0);
        // "tired" shares the negation window and has no remap cluster.
        assert_score(&scores, MoodId::Tired, 0.0);
    }

    #[test]
    fn negated_neutral_name_credits_nothing() {
        let scores = lexical("never bored");
        assert!(scores.is_zero());
    }

    #[test]
    fn direct_names_and_keywords_stack() {
        let scores = lexical("I am very happy and excited!!!");
        // happy: direct 15 + "excited" keyword 3
        assert_score(&scores, MoodId::Happy, 18.0);
        assert_score(&scores, MoodId::Excited, 15.0);
        assert_score(&scores, MoodId::Enthusiastic, 3.0);
    }

    #[test]
    fn multi_word_keyword_scores_eight() {
        let scores = lexical("I can't cope with this");
        assert_score(&scores, MoodId::Sad, 8.0);
        assert!((scores.total() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn duplicate_keywords_each_score() {
        let scores = lexical("I feel blessed and blessed");
        // "blessed" is listed twice for happy and matched twice.
        assert_score(&scores, MoodId::Happy, 12.0);
        assert_score(&scores, MoodId::Grateful, 6.0);
    }

    #[test]
    fn keywords_require_whole_words() {
        let scores = lexical("unhappy");
        assert_score(&scores, MoodId::Happy, 0.0);
        assert_score(&scores, MoodId::Sad, 3.0);
    }

    #[test]
    fn negated_keyword_is_dropped() {
        let with = lexical("feeling miserable");
        let without = lexical("not miserable");
        assert_score(&with, MoodId::Sad, 3.0);
        assert_score(&without, MoodId::Sad, 0.0);
    }

    #[test]
    fn mixed_case_keywords_match_lowercased_text() {
        let scores = lexical("Honestly, I Can Do This");
        assert_score(&scores, MoodId::Confident, 8.0);
    }

    #[test]
    fn weights_are_configurable() {
        let weights = LexicalWeights {
            direct_name: 1.0,
            ..LexicalWeights::default()
        };
        let scores = score("proud", &weights);
        assert_score(&scores, MoodId::Proud, 1.0);
    }

    #[test]
    fn mentions_by_name_ignores_negation() {
        assert!(mentions_by_name("i am not happy", MoodId::Happy));
        assert!(!mentions_by_name("i am unhappy", MoodId::Happy));
        assert!(mentions_by_name("so inlove", MoodId::InLove));
    }
}
