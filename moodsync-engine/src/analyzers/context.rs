//! Contextual phrase detection.
//!
//! Four additive sub-signals over normalised text:
//!
//! - **Phrase patterns**: a curated table of themed alternations. Every
//!   match credits each target mood with the pattern weight.
//! - **Intensity modifiers**: `very <word>`, `truly <word>`, ... boost every
//!   mood whose keyword list contains `<word>` as a substring.
//! - **Phrase templates**: `feeling <mood>` and `I am <mood>` credit the
//!   named mood directly.
//! - **Punctuation**: runs of `!` lean excited/happy, runs of `?` lean
//!   confused/anxious.

use super::text::compile;
use crate::catalog;
use crate::config::ContextWeights;
use crate::types::{MoodId, ScoreVector};
use regex::Regex;
use std::sync::LazyLock;

use MoodId::*;

/// One row of the phrase table.
#[derive(Debug)]
pub struct ContextPattern {
    pub theme: &'static str,
    pub pattern: &'static str,
    pub moods: &'static [MoodId],
    pub weight: f64,
}

/// Patterns are plain alternations: most match inside longer words
/// ("failed" also fires on "unfailed"). Only the love and hate families
/// are bounded. Matching is case-sensitive against normalised text, so an
/// alternative spelled with a capital never fires.
pub const CONTEXT_PATTERNS: &[ContextPattern] = &[
    // ── Positive ────────────────────────────────────────────────────────
    ContextPattern {
        theme: "positive day",
        pattern: "good day|great day|wonderful day|amazing day|best day",
        moods: &[Happy, Excited, Grateful],
        weight: 4.0,
    },
    ContextPattern {
        theme: "feeling good",
        pattern: "feeling good|feeling great|feeling amazing|feeling wonderful",
        moods: &[Happy],
        weight: 4.0,
    },
    ContextPattern {
        theme: "love",
        pattern: r"\blove\b|\bloved\b|\bloving\b",
        moods: &[InLove, Happy, Grateful],
        weight: 3.0,
    },
    ContextPattern {
        theme: "success",
        pattern: "success|successful|achieved|accomplished|completed",
        moods: &[Confident, Happy, Motivated],
        weight: 4.0,
    },
    ContextPattern {
        theme: "excitement",
        pattern: "excited|thrilled|delighted|can't wait",
        moods: &[Excited, Happy],
        weight: 4.0,
    },
    ContextPattern {
        theme: "gratitude",
        pattern: "grateful|thankful|blessed|appreciate",
        moods: &[Grateful, Happy],
        weight: 3.0,
    },
    // ── Negative ────────────────────────────────────────────────────────
    ContextPattern {
        theme: "bad day",
        pattern: "bad day|terrible day|awful day|horrible day|worst day",
        moods: &[Sad, Angry, Overwhelmed],
        weight: 3.0,
    },
    ContextPattern {
        theme: "sadness",
        pattern: "feeling down|feeling low|feeling sad|feeling depressed",
        moods: &[Sad, Lonely],
        weight: 3.0,
    },
    ContextPattern {
        theme: "hate",
        pattern: r"\bhate\b|\bhated\b|\bhating\b",
        moods: &[Angry, Sad],
        weight: 2.0,
    },
    ContextPattern {
        theme: "failure",
        pattern: "failed|failure|disappointed|let down",
        moods: &[Sad, Guilty, Overwhelmed],
        weight: 2.0,
    },
    ContextPattern {
        theme: "exhaustion",
        pattern: "tired|exhausted|drained|burned out|burnout",
        moods: &[Tired, Overwhelmed, Sad],
        weight: 2.0,
    },
    ContextPattern {
        theme: "overwhelm",
        pattern: "stressed|overwhelmed|too much|can't handle",
        moods: &[Overwhelmed, Anxious],
        weight: 3.0,
    },
    ContextPattern {
        theme: "worry",
        pattern: "worried|worry|nervous|scared|afraid|fear",
        moods: &[Anxious, Overwhelmed],
        weight: 3.0,
    },
    ContextPattern {
        theme: "anger",
        pattern: "angry|mad|furious|frustrated|annoyed",
        moods: &[Angry],
        weight: 3.0,
    },
    ContextPattern {
        theme: "loneliness",
        pattern: "lonely|alone|isolated|nobody|no one",
        moods: &[Lonely, Sad],
        weight: 3.0,
    },
    // ── Calm ────────────────────────────────────────────────────────────
    ContextPattern {
        theme: "peace",
        pattern: "peaceful|serene|tranquil|relaxed|calm",
        moods: &[Calm, Content],
        weight: 3.0,
    },
    ContextPattern {
        theme: "meditation",
        pattern: "meditation|meditated|mindful|zen|centered",
        moods: &[Calm, Content],
        weight: 2.0,
    },
    ContextPattern {
        theme: "quiet",
        pattern: "quiet|silence|still|gentle|soothing",
        moods: &[Calm],
        weight: 2.0,
    },
    // ── Motivation ──────────────────────────────────────────────────────
    ContextPattern {
        theme: "motivation",
        pattern: "motivated|driven|determined|focused|productive|getting things done",
        moods: &[Motivated, Confident, Excited],
        weight: 4.0,
    },
    ContextPattern {
        theme: "goals",
        pattern: "goal|goals|ambition|dream|achieve",
        moods: &[Motivated, Hopeful],
        weight: 3.0,
    },
    // ── Romance ─────────────────────────────────────────────────────────
    ContextPattern {
        theme: "relationship",
        pattern: "boyfriend|girlfriend|partner|relationship|dating|crush|romance|romantic",
        moods: &[InLove, Happy, Excited],
        weight: 4.0,
    },
    ContextPattern {
        theme: "infatuation",
        pattern: "butterflies|heart flutters|smitten|head over heels|falling for",
        moods: &[InLove, Excited],
        weight: 5.0,
    },
    // ── Confusion ───────────────────────────────────────────────────────
    ContextPattern {
        theme: "uncertainty",
        pattern: "confused|don't know|unsure|uncertain|not sure|mixed feelings",
        moods: &[Confused, Anxious],
        weight: 4.0,
    },
    ContextPattern {
        theme: "bewilderment",
        pattern: "don't understand|puzzled|bewildered|conflicted|torn",
        moods: &[Confused],
        weight: 4.0,
    },
    // ── Guilt ───────────────────────────────────────────────────────────
    ContextPattern {
        theme: "guilt",
        pattern: "guilty|guilt|ashamed|regret|shouldn't have|my fault|messed up",
        moods: &[Guilty, Sad],
        weight: 4.0,
    },
    ContextPattern {
        theme: "apology",
        pattern: "sorry|apologize|feel bad|feel terrible about",
        moods: &[Guilty, Sad],
        weight: 3.0,
    },
    // ── Confidence ──────────────────────────────────────────────────────
    ContextPattern {
        theme: "self-belief",
        pattern: "confident|I got this|I can do this|believe in myself|capable|strong",
        moods: &[Confident, Motivated, Happy],
        weight: 4.0,
    },
    ContextPattern {
        theme: "momentum",
        pattern: "crushing it|killing it|unstoppable|fearless|bold",
        moods: &[Confident, Excited],
        weight: 5.0,
    },
];

const INTENSIFIERS: &str = "very|really|so|extremely|incredibly|absolutely|totally|completely|utterly|deeply|super|quite|pretty|rather|immensely|exceptionally|remarkably|particularly|especially|genuinely|truly|honestly|seriously";

/// Intensifiers allowed between a template lead-in and the mood word.
const TEMPLATE_INTENSIFIERS: &str = "very|really|so|extremely";

static COMPILED_PATTERNS: LazyLock<Vec<(&'static ContextPattern, Regex)>> = LazyLock::new(|| {
    CONTEXT_PATTERNS
        .iter()
        .filter_map(|row| compile(row.pattern).map(|regex| (row, regex)))
        .collect()
});

/// The captured word is ASCII-only: `so fatigué` captures `fatigu`.
static INTENSITY: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(&format!(r"\b({INTENSIFIERS})\s+((?-u:\w)+)")));

/// Lowercased keyword lists, in catalog order.
static LOWERED_KEYWORDS: LazyLock<Vec<(MoodId, Vec<String>)>> = LazyLock::new(|| {
    catalog::all()
        .iter()
        .map(|definition| {
            let keywords = definition.keywords.iter().map(|k| k.to_lowercase()).collect();
            (definition.id, keywords)
        })
        .collect()
});

/// `feeling <mood>` and `I am <mood>` templates with their boost selectors.
static TEMPLATES: LazyLock<Vec<(Template, Regex)>> = LazyLock::new(|| {
    let ids = catalog::ids().collect::<Vec<_>>().join("|");
    [
        (Template::Feeling, "feeling|feel|feels"),
        (Template::SelfStatement, "i am|i'm|i feel|feeling"),
    ]
    .into_iter()
    .filter_map(|(template, lead)| {
        compile(&format!(
            r"(?i)\b({lead})\s+({TEMPLATE_INTENSIFIERS})?\s*({ids})\b"
        ))
        .map(|regex| (template, regex))
    })
    .collect()
});

#[derive(Debug, Clone, Copy)]
enum Template {
    Feeling,
    SelfStatement,
}

/// Scores normalised `text` on all context sub-signals.
pub fn score(text: &str, weights: &ContextWeights) -> ScoreVector {
    let mut scores = ScoreVector::zeroed();
    if text.is_empty() {
        return scores;
    }
    scores.merge(&pattern_scores(text));
    scores.merge(&intensity_scores(text, weights));
    scores.merge(&template_scores(text, weights));
    scores.merge(&punctuation_scores(text, weights));
    scores
}

fn pattern_scores(text: &str) -> ScoreVector {
    let mut scores = ScoreVector::zeroed();
    for (row, regex) in COMPILED_PATTERNS.iter() {
        let count = regex.find_iter(text).count();
        if count == 0 {
            continue;
        }
        for &mood in row.moods {
            scores.add(mood, count as f64 * row.weight);
        }
    }
    scores
}

fn intensity_scores(text: &str, weights: &ContextWeights) -> ScoreVector {
    let mut scores = ScoreVector::zeroed();
    let Some(intensity) = INTENSITY.as_ref() else {
        return scores;
    };
    for captures in intensity.captures_iter(text) {
        let Some(word) = captures.get(2) else {
            continue;
        };
        let word = word.as_str().to_lowercase();
        for (mood, keywords) in LOWERED_KEYWORDS.iter() {
            if keywords.iter().any(|keyword| keyword.contains(word.as_str())) {
                scores.add(*mood, weights.intensity_boost);
            }
        }
    }
    scores
}

fn template_scores(text: &str, weights: &ContextWeights) -> ScoreVector {
    let mut scores = ScoreVector::zeroed();
    for (template, regex) in TEMPLATES.iter() {
        let boost = match template {
            Template::Feeling => weights.feeling_template_boost,
            Template::SelfStatement => weights.self_statement_boost,
        };
        for captures in regex.captures_iter(text) {
            let mood = captures
                .get(3)
                .and_then(|word| word.as_str().parse::<MoodId>().ok());
            if let Some(mood) = mood {
                scores.add(mood, boost);
            }
        }
    }
    scores
}

fn punctuation_scores(text: &str, weights: &ContextWeights) -> ScoreVector {
    let mut scores = ScoreVector::zeroed();
    let exclamations = text.matches('!').count();
    let questions = text.matches('?').count();

    if exclamations > weights.punctuation_threshold {
        let count = exclamations as f64;
        scores.add(Excited, count);
        scores.add(Happy, count * weights.punctuation_secondary_factor);
    }
    if questions > weights.punctuation_threshold {
        let count = questions as f64;
        scores.add(Confused, count);
        scores.add(Anxious, count * weights.punctuation_secondary_factor);
    }
    scores
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::analyzers::text::normalize;

    fn context(text: &str) -> ScoreVector {
        score(&normalize(text), &ContextWeights::default())
    }

    fn assert_score(scores: &ScoreVector, mood: MoodId, expected: f64) {
        assert!(
            (scores[mood] - expected).abs() < 1e-9,
            "{mood}: expected {expected}, got {}",
            scores[mood]
        );
    }

    #[test]
    fn every_pattern_compiles() {
        assert_eq!(COMPILED_PATTERNS.len(), CONTEXT_PATTERNS.len());
        assert_eq!(TEMPLATES.len(), 2);
        assert!(INTENSITY.is_some());
    }

    #[test]
    fn empty_text_scores_nothing() {
        assert!(context("").is_zero());
    }

    #[test]
    fn pattern_credits_every_target_mood() {
        let scores = pattern_scores("had a great day");
        assert_score(&scores, Happy, 4.0);
        assert_score(&scores, Excited, 4.0);
        assert_score(&scores, Grateful, 4.0);
    }

    #[test]
    fn pattern_counts_each_match() {
        let scores = pattern_scores("tired, so tired, exhausted");
        assert_score(&scores, Tired, 6.0);
        assert_score(&scores, Overwhelmed, 6.0);
        assert_score(&scores, Sad, 6.0);
    }

    #[test]
    fn unbounded_patterns_match_inside_words() {
        // "still" also fires inside "distillery".
        let scores = pattern_scores("the distillery tour");
        assert_score(&scores, Calm, 2.0);
    }

    #[test]
    fn love_family_requires_whole_words() {
        assert!(pattern_scores("a glove").is_zero());
        let scores = pattern_scores("i love this");
        assert_score(&scores, InLove, 3.0);
    }

    #[test]
    fn self_belief_phrases_match() {
        let scores = pattern_scores("believe in myself");
        assert_score(&scores, Confident, 4.0);
        assert_score(&scores, Motivated, 4.0);
        assert_score(&scores, Happy, 4.0);
    }

    #[test]
    fn capitalised_alternatives_never_fire_on_normalised_text() {
        let scores = pattern_scores("i got this, i can do this");
        assert_score(&scores, Confident, 0.0);
        assert_score(&scores, Motivated, 0.0);
        assert_score(&scores, Happy, 0.0);
    }

    #[test]
    fn intensifier_captures_ascii_prefix_of_accented_word() {
        let scores = intensity_scores("so fatigué", &ContextWeights::default());
        assert_score(&scores, Tired, 5.0);
    }

    #[test]
    fn intensifier_boosts_moods_owning_the_word() {
        let scores = intensity_scores("so tired", &ContextWeights::default());
        // "tired" appears in tired's keywords and inside "tired of" for the
        // anger family.
        assert_score(&scores, Tired, 5.0);
        assert_score(&scores, Angry, 5.0);
        assert_score(&scores, Frustrated, 5.0);
        assert_score(&scores, Annoyed, 5.0);
        assert_score(&scores, Happy, 0.0);
    }

    #[test]
    fn intensifier_with_unknown_word_scores_nothing() {
        assert!(intensity_scores("very xylophone", &ContextWeights::default()).is_zero());
    }

    #[test]
    fn feeling_and_self_statement_templates_both_fire() {
        let scores = template_scores("i'm feeling so anxious", &ContextWeights::default());
        // "feeling so anxious" satisfies both templates.
        assert_score(&scores, Anxious, 27.0);
    }

    #[test]
    fn self_statement_template() {
        let scores = template_scores("i am very happy", &ContextWeights::default());
        assert_score(&scores, Happy, 15.0);
    }

    #[test]
    fn template_needs_catalog_mood() {
        assert!(template_scores("i am elated", &ContextWeights::default()).is_zero());
    }

    #[test]
    fn exclamations_above_threshold() {
        let weights = ContextWeights::default();
        assert!(punctuation_scores("wow!!", &weights).is_zero());
        let scores = punctuation_scores("wow!!!", &weights);
        assert_score(&scores, Excited, 3.0);
        assert_score(&scores, Happy, 1.5);
    }

    #[test]
    fn questions_above_threshold() {
        let scores = context("Why? Why me? What now?");
        assert_score(&scores, Confused, 3.0);
        assert_score(&scores, Anxious, 1.5);
        assert!((scores.total() - 4.5).abs() < 1e-9);
    }

    #[test]
    fn all_signals_combine() {
        let scores = context("I am very happy and excited!!!");
        assert_score(&scores, Happy, 25.5);
        assert_score(&scores, Excited, 7.0);
        assert_score(&scores, Sad, 5.0);
        assert_score(&scores, Joyful, 5.0);
        assert_score(&scores, Satisfied, 5.0);
    }

    #[test]
    fn anxious_presentation_entry() {
        let scores = context("I'm feeling so anxious about tomorrow's presentation");
        assert_score(&scores, Anxious, 32.0);
        assert_score(&scores, Nervous, 5.0);
        assert_score(&scores, Worried, 5.0);
    }
}
