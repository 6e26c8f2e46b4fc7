//! Scoring weights and confidence calibration.
//!
//! [`ScoringConfig::default()`] reproduces the tuned constants the classifier
//! has always shipped with. The values are empirical, not derived, so every
//! one of them can be overridden from a config file.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// All tunable parameters of the scoring pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    pub lexical: LexicalWeights,
    pub context: ContextWeights,
    pub calibration: Calibration,
}

/// Weights used by the lexical matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalWeights {
    /// Credit for a non-negated whole-word mention of a mood's own name.
    pub direct_name: f64,
    /// Credit for a matched keyword containing a space.
    pub multi_word_keyword: f64,
    /// Credit for a matched single-word keyword.
    pub single_word_keyword: f64,
    /// Credit to `sad` when a positive mood name is negated.
    pub negated_positive_sad: f64,
    /// Credit to `disappointed` when a positive mood name is negated.
    pub negated_positive_disappointed: f64,
    /// Credit to `calm` when a negative mood name is negated.
    pub negated_negative_calm: f64,
    /// Credit to `relaxed` when a negative mood name is negated.
    pub negated_negative_relaxed: f64,
    /// Characters before a match searched for a negation word.
    pub negation_window_chars: usize,
}

impl Default for LexicalWeights {
    fn default() -> Self {
        Self {
            direct_name: 15.0,
            multi_word_keyword: 8.0,
            single_word_keyword: 3.0,
            negated_positive_sad: 10.0,
            negated_positive_disappointed: 5.0,
            negated_negative_calm: 8.0,
            negated_negative_relaxed: 5.0,
            negation_window_chars: 30,
        }
    }
}

/// Weights used by the context analyzer outside its pattern table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextWeights {
    /// Credit per intensifier match to each mood whose keywords contain the
    /// following word.
    pub intensity_boost: f64,
    /// `feeling|feel|feels [intensifier] <mood>`.
    pub feeling_template_boost: f64,
    /// `I am|I'm|I feel|feeling [intensifier] <mood>`.
    pub self_statement_boost: f64,
    /// Punctuation only counts when it occurs more than this many times.
    pub punctuation_threshold: usize,
    /// Fraction of the punctuation count credited to the secondary mood.
    pub punctuation_secondary_factor: f64,
}

impl Default for ContextWeights {
    fn default() -> Self {
        Self {
            intensity_boost: 5.0,
            feeling_template_boost: 12.0,
            self_statement_boost: 15.0,
            punctuation_threshold: 2,
            punctuation_secondary_factor: 0.5,
        }
    }
}

/// One rung of the confidence ladder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceStep {
    /// Minimum dominant score for this rung.
    pub min_score: f64,
    pub confidence: f64,
}

/// Turns a score distribution into confidence values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Calibration {
    /// Confidence of the `calm` fallback when nothing scored.
    pub default_confidence: f64,
    /// Confidence when the dominant mood's own name appears in the text.
    pub direct_match_confidence: f64,
    /// Rungs checked top-down; thresholds must be strictly descending.
    pub ladder: Vec<ConfidenceStep>,
    /// Confidence when the dominant score is below every rung.
    pub floor_confidence: f64,
    /// Separation ratio used when there is no runner-up.
    pub lone_mood_ratio: f64,
    /// Ratios below this are ambiguous.
    pub ambiguity_ratio: f64,
    /// Multiplier applied to ambiguous verdicts.
    pub ambiguity_penalty: f64,
    /// Ratios at or above this are clear wins.
    pub clear_winner_ratio: f64,
    pub clear_winner_bonus: f64,
    /// Ceiling for the clear-winner bonus.
    pub confidence_cap: f64,
    /// Runner-ups considered, and the most alternatives returned.
    pub max_alternatives: usize,
    /// A runner-up is kept if its score reaches this fraction of the dominant score...
    pub alternative_score_ratio: f64,
    /// ...or this absolute score.
    pub alternative_min_score: f64,
    pub alternative_confidence_factor: f64,
    pub alternative_confidence_floor: f64,
    pub alternative_confidence_cap: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            default_confidence: 0.50,
            direct_match_confidence: 0.90,
            ladder: vec![
                ConfidenceStep { min_score: 20.0, confidence: 0.88 },
                ConfidenceStep { min_score: 15.0, confidence: 0.85 },
                ConfidenceStep { min_score: 10.0, confidence: 0.80 },
                ConfidenceStep { min_score: 5.0, confidence: 0.75 },
            ],
            floor_confidence: 0.70,
            lone_mood_ratio: 10.0,
            ambiguity_ratio: 1.5,
            ambiguity_penalty: 0.85,
            clear_winner_ratio: 3.0,
            clear_winner_bonus: 0.05,
            confidence_cap: 0.92,
            max_alternatives: 3,
            alternative_score_ratio: 0.20,
            alternative_min_score: 2.0,
            alternative_confidence_factor: 0.9,
            alternative_confidence_floor: 0.30,
            alternative_confidence_cap: 0.75,
        }
    }
}

impl ScoringConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - the mood catalog is ordered by [`MoodId`](crate::MoodId) (see [`crate::catalog::verify`])
    /// - every weight is finite and non-negative
    /// - `negation_window_chars` is greater than 0
    /// - every confidence value lies in `0.0..=1.0`
    /// - ladder thresholds are strictly descending
    /// - `ambiguity_ratio` is <= `clear_winner_ratio`
    /// - the alternative confidence floor is <= its cap
    pub fn validate(&self) -> Result<(), EngineError> {
        crate::catalog::verify()?;

        let lexical = &self.lexical;
        let context = &self.context;
        let calibration = &self.calibration;

        let weights = [
            ("direct_name", lexical.direct_name),
            ("multi_word_keyword", lexical.multi_word_keyword),
            ("single_word_keyword", lexical.single_word_keyword),
            ("negated_positive_sad", lexical.negated_positive_sad),
            (
                "negated_positive_disappointed",
                lexical.negated_positive_disappointed,
            ),
            ("negated_negative_calm", lexical.negated_negative_calm),
            ("negated_negative_relaxed", lexical.negated_negative_relaxed),
            ("intensity_boost", context.intensity_boost),
            ("feeling_template_boost", context.feeling_template_boost),
            ("self_statement_boost", context.self_statement_boost),
            (
                "punctuation_secondary_factor",
                context.punctuation_secondary_factor,
            ),
            ("lone_mood_ratio", calibration.lone_mood_ratio),
            ("ambiguity_ratio", calibration.ambiguity_ratio),
            ("clear_winner_ratio", calibration.clear_winner_ratio),
            ("alternative_score_ratio", calibration.alternative_score_ratio),
            ("alternative_min_score", calibration.alternative_min_score),
            (
                "alternative_confidence_factor",
                calibration.alternative_confidence_factor,
            ),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::Config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        if lexical.negation_window_chars == 0 {
            return Err(EngineError::Config(
                "negation_window_chars must be greater than 0".into(),
            ));
        }

        let mut confidences = vec![
            ("default_confidence", calibration.default_confidence),
            ("direct_match_confidence", calibration.direct_match_confidence),
            ("floor_confidence", calibration.floor_confidence),
            ("ambiguity_penalty", calibration.ambiguity_penalty),
            ("clear_winner_bonus", calibration.clear_winner_bonus),
            ("confidence_cap", calibration.confidence_cap),
            (
                "alternative_confidence_floor",
                calibration.alternative_confidence_floor,
            ),
            (
                "alternative_confidence_cap",
                calibration.alternative_confidence_cap,
            ),
        ];
        confidences.extend(
            calibration
                .ladder
                .iter()
                .map(|step| ("ladder confidence", step.confidence)),
        );
        for (name, value) in confidences {
            if !(0.0..=1.0).contains(&value) {
                return Err(EngineError::Config(format!(
                    "{name} must be within 0.0..=1.0, got {value}"
                )));
            }
        }

        for pair in calibration.ladder.windows(2) {
            if pair[1].min_score >= pair[0].min_score {
                return Err(EngineError::Config(
                    "ladder thresholds must be strictly descending".into(),
                ));
            }
        }

        if calibration.ambiguity_ratio > calibration.clear_winner_ratio {
            return Err(EngineError::Config(
                "ambiguity_ratio must be <= clear_winner_ratio".into(),
            ));
        }

        if calibration.alternative_confidence_floor > calibration.alternative_confidence_cap {
            return Err(EngineError::Config(
                "alternative_confidence_floor must be <= alternative_confidence_cap".into(),
            ));
        }

        Ok(())
    }
}
