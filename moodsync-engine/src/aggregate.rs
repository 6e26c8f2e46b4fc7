//! Score aggregation and confidence calibration.
//!
//! Turns a summed [`ScoreVector`] into a [`ClassificationResult`]:
//!
//! 1. Rank moods with a positive score, highest first (ties keep catalog order).
//! 2. No positive score at all: `calm` at the default confidence.
//! 3. Base confidence from the dominant score's rung on the ladder, or the
//!    direct-match confidence when the dominant mood is named in the text.
//! 4. Adjust by the separation ratio `dominant / runner_up`.
//! 5. Derive up to three alternatives from the next-ranked moods.

use crate::analyzers::lexical;
use crate::config::Calibration;
use crate::types::{Alternative, ClassificationResult, MoodId, ScoreVector, VerdictSource};

/// Builds the verdict for `scores`, where `text` is the normalised entry.
pub fn aggregate(scores: ScoreVector, text: &str, calibration: &Calibration) -> ClassificationResult {
    let ranked = scores.ranked();
    let Some(&(dominant, dominant_score)) = ranked.first() else {
        return ClassificationResult {
            mood: MoodId::Calm,
            confidence: calibration.default_confidence,
            scores,
            alternatives: Vec::new(),
            source: VerdictSource::Heuristic,
            reasoning: heuristic_reasoning(calibration.default_confidence),
        };
    };

    let runner_up = ranked.get(1).map_or(0.0, |&(_, score)| score);
    let named = lexical::mentions_by_name(text, dominant);
    let confidence = calibrate(dominant_score, runner_up, named, calibration);
    let alternatives = alternatives(&ranked, dominant_score, confidence, calibration);

    ClassificationResult {
        mood: dominant,
        confidence,
        scores,
        alternatives,
        source: VerdictSource::Heuristic,
        reasoning: heuristic_reasoning(confidence),
    }
}

/// Confidence before separation is taken into account.
pub fn base_confidence(dominant_score: f64, named: bool, calibration: &Calibration) -> f64 {
    if named {
        return calibration.direct_match_confidence;
    }
    calibration
        .ladder
        .iter()
        .find(|step| dominant_score >= step.min_score)
        .map_or(calibration.floor_confidence, |step| step.confidence)
}

/// `dominant / runner_up`, or the lone-mood ratio when nothing else scored.
pub fn separation_ratio(dominant_score: f64, runner_up: f64, calibration: &Calibration) -> f64 {
    if runner_up > 0.0 {
        dominant_score / runner_up
    } else {
        calibration.lone_mood_ratio
    }
}

/// Final confidence for a dominant mood, clamped to `0.0..=1.0`.
pub fn calibrate(dominant_score: f64, runner_up: f64, named: bool, calibration: &Calibration) -> f64 {
    let mut confidence = base_confidence(dominant_score, named, calibration);
    let ratio = separation_ratio(dominant_score, runner_up, calibration);
    if ratio < calibration.ambiguity_ratio {
        confidence *= calibration.ambiguity_penalty;
    } else if ratio >= calibration.clear_winner_ratio {
        confidence = (confidence + calibration.clear_winner_bonus).min(calibration.confidence_cap);
    }
    confidence.clamp(0.0, 1.0)
}

fn alternatives(
    ranked: &[(MoodId, f64)],
    dominant_score: f64,
    confidence: f64,
    calibration: &Calibration,
) -> Vec<Alternative> {
    let mut kept: Vec<Alternative> = ranked
        .iter()
        .skip(1)
        .take(calibration.max_alternatives)
        .filter(|&&(_, score)| {
            score >= dominant_score * calibration.alternative_score_ratio
                || score >= calibration.alternative_min_score
        })
        .map(|&(mood, score)| {
            let related = (score / dominant_score * confidence * calibration.alternative_confidence_factor)
                .min(calibration.alternative_confidence_cap);
            Alternative {
                mood,
                confidence: related.max(calibration.alternative_confidence_floor),
                score,
            }
        })
        .collect();
    kept.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    kept.truncate(calibration.max_alternatives);
    kept
}

fn heuristic_reasoning(confidence: f64) -> String {
    format!(
        "Detected through enhanced keyword analysis with {}% confidence.",
        (confidence * 100.0).round()
    )
}
