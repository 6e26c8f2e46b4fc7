//! # moodsync-engine
//!
//! Deterministic, rule-based mood classification for short journal entries.
//!
//! Given free-form text, the engine picks one of 36 catalog moods, a
//! calibrated confidence and up to three related moods. No models, no
//! network access and no I/O: the same text always yields the same result.
//!
//! ## Design
//!
//! - Three independent analyzers (lexical, context, emoji) each produce a
//!   partial score vector; the vectors are summed
//! - Aggregation picks the dominant mood and calibrates confidence from the
//!   winning score and its separation from the runner-up
//! - An optional external verdict can supersede the heuristic, after
//!   validation against the catalog
//! - The catalog and compiled patterns are process-wide and read-only, so
//!   every entry point is safe to call concurrently
//!
//! ## Privacy
//!
//! - Journal text is never logged; only mood ids and scores are

pub mod aggregate;
pub mod analyzers;
pub mod arbiter;
pub mod catalog;
pub mod config;
pub mod error;
pub mod types;

pub use arbiter::{ArbiterCandidate, CandidateRejection, RelatedMood, validate_candidate};
pub use catalog::{MoodDefinition, Valence};
pub use config::ScoringConfig;
pub use error::{EngineError, Result};
pub use types::{Alternative, ClassificationResult, MoodId, ScoreVector, SignalBreakdown, VerdictSource};

use tracing::{debug, warn};

/// Classify `text` with the default weights.
///
/// Total: empty, whitespace-only or unrecognisable text yields `calm` at
/// confidence 0.5.
///
/// # Examples
///
/// ```
/// let result = moodsync_engine::classify("I'm feeling so anxious about tomorrow's presentation");
/// assert_eq!(result.mood, moodsync_engine::MoodId::Anxious);
/// ```
pub fn classify(text: &str) -> ClassificationResult {
    classify_with_config(text, &ScoringConfig::default())
}

/// Classify `text` with caller-supplied weights.
pub fn classify_with_config(text: &str, config: &ScoringConfig) -> ClassificationResult {
    let breakdown = analyze(text, config);
    let normalized = analyzers::text::normalize(text);
    let result = aggregate::aggregate(breakdown.total(), &normalized, &config.calibration);
    debug!(
        mood = %result.mood,
        confidence = result.confidence,
        alternatives = result.alternatives.len(),
        "classified entry"
    );
    result
}

/// Per-analyzer score vectors for `text`, before summation.
pub fn analyze(text: &str, config: &ScoringConfig) -> SignalBreakdown {
    analyzers::analyze(text, config)
}

/// Prefer a valid external candidate, otherwise classify `text` heuristically.
///
/// A rejected candidate is logged at `warn` and never surfaces as an error.
pub fn classify_with_arbiter(text: &str, candidate: Option<&ArbiterCandidate>) -> ClassificationResult {
    classify_with_arbiter_config(text, candidate, &ScoringConfig::default())
}

/// [`classify_with_arbiter`] with caller-supplied weights for the fallback.
pub fn classify_with_arbiter_config(
    text: &str,
    candidate: Option<&ArbiterCandidate>,
    config: &ScoringConfig,
) -> ClassificationResult {
    if let Some(candidate) = candidate {
        match validate_candidate(candidate) {
            Ok(result) => {
                debug!(mood = %result.mood, confidence = result.confidence, "arbiter verdict accepted");
                return result;
            }
            Err(rejection) => {
                warn!(%rejection, "arbiter candidate rejected, using heuristic");
            }
        }
    }
    classify_with_config(text, config)
}

/// Look up a catalog entry by id.
///
/// # Errors
///
/// Returns [`EngineError::UnknownMoodId`] if `id` is not in the catalog.
pub fn get_mood_definition(id: &str) -> Result<&'static MoodDefinition> {
    catalog::lookup_str(id)
}

/// All mood ids in catalog order.
pub fn list_mood_ids() -> Vec<&'static str> {
    catalog::ids().collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn classify_is_total_on_empty_input() {
        for text in ["", "   ", "\n\t"] {
            let result = classify(text);
            assert_eq!(result.mood, MoodId::Calm);
            assert!((result.confidence - 0.5).abs() < f64::EPSILON);
            assert!(result.alternatives.is_empty());
            assert_eq!(result.source, VerdictSource::Heuristic);
        }
    }

    #[test]
    fn classify_sums_breakdown() {
        let text = "😊 Had a great day with friends!";
        let config = ScoringConfig::default();
        assert_eq!(classify(text).scores, analyze(text, &config).total());
    }

    #[test]
    fn list_mood_ids_in_catalog_order() {
        let ids = list_mood_ids();
        assert_eq!(ids.len(), 36);
        assert_eq!(ids[0], "happy");
        assert_eq!(ids[34], "inlove");
        assert_eq!(ids[35], "guilty");
    }

    #[test]
    fn get_mood_definition_rejects_unknown() {
        assert_eq!(get_mood_definition("proud").unwrap().id, MoodId::Proud);
        assert!(matches!(
            get_mood_definition("ecstatic"),
            Err(EngineError::UnknownMoodId(id)) if id == "ecstatic"
        ));
    }

    #[test]
    fn rejected_candidate_falls_back() {
        let text = "I am not happy today";
        let candidate = ArbiterCandidate::new("not_a_real_mood", 0.9);
        assert_eq!(classify_with_arbiter(text, Some(&candidate)), classify(text));
        assert_eq!(classify_with_arbiter(text, None), classify(text));
    }
}
