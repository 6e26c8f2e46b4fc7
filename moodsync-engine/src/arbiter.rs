//! Validation of externally supplied verdicts.
//!
//! An upstream classifier may hand back a candidate verdict. A candidate
//! naming a catalog mood with a finite confidence is passed through; anything
//! else is rejected and the caller falls back to the heuristic. Rejection is
//! never an error.

use crate::types::{Alternative, ClassificationResult, MoodId, ScoreVector, VerdictSource};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum related moods carried over from a candidate.
pub const MAX_RELATED_MOODS: usize = 3;

/// A verdict proposed by an external classifier, as it arrives on the wire.
///
/// Every field is optional so that partially formed replies still parse and
/// can be rejected with a precise [`CandidateRejection`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArbiterCandidate {
    pub mood: Option<String>,
    pub confidence: Option<f64>,
    pub reasoning: Option<String>,
    pub related_moods: Vec<RelatedMood>,
}

/// A secondary mood suggested alongside a candidate verdict.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedMood {
    pub mood: Option<String>,
    pub confidence: Option<f64>,
}

impl ArbiterCandidate {
    /// Convenience constructor for a candidate with no related moods.
    pub fn new(mood: impl Into<String>, confidence: f64) -> Self {
        Self {
            mood: Some(mood.into()),
            confidence: Some(confidence),
            reasoning: None,
            related_moods: Vec::new(),
        }
    }
}

/// Why a candidate was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateRejection {
    MissingMood,
    UnknownMood(String),
    MissingConfidence,
    NonFiniteConfidence,
}

impl fmt::Display for CandidateRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMood => f.write_str("candidate has no mood"),
            Self::UnknownMood(mood) => write!(f, "candidate mood {mood:?} is not in the catalog"),
            Self::MissingConfidence => f.write_str("candidate has no confidence"),
            Self::NonFiniteConfidence => f.write_str("candidate confidence is not a finite number"),
        }
    }
}

/// Turns an acceptable candidate into a passthrough result.
///
/// The primary confidence is clamped to `0.0..=1.0`. Related moods are kept
/// only when they name a catalog mood other than the primary with a finite,
/// positive confidence; duplicates are dropped and at most
/// [`MAX_RELATED_MOODS`] survive. The score vector is all zeros.
pub fn validate_candidate(candidate: &ArbiterCandidate) -> Result<ClassificationResult, CandidateRejection> {
    let raw_mood = candidate
        .mood
        .as_deref()
        .map(str::trim)
        .filter(|mood| !mood.is_empty())
        .ok_or(CandidateRejection::MissingMood)?;
    let mood: MoodId = raw_mood
        .parse()
        .map_err(|_| CandidateRejection::UnknownMood(raw_mood.to_owned()))?;

    let confidence = candidate.confidence.ok_or(CandidateRejection::MissingConfidence)?;
    if !confidence.is_finite() {
        return Err(CandidateRejection::NonFiniteConfidence);
    }

    let mut alternatives: Vec<Alternative> = Vec::new();
    for related in &candidate.related_moods {
        let Some(related_mood) = related.mood.as_deref().and_then(|m| m.parse::<MoodId>().ok()) else {
            continue;
        };
        let Some(related_confidence) = related.confidence.filter(|c| c.is_finite() && *c > 0.0) else {
            continue;
        };
        if related_mood == mood || alternatives.iter().any(|a| a.mood == related_mood) {
            continue;
        }
        alternatives.push(Alternative {
            mood: related_mood,
            confidence: related_confidence.clamp(0.0, 1.0),
            score: 0.0,
        });
        if alternatives.len() == MAX_RELATED_MOODS {
            break;
        }
    }

    Ok(ClassificationResult {
        mood,
        confidence: confidence.clamp(0.0, 1.0),
        scores: ScoreVector::zeroed(),
        alternatives,
        source: VerdictSource::Arbiter,
        reasoning: candidate.reasoning.clone().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn valid_candidate_passes_through() {
        let candidate = ArbiterCandidate {
            reasoning: Some("upbeat tone".into()),
            ..ArbiterCandidate::new("joyful", 0.9)
        };
        let result = validate_candidate(&candidate).unwrap();
        assert_eq!(result.mood, MoodId::Joyful);
        assert!((result.confidence - 0.9).abs() < f64::EPSILON);
        assert_eq!(result.source, VerdictSource::Arbiter);
        assert_eq!(result.reasoning, "upbeat tone");
        assert!(result.scores.is_zero());
        assert!(result.alternatives.is_empty());
    }

    #[test]
    fn mood_id_is_trimmed_and_case_folded() {
        let result = validate_candidate(&ArbiterCandidate::new("  InLove ", 0.7)).unwrap();
        assert_eq!(result.mood, MoodId::InLove);
    }

    #[test]
    fn confidence_is_clamped() {
        let high = validate_candidate(&ArbiterCandidate::new("calm", 1.7)).unwrap();
        let low = validate_candidate(&ArbiterCandidate::new("calm", -0.2)).unwrap();
        assert!((high.confidence - 1.0).abs() < f64::EPSILON);
        assert!(low.confidence.abs() < f64::EPSILON);
    }

    #[test]
    fn rejections() {
        assert_eq!(
            validate_candidate(&ArbiterCandidate::default()),
            Err(CandidateRejection::MissingMood)
        );
        assert_eq!(
            validate_candidate(&ArbiterCandidate::new("   ", 0.5)),
            Err(CandidateRejection::MissingMood)
        );
        assert_eq!(
            validate_candidate(&ArbiterCandidate::new("not_a_real_mood", 0.9)),
            Err(CandidateRejection::UnknownMood("not_a_real_mood".into()))
        );
        let no_confidence = ArbiterCandidate {
            mood: Some("sad".into()),
            ..ArbiterCandidate::default()
        };
        assert_eq!(
            validate_candidate(&no_confidence),
            Err(CandidateRejection::MissingConfidence)
        );
        assert_eq!(
            validate_candidate(&ArbiterCandidate::new("sad", f64::NAN)),
            Err(CandidateRejection::NonFiniteConfidence)
        );
    }

    #[test]
    fn related_moods_are_filtered() {
        let candidate = ArbiterCandidate {
            related_moods: vec![
                RelatedMood { mood: Some("excited".into()), confidence: Some(0.6) },
                RelatedMood { mood: Some("ecstatic".into()), confidence: Some(0.5) },
                RelatedMood { mood: Some("joyful".into()), confidence: Some(0.5) },
                RelatedMood { mood: Some("excited".into()), confidence: Some(0.4) },
                RelatedMood { mood: Some("grateful".into()), confidence: None },
                RelatedMood { mood: Some("proud".into()), confidence: Some(0.0) },
                RelatedMood { mood: Some("happy".into()), confidence: Some(1.4) },
                RelatedMood { mood: Some("content".into()), confidence: Some(0.3) },
                RelatedMood { mood: Some("hopeful".into()), confidence: Some(0.2) },
            ],
            ..ArbiterCandidate::new("joyful", 0.9)
        };
        let result = validate_candidate(&candidate).unwrap();
        let moods: Vec<MoodId> = result.alternatives.iter().map(|a| a.mood).collect();
        assert_eq!(moods, vec![MoodId::Excited, MoodId::Happy, MoodId::Content]);
        assert!((result.alternatives[1].confidence - 1.0).abs() < f64::EPSILON);
        assert!(result.alternatives.iter().all(|a| a.score == 0.0));
    }

    #[test]
    fn candidate_parses_camel_case_json() {
        let json = r#"{"mood":"hopeful","confidence":0.8,"reasoning":"looking forward","relatedMoods":[{"mood":"optimistic","confidence":0.6}]}"#;
        let candidate: ArbiterCandidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.related_moods.len(), 1);
        let result = validate_candidate(&candidate).unwrap();
        assert_eq!(result.mood, MoodId::Hopeful);
        assert_eq!(result.alternatives[0].mood, MoodId::Optimistic);
    }

    #[test]
    fn partial_json_still_parses() {
        let candidate: ArbiterCandidate = serde_json::from_str(r#"{"mood":"sad"}"#).unwrap();
        assert_eq!(candidate.confidence, None);
        assert!(candidate.related_moods.is_empty());
    }
}
