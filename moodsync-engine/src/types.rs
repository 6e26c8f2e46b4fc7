//! Core types for mood identifiers, score vectors and classification results.

use crate::error::EngineError;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// Identifier of one mood in the catalog.
///
/// Variant order is the catalog order: it drives iteration and breaks ties
/// between equally scored moods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodId {
    Happy,
    Sad,
    Angry,
    Anxious,
    Excited,
    Calm,
    Stressed,
    Bored,
    Content,
    Irritable,
    Disappointed,
    Hopeful,
    Overwhelmed,
    Relaxed,
    Frustrated,
    Joyful,
    Depressed,
    Lonely,
    Peaceful,
    Nervous,
    Apathetic,
    Enthusiastic,
    Melancholy,
    Annoyed,
    Optimistic,
    Pessimistic,
    Satisfied,
    Worried,
    Confident,
    Grateful,
    Confused,
    Proud,
    Tired,
    Motivated,
    InLove,
    Guilty,
}

impl MoodId {
    /// Number of moods in the catalog.
    pub const COUNT: usize = 36;

    /// Every mood, in catalog order.
    pub const ALL: [MoodId; Self::COUNT] = [
        Self::Happy,
        Self::Sad,
        Self::Angry,
        Self::Anxious,
        Self::Excited,
        Self::Calm,
        Self::Stressed,
        Self::Bored,
        Self::Content,
        Self::Irritable,
        Self::Disappointed,
        Self::Hopeful,
        Self::Overwhelmed,
        Self::Relaxed,
        Self::Frustrated,
        Self::Joyful,
        Self::Depressed,
        Self::Lonely,
        Self::Peaceful,
        Self::Nervous,
        Self::Apathetic,
        Self::Enthusiastic,
        Self::Melancholy,
        Self::Annoyed,
        Self::Optimistic,
        Self::Pessimistic,
        Self::Satisfied,
        Self::Worried,
        Self::Confident,
        Self::Grateful,
        Self::Confused,
        Self::Proud,
        Self::Tired,
        Self::Motivated,
        Self::InLove,
        Self::Guilty,
    ];

    /// Returns the wire id of this mood (`"happy"`, `"inlove"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Anxious => "anxious",
            Self::Excited => "excited",
            Self::Calm => "calm",
            Self::Stressed => "stressed",
            Self::Bored => "bored",
            Self::Content => "content",
            Self::Irritable => "irritable",
            Self::Disappointed => "disappointed",
            Self::Hopeful => "hopeful",
            Self::Overwhelmed => "overwhelmed",
            Self::Relaxed => "relaxed",
            Self::Frustrated => "frustrated",
            Self::Joyful => "joyful",
            Self::Depressed => "depressed",
            Self::Lonely => "lonely",
            Self::Peaceful => "peaceful",
            Self::Nervous => "nervous",
            Self::Apathetic => "apathetic",
            Self::Enthusiastic => "enthusiastic",
            Self::Melancholy => "melancholy",
            Self::Annoyed => "annoyed",
            Self::Optimistic => "optimistic",
            Self::Pessimistic => "pessimistic",
            Self::Satisfied => "satisfied",
            Self::Worried => "worried",
            Self::Confident => "confident",
            Self::Grateful => "grateful",
            Self::Confused => "confused",
            Self::Proud => "proud",
            Self::Tired => "tired",
            Self::Motivated => "motivated",
            Self::InLove => "inlove",
            Self::Guilty => "guilty",
        }
    }

    /// Position of this mood in catalog order.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodId {
    type Err = EngineError;

    /// Parses a mood id, ignoring surrounding whitespace and ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|mood| mood.as_str() == wanted)
            .ok_or_else(|| EngineError::UnknownMoodId(s.to_owned()))
    }
}

// ── Score vector ────────────────────────────────────────────────────────

/// Per-mood tally of weighted evidence for one classification call.
///
/// Always holds exactly one entry per catalog mood; untouched moods stay at
/// zero. Serializes as a JSON object keyed by mood id in catalog order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreVector([f64; MoodId::COUNT]);

impl Default for ScoreVector {
    fn default() -> Self {
        Self([0.0; MoodId::COUNT])
    }
}

impl ScoreVector {
    /// A vector with every mood at zero.
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Score currently credited to `mood`.
    pub fn get(&self, mood: MoodId) -> f64 {
        self.0[mood.index()]
    }

    /// Credit `amount` to `mood`.
    pub fn add(&mut self, mood: MoodId, amount: f64) {
        self.0[mood.index()] += amount;
    }

    /// Add every entry of `other` into this vector.
    pub fn merge(&mut self, other: &ScoreVector) {
        for (slot, value) in self.0.iter_mut().zip(other.0.iter()) {
            *slot += value;
        }
    }

    /// Iterate `(mood, score)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (MoodId, f64)> + '_ {
        MoodId::ALL.iter().map(|&mood| (mood, self.get(mood)))
    }

    /// Returns `true` when no mood has any score.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&value| value == 0.0)
    }

    /// Sum of all scores.
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Moods with a positive score, highest first.
    ///
    /// The sort is stable, so equal scores keep catalog order.
    pub fn ranked(&self) -> Vec<(MoodId, f64)> {
        let mut ranked: Vec<(MoodId, f64)> = self.iter().filter(|(_, score)| *score > 0.0).collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked
    }
}

impl Index<MoodId> for ScoreVector {
    type Output = f64;

    fn index(&self, mood: MoodId) -> &f64 {
        &self.0[mood.index()]
    }
}

impl Serialize for ScoreVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(MoodId::COUNT))?;
        for (mood, score) in self.iter() {
            map.serialize_entry(mood.as_str(), &score)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ScoreVector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScoreVectorVisitor;

        impl<'de> Visitor<'de> for ScoreVectorVisitor {
            type Value = ScoreVector;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of mood id to score")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ScoreVector, A::Error> {
                let mut scores = ScoreVector::zeroed();
                while let Some((mood, score)) = access.next_entry::<MoodId, f64>()? {
                    scores.0[mood.index()] = score;
                }
                Ok(scores)
            }
        }

        deserializer.deserialize_map(ScoreVectorVisitor)
    }
}

// ── Results ─────────────────────────────────────────────────────────────

/// Where a classification verdict came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictSource {
    /// The built-in keyword and context heuristic.
    Heuristic,
    /// An externally supplied candidate that passed validation.
    Arbiter,
}

/// A secondary mood surfaced alongside the dominant one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub mood: MoodId,
    /// Derived confidence in `0.0..=1.0`.
    pub confidence: f64,
    /// Raw score the mood received. Zero for arbiter-supplied moods.
    pub score: f64,
}

/// The verdict for one journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Dominant mood.
    pub mood: MoodId,
    /// Calibrated confidence in `0.0..=1.0`.
    pub confidence: f64,
    /// Full score breakdown, one entry per catalog mood.
    pub scores: ScoreVector,
    /// Up to three related moods, most confident first.
    pub alternatives: Vec<Alternative>,
    pub source: VerdictSource,
    /// Short human-readable explanation of the verdict.
    pub reasoning: String,
}

/// Partial score vectors from each analyzer, before summation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SignalBreakdown {
    /// Direct mood names and catalog keywords.
    pub lexical: ScoreVector,
    /// Phrase patterns, intensity modifiers, templates and punctuation.
    pub context: ScoreVector,
    /// Emoji classes.
    pub emoji: ScoreVector,
}

impl SignalBreakdown {
    /// Sum of all three signals.
    pub fn total(&self) -> ScoreVector {
        let mut total = self.lexical;
        total.merge(&self.context);
        total.merge(&self.emoji);
        total
    }
}
