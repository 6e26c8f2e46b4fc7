//! Emoji signals.
//!
//! Each class fires at most once per entry, on presence alone. The test runs
//! against the original text since emoji have no case and normalisation
//! must not disturb variation selectors or ZWJ sequences.

use crate::types::{MoodId, ScoreVector};

use MoodId::*;

/// (mood, emoji, increment)
pub const EMOJI_CLASSES: &[(MoodId, &[&str], f64)] = &[
    (
        Happy,
        &["😊", "😀", "😃", "😄", "😁", "🙂", "☺️", "🤗", "🎉", "🎊", "👍", "🙌", "✨", "🌟"],
        4.0,
    ),
    (Sad, &["😢", "😭", "😔", "😞", "😟", "🙁", "☹️", "😿", "💔", "🥀"], 4.0),
    (Angry, &["😠", "😡", "🤬", "😤", "💢", "👿", "😾"], 4.0),
    (Anxious, &["😰", "😨", "😱", "😖", "😣", "😓", "😥", "🥺", "😬"], 4.0),
    (Excited, &["🤩", "🥳", "🚀", "⚡", "🔥", "💥", "🎆", "🎇"], 4.0),
    (Tired, &["😴", "😪", "🥱", "💤"], 4.0),
    (
        InLove,
        &["❤️", "💕", "💖", "💗", "💓", "💝", "💘", "😍", "🥰", "💑", "💏", "💞"],
        4.0,
    ),
    (Calm, &["😌", "🧘", "☮️", "🕊️", "🍃", "🌸", "🌺", "🌼"], 4.0),
    (Bored, &["😐", "😑", "😶", "🥱"], 4.0),
    (Confused, &["😕", "😶‍🌫️", "🤔", "😵‍💫", "🤷"], 4.0),
    (Grateful, &["🙏", "🙌", "💝", "✨", "🌟"], 3.0),
    (Hopeful, &["🌅", "🌄", "🌈", "⭐", "✨", "🌟"], 3.0),
    (Lonely, &["🥀", "😔", "😞", "💔", "🌧️"], 3.0),
    (Overwhelmed, &["😵‍💫", "😵", "🤯", "😩", "😫"], 4.0),
    (Confident, &["😎", "💪", "👑", "🔥", "⚡", "💯"], 4.0),
    (Guilty, &["😞", "😔", "😓", "🙇"], 3.0),
    (Motivated, &["💪", "🔥", "⚡", "🚀", "💯", "🎯"], 4.0),
];

/// Scores the original (un-normalised) `text` on emoji presence.
pub fn score(text: &str) -> ScoreVector {
    let mut scores = ScoreVector::zeroed();
    for &(mood, emoji, increment) in EMOJI_CLASSES {
        if emoji.iter().any(|symbol| text.contains(symbol)) {
            scores.add(mood, increment);
        }
    }
    scores
}
