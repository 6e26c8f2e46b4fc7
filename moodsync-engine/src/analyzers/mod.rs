//! Independent signal analyzers.
//!
//! Each analyzer returns its own partial [`ScoreVector`]; none sees another's
//! output, so they can run in any order and be tested alone.

pub mod context;
pub mod emoji;
pub mod lexical;
pub mod text;

use crate::config::ScoringConfig;
use crate::types::SignalBreakdown;

/// Runs every analyzer over `text` and returns their contributions.
///
/// Lexical and context analysis see the normalised text; emoji analysis sees
/// the original.
pub fn analyze(text: &str, config: &ScoringConfig) -> SignalBreakdown {
    let normalized = text::normalize(text);
    SignalBreakdown {
        lexical: lexical::score(&normalized, &config.lexical),
        context: context::score(&normalized, &config.context),
        emoji: emoji::score(text),
    }
}
