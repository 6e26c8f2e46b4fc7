//! Static registry of classifiable moods.
//!
//! The catalog is pure data: label, emoji, colour token, a short default
//! reply and the keyword evidence for each mood. Every analyzer iterates it
//! rather than naming moods itself, so adding a mood means adding a
//! [`MoodId`] variant and one table entry.

mod entries;

use crate::error::{EngineError, Result};
use crate::types::MoodId;
use serde::Serialize;

/// Which cluster a negated direct mention of the mood is remapped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Valence {
    /// "not happy" credits sad and disappointed.
    Positive,
    /// "not anxious" credits calm and relaxed.
    Negative,
    /// Negated mentions credit nothing.
    Neutral,
}

/// One immutable catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct MoodDefinition {
    pub id: MoodId,
    /// Display label, e.g. `"In Love"`.
    pub label: &'static str,
    pub emoji: &'static str,
    /// Hex colour token used by chart collaborators.
    pub color: &'static str,
    /// Short reply shown when no composed reply is available.
    pub default_reply: &'static str,
    pub valence: Valence,
    /// Keyword evidence as curated, in order. Multi-word entries are phrases.
    pub keywords: &'static [&'static str],
}

/// Returns the definition for a typed mood id.
pub fn lookup(id: MoodId) -> &'static MoodDefinition {
    &entries::MOODS[id.index()]
}

/// Returns the definition for a mood id string.
///
/// # Errors
///
/// Returns [`EngineError::UnknownMoodId`] if `id` is not in the catalog.
pub fn lookup_str(id: &str) -> Result<&'static MoodDefinition> {
    let mood: MoodId = id.parse()?;
    Ok(lookup(mood))
}

/// Every mood definition in catalog order.
pub fn all() -> &'static [MoodDefinition] {
    &entries::MOODS
}

/// Mood ids in catalog order.
pub fn ids() -> impl Iterator<Item = &'static str> {
    all().iter().map(|definition| definition.id.as_str())
}

/// Checks the table against [`MoodId::ALL`].
///
/// [`lookup`] indexes the table by [`MoodId`] position, so a misordered entry
/// would silently answer for the wrong mood.
///
/// # Errors
///
/// Returns [`EngineError::Config`] naming the first entry that is out of
/// place or has no keywords.
pub fn verify() -> Result<()> {
    verify_table(all())
}

fn verify_table(table: &[MoodDefinition]) -> Result<()> {
    if table.len() != MoodId::COUNT {
        return Err(EngineError::Config(format!(
            "catalog has {} entries, expected {}",
            table.len(),
            MoodId::COUNT
        )));
    }
    for (position, definition) in table.iter().enumerate() {
        if definition.id.index() != position {
            return Err(EngineError::Config(format!(
                "catalog entry {position} is {} but MoodId::ALL expects {}",
                definition.id,
                MoodId::ALL[position]
            )));
        }
        if definition.keywords.is_empty() {
            return Err(EngineError::Config(format!(
                "catalog entry {} has no keywords",
                definition.id
            )));
        }
    }
    Ok(())
}
