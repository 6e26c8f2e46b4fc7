//! Journal entries and their on-disk store.
//!
//! The journal is a single JSON array, newest entry first.

use crate::error::{MoodsyncError, Result};
use chrono::{DateTime, Utc};
use moodsync_engine::{ClassificationResult, MoodId};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One classified journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub date: DateTime<Utc>,
    pub mood: MoodId,
    pub confidence: f64,
    pub text: String,
    /// Composed reply shown with the entry, if one was generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
}

impl JournalEntry {
    /// Entry for `text` at `date` carrying `result`'s verdict.
    pub fn from_classification(text: &str, result: &ClassificationResult, date: DateTime<Utc>) -> Self {
        Self {
            date,
            mood: result.mood,
            confidence: result.confidence,
            text: text.to_owned(),
            reply: None,
        }
    }

    /// Attach a composed reply.
    #[must_use]
    pub fn with_reply(mut self, reply: String) -> Self {
        self.reply = Some(reply);
        self
    }
}

/// JSON file holding every journal entry.
#[derive(Debug, Clone)]
pub struct JournalStore {
    path: PathBuf,
}

impl JournalStore {
    /// Store backed by `path`. Nothing is read until [`Self::load`].
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at [`crate::moodsync_dirs::journal_file`].
    pub fn default_location() -> Self {
        Self::open(crate::moodsync_dirs::journal_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries, newest first. A missing file is an empty journal.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Vec<JournalEntry>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no journal yet");
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content)
            .map_err(|e| MoodsyncError::Journal(format!("{}: {e}", self.path.display())))
    }

    /// Replace the journal with `entries`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, entries: &[JournalEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Insert `entry` at the front and persist. Returns the new entry count.
    ///
    /// # Errors
    ///
    /// Returns an error if the journal cannot be loaded or saved.
    pub fn append(&self, entry: JournalEntry) -> Result<usize> {
        let mut entries = self.load()?;
        info!(mood = %entry.mood, confidence = entry.confidence, "journal entry added");
        entries.insert(0, entry);
        self.save(&entries)?;
        Ok(entries.len())
    }
}
