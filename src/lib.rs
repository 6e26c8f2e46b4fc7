//! moodsync: mood tracking for personal journal entries.
//!
//! The classifier itself lives in [`moodsync_engine`], which is pure and
//! synchronous. This crate supplies everything around it:
//!
//! # Architecture
//!
//! - **Config**: TOML application settings wrapping the engine's weights
//! - **Arbiter**: optional external classifier asked first, with timeout,
//!   retry and heuristic fallback
//! - **Reply**: supportive journal reply built from the mood and entry cues
//! - **Journal / stats**: JSON journal store, streaks and mood summaries
//! - **Logging**: `tracing` subscriber setup for the `moodsync` binary

pub mod arbiter;
pub mod config;
pub mod error;
pub mod journal;
pub mod logging;
pub mod moodsync_dirs;
pub mod reply;
pub mod stats;

pub use arbiter::{MoodArbiter, analyze_mood, build_mood_prompt, parse_arbiter_reply};
pub use config::MoodsyncConfig;
pub use error::{MoodsyncError, Result};
pub use journal::{JournalEntry, JournalStore};
pub use reply::compose_reply;

pub use moodsync_engine as engine;
