//! Error types for the moodsync-engine crate.
//!
//! Classification itself never fails. These errors only surface when a
//! caller misuses the catalog (looking up an id that does not exist) or
//! supplies an invalid [`ScoringConfig`](crate::ScoringConfig).

/// Errors that can occur when using the mood engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A mood id was requested that is not present in the catalog.
    #[error("unknown mood id: {0}")]
    UnknownMoodId(String),

    /// Invalid scoring configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for moodsync-engine results.
pub type Result<T> = std::result::Result<T, EngineError>;
