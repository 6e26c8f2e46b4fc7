//! Error types for the moodsync application layer.

use moodsync_engine::EngineError;

/// Top-level error type for moodsync.
#[derive(Debug, thiserror::Error)]
pub enum MoodsyncError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Classification engine error.
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// External arbiter failure (transport, timeout, unusable reply).
    #[error("arbiter error: {0}")]
    Arbiter(String),

    /// Journal storage error.
    #[error("journal error: {0}")]
    Journal(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encode/decode error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, MoodsyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_convert() {
        let err: MoodsyncError = EngineError::UnknownMoodId("ecstatic".into()).into();
        assert_eq!(err.to_string(), "engine error: unknown mood id: ecstatic");
    }

    #[test]
    fn io_errors_convert() {
        let err: MoodsyncError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, MoodsyncError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: gone");
    }

    #[test]
    fn string_variants_display() {
        assert_eq!(MoodsyncError::Config("bad".into()).to_string(), "config error: bad");
        assert_eq!(MoodsyncError::Arbiter("timed out".into()).to_string(), "arbiter error: timed out");
        assert_eq!(MoodsyncError::Journal("corrupt".into()).to_string(), "journal error: corrupt");
    }
}
