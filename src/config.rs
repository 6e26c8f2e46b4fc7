//! Configuration types for moodsync.

use crate::error::{MoodsyncError, Result};
use moodsync_engine::ScoringConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodsyncConfig {
    /// Heuristic scoring weights and calibration.
    pub scoring: ScoringConfig,
    /// External arbiter policy.
    pub arbiter: ArbiterConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
}

/// When and how long to wait on an external arbiter before falling back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArbiterConfig {
    /// Ask the arbiter at all.
    pub enabled: bool,
    /// Per-attempt timeout in seconds.
    pub timeout_secs: u64,
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Linear backoff unit: attempt `n` waits `n * retry_backoff_ms`.
    pub retry_backoff_ms: u64,
    /// Entries shorter than this (trimmed, in characters) skip the arbiter.
    pub min_text_chars: usize,
    /// Program and arguments of a command arbiter. Empty means none.
    ///
    /// The command receives the prompt on stdin and must print the model's
    /// reply on stdout.
    pub command: Vec<String>,
}

impl Default for ArbiterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_secs: 30,
            max_retries: 2,
            retry_backoff_ms: 1000,
            min_text_chars: 10,
            command: Vec::new(),
        }
    }
}

/// Log output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Also write a daily rolling log under the logs directory.
    pub log_to_file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            log_to_file: false,
        }
    }
}

impl MoodsyncConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| MoodsyncError::Config(e.to_string()))
    }

    /// Load from `path` if given, otherwise from [`Self::default_config_path`]
    /// when it exists, otherwise defaults. The result is validated.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be parsed or fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::default_config_path();
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| MoodsyncError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path (see [`crate::moodsync_dirs::config_file`]).
    pub fn default_config_path() -> PathBuf {
        crate::moodsync_dirs::config_file()
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MoodsyncError::Config`] if the scoring weights are invalid,
    /// the arbiter timeout is zero, or the log level is empty.
    pub fn validate(&self) -> Result<()> {
        self.scoring
            .validate()
            .map_err(|e| MoodsyncError::Config(format!("scoring: {e}")))?;
        if self.arbiter.timeout_secs == 0 {
            return Err(MoodsyncError::Config(
                "arbiter.timeout_secs must be greater than 0".into(),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(MoodsyncError::Config("logging.level must not be empty".into()));
        }
        Ok(())
    }
}
