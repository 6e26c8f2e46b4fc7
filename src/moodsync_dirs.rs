//! Where moodsync keeps its files.
//!
//! | File | Default (Linux) | Override |
//! |------|-----------------|----------|
//! | `journal.json`, `logs/` | `~/.local/share/moodsync/` | `MOODSYNC_DATA_DIR` |
//! | `config.toml` | `~/.config/moodsync/` | `MOODSYNC_CONFIG_DIR` |
//!
//! Platform roots come from the [`dirs`] crate (on macOS both resolve under
//! `~/Library/Application Support/`).

use std::ffi::OsString;
use std::path::PathBuf;

const APP_DIR: &str = "moodsync";

/// Picks the override if set and non-empty, else `platform/moodsync`, else
/// `fallback`.
fn resolve(override_dir: Option<OsString>, platform: Option<PathBuf>, fallback: &str) -> PathBuf {
    match override_dir {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => platform.map_or_else(|| PathBuf::from(fallback), |base| base.join(APP_DIR)),
    }
}

/// Application data root: the journal and `logs/`.
#[must_use]
pub fn data_dir() -> PathBuf {
    resolve(
        std::env::var_os("MOODSYNC_DATA_DIR"),
        dirs::data_dir(),
        "/tmp/moodsync-data",
    )
}

/// Application config directory, holding `config.toml`.
#[must_use]
pub fn config_dir() -> PathBuf {
    resolve(
        std::env::var_os("MOODSYNC_CONFIG_DIR"),
        dirs::config_dir(),
        "/tmp/moodsync-config",
    )
}

/// Log file directory (`data_dir()/logs/`).
#[must_use]
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// Main config file path (`config_dir()/config.toml`).
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Journal file path (`data_dir()/journal.json`).
#[must_use]
pub fn journal_file() -> PathBuf {
    data_dir().join("journal.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_override() {
        let dir = resolve(Some("/srv/journal".into()), Some("/home/a/.local/share".into()), "/tmp/x");
        assert_eq!(dir, PathBuf::from("/srv/journal"));
    }

    #[test]
    fn resolve_ignores_empty_override() {
        let dir = resolve(Some(OsString::new()), Some("/home/a/.config".into()), "/tmp/x");
        assert_eq!(dir, PathBuf::from("/home/a/.config/moodsync"));
    }

    #[test]
    fn resolve_falls_back_without_platform_dir() {
        assert_eq!(resolve(None, None, "/tmp/x"), PathBuf::from("/tmp/x"));
    }

    #[test]
    fn config_file_ends_with_config_toml() {
        let path = config_file();
        let s = path.to_string_lossy();
        assert!(s.ends_with("config.toml"), "config_file: {s}");
    }

    #[test]
    fn journal_file_ends_with_journal_json() {
        let path = journal_file();
        let s = path.to_string_lossy();
        assert!(s.ends_with("journal.json"), "journal_file: {s}");
    }

    #[test]
    fn logs_dir_ends_with_logs() {
        assert!(logs_dir().ends_with("logs"));
    }

    // Both overrides live in one test so no other test observes the
    // temporary values.
    #[test]
    fn overrides_via_env() {
        let data_key = "MOODSYNC_DATA_DIR";
        let config_key = "MOODSYNC_CONFIG_DIR";
        let original_data = std::env::var_os(data_key);
        let original_config = std::env::var_os(config_key);

        // SAFETY: no other test in this crate sets these variables.
        unsafe {
            std::env::set_var(data_key, "/custom/data");
            std::env::set_var(config_key, "/custom/config");
        }
        assert_eq!(data_dir(), PathBuf::from("/custom/data"));
        assert_eq!(journal_file(), PathBuf::from("/custom/data/journal.json"));
        assert_eq!(logs_dir(), PathBuf::from("/custom/data/logs"));
        assert_eq!(config_dir(), PathBuf::from("/custom/config"));
        assert_eq!(config_file(), PathBuf::from("/custom/config/config.toml"));

        for (key, original) in [(data_key, original_data), (config_key, original_config)] {
            match original {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}
