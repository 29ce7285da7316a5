//! Runtime configuration.
//!
//! The CLI takes no flags; everything tunable comes from environment
//! variables with defaults that match a bare `projmark` invocation.

use projmark_core::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "PROJMARK_DB";
pub const LOG_LEVEL_ENV: &str = "PROJMARK_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "PROJMARK_LOG_DIR";

const DEFAULT_DB_PATH: &str = "./project.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Store file, relative paths resolve against the launch directory.
    pub db_path: PathBuf,
    pub log_level: String,
    /// Must be absolute for logging to start.
    pub log_dir: PathBuf,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: get(DB_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
            log_level: get(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: get(LOG_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(default_log_dir),
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join("projmark").join("logs")
}
