//! Centralized path definitions for taskscribe
//!
//! Tasks live only in memory, so the only file taskscribe touches is the
//! user-level configuration:
//!
//! ```text
//! ~/.taskscribe/
//! └── config.toml               # Board and output preferences
//! ```
//!
//! Set `TASKSCRIBE_HOME` to use a different directory.

use std::path::PathBuf;

/// Environment variable that overrides the global directory
pub const HOME_ENV: &str = "TASKSCRIBE_HOME";

/// Global config directory name
const GLOBAL_DIR: &str = ".taskscribe";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global taskscribe directory.
///
/// Returns `$TASKSCRIBE_HOME` when set and non-empty, otherwise `~/.taskscribe/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.taskscribe/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
