//! Global configuration management
//!
//! Provides persistent storage for user preferences.
//! Config is stored at `~/.taskscribe/config.toml`.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;
use crate::storage::DEFAULT_ID_PREFIX;

/// Errors reading or writing the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// The config could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The config could not be serialized
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// `config set` was given an unknown key
    #[error("unknown config key: {0}. Use: board.id_prefix, output.json, output.color")]
    UnknownKey(String),

    /// `config set` was given a value of the wrong type
    #[error("invalid value for {key}: {value}")]
    InvalidValue {
        /// Config key
        key: String,
        /// Rejected value
        value: String,
    },
}

/// Global taskscribe configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Board preferences
    #[serde(default)]
    pub board: BoardConfig,
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

/// Board preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Prefix for generated task ids
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
}

fn default_id_prefix() -> String {
    DEFAULT_ID_PREFIX.to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            id_prefix: default_id_prefix(),
        }
    }
}

/// Output preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit JSON unless told otherwise
    #[serde(default)]
    pub json: bool,
    /// Colour priority badges in human output
    #[serde(default = "default_color")]
    pub color: bool,
}

const fn default_color() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            color: default_color(),
        }
    }
}

impl GlobalConfig {
    /// Get the config directory path
    #[must_use]
    pub fn config_dir() -> PathBuf {
        paths::global_config_dir()
    }

    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or defaults if missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using default config: {e}");
                Self::default()
            },
        }
    }

    /// Load config from disk; a missing file gives defaults
    pub fn try_load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Save config to disk
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let dir = Self::config_dir();
        let path = Self::config_path();
        fs::create_dir_all(&dir).map_err(|source| ConfigError::Write {
            path: dir.clone(),
            source,
        })?;

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content).map_err(|source| ConfigError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Set a value by dotted key (`board.id_prefix`, `output.json`, `output.color`)
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "board.id_prefix" => {
                let prefix = value.trim();
                if prefix.is_empty() || prefix.chars().any(char::is_whitespace) {
                    return Err(invalid());
                }
                self.board.id_prefix = prefix.to_string();
            },
            "output.json" => self.output.json = parse_bool(value).ok_or_else(invalid)?,
            "output.color" => self.output.color = parse_bool(value).ok_or_else(invalid)?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
