//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing taskscribe components.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// The sample transcript shown in the transcript box placeholder
pub const SAMPLE_TRANSCRIPT: &str = "Aman you take the landing page by 10pm tomorrow. \
     Rajeev you take care of client follow-up by Wednesday. \
     Shreya please review the marketing deck tonight.";

/// A longer meeting with chatter between the assignments
pub const STANDUP_TRANSCRIPT: &str = "Good morning everyone! Quick standup today. \
     This is urgent: Priya - fix the login bug by Friday. \
     The weather was nice today; \
     Maya is responsible for the budget review by Monday. \
     Important: Leo update the roadmap this week. \
     Thanks all!";

/// A scratch directory that stands in for `TASKSCRIBE_HOME`
pub struct TestHome {
    dir: TempDir,
}

impl TestHome {
    /// Create an empty home directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Root of the home directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the config file inside this home
    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    /// Write a config file
    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).unwrap();
    }

    /// Write a transcript file and return its path
    pub fn write_transcript(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}
