//! Task model
//!
//! A `ParsedTask` is what the transcript parser produces for one sentence.
//! A `Task` is a parsed (or manually entered) task once a store has accepted
//! it and given it an identity.

use serde::{Deserialize, Serialize};

/// Task priority (P1 = most urgent)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    /// High priority
    P1,
    /// Medium priority
    P2,
    /// Normal priority (default)
    #[default]
    P3,
}

impl Priority {
    /// Human label, as shown on task cards
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::P1 => "High Priority",
            Self::P2 => "Medium Priority",
            Self::P3 => "Normal Priority",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P1 => write!(f, "P1"),
            Self::P2 => write!(f, "P2"),
            Self::P3 => write!(f, "P3"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "p1" | "1" | "high" => Ok(Self::P1),
            "p2" | "2" | "medium" | "med" => Ok(Self::P2),
            "p3" | "3" | "normal" | "low" => Ok(Self::P3),
            _ => Err(format!("Invalid priority: {s}. Use: P1, P2, P3 (or 1-3)")),
        }
    }
}

/// A task extracted from one transcript sentence
///
/// All string fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTask {
    /// Who the task was assigned to (a single name token)
    pub assignee: String,

    /// What needs to be done, prefixed with the action verb when one was captured
    pub description: String,

    /// Free-text deadline ("tonight", "10pm tomorrow", "Friday")
    pub deadline: String,

    /// Urgency derived from keywords in the sentence
    pub priority: Priority,
}

/// A task accepted into a store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier within the store (PREFIX-N)
    pub id: String,

    /// Who is responsible
    pub assignee: String,

    /// What needs to be done
    pub description: String,

    /// Free-text deadline
    pub deadline: String,

    /// Priority level
    pub priority: Priority,

    /// Whether the task has been completed
    #[serde(default)]
    pub completed: bool,

    /// When this task was accepted (RFC3339)
    pub created_at: String,
}

impl Task {
    /// Accept a parsed task under the given id
    #[must_use]
    pub fn from_parsed(id: String, parsed: ParsedTask) -> Self {
        Self {
            id,
            assignee: parsed.assignee,
            description: parsed.description,
            deadline: parsed.deadline,
            priority: parsed.priority,
            completed: false,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Flip the completion flag, returning the new state
    pub const fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}
