//! Task storage
//!
//! The board keeps accepted tasks for the lifetime of the process:
//! - `memory`: in-memory store (the only backend; tasks are never persisted)

/// In-memory task store
pub mod memory;

use serde::Serialize;
use thiserror::Error;

use crate::models::{ParsedTask, Priority, Task};

pub use memory::MemoryTaskStore;

/// Default prefix for generated task ids
pub const DEFAULT_ID_PREFIX: &str = "TSK";

/// Errors returned by task store operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No task with the given id
    #[error("task not found: {0}")]
    NotFound(String),

    /// A required field was empty after trimming
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

/// A manually entered task, before validation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewTask {
    /// Who is responsible
    pub assignee: String,
    /// What needs to be done
    pub description: String,
    /// Free-text deadline
    pub deadline: String,
    /// Priority (P3 unless chosen)
    pub priority: Priority,
}

impl NewTask {
    /// Trim every field and reject empty ones
    pub fn validate(self) -> Result<ParsedTask, StoreError> {
        let assignee = required("assignee", &self.assignee)?;
        let description = required("description", &self.description)?;
        let deadline = required("deadline", &self.deadline)?;

        Ok(ParsedTask {
            assignee,
            description,
            deadline,
            priority: self.priority,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, StoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(StoreError::EmptyField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Task counts shown above the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BoardStats {
    /// All tasks on the board
    pub total: usize,
    /// Tasks not yet completed
    pub active: usize,
    /// Completed tasks
    pub completed: usize,
}

/// Storage backend for board tasks
pub trait TaskStore {
    /// Accept a manually entered task
    fn add(&mut self, task: NewTask) -> Result<Task, StoreError>;

    /// Accept a batch of parsed tasks, in order; each gets a distinct id
    fn add_parsed(&mut self, tasks: Vec<ParsedTask>) -> Vec<Task>;

    /// Flip a task's completion flag
    fn toggle_complete(&mut self, id: &str) -> Result<&Task, StoreError>;

    /// Remove a task, returning it
    fn delete(&mut self, id: &str) -> Result<Task, StoreError>;

    /// All tasks, in insertion order
    fn all(&self) -> &[Task];

    /// Look up a task by id
    fn get(&self, id: &str) -> Option<&Task> {
        self.all().iter().find(|t| t.id == id)
    }

    /// Tasks with the given completion state, in insertion order
    fn list_by(&self, completed: bool) -> Vec<&Task> {
        self.all().iter().filter(|t| t.completed == completed).collect()
    }

    /// Total, active and completed counts
    fn stats(&self) -> BoardStats {
        let total = self.all().len();
        let completed = self.all().iter().filter(|t| t.completed).count();
        BoardStats {
            total,
            active: total - completed,
            completed,
        }
    }
}
