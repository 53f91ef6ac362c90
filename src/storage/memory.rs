//! In-memory task store
//!
//! Ids are `{prefix}-{n}` with `n` taken from a per-store counter that only
//! moves forward, so tasks accepted within the same instant still get
//! distinct ids and a deleted id is never handed out again.

use super::{DEFAULT_ID_PREFIX, NewTask, StoreError, TaskStore};
use crate::models::{ParsedTask, Task};

/// Board tasks held in process memory
#[derive(Debug, Clone)]
pub struct MemoryTaskStore {
    prefix: String,
    next_seq: u64,
    tasks: Vec<Task>,
}

impl Default for MemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTaskStore {
    /// Create an empty store using the default id prefix
    #[must_use]
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_ID_PREFIX)
    }

    /// Create an empty store with a custom id prefix
    #[must_use]
    pub fn with_prefix(prefix: &str) -> Self {
        let prefix = prefix.trim();
        Self {
            prefix: if prefix.is_empty() {
                DEFAULT_ID_PREFIX.to_string()
            } else {
                prefix.to_string()
            },
            next_seq: 1,
            tasks: Vec::new(),
        }
    }

    /// The id prefix used by this store
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next_seq);
        self.next_seq += 1;
        id
    }

    fn accept(&mut self, parsed: ParsedTask) -> Task {
        let id = self.next_id();
        let task = Task::from_parsed(id, parsed);
        log::info!("Added task {} for {}", task.id, task.assignee);
        self.tasks.push(task.clone());
        task
    }

    fn position(&self, id: &str) -> Result<usize, StoreError> {
        self.tasks
            .iter()
            .position(|t| t.id.eq_ignore_ascii_case(id.trim()))
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

impl TaskStore for MemoryTaskStore {
    fn add(&mut self, task: NewTask) -> Result<Task, StoreError> {
        let parsed = task.validate()?;
        Ok(self.accept(parsed))
    }

    fn add_parsed(&mut self, tasks: Vec<ParsedTask>) -> Vec<Task> {
        tasks.into_iter().map(|parsed| self.accept(parsed)).collect()
    }

    fn toggle_complete(&mut self, id: &str) -> Result<&Task, StoreError> {
        let index = self.position(id)?;
        let task = &mut self.tasks[index];
        let completed = task.toggle();
        log::info!("Task {} marked {}", task.id, if completed { "complete" } else { "active" });
        Ok(&self.tasks[index])
    }

    fn delete(&mut self, id: &str) -> Result<Task, StoreError> {
        let index = self.position(id)?;
        let task = self.tasks.remove(index);
        log::info!("Deleted task {}", task.id);
        Ok(task)
    }

    fn all(&self) -> &[Task] {
        &self.tasks
    }

    fn get(&self, id: &str) -> Option<&Task> {
        self.position(id).ok().map(|i| &self.tasks[i])
    }
}
