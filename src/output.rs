//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::models::{Priority, Task};
use crate::parser::{ExplainedTask, ParseOutcome};
use crate::storage::BoardStats;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Enable or disable ANSI colours for human output
pub fn set_color(enabled: bool) {
    colored::control::set_override(enabled);
}

/// Priority badge, coloured like the task cards: P1 red, P2 yellow, P3 blue
#[must_use]
pub fn priority_badge(priority: Priority) -> ColoredString {
    let badge = format!("[{priority}]");
    match priority {
        Priority::P1 => badge.red().bold(),
        Priority::P2 => badge.yellow().bold(),
        Priority::P3 => badge.blue(),
    }
}

/// A stored task as shown to the user
#[derive(Debug, Clone, Serialize)]
pub struct TaskInfo {
    /// Task ID (PREFIX-N)
    pub id: String,
    /// Who is responsible
    pub assignee: String,
    /// What needs to be done
    pub description: String,
    /// Free-text deadline
    pub deadline: String,
    /// Priority (P1, P2, P3)
    pub priority: Priority,
    /// Whether the task is done
    pub completed: bool,
    /// When the task was added (RFC3339)
    pub created_at: String,
}

impl From<&Task> for TaskInfo {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            assignee: task.assignee.clone(),
            description: task.description.clone(),
            deadline: task.deadline.clone(),
            priority: task.priority,
            completed: task.completed,
            created_at: task.created_at.clone(),
        }
    }
}

impl TaskInfo {
    fn render_human(&self) {
        let headline = format!("{}: {}", self.assignee, self.description);
        if self.completed {
            println!("  {} {}  {}", priority_badge(self.priority), self.id, headline.dimmed());
            println!("          due {} (completed)", self.deadline);
        } else {
            println!("  {} {}  {}", priority_badge(self.priority), self.id, headline);
            println!("          due {}", self.deadline);
        }
    }
}

/// Result of parsing a transcript
#[derive(Debug, Serialize)]
pub struct ParseResult {
    /// Number of sentences examined
    pub sentences: usize,
    /// Number of tasks found
    pub found: usize,
    /// The tasks, in sentence order
    pub tasks: Vec<ExplainedTask>,
    /// Tasks stored on the board by this parse (board sessions only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added: Option<Vec<TaskInfo>>,
    /// Show the matching pattern and sentence for each task
    #[serde(skip)]
    pub explain: bool,
}

impl ParseResult {
    /// Wrap a parse outcome for rendering
    #[must_use]
    pub fn new(outcome: ParseOutcome, explain: bool) -> Self {
        Self {
            sentences: outcome.sentences,
            found: outcome.tasks.len(),
            tasks: outcome.tasks,
            added: None,
            explain,
        }
    }

    /// Attach the board tasks created from this parse
    #[must_use]
    pub fn with_added<'a>(mut self, tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        self.added = Some(tasks.into_iter().map(TaskInfo::from).collect());
        self
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.sentences == 0 {
            println!("No transcript provided.");
            println!("Paste a meeting transcript to extract tasks.");
            return;
        }

        if self.tasks.is_empty() {
            println!("No tasks found.");
            println!("Could not extract any tasks from the transcript. Try a different format.");
            return;
        }

        println!("Found {} task(s) in {} sentence(s):\n", self.found, self.sentences);
        for (n, explained) in self.tasks.iter().enumerate() {
            let task = &explained.task;
            println!(
                "  {}. {} {}: {}",
                n + 1,
                priority_badge(task.priority),
                task.assignee,
                task.description
            );
            println!("       due {}", task.deadline);
            if self.explain {
                println!("       pattern {} <- \"{}\"", explained.pattern, explained.sentence);
            }
        }

        if let Some(added) = self.added.as_ref().filter(|a| !a.is_empty()) {
            let ids: Vec<_> = added.iter().map(|t| t.id.as_str()).collect();
            println!("\nAdded to board: {}", ids.join(", "));
        }
    }

    fn render_json(&self) {
        if self.explain {
            println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
        } else {
            let tasks: Vec<_> = self.tasks.iter().map(|t| &t.task).collect();
            let mut body = serde_json::json!({
                "sentences": self.sentences,
                "found": self.found,
                "tasks": tasks,
            });
            if let Some(added) = &self.added {
                body["added"] = serde_json::to_value(added).unwrap_or_default();
            }
            println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
        }
    }
}

/// A list of board tasks
#[derive(Debug, Serialize)]
pub struct TaskListResult {
    /// Heading for human output
    #[serde(skip)]
    pub title: String,
    /// Number of tasks listed
    pub total: usize,
    /// The tasks
    pub tasks: Vec<TaskInfo>,
}

impl TaskListResult {
    /// Build a list from store tasks
    #[must_use]
    pub fn new<'a>(title: &str, tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let tasks: Vec<TaskInfo> = tasks.into_iter().map(TaskInfo::from).collect();
        Self {
            title: title.to_string(),
            total: tasks.len(),
            tasks,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("{} ({})", self.title, self.total);
        if self.tasks.is_empty() {
            println!("  (none)");
        }
        for task in &self.tasks {
            task.render_human();
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// The whole board: counts plus active and completed columns
#[derive(Debug, Serialize)]
pub struct BoardResult {
    /// Task counts
    pub stats: BoardStats,
    /// Tasks still to do
    pub active: Vec<TaskInfo>,
    /// Tasks already done
    pub completed: Vec<TaskInfo>,
}

impl BoardResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    fn render_human(&self) {
        if self.stats.total == 0 {
            println!("No tasks on the board.");
            return;
        }

        println!("Active Tasks ({})", self.active.len());
        for task in &self.active {
            task.render_human();
        }
        if !self.completed.is_empty() {
            println!("\nCompleted Tasks ({})", self.completed.len());
            for task in &self.completed {
                task.render_human();
            }
        }
    }
}

/// Board statistics
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatsResult {
    /// Task counts
    #[serde(flatten)]
    pub stats: BoardStats,
}

impl StatsResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Total Tasks:  {}", self.stats.total);
                println!("Active Tasks: {}", self.stats.active);
                println!("Completed:    {}", self.stats.completed);
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Result of a change to a single task
#[derive(Debug, Serialize)]
pub struct TaskChangeResult {
    /// What happened ("added", "completed", "reopened", "deleted")
    pub action: &'static str,
    /// The task after the change
    pub task: TaskInfo,
}

impl TaskChangeResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Task {}: {}", self.action, self.task.id);
                self.task.render_human();
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
