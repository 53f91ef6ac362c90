//! Interactive board session
//!
//! A line-oriented interpreter over an in-memory board. Each input line is
//! one command:
//!
//! ```text
//! parse <transcript text>
//! add <assignee> | <description> | <deadline> [| <priority>]
//! toggle <id>
//! delete <id>
//! list [active|completed|all]
//! stats
//! help
//! quit
//! ```
//!
//! # Examples
//!
//! ```
//! use taskscribe::session::{Reply, Session};
//! use taskscribe::storage::TaskStore;
//!
//! let mut session = Session::new("TSK");
//! session.handle_line("parse Aman you take the landing page by 10pm tomorrow.").unwrap();
//! session.handle_line("toggle TSK-1").unwrap();
//! assert_eq!(session.store().list_by(true).len(), 1);
//! ```

use std::str::FromStr;

use thiserror::Error;

use crate::models::{Priority, Task};
use crate::output::{
    BoardResult, OperationResult, OutputMode, ParseResult, StatsResult, TaskChangeResult,
    TaskInfo, TaskListResult,
};
use crate::parser::{ParseOutcome, TranscriptParser};
use crate::storage::{BoardStats, MemoryTaskStore, NewTask, StoreError, TaskStore};

/// Help text listing the session commands
pub const HELP: &str = "\
Commands:
  parse <transcript text>                               extract tasks and add them to the board
  add <assignee> | <description> | <deadline> [| P1-P3]  add a task by hand
  toggle <id>                                           mark a task complete (or active again)
  delete <id>                                           remove a task
  list [active|completed|all]                           show the board
  stats                                                 show task counts
  help                                                  show this help
  quit                                                  leave the session";

/// Errors from interpreting a session line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The first word is not a known command
    #[error("unknown command: {0} (type 'help' for commands)")]
    UnknownCommand(String),

    /// A required argument was not given
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    /// The priority field could not be parsed
    #[error("{0}")]
    InvalidPriority(String),

    /// The board rejected the operation
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Which tasks `list` shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFilter {
    /// Active tasks, then completed tasks, with counts
    #[default]
    Board,
    /// Only tasks not yet completed
    Active,
    /// Only completed tasks
    Completed,
    /// Every task in insertion order
    All,
}

impl FromStr for ListFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "board" => Ok(Self::Board),
            "active" | "open" | "todo" => Ok(Self::Active),
            "completed" | "complete" | "done" => Ok(Self::Completed),
            "all" => Ok(Self::All),
            _ => Err(format!("Invalid filter: {s}. Use: active, completed, all")),
        }
    }
}

/// One parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Parse transcript text and add every task found
    Parse(String),
    /// Add a manual task
    Add(NewTask),
    /// Toggle completion of a task
    Toggle(String),
    /// Delete a task
    Delete(String),
    /// Show tasks
    List(ListFilter),
    /// Show counts
    Stats,
    /// Show command help
    Help,
    /// End the session
    Quit,
}

impl FromStr for SessionCommand {
    type Err = SessionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match word.to_lowercase().as_str() {
            "parse" => Ok(Self::Parse(rest.to_string())),
            "add" => parse_add(rest).map(Self::Add),
            "toggle" | "done" => required_id(rest).map(Self::Toggle),
            "delete" | "rm" => required_id(rest).map(Self::Delete),
            "list" | "ls" => rest
                .parse()
                .map(Self::List)
                .map_err(|_| SessionError::UnknownCommand(format!("list {rest}"))),
            "stats" => Ok(Self::Stats),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(SessionError::UnknownCommand(word.to_string())),
        }
    }
}

fn required_id(rest: &str) -> Result<String, SessionError> {
    rest.split_whitespace()
        .next()
        .map(String::from)
        .ok_or(SessionError::MissingArgument("id"))
}

fn parse_add(rest: &str) -> Result<NewTask, SessionError> {
    let mut fields = rest.split('|').map(str::trim);
    let assignee = fields.next().filter(|f| !f.is_empty());
    let assignee = assignee.ok_or(SessionError::MissingArgument("assignee"))?;
    let description = fields.next().ok_or(SessionError::MissingArgument("description"))?;
    let deadline = fields.next().ok_or(SessionError::MissingArgument("deadline"))?;
    let priority = match fields.next() {
        Some(p) if !p.is_empty() => p.parse::<Priority>().map_err(SessionError::InvalidPriority)?,
        _ => Priority::default(),
    };

    Ok(NewTask {
        assignee: assignee.to_string(),
        description: description.to_string(),
        deadline: deadline.to_string(),
        priority,
    })
}

/// What a command produced
#[derive(Debug, Clone)]
pub enum Reply {
    /// Transcript parsed; `added` are the tasks accepted onto the board
    Parsed {
        /// Parser result with diagnostics
        outcome: ParseOutcome,
        /// Tasks accepted into the store
        added: Vec<Task>,
    },
    /// A task changed
    Changed {
        /// "added", "completed", "reopened" or "deleted"
        action: &'static str,
        /// The task after the change
        task: Task,
    },
    /// A listing
    Listed {
        /// Which tasks were requested
        filter: ListFilter,
        /// Tasks (for `Board`: active first, then completed)
        tasks: Vec<Task>,
        /// Counts at the time of listing
        stats: BoardStats,
    },
    /// Counts
    Stats(BoardStats),
    /// Help text
    Help,
    /// Session ended
    Quit,
}

impl Reply {
    /// Render the reply based on output mode
    pub fn render(&self, mode: OutputMode) {
        match self {
            Self::Parsed { outcome, added } => {
                ParseResult::new(outcome.clone(), false).with_added(added).render(mode);
            },
            Self::Changed { action, task } => TaskChangeResult {
                action: *action,
                task: TaskInfo::from(task),
            }
            .render(mode),
            Self::Listed {
                filter,
                tasks,
                stats,
            } => match filter {
                ListFilter::Board => BoardResult {
                    stats: *stats,
                    active: tasks.iter().filter(|t| !t.completed).map(TaskInfo::from).collect(),
                    completed: tasks.iter().filter(|t| t.completed).map(TaskInfo::from).collect(),
                }
                .render(mode),
                ListFilter::Active => TaskListResult::new("Active Tasks", tasks).render(mode),
                ListFilter::Completed => TaskListResult::new("Completed Tasks", tasks).render(mode),
                ListFilter::All => TaskListResult::new("All Tasks", tasks).render(mode),
            },
            Self::Stats(stats) => StatsResult { stats: *stats }.render(mode),
            Self::Help => OperationResult {
                success: true,
                message: HELP.to_string(),
            }
            .render(mode),
            Self::Quit => OperationResult {
                success: true,
                message: "Bye.".to_string(),
            }
            .render(mode),
        }
    }
}

/// A board session: a store plus a transcript parser
#[derive(Debug, Clone, Default)]
pub struct Session {
    store: MemoryTaskStore,
    parser: TranscriptParser,
}

impl Session {
    /// Start a session with an empty board
    #[must_use]
    pub fn new(id_prefix: &str) -> Self {
        Self {
            store: MemoryTaskStore::with_prefix(id_prefix),
            parser: TranscriptParser::new(),
        }
    }

    /// The board
    #[must_use]
    pub const fn store(&self) -> &MemoryTaskStore {
        &self.store
    }

    /// Parse a transcript and add every task found to the board
    pub fn load_transcript(&mut self, transcript: &str) -> Reply {
        let outcome = self.parser.parse_detailed(transcript);
        let added = self.store.add_parsed(outcome.clone().into_tasks());
        Reply::Parsed { outcome, added }
    }

    /// Interpret one input line; blank lines and `#` comments give `None`
    pub fn handle_line(&mut self, line: &str) -> Result<Option<Reply>, SessionError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let command: SessionCommand = line.parse()?;
        self.execute(command).map(Some)
    }

    /// Run a command against the board
    pub fn execute(&mut self, command: SessionCommand) -> Result<Reply, SessionError> {
        let reply = match command {
            SessionCommand::Parse(text) => self.load_transcript(&text),
            SessionCommand::Add(task) => Reply::Changed {
                action: "added",
                task: self.store.add(task)?,
            },
            SessionCommand::Toggle(id) => {
                let task = self.store.toggle_complete(&id)?.clone();
                Reply::Changed {
                    action: if task.completed { "completed" } else { "reopened" },
                    task,
                }
            },
            SessionCommand::Delete(id) => Reply::Changed {
                action: "deleted",
                task: self.store.delete(&id)?,
            },
            SessionCommand::List(filter) => {
                let tasks = match filter {
                    ListFilter::Board => {
                        let mut tasks: Vec<Task> =
                            self.store.list_by(false).into_iter().cloned().collect();
                        tasks.extend(self.store.list_by(true).into_iter().cloned());
                        tasks
                    },
                    ListFilter::Active => self.store.list_by(false).into_iter().cloned().collect(),
                    ListFilter::Completed => {
                        self.store.list_by(true).into_iter().cloned().collect()
                    },
                    ListFilter::All => self.store.all().to_vec(),
                };
                Reply::Listed {
                    filter,
                    tasks,
                    stats: self.store.stats(),
                }
            },
            SessionCommand::Stats => Reply::Stats(self.store.stats()),
            SessionCommand::Help => Reply::Help,
            SessionCommand::Quit => Reply::Quit,
        };
        Ok(reply)
    }
}
