//! Transcript parsing
//!
//! Turns free-form meeting transcript text into task records:
//! - Sentence splitting (`.`, `!` and `;` end a sentence)
//! - Assignment extraction (ordered patterns, first match wins)
//! - Priority classification (urgency keywords)
//!
//! # Examples
//!
//! ```
//! use taskscribe::models::Priority;
//! use taskscribe::parser::parse_transcript;
//!
//! let tasks = parse_transcript("Aman you take the landing page by 10pm tomorrow.");
//! assert_eq!(tasks.len(), 1);
//! assert_eq!(tasks[0].assignee, "Aman");
//! assert_eq!(tasks[0].deadline, "10pm tomorrow");
//! assert_eq!(tasks[0].priority, Priority::P3);
//! ```

mod extract;
mod priority;
mod sentence;

use serde::Serialize;

pub use extract::{Extraction, ExtractionPattern, extract_match, extract_task, patterns};
pub use priority::{HIGH_PRIORITY_CUES, MEDIUM_PRIORITY_CUES, classify_priority};
pub use sentence::{TERMINATORS, split_sentences};

use crate::models::ParsedTask;

/// A parsed task together with the pattern that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplainedTask {
    /// The extracted task
    #[serde(flatten)]
    pub task: ParsedTask,
    /// Name of the extraction pattern that matched
    pub pattern: &'static str,
    /// The sentence the task was read from
    pub sentence: String,
}

/// Result of a detailed parse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    /// Number of sentences examined
    pub sentences: usize,
    /// Tasks found, in sentence order
    pub tasks: Vec<ExplainedTask>,
}

impl ParseOutcome {
    /// Drop the diagnostics and keep only the task records
    #[must_use]
    pub fn into_tasks(self) -> Vec<ParsedTask> {
        self.tasks.into_iter().map(|t| t.task).collect()
    }
}

/// Stateless transcript parser
///
/// Holds no state between calls; patterns are compiled once per process and
/// shared, so separate transcripts can be parsed from separate threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct TranscriptParser;

impl TranscriptParser {
    /// Create a parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parse a transcript into task records, in sentence order
    #[must_use]
    pub fn parse(&self, transcript: &str) -> Vec<ParsedTask> {
        self.parse_detailed(transcript).into_tasks()
    }

    /// Parse a transcript, keeping the matched pattern and source sentence
    #[must_use]
    pub fn parse_detailed(&self, transcript: &str) -> ParseOutcome {
        let sentences = split_sentences(transcript);
        let mut tasks = Vec::new();

        for sentence in &sentences {
            log::debug!("Parsing sentence: {sentence}");
            match extract_match(sentence) {
                Some(extraction) => {
                    log::debug!(
                        "Match found ({}): assignee={:?} description={:?} deadline={:?}",
                        extraction.pattern,
                        extraction.assignee,
                        extraction.description,
                        extraction.deadline
                    );
                    let pattern = extraction.pattern;
                    tasks.push(ExplainedTask {
                        task: extraction.into_task(classify_priority(sentence)),
                        pattern,
                        sentence: (*sentence).to_string(),
                    });
                },
                None => log::debug!("No match found for sentence"),
            }
        }

        ParseOutcome {
            sentences: sentences.len(),
            tasks,
        }
    }
}

/// Parse a transcript into task records, in sentence order
///
/// Never fails: empty input, or input with no assignments, gives an empty list.
#[must_use]
pub fn parse_transcript(transcript: &str) -> Vec<ParsedTask> {
    TranscriptParser::new().parse(transcript)
}
