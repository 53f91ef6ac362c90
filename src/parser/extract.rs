//! Assignment extraction
//!
//! Each sentence is tried against an ordered list of assignment shapes
//! ("Aman you take X by Y", "Priya must fix X by Y", ...). The first shape
//! that matches decides the extraction; later shapes are never consulted,
//! even when one of them would read the sentence better.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::priority::classify_priority;
use crate::models::ParsedTask;

/// Closed set of action verbs, longest alternatives first
const ACTION_VERBS: &str = r"follow\s+up\s+on|follow[\s-]?up|work\s+on|take|do|handle|complete|finish|review|prepare|create|build|design|develop|write|update|fix|check|test|implement|research|analyze|contact|call|email";

/// Words that introduce an explicit deadline phrase
const DEADLINE_CUES: &str = r"by|until|before|due";

/// Relative-time keywords that stand in for a deadline on their own
const RELATIVE_TIMES: &str = r"tonight|today|tomorrow|this\s+week|next\s+week|this\s+morning|this\s+afternoon|this\s+evening";

/// A structural rule for recognising one assignment phrasing
#[derive(Debug)]
pub struct ExtractionPattern {
    /// Short stable name, reported by `--explain` and debug logs
    pub name: &'static str,
    regex: Regex,
}

/// Raw captures from a successful extraction, before priority is assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Name of the pattern that matched
    pub pattern: &'static str,
    /// Single-token assignee
    pub assignee: String,
    /// Description, verb-prefixed when the pattern captures a verb
    pub description: String,
    /// Deadline phrase or relative-time keyword
    pub deadline: String,
}

impl Extraction {
    /// Attach a priority, producing the final task record
    #[must_use]
    pub fn into_task(self, priority: crate::models::Priority) -> ParsedTask {
        ParsedTask {
            assignee: self.assignee,
            description: self.description,
            deadline: self.deadline,
            priority,
        }
    }
}

impl ExtractionPattern {
    fn new(name: &'static str, pattern: &str) -> Self {
        let regex = Regex::new(&format!("(?i){pattern}"))
            .unwrap_or_else(|e| panic!("extraction pattern {name} must compile: {e}"));
        Self { name, regex }
    }

    /// Match this pattern against the sentence
    ///
    /// The leftmost match is the only candidate; a match with an empty
    /// field is rejected rather than searched past.
    #[must_use]
    pub fn apply(&self, sentence: &str) -> Option<Extraction> {
        let caps = self.regex.captures(sentence)?;
        self.accept(&caps)
    }

    fn accept(&self, caps: &Captures<'_>) -> Option<Extraction> {
        let assignee = caps.name("assignee")?.as_str().trim();
        if assignee.is_empty() {
            return None;
        }

        let rest = caps.name("description")?.as_str().trim();
        let deadline = caps.name("deadline")?.as_str().trim();
        if rest.is_empty() || deadline.is_empty() {
            return None;
        }

        let description = match caps.name("verb") {
            Some(verb) => {
                let verb = verb.as_str().split_whitespace().collect::<Vec<_>>().join(" ");
                format!("{verb} {rest}")
            },
            None => rest.to_string(),
        };

        Some(Extraction {
            pattern: self.name,
            assignee: assignee.to_string(),
            description,
            deadline: deadline.to_string(),
        })
    }
}

static PATTERNS: LazyLock<Vec<ExtractionPattern>> = LazyLock::new(|| {
    let by = format!(r"\s+(?P<description>.+?)\s+(?:{DEADLINE_CUES})\s+(?P<deadline>.+)");
    let relative = format!(r"\s+(?P<description>.+?)\s+(?P<deadline>{RELATIVE_TIMES})\b");

    vec![
        // "Aman you take the landing page by 10pm tomorrow"
        ExtractionPattern::new(
            "you-please-by",
            &format!(r"\b(?P<assignee>\w+)\s+(?:you\s+)?(?:please\s+)?(?P<verb>{ACTION_VERBS}){by}"),
        ),
        // "Shreya please review the marketing deck tonight"
        ExtractionPattern::new(
            "please-relative",
            &format!(r"\b(?P<assignee>\w+)\s+please\s+(?P<verb>{ACTION_VERBS}){relative}"),
        ),
        // "Rajeev, you handle the invoices by Friday"
        ExtractionPattern::new(
            "comma-you-by",
            &format!(r"\b(?P<assignee>\w+),?\s+you\s+(?P<verb>{ACTION_VERBS}){by}"),
        ),
        // "Maya is responsible for the budget by Monday"
        ExtractionPattern::new(
            "responsible-by",
            &format!(
                r"\b(?P<assignee>\w+)\s+(?:is\s+)?(?:responsible\s+for|assigned\s+to|tasked\s+with){by}"
            ),
        ),
        // "Dev - fix the build by noon"
        ExtractionPattern::new(
            "dash-by",
            &format!(r"\b(?P<assignee>\w+)\s*[-\x{{2013}}]\s*(?P<verb>{ACTION_VERBS}){by}"),
        ),
        // "Priya must fix the login bug by Friday"
        ExtractionPattern::new(
            "modal-by",
            &format!(
                r"\b(?P<assignee>\w+)\s+(?:needs?\s+to|should|must|has\s+to)\s+(?P<verb>{ACTION_VERBS}){by}"
            ),
        ),
        // "Leo update the roadmap this week"
        ExtractionPattern::new(
            "bare-relative",
            &format!(r"\b(?P<assignee>\w+)\s+(?P<verb>{ACTION_VERBS}){relative}"),
        ),
    ]
});

/// The extraction patterns, in the order they are tried
#[must_use]
pub fn patterns() -> &'static [ExtractionPattern] {
    &PATTERNS
}

/// Try every pattern in order and return the first extraction
///
/// `None` means the sentence is not a task assignment, which is the common
/// case in a transcript.
#[must_use]
pub fn extract_match(sentence: &str) -> Option<Extraction> {
    patterns().iter().find_map(|pattern| pattern.apply(sentence))
}

/// Extract a complete task (including priority) from one sentence
#[must_use]
pub fn extract_task(sentence: &str) -> Option<ParsedTask> {
    extract_match(sentence).map(|extraction| extraction.into_task(classify_priority(sentence)))
}
