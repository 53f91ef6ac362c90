//! Priority classification from urgency keywords

use crate::models::Priority;

/// Keywords that mark a sentence as high priority
pub const HIGH_PRIORITY_CUES: &[&str] =
    &["urgent", "asap", "immediately", "critical", "priority 1", "p1"];

/// Keywords that mark a sentence as medium priority
pub const MEDIUM_PRIORITY_CUES: &[&str] = &["important", "soon", "priority 2", "p2"];

/// Classify a sentence by the urgency cues it contains
///
/// Matching is a case-insensitive substring search. High-tier cues win over
/// medium-tier cues; sentences with neither are `P3`.
#[must_use]
pub fn classify_priority(sentence: &str) -> Priority {
    let lower = sentence.to_lowercase();

    if HIGH_PRIORITY_CUES.iter().any(|cue| lower.contains(cue)) {
        Priority::P1
    } else if MEDIUM_PRIORITY_CUES.iter().any(|cue| lower.contains(cue)) {
        Priority::P2
    } else {
        Priority::P3
    }
}
