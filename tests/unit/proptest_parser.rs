//! Property-based tests for the transcript parser
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use taskscribe::models::Priority;
use taskscribe::parser::{
    HIGH_PRIORITY_CUES, MEDIUM_PRIORITY_CUES, classify_priority, extract_match, parse_transcript,
    split_sentences,
};

proptest! {
    /// The parser yields at most one task per sentence
    #[test]
    fn output_bounded_by_sentences(text in "\\PC{0,200}") {
        prop_assert!(parse_transcript(&text).len() <= split_sentences(&text).len());
    }

    /// Arbitrary text never panics and every task has non-empty trimmed fields
    #[test]
    fn tasks_are_well_formed(text in "[A-Za-z ,:;.!-]{0,160}") {
        for task in parse_transcript(&text) {
            prop_assert!(!task.assignee.is_empty());
            prop_assert!(!task.description.is_empty());
            prop_assert!(!task.deadline.is_empty());
            prop_assert_eq!(task.assignee.trim(), task.assignee.as_str());
            prop_assert_eq!(task.description.trim(), task.description.as_str());
            prop_assert_eq!(task.deadline.trim(), task.deadline.as_str());
        }
    }

    /// A trimmed sentence without terminators splits into exactly itself
    #[test]
    fn split_single_sentence_is_identity(sentence in "[A-Za-z0-9][A-Za-z0-9 ,:?-]{0,60}[A-Za-z0-9]") {
        prop_assert_eq!(split_sentences(&sentence), vec![sentence.as_str()]);
    }

    /// Sentences never contain terminators or surrounding whitespace
    #[test]
    fn split_sentences_are_clean(text in "\\PC{0,200}") {
        for sentence in split_sentences(&text) {
            prop_assert!(!sentence.is_empty());
            prop_assert_eq!(sentence.trim(), sentence);
            prop_assert!(!sentence.contains(['.', '!', ';']));
        }
    }

    /// Classification is deterministic
    #[test]
    fn classify_is_deterministic(sentence in "\\PC{0,120}") {
        prop_assert_eq!(classify_priority(&sentence), classify_priority(&sentence));
    }

    /// A high-tier cue always wins over any medium-tier cue
    #[test]
    fn high_tier_dominates(
        prefix in "[a-z ]{0,20}",
        high in proptest::sample::select(HIGH_PRIORITY_CUES),
        medium in proptest::sample::select(MEDIUM_PRIORITY_CUES),
        high_first in any::<bool>()
    ) {
        let sentence = if high_first {
            format!("{prefix} {high} and {medium}")
        } else {
            format!("{prefix} {medium} and {high}")
        };
        prop_assert_eq!(classify_priority(&sentence), Priority::P1);
    }

    /// Any capitalised name in the "you ... by" shape becomes the assignee
    #[test]
    fn you_by_captures_name(
        name in "[A-Z][a-z]{2,8}",
        thing in "[a-z]{3,10}( [a-z]{3,10}){0,2}",
        when in "(Monday|Friday|noon|10pm tomorrow)"
    ) {
        prop_assume!(!thing.split(' ').any(|w| ["by", "until", "before", "due"].contains(&w)));
        let sentence = format!("{name} you take the {thing} by {when}");
        let m = extract_match(&sentence).expect("sentence should match");
        prop_assert_eq!(m.pattern, "you-please-by");
        prop_assert_eq!(m.assignee, name);
        prop_assert_eq!(m.description, format!("take the {thing}"));
        prop_assert_eq!(m.deadline, when);
    }
}
