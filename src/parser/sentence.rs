//! Sentence splitting

/// Characters that end a sentence. They never appear in a split sentence.
pub const TERMINATORS: [char; 3] = ['.', '!', ';'];

/// Split transcript text into trimmed, non-empty sentences, in order
///
/// # Examples
///
/// ```
/// use taskscribe::parser::split_sentences;
///
/// let sentences = split_sentences("Aman take notes today.  ; Thanks!");
/// assert_eq!(sentences, vec!["Aman take notes today", "Thanks"]);
/// ```
#[must_use]
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(TERMINATORS).map(str::trim).filter(|s| !s.is_empty()).collect()
}
