//! Parse command - extract tasks from a transcript

use std::path::Path;

use taskscribe::output::{OutputMode, ParseResult};
use taskscribe::parser::TranscriptParser;

use super::read_transcript;

/// Extract tasks from a transcript file, stdin, or inline text
pub fn parse(
    file: Option<&Path>,
    text: Option<&str>,
    explain: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let transcript = match text {
        Some(text) => text.to_string(),
        None => read_transcript(file)?,
    };

    let outcome = TranscriptParser::new().parse_detailed(&transcript);
    log::debug!("{} task(s) from {} sentence(s)", outcome.tasks.len(), outcome.sentences);

    ParseResult::new(outcome, explain).render(mode);
    Ok(())
}
