//! Command implementations

mod board;
mod config_cmd;
mod parse;

use std::io::Read;
use std::path::Path;

use anyhow::Context;

pub use board::board;
pub use config_cmd::config_cmd;
pub use parse::parse;

/// Read a transcript from a file, or from stdin for `-` or no file
fn read_transcript(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read transcript {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text).context("failed to read stdin")?;
            Ok(text)
        },
    }
}
