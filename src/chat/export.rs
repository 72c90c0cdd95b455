//! Plain-text export of a chat session

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Local};

use super::history::SessionHistory;

/// Render the full history chronologically as alternating
/// "You:"/"Bot:" lines with a blank line between turns
pub fn format_transcript(history: &SessionHistory) -> String {
    history
        .chronological()
        .map(|turn| format!("You: {}\nBot: {}", turn.question, turn.answer))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Export filename stamped with the given local time,
/// e.g. `chat_20260825_143015.txt`
pub fn export_filename(now: DateTime<Local>) -> String {
    format!("chat_{}.txt", now.format("%Y%m%d_%H%M%S"))
}

/// Write the transcript into `dir` and return the path to the file
pub fn write_transcript(history: &SessionHistory, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(export_filename(Local::now()));
    fs::write(&path, format_transcript(history))?;
    Ok(path)
}
