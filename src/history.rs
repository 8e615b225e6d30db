//! Conversation persistence.
//!
//! Saves a conversation history as a timestamped JSON file and loads it
//! back. Loading is forgiving: any failure (missing file, bad JSON) yields
//! an empty history rather than an error.

use crate::error::Result;
use crate::llm::ChatMessage;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Save `messages` to `<user-id_>YYYYMMDD_HHMMSS.json` under `dir`, creating
/// the directory as needed. Returns the path written.
pub fn save_conversation(
    dir: &Path,
    messages: &[ChatMessage],
    user_id: Option<&str>,
) -> Result<PathBuf> {
    save_conversation_at(dir, messages, user_id, Utc::now())
}

/// Like [`save_conversation`] with an explicit timestamp
pub fn save_conversation_at(
    dir: &Path,
    messages: &[ChatMessage],
    user_id: Option<&str>,
    now: DateTime<Utc>,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let user_prefix = user_id.map(|id| format!("{}_", id)).unwrap_or_default();
    let path = dir.join(format!("{}{}.json", user_prefix, now.format("%Y%m%d_%H%M%S")));

    fs::write(&path, serde_json::to_string_pretty(messages)?)?;
    Ok(path)
}

/// Load a previously saved conversation, or an empty history on any failure
pub fn load_conversation(path: &Path) -> Vec<ChatMessage> {
    match try_load(path) {
        Ok(messages) => messages,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Error loading conversation");
            Vec::new()
        }
    }
}

fn try_load(path: &Path) -> Result<Vec<ChatMessage>> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
