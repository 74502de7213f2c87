use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Extensions recognized as images, matched against the end of the file name.
pub const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp"];

pub const DEFAULT_NOTE_EXT: &str = ".md";

/// Names starting with this marker are skipped by every scan.
pub const HIDDEN_MARKER: char = '.';

/// Derived description of a single note. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteMetadata {
    pub path: PathBuf,
    pub relative_path: PathBuf,
    pub title: String,
    pub tags: BTreeSet<String>,
    pub last_modified: DateTime<Utc>,
    pub preview: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub content: Option<String>,
}

/// Number of entries found by a full refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshCounts {
    pub folders: usize,
    pub notes: usize,
    pub images: usize,
}

/// Result of a write that never aborts the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub success: bool,
    pub message: Option<String>,
}

impl WriteOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// Ensures an extension starts with a dot (`md` -> `.md`).
pub fn normalize_ext(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}
