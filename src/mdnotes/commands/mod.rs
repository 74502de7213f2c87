use crate::config::NotesConfig;
use crate::model::{NoteMetadata, RefreshCounts};
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod notes;
pub mod read;
pub mod refresh;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Listing sections produced by `list`. A section is `None` when it was not
/// requested.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Listing {
    /// Folder names
    pub folders: Option<Vec<String>>,
    /// Note paths relative to the root
    pub notes: Option<Vec<PathBuf>>,
    /// Image paths relative to the root
    pub images: Option<Vec<PathBuf>>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listing: Option<Listing>,
    pub notes: Vec<NoteMetadata>,
    pub content: Option<String>,
    pub note_path: Option<PathBuf>,
    pub counts: Option<RefreshCounts>,
    pub config: Option<NotesConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listing(mut self, listing: Listing) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn with_notes(mut self, notes: Vec<NoteMetadata>) -> Self {
        self.notes = notes;
        self
    }

    pub fn with_content(mut self, content: String) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_note_path(mut self, path: PathBuf) -> Self {
        self.note_path = Some(path);
        self
    }

    pub fn with_counts(mut self, counts: RefreshCounts) -> Self {
        self.counts = Some(counts);
        self
    }

    pub fn with_config(mut self, config: NotesConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True if any message is an error.
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.level == MessageLevel::Error)
    }
}
