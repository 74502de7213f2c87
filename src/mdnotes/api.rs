//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every operation, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no terminal I/O and no formatting. Those belong
//! in `commands/*.rs` and the CLI respectively.

use crate::commands;
use crate::config::NotesConfig;
use crate::error::Result;
use crate::store::fs::NoteStore;
use std::path::Path;

/// The main API facade for note operations over one notes directory.
pub struct NotesApi {
    store: NoteStore,
}

impl NotesApi {
    pub fn new(store: NoteStore) -> Self {
        Self { store }
    }

    /// Opens the notes directory at `root` with the configured note extension.
    pub fn open(root: &Path, config: &NotesConfig) -> Result<Self> {
        let store = NoteStore::open(root)?.with_note_ext(&config.note_ext);
        Ok(Self::new(store))
    }

    pub fn list(&mut self, list_type: ListType, refresh: bool) -> Result<CmdResult> {
        commands::list::run(&mut self.store, list_type, refresh)
    }

    pub fn read_note(&self, note_path: &str) -> Result<CmdResult> {
        commands::read::run(&self.store, note_path)
    }

    pub fn create_note(
        &mut self,
        title: &str,
        content: Option<String>,
        folder: Option<&str>,
    ) -> Result<CmdResult> {
        commands::create::run(&mut self.store, title, content, folder)
    }

    pub fn update_note(&self, note_path: &str, content: &str) -> Result<CmdResult> {
        commands::update::run(&self.store, note_path, content)
    }

    pub fn delete_note(&mut self, note_path: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, note_path)
    }

    pub fn refresh(&mut self) -> Result<CmdResult> {
        commands::refresh::run(&mut self.store)
    }

    pub fn notes_metadata(&mut self, include_content: bool) -> Result<CmdResult> {
        commands::notes::run(&mut self.store, include_content)
    }

    /// Configuration does not need a notes directory.
    pub fn config(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(config_dir, action)
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::ListType;
pub use commands::{CmdMessage, CmdResult, Listing, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::test_support::notes_tree;
    use crate::error::NotesError;
    use tempfile::TempDir;

    #[test]
    fn open_missing_root_fails() {
        let dir = TempDir::new().unwrap();
        let err = NotesApi::open(&dir.path().join("missing"), &NotesConfig::default())
            .err()
            .unwrap();
        assert!(matches!(err, NotesError::RootNotFound(_)));
    }

    #[test]
    fn open_uses_configured_extension() {
        let dir = notes_tree();
        let mut config = NotesConfig::default();
        config.set_note_ext("txt");

        let api = NotesApi::open(dir.path(), &config).unwrap();
        assert_eq!(api.store().note_ext(), ".txt");
    }

    #[test]
    fn dispatches_create_then_read() {
        let dir = TempDir::new().unwrap();
        let mut api = NotesApi::open(dir.path(), &NotesConfig::default()).unwrap();

        api.create_note("Hello", Some("# Hello\nBody".into()), None)
            .unwrap();
        let read = api.read_note("Hello.md").unwrap();
        assert_eq!(read.content.as_deref(), Some("# Hello\nBody"));

        let notes = api.notes_metadata(false).unwrap();
        assert_eq!(notes.notes[0].title, "Hello");
    }

    #[test]
    fn dispatches_refresh_and_delete() {
        let dir = notes_tree();
        let mut api = NotesApi::open(dir.path(), &NotesConfig::default()).unwrap();

        let before = api.refresh().unwrap().counts.unwrap();
        api.delete_note("inbox.md").unwrap();
        let after = api.refresh().unwrap().counts.unwrap();
        assert_eq!(after.notes, before.notes - 1);
    }
}
