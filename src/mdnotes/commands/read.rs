use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::fs::NoteStore;

use super::helpers::resolve_note_path;

/// Reads a note by its root-relative path. A missing note is reported as an
/// error message, not an error.
pub fn run(store: &NoteStore, note_path: &str) -> Result<CmdResult> {
    let path = resolve_note_path(store, note_path);
    if !path.is_file() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::error(format!(
            "Note not found: {}",
            path.display()
        )));
        return Ok(result);
    }

    let content = store.read_note(&path)?;
    Ok(CmdResult::default()
        .with_content(content)
        .with_note_path(path))
}
