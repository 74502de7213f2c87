use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::fs::NoteStore;

use super::helpers::resolve_note_path;

/// Deletes a note. The listings are refreshed either way.
pub fn run(store: &mut NoteStore, note_path: &str) -> Result<CmdResult> {
    let path = resolve_note_path(store, note_path);
    let outcome = store.delete_note(&path);

    let mut result = CmdResult::default();
    if outcome.success {
        result.add_message(CmdMessage::success(format!(
            "Note deleted: {}",
            path.display()
        )));
    } else {
        result.add_message(CmdMessage::error(
            outcome
                .message
                .unwrap_or_else(|| "Failed to delete note".to_string()),
        ));
    }
    Ok(result.with_note_path(path))
}
