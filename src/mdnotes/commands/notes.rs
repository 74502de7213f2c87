use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::fs::NoteStore;

/// Metadata for every note, newest first.
pub fn run(store: &mut NoteStore, include_content: bool) -> Result<CmdResult> {
    let notes = store.all_notes_metadata(include_content);
    Ok(CmdResult::default().with_notes(notes))
}
