use crate::commands::{CmdMessage, CmdResult};
use crate::editor::heading_seed;
use crate::error::{NotesError, Result};
use crate::store::fs::NoteStore;

/// Turns literal `\n` sequences typed on a command line into newlines.
pub fn unescape_newlines(content: &str) -> String {
    content.replace("\\n", "\n")
}

/// Saves a new note. Without content (or with empty content), the note gets a
/// single heading line.
pub fn run(
    store: &mut NoteStore,
    title: &str,
    content: Option<String>,
    folder: Option<&str>,
) -> Result<CmdResult> {
    if title.trim().is_empty() {
        return Err(NotesError::Api("Title cannot be empty".into()));
    }

    let mut result = CmdResult::default();
    let content = match content.filter(|c| !c.is_empty()) {
        Some(content) => content,
        None => {
            result.add_message(CmdMessage::info(
                "Tip: use '--editor' to write the note in your editor",
            ));
            heading_seed(title)
        }
    };

    let path = store.save_note(title, &content, folder)?;
    result.messages.insert(
        0,
        CmdMessage::success(format!("Note saved: {}", path.display())),
    );
    Ok(result.with_note_path(path))
}
