use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::fs::NoteStore;

use super::helpers::resolve_note_path;

/// Overwrites an existing note. Missing notes and write failures are reported
/// as messages.
pub fn run(store: &NoteStore, note_path: &str, content: &str) -> Result<CmdResult> {
    let path = resolve_note_path(store, note_path);
    let mut result = CmdResult::default();

    if !path.is_file() {
        result.add_message(CmdMessage::error(format!(
            "Note not found: {}",
            path.display()
        )));
        return Ok(result);
    }

    let outcome = store.update_note(&path, content);
    if outcome.success {
        result.add_message(CmdMessage::success(format!(
            "Note updated: {}",
            path.display()
        )));
    } else {
        result.add_message(CmdMessage::error(
            outcome
                .message
                .unwrap_or_else(|| "Failed to update note".to_string()),
        ));
    }
    Ok(result.with_note_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::test_support::notes_tree;
    use crate::commands::MessageLevel;

    #[test]
    fn updates_in_place() {
        let dir = notes_tree();
        let store = NoteStore::open(dir.path()).unwrap();

        let result = run(&store, "inbox.md", "# Inbox\n\nempty now").unwrap();
        assert!(!result.has_errors());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("inbox.md")).unwrap(),
            "# Inbox\n\nempty now"
        );
    }

    #[test]
    fn missing_note_is_not_created() {
        let dir = notes_tree();
        let store = NoteStore::open(dir.path()).unwrap();

        let result = run(&store, "ghost.md", "boo").unwrap();
        assert!(result.has_errors());
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("ghost.md").exists());
    }
}
