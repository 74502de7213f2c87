use crate::error::{NotesError, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;

pub const DEFAULT_EDITOR: &str = "vim";

/// Initial buffer for a new note: a single heading line.
pub fn heading_seed(title: &str) -> String {
    format!("# {}\n\n", title)
}

/// Picks the editor command: the configured one, then $EDITOR, then $VISUAL,
/// then [`DEFAULT_EDITOR`].
pub fn get_editor(preferred: Option<&str>) -> String {
    if let Some(editor) = preferred.filter(|e| !e.trim().is_empty()) {
        return editor.to_string();
    }

    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.trim().is_empty() {
                return editor;
            }
        }
    }

    DEFAULT_EDITOR.to_string()
}

/// Opens a file in `editor` and waits for it to close.
/// Returns the contents of the file after editing.
///
/// `editor` may carry arguments (`code --wait`); they are passed before the
/// file path.
pub fn open_in_editor<P: AsRef<Path>>(editor: &str, file_path: P) -> Result<String> {
    let path = file_path.as_ref();
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| NotesError::Editor("Editor command is empty".to_string()))?;

    tracing::debug!("Launching editor '{}' on {}", editor, path.display());
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| NotesError::Editor(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(NotesError::Editor(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    Ok(fs::read_to_string(path)?)
}

/// Lets the user edit `initial` in a temporary file with the given extension
/// and returns the result. The temporary file is removed afterwards.
pub fn edit_text(initial: &str, file_extension: &str, editor: &str) -> Result<String> {
    let mut file = tempfile::Builder::new()
        .prefix("mdnotes_")
        .suffix(file_extension)
        .tempfile()?;
    file.write_all(initial.as_bytes())?;
    let temp_path = file.into_temp_path();

    let edited = open_in_editor(editor, &temp_path)?;
    temp_path.close()?;
    Ok(edited)
}
