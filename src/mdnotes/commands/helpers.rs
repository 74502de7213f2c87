use crate::store::fs::NoteStore;
use std::path::{Path, PathBuf};

/// Resolves a user-supplied note path against the store root. Absolute paths
/// are used as given.
pub fn resolve_note_path(store: &NoteStore, note_path: &str) -> PathBuf {
    store.root().join(note_path)
}

/// Root-relative form of every path, for display.
pub fn relative_paths(store: &NoteStore, paths: &[PathBuf]) -> Vec<PathBuf> {
    paths
        .iter()
        .map(|p| store.relative(p).to_path_buf())
        .collect()
}

pub fn folder_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    pub fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// A small notes tree: two folders, three notes, one image, one hidden dir.
    pub fn notes_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "inbox.md", "# Inbox\n\n#todo call back");
        write(dir.path(), "work/plan.md", "# Plan\n\nShip it #work");
        write(dir.path(), "work/deep/log.md", "no heading here");
        write(dir.path(), "life/cat.png", "png");
        write(dir.path(), ".git/notes.md", "hidden");
        dir
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::notes_tree;
    use super::*;

    #[test]
    fn resolves_relative_and_absolute() {
        let dir = notes_tree();
        let store = NoteStore::open(dir.path()).unwrap();

        assert_eq!(
            resolve_note_path(&store, "work/plan.md"),
            dir.path().join("work/plan.md")
        );
        let abs = dir.path().join("inbox.md");
        assert_eq!(resolve_note_path(&store, abs.to_str().unwrap()), abs);
    }

    #[test]
    fn folder_name_of_path() {
        assert_eq!(folder_name(Path::new("/notes/work")), "work");
    }
}
