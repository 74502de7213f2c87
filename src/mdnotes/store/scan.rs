//! Directory scanning.
//!
//! Hidden entries (names starting with [`HIDDEN_MARKER`]) are pruned, so
//! nothing below a hidden directory is ever visited. Only components below the
//! root are checked: a root that itself lives under a hidden directory is
//! scanned normally.
//!
//! Symbolic links are followed, so a linked note or folder is listed like a
//! regular one. A link that loops back to an ancestor is reported by walkdir as
//! an error and skipped.

use crate::error::Result;
use crate::model::HIDDEN_MARKER;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

fn is_hidden_name(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with(HIDDEN_MARKER)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && is_hidden_name(entry.file_name())
}

/// Immediate, non-hidden child directories of `root`, sorted by name.
pub fn scan_folders(root: &Path) -> Result<Vec<PathBuf>> {
    let mut folders = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if entry.path().is_dir() && !is_hidden_name(&entry.file_name()) {
            folders.push(entry.path());
        }
    }
    folders.sort();
    Ok(folders)
}

/// Recursively collects non-hidden files under `root` whose name ends with one
/// of `extensions`.
pub fn scan_files(root: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let name = entry.file_name().to_string_lossy();
            extensions.iter().any(|ext| name.ends_with(ext))
        })
        .map(DirEntry::into_path)
        .collect()
}
