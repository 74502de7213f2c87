use super::cache::ListingCache;
use super::decode::read_text;
use super::scan::{scan_files, scan_folders};
use crate::error::{NotesError, Result};
use crate::metadata;
use crate::model::{
    normalize_ext, NoteMetadata, RefreshCounts, WriteOutcome, DEFAULT_NOTE_EXT, IMAGE_EXTENSIONS,
};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// A directory of notes plus the cached listings of its contents.
pub struct NoteStore {
    root: PathBuf,
    note_ext: String,
    cache: ListingCache,
}

impl NoteStore {
    /// Opens a store over `root`, which must already exist.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.exists() {
            return Err(NotesError::RootNotFound(root));
        }
        Ok(Self {
            root,
            note_ext: DEFAULT_NOTE_EXT.to_string(),
            cache: ListingCache::new(),
        })
    }

    pub fn with_note_ext(mut self, ext: &str) -> Self {
        self.note_ext = normalize_ext(ext);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn note_ext(&self) -> &str {
        &self.note_ext
    }

    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        self.cache.last_refresh()
    }

    /// Path relative to the root, or the path unchanged if it lies elsewhere.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    pub fn list_folders(&mut self) -> Result<&[PathBuf]> {
        if self.cache.folders.is_none() {
            let folders = scan_folders(&self.root)?;
            tracing::debug!("Scanned {} folders", folders.len());
            self.cache.folders = Some(folders);
        }
        Ok(self.cache.folders.as_deref().unwrap_or_default())
    }

    /// Lists notes ending with `extension`. A populated cache is returned as is
    /// unless `force_refresh` is set, whatever extension it was scanned with.
    pub fn list_notes(&mut self, extension: &str, force_refresh: bool) -> &[PathBuf] {
        if self.cache.notes.is_none() || force_refresh {
            let notes = scan_files(&self.root, &[extension]);
            tracing::debug!("Scanned {} notes ({})", notes.len(), extension);
            self.cache.notes = Some(notes);
        }
        self.cache.notes.as_deref().unwrap_or_default()
    }

    /// Notes with the configured extension, from cache when available.
    pub fn notes(&mut self) -> &[PathBuf] {
        let ext = self.note_ext.clone();
        self.list_notes(&ext, false)
    }

    pub fn list_images(&mut self) -> &[PathBuf] {
        if self.cache.images.is_none() {
            let images = scan_files(&self.root, IMAGE_EXTENSIONS);
            tracing::debug!("Scanned {} images", images.len());
            self.cache.images = Some(images);
        }
        self.cache.images.as_deref().unwrap_or_default()
    }

    /// Drops every cached listing and scans all three categories again.
    pub fn refresh(&mut self) -> Result<RefreshCounts> {
        self.cache.invalidate();
        let folders = self.list_folders()?.len();
        let notes = self.notes().len();
        let images = self.list_images().len();
        tracing::debug!(folders, notes, images, "Refreshed listings");
        Ok(RefreshCounts {
            folders,
            notes,
            images,
        })
    }

    /// Reads a note as text; undecodable content degrades to a placeholder.
    pub fn read_note(&self, path: &Path) -> Result<String> {
        read_text(path)
    }

    /// Writes a new note named after `title`, optionally inside `folder`
    /// (created if missing). An existing file at that path is overwritten.
    pub fn save_note(
        &mut self,
        title: &str,
        content: &str,
        folder: Option<&str>,
    ) -> Result<PathBuf> {
        let filename = if title.ends_with(&self.note_ext) {
            title.to_string()
        } else {
            format!("{}{}", title, self.note_ext)
        };

        let dir = match folder.filter(|f| !f.is_empty()) {
            Some(folder) => {
                let dir = self.root.join(folder);
                if !dir.exists() {
                    fs::create_dir_all(&dir)?;
                }
                dir
            }
            None => self.root.clone(),
        };

        let path = dir.join(filename);
        fs::write(&path, content)?;
        tracing::debug!("Saved note {}", path.display());

        self.refresh()?;
        Ok(path)
    }

    /// Overwrites an existing note. Failures are logged and reported in the
    /// outcome, never returned as errors.
    pub fn update_note(&self, path: &Path, content: &str) -> WriteOutcome {
        match fs::write(path, content) {
            Ok(()) => WriteOutcome::ok(),
            Err(e) => {
                tracing::warn!("Failed to update note {}: {}", path.display(), e);
                WriteOutcome::failed(format!("Failed to update note: {}", e))
            }
        }
    }

    /// Removes a note and refreshes the listings, whether or not the removal
    /// worked.
    pub fn delete_note(&mut self, path: &Path) -> WriteOutcome {
        let outcome = match fs::remove_file(path) {
            Ok(()) => WriteOutcome::ok(),
            Err(e) => {
                tracing::warn!("Failed to delete note {}: {}", path.display(), e);
                WriteOutcome::failed(format!("Failed to delete note: {}", e))
            }
        };

        if let Err(e) = self.refresh() {
            tracing::warn!("Failed to refresh after delete: {}", e);
        }
        outcome
    }

    pub fn note_metadata(&self, path: &Path, include_content: bool) -> NoteMetadata {
        metadata::note_metadata(&self.root, path, include_content)
    }

    /// Metadata for every cached note, newest first.
    pub fn all_notes_metadata(&mut self, include_content: bool) -> Vec<NoteMetadata> {
        let notes = self.notes().to_vec();
        metadata::notes_metadata(&self.root, &notes, include_content)
    }
}
