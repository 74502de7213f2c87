use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// In-memory snapshot of the three listings.
///
/// Each container is either `None` (not scanned yet) or the complete result of
/// one scan. There are no per-entry updates: the cache is only ever filled by a
/// scan or dropped as a whole by [`ListingCache::invalidate`].
#[derive(Debug, Default, Clone)]
pub struct ListingCache {
    pub folders: Option<Vec<PathBuf>>,
    pub notes: Option<Vec<PathBuf>>,
    pub images: Option<Vec<PathBuf>>,
    last_refresh: Option<DateTime<Utc>>,
}

impl ListingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all three listings and records the refresh time.
    pub fn invalidate(&mut self) {
        self.folders = None;
        self.notes = None;
        self.images = None;
        self.last_refresh = Some(Utc::now());
    }

    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        self.last_refresh
    }
}
