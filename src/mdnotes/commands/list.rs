use crate::commands::{CmdResult, Listing};
use crate::error::Result;
use crate::store::fs::NoteStore;

use super::helpers::{folder_name, relative_paths};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListType {
    #[default]
    All,
    Folders,
    Notes,
    Images,
}

/// Lists the requested sections. With `refresh`, all listings are rescanned
/// first.
pub fn run(store: &mut NoteStore, list_type: ListType, refresh: bool) -> Result<CmdResult> {
    if refresh {
        store.refresh()?;
    }

    let mut listing = Listing::default();

    if matches!(list_type, ListType::All | ListType::Folders) {
        let folders = store.list_folders()?;
        listing.folders = Some(folders.iter().map(|p| folder_name(p)).collect());
    }

    if matches!(list_type, ListType::All | ListType::Notes) {
        let ext = store.note_ext().to_string();
        let notes = store.list_notes(&ext, refresh && list_type == ListType::Notes).to_vec();
        listing.notes = Some(relative_paths(store, &notes));
    }

    if matches!(list_type, ListType::All | ListType::Images) {
        let images = store.list_images().to_vec();
        listing.images = Some(relative_paths(store, &images));
    }

    Ok(CmdResult::default().with_listing(listing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::test_support::{notes_tree, write};
    use std::path::PathBuf;

    #[test]
    fn lists_all_sections() {
        let dir = notes_tree();
        let mut store = NoteStore::open(dir.path()).unwrap();

        let listing = run(&mut store, ListType::All, false).unwrap().listing.unwrap();
        assert_eq!(listing.folders.unwrap(), vec!["life", "work"]);
        assert_eq!(
            listing.notes.unwrap(),
            vec![
                PathBuf::from("inbox.md"),
                PathBuf::from("work/deep/log.md"),
                PathBuf::from("work/plan.md"),
            ]
        );
        assert_eq!(listing.images.unwrap(), vec![PathBuf::from("life/cat.png")]);
    }

    #[test]
    fn lists_single_section() {
        let dir = notes_tree();
        let mut store = NoteStore::open(dir.path()).unwrap();

        let listing = run(&mut store, ListType::Folders, false).unwrap().listing.unwrap();
        assert!(listing.folders.is_some());
        assert!(listing.notes.is_none());
        assert!(listing.images.is_none());
    }

    #[test]
    fn refresh_picks_up_new_files() {
        let dir = notes_tree();
        let mut store = NoteStore::open(dir.path()).unwrap();
        run(&mut store, ListType::All, false).unwrap();

        write(dir.path(), "new.md", "# New");
        write(dir.path(), "shots/new.webp", "img");

        let stale = run(&mut store, ListType::All, false).unwrap().listing.unwrap();
        assert_eq!(stale.notes.unwrap().len(), 3);

        let fresh = run(&mut store, ListType::All, true).unwrap().listing.unwrap();
        assert_eq!(fresh.notes.unwrap().len(), 4);
        assert_eq!(fresh.images.unwrap().len(), 2);
        assert_eq!(fresh.folders.unwrap().len(), 3);
    }
}
