//! # Storage Layer
//!
//! Everything that touches the notes directory lives here.
//!
//! ## Layout
//!
//! - [`fs::NoteStore`]: owns the root path and the listing cache, and performs
//!   note reads, writes and deletes.
//! - [`cache::ListingCache`]: the folder/note/image snapshot. Each listing is
//!   either unpopulated or the full result of one scan.
//! - [`scan`]: directory walks. Hidden entries are pruned.
//! - [`decode`]: turns note bytes into text, trying UTF-8 then GBK.
//!
//! ## Freshness
//!
//! Listings are scanned lazily and then reused until [`fs::NoteStore::refresh`]
//! drops them. Saving and deleting a note refresh automatically; updating in
//! place does not, since it cannot change any listing. Changes made to the
//! directory by other programs are only seen after a refresh.
//!
//! ```text
//! notes/
//! ├── inbox.md            # note
//! ├── work/               # folder
//! │   ├── plan.md         # note (found recursively)
//! │   └── chart.png       # image
//! └── .trash/             # hidden: never scanned
//! ```

pub mod cache;
pub mod decode;
pub mod fs;
pub mod scan;
