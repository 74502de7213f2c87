use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::fs::NoteStore;

pub fn run(store: &mut NoteStore) -> Result<CmdResult> {
    let counts = store.refresh()?;
    let mut result = CmdResult::default().with_counts(counts);
    result.add_message(CmdMessage::success(format!(
        "Cache refreshed: found {} folders, {} notes and {} images.",
        counts.folders, counts.notes, counts.images
    )));
    Ok(result)
}
