//! Text decoding with an ordered encoding fallback.

use crate::error::Result;
use encoding_rs::{Encoding, GBK, UTF_8};
use std::fs;
use std::path::Path;

/// Encodings tried in order when decoding note files.
pub const NOTE_ENCODINGS: &[&Encoding] = &[UTF_8, GBK];

/// Decodes `bytes` with the first encoding that accepts them without
/// replacement characters. Returns `None` if every encoding fails.
pub fn decode_text(bytes: &[u8], encodings: &[&'static Encoding]) -> Option<String> {
    encodings.iter().find_map(|encoding| {
        let decoded = encoding.decode_without_bom_handling_and_without_replacement(bytes);
        if decoded.is_none() {
            tracing::debug!("{} could not decode note bytes", encoding.name());
        }
        decoded.map(|text| text.into_owned())
    })
}

/// Placeholder returned in place of content no encoding could decode.
pub fn undecodable_placeholder(path: &Path) -> String {
    format!("Unable to read file {}: unsupported encoding.", path.display())
}

/// Reads a note as text. Decoding failures degrade to a placeholder string;
/// I/O failures are returned.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(decode_text(&bytes, NOTE_ENCODINGS).unwrap_or_else(|| undecodable_placeholder(path)))
}
