//! # Metadata Extraction
//!
//! Derives a title, a tag set and a short preview from raw note text. Nothing
//! here is cached: metadata is recomputed from the file every time it is asked
//! for.
//!
//! The three extractors are small hand-written scanners:
//!
//! - **Title**: the first line that starts with `#` followed by whitespace and
//!   some text. Whitespace after the `#` may run across line breaks, in which
//!   case the title is taken from the first line that has text.
//! - **Tags**: every `#` immediately followed by tag characters (ASCII
//!   alphanumerics, `_`, or CJK ideographs U+4E00..=U+9FA5). Tags are
//!   case-sensitive and deduplicated.
//! - **Preview**: the text with tags, heading fragments and fenced code blocks
//!   removed, whitespace collapsed, and cut to [`PREVIEW_LEN`] characters.

use crate::model::NoteMetadata;
use crate::store::decode::read_text;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub const PREVIEW_LEN: usize = 100;
pub const PREVIEW_ELLIPSIS: &str = "...";
pub const UNREADABLE_PREVIEW: &str = "Unable to read note content";

const FENCE: [char; 3] = ['`', '`', '`'];

/// Characters allowed after `#` in a tag.
pub fn is_tag_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

// Unicode whitespace plus the ASCII separators 0x1C..=0x1F.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn tag_end(chars: &[char], from: usize) -> usize {
    let mut end = from;
    while end < chars.len() && is_tag_char(chars[end]) {
        end += 1;
    }
    end
}

fn line_end(chars: &[char], from: usize) -> usize {
    chars[from..]
        .iter()
        .position(|&c| c == '\n')
        .map_or(chars.len(), |offset| from + offset)
}

/// Matches `#`, one or more whitespace characters, then text, at `hash`.
///
/// Returns the span of the text (start, end-of-line). The whitespace run is
/// taken greedily and given back one character at a time until the text can
/// start on a non-newline character. With `require_newline`, the text line
/// must also be terminated by `\n`.
fn heading_at(chars: &[char], hash: usize, require_newline: bool) -> Option<(usize, usize)> {
    let start = hash + 1;
    let mut run_end = start;
    while run_end < chars.len() && is_space(chars[run_end]) {
        run_end += 1;
    }
    if run_end == start {
        return None;
    }

    for text_start in (start + 1..=run_end).rev() {
        if text_start >= chars.len() || chars[text_start] == '\n' {
            continue;
        }
        let end = line_end(chars, text_start);
        if require_newline && end >= chars.len() {
            continue;
        }
        return Some((text_start, end));
    }
    None
}

fn find_fence(chars: &[char], from: usize) -> Option<usize> {
    if from > chars.len() {
        return None;
    }
    chars[from..]
        .windows(FENCE.len())
        .position(|w| w == FENCE)
        .map(|offset| from + offset)
}

/// Returns the first heading text in `content`, if any.
pub fn extract_title(content: &str) -> Option<String> {
    let chars: Vec<char> = content.chars().collect();
    let mut line_start = 0;

    while line_start < chars.len() {
        if chars[line_start] == '#' {
            if let Some((start, end)) = heading_at(&chars, line_start, false) {
                let title: String = chars[start..end].iter().collect();
                let title = title.trim_matches(is_space);
                return if title.is_empty() {
                    None
                } else {
                    Some(title.to_string())
                };
            }
        }
        line_start = line_end(&chars, line_start) + 1;
    }
    None
}

/// Collects every `#tag` in `content`.
pub fn extract_tags(content: &str) -> BTreeSet<String> {
    let chars: Vec<char> = content.chars().collect();
    let mut tags = BTreeSet::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '#' {
            let end = tag_end(&chars, i + 1);
            if end > i + 1 {
                tags.insert(chars[i + 1..end].iter().collect());
                i = end;
                continue;
            }
        }
        i += 1;
    }
    tags
}

/// Builds a single-line preview of `content`.
pub fn build_preview(content: &str) -> String {
    let chars: Vec<char> = content.chars().collect();
    let mut kept = String::with_capacity(content.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '#' => {
                let end = tag_end(&chars, i + 1);
                if end > i + 1 {
                    i = end;
                    continue;
                }
                if let Some((_, end)) = heading_at(&chars, i, true) {
                    i = end + 1;
                    continue;
                }
            }
            '`' if chars[i..].starts_with(&FENCE) => {
                if let Some(close) = find_fence(&chars, i + FENCE.len()) {
                    i = close + FENCE.len();
                    continue;
                }
            }
            _ => {}
        }
        kept.push(chars[i]);
        i += 1;
    }

    let mut collapsed = String::with_capacity(kept.len());
    let mut in_space = false;
    for c in kept.chars() {
        if is_space(c) {
            if !in_space {
                collapsed.push(' ');
            }
            in_space = true;
        } else {
            collapsed.push(c);
            in_space = false;
        }
    }

    let trimmed = collapsed.trim_matches(is_space);
    if trimmed.chars().count() > PREVIEW_LEN {
        let mut preview: String = trimmed.chars().take(PREVIEW_LEN).collect();
        preview.push_str(PREVIEW_ELLIPSIS);
        preview
    } else {
        trimmed.to_string()
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Reads and describes one note. Never fails: an unreadable note yields a
/// degraded record titled after its file name.
pub fn note_metadata(root: &Path, path: &Path, include_content: bool) -> NoteMetadata {
    let relative_path = path.strip_prefix(root).unwrap_or(path).to_path_buf();

    let described = read_text(path).and_then(|content| {
        let modified = std::fs::metadata(path)?.modified()?;
        Ok((content, DateTime::<Utc>::from(modified)))
    });

    match described {
        Ok((content, last_modified)) => NoteMetadata {
            path: path.to_path_buf(),
            relative_path,
            title: extract_title(&content).unwrap_or_else(|| file_stem(path)),
            tags: extract_tags(&content),
            last_modified,
            preview: build_preview(&content),
            content: include_content.then_some(content),
        },
        Err(e) => {
            tracing::warn!("Failed to read metadata for {}: {}", path.display(), e);
            NoteMetadata {
                path: path.to_path_buf(),
                relative_path,
                title: file_stem(path),
                tags: BTreeSet::new(),
                last_modified: DateTime::UNIX_EPOCH,
                preview: UNREADABLE_PREVIEW.to_string(),
                content: include_content.then(String::new),
            }
        }
    }
}

/// Describes every note in `paths`, newest first. Ties keep `paths` order.
pub fn notes_metadata(root: &Path, paths: &[PathBuf], include_content: bool) -> Vec<NoteMetadata> {
    let mut all: Vec<NoteMetadata> = paths
        .iter()
        .map(|path| note_metadata(root, path, include_content))
        .collect();
    all.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn tags(content: &str) -> Vec<String> {
        extract_tags(content).into_iter().collect()
    }

    #[test]
    fn title_from_first_heading() {
        assert_eq!(extract_title("# Hello\nBody"), Some("Hello".to_string()));
    }

    #[test]
    fn title_none_without_heading() {
        assert_eq!(extract_title("Just text\n#tag only"), None);
        assert_eq!(extract_title(""), None);
    }

    #[test]
    fn title_skips_tag_lines_and_finds_later_heading() {
        let content = "#draft\nintro\n## Second level\n# Main";
        // "## Second level" does not match: the `#` is followed by `#`, not whitespace
        assert_eq!(extract_title(content), Some("Main".to_string()));
    }

    #[test]
    fn title_only_at_line_start() {
        assert_eq!(extract_title("text # not a title\n"), None);
    }

    #[test]
    fn title_whitespace_spans_blank_lines() {
        assert_eq!(extract_title("#\n\nFound"), Some("Found".to_string()));
    }

    #[test]
    fn title_trims_surrounding_whitespace() {
        assert_eq!(extract_title("#   Spaced out  \r\nrest"), Some("Spaced out".to_string()));
    }

    #[test]
    fn title_of_only_spaces_is_none() {
        assert_eq!(extract_title("#   "), None);
    }

    #[test]
    fn tags_are_deduplicated() {
        assert_eq!(tags("#foo bar #bar foo #foo"), vec!["bar", "foo"]);
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert_eq!(tags("#Rust #rust"), vec!["Rust", "rust"]);
    }

    #[test]
    fn tags_accept_cjk_and_underscore() {
        assert_eq!(tags("学习 #笔记_v2, #数据库!"), vec!["数据库", "笔记_v2"]);
    }

    #[test]
    fn tags_stop_at_non_tag_chars() {
        assert_eq!(tags("#a-b #c.d ##e # f"), vec!["a", "c", "e"]);
    }

    #[test]
    fn tags_ignore_heading_marker() {
        assert!(extract_tags("# Title\n\nno tags here").is_empty());
    }

    #[test]
    fn preview_strips_heading_tags_and_code() {
        let content = "# Title\n\nSome #tag text\n```rust\nfn main() {}\n```\nafter";
        assert_eq!(build_preview(content), "Some text after");
    }

    #[test]
    fn preview_collapses_whitespace() {
        assert_eq!(build_preview("a\n\n  b\t\tc  "), "a b c");
    }

    #[test]
    fn preview_keeps_heading_without_trailing_newline() {
        // A heading fragment is only removed when terminated by a newline
        assert_eq!(build_preview("# Lonely"), "# Lonely");
    }

    #[test]
    fn preview_keeps_unclosed_fence() {
        assert_eq!(build_preview("```\ncode"), "``` code");
    }

    #[test]
    fn preview_truncates_long_content() {
        let content = "word ".repeat(40);
        let preview = build_preview(&content);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), PREVIEW_LEN + 3);
    }

    #[test]
    fn preview_exactly_at_limit_has_no_ellipsis() {
        let content = "x".repeat(PREVIEW_LEN);
        assert_eq!(build_preview(&content), content);
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        let content = "笔".repeat(PREVIEW_LEN);
        assert!(!build_preview(&content).ends_with("..."));
        let longer = "笔".repeat(PREVIEW_LEN + 1);
        assert!(build_preview(&longer).ends_with("..."));
    }

    #[test]
    fn metadata_composes_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sub").join("note.md");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "# Heading\n\nBody #idea").unwrap();

        let meta = note_metadata(dir.path(), &path, true);
        assert_eq!(meta.title, "Heading");
        assert_eq!(meta.relative_path, Path::new("sub").join("note.md"));
        assert!(meta.tags.contains("idea"));
        assert_eq!(meta.preview, "Body");
        assert_eq!(meta.content.as_deref(), Some("# Heading\n\nBody #idea"));
        assert!(meta.last_modified > DateTime::UNIX_EPOCH);
    }

    #[test]
    fn metadata_falls_back_to_file_stem() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plain.md");
        fs::write(&path, "no heading").unwrap();

        let meta = note_metadata(dir.path(), &path, false);
        assert_eq!(meta.title, "plain");
        assert_eq!(meta.content, None);
    }

    #[test]
    fn metadata_degrades_for_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.md");

        let meta = note_metadata(dir.path(), &path, true);
        assert_eq!(meta.title, "gone");
        assert!(meta.tags.is_empty());
        assert_eq!(meta.preview, UNREADABLE_PREVIEW);
        assert_eq!(meta.last_modified, DateTime::UNIX_EPOCH);
        assert_eq!(meta.content.as_deref(), Some(""));
    }

    #[test]
    fn batch_survives_bad_note() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.md");
        fs::write(&good, "# Good").unwrap();
        let bad = dir.path().join("bad.md");

        let all = notes_metadata(dir.path(), &[bad.clone(), good.clone()], false);
        assert_eq!(all.len(), 2);
        // The unreadable note has the epoch timestamp and sorts last
        assert_eq!(all[0].path, good);
        assert_eq!(all[1].path, bad);
    }

    #[test]
    fn ties_keep_input_order() {
        let dir = TempDir::new().unwrap();
        let same = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let mut written = Vec::new();
        for name in ["c.md", "a.md", "b.md"] {
            let path = dir.path().join(name);
            fs::write(&path, "# Tie").unwrap();
            fs::File::options()
                .write(true)
                .open(&path)
                .unwrap()
                .set_modified(same)
                .unwrap();
            written.push(path);
        }
        let gone_first = dir.path().join("zz_gone.md");
        let gone_second = dir.path().join("aa_gone.md");

        let input = vec![
            gone_first.clone(),
            written[0].clone(),
            written[1].clone(),
            gone_second.clone(),
            written[2].clone(),
        ];
        let order: Vec<PathBuf> = notes_metadata(dir.path(), &input, false)
            .into_iter()
            .map(|meta| meta.path)
            .collect();

        assert_eq!(
            order,
            vec![
                written[0].clone(),
                written[1].clone(),
                written[2].clone(),
                gone_first,
                gone_second,
            ]
        );
    }
}
