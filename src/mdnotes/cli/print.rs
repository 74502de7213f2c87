use chrono::{DateTime, Utc};
use colored::Colorize;
use mdnotes::api::{CmdMessage, Listing, MessageLevel};
use mdnotes::model::NoteMetadata;
use std::path::Path;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;
const RULE_WIDTH: usize = 50;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_listing(listing: &Listing) {
    let mut first = true;
    let mut section = |heading: &str, entries: Vec<String>| {
        if !first {
            println!();
        }
        first = false;
        println!("{}", heading.bold());
        for entry in entries {
            println!("  - {}", entry);
        }
    };

    if let Some(folders) = &listing.folders {
        section("Folders:", folders.clone());
    }
    if let Some(notes) = &listing.notes {
        section("Notes:", notes.iter().map(|p| p.display().to_string()).collect());
    }
    if let Some(images) = &listing.images {
        section("Images:", images.iter().map(|p| p.display().to_string()).collect());
    }
}

pub(super) fn print_note(path: &Path, content: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("{}", path.display().to_string().dimmed());
    println!("\n{}\n", rule);
    println!("{}", content);
    println!("\n{}", rule);
}

pub(super) fn print_note_summaries(notes: &[NoteMetadata]) {
    if notes.is_empty() {
        println!("No notes found.");
        return;
    }

    for (i, note) in notes.iter().enumerate() {
        if i > 0 {
            println!();
        }

        let time_ago = format_time_ago(note.last_modified);
        let available = LINE_WIDTH.saturating_sub(TIME_WIDTH);
        let title = truncate_to_width(&note.title, available);
        let padding = available.saturating_sub(title.width());
        println!(
            "{}{}{}",
            title.bold(),
            " ".repeat(padding),
            time_ago.dimmed()
        );

        let tags: Vec<String> = note.tags.iter().map(|t| format!("#{}", t)).collect();
        if tags.is_empty() {
            println!("  {}", note.relative_path.display().to_string().dimmed());
        } else {
            println!(
                "  {}  {}",
                note.relative_path.display().to_string().dimmed(),
                tags.join(" ").yellow()
            );
        }

        if !note.preview.is_empty() {
            println!("  {}", truncate_to_width(&note.preview, LINE_WIDTH - 2));
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    if timestamp == DateTime::UNIX_EPOCH {
        return format!("{:>width$}", "unknown", width = TIME_WIDTH);
    }

    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
