use clap::{Parser, Subcommand, ValueEnum};
use mdnotes::api::ListType;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mdnotes", bin_name = "mdnotes", version)]
#[command(about = "List, read and write notes in a directory of Markdown files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Notes directory (defaults to the configured root, then the current directory)
    #[arg(long, global = true, env = "MDNOTES_PATH", value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    All,
    Folders,
    Notes,
    Images,
}

impl From<ListKind> for ListType {
    fn from(kind: ListKind) -> Self {
        match kind {
            ListKind::All => ListType::All,
            ListKind::Folders => ListType::Folders,
            ListKind::Notes => ListType::Notes,
            ListKind::Images => ListType::Images,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List folders, notes and images
    #[command(alias = "ls", display_order = 1)]
    List {
        /// What to list
        #[arg(long = "type", value_enum, default_value_t = ListKind::All)]
        kind: ListKind,

        /// Rescan the notes directory first
        #[arg(long)]
        refresh: bool,
    },

    /// Print a note
    #[command(display_order = 2)]
    Read {
        /// Note path, relative to the notes directory
        note_path: String,
    },

    /// Create a new note
    #[command(alias = "n", display_order = 3)]
    Create {
        /// Note title (also the file name)
        title: String,

        /// Subfolder to save into (created if missing)
        #[arg(long)]
        folder: Option<String>,

        /// Note content (`\n` is turned into a newline)
        #[arg(long, conflicts_with = "editor")]
        content: Option<String>,

        /// Write the note in $EDITOR
        #[arg(long)]
        editor: bool,
    },

    /// Show title, tags and preview of every note, newest first
    #[command(display_order = 4)]
    Notes {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Include full note content
        #[arg(long)]
        content: bool,
    },

    /// Replace the content of an existing note
    #[command(display_order = 5)]
    Update {
        /// Note path, relative to the notes directory
        note_path: String,

        /// New content (`\n` is turned into a newline)
        #[arg(long, conflicts_with = "editor", required_unless_present = "editor")]
        content: Option<String>,

        /// Edit the current content in $EDITOR
        #[arg(long)]
        editor: bool,
    },

    /// Delete a note
    #[command(alias = "rm", display_order = 6)]
    Delete {
        /// Note path, relative to the notes directory
        note_path: String,
    },

    /// Rescan the notes directory
    #[command(display_order = 7)]
    Refresh,

    /// Get or set configuration
    #[command(display_order = 8)]
    Config {
        /// Configuration key (root, note-ext, editor)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
