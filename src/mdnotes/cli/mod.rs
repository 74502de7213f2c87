//! # CLI Behavior
//!
//! One client of the mdnotes library. Only this layer prints, exits, or starts
//! an editor.
//!
//! ## Root Selection
//!
//! The notes directory comes from `--path` (or `$MDNOTES_PATH`), then the
//! `root` config key, then the current directory. A directory that does not
//! exist is a fatal error.
//!
//! ## Create
//!
//! Content source, in priority order:
//!
//! 1. `--editor`: opens the editor on a temporary file holding `# <title>`.
//! 2. `--content`: used as given, with literal `\n` turned into newlines.
//! 3. Nothing: the note is just the heading line.
//!
//! ## Logging
//!
//! Library diagnostics go through `tracing` to stderr (`RUST_LOG`, or
//! `--verbose` for debug). Results are printed to stdout.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print results
//! - `print`: Output formatting
//! - `setup`: Argument parsing via clap

mod commands;
mod print;
pub mod setup;

pub use commands::run;
