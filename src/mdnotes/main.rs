//! # mdnotes CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/mdnotes/cli/`, while
//! this file only invokes `cli::run()` and handles process termination.
//!
//! Everything from `api.rs` inward takes plain Rust values and returns plain
//! Rust types. The CLI layer owns all user-facing concerns: argument parsing,
//! logging setup, editor sessions, rendering and exit codes.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
