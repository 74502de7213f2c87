//! # mdnotes Architecture
//!
//! mdnotes is a small **library over a directory of Markdown notes**, with a CLI
//! client on top. The library lists folders, notes and images, reads and writes
//! notes, and derives lightweight metadata (title, tags, preview) from note
//! text.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, runs the editor        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per command, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (store/, metadata.rs)                                 │
//! │  - NoteStore: listing cache, scans, note I/O                │
//! │  - Metadata extraction from note text                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Caching
//!
//! Listings are scanned on first use and then served from an in-memory cache
//! owned by the [`store::fs::NoteStore`]. Saving or deleting a note refreshes
//! the whole cache; nothing else invalidates it. Metadata is never cached.
//!
//! ## Failure Policy
//!
//! - A missing notes directory is fatal ([`error::NotesError::RootNotFound`]).
//! - Undecodable note text reads as a placeholder string.
//! - Update and delete report failure in a [`model::WriteOutcome`] and log it.
//! - A note whose metadata cannot be read gets a degraded record; one bad note
//!   never aborts a listing.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Per-command logic
//! - [`store`]: Notes directory access and listing cache
//! - [`metadata`]: Title, tag and preview extraction
//! - [`model`]: Core data types
//! - [`config`]: Configuration file
//! - [`editor`]: External editor integration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod metadata;
pub mod model;
pub mod store;
