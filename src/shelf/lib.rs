//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic personal library tracker**: a small book
//! collection kept in one JSON file, with add, list, search, remove, charts and
//! export. The command-line program is one client of the library; a web page or
//! desktop form could drive the same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders cards and charts               │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns CmdResult             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Reload, transform, persist                               │
//! │  - No I/O assumptions beyond the store                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Reload Before Mutate
//!
//! There is no long-lived in-memory collection. Every command loads the store,
//! works on that snapshot, and (for add/remove) writes the whole collection
//! back. The file is replaced atomically, so a crash mid-save leaves the
//! previous collection in place.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: Storage abstraction, JSON format, implementations
//! - [`model`]: `Book`, `Genre`, `Rating`
//! - [`config`]: Settings in `config.json`
//! - [`init`]: Data directory resolution and context setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
