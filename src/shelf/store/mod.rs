//! # Storage Layer
//!
//! The [`DataStore`] trait is the only thing the command layer knows about
//! persistence. A store holds exactly one collection and always reads and
//! writes it whole: there are no partial updates and no record ids.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single JSON file
//!   (`books.json` by default) replaced atomically on every save.
//! - [`memory::InMemoryStore`]: keeps the serialized collection in memory,
//!   for tests. It can simulate write failures.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── books.json     # JSON array of {title, author, genre, rating}
//! └── config.json    # optional settings
//! ```
//!
//! Encoding lives in [`format`] so that export produces exactly what the
//! store writes.

use crate::error::Result;
use crate::model::Book;

pub mod format;
pub mod fs;
pub mod memory;

/// Abstract interface for collection storage.
pub trait DataStore {
    /// Read the whole collection. A store that has never been written is empty.
    fn load(&self) -> Result<Vec<Book>>;

    /// Replace the whole collection.
    fn save(&mut self, books: &[Book]) -> Result<()>;

    /// Human-readable location of the store, for messages.
    fn location(&self) -> String;
}
