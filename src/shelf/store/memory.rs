use super::{format, DataStore};
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::io;

/// In-memory store for testing.
///
/// Keeps the encoded document rather than the `Vec<Book>` so loads go through
/// the same decoding as the file store.
#[derive(Default)]
pub struct InMemoryStore {
    document: Option<String>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw stored text, valid or not.
    pub fn with_document(text: impl Into<String>) -> Self {
        Self {
            document: Some(text.into()),
            simulate_write_error: false,
        }
    }

    /// Make every subsequent save fail with a persistence error.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Book>> {
        match &self.document {
            None => Ok(Vec::new()),
            Some(text) => format::decode(text).map_err(|reason| ShelfError::CorruptStore {
                path: self.location().into(),
                reason,
            }),
        }
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        if self.simulate_write_error {
            return Err(ShelfError::persistence(
                self.location(),
                io::Error::other("simulated write error"),
            ));
        }
        self.document = Some(format::encode(books)?);
        Ok(())
    }

    fn location(&self) -> String {
        "memory://books.json".to_string()
    }
}
