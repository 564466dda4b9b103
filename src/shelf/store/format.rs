//! JSON encoding shared by the file store and export.
//!
//! The collection is a top-level array of objects, pretty-printed with a
//! four-space indent. Indentation is cosmetic: any valid JSON array of book
//! objects decodes.

use crate::error::Result;
use crate::model::Book;
use serde::Serialize;

pub const CONTENT_TYPE: &str = "application/json";

const INDENT: &[u8] = b"    ";

pub fn encode(books: &[Book]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    books.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Decodes a stored collection. The error is a reason suitable for
/// `ShelfError::CorruptStore`.
pub fn decode(text: &str) -> std::result::Result<Vec<Book>, String> {
    if text.trim().is_empty() {
        return Err("file is empty".to_string());
    }

    let books: Vec<Book> = serde_json::from_str(text).map_err(|e| e.to_string())?;

    for (i, book) in books.iter().enumerate() {
        book.validate()
            .map_err(|e| format!("record {}: {}", i + 1, e))?;
    }

    Ok(books)
}
