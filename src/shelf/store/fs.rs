use super::{format, DataStore};
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "books.json";

/// File-backed store: one JSON document holding the whole collection.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<dir>/books.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_DATA_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Book>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No store at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(ShelfError::CorruptStore {
                    path: self.path.clone(),
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(ShelfError::persistence(&self.path, e)),
        };

        let books = format::decode(&text).map_err(|reason| ShelfError::CorruptStore {
            path: self.path.clone(),
            reason,
        })?;
        log::debug!("Loaded {} book(s) from {}", books.len(), self.path.display());
        Ok(books)
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        let content = format::encode(books)?;
        write_atomic(&self.path, &content)?;
        log::debug!("Saved {} book(s) to {}", books.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Writes `content` to a temporary sibling of `target` and renames it into
/// place, so a reader sees either the old file or the new one.
pub fn write_atomic(target: &Path, content: &str) -> Result<()> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(|e| ShelfError::persistence(&dir, e))?;
    }

    let stem = target
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("books");
    let tmp_path = dir.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()));

    if let Err(e) = fs::write(&tmp_path, content) {
        let _ = fs::remove_file(&tmp_path);
        return Err(ShelfError::persistence(target, e));
    }
    if let Err(e) = fs::rename(&tmp_path, target) {
        let _ = fs::remove_file(&tmp_path);
        return Err(ShelfError::persistence(target, e));
    }

    Ok(())
}
