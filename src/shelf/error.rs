use std::path::PathBuf;
use thiserror::Error;

/// Why a book was rejected before it reached the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Author cannot be empty")]
    EmptyAuthor,

    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(i64),

    #[error("Unknown genre: {0} (expected one of Fiction, Non-Fiction, Mystery, Sci-Fi, Other)")]
    UnknownGenre(String),
}

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Book store at {path} is corrupt: {reason}")]
    CorruptStore { path: PathBuf, reason: String },

    #[error("Could not write {path}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl ShelfError {
    pub(crate) fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ShelfError::Persistence {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
