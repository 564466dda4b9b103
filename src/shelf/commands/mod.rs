//! # Command Layer
//!
//! One module per operation. Every command that touches the collection reloads
//! it from the store first; mutations then write the whole collection back.
//! Nothing is cached between commands.

use crate::config::ShelfConfig;
use crate::error::Result;
use crate::model::Book;
use crate::store::fs::FileStore;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod remove;
pub mod search;
pub mod stats;
pub mod titles;

pub use export::Export;
pub use stats::LibraryStats;

#[derive(Debug, Clone)]
pub struct ShelfPaths {
    pub data_dir: PathBuf,
}

impl ShelfPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn config(&self) -> Result<ShelfConfig> {
        ShelfConfig::load(&self.data_dir)
    }

    pub fn store_path(&self, config: &ShelfConfig) -> PathBuf {
        self.data_dir.join(&config.data_file)
    }

    pub fn file_store(&self, config: &ShelfConfig) -> FileStore {
        FileStore::new(self.store_path(config))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Books added or removed by a mutation.
    pub affected_books: Vec<Book>,
    /// Books to display.
    pub listed_books: Vec<Book>,
    /// The collection after a mutation, as persisted.
    pub collection: Vec<Book>,
    pub titles: Vec<String>,
    pub stats: Option<LibraryStats>,
    pub export: Option<Export>,
    pub config: Option<ShelfConfig>,
    /// Config keys and values to show, in display order.
    pub settings: Vec<(String, String)>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_collection(mut self, books: Vec<Book>) -> Self {
        self.collection = books;
        self
    }

    pub fn with_titles(mut self, titles: Vec<String>) -> Self {
        self.titles = titles;
        self
    }

    pub fn with_stats(mut self, stats: LibraryStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_export(mut self, export: Export) -> Self {
        self.export = Some(export);
        self
    }

    pub fn with_config(mut self, config: ShelfConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_settings(mut self, settings: Vec<(String, String)>) -> Self {
        self.settings = settings;
        self
    }
}
