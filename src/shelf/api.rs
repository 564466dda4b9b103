//! # API Facade
//!
//! The single entry point for shelf operations, whatever the UI. Each method
//! dispatches to one command and returns its `CmdResult`; no business logic
//! or presentation lives here.
//!
//! `ShelfApi<S: DataStore>` is generic over storage:
//! - Production: `ShelfApi<FileStore>`
//! - Testing: `ShelfApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::BookInput;
use crate::store::DataStore;
use std::path::Path;

pub struct ShelfApi<S: DataStore> {
    store: S,
    paths: commands::ShelfPaths,
}

impl<S: DataStore> ShelfApi<S> {
    pub fn new(store: S, paths: commands::ShelfPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_book(&mut self, input: BookInput) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, input)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search_books(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query)
    }

    pub fn remove_books(&mut self, title: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, title)
    }

    pub fn titles(&self) -> Result<commands::CmdResult> {
        commands::titles::run(&self.store)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn export(
        &self,
        file_name: &str,
        destination: Option<&Path>,
    ) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, file_name, destination)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn paths(&self) -> &commands::ShelfPaths {
        &self.paths
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, Export, LibraryStats, MessageLevel, ShelfPaths};
