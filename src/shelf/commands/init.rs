use crate::commands::{CmdMessage, CmdResult, ShelfPaths};
use crate::error::{Result, ShelfError};
use crate::store::DataStore;
use std::fs;

/// Creates the data directory and an empty store. An existing store is
/// loaded (so corruption is reported) but never rewritten.
pub fn run(paths: &ShelfPaths) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    fs::create_dir_all(dir).map_err(|e| ShelfError::persistence(dir, e))?;

    let config = paths.config()?;
    let mut store = paths.file_store(&config);

    let mut result = CmdResult::default();
    if store.path().exists() {
        let books = store.load()?;
        result.add_message(CmdMessage::info(format!(
            "Store already exists at {} ({} book(s))",
            store.location(),
            books.len()
        )));
    } else {
        store.save(&[])?;
        result.add_message(CmdMessage::success(format!(
            "Initialized shelf store at {}",
            store.location()
        )));
    }
    Ok(result)
}
