use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::fs::write_atomic;
use crate::store::{format, DataStore};
use std::path::Path;

/// A serialized copy of the collection, ready to hand to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: String,
    pub content_type: &'static str,
    pub content: String,
    pub count: usize,
}

/// Serializes the collection exactly as the store would. When `destination`
/// is given the text is also written there.
pub fn run<S: DataStore>(
    store: &S,
    file_name: &str,
    destination: Option<&Path>,
) -> Result<CmdResult> {
    let books = store.load()?;
    let export = Export {
        file_name: file_name.to_string(),
        content_type: format::CONTENT_TYPE,
        content: format::encode(&books)?,
        count: books.len(),
    };

    let mut result = CmdResult::default();
    if let Some(path) = destination {
        write_atomic(path, &export.content)?;
        log::info!("Exported {} book(s) to {}", export.count, path.display());
        result.add_message(CmdMessage::success(format!(
            "Exported {} book(s) to {}",
            export.count,
            path.display()
        )));
    }

    Ok(result.with_export(export))
}
