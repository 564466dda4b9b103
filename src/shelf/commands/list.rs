use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub const EMPTY_MESSAGE: &str = "No books found! Start adding books now.";

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let books = store.load()?;

    let mut result = CmdResult::default();
    if books.is_empty() {
        result.add_message(CmdMessage::warning(EMPTY_MESSAGE));
    }
    Ok(result.with_listed_books(books))
}
