use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookInput;
use crate::store::DataStore;

/// Validates `input`, then appends it to the freshly loaded collection and
/// persists. Titles need not be unique.
pub fn run<S: DataStore>(store: &mut S, input: BookInput) -> Result<CmdResult> {
    let book = input.into_book()?;

    let mut books = store.load()?;
    books.push(book.clone());
    store.save(&books)?;

    log::info!("Added \"{}\" by {}", book.title, book.author);

    let mut result = CmdResult::default()
        .with_affected_books(vec![book])
        .with_collection(books);
    result.add_message(CmdMessage::success("Book added successfully!"));
    Ok(result)
}
