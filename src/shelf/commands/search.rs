use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Book;
use crate::store::DataStore;

pub const NO_MATCH_MESSAGE: &str = "No books matched your search!";

/// Case-insensitive substring match on title or author.
///
/// An empty query matches everything; deciding what an empty search box
/// means is left to the caller.
pub fn matches(book: &Book, query: &str) -> bool {
    let query = query.to_lowercase();
    book.title.to_lowercase().contains(&query) || book.author.to_lowercase().contains(&query)
}

/// Books matching `query`, in collection order.
pub fn filter(books: &[Book], query: &str) -> Vec<Book> {
    books
        .iter()
        .filter(|b| matches(b, query))
        .cloned()
        .collect()
}

pub fn run<S: DataStore>(store: &S, query: &str) -> Result<CmdResult> {
    let books = store.load()?;
    let found = filter(&books, query);
    log::debug!("Search {:?} matched {} of {}", query, found.len(), books.len());

    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::warning(NO_MATCH_MESSAGE));
    }
    Ok(result.with_listed_books(found))
}
