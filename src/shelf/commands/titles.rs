use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Book;
use crate::store::DataStore;

/// Distinct titles in first-seen order: the choices offered for removal.
pub fn distinct_titles(books: &[Book]) -> Vec<String> {
    let mut titles: Vec<String> = Vec::new();
    for book in books {
        if !titles.contains(&book.title) {
            titles.push(book.title.clone());
        }
    }
    titles
}

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let books = store.load()?;
    Ok(CmdResult::default().with_titles(distinct_titles(&books)))
}
