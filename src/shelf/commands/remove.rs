use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Removes every book whose title equals `title` exactly (case-sensitive).
///
/// Several books may share a title and all of them go. When nothing matches
/// the store is left untouched.
pub fn run<S: DataStore>(store: &mut S, title: &str) -> Result<CmdResult> {
    let books = store.load()?;
    let (removed, kept): (Vec<_>, Vec<_>) = books.into_iter().partition(|b| b.title == title);

    if removed.is_empty() {
        let mut result = CmdResult::default().with_collection(kept);
        result.add_message(CmdMessage::info(format!("No book titled \"{}\".", title)));
        return Ok(result);
    }

    store.save(&kept)?;
    log::info!("Removed {} book(s) titled \"{}\"", removed.len(), title);

    let mut result = CmdResult::default();
    if removed.len() > 1 {
        log::warn!("Title \"{}\" matched {} books", title, removed.len());
        result.add_message(CmdMessage::warning(format!(
            "{} books shared the title \"{}\"; all were removed.",
            removed.len(),
            title
        )));
    }
    result.add_message(CmdMessage::success(format!("Removed \"{}\".", title)));

    Ok(result.with_affected_books(removed).with_collection(kept))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{book, store_with};
    use crate::commands::MessageLevel;
    use crate::error::ShelfError;

    #[test]
    fn removes_single_match() {
        let mut store = store_with(&[
            book("Emma", "Austen", "Fiction", 4),
            book("Dune", "Herbert", "Sci-Fi", 5),
        ]);

        let result = run(&mut store, "Emma").unwrap();
        assert_eq!(result.affected_books.len(), 1);
        assert_eq!(store.load().unwrap(), vec![book("Dune", "Herbert", "Sci-Fi", 5)]);
    }

    #[test]
    fn removes_every_record_sharing_the_title() {
        let mut store = store_with(&[
            book("Foo", "First", "Other", 1),
            book("Foo", "Second", "Mystery", 2),
        ]);

        let result = run(&mut store, "Foo").unwrap();
        assert_eq!(result.affected_books.len(), 2);
        assert!(store.load().unwrap().is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn missing_title_leaves_collection_unchanged() {
        let mut store = store_with(&[book("Emma", "Austen", "Fiction", 4)]);
        let before = store.document().map(str::to_string);

        let result = run(&mut store, "Persuasion").unwrap();
        assert!(result.affected_books.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(store.document().map(str::to_string), before);
    }

    #[test]
    fn match_is_exact_and_case_sensitive() {
        let mut store = store_with(&[
            book("Emma", "Austen", "Fiction", 4),
            book("Emma Brown", "Bronte", "Fiction", 3),
        ]);

        run(&mut store, "emma").unwrap();
        assert_eq!(store.load().unwrap().len(), 2);

        run(&mut store, "Emma").unwrap();
        let left = store.load().unwrap();
        assert_eq!(left, vec![book("Emma Brown", "Bronte", "Fiction", 3)]);
    }

    #[test]
    fn no_match_does_not_need_a_writable_store() {
        let mut store = store_with(&[book("Emma", "Austen", "Fiction", 4)]);
        store.set_simulate_write_error(true);
        assert!(run(&mut store, "Nope").is_ok());

        let err = run(&mut store, "Emma").unwrap_err();
        assert!(matches!(err, ShelfError::Persistence { .. }));
        assert_eq!(store.load().unwrap().len(), 1);
    }
}
