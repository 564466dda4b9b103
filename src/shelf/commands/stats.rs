use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Book, Genre};
use crate::store::DataStore;
use std::collections::BTreeMap;

pub const NO_DATA_MESSAGE: &str = "No data available for visualization!";

/// Counts behind the genre and rating charts.
///
/// Only values that occur in the collection get an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryStats {
    pub total: usize,
    pub by_genre: BTreeMap<Genre, usize>,
    pub by_rating: BTreeMap<u8, usize>,
}

pub fn aggregate_by_genre(books: &[Book]) -> BTreeMap<Genre, usize> {
    let mut counts = BTreeMap::new();
    for book in books {
        *counts.entry(book.genre).or_insert(0) += 1;
    }
    counts
}

pub fn aggregate_by_rating(books: &[Book]) -> BTreeMap<u8, usize> {
    let mut counts = BTreeMap::new();
    for book in books {
        *counts.entry(book.rating.value()).or_insert(0) += 1;
    }
    counts
}

impl LibraryStats {
    pub fn from_books(books: &[Book]) -> Self {
        Self {
            total: books.len(),
            by_genre: aggregate_by_genre(books),
            by_rating: aggregate_by_rating(books),
        }
    }
}

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let books = store.load()?;
    let stats = LibraryStats::from_books(&books);

    let mut result = CmdResult::default();
    if stats.total == 0 {
        result.add_message(CmdMessage::warning(NO_DATA_MESSAGE));
    }
    Ok(result.with_stats(stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{book, store_with};
    use crate::store::memory::InMemoryStore;

    fn sample() -> Vec<Book> {
        vec![
            book("Dune", "Herbert", "Sci-Fi", 5),
            book("Foundation", "Asimov", "Sci-Fi", 4),
            book("Emma", "Austen", "Fiction", 4),
            book("Gone Girl", "Flynn", "Mystery", 3),
        ]
    }

    #[test]
    fn genre_counts_cover_only_present_genres() {
        let counts = aggregate_by_genre(&sample());
        assert_eq!(counts.get(&Genre::SciFi), Some(&2));
        assert_eq!(counts.get(&Genre::Fiction), Some(&1));
        assert_eq!(counts.get(&Genre::Mystery), Some(&1));
        assert_eq!(counts.get(&Genre::Other), None);
    }

    #[test]
    fn rating_counts_are_ascending() {
        let counts = aggregate_by_rating(&sample());
        let keys: Vec<_> = counts.keys().copied().collect();
        assert_eq!(keys, vec![3, 4, 5]);
        assert_eq!(counts[&4], 2);
    }

    #[test]
    fn counts_sum_to_total() {
        let stats = LibraryStats::from_books(&sample());
        assert_eq!(stats.by_genre.values().sum::<usize>(), stats.total);
        assert_eq!(stats.by_rating.values().sum::<usize>(), stats.total);
        assert_eq!(stats.total, 4);
    }

    #[test]
    fn run_on_empty_store() {
        let result = run(&InMemoryStore::new()).unwrap();
        let stats = result.stats.unwrap();
        assert_eq!(stats, LibraryStats::default());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, NO_DATA_MESSAGE);
    }

    #[test]
    fn run_loads_from_store() {
        let store = store_with(&sample());
        let stats = run(&store).unwrap().stats.unwrap();
        assert_eq!(stats.total, 4);
    }
}
