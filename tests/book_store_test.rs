use shelf::api::{ShelfApi, ShelfPaths};
use shelf::error::ShelfError;
use shelf::model::{Book, BookInput};
use shelf::store::fs::FileStore;
use shelf::store::DataStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, ShelfApi<FileStore>) {
    let dir = TempDir::new().unwrap();
    let api = ShelfApi::new(
        FileStore::in_dir(dir.path()),
        ShelfPaths::new(dir.path()),
    );
    (dir, api)
}

fn book(title: &str, author: &str, genre: &str, rating: i64) -> Book {
    BookInput::new(title, author, genre, rating)
        .into_book()
        .unwrap()
}

#[test]
fn test_empty_store_then_first_add() {
    let (_dir, mut api) = setup();
    assert!(api.store().load().unwrap().is_empty());

    api.add_book(BookInput::new("Dune", "Herbert", "Sci-Fi", 5)).unwrap();

    assert_eq!(
        api.store().load().unwrap(),
        vec![book("Dune", "Herbert", "Sci-Fi", 5)]
    );
}

#[test]
fn test_remove_shared_title_empties_store() {
    let (_dir, mut api) = setup();
    api.add_book(BookInput::new("Foo", "First", "Fiction", 3)).unwrap();
    api.add_book(BookInput::new("Foo", "Second", "Mystery", 4)).unwrap();

    api.remove_books("Foo").unwrap();
    assert!(api.store().load().unwrap().is_empty());
}

#[test]
fn test_save_of_loaded_collection_is_byte_identical() {
    let (dir, mut api) = setup();
    api.add_book(BookInput::new("Dune", "Herbert", "Sci-Fi", 5)).unwrap();
    api.add_book(BookInput::new("Sapiens", "Harari", "Non-Fiction", 4)).unwrap();

    let path = dir.path().join("books.json");
    let before = fs::read(&path).unwrap();

    let mut store = FileStore::in_dir(dir.path());
    let loaded = store.load().unwrap();
    store.save(&loaded).unwrap();

    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_reads_document_in_original_layout() {
    let dir = TempDir::new().unwrap();
    let text = r#"[
    {
        "title": "Gone Girl",
        "author": "Gillian Flynn",
        "genre": "Mystery",
        "rating": 4
    },
    {
        "title": "Science Fiction Basics",
        "author": "Someone",
        "genre": "Non-Fiction",
        "rating": 2
    }
]"#;
    fs::write(dir.path().join("books.json"), text).unwrap();

    let store = FileStore::in_dir(dir.path());
    let books = store.load().unwrap();
    assert_eq!(books.len(), 2);

    let api = ShelfApi::new(store, ShelfPaths::new(dir.path()));
    let found = api.search_books("fic").unwrap().listed_books;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Science Fiction Basics");
}

#[test]
fn test_aggregates_sum_to_collection_size() {
    let (_dir, mut api) = setup();
    for (title, genre, rating) in [
        ("A", "Fiction", 1),
        ("B", "Fiction", 5),
        ("C", "Other", 5),
        ("D", "Sci-Fi", 3),
        ("E", "Mystery", 2),
    ] {
        api.add_book(BookInput::new(title, "Author", genre, rating)).unwrap();
    }

    let stats = api.stats().unwrap().stats.unwrap();
    assert_eq!(stats.total, 5);
    assert_eq!(stats.by_genre.values().sum::<usize>(), 5);
    assert_eq!(stats.by_rating.values().sum::<usize>(), 5);
}

#[test]
fn test_corrupt_store_blocks_mutation() {
    let (dir, mut api) = setup();
    let path = dir.path().join("books.json");
    fs::write(&path, "{ definitely not a list").unwrap();

    let err = api
        .add_book(BookInput::new("Dune", "Herbert", "Sci-Fi", 5))
        .unwrap_err();
    assert!(matches!(err, ShelfError::CorruptStore { .. }));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{ definitely not a list"
    );
}

#[test]
fn test_no_tmp_files_left_behind() {
    let (dir, mut api) = setup();
    api.add_book(BookInput::new("Dune", "Herbert", "Sci-Fi", 5)).unwrap();
    api.remove_books("Dune").unwrap();

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_blank_title_on_disk_stays_usable() {
    let (dir, mut api) = setup();
    fs::write(
        dir.path().join("books.json"),
        r#"[{"title": " ", "author": "Anon", "genre": "Other", "rating": 2}]"#,
    )
    .unwrap();

    api.add_book(BookInput::new("Dune", "Herbert", "Sci-Fi", 5)).unwrap();
    let books = api.store().load().unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].title, " ");
}
