use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of genres a book can belong to.
///
/// Declaration order is the display order used by listings and charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Genre {
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    Mystery,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Other,
}

impl Genre {
    pub const ALL: [Genre; 5] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::Mystery,
        Genre::SciFi,
        Genre::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Fiction => "Fiction",
            Genre::NonFiction => "Non-Fiction",
            Genre::Mystery => "Mystery",
            Genre::SciFi => "Sci-Fi",
            Genre::Other => "Other",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = ValidationError;

    /// Accepts the display names case-insensitively, with or without the hyphen
    /// ("Sci-Fi", "scifi", "sci fi").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "fiction" => Ok(Genre::Fiction),
            "nonfiction" => Ok(Genre::NonFiction),
            "mystery" => Ok(Genre::Mystery),
            "scifi" => Ok(Genre::SciFi),
            "other" => Ok(Genre::Other),
            _ => Err(ValidationError::UnknownGenre(s.to_string())),
        }
    }
}

/// A rating in the inclusive range 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Rating(value as u8))
        } else {
            Err(ValidationError::RatingOutOfRange(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry in the collection.
///
/// Field order is the key order of the persisted JSON objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub genre: Genre,
    pub rating: Rating,
}

impl Book {
    /// Builds a new record. Blank (whitespace-only) titles and authors are
    /// refused here, while `validate` only refuses empty ones.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: Genre,
        rating: Rating,
    ) -> Result<Self, ValidationError> {
        let book = Self {
            title: title.into(),
            author: author.into(),
            genre,
            rating,
        };
        if book.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if book.author.trim().is_empty() {
            return Err(ValidationError::EmptyAuthor);
        }
        Ok(book)
    }

    /// Check applied to stored records. Genre and rating are checked by their
    /// types; a title or author only has to be non-empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.author.is_empty() {
            return Err(ValidationError::EmptyAuthor);
        }
        Ok(())
    }
}

/// Raw user input for a new book, as collected by a form or the command line.
#[derive(Debug, Clone, Default)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub rating: i64,
}

impl BookInput {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        rating: i64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            rating,
        }
    }

    /// Validates every field, reporting the first problem found.
    pub fn into_book(self) -> Result<Book, ValidationError> {
        let genre = Genre::from_str(&self.genre)?;
        let rating = Rating::new(self.rating)?;
        Book::new(self.title, self.author, genre, rating)
    }
}
