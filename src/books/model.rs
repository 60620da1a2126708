//! Book record and genre tags

use std::fmt;

use serde::{Deserialize, Serialize};

/// Client-supplied primary key of a book
pub type BookId = i64;

/// Closed set of genre tags accepted on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Fantasy,
    ScienceFiction,
    NonFiction,
    Mystery,
    Horror,
    Romance,
    Thriller,
}

impl Genre {
    /// Returns the wire tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Fantasy => "FANTASY",
            Genre::ScienceFiction => "SCIENCE_FICTION",
            Genre::NonFiction => "NON_FICTION",
            Genre::Mystery => "MYSTERY",
            Genre::Horror => "HORROR",
            Genre::Romance => "ROMANCE",
            Genre::Thriller => "THRILLER",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A book record as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub genre: Genre,
}

impl Book {
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: i32,
        genre: Genre,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            publication_year,
            genre,
        }
    }
}

/// The records every fresh store starts with
pub fn sample_books() -> Vec<Book> {
    vec![
        Book::new(1, "The Hobbit", "J.R.R. Tolkien", 1937, Genre::Fantasy),
        Book::new(2, "The Lord of the Rings", "J.R.R. Tolkien", 1954, Genre::Fantasy),
        Book::new(3, "The Return of the King", "J.R.R. Tolkien", 1955, Genre::Fantasy),
    ]
}
