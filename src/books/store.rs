//! In-memory book store
//!
//! Entries are kept in a vector of `(key, book)` pairs so listing follows
//! insertion order. The key is the id a record was created or last
//! replaced under; an update does not re-key the slot even when the
//! replacement body carries a different `id`.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{BookError, BookResult};
use super::model::{sample_books, Book, BookId};

/// Process-wide table of books, shared by all request handlers
#[derive(Debug, Default)]
pub struct BookStore {
    entries: RwLock<Vec<(BookId, Book)>>,
}

impl BookStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the sample records
    pub fn seeded() -> Self {
        Self::with_books(sample_books())
    }

    /// Create a store from initial records, keyed by their own ids.
    ///
    /// A later record with a repeated id is dropped.
    pub fn with_books(books: Vec<Book>) -> Self {
        let mut entries: Vec<(BookId, Book)> = Vec::with_capacity(books.len());
        for book in books {
            if !entries.iter().any(|(key, _)| *key == book.id) {
                entries.push((book.id, book));
            }
        }
        Self {
            entries: RwLock::new(entries),
        }
    }

    fn read(&self) -> BookResult<RwLockReadGuard<'_, Vec<(BookId, Book)>>> {
        self.entries
            .read()
            .map_err(|_| BookError::Internal("Lock poisoned".to_string()))
    }

    fn write(&self) -> BookResult<RwLockWriteGuard<'_, Vec<(BookId, Book)>>> {
        self.entries
            .write()
            .map_err(|_| BookError::Internal("Lock poisoned".to_string()))
    }

    /// All books, in insertion order
    pub fn list(&self) -> BookResult<Vec<Book>> {
        let entries = self.read()?;
        Ok(entries.iter().map(|(_, book)| book.clone()).collect())
    }

    pub fn get(&self, id: BookId) -> BookResult<Book> {
        let entries = self.read()?;
        entries
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, book)| book.clone())
            .ok_or(BookError::NotFound(id))
    }

    /// Insert a new book under its own id
    pub fn create(&self, book: Book) -> BookResult<Book> {
        let mut entries = self.write()?;

        if entries.iter().any(|(key, _)| *key == book.id) {
            return Err(BookError::AlreadyExists(book.id));
        }

        entries.push((book.id, book.clone()));
        Ok(book)
    }

    /// Replace the book stored under `id` wholesale
    pub fn update(&self, id: BookId, book: Book) -> BookResult<Book> {
        let mut entries = self.write()?;

        match entries.iter_mut().find(|(key, _)| *key == id) {
            Some((_, existing)) => {
                *existing = book.clone();
                Ok(book)
            }
            None => Err(BookError::NotFound(id)),
        }
    }

    pub fn delete(&self, id: BookId) -> BookResult<()> {
        let mut entries = self.write()?;

        let len_before = entries.len();
        entries.retain(|(key, _)| *key != id);

        if entries.len() == len_before {
            Err(BookError::NotFound(id))
        } else {
            Ok(())
        }
    }

    pub fn len(&self) -> BookResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> BookResult<bool> {
        Ok(self.read()?.is_empty())
    }
}
