//! Books resource
//!
//! The book record model, the in-memory store that owns the records, and
//! the error type shared with the HTTP layer.

mod errors;
mod model;
mod store;

pub use errors::{BookError, BookResult, ErrorResponse};
pub use model::{sample_books, Book, BookId, Genre};
pub use store::BookStore;
