//! bookshelf - a small in-memory books CRUD service
//!
//! The books live in a process-local [`books::BookStore`] that is seeded at
//! startup and lost on exit. [`http_server`] exposes it over HTTP.

pub mod books;
pub mod cli;
pub mod http_server;
pub mod observability;
