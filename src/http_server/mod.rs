//! # Book Service HTTP Server
//!
//! Axum server exposing the books resource.
//!
//! # Endpoints
//!
//! - `GET /`, `POST /` - List and create books
//! - `GET /{id}`, `PUT /{id}`, `DELETE /{id}` - Read, replace and remove a book
//! - `/health` - Health check
//! - `/metrics` - Operational counters

pub mod book_routes;
pub mod config;
pub mod middleware;
pub mod observability_routes;
pub mod server;

pub use book_routes::{book_routes, BookState};
pub use config::{ConfigError, ServerConfig};
pub use server::HttpServer;
