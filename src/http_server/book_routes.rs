//! Book HTTP Routes
//!
//! CRUD endpoints over the shared [`BookStore`].

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::books::{Book, BookError, BookId, BookResult, BookStore};
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};

// ==================
// Shared State
// ==================

/// Book state shared across handlers
pub struct BookState {
    pub store: BookStore,
    pub metrics: Arc<MetricsRegistry>,
}

impl BookState {
    pub fn new(store: BookStore, metrics: Arc<MetricsRegistry>) -> Self {
        Self { store, metrics }
    }

    /// Count and log a failed request, then hand the error back
    fn record_error(&self, err: BookError) -> BookError {
        match &err {
            BookError::NotFound(_) => self.metrics.increment_not_found(),
            BookError::AlreadyExists(_) => self.metrics.increment_conflicts(),
            BookError::InvalidBody(_) | BookError::InvalidPath(_) => {
                self.metrics.increment_rejected()
            }
            BookError::Internal(_) => {}
        }

        let status = err.status_code();
        let detail = err.to_string();
        let event = match err {
            BookError::Internal(_) => Event::RequestFailed,
            _ => Event::RequestRejected,
        };
        log_event_with_fields(event, &[("status", status.as_str()), ("detail", detail.as_str())]);

        err
    }
}

impl Default for BookState {
    fn default() -> Self {
        Self::new(BookStore::seeded(), Arc::new(MetricsRegistry::new()))
    }
}

// ==================
// Book Routes
// ==================

/// Create book routes
pub fn book_routes(state: Arc<BookState>) -> Router {
    Router::new()
        .route("/", get(list_books_handler).post(create_book_handler))
        .route(
            "/:id",
            get(get_book_handler)
                .put(update_book_handler)
                .delete(delete_book_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

fn book_id(state: &BookState, path: Result<Path<BookId>, PathRejection>) -> BookResult<BookId> {
    path.map(|Path(id)| id)
        .map_err(|rejection| state.record_error(BookError::InvalidPath(rejection.body_text())))
}

fn book_body(state: &BookState, body: Result<Json<Book>, JsonRejection>) -> BookResult<Book> {
    body.map(|Json(book)| book)
        .map_err(|rejection| state.record_error(BookError::InvalidBody(rejection.body_text())))
}

// ==================
// Handlers
// ==================

async fn list_books_handler(State(state): State<Arc<BookState>>) -> BookResult<Json<Vec<Book>>> {
    let books = state.store.list().map_err(|e| state.record_error(e))?;
    state.metrics.increment_listed();
    Ok(Json(books))
}

async fn get_book_handler(
    State(state): State<Arc<BookState>>,
    path: Result<Path<BookId>, PathRejection>,
) -> BookResult<Json<Book>> {
    let id = book_id(&state, path)?;
    let book = state.store.get(id).map_err(|e| state.record_error(e))?;
    state.metrics.increment_read();
    Ok(Json(book))
}

async fn create_book_handler(
    State(state): State<Arc<BookState>>,
    body: Result<Json<Book>, JsonRejection>,
) -> BookResult<(StatusCode, Json<Book>)> {
    let book = book_body(&state, body)?;
    let book = state.store.create(book).map_err(|e| state.record_error(e))?;

    state.metrics.increment_created();
    let id = book.id.to_string();
    log_event_with_fields(Event::BookCreated, &[("id", id.as_str())]);

    Ok((StatusCode::CREATED, Json(book)))
}

async fn update_book_handler(
    State(state): State<Arc<BookState>>,
    path: Result<Path<BookId>, PathRejection>,
    body: Result<Json<Book>, JsonRejection>,
) -> BookResult<Json<Book>> {
    let id = book_id(&state, path)?;
    let book = book_body(&state, body)?;
    let book = state
        .store
        .update(id, book)
        .map_err(|e| state.record_error(e))?;

    state.metrics.increment_updated();
    let (path_id, body_id) = (id.to_string(), book.id.to_string());
    log_event_with_fields(
        Event::BookUpdated,
        &[("id", path_id.as_str()), ("body_id", body_id.as_str())],
    );

    Ok(Json(book))
}

async fn delete_book_handler(
    State(state): State<Arc<BookState>>,
    path: Result<Path<BookId>, PathRejection>,
) -> BookResult<StatusCode> {
    let id = book_id(&state, path)?;
    state.store.delete(id).map_err(|e| state.record_error(e))?;

    state.metrics.increment_deleted();
    let id = id.to_string();
    log_event_with_fields(Event::BookDeleted, &[("id", id.as_str())]);

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_seeded() {
        let state = BookState::default();
        assert_eq!(state.store.len().unwrap(), 3);
    }

    #[test]
    fn test_record_error_counts_by_kind() {
        let state = BookState::default();
        state.record_error(BookError::NotFound(5));
        state.record_error(BookError::AlreadyExists(1));
        state.record_error(BookError::InvalidBody("bad".to_string()));
        state.record_error(BookError::InvalidPath("abc".to_string()));

        let snapshot = state.metrics.snapshot();
        assert_eq!(snapshot.not_found, 1);
        assert_eq!(snapshot.conflicts, 1);
        assert_eq!(snapshot.rejected, 2);
    }
}
