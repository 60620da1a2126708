//! Book API Tests
//!
//! Drives the full router in process:
//! - Seeded records are readable
//! - Create / update / delete round-trips
//! - Error statuses and detail messages
//! - Boundary rejections (bad body, bad path id)

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use bookshelf::books::BookStore;
use bookshelf::http_server::{HttpServer, ServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

// =============================================================================
// Helper Functions
// =============================================================================

fn seeded_app() -> Router {
    HttpServer::new(ServerConfig::default(), BookStore::seeded()).router()
}

fn empty_app() -> Router {
    HttpServer::new(ServerConfig::default(), BookStore::new()).router()
}

/// Send one request, return status and body (Null when empty)
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn hobbit() -> Value {
    json!({
        "id": 1,
        "title": "The Hobbit",
        "author": "J.R.R. Tolkien",
        "publication_year": 1937,
        "genre": "FANTASY"
    })
}

fn dune(id: i64) -> Value {
    json!({
        "id": id,
        "title": "Dune",
        "author": "Frank Herbert",
        "publication_year": 1965,
        "genre": "SCIENCE_FICTION"
    })
}

// =============================================================================
// Read Tests
// =============================================================================

#[tokio::test]
async fn test_list_returns_seed_in_order() {
    let app = seeded_app();
    let (status, body) = send(&app, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    let books = body.as_array().unwrap();
    assert_eq!(books.len(), 3);
    assert_eq!(books[0], hobbit());
    assert_eq!(books[1]["title"], "The Lord of the Rings");
    assert_eq!(books[2]["title"], "The Return of the King");
}

#[tokio::test]
async fn test_list_empty_store() {
    let app = empty_app();
    let (status, body) = send(&app, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_get_every_seeded_record() {
    let app = seeded_app();
    let (_, listed) = send(&app, Method::GET, "/", None).await;

    for book in listed.as_array().unwrap() {
        let uri = format!("/{}", book["id"]);
        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body, book);
    }
}

#[tokio::test]
async fn test_get_missing_returns_404() {
    let app = seeded_app();
    let (status, body) = send(&app, Method::GET, "/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Book with ID 999 not found"}));
}

// =============================================================================
// Create Tests
// =============================================================================

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let app = seeded_app();

    let (status, body) = send(&app, Method::POST, "/", Some(dune(4))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, dune(4));

    let (status, body) = send(&app, Method::GET, "/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, dune(4));

    let (_, listed) = send(&app, Method::GET, "/", None).await;
    assert_eq!(listed.as_array().unwrap().last().unwrap(), &dune(4));
}

#[tokio::test]
async fn test_create_duplicate_id_keeps_original() {
    let app = seeded_app();

    let (status, body) = send(&app, Method::POST, "/", Some(dune(1))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"detail": "Book ID already exists"}));

    let (_, body) = send(&app, Method::GET, "/1", None).await;
    assert_eq!(body, hobbit());
}

#[tokio::test]
async fn test_duplicate_titles_allowed() {
    let app = seeded_app();
    let mut copy = hobbit();
    copy["id"] = json!(10);

    let (status, _) = send(&app, Method::POST, "/", Some(copy)).await;
    assert_eq!(status, StatusCode::CREATED);
}

// =============================================================================
// Update Tests
// =============================================================================

#[tokio::test]
async fn test_update_replaces_all_fields() {
    let app = seeded_app();
    let replacement = json!({
        "id": 2,
        "title": "The Fellowship of the Ring",
        "author": "Tolkien",
        "publication_year": 1954,
        "genre": "NON_FICTION"
    });

    let (status, body) = send(&app, Method::PUT, "/2", Some(replacement.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, replacement);

    let (_, body) = send(&app, Method::GET, "/2", None).await;
    assert_eq!(body, replacement);

    // Position in the listing is unchanged
    let (_, listed) = send(&app, Method::GET, "/", None).await;
    assert_eq!(listed[1], replacement);
}

#[tokio::test]
async fn test_update_missing_returns_404() {
    let app = seeded_app();
    let (status, body) = send(&app, Method::PUT, "/42", Some(dune(42))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Book with ID 42 not found"}));

    let (status, _) = send(&app, Method::GET, "/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_body_id_not_reconciled() {
    let app = seeded_app();

    let (status, body) = send(&app, Method::PUT, "/3", Some(dune(30))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, dune(30));

    // Slot stays under the path id
    let (status, body) = send(&app, Method::GET, "/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 30);

    let (status, _) = send(&app, Method::GET, "/30", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Delete Tests
// =============================================================================

#[tokio::test]
async fn test_delete_then_get_and_delete_again() {
    let app = seeded_app();

    let (status, body) = send(&app, Method::DELETE, "/2", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::GET, "/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::DELETE, "/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Book with ID 2 not found"}));
}

#[tokio::test]
async fn test_delete_then_recreate_same_id() {
    let app = seeded_app();
    let new_book = json!({
        "id": 1,
        "title": "New",
        "author": "X",
        "publication_year": 2000,
        "genre": "FANTASY"
    });

    let (status, _) = send(&app, Method::DELETE, "/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, "/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::POST, "/", Some(new_book.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, Method::GET, "/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, new_book);

    // Recreated record moves to the end of the listing
    let (_, listed) = send(&app, Method::GET, "/", None).await;
    assert_eq!(listed[2], new_book);
}

// =============================================================================
// Boundary Rejection Tests
// =============================================================================

#[tokio::test]
async fn test_unknown_genre_rejected() {
    let app = seeded_app();
    let mut book = dune(5);
    book["genre"] = json!("POETRY");

    let (status, body) = send(&app, Method::POST, "/", Some(book)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    let (status, _) = send(&app, Method::GET, "/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_field_rejected() {
    let app = seeded_app();
    let body = json!({"id": 5, "title": "Untitled"});

    let (status, _) = send(&app, Method::POST, "/", Some(body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_wrong_field_type_rejected() {
    let app = seeded_app();
    let mut book = dune(5);
    book["publication_year"] = json!("nineteen sixty-five");

    let (status, _) = send(&app, Method::PUT, "/1", Some(book)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, body) = send(&app, Method::GET, "/1", None).await;
    assert_eq!(body, hobbit());
}

#[tokio::test]
async fn test_numeric_strings_not_coerced() {
    let app = seeded_app();
    let mut book = dune(6);
    book["publication_year"] = json!("1965");

    let (status, body) = send(&app, Method::POST, "/", Some(book)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("expected i32"));

    let mut book = dune(6);
    book["id"] = json!("6");
    let (status, _) = send(&app, Method::POST, "/", Some(book)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, Method::GET, "/6", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_integer_path_id_rejected() {
    let app = seeded_app();

    for method in [Method::GET, Method::DELETE] {
        let (status, body) = send(&app, method, "/abc", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());
    }
}

#[tokio::test]
async fn test_unsupported_method_returns_detail() {
    let app = seeded_app();

    for (method, uri) in [
        (Method::PATCH, "/1"),
        (Method::POST, "/1"),
        (Method::DELETE, "/"),
    ] {
        let (status, body) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, json!({"detail": "Method Not Allowed"}));
    }

    // Nothing was removed or changed
    let (_, listed) = send(&app, Method::GET, "/", None).await;
    assert_eq!(listed.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_unknown_path_returns_detail() {
    let app = seeded_app();
    let (status, body) = send(&app, Method::GET, "/1/chapters", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Not Found"}));
}
