//! # HTTP Server
//!
//! Combines the book and observability routers into one Axum service and
//! owns its lifecycle from bind to graceful shutdown.

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::book_routes::{book_routes, BookState};
use super::config::ServerConfig;
use super::middleware::log_requests;
use super::observability_routes::{
    method_not_allowed_handler, not_found_handler, observability_routes,
};
use crate::books::BookStore;
use crate::observability::{log_event, log_event_with_fields, Event, MetricsRegistry};

/// HTTP server for the book service
pub struct HttpServer {
    config: ServerConfig,
    metrics: Arc<MetricsRegistry>,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given store
    pub fn new(config: ServerConfig, store: BookStore) -> Self {
        let metrics = Arc::new(MetricsRegistry::new());
        let router = Self::build_router(&config, store, metrics.clone());
        Self {
            config,
            metrics,
            router,
        }
    }

    /// Create a server whose store is seeded according to the config
    pub fn with_config(config: ServerConfig) -> Self {
        let store = if config.seed_sample_books {
            let store = BookStore::seeded();
            let count = store.len().unwrap_or_default().to_string();
            log_event_with_fields(Event::StoreSeeded, &[("books", count.as_str())]);
            store
        } else {
            BookStore::new()
        };
        Self::new(config, store)
    }

    fn build_router(
        config: &ServerConfig,
        store: BookStore,
        metrics: Arc<MetricsRegistry>,
    ) -> Router {
        let book_state = Arc::new(BookState::new(store, metrics.clone()));

        Router::new()
            .merge(observability_routes(metrics.clone()))
            .merge(book_routes(book_state))
            .method_not_allowed_fallback(method_not_allowed_handler)
            .fallback(not_found_handler)
            .layer(middleware::from_fn_with_state(metrics, log_requests))
            .layer(Self::cors_layer(config))
    }

    fn cors_layer(config: &ServerConfig) -> CorsLayer {
        if config.cors_origins.is_empty() {
            return CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
        }

        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn metrics(&self) -> Arc<MetricsRegistry> {
        self.metrics.clone()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured address and serve until Ctrl-C
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        self.run(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener.local_addr()?.to_string();
        log_event_with_fields(Event::ServerListening, &[("addr", local_addr.as_str())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        log_event(Event::ServerShutdown);
        Ok(())
    }
}

async fn shutdown_signal() {
    // If the handler cannot be installed the server runs until killed
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
