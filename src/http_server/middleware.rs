//! Request logging middleware
//!
//! Counts every request and emits one `REQUEST_COMPLETED` line with method,
//! path, status and latency once the response is ready.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::observability::{log_event_with_fields, Event, MetricsRegistry};

pub async fn log_requests(
    State(metrics): State<Arc<MetricsRegistry>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    metrics.increment_requests();
    let latency_us = started.elapsed().as_micros().to_string();
    log_event_with_fields(
        Event::RequestCompleted,
        &[
            ("method", method.as_str()),
            ("path", path.as_str()),
            ("status", response.status().as_str()),
            ("latency_us", latency_us.as_str()),
        ],
    );

    response
}
