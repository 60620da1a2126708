//! Metrics registry for the book service
//!
//! - Counters only
//! - Monotonic increase
//! - Reset only on process start

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters, shared by all request handlers
///
/// Counters use Relaxed ordering; readers only need eventually exact values.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    requests: AtomicU64,
    books_listed: AtomicU64,
    books_read: AtomicU64,
    books_created: AtomicU64,
    books_updated: AtomicU64,
    books_deleted: AtomicU64,
    /// Lookups, updates or deletes of an absent id
    not_found: AtomicU64,
    /// Creates with an id already in the store
    conflicts: AtomicU64,
    /// Requests refused at the deserialization boundary
    rejected: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_requests(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_listed(&self) {
        self.books_listed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_read(&self) {
        self.books_read.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_created(&self) {
        self.books_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_updated(&self) {
        self.books_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_deleted(&self) {
        self.books_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_conflicts(&self) {
        self.conflicts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests: self.requests.load(Ordering::Relaxed),
            books_listed: self.books_listed.load(Ordering::Relaxed),
            books_read: self.books_read.load(Ordering::Relaxed),
            books_created: self.books_created.load(Ordering::Relaxed),
            books_updated: self.books_updated.load(Ordering::Relaxed),
            books_deleted: self.books_deleted.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
            conflicts: self.conflicts.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub requests: u64,
    pub books_listed: u64,
    pub books_read: u64,
    pub books_created: u64,
    pub books_updated: u64,
    pub books_deleted: u64,
    pub not_found: u64,
    pub conflicts: u64,
    pub rejected: u64,
}
