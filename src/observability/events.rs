//! Observable events for the book service
//!
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Server startup begins
    ServerStart,
    /// Listener bound, ready to serve
    ServerListening,
    /// Shutdown signal received, server drained
    ServerShutdown,

    // Configuration
    ConfigLoaded,
    /// Store populated with the sample records
    StoreSeeded,

    // Requests
    /// Any request finished, with method, path, status and latency
    RequestCompleted,
    BookCreated,
    BookUpdated,
    BookDeleted,
    /// Request refused by the store or at the deserialization boundary
    RequestRejected,
    /// Request failed on the server side
    RequestFailed,
}

impl Event {
    /// Returns the event name as it appears in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ServerStart => "SERVER_START",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ServerShutdown => "SERVER_SHUTDOWN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreSeeded => "STORE_SEEDED",
            Event::RequestCompleted => "REQUEST_COMPLETED",
            Event::BookCreated => "BOOK_CREATED",
            Event::BookUpdated => "BOOK_UPDATED",
            Event::BookDeleted => "BOOK_DELETED",
            Event::RequestRejected => "REQUEST_REJECTED",
            Event::RequestFailed => "REQUEST_FAILED",
        }
    }

    /// Default severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::RequestCompleted => Severity::Debug,
            Event::RequestRejected => Severity::Warn,
            Event::RequestFailed => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
