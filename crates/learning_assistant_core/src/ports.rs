//! crates/learning_assistant_core/src/ports.rs
//!
//! Defines the service contracts (traits) consumed by the client core.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of the transport used to reach the backend services.

use async_trait::async_trait;
use crate::domain::{Dashboard, Document, SelectedFile, User};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., HTTP, storage).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    /// The request failed or the service could not be reached.
    /// Carries the message reported by the server when there is one.
    #[error("{0}")]
    Network(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait DocumentService: Send + Sync {
    /// Returns the user's documents in server order.
    async fn list(&self) -> PortResult<Vec<Document>>;

    /// Uploads a file under the given title and returns the stored document.
    async fn upload(&self, title: &str, file: &SelectedFile) -> PortResult<Document>;

    async fn delete(&self, document_id: &str) -> PortResult<()>;
}

#[async_trait]
pub trait ProgressService: Send + Sync {
    /// Fetches the overview totals and both recent-activity feeds.
    async fn dashboard(&self) -> PortResult<Dashboard>;
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the persisted user, if a session survives from earlier.
    async fn load(&self) -> PortResult<Option<User>>;

    async fn save(&self, user: &User, token: &str) -> PortResult<()>;

    async fn clear(&self) -> PortResult<()>;
}

/// Fire-and-forget user notifications (toasts).
pub trait NotificationSink: Send + Sync {
    fn notify_error(&self, message: &str);
    fn notify_success(&self, message: &str);
}
