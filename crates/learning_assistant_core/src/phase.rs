//! crates/learning_assistant_core/src/phase.rs
//!
//! The shared contract for network-backed operations: the phase an operation is
//! in, and the error taxonomy every failure is normalized into.

use crate::ports::PortError;
use std::fmt;

/// The network-backed operations the client performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Upload,
    Delete,
    Dashboard,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Load => "load",
            Operation::Upload => "upload",
            Operation::Delete => "delete",
            Operation::Dashboard => "dashboard",
        };
        f.write_str(name)
    }
}

/// Every failure surfaced by the client core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// Required input was missing. Raised before any network call.
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Network(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Unauthorized")]
    Unauthorized,
    /// A second operation of the same kind was triggered while one is in flight.
    #[error("The {0} is already in progress")]
    Busy(Operation),
}

impl ClientError {
    /// The text shown to the user, falling back to `fallback` when the
    /// underlying error carried no message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Validation(msg) | ClientError::Network(msg) | ClientError::NotFound(msg)
                if msg.trim().is_empty() =>
            {
                fallback.to_string()
            }
            ClientError::Unauthorized => fallback.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<PortError> for ClientError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound(msg) => ClientError::NotFound(msg),
            PortError::Network(msg) => ClientError::Network(msg),
            PortError::Unauthorized => ClientError::Unauthorized,
            PortError::Unexpected(msg) => ClientError::Network(msg),
        }
    }
}

/// The phase of one asynchronous operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AsyncPhase {
    #[default]
    Idle,
    InFlight,
    Success,
    Failed(ClientError),
}

impl AsyncPhase {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, AsyncPhase::InFlight)
    }

    pub fn error(&self) -> Option<&ClientError> {
        match self {
            AsyncPhase::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Moves into `InFlight`, rejecting the call if the operation is already running.
    pub fn begin(&mut self, operation: Operation) -> Result<(), ClientError> {
        if self.is_in_flight() {
            return Err(ClientError::Busy(operation));
        }
        *self = AsyncPhase::InFlight;
        Ok(())
    }

    /// Records the outcome of the flight.
    pub fn settle<T>(&mut self, outcome: &Result<T, ClientError>) {
        *self = match outcome {
            Ok(_) => AsyncPhase::Success,
            Err(err) => AsyncPhase::Failed(err.clone()),
        };
    }

    /// Returns to `Idle` once the UI has consumed the outcome.
    pub fn reset(&mut self) {
        if !self.is_in_flight() {
            *self = AsyncPhase::Idle;
        }
    }
}
