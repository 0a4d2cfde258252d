//! Dashboard error types

use std::fmt;

use thiserror::Error;

/// The dashboard command that talked to the remote store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Add,
    Update,
    Delete,
    SetAvailability,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Load => "load",
            Operation::Add => "add",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::SetAvailability => "set availability",
        };
        f.write_str(name)
    }
}

/// Failure reported by a [`RemoteStore`](crate::RemoteStore) implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// The request never produced a response
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape
    #[error("invalid response: {0}")]
    Decode(String),
}

/// Errors surfaced to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// A remote call backing a dashboard command failed
    #[error("{operation} failed: {cause}")]
    RemoteOperationFailed {
        operation: Operation,
        #[source]
        cause: RemoteError,
    },

    /// Update was requested while no plate was staged for editing
    #[error("no plate is being edited")]
    NoEditTarget,
}

impl DashboardError {
    pub fn remote(operation: Operation, cause: RemoteError) -> Self {
        DashboardError::RemoteOperationFailed { operation, cause }
    }

    /// The command this error came from, if it reached the remote store
    pub fn operation(&self) -> Option<Operation> {
        match self {
            DashboardError::RemoteOperationFailed { operation, .. } => Some(*operation),
            DashboardError::NoEditTarget => None,
        }
    }
}

/// Result type for remote store calls
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Result type for dashboard commands
pub type DashboardResult<T> = Result<T, DashboardError>;
