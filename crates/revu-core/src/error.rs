//! Error types for the Revu client.

use thiserror::Error;

use crate::loading::Operation;

/// A shared error type for the whole client.
///
/// Every remote exchange resolves to either a typed success or one of these
/// variants; the orchestration layer flattens whichever variant it receives
/// into a single user-visible string per workflow.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RevuError {
    /// The request could not be carried out at the transport level
    /// (connection refused, timeout, interrupted body).
    #[error("request for {operation} failed: {message}")]
    Transport {
        operation: Operation,
        message: String,
    },

    /// The backend answered with a non-success status. `detail` carries the
    /// server-supplied error message when one could be parsed from the body.
    #[error("{operation} rejected by backend (HTTP {status}): {}", .detail.as_deref().unwrap_or("no error detail"))]
    Status {
        operation: Operation,
        status: u16,
        detail: Option<String>,
    },

    /// The response body could not be parsed as the expected JSON shape.
    #[error("could not decode {operation} response: {message}")]
    Decode {
        operation: Operation,
        message: String,
    },

    /// Configuration error (unreadable or malformed config file).
    #[error("configuration error: {0}")]
    Config(String),
}

impl RevuError {
    /// Creates a transport-level error for `operation`.
    pub fn transport(operation: Operation, message: impl Into<String>) -> Self {
        Self::Transport {
            operation,
            message: message.into(),
        }
    }

    /// Creates a non-success-status error for `operation`.
    pub fn status(operation: Operation, status: u16, detail: Option<String>) -> Self {
        Self::Status {
            operation,
            status,
            detail,
        }
    }

    /// Creates a body-decoding error for `operation`.
    pub fn decode(operation: Operation, message: impl Into<String>) -> Self {
        Self::Decode {
            operation,
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The operation this error belongs to, when it came out of a dispatch.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::Transport { operation, .. }
            | Self::Status { operation, .. }
            | Self::Decode { operation, .. } => Some(*operation),
            Self::Config(_) => None,
        }
    }

    /// The error message supplied by the backend itself, if any.
    ///
    /// Workflows prefer this over their generic fallback wording when
    /// surfacing a dispatch failure.
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// A type alias for `Result<T, RevuError>`.
pub type Result<T> = std::result::Result<T, RevuError>;
