//! Error types for the pseudo clients.
//!
//! Failures fall into two channels. Transport and decode errors propagate as
//! [`Error`]. A management call answered with a non-2xx status is not an
//! error at all: it becomes a
//! [`ManagementOutcome::Failure`](crate::ManagementOutcome::Failure) and is
//! displayed.

use std::fmt;
use thiserror::Error;

/// The unified error type for pseudo operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, body read).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A response body that should have been JSON was not.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service answered, but not in the shape this client understands.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Input validation errors (service URLs).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Protocol-level errors.
#[derive(Debug)]
pub enum ProtocolError {
    /// Non-2xx status from an endpoint whose failures are not displayable
    /// outcomes.
    Status {
        /// HTTP status code.
        status: u16,
        /// The `detail` field of the service's error body, if present.
        detail: Option<String>,
    },

    /// The body decoded as JSON but did not match the expected schema.
    UnexpectedShape { reason: String },
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::Status { status, detail } => {
                write!(f, "HTTP {}", status)?;
                if let Some(detail) = detail {
                    write!(f, ": {}", detail)?;
                }
                Ok(())
            }
            ProtocolError::UnexpectedShape { reason } => {
                write!(f, "unexpected response shape: {}", reason)
            }
        }
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Shorthand for an [`ProtocolError::UnexpectedShape`].
    pub fn shape(reason: impl Into<String>) -> Self {
        ProtocolError::UnexpectedShape {
            reason: reason.into(),
        }
    }

    /// Returns the HTTP status for status errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProtocolError::Status { status, .. } => Some(*status),
            ProtocolError::UnexpectedShape { .. } => None,
        }
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid service base URL.
    #[error("invalid service URL '{value}': {reason}")]
    ServiceUrl { value: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display_includes_detail() {
        let err = ProtocolError::Status {
            status: 503,
            detail: Some("Pseudonym request failed".to_string()),
        };
        assert_eq!(err.to_string(), "HTTP 503: Pseudonym request failed");
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn status_error_display_without_detail() {
        let err = ProtocolError::Status {
            status: 500,
            detail: None,
        };
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[test]
    fn decode_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Decode(_)));
    }
}
