//! OpsWorks CM API error types

use thiserror::Error;

/// Failure of a single remote call.
///
/// The first five variants are the exceptions the service declares for its
/// operations. `Service` covers any other coded service exception
/// (throttling, internal errors, ...), and `Unhandled` covers transport,
/// credential and unknown failures. Neither carries text meant for the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Resource already exists: {0}")]
    ResourceAlreadyExists(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Service error: {0}")]
    Service(String),

    #[error("Unhandled error: {0}")]
    Unhandled(String),
}

impl ApiError {
    /// Message reported by the remote side, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            ApiError::ResourceAlreadyExists(m)
            | ApiError::ResourceNotFound(m)
            | ApiError::Validation(m)
            | ApiError::LimitExceeded(m)
            | ApiError::InvalidState(m)
            | ApiError::Service(m)
            | ApiError::Unhandled(m) => m,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::ResourceNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
