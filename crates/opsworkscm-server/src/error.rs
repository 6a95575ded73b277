//! Error types and failure classification

use crate::context::InvocationContext;
use crate::model::TYPE_NAME;
use crate::progress::{HandlerErrorCode, ProgressEvent};
use opsworkscm_api::ApiError;
use thiserror::Error;

/// Invocation document could not be turned into a request
#[derive(Error, Debug)]
pub enum InvocationError {
    #[error("Malformed invocation payload: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InvocationError>;

/// Turn a remote failure into a terminal FAILED event.
///
/// Handlers deal with their own special cases (a missing server during
/// Delete, a busy server, ...) before falling back to this table.
pub fn classify(ctx: &InvocationContext<'_>, err: ApiError) -> ProgressEvent {
    let name = ctx.server_name();
    let (code, message) = match &err {
        ApiError::ResourceAlreadyExists(_) => (
            HandlerErrorCode::AlreadyExists,
            format!(
                "Resource of type '{}' with identifier '{}' already exists.",
                TYPE_NAME, name
            ),
        ),
        ApiError::ResourceNotFound(_) => (
            HandlerErrorCode::NotFound,
            format!(
                "Resource of type '{}' with identifier '{}' was not found.",
                TYPE_NAME, name
            ),
        ),
        ApiError::Validation(msg) => (
            HandlerErrorCode::InvalidRequest,
            format!("Invalid request provided: {}", msg),
        ),
        ApiError::LimitExceeded(msg) => (
            HandlerErrorCode::ServiceLimitExceeded,
            format!(
                "Limit exceeded for resource of type '{}'. Reason: {}",
                TYPE_NAME, msg
            ),
        ),
        ApiError::InvalidState(_) => (
            HandlerErrorCode::NotStabilized,
            format!(
                "Resource of type '{}' with identifier '{}' did not stabilize.",
                TYPE_NAME, name
            ),
        ),
        ApiError::Service(_) | ApiError::Unhandled(_) => {
            tracing::error!(server_name = %name, error = %err.message(), "Unhandled failure");
            (
                HandlerErrorCode::InternalFailure,
                "Internal error occurred.".to_string(),
            )
        }
    };

    tracing::warn!(server_name = %name, error_code = %code, error = %err, "Request failed");
    ctx.failed(code, message)
}
