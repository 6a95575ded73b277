//! Handler results reported back to CloudFormation

use crate::callback::CallbackContext;
use crate::model::ResourceModel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Poll delay requested while a server is still converging
pub const CALLBACK_DELAY_SECONDS: u32 = 60;

/// Delay for an immediate re-invocation
pub const NO_CALLBACK_DELAY: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    InProgress,
    Success,
    Failed,
}

/// Closed set of failure classifications surfaced to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandlerErrorCode {
    AlreadyExists,
    NotFound,
    InvalidRequest,
    ServiceLimitExceeded,
    NotStabilized,
    NotUpdatable,
    InternalFailure,
}

impl fmt::Display for HandlerErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandlerErrorCode::AlreadyExists => "AlreadyExists",
            HandlerErrorCode::NotFound => "NotFound",
            HandlerErrorCode::InvalidRequest => "InvalidRequest",
            HandlerErrorCode::ServiceLimitExceeded => "ServiceLimitExceeded",
            HandlerErrorCode::NotStabilized => "NotStabilized",
            HandlerErrorCode::NotUpdatable => "NotUpdatable",
            HandlerErrorCode::InternalFailure => "InternalFailure",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of one handler invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEvent {
    pub status: OperationStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_model: Option<ResourceModel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_models: Option<Vec<ResourceModel>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_context: Option<CallbackContext>,

    #[serde(default)]
    pub callback_delay_seconds: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<HandlerErrorCode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ProgressEvent {
    /// Ask to be invoked again after `delay_seconds` with `callback_context`
    pub fn in_progress(
        model: ResourceModel,
        callback_context: CallbackContext,
        delay_seconds: u32,
    ) -> Self {
        Self {
            status: OperationStatus::InProgress,
            resource_model: Some(model),
            resource_models: None,
            callback_context: Some(callback_context),
            callback_delay_seconds: delay_seconds,
            error_code: None,
            message: None,
        }
    }

    pub fn success(model: ResourceModel) -> Self {
        Self {
            status: OperationStatus::Success,
            resource_model: Some(model),
            resource_models: None,
            callback_context: None,
            callback_delay_seconds: NO_CALLBACK_DELAY,
            error_code: None,
            message: None,
        }
    }

    pub fn success_list(models: Vec<ResourceModel>) -> Self {
        Self {
            status: OperationStatus::Success,
            resource_model: None,
            resource_models: Some(models),
            callback_context: None,
            callback_delay_seconds: NO_CALLBACK_DELAY,
            error_code: None,
            message: None,
        }
    }

    pub fn failed(
        model: Option<ResourceModel>,
        callback_context: Option<CallbackContext>,
        error_code: HandlerErrorCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status: OperationStatus::Failed,
            resource_model: model,
            resource_models: None,
            callback_context,
            callback_delay_seconds: NO_CALLBACK_DELAY,
            error_code: Some(error_code),
            message: Some(message.into()),
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == OperationStatus::InProgress
    }

    pub fn is_success(&self) -> bool {
        self.status == OperationStatus::Success
    }

    pub fn is_failed(&self) -> bool {
        self.status == OperationStatus::Failed
    }
}
