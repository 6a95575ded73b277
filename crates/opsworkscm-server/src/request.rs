//! Invocation contract: what CloudFormation sends and how it is dispatched

use crate::callback::CallbackContext;
use crate::error::{InvocationError, Result};
use crate::handlers;
use crate::model::ResourceModel;
use crate::progress::ProgressEvent;
use opsworkscm_api::OpsWorksCm;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handler action requested by CloudFormation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    List,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Create => "CREATE",
            Action::Read => "READ",
            Action::Update => "UPDATE",
            Action::Delete => "DELETE",
            Action::List => "LIST",
        };
        write!(f, "{}", s)
    }
}

/// Per-invocation request data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceHandlerRequest {
    #[serde(default)]
    pub desired_resource_state: ResourceModel,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_resource_state: Option<ResourceModel>,

    #[serde(default)]
    pub logical_resource_identifier: String,

    #[serde(default)]
    pub client_request_token: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// One complete invocation document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerInvocation {
    pub action: Action,
    pub request: ResourceHandlerRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_context: Option<CallbackContext>,
}

impl HandlerInvocation {
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(InvocationError::from)
    }
}

/// Dispatch an invocation to the handler for its action
pub async fn invoke(client: &dyn OpsWorksCm, invocation: HandlerInvocation) -> ProgressEvent {
    let HandlerInvocation {
        action,
        request,
        callback_context,
    } = invocation;

    match action {
        Action::Create => handlers::create::handle(client, request, callback_context).await,
        Action::Read => handlers::read::handle(client, request, callback_context).await,
        Action::Update => handlers::update::handle(client, request, callback_context).await,
        Action::Delete => handlers::delete::handle(client, request, callback_context).await,
        Action::List => handlers::list::handle(client, request, callback_context).await,
    }
}
