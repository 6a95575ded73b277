//! Per-invocation state shared by the phase functions

use crate::callback::CallbackContext;
use crate::identifier::derive_server_name;
use crate::model::ResourceModel;
use crate::progress::{HandlerErrorCode, ProgressEvent};
use crate::request::{Action, ResourceHandlerRequest};
use opsworkscm_api::OpsWorksCm;
use tracing::Span;

/// Everything one invocation works with.
///
/// Built fresh for every invocation and dropped at its end; nothing here
/// outlives a single request.
pub struct InvocationContext<'a> {
    pub client: &'a dyn OpsWorksCm,
    pub model: ResourceModel,
    pub old_model: Option<ResourceModel>,
    pub callback_context: CallbackContext,
    span: Span,
}

impl<'a> InvocationContext<'a> {
    /// Build the context and resolve the server name of the desired model
    pub fn new(
        client: &'a dyn OpsWorksCm,
        action: Action,
        request: ResourceHandlerRequest,
        callback_context: Option<CallbackContext>,
    ) -> Self {
        let logical_resource_id = request.logical_resource_identifier.clone();
        let client_request_token = request.client_request_token.clone();
        let mut ctx = Self::unnamed(client, action, request, callback_context);

        {
            let _enter = ctx.span.enter();
            let name = derive_server_name(
                &logical_resource_id,
                &client_request_token,
                ctx.old_model.as_ref(),
                &ctx.model,
            );
            ctx.model.server_name = Some(name);
        }
        ctx
    }

    /// Build the context with the desired model as received. List works
    /// across servers and has no identity of its own.
    pub fn unnamed(
        client: &'a dyn OpsWorksCm,
        action: Action,
        request: ResourceHandlerRequest,
        callback_context: Option<CallbackContext>,
    ) -> Self {
        let span = tracing::info_span!(
            "handler",
            action = %action,
            logical_resource_id = %request.logical_resource_identifier,
            client_request_token = %request.client_request_token,
        );

        Self {
            client,
            model: request.desired_resource_state,
            old_model: request.previous_resource_state,
            callback_context: callback_context.unwrap_or_default(),
            span,
        }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn server_name(&self) -> &str {
        self.model.server_name()
    }

    /// IN_PROGRESS carrying the current model and callback context
    pub fn in_progress(&self, delay_seconds: u32) -> ProgressEvent {
        ProgressEvent::in_progress(
            self.model.clone(),
            self.callback_context.clone(),
            delay_seconds,
        )
    }

    /// FAILED carrying the current model and callback context
    pub fn failed(&self, error_code: HandlerErrorCode, message: impl Into<String>) -> ProgressEvent {
        ProgressEvent::failed(
            Some(self.model.clone()),
            Some(self.callback_context.clone()),
            error_code,
            message,
        )
    }
}
