//! Read: one describe, no polling

use crate::callback::CallbackContext;
use crate::context::InvocationContext;
use crate::error::classify;
use crate::model::ResourceModel;
use crate::progress::{HandlerErrorCode, ProgressEvent};
use crate::request::{Action, ResourceHandlerRequest};
use opsworkscm_api::{ApiError, OpsWorksCm};
use tracing::Instrument;

pub async fn handle(
    client: &dyn OpsWorksCm,
    request: ResourceHandlerRequest,
    callback_context: Option<CallbackContext>,
) -> ProgressEvent {
    let ctx = InvocationContext::new(client, Action::Read, request, callback_context);
    let span = ctx.span().clone();

    async move {
        match read(&ctx).await {
            Ok(event) => event,
            Err(err) if err.is_not_found() => not_found(&ctx),
            Err(err) => classify(&ctx, err),
        }
    }
    .instrument(span)
    .await
}

async fn read(ctx: &InvocationContext<'_>) -> Result<ProgressEvent, ApiError> {
    let output = ctx.client.describe_servers(Some(ctx.server_name())).await?;
    let Some(server) = output.first() else {
        return Ok(not_found(ctx));
    };

    Ok(ProgressEvent::success(ResourceModel::from_server(
        server,
        ctx.model.tags.clone(),
    )))
}

fn not_found(ctx: &InvocationContext<'_>) -> ProgressEvent {
    tracing::info!(server_name = %ctx.server_name(), "Server not found");
    ctx.failed(
        HandlerErrorCode::NotFound,
        format!("Server {} was not found.", ctx.server_name()),
    )
}
