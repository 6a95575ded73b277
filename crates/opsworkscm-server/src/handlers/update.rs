//! Update: tags first, then server settings, then a final describe

use crate::callback::CallbackContext;
use crate::context::InvocationContext;
use crate::error::classify;
use crate::model::{ResourceModel, tag_keys_to_remove, tags_to_apply};
use crate::progress::{NO_CALLBACK_DELAY, ProgressEvent};
use crate::request::{Action, ResourceHandlerRequest};
use crate::translator::update_server_input;
use opsworkscm_api::{ApiError, OpsWorksCm};
use tracing::Instrument;

pub async fn handle(
    client: &dyn OpsWorksCm,
    request: ResourceHandlerRequest,
    callback_context: Option<CallbackContext>,
) -> ProgressEvent {
    let mut ctx = InvocationContext::new(client, Action::Update, request, callback_context);
    let span = ctx.span().clone();

    async move {
        let result = if !ctx.callback_context.update_tag_complete {
            update_tags(&mut ctx).await
        } else if !ctx.callback_context.update_server_complete {
            update_server(&mut ctx).await
        } else {
            complete(&ctx).await
        };
        result.unwrap_or_else(|err| classify(&ctx, err))
    }
    .instrument(span)
    .await
}

async fn update_tags(ctx: &mut InvocationContext<'_>) -> Result<ProgressEvent, ApiError> {
    let previous_tags = ctx.old_model.as_ref().and_then(|m| m.tags.as_deref());
    let keys_to_remove = tag_keys_to_remove(previous_tags, ctx.model.tags.as_deref());
    let tags = tags_to_apply(ctx.model.tags.as_deref());

    if !keys_to_remove.is_empty() || !tags.is_empty() {
        let arn = resolve_server_arn(ctx).await?;

        if !keys_to_remove.is_empty() {
            tracing::info!(keys = ?keys_to_remove, "Removing tags");
            ctx.client.untag_resource(&arn, &keys_to_remove).await?;
        }
        if !tags.is_empty() {
            tracing::info!(count = tags.len(), "Applying tags");
            ctx.client.tag_resource(&arn, &tags).await?;
        }
    } else {
        tracing::debug!("No tag changes");
    }

    ctx.callback_context.update_tag_complete = true;
    Ok(ctx.in_progress(NO_CALLBACK_DELAY))
}

async fn update_server(ctx: &mut InvocationContext<'_>) -> Result<ProgressEvent, ApiError> {
    let input = update_server_input(&ctx.model);
    ctx.client.update_server(&input).await?;

    tracing::info!(server_name = %ctx.server_name(), "UpdateServer complete");
    ctx.callback_context.update_server_complete = true;
    Ok(ctx.in_progress(NO_CALLBACK_DELAY))
}

async fn complete(ctx: &InvocationContext<'_>) -> Result<ProgressEvent, ApiError> {
    let output = ctx.client.describe_servers(Some(ctx.server_name())).await?;
    let server = output
        .first()
        .ok_or_else(|| ApiError::ResourceNotFound(ctx.server_name().to_string()))?;

    tracing::info!(server_name = %ctx.server_name(), "Update complete");
    Ok(ProgressEvent::success(ResourceModel::from_server(
        server,
        ctx.model.tags.clone(),
    )))
}

async fn resolve_server_arn(ctx: &InvocationContext<'_>) -> Result<String, ApiError> {
    let output = ctx.client.describe_servers(Some(ctx.server_name())).await?;
    output
        .first()
        .and_then(|server| server.server_arn.clone())
        .ok_or_else(|| ApiError::ResourceNotFound(ctx.server_name().to_string()))
}
