//! List: every server visible to the account

use crate::callback::CallbackContext;
use crate::context::InvocationContext;
use crate::error::classify;
use crate::model::ResourceModel;
use crate::progress::{NO_CALLBACK_DELAY, ProgressEvent};
use crate::request::{Action, ResourceHandlerRequest};
use opsworkscm_api::{ApiError, OpsWorksCm, ServerRecord, Tag};
use tracing::Instrument;

pub async fn handle(
    client: &dyn OpsWorksCm,
    request: ResourceHandlerRequest,
    callback_context: Option<CallbackContext>,
) -> ProgressEvent {
    let ctx = InvocationContext::unnamed(client, Action::List, request, callback_context);
    let span = ctx.span().clone();

    async move { list(&ctx).await.unwrap_or_else(|err| classify(&ctx, err)) }
        .instrument(span)
        .await
}

async fn list(ctx: &InvocationContext<'_>) -> Result<ProgressEvent, ApiError> {
    let output = ctx.client.describe_servers(None).await?;
    let Some(servers) = output.servers else {
        tracing::info!("Describe result is empty, retrying");
        return Ok(ctx.in_progress(NO_CALLBACK_DELAY));
    };

    let mut models = Vec::with_capacity(servers.len());
    for server in &servers {
        let tags = server_tags(ctx.client, server).await;
        models.push(ResourceModel::from_server(server, tags));
    }

    tracing::info!(count = models.len(), "Listed servers");
    Ok(ProgressEvent::success_list(models))
}

/// Tags of one server. Lookup failures only cost the entry its tags.
async fn server_tags(client: &dyn OpsWorksCm, server: &ServerRecord) -> Option<Vec<Tag>> {
    let arn = server.server_arn.as_deref()?;
    match client.list_tags_for_resource(arn).await {
        Ok(tags) => Some(tags),
        Err(err) => {
            tracing::warn!(
                server_name = ?server.server_name,
                error = %err,
                "Could not list tags for server"
            );
            None
        }
    }
}
