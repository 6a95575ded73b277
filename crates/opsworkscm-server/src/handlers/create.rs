//! Create: start the server, then poll until it is HEALTHY

use crate::callback::CallbackContext;
use crate::context::InvocationContext;
use crate::error::classify;
use crate::model::ResourceModel;
use crate::progress::{CALLBACK_DELAY_SECONDS, HandlerErrorCode, NO_CALLBACK_DELAY, ProgressEvent};
use crate::request::{Action, ResourceHandlerRequest};
use crate::translator::create_server_input;
use opsworkscm_api::{ApiError, OpsWorksCm, ServerStatus};
use tracing::Instrument;

pub async fn handle(
    client: &dyn OpsWorksCm,
    request: ResourceHandlerRequest,
    callback_context: Option<CallbackContext>,
) -> ProgressEvent {
    let mut ctx = InvocationContext::new(client, Action::Create, request, callback_context);
    let span = ctx.span().clone();

    async move {
        let result = if ctx.callback_context.stabilization_started {
            stabilize(&mut ctx).await
        } else {
            execute(&mut ctx).await
        };
        result.unwrap_or_else(|err| classify(&ctx, err))
    }
    .instrument(span)
    .await
}

async fn execute(ctx: &mut InvocationContext<'_>) -> Result<ProgressEvent, ApiError> {
    let input = create_server_input(&ctx.model);
    ctx.client.create_server(&input).await?;

    tracing::info!(server_name = %ctx.server_name(), "CreateServer accepted");
    ctx.callback_context.stabilization_started = true;
    Ok(ctx.in_progress(CALLBACK_DELAY_SECONDS))
}

async fn stabilize(ctx: &mut InvocationContext<'_>) -> Result<ProgressEvent, ApiError> {
    ctx.callback_context.increment_retry_times();
    let server_name = ctx.server_name().to_string();
    tracing::debug!(
        server_name = %server_name,
        retry_times = ctx.callback_context.stabilization_retry_times,
        "Checking server creation"
    );

    let output = match ctx.client.describe_servers(Some(&server_name)).await {
        Ok(output) => output,
        Err(err) if err.is_not_found() => return Ok(server_deleted(ctx)),
        Err(err) => return Err(err),
    };

    let Some(servers) = output.servers else {
        tracing::info!("Describe result is empty, retrying");
        return Ok(ctx.in_progress(NO_CALLBACK_DELAY));
    };
    let Some(server) = servers.first() else {
        return Ok(server_deleted(ctx));
    };

    match &server.status {
        Some(ServerStatus::Healthy) => {
            let model = ResourceModel::from_server(server, ctx.model.tags.clone());
            tracing::info!(
                identifier = ?model.primary_identifier(),
                "Server is HEALTHY, create complete"
            );
            Ok(ProgressEvent::success(model))
        }
        Some(status) if status.is_transient() => {
            tracing::info!(server_name = %server_name, status = %status, "Server not ready yet");
            Ok(ctx.in_progress(CALLBACK_DELAY_SECONDS))
        }
        _ => {
            let status = server.status_str();
            let reason = server.status_reason_str();
            tracing::warn!(
                server_name = %server_name,
                status = %status,
                reason = %reason,
                "Server creation failed"
            );
            let message = format!(
                "Server {} creation has failed. Server should be {}, but is {}. With reason: {}",
                server_name,
                ServerStatus::Healthy,
                status,
                reason
            );
            Ok(ctx.failed(HandlerErrorCode::NotStabilized, message))
        }
    }
}

fn server_deleted(ctx: &InvocationContext<'_>) -> ProgressEvent {
    tracing::warn!(server_name = %ctx.server_name(), "Server disappeared during creation");
    ctx.failed(
        HandlerErrorCode::NotFound,
        format!("Server {} was deleted.", ctx.server_name()),
    )
}
