//! Delete: start the deletion, then poll until the server is gone

use crate::callback::CallbackContext;
use crate::context::InvocationContext;
use crate::error::classify;
use crate::progress::{CALLBACK_DELAY_SECONDS, HandlerErrorCode, NO_CALLBACK_DELAY, ProgressEvent};
use crate::request::{Action, ResourceHandlerRequest};
use opsworkscm_api::{ApiError, OpsWorksCm, ServerStatus};
use regex::Regex;
use std::sync::LazyLock;
use tracing::Instrument;

/// Validation message returned while another operation holds the server.
/// Only the stable phrase is matched; the server name and request id
/// around it vary.
static OPERATION_IN_PROGRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\boperation\b.*\bis still in progress")
        .expect("operation-in-progress pattern is valid")
});

pub async fn handle(
    client: &dyn OpsWorksCm,
    request: ResourceHandlerRequest,
    callback_context: Option<CallbackContext>,
) -> ProgressEvent {
    let mut ctx = InvocationContext::new(client, Action::Delete, request, callback_context);
    let span = ctx.span().clone();

    async move {
        let result = if ctx.callback_context.stabilization_started {
            stabilize(&mut ctx).await
        } else {
            execute(&mut ctx).await
        };

        match result {
            Ok(event) => event,
            Err(err) if err.is_not_found() => server_deleted(&ctx),
            Err(ApiError::Validation(msg)) if is_operation_in_progress(&msg) => {
                tracing::info!(
                    server_name = %ctx.server_name(),
                    "Another operation is still running on the server, waiting"
                );
                ctx.in_progress(CALLBACK_DELAY_SECONDS)
            }
            Err(err) => classify(&ctx, err),
        }
    }
    .instrument(span)
    .await
}

/// Whether a validation message means "retry later" rather than "invalid"
pub fn is_operation_in_progress(message: &str) -> bool {
    OPERATION_IN_PROGRESS.is_match(message)
}

async fn execute(ctx: &mut InvocationContext<'_>) -> Result<ProgressEvent, ApiError> {
    ctx.client.delete_server(ctx.server_name()).await?;

    tracing::info!(server_name = %ctx.server_name(), "DeleteServer accepted");
    ctx.callback_context.stabilization_started = true;
    Ok(ctx.in_progress(CALLBACK_DELAY_SECONDS))
}

async fn stabilize(ctx: &mut InvocationContext<'_>) -> Result<ProgressEvent, ApiError> {
    ctx.callback_context.increment_retry_times();
    let server_name = ctx.server_name().to_string();
    tracing::debug!(
        server_name = %server_name,
        retry_times = ctx.callback_context.stabilization_retry_times,
        "Checking server deletion"
    );

    let output = ctx.client.describe_servers(Some(&server_name)).await?;

    let Some(servers) = output.servers else {
        tracing::info!("Describe result is empty, retrying");
        return Ok(ctx.in_progress(NO_CALLBACK_DELAY));
    };
    let Some(server) = servers.first() else {
        return Ok(server_deleted(ctx));
    };

    match &server.status {
        Some(ServerStatus::Deleting) => Ok(ctx.in_progress(CALLBACK_DELAY_SECONDS)),
        Some(ServerStatus::Failed) => {
            let message = format!(
                "Server {} deletion has failed with reason: {}",
                server_name,
                server.status_reason_str()
            );
            tracing::warn!(server_name = %server_name, "{}", message);
            Ok(ctx.failed(HandlerErrorCode::NotUpdatable, message))
        }
        _ => {
            tracing::warn!(
                server_name = %server_name,
                status = %server.status_str(),
                reason = %server.status_reason_str(),
                "Server is in an unexpected state during deletion, still waiting"
            );
            Ok(ctx.in_progress(CALLBACK_DELAY_SECONDS))
        }
    }
}

fn server_deleted(ctx: &InvocationContext<'_>) -> ProgressEvent {
    tracing::info!(server_name = %ctx.server_name(), "Server deleted");
    ProgressEvent::success(ctx.model.clone())
}
