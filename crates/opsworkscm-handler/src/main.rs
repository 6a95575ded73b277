mod config;

use anyhow::Context;
use clap::Parser;
use config::HandlerConfig;
use opsworkscm_api::AwsOpsWorksCm;
use opsworkscm_server::{HandlerErrorCode, HandlerInvocation, ProgressEvent, invoke};
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries only the progress event
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(false)
        .init();

    let config = HandlerConfig::parse();
    let input = read_input(config.input.as_deref()).await?;

    let event = run(&config, &input).await;
    println!("{}", serde_json::to_string(&event)?);
    Ok(())
}

async fn run(config: &HandlerConfig, input: &str) -> ProgressEvent {
    let invocation = match HandlerInvocation::from_json(input) {
        Ok(invocation) => invocation,
        Err(err) => {
            tracing::error!(error = %err, "Rejecting invocation");
            return ProgressEvent::failed(
                None,
                None,
                HandlerErrorCode::InvalidRequest,
                format!("Invalid request provided: {}", err),
            );
        }
    };

    let region = config.effective_region(invocation.request.region.as_deref());
    let client = AwsOpsWorksCm::from_env(region, config.endpoint_url.clone()).await;

    let event = invoke(&client, invocation).await;
    tracing::info!(status = ?event.status, error_code = ?event.error_code, "Invocation finished");
    event
}

async fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read invocation file {}", path.display())),
        None => {
            let mut input = String::new();
            tokio::io::stdin()
                .read_to_string(&mut input)
                .await
                .context("Failed to read invocation from stdin")?;
            Ok(input)
        }
    }
}
