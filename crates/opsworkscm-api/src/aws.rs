//! OpsWorks CM client backed by the official AWS SDK
//!
//! Uses `aws-sdk-opsworkscm` with the standard credential provider chain.
//! SDK errors are reduced to [`ApiError`] by their modeled error code.

use async_trait::async_trait;
use aws_sdk_opsworkscm::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_opsworkscm::types as sdk;

use crate::client::OpsWorksCm;
use crate::error::{ApiError, Result};
use crate::types::{
    CreateServerInput, DescribeServersOutput, EngineAttribute, ServerRecord, ServerStatus, Tag,
    UpdateServerInput,
};

/// [`OpsWorksCm`] implementation talking to the real service
#[derive(Debug, Clone)]
pub struct AwsOpsWorksCm {
    client: aws_sdk_opsworkscm::Client,
}

impl AwsOpsWorksCm {
    /// Build a client from the environment's AWS configuration.
    ///
    /// `region` overrides the region resolved from the environment, and
    /// `endpoint_url` points the client at a non-default endpoint.
    pub async fn from_env(region: Option<String>, endpoint_url: Option<String>) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = region.clone() {
            loader = loader.region(aws_config::Region::new(region));
        }
        if let Some(url) = endpoint_url.as_deref() {
            loader = loader.endpoint_url(url);
        }

        let sdk_config = loader.load().await;
        tracing::info!(
            region = ?sdk_config.region().map(|r| r.to_string()),
            custom_endpoint = endpoint_url.is_some(),
            "OpsWorks CM client initialized"
        );

        Self::from_client(aws_sdk_opsworkscm::Client::new(&sdk_config))
    }

    pub fn from_client(client: aws_sdk_opsworkscm::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OpsWorksCm for AwsOpsWorksCm {
    async fn create_server(&self, input: &CreateServerInput) -> Result<()> {
        let tags = input
            .tags
            .iter()
            .map(to_sdk_tag)
            .collect::<Result<Vec<_>>>()?;
        let engine_attributes = input
            .engine_attributes
            .iter()
            .map(|attr| {
                sdk::EngineAttribute::builder()
                    .set_name(attr.name.clone())
                    .set_value(attr.value.clone())
                    .build()
            })
            .collect::<Vec<_>>();

        self.client
            .create_server()
            .server_name(&input.server_name)
            .set_engine(input.engine.clone())
            .set_engine_model(input.engine_model.clone())
            .set_engine_version(input.engine_version.clone())
            .set_engine_attributes(Some(engine_attributes))
            .set_instance_profile_arn(input.instance_profile_arn.clone())
            .set_instance_type(input.instance_type.clone())
            .set_key_pair(input.key_pair.clone())
            .set_service_role_arn(input.service_role_arn.clone())
            .set_subnet_ids(Some(input.subnet_ids.clone()))
            .set_security_group_ids(Some(input.security_group_ids.clone()))
            .set_backup_id(input.backup_id.clone())
            .set_backup_retention_count(input.backup_retention_count)
            .set_disable_automated_backup(input.disable_automated_backup)
            .set_associate_public_ip_address(input.associate_public_ip_address)
            .set_custom_domain(input.custom_domain.clone())
            .set_custom_certificate(input.custom_certificate.clone())
            .set_custom_private_key(input.custom_private_key.clone())
            .set_preferred_backup_window(input.preferred_backup_window.clone())
            .set_preferred_maintenance_window(input.preferred_maintenance_window.clone())
            .set_tags(Some(tags))
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(())
    }

    async fn describe_servers(&self, server_name: Option<&str>) -> Result<DescribeServersOutput> {
        let output = self
            .client
            .describe_servers()
            .set_server_name(server_name.map(str::to_string))
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(DescribeServersOutput {
            servers: output
                .servers
                .map(|servers| servers.into_iter().map(from_sdk_server).collect()),
        })
    }

    async fn update_server(&self, input: &UpdateServerInput) -> Result<()> {
        self.client
            .update_server()
            .server_name(&input.server_name)
            .set_disable_automated_backup(input.disable_automated_backup)
            .set_backup_retention_count(input.backup_retention_count)
            .set_preferred_backup_window(input.preferred_backup_window.clone())
            .set_preferred_maintenance_window(input.preferred_maintenance_window.clone())
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(())
    }

    async fn delete_server(&self, server_name: &str) -> Result<()> {
        self.client
            .delete_server()
            .server_name(server_name)
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(())
    }

    async fn tag_resource(&self, resource_arn: &str, tags: &[Tag]) -> Result<()> {
        let tags = tags.iter().map(to_sdk_tag).collect::<Result<Vec<_>>>()?;

        self.client
            .tag_resource()
            .resource_arn(resource_arn)
            .set_tags(Some(tags))
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(())
    }

    async fn untag_resource(&self, resource_arn: &str, tag_keys: &[String]) -> Result<()> {
        self.client
            .untag_resource()
            .resource_arn(resource_arn)
            .set_tag_keys(Some(tag_keys.to_vec()))
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(())
    }

    async fn list_tags_for_resource(&self, resource_arn: &str) -> Result<Vec<Tag>> {
        let output = self
            .client
            .list_tags_for_resource()
            .resource_arn(resource_arn)
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(output
            .tags
            .unwrap_or_default()
            .into_iter()
            .map(|tag| Tag::new(tag.key, tag.value))
            .collect())
    }
}

/// Reduce an SDK error to an [`ApiError`] using its modeled error code.
fn map_sdk_error<E, R>(err: SdkError<E, R>) -> ApiError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let code = err.code().map(str::to_string);
    let message = err.message().unwrap_or_default().to_string();
    match code.as_deref() {
        Some("ResourceAlreadyExistsException") => ApiError::ResourceAlreadyExists(message),
        Some("ResourceNotFoundException") => ApiError::ResourceNotFound(message),
        Some("ValidationException") => ApiError::Validation(message),
        Some("LimitExceededException") => ApiError::LimitExceeded(message),
        Some("InvalidStateException") => ApiError::InvalidState(message),
        Some(code) => ApiError::Service(format!("{}: {}", code, message)),
        None => ApiError::Unhandled(DisplayErrorContext(err).to_string()),
    }
}

fn to_sdk_tag(tag: &Tag) -> Result<sdk::Tag> {
    sdk::Tag::builder()
        .key(&tag.key)
        .value(&tag.value)
        .build()
        .map_err(|e| ApiError::Validation(e.to_string()))
}

fn from_sdk_server(server: sdk::Server) -> ServerRecord {
    ServerRecord {
        server_name: server.server_name,
        status: server.status.map(|s| ServerStatus::from(s.as_str())),
        status_reason: server.status_reason,
        server_arn: server.server_arn,
        endpoint: server.endpoint,
        engine: server.engine,
        engine_model: server.engine_model,
        engine_version: server.engine_version,
        engine_attributes: server
            .engine_attributes
            .unwrap_or_default()
            .into_iter()
            .map(|attr| EngineAttribute {
                name: attr.name,
                value: attr.value,
            })
            .collect(),
        instance_profile_arn: server.instance_profile_arn,
        instance_type: server.instance_type,
        key_pair: server.key_pair,
        service_role_arn: server.service_role_arn,
        subnet_ids: server.subnet_ids.unwrap_or_default(),
        security_group_ids: server.security_group_ids.unwrap_or_default(),
        backup_retention_count: server.backup_retention_count,
        disable_automated_backup: server.disable_automated_backup,
        associate_public_ip_address: server.associate_public_ip_address,
        custom_domain: server.custom_domain,
        preferred_backup_window: server.preferred_backup_window,
        preferred_maintenance_window: server.preferred_maintenance_window,
    }
}
