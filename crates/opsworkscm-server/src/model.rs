//! `OpsWorksCM::Server` resource model

use opsworkscm_api::{EngineAttribute, ServerRecord, Tag};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

pub const TYPE_NAME: &str = "OpsWorksCM::Server";
pub const IDENTIFIER_KEY_SERVER_NAME: &str = "/properties/ServerName";

/// Desired or observed state of one OpsWorks CM server.
///
/// Property names follow the CloudFormation resource schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,

    /// Read-only: ARN reported by the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,

    /// Read-only: DNS name of the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    /// Create-only, write-only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_attributes: Option<Vec<EngineAttribute>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_profile_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_pair: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_automated_backup: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associate_public_ip_address: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_certificate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_private_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_backup_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl ResourceModel {
    /// Server name, or an empty string before identity derivation ran
    pub fn server_name(&self) -> &str {
        self.server_name.as_deref().unwrap_or_default()
    }

    /// Primary identifier as CloudFormation expects it
    pub fn primary_identifier(&self) -> BTreeMap<String, String> {
        let mut identifier = BTreeMap::new();
        if let Some(name) = &self.server_name {
            identifier.insert(IDENTIFIER_KEY_SERVER_NAME.to_string(), name.clone());
        }
        identifier
    }

    /// Build a model from a described server.
    ///
    /// Secrets and create-only inputs (engine attributes, custom
    /// certificate/private key, backup id) are never echoed back.
    pub fn from_server(server: &ServerRecord, tags: Option<Vec<Tag>>) -> Self {
        Self {
            server_name: server.server_name.clone(),
            arn: server.server_arn.clone(),
            endpoint: server.endpoint.clone(),
            engine: server.engine.clone(),
            engine_model: server.engine_model.clone(),
            engine_version: server.engine_version.clone(),
            instance_profile_arn: server.instance_profile_arn.clone(),
            instance_type: server.instance_type.clone(),
            key_pair: server.key_pair.clone(),
            service_role_arn: server.service_role_arn.clone(),
            subnet_ids: Some(server.subnet_ids.clone()),
            security_group_ids: Some(server.security_group_ids.clone()),
            backup_retention_count: server.backup_retention_count,
            disable_automated_backup: server.disable_automated_backup,
            associate_public_ip_address: server.associate_public_ip_address,
            custom_domain: server.custom_domain.clone(),
            preferred_backup_window: server.preferred_backup_window.clone(),
            preferred_maintenance_window: server.preferred_maintenance_window.clone(),
            tags,
            ..Default::default()
        }
    }
}

/// Keys present in `previous` but absent from `desired`
pub fn tag_keys_to_remove(previous: Option<&[Tag]>, desired: Option<&[Tag]>) -> Vec<String> {
    let desired_keys: HashSet<&str> = desired
        .unwrap_or_default()
        .iter()
        .map(|t| t.key.as_str())
        .collect();

    previous
        .unwrap_or_default()
        .iter()
        .filter(|t| !desired_keys.contains(t.key.as_str()))
        .map(|t| t.key.clone())
        .collect()
}

/// Tags to (re)apply: the whole desired set, so changed values are resent
pub fn tags_to_apply(desired: Option<&[Tag]>) -> Vec<Tag> {
    desired.unwrap_or_default().to_vec()
}
