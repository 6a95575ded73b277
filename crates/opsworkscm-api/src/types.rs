//! Request and response types for the OpsWorks CM API
//!
//! Field names follow the service's wire format (PascalCase) so recorded
//! DescribeServers payloads can be loaded directly.

use serde::{Deserialize, Serialize};

/// Status of a server as reported by DescribeServers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServerStatus {
    BackingUp,
    ConnectionLost,
    Creating,
    Deleting,
    Modifying,
    Failed,
    Healthy,
    Running,
    Restoring,
    Setup,
    UnderMaintenance,
    Unhealthy,
    Terminated,
    /// A value this client does not know about
    Unknown(String),
}

impl ServerStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ServerStatus::BackingUp => "BACKING_UP",
            ServerStatus::ConnectionLost => "CONNECTION_LOST",
            ServerStatus::Creating => "CREATING",
            ServerStatus::Deleting => "DELETING",
            ServerStatus::Modifying => "MODIFYING",
            ServerStatus::Failed => "FAILED",
            ServerStatus::Healthy => "HEALTHY",
            ServerStatus::Running => "RUNNING",
            ServerStatus::Restoring => "RESTORING",
            ServerStatus::Setup => "SETUP",
            ServerStatus::UnderMaintenance => "UNDER_MAINTENANCE",
            ServerStatus::Unhealthy => "UNHEALTHY",
            ServerStatus::Terminated => "TERMINATED",
            ServerStatus::Unknown(s) => s,
        }
    }

    /// Statuses that mean the server is still busy with an operation and
    /// should be polled again.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ServerStatus::Creating
                | ServerStatus::BackingUp
                | ServerStatus::Modifying
                | ServerStatus::Restoring
                | ServerStatus::UnderMaintenance
                | ServerStatus::Deleting
        )
    }
}

impl From<&str> for ServerStatus {
    fn from(s: &str) -> Self {
        match s {
            "BACKING_UP" => ServerStatus::BackingUp,
            "CONNECTION_LOST" => ServerStatus::ConnectionLost,
            "CREATING" => ServerStatus::Creating,
            "DELETING" => ServerStatus::Deleting,
            "MODIFYING" => ServerStatus::Modifying,
            "FAILED" => ServerStatus::Failed,
            "HEALTHY" => ServerStatus::Healthy,
            "RUNNING" => ServerStatus::Running,
            "RESTORING" => ServerStatus::Restoring,
            "SETUP" => ServerStatus::Setup,
            "UNDER_MAINTENANCE" => ServerStatus::UnderMaintenance,
            "UNHEALTHY" => ServerStatus::Unhealthy,
            "TERMINATED" => ServerStatus::Terminated,
            other => ServerStatus::Unknown(other.to_string()),
        }
    }
}

impl From<String> for ServerStatus {
    fn from(s: String) -> Self {
        ServerStatus::from(s.as_str())
    }
}

impl From<ServerStatus> for String {
    fn from(status: ServerStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key/value tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Engine specific name/value attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EngineAttribute {
    pub name: Option<String>,
    pub value: Option<String>,
}

/// One server entry of a DescribeServers response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServerRecord {
    pub server_name: Option<String>,
    pub status: Option<ServerStatus>,
    pub status_reason: Option<String>,
    pub server_arn: Option<String>,
    pub endpoint: Option<String>,
    pub engine: Option<String>,
    pub engine_model: Option<String>,
    pub engine_version: Option<String>,
    pub engine_attributes: Vec<EngineAttribute>,
    pub instance_profile_arn: Option<String>,
    pub instance_type: Option<String>,
    pub key_pair: Option<String>,
    pub service_role_arn: Option<String>,
    pub subnet_ids: Vec<String>,
    pub security_group_ids: Vec<String>,
    pub backup_retention_count: Option<i32>,
    pub disable_automated_backup: Option<bool>,
    pub associate_public_ip_address: Option<bool>,
    pub custom_domain: Option<String>,
    pub preferred_backup_window: Option<String>,
    pub preferred_maintenance_window: Option<String>,
}

impl ServerRecord {
    pub fn status_str(&self) -> &str {
        self.status.as_ref().map(ServerStatus::as_str).unwrap_or("UNKNOWN")
    }

    pub fn status_reason_str(&self) -> &str {
        self.status_reason.as_deref().unwrap_or_default()
    }
}

/// DescribeServers response
///
/// `servers` is `None` when the service answered without a server list at
/// all, which callers treat differently from an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeServersOutput {
    pub servers: Option<Vec<ServerRecord>>,
}

impl DescribeServersOutput {
    pub fn with_servers(servers: Vec<ServerRecord>) -> Self {
        Self {
            servers: Some(servers),
        }
    }

    /// First entry, if the response carried one
    pub fn first(&self) -> Option<&ServerRecord> {
        self.servers.as_ref().and_then(|s| s.first())
    }
}

/// CreateServer request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateServerInput {
    pub server_name: String,
    pub engine: Option<String>,
    pub engine_model: Option<String>,
    pub engine_version: Option<String>,
    pub engine_attributes: Vec<EngineAttribute>,
    pub instance_profile_arn: Option<String>,
    pub instance_type: Option<String>,
    pub key_pair: Option<String>,
    pub service_role_arn: Option<String>,
    pub subnet_ids: Vec<String>,
    pub security_group_ids: Vec<String>,
    pub backup_id: Option<String>,
    pub backup_retention_count: Option<i32>,
    pub disable_automated_backup: Option<bool>,
    pub associate_public_ip_address: Option<bool>,
    pub custom_domain: Option<String>,
    pub custom_certificate: Option<String>,
    pub custom_private_key: Option<String>,
    pub preferred_backup_window: Option<String>,
    pub preferred_maintenance_window: Option<String>,
    pub tags: Vec<Tag>,
}

/// UpdateServer request (the mutable subset of server settings)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateServerInput {
    pub server_name: String,
    pub disable_automated_backup: Option<bool>,
    pub backup_retention_count: Option<i32>,
    pub preferred_backup_window: Option<String>,
    pub preferred_maintenance_window: Option<String>,
}
