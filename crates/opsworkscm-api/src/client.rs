//! OpsWorks CM client trait definition

use crate::error::Result;
use crate::types::{CreateServerInput, DescribeServersOutput, Tag, UpdateServerInput};
use async_trait::async_trait;

/// OpsWorks CM API abstraction trait
///
/// The resource handlers only talk to the service through this trait. The
/// SDK backed implementation lives behind the `aws` feature; tests provide
/// their own recording implementation.
#[async_trait]
pub trait OpsWorksCm: Send + Sync {
    /// Start creating a server. Returns as soon as the request is accepted.
    async fn create_server(&self, input: &CreateServerInput) -> Result<()>;

    /// Describe one server by name, or every server when `server_name` is `None`.
    async fn describe_servers(&self, server_name: Option<&str>) -> Result<DescribeServersOutput>;

    /// Update the mutable settings of a server
    async fn update_server(&self, input: &UpdateServerInput) -> Result<()>;

    /// Start deleting a server
    async fn delete_server(&self, server_name: &str) -> Result<()>;

    /// Add or overwrite tags on a resource
    async fn tag_resource(&self, resource_arn: &str, tags: &[Tag]) -> Result<()>;

    /// Remove tags from a resource by key
    async fn untag_resource(&self, resource_arn: &str, tag_keys: &[String]) -> Result<()>;

    /// List the tags attached to a resource
    async fn list_tags_for_resource(&self, resource_arn: &str) -> Result<Vec<Tag>>;
}
