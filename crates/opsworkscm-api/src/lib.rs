//! OpsWorks CM API client abstraction
//!
//! This crate defines the remote operations the `OpsWorksCM::Server`
//! resource provider needs, independent of how they are transported.
//!
//! # Operations
//!
//! - CreateServer / UpdateServer / DeleteServer
//! - DescribeServers (by name, or all servers)
//! - TagResource / UntagResource / ListTagsForResource
//!
//! Every failure is reported as one [`ApiError`] variant, so callers can
//! `match` on the failure kind instead of inspecting SDK error types.
//!
//! # Example
//!
//! ```ignore
//! use opsworkscm_api::{AwsOpsWorksCm, OpsWorksCm};
//!
//! let client = AwsOpsWorksCm::from_env(Some("us-east-1".to_string()), None).await;
//! let output = client.describe_servers(Some("my-chef-server")).await?;
//! ```

#[cfg(feature = "aws")]
pub mod aws;
pub mod client;
pub mod error;
pub mod types;

// Re-exports
#[cfg(feature = "aws")]
pub use aws::AwsOpsWorksCm;
pub use client::OpsWorksCm;
pub use error::{ApiError, Result};
pub use types::{
    CreateServerInput, DescribeServersOutput, EngineAttribute, ServerRecord, ServerStatus, Tag,
    UpdateServerInput,
};
