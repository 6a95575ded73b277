use async_trait::async_trait;
use opsworkscm_api::{
    ApiError, CreateServerInput, DescribeServersOutput, OpsWorksCm, ServerRecord, ServerStatus,
    Tag, UpdateServerInput,
};
use opsworkscm_server::{ResourceHandlerRequest, ResourceModel};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

#[allow(dead_code)]
pub const SERVER_NAME: &str = "ChefServer-abcdefghijkl";
#[allow(dead_code)]
pub const SERVER_ARN: &str = "arn:aws:opsworks-cm:us-east-1:123456789012:server/ChefServer-abcdefghijkl";

/// Remote call recorded by [`MockOpsWorksCm`]
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum Call {
    CreateServer(CreateServerInput),
    DescribeServers(Option<String>),
    UpdateServer(UpdateServerInput),
    DeleteServer(String),
    TagResource(String, Vec<Tag>),
    UntagResource(String, Vec<String>),
    ListTagsForResource(String),
}

#[derive(Default)]
struct MockState {
    describe: VecDeque<Result<DescribeServersOutput, ApiError>>,
    errors: HashMap<&'static str, ApiError>,
    tags: HashMap<String, Result<Vec<Tag>, ApiError>>,
    calls: Vec<Call>,
}

/// Recording OpsWorks CM client with scripted responses
#[derive(Default)]
pub struct MockOpsWorksCm {
    state: Mutex<MockState>,
}

#[allow(dead_code)]
impl MockOpsWorksCm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next DescribeServers response. The last queued response
    /// repeats once the queue is drained.
    pub fn describe_returns(&self, result: Result<DescribeServersOutput, ApiError>) -> &Self {
        self.state.lock().unwrap().describe.push_back(result);
        self
    }

    pub fn describe_server(&self, server: ServerRecord) -> &Self {
        self.describe_returns(Ok(DescribeServersOutput::with_servers(vec![server])))
    }

    /// Make every call to `operation` fail with `err`
    pub fn fail(&self, operation: &'static str, err: ApiError) -> &Self {
        self.state.lock().unwrap().errors.insert(operation, err);
        self
    }

    pub fn tags_for(&self, arn: &str, result: Result<Vec<Tag>, ApiError>) -> &Self {
        self.state
            .lock()
            .unwrap()
            .tags
            .insert(arn.to_string(), result);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_names(&self) -> Vec<&'static str> {
        self.calls()
            .iter()
            .map(|call| match call {
                Call::CreateServer(_) => "create_server",
                Call::DescribeServers(_) => "describe_servers",
                Call::UpdateServer(_) => "update_server",
                Call::DeleteServer(_) => "delete_server",
                Call::TagResource(..) => "tag_resource",
                Call::UntagResource(..) => "untag_resource",
                Call::ListTagsForResource(_) => "list_tags_for_resource",
            })
            .collect()
    }

    fn record(&self, operation: &'static str, call: Call) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        match state.errors.get(operation) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl OpsWorksCm for MockOpsWorksCm {
    async fn create_server(&self, input: &CreateServerInput) -> Result<(), ApiError> {
        self.record("create_server", Call::CreateServer(input.clone()))
    }

    async fn describe_servers(
        &self,
        server_name: Option<&str>,
    ) -> Result<DescribeServersOutput, ApiError> {
        self.record(
            "describe_servers",
            Call::DescribeServers(server_name.map(str::to_string)),
        )?;

        let mut state = self.state.lock().unwrap();
        if state.describe.len() > 1 {
            state.describe.pop_front().unwrap()
        } else {
            state
                .describe
                .front()
                .cloned()
                .unwrap_or_else(|| Ok(DescribeServersOutput::with_servers(vec![])))
        }
    }

    async fn update_server(&self, input: &UpdateServerInput) -> Result<(), ApiError> {
        self.record("update_server", Call::UpdateServer(input.clone()))
    }

    async fn delete_server(&self, server_name: &str) -> Result<(), ApiError> {
        self.record("delete_server", Call::DeleteServer(server_name.to_string()))
    }

    async fn tag_resource(&self, resource_arn: &str, tags: &[Tag]) -> Result<(), ApiError> {
        self.record(
            "tag_resource",
            Call::TagResource(resource_arn.to_string(), tags.to_vec()),
        )
    }

    async fn untag_resource(&self, resource_arn: &str, tag_keys: &[String]) -> Result<(), ApiError> {
        self.record(
            "untag_resource",
            Call::UntagResource(resource_arn.to_string(), tag_keys.to_vec()),
        )
    }

    async fn list_tags_for_resource(&self, resource_arn: &str) -> Result<Vec<Tag>, ApiError> {
        self.record(
            "list_tags_for_resource",
            Call::ListTagsForResource(resource_arn.to_string()),
        )?;

        let state = self.state.lock().unwrap();
        state
            .tags
            .get(resource_arn)
            .cloned()
            .unwrap_or_else(|| Ok(vec![]))
    }
}

#[allow(dead_code)]
pub fn server(name: &str, status: ServerStatus) -> ServerRecord {
    ServerRecord {
        server_name: Some(name.to_string()),
        status: Some(status),
        server_arn: Some(format!(
            "arn:aws:opsworks-cm:us-east-1:123456789012:server/{}",
            name
        )),
        endpoint: Some(format!("{}.us-east-1.opsworks-cm.io", name.to_lowercase())),
        engine: Some("ChefAutomate".to_string()),
        engine_model: Some("Single".to_string()),
        engine_version: Some("2".to_string()),
        instance_type: Some("m5.large".to_string()),
        subnet_ids: vec!["subnet-0a1b2c3d".to_string()],
        backup_retention_count: Some(10),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn failed_server(name: &str, status: ServerStatus, reason: &str) -> ServerRecord {
    ServerRecord {
        status_reason: Some(reason.to_string()),
        ..server(name, status)
    }
}

#[allow(dead_code)]
pub fn model_named(name: &str) -> ResourceModel {
    ResourceModel {
        server_name: Some(name.to_string()),
        engine: Some("ChefAutomate".to_string()),
        instance_profile_arn: Some("arn:aws:iam::123456789012:instance-profile/chef".to_string()),
        instance_type: Some("m5.large".to_string()),
        service_role_arn: Some("arn:aws:iam::123456789012:role/opsworks-cm".to_string()),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn tags(pairs: &[(&str, &str)]) -> Vec<Tag> {
    pairs.iter().map(|(k, v)| Tag::new(*k, *v)).collect()
}

#[allow(dead_code)]
pub fn request(desired: ResourceModel) -> ResourceHandlerRequest {
    ResourceHandlerRequest {
        desired_resource_state: desired,
        previous_resource_state: None,
        logical_resource_identifier: "ChefServer".to_string(),
        client_request_token: "5d8ee2ae-cd34-4d1f-a4ea-d6c8b5f61d2a".to_string(),
        region: Some("us-east-1".to_string()),
    }
}

#[allow(dead_code)]
pub fn update_request(previous: ResourceModel, desired: ResourceModel) -> ResourceHandlerRequest {
    ResourceHandlerRequest {
        previous_resource_state: Some(previous),
        ..request(desired)
    }
}
