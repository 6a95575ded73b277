mod common;

use common::*;
use opsworkscm_api::{ApiError, DescribeServersOutput, ServerStatus};
use opsworkscm_server::{
    Action, HandlerErrorCode, HandlerInvocation, NO_CALLBACK_DELAY, OperationStatus,
    ResourceModel, invoke,
};

fn list_invocation() -> HandlerInvocation {
    HandlerInvocation {
        action: Action::List,
        request: request(ResourceModel::default()),
        callback_context: None,
    }
}

#[tokio::test]
async fn test_list_maps_every_server_with_tags() {
    let client = MockOpsWorksCm::new();
    let first = server("chef-a", ServerStatus::Healthy);
    let second = server("puppet-b", ServerStatus::Creating);
    let first_arn = first.server_arn.clone().unwrap();
    let second_arn = second.server_arn.clone().unwrap();
    client.describe_returns(Ok(DescribeServersOutput::with_servers(vec![first, second])));
    client.tags_for(&first_arn, Ok(tags(&[("team", "a")])));

    let event = invoke(&client, list_invocation()).await;

    assert_eq!(event.status, OperationStatus::Success);
    let models = event.resource_models.unwrap();
    assert_eq!(models.len(), 2);
    assert_eq!(models[0].server_name.as_deref(), Some("chef-a"));
    assert_eq!(models[0].endpoint.as_deref(), Some("chef-a.us-east-1.opsworks-cm.io"));
    assert_eq!(models[0].tags, Some(tags(&[("team", "a")])));
    assert_eq!(models[1].server_name.as_deref(), Some("puppet-b"));
    assert_eq!(models[1].tags, Some(vec![]));

    assert_eq!(
        client.calls(),
        vec![
            Call::DescribeServers(None),
            Call::ListTagsForResource(first_arn),
            Call::ListTagsForResource(second_arn),
        ]
    );
}

#[tokio::test]
async fn test_list_tag_failure_is_not_fatal() {
    let client = MockOpsWorksCm::new();
    let only = server("chef-a", ServerStatus::Healthy);
    let arn = only.server_arn.clone().unwrap();
    client.describe_server(only);
    client.tags_for(&arn, Err(ApiError::Service("AccessDeniedException: no".to_string())));

    let event = invoke(&client, list_invocation()).await;

    assert_eq!(event.status, OperationStatus::Success);
    let models = event.resource_models.unwrap();
    assert_eq!(models.len(), 1);
    assert!(models[0].tags.is_none());
}

#[tokio::test]
async fn test_list_empty_account() {
    let client = MockOpsWorksCm::new();

    let event = invoke(&client, list_invocation()).await;

    assert_eq!(event.status, OperationStatus::Success);
    assert_eq!(event.resource_models, Some(vec![]));
}

#[tokio::test]
async fn test_list_missing_server_list_retries_immediately() {
    let client = MockOpsWorksCm::new();
    client.describe_returns(Ok(DescribeServersOutput::default()));

    let event = invoke(&client, list_invocation()).await;

    assert_eq!(event.status, OperationStatus::InProgress);
    assert_eq!(event.callback_delay_seconds, NO_CALLBACK_DELAY);
    // no name is made up for the request model
    assert_eq!(event.resource_model, Some(ResourceModel::default()));
}

#[tokio::test]
async fn test_list_describe_failure() {
    let client = MockOpsWorksCm::new();
    client.fail(
        "describe_servers",
        ApiError::Validation("bad filter".to_string()),
    );

    let event = invoke(&client, list_invocation()).await;

    assert_eq!(event.status, OperationStatus::Failed);
    assert_eq!(event.error_code, Some(HandlerErrorCode::InvalidRequest));
}
