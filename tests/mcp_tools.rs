//! MCP tool integration tests
//!
//! Drives the tool registry and the JSON-RPC server against a mocked
//! SeaTunnel REST API.

use std::sync::Arc;

use mockito::{Matcher, Server};
use serde_json::{json, Map, Value};

use seatunnel_mcp::api::{ApiError, SeaTunnelClient};
use seatunnel_mcp::mcp::{MCPServer, ToolError, ToolRegistry};

fn registry(server: &Server) -> ToolRegistry {
    let client = SeaTunnelClient::new(server.url(), Some("k".to_string())).unwrap();
    ToolRegistry::new(Arc::new(client))
}

fn args(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

#[tokio::test]
async fn test_submit_job_tool_defaults_to_hocon() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/submit-job")
        .match_query(Matcher::Exact("jobName=t1&format=hocon".to_string()))
        .match_header("content-type", "text/plain")
        .match_header("authorization", "Bearer k")
        .match_body("env {}")
        .with_body(r#"{"jobId":"1","jobName":"t1"}"#)
        .create_async()
        .await;

    let result = registry(&server)
        .call("submit-job", args(json!({"jobContent": "env {}", "jobName": "t1"})))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result, json!({"jobId": "1", "jobName": "t1"}));
}

#[tokio::test]
async fn test_stop_job_tool_preserves_integer_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/stop-job")
        .match_body(Matcher::Json(json!({"jobId": 123, "isStopWithSavePoint": true})))
        .with_body(r#"{"jobId":123}"#)
        .create_async()
        .await;

    registry(&server)
        .call("stop-job", args(json!({"jobId": 123, "isStopWithSavePoint": true})))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_null_optional_arguments_use_defaults() {
    let mut server = Server::new_async().await;
    let submit = server
        .mock("POST", "/submit-job")
        .match_query(Matcher::Exact("format=hocon".to_string()))
        .match_body("env {}")
        .with_body(r#"{"jobId":"1"}"#)
        .create_async()
        .await;
    let stop = server
        .mock("POST", "/stop-job")
        .match_body(Matcher::Json(json!({"jobId": 123, "isStopWithSavePoint": false})))
        .with_body(r#"{"jobId":123}"#)
        .create_async()
        .await;

    let registry = registry(&server);
    registry
        .call("submit-job", args(json!({"jobContent": "env {}", "jobName": null, "format": null})))
        .await
        .unwrap();
    registry
        .call("stop-job", args(json!({"jobId": 123, "isStopWithSavePoint": null})))
        .await
        .unwrap();

    submit.assert_async().await;
    stop.assert_async().await;
}

#[tokio::test]
async fn test_get_overview_tool_passes_tags() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/overview")
        .match_query(Matcher::UrlEncoded("tag1".to_string(), "value1".to_string()))
        .with_body(r#"{"runningJobs":"0"}"#)
        .create_async()
        .await;

    registry(&server)
        .call("get-overview", args(json!({"tags": {"tag1": "value1"}})))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_tool_passes_api_failure_through() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/job-info/42")
        .with_status(404)
        .with_body("Job not found")
        .create_async()
        .await;

    let err = registry(&server).call("get-job-info", args(json!({"jobId": "42"}))).await.unwrap_err();

    match err {
        ToolError::Api(ApiError::RemoteRejected { status, body }) => {
            assert_eq!(status, 404);
            assert_eq!(body, "Job not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_update_settings_tool_retargets_later_calls() {
    let mut first = Server::new_async().await;
    let mut second = Server::new_async().await;
    let old = first.mock("GET", "/running-jobs").expect(0).create_async().await;
    let new = second
        .mock("GET", "/running-jobs")
        .match_header("authorization", "Bearer fresh")
        .with_body("[]")
        .create_async()
        .await;

    let registry = registry(&first);
    let settings = registry
        .call("update-connection-settings", args(json!({"url": second.url(), "apiKey": "fresh"})))
        .await
        .unwrap();
    assert_eq!(settings["has_api_key"], true);

    registry.call("get-running-jobs", Map::new()).await.unwrap();

    old.assert_async().await;
    new.assert_async().await;
}

#[tokio::test]
async fn test_server_reports_api_failure_as_tool_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/finished-jobs/FAILED")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let client = SeaTunnelClient::new(server.url(), None).unwrap();
    let mcp = MCPServer::new(Arc::new(client));
    let request = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "tools/call",
        "params": {"name": "get-finished-jobs", "arguments": {"state": "FAILED"}},
    });

    let response = mcp.handle_message(&request.to_string()).await.unwrap();

    let result = response.result.unwrap();
    assert_eq!(result["isError"], true);
    assert_eq!(result["structuredContent"]["error"], "RemoteRejected");
    assert_eq!(result["structuredContent"]["status"], 500);
    assert_eq!(result["structuredContent"]["body"], "boom");
}

#[tokio::test]
async fn test_server_returns_structured_success() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/running-job/7")
        .with_body(r#"{"jobId":"7","jobStatus":"RUNNING"}"#)
        .create_async()
        .await;

    let client = SeaTunnelClient::new(server.url(), None).unwrap();
    let mcp = MCPServer::new(Arc::new(client));
    let request = json!({
        "jsonrpc": "2.0",
        "id": "call-1",
        "method": "tools/call",
        "params": {"name": "get-running-job", "arguments": {"jobId": 7}},
    });

    let response = mcp.handle_message(&request.to_string()).await.unwrap();

    let result = response.result.unwrap();
    assert_eq!(result["structuredContent"]["jobStatus"], "RUNNING");
    let text = result["content"][0]["text"].as_str().unwrap();
    let parsed: Value = serde_json::from_str(text).unwrap();
    assert_eq!(parsed["jobId"], "7");
}
