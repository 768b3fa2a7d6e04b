//! MCP tools for the SeaTunnel REST API.
//!
//! Each tool wraps exactly one [`SeaTunnelClient`] method. The tool-facing
//! parameter names are mapped onto client arguments by the `*Args` structs
//! below; results and errors pass through untouched.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use super::protocol::{MCPTool, MCPToolInputSchema};
use crate::api::{
    ApiError, ApiKeyUpdate, JobFormat, JobId, SeaTunnelClient, SubmitJobOptions, UploadSource,
};

/// Error type for tool invocations.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: String, message: String },

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// A named, self-describing operation exposed to MCP clients.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Stable kebab-case name.
    fn name(&self) -> &'static str;

    /// One-line description of what the tool does.
    fn description(&self) -> &'static str;

    /// JSON Schema of the accepted arguments.
    fn input_schema(&self) -> MCPToolInputSchema;

    /// Run the tool.
    async fn call(&self, arguments: Map<String, Value>) -> Result<Value, ToolError>;

    /// Descriptor advertised in `tools/list`.
    fn definition(&self) -> MCPTool {
        MCPTool {
            name: self.name().to_string(),
            description: Some(self.description().to_string()),
            input_schema: self.input_schema(),
        }
    }
}

/// Deserialize tool arguments into the tool's parameter struct.
fn parse_arguments<T: DeserializeOwned>(
    tool: &str,
    arguments: Map<String, Value>,
) -> Result<T, ToolError> {
    serde_json::from_value(Value::Object(arguments)).map_err(|e| ToolError::InvalidArguments {
        tool: tool.to_string(),
        message: e.to_string(),
    })
}

fn job_id_schema(description: &str) -> Value {
    json!({
        "type": ["string", "integer"],
        "description": description,
    })
}

fn format_schema(description: &str) -> Value {
    json!({
        "type": "string",
        "enum": ["hocon", "json", "yaml"],
        "description": description,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NoArgs {}

// ============================================================================
// Connection settings
// ============================================================================

/// `get-connection-settings`
pub struct GetConnectionSettingsTool {
    client: Arc<SeaTunnelClient>,
}

#[async_trait]
impl Tool for GetConnectionSettingsTool {
    fn name(&self) -> &'static str {
        "get-connection-settings"
    }

    fn description(&self) -> &'static str {
        "Get current SeaTunnel connection URL and API key status"
    }

    fn input_schema(&self) -> MCPToolInputSchema {
        MCPToolInputSchema::empty()
    }

    async fn call(&self, arguments: Map<String, Value>) -> Result<Value, ToolError> {
        let NoArgs {} = parse_arguments(self.name(), arguments)?;
        Ok(json!(self.client.get_connection_settings()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct UpdateConnectionSettingsArgs {
    url: Option<String>,
    api_key: Option<String>,
}

/// `update-connection-settings`
pub struct UpdateConnectionSettingsTool {
    client: Arc<SeaTunnelClient>,
}

#[async_trait]
impl Tool for UpdateConnectionSettingsTool {
    fn name(&self) -> &'static str {
        "update-connection-settings"
    }

    fn description(&self) -> &'static str {
        "Update URL and/or API key to connect to a different SeaTunnel instance"
    }

    fn input_schema(&self) -> MCPToolInputSchema {
        MCPToolInputSchema::object(
            json!({
                "url": {
                    "type": "string",
                    "description": "New base URL for the SeaTunnel REST API",
                },
                "apiKey": {
                    "type": "string",
                    "description": "New API key for authentication; an empty string removes the key",
                },
            }),
            &[],
        )
    }

    async fn call(&self, arguments: Map<String, Value>) -> Result<Value, ToolError> {
        let args: UpdateConnectionSettingsArgs = parse_arguments(self.name(), arguments)?;
        let api_key = match args.api_key {
            None => ApiKeyUpdate::Keep,
            Some(key) if key.is_empty() => ApiKeyUpdate::Clear,
            Some(key) => ApiKeyUpdate::Set(key),
        };
        let settings = self.client.update_connection_settings(args.url, api_key)?;
        Ok(json!(settings))
    }
}

// ============================================================================
// Job submission
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SubmitJobArgs {
    job_content: String,
    job_name: Option<String>,
    job_id: Option<JobId>,
    is_start_with_save_point: Option<bool>,
    format: Option<JobFormat>,
}

/// `submit-job`
pub struct SubmitJobTool {
    client: Arc<SeaTunnelClient>,
}

#[async_trait]
impl Tool for SubmitJobTool {
    fn name(&self) -> &'static str {
        "submit-job"
    }

    fn description(&self) -> &'static str {
        "Submit a new job to the SeaTunnel cluster with configuration content"
    }

    fn input_schema(&self) -> MCPToolInputSchema {
        MCPToolInputSchema::object(
            json!({
                "jobContent": {
                    "type": "string",
                    "description": "Job configuration content in the given format",
                },
                "jobName": {"type": "string", "description": "Optional job name"},
                "jobId": job_id_schema("Optional job ID"),
                "isStartWithSavePoint": {
                    "type": "boolean",
                    "description": "Whether to start the job from a savepoint",
                },
                "format": format_schema("Job configuration format (default: hocon)"),
            }),
            &["jobContent"],
        )
    }

    async fn call(&self, arguments: Map<String, Value>) -> Result<Value, ToolError> {
        let args: SubmitJobArgs = parse_arguments(self.name(), arguments)?;
        let options = SubmitJobOptions {
            job_name: args.job_name,
            job_id: args.job_id,
            start_with_save_point: args.is_start_with_save_point,
            format: Some(args.format.unwrap_or_default()),
        };
        Ok(self.client.submit_job(args.job_content, &options).await?)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SubmitJobsArgs {
    request_body: Value,
}

/// `submit-jobs`
pub struct SubmitJobsTool {
    client: Arc<SeaTunnelClient>,
}

#[async_trait]
impl Tool for SubmitJobsTool {
    fn name(&self) -> &'static str {
        "submit-jobs"
    }

    fn description(&self) -> &'static str {
        "Submit multiple jobs in batch; the request body is sent to the API unchanged"
    }

    fn input_schema(&self) -> MCPToolInputSchema {
        MCPToolInputSchema::object(
            json!({
                "requestBody": {
                    "description": "Request body for /submit-jobs, usually a list of job \
                                    objects with params, env, source, transform and sink",
                },
            }),
            &["requestBody"],
        )
    }

    async fn call(&self, arguments: Map<String, Value>) -> Result<Value, ToolError> {
        let args: SubmitJobsArgs = parse_arguments(self.name(), arguments)?;
        Ok(self.client.submit_jobs(args.request_body).await?)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SubmitJobUploadArgs {
    config_file: PathBuf,
    job_name: Option<String>,
    job_id: Option<JobId>,
    is_start_with_save_point: Option<bool>,
    format: Option<JobFormat>,
}

/// `submit-job-upload`
pub struct SubmitJobUploadTool {
    client: Arc<SeaTunnelClient>,
}

#[async_trait]
impl Tool for SubmitJobUploadTool {
    fn name(&self) -> &'static str {
        "submit-job-upload"
    }

    fn description(&self) -> &'static str {
        "Submit a new job by uploading a configuration file from the server's file system"
    }

    fn input_schema(&self) -> MCPToolInputSchema {
        MCPToolInputSchema::object(
            json!({
                "configFile": {
                    "type": "string",
                    "description": "Path of the job configuration file",
                },
                "jobName": {"type": "string", "description": "Optional job name"},
                "jobId": job_id_schema("Optional job ID"),
                "isStartWithSavePoint": {
                    "type": "boolean",
                    "description": "Whether to start the job from a savepoint",
                },
                "format": format_schema(
                    "Job configuration format; inferred from .json/.yaml/.yml when omitted",
                ),
            }),
            &["configFile"],
        )
    }

    async fn call(&self, arguments: Map<String, Value>) -> Result<Value, ToolError> {
        let args: SubmitJobUploadArgs = parse_arguments(self.name(), arguments)?;
        let options = SubmitJobOptions {
            job_name: args.job_name,
            job_id: args.job_id,
            start_with_save_point: args.is_start_with_save_point,
            format: args.format,
        };
        Ok(self.client.submit_job_upload(UploadSource::Path(args.config_file), &options).await?)
    }
}

// ============================================================================
// Job lifecycle
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct StopJobArgs {
    job_id: JobId,
    is_stop_with_save_point: Option<bool>,
}

/// `stop-job`
pub struct StopJobTool {
    client: Arc<SeaTunnelClient>,
}

#[async_trait]
impl Tool for StopJobTool {
    fn name(&self) -> &'static str {
        "stop-job"
    }

    fn description(&self) -> &'static str {
        "Stop a running job by providing the jobId and optional isStopWithSavePoint flag"
    }

    fn input_schema(&self) -> MCPToolInputSchema {
        MCPToolInputSchema::object(
            json!({
                "jobId": job_id_schema("Job ID, string or integer"),
                "isStopWithSavePoint": {
                    "type": "boolean",
                    "description": "Whether to stop with a savepoint (default: false)",
                },
            }),
            &["jobId"],
        )
    }

    async fn call(&self, arguments: Map<String, Value>) -> Result<Value, ToolError> {
        let args: StopJobArgs = parse_arguments(self.name(), arguments)?;
        Ok(self.client.stop_job(&args.job_id, args.is_stop_with_save_point.unwrap_or_default()).await?)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct JobIdArgs {
    job_id: JobId,
}

/// `get-job-info`
pub struct GetJobInfoTool {
    client: Arc<SeaTunnelClient>,
}

#[async_trait]
impl Tool for GetJobInfoTool {
    fn name(&self) -> &'static str {
        "get-job-info"
    }

    fn description(&self) -> &'static str {
        "Get detailed information about a specific job by providing the jobId"
    }

    fn input_schema(&self) -> MCPToolInputSchema {
        MCPToolInputSchema::object(
            json!({"jobId": job_id_schema("Job ID, used as path parameter in /job-info/{jobId}")}),
            &["jobId"],
        )
    }

    async fn call(&self, arguments: Map<String, Value>) -> Result<Value, ToolError> {
        let args: JobIdArgs = parse_arguments(self.name(), arguments)?;
        Ok(self.client.get_job_info(&args.job_id).await?)
    }
}

/// `get-running-job`
pub struct GetRunningJobTool {
    client: Arc<SeaTunnelClient>,
}

#[async_trait]
impl Tool for GetRunningJobTool {
    fn name(&self) -> &'static str {
        "get-running-job"
    }

    fn description(&self) -> &'static str {
        "Get details about a specific running job by providing the jobId"
    }

    fn input_schema(&self) -> MCPToolInputSchema {
        MCPToolInputSchema::object(
            json!({
                "jobId": job_id_schema("Job ID, used as path parameter in /running-job/{jobId}"),
            }),
            &["jobId"],
        )
    }

    async fn call(&self, arguments: Map<String, Value>) -> Result<Value, ToolError> {
        let args: JobIdArgs = parse_arguments(self.name(), arguments)?;
        Ok(self.client.get_running_job(&args.job_id).await?)
    }
}

/// `get-running-jobs`
pub struct GetRunningJobsTool {
    client: Arc<SeaTunnelClient>,
}

#[async_trait]
impl Tool for GetRunningJobsTool {
    fn name(&self) -> &'static str {
        "get-running-jobs"
    }

    fn description(&self) -> &'static str {
        "List all currently running jobs"
    }

    fn input_schema(&self) -> MCPToolInputSchema {
        MCPToolInputSchema::empty()
    }

    async fn call(&self, arguments: Map<String, Value>) -> Result<Value, ToolError> {
        let NoArgs {} = parse_arguments(self.name(), arguments)?;
        Ok(self.client.get_running_jobs().await?)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FinishedJobsArgs {
    state: String,
}

/// `get-finished-jobs`
pub struct GetFinishedJobsTool {
    client: Arc<SeaTunnelClient>,
}

#[async_trait]
impl Tool for GetFinishedJobsTool {
    fn name(&self) -> &'static str {
        "get-finished-jobs"
    }

    fn description(&self) -> &'static str {
        "List all finished jobs by state (FINISHED, CANCELED, FAILED, UNKNOWABLE)"
    }

    fn input_schema(&self) -> MCPToolInputSchema {
        MCPToolInputSchema::object(
            json!({
                "state": {
                    "type": "string",
                    "description": "Job state (FINISHED, CANCELED, FAILED, UNKNOWABLE), \
                                    used as path parameter in /finished-jobs/{state}",
                },
            }),
            &["state"],
        )
    }

    async fn call(&self, arguments: Map<String, Value>) -> Result<Value, ToolError> {
        let args: FinishedJobsArgs = parse_arguments(self.name(), arguments)?;
        Ok(self.client.get_finished_jobs(&args.state).await?)
    }
}

// ============================================================================
// Cluster monitoring
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OverviewArgs {
    tags: Option<BTreeMap<String, String>>,
}

/// `get-overview`
pub struct GetOverviewTool {
    client: Arc<SeaTunnelClient>,
}

#[async_trait]
impl Tool for GetOverviewTool {
    fn name(&self) -> &'static str {
        "get-overview"
    }

    fn description(&self) -> &'static str {
        "Get an overview of the SeaTunnel cluster"
    }

    fn input_schema(&self) -> MCPToolInputSchema {
        MCPToolInputSchema::object(
            json!({
                "tags": {
                    "type": "object",
                    "additionalProperties": {"type": "string"},
                    "description": "Optional tags for filtering",
                },
            }),
            &[],
        )
    }

    async fn call(&self, arguments: Map<String, Value>) -> Result<Value, ToolError> {
        let args: OverviewArgs = parse_arguments(self.name(), arguments)?;
        Ok(self.client.get_overview(args.tags.as_ref()).await?)
    }
}

/// `get-system-monitoring-information`
pub struct GetSystemMonitoringInformationTool {
    client: Arc<SeaTunnelClient>,
}

#[async_trait]
impl Tool for GetSystemMonitoringInformationTool {
    fn name(&self) -> &'static str {
        "get-system-monitoring-information"
    }

    fn description(&self) -> &'static str {
        "Get detailed system monitoring information"
    }

    fn input_schema(&self) -> MCPToolInputSchema {
        MCPToolInputSchema::empty()
    }

    async fn call(&self, arguments: Map<String, Value>) -> Result<Value, ToolError> {
        let NoArgs {} = parse_arguments(self.name(), arguments)?;
        Ok(self.client.get_system_monitoring_information().await?)
    }
}

/// All SeaTunnel tools, in registration order.
pub fn get_all_tools(client: &Arc<SeaTunnelClient>) -> Vec<Box<dyn Tool>> {
    vec![
        Box::new(GetConnectionSettingsTool { client: Arc::clone(client) }),
        Box::new(UpdateConnectionSettingsTool { client: Arc::clone(client) }),
        Box::new(SubmitJobTool { client: Arc::clone(client) }),
        Box::new(SubmitJobsTool { client: Arc::clone(client) }),
        Box::new(SubmitJobUploadTool { client: Arc::clone(client) }),
        Box::new(StopJobTool { client: Arc::clone(client) }),
        Box::new(GetJobInfoTool { client: Arc::clone(client) }),
        Box::new(GetRunningJobTool { client: Arc::clone(client) }),
        Box::new(GetRunningJobsTool { client: Arc::clone(client) }),
        Box::new(GetFinishedJobsTool { client: Arc::clone(client) }),
        Box::new(GetOverviewTool { client: Arc::clone(client) }),
        Box::new(GetSystemMonitoringInformationTool { client: Arc::clone(client) }),
    ]
}

/// Fixed, ordered set of tools built once at startup.
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Register every SeaTunnel tool against `client`.
    pub fn new(client: Arc<SeaTunnelClient>) -> Self {
        let tools = get_all_tools(&client);
        tracing::info!(count = tools.len(), "Registered SeaTunnel tools");
        Self { tools }
    }

    /// All tools, in registration order.
    pub fn tools(&self) -> &[Box<dyn Tool>] {
        &self.tools
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.iter().find(|t| t.name() == name).map(|t| t.as_ref())
    }

    /// Get count of tools.
    pub fn count(&self) -> usize {
        self.tools.len()
    }

    /// Tool descriptors for `tools/list`.
    pub fn definitions(&self) -> Vec<MCPTool> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    /// Invoke a tool by name.
    pub async fn call(&self, name: &str, arguments: Map<String, Value>) -> Result<Value, ToolError> {
        let tool = self.get(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        tracing::debug!(tool = name, "Calling tool");
        tool.call(arguments).await
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tools.iter().map(|t| t.name()).collect::<Vec<_>>())
            .finish()
    }
}

/// Format a tool for display.
pub fn format_tool(tool: &MCPTool) -> String {
    let mut output = tool.name.clone();

    if let Some(ref desc) = tool.description {
        output.push_str(&format!("\n  {}", desc));
    }

    if let Some(ref props) = tool.input_schema.properties {
        if !props.is_empty() {
            output.push_str("\n  Parameters:");
            for (name, schema) in props {
                let type_str = match schema.get("type") {
                    Some(Value::String(t)) => t.clone(),
                    Some(Value::Array(types)) => types
                        .iter()
                        .filter_map(|t| t.as_str())
                        .collect::<Vec<_>>()
                        .join(" | "),
                    _ => "any".to_string(),
                };
                let desc = schema.get("description").and_then(|v| v.as_str()).unwrap_or("");
                output.push_str(&format!("\n    - {} ({}): {}", name, type_str, desc));
            }
        }
    }

    if let Some(ref required) = tool.input_schema.required {
        if !required.is_empty() {
            output.push_str(&format!("\n  Required: {}", required.join(", ")));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn registry() -> ToolRegistry {
        let client = SeaTunnelClient::new("http://localhost:8090", None).unwrap();
        ToolRegistry::new(Arc::new(client))
    }

    fn args(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn test_registry_has_all_tools_in_order() {
        let names: Vec<&str> = registry().tools().iter().map(|t| t.name()).collect();
        assert_eq!(
            names,
            vec![
                "get-connection-settings",
                "update-connection-settings",
                "submit-job",
                "submit-jobs",
                "submit-job-upload",
                "stop-job",
                "get-job-info",
                "get-running-job",
                "get-running-jobs",
                "get-finished-jobs",
                "get-overview",
                "get-system-monitoring-information",
            ]
        );
    }

    #[test]
    fn test_names_unique_and_kebab_case() {
        let registry = registry();
        let names: HashSet<&str> = registry.tools().iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), registry.count());

        for name in names {
            assert!(
                name.split('-').all(|part| !part.is_empty()
                    && part.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())),
                "{} is not kebab-case",
                name
            );
        }
    }

    #[test]
    fn test_required_params_are_declared() {
        for tool in registry().definitions() {
            let declared = tool.input_schema.property_names();
            for required in tool.input_schema.required.clone().unwrap_or_default() {
                assert!(declared.contains(&required.as_str()), "{}: {}", tool.name, required);
            }
        }
    }

    #[test]
    fn test_submit_job_args_mapping() {
        let parsed: SubmitJobArgs = parse_arguments(
            "submit-job",
            args(json!({
                "jobContent": "env {}",
                "jobName": "t1",
                "jobId": 42,
                "isStartWithSavePoint": true,
            })),
        )
        .unwrap();

        assert_eq!(parsed.job_content, "env {}");
        assert_eq!(parsed.job_name.as_deref(), Some("t1"));
        assert_eq!(parsed.job_id, Some(JobId::Int(42)));
        assert_eq!(parsed.is_start_with_save_point, Some(true));
        assert_eq!(parsed.format, None);
    }

    #[test]
    fn test_null_optional_arguments_accepted() {
        let parsed: SubmitJobArgs = parse_arguments(
            "submit-job",
            args(json!({"jobContent": "env {}", "jobName": null, "format": null})),
        )
        .unwrap();
        assert_eq!(parsed.job_name, None);
        assert_eq!(parsed.format, None);

        let parsed: StopJobArgs = parse_arguments(
            "stop-job",
            args(json!({"jobId": 1, "isStopWithSavePoint": null})),
        )
        .unwrap();
        assert_eq!(parsed.is_stop_with_save_point, None);
    }

    #[test]
    fn test_unknown_argument_rejected() {
        let result: Result<SubmitJobArgs, _> = parse_arguments(
            "submit-job",
            args(json!({"jobContent": "env {}", "job_name": "legacy"})),
        );
        assert!(matches!(result, Err(ToolError::InvalidArguments { .. })));
    }

    #[test]
    fn test_stop_job_defaults() {
        let parsed: StopJobArgs =
            parse_arguments("stop-job", args(json!({"jobId": "123"}))).unwrap();
        assert_eq!(parsed.job_id, JobId::Str("123".to_string()));
        assert_eq!(parsed.is_stop_with_save_point, None);
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let result = registry().call("does-not-exist", Map::new()).await;
        assert!(matches!(result, Err(ToolError::UnknownTool(name)) if name == "does-not-exist"));
    }

    #[tokio::test]
    async fn test_connection_settings_tools() {
        let registry = registry();

        let settings = registry.call("get-connection-settings", Map::new()).await.unwrap();
        assert_eq!(settings, json!({"url": "http://localhost:8090", "has_api_key": false}));

        let settings = registry
            .call(
                "update-connection-settings",
                args(json!({"url": "http://new-host:8090", "apiKey": "new_key"})),
            )
            .await
            .unwrap();
        assert_eq!(settings, json!({"url": "http://new-host:8090", "has_api_key": true}));

        let settings = registry
            .call("update-connection-settings", args(json!({"apiKey": ""})))
            .await
            .unwrap();
        assert_eq!(settings, json!({"url": "http://new-host:8090", "has_api_key": false}));
    }

    #[tokio::test]
    async fn test_missing_required_argument() {
        let result = registry().call("get-job-info", Map::new()).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments { tool, .. }) if tool == "get-job-info"));
    }

    #[tokio::test]
    async fn test_upload_missing_file_is_local_error() {
        let result = registry()
            .call("submit-job-upload", args(json!({"configFile": "/no/such/dir/job.conf"})))
            .await;
        assert!(matches!(result, Err(ToolError::Api(ApiError::InvalidLocalInput(_)))));
    }

    #[test]
    fn test_format_tool() {
        let registry = registry();
        let tool = registry.get("stop-job").unwrap().definition();
        let output = format_tool(&tool);

        assert!(output.starts_with("stop-job"));
        assert!(output.contains("jobId (string | integer)"));
        assert!(output.contains("Required: jobId"));
    }
}
