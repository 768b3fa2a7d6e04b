//! MCP server.
//!
//! Answers JSON-RPC messages from an MCP client (an LLM host) by dispatching
//! `tools/call` to the [`ToolRegistry`]. Two transports are offered:
//! newline-delimited JSON over stdin/stdout, and (with the `http` feature)
//! one JSON-RPC message per `POST /mcp` request.

use std::sync::Arc;

use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use super::protocol::{
    error_codes, CallToolParams, CallToolResult, JsonRpcRequest, JsonRpcResponse, ListToolsResult,
    MCPInitializeResult, MCPServerCapabilities, MCPServerInfo, RequestId, ToolCapabilities,
    PROTOCOL_VERSION,
};
use super::tools::{ToolError, ToolRegistry};
use crate::api::{ApiError, SeaTunnelClient};

/// Name reported in `initialize`.
pub const SERVER_NAME: &str = "SeaTunnel MCP Server";

const INSTRUCTIONS: &str = "Tools for an Apache SeaTunnel cluster: submit and stop jobs, \
                            inspect running and finished jobs, and read cluster monitoring data. \
                            Use update-connection-settings to point at another cluster.";

/// Error type for MCP server operations.
#[derive(Debug, thiserror::Error)]
pub enum MCPServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// MCP server instance.
#[derive(Debug)]
pub struct MCPServer {
    registry: ToolRegistry,
    info: MCPServerInfo,
}

impl MCPServer {
    /// Create a server exposing every SeaTunnel tool bound to `client`.
    pub fn new(client: Arc<SeaTunnelClient>) -> Self {
        Self {
            registry: ToolRegistry::new(client),
            info: MCPServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// The tool registry.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Handle one raw JSON-RPC message.
    ///
    /// Returns `None` for notifications.
    pub async fn handle_message(&self, message: &str) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_str(message) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Unparsable JSON-RPC message");
                return Some(JsonRpcResponse::error(
                    None,
                    error_codes::PARSE_ERROR,
                    format!("Parse error: {}", e),
                ));
            }
        };

        // Keep the id, if any, so a malformed request can still be answered.
        let id = value.get("id").and_then(|id| serde_json::from_value::<RequestId>(id.clone()).ok());

        match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => Some(JsonRpcResponse::error(
                id,
                error_codes::INVALID_REQUEST,
                format!("Invalid request: {}", e),
            )),
        }
    }

    /// Handle a parsed JSON-RPC request.
    ///
    /// Returns `None` for notifications.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            tracing::debug!(method = %request.method, "Notification received");
            return None;
        }

        let id = request.id.clone();
        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                id,
                error_codes::INVALID_REQUEST,
                format!("Unsupported JSON-RPC version: {}", request.jsonrpc),
            ));
        }

        tracing::debug!(method = %request.method, "Request received");

        let response = match request.method.as_str() {
            "initialize" => self.initialize(id),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => self.list_tools(id),
            "tools/call" => self.call_tool(id, request.params).await,
            method => JsonRpcResponse::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method not found: {}", method),
            ),
        };

        Some(response)
    }

    fn initialize(&self, id: Option<RequestId>) -> JsonRpcResponse {
        let result = MCPInitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: MCPServerCapabilities {
                tools: Some(ToolCapabilities { list_changed: Some(false) }),
            },
            server_info: self.info.clone(),
            instructions: Some(INSTRUCTIONS.to_string()),
        };
        to_response(id, &result)
    }

    fn list_tools(&self, id: Option<RequestId>) -> JsonRpcResponse {
        let result = ListToolsResult { tools: self.registry.definitions() };
        to_response(id, &result)
    }

    async fn call_tool(&self, id: Option<RequestId>, params: Option<Value>) -> JsonRpcResponse {
        let params: CallToolParams = match params.map(serde_json::from_value) {
            Some(Ok(params)) => params,
            Some(Err(e)) => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("Invalid tools/call params: {}", e),
                );
            }
            None => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    "Missing tools/call params",
                );
            }
        };

        let arguments = params.arguments.unwrap_or_default();
        match self.registry.call(&params.name, arguments).await {
            Ok(value) => to_response(id, &CallToolResult::json(value)),
            Err(ToolError::Api(err)) => {
                tracing::warn!(tool = %params.name, kind = err.kind(), error = %err, "Tool call failed");
                to_response(id, &api_error_result(&err))
            }
            Err(err) => JsonRpcResponse::error(id, error_codes::INVALID_PARAMS, err.to_string()),
        }
    }

    /// Serve newline-delimited JSON-RPC from `reader`, answering on `writer`,
    /// until the reader is exhausted.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<(), MCPServerError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            if let Some(response) = self.handle_message(&line).await {
                let mut payload = serde_json::to_string(&response)?;
                payload.push('\n');
                writer.write_all(payload.as_bytes()).await?;
                writer.flush().await?;
            }
        }

        Ok(())
    }

    /// Serve over the process's stdin and stdout.
    pub async fn serve_stdio(&self) -> Result<(), MCPServerError> {
        tracing::info!(tools = self.registry.count(), "Serving MCP over stdio");
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;
        tracing::info!("stdin closed, shutting down");
        Ok(())
    }
}

/// Tool result for a failed API call. The classification stays intact in
/// the structured content.
fn api_error_result(err: &ApiError) -> CallToolResult {
    let mut details = json!({
        "error": err.kind(),
        "message": err.to_string(),
    });
    if let ApiError::RemoteRejected { status, body } = err {
        details["status"] = json!(status);
        details["body"] = json!(body);
    }
    CallToolResult::error(err.to_string(), details)
}

fn to_response<T: serde::Serialize>(id: Option<RequestId>, result: &T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => JsonRpcResponse::error(id, error_codes::INTERNAL_ERROR, e.to_string()),
    }
}

#[cfg(feature = "http")]
mod http {
    use std::net::SocketAddr;
    use std::sync::Arc;

    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};

    use super::{MCPServer, MCPServerError};

    /// Routes for the HTTP transport.
    pub fn router(server: Arc<MCPServer>) -> Router {
        Router::new()
            .route("/mcp", post(handle_mcp))
            .route("/health", get(health))
            .with_state(server)
    }

    /// Serve the HTTP transport on `addr` until Ctrl+C.
    pub async fn serve_http(server: Arc<MCPServer>, addr: SocketAddr) -> Result<(), MCPServerError> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(%addr, tools = server.registry().count(), "Serving MCP over HTTP");

        axum::serve(listener, router(server))
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        Ok(())
    }

    async fn handle_mcp(State(server): State<Arc<MCPServer>>, body: String) -> Response {
        match server.handle_message(&body).await {
            Some(response) => Json(response).into_response(),
            None => StatusCode::ACCEPTED.into_response(),
        }
    }

    async fn health() -> Json<Value> {
        Json(json!({"status": "ok"}))
    }
}

#[cfg(feature = "http")]
pub use http::{router, serve_http};
