//! MCP (Model Context Protocol) server.
//!
//! Exposes every SeaTunnel REST operation as an MCP tool so an LLM host can
//! submit, stop and inspect jobs.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │        MCP client (LLM host)                 │
//! └──────────────────────────────────────────────┘
//!                 │ JSON-RPC (stdio / HTTP)
//!                 ▼
//! ┌──────────────────────────────────────────────┐
//! │  MCPServer                                   │
//! │  • initialize / ping / tools/list            │
//! │  • tools/call → ToolRegistry                 │
//! └──────────────────────────────────────────────┘
//!                 │
//!                 ▼
//! ┌──────────────────────────────────────────────┐
//! │  SeaTunnelClient (shared, one per process)   │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use seatunnel_mcp::api::SeaTunnelClient;
//! use seatunnel_mcp::mcp::MCPServer;
//!
//! let client = Arc::new(SeaTunnelClient::new("http://localhost:8090", None)?);
//! let server = MCPServer::new(client);
//! server.serve_stdio().await?;
//! ```

mod protocol;
mod server;
mod tools;

pub use protocol::{
    error_codes, CallToolParams, CallToolResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    ListToolsResult, MCPInitializeResult, MCPServerCapabilities, MCPServerInfo, MCPTool,
    MCPToolInputSchema, RequestId, ToolCapabilities, ToolContent, PROTOCOL_VERSION,
};
#[cfg(feature = "http")]
pub use server::{router, serve_http};
pub use server::{MCPServer, MCPServerError, SERVER_NAME};
pub use tools::{format_tool, get_all_tools, Tool, ToolError, ToolRegistry};
