//! # SeaTunnel MCP
//!
//! Model Context Protocol server for Apache SeaTunnel.
//!
//! Exposes the SeaTunnel engine's REST API (job submission, job lifecycle
//! control, cluster monitoring) as named MCP tools an LLM host can call.
//!
//! ## Features
//!
//! - **REST client**: One async method per SeaTunnel endpoint, with runtime
//!   switching of the target cluster and credential
//! - **Tool registry**: Twelve self-describing tools with JSON Schema inputs
//! - **Transports**: stdio (default) and HTTP (`http` feature)
//! - **Setup helpers**: `.env` template and Claude Desktop registration
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a starter .env
//! seatunnel-mcp init
//!
//! # Register with Claude Desktop
//! seatunnel-mcp configure-claude
//!
//! # Serve over stdio
//! seatunnel-mcp run --api-url http://localhost:8090
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::significant_drop_tightening)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::unnecessary_literal_bound)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::upper_case_acronyms)]

pub mod api;
pub mod config;
pub mod mcp;
pub mod setup;

// Re-export commonly used types
pub use api::{ApiError, ApiKeyUpdate, ConnectionSettings, JobFormat, JobId, SeaTunnelClient};
pub use config::{ConfigError, ServerConfig};
pub use mcp::{MCPServer, MCPTool, Tool, ToolError, ToolRegistry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "seatunnel-mcp";
