//! SeaTunnel REST API client.
//!
//! Wraps the SeaTunnel engine's REST endpoints (job submission, lifecycle
//! control and cluster monitoring) behind typed async methods.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use seatunnel_mcp::api::{SeaTunnelClient, SubmitJobOptions, JobFormat};
//!
//! let client = SeaTunnelClient::new("http://localhost:8090", None)?;
//!
//! let options = SubmitJobOptions {
//!     job_name: Some("demo".to_string()),
//!     format: Some(JobFormat::Hocon),
//!     ..Default::default()
//! };
//! let result = client.submit_job("env { job.mode = \"batch\" }", &options).await?;
//! ```

mod client;
mod error;
mod types;

pub use client::SeaTunnelClient;
pub use error::{ApiError, ApiResult};
pub use types::{ApiKeyUpdate, ConnectionSettings, JobFormat, JobId, SubmitJobOptions, UploadSource};
