//! Starter `.env` file.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Contents written by [`create_env_file`].
pub const ENV_TEMPLATE: &str = "\
# SeaTunnel MCP server configuration

# MCP server (HTTP transport)
MCP_HOST=127.0.0.1
MCP_PORT=8080

# SeaTunnel REST API
SEATUNNEL_API_URL=http://localhost:8090
SEATUNNEL_API_KEY=your_api_key_here
";

/// Create an env file with the default settings.
///
/// Fails if `path` already exists; an existing file is never touched.
pub fn create_env_file(path: &Path) -> Result<()> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            bail!("File already exists: {}", path.display())
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to create {}", path.display()));
        }
    };

    file.write_all(ENV_TEMPLATE.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), "Created env file");
    Ok(())
}
