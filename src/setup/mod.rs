//! Local setup helpers.
//!
//! Writes a starter `.env` file and registers this server with Claude
//! Desktop. Both run from the CLI and never touch the SeaTunnel API.

mod claude_desktop;
mod env_file;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub use claude_desktop::{
    configure_claude_desktop, default_config_paths, find_config_file, find_config_file_in,
    register_server, CONFIG_FILE_NAME, SERVER_KEY,
};
pub use env_file::{create_env_file, ENV_TEMPLATE};

/// Write a file atomically via a temporary sibling.
fn write_file_atomic(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("tmp");

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to {}", temp_path.display()))?;

    fs::rename(&temp_path, path).with_context(|| {
        format!("Failed to rename {} to {}", temp_path.display(), path.display())
    })?;

    Ok(())
}
