//! Claude Desktop registration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde_json::{json, Map, Value};

use super::write_file_atomic;

/// Claude Desktop configuration file name.
pub const CONFIG_FILE_NAME: &str = "claude_desktop_config.json";

/// Key under `mcpServers` this server registers as.
pub const SERVER_KEY: &str = "seatunnel";

/// Known configuration locations under `home`, in search order.
pub fn default_config_paths(home: &Path) -> Vec<PathBuf> {
    vec![
        home.join(".claude").join(CONFIG_FILE_NAME),
        home.join("AppData").join("Roaming").join("claude").join(CONFIG_FILE_NAME),
        home.join("Library").join("Application Support").join("claude").join(CONFIG_FILE_NAME),
    ]
}

/// First existing configuration file under `home`.
pub fn find_config_file_in(home: &Path) -> Option<PathBuf> {
    default_config_paths(home).into_iter().find(|path| path.is_file())
}

/// First existing configuration file under the user's home directory.
pub fn find_config_file() -> Option<PathBuf> {
    dirs::home_dir().and_then(|home| find_config_file_in(&home))
}

/// Register `command run` as the `seatunnel` MCP server.
///
/// Uses `config_file` if given, otherwise the first known location that
/// exists. Returns the path written.
pub fn configure_claude_desktop(config_file: Option<&Path>, command: &Path) -> Result<PathBuf> {
    let path = match config_file {
        Some(path) => path.to_path_buf(),
        None => match find_config_file() {
            Some(path) => path,
            None => bail!(
                "Could not find a Claude Desktop config file; \
                 pass one with `seatunnel-mcp configure-claude --config-file PATH`"
            ),
        },
    };

    register_server(&path, &command.to_string_lossy())?;
    Ok(path)
}

/// Add or replace the `mcpServers.seatunnel` entry in `path`.
///
/// Other keys are preserved. A missing file is created; a file that is not
/// a JSON object is replaced.
pub fn register_server(path: &Path, command: &str) -> Result<()> {
    let mut config = read_config(path)?;

    let servers = config.entry("mcpServers").or_insert_with(|| json!({}));
    if !servers.is_object() {
        tracing::warn!(path = %path.display(), "mcpServers is not an object, replacing it");
        *servers = json!({});
    }
    if let Value::Object(servers) = servers {
        servers.insert(SERVER_KEY.to_string(), json!({"command": command, "args": ["run"]}));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(&Value::Object(config))?;
    write_file_atomic(path, &content)?;

    tracing::info!(path = %path.display(), "Registered SeaTunnel MCP server with Claude Desktop");
    Ok(())
}

fn read_config(path: &Path) -> Result<Map<String, Value>> {
    if !path.exists() {
        return Ok(Map::new());
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    match serde_json::from_str(&content) {
        Ok(Value::Object(config)) => Ok(config),
        Ok(_) => {
            tracing::warn!(path = %path.display(), "Config is not a JSON object, creating a new one");
            Ok(Map::new())
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Invalid JSON, creating a new config");
            Ok(Map::new())
        }
    }
}
