//! SeaTunnel MCP - Model Context Protocol server for Apache SeaTunnel.
//!
//! Serves the SeaTunnel REST API as MCP tools, and carries a few setup
//! helpers for local installs.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use seatunnel_mcp::config::{self, ServerConfig};
use seatunnel_mcp::mcp::{format_tool, MCPServer, ToolRegistry};
use seatunnel_mcp::{setup, SeaTunnelClient, APP_NAME};

/// MCP server for the Apache SeaTunnel REST API
#[derive(Parser)]
#[command(name = "seatunnel-mcp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the MCP server
    Run(RunArgs),

    /// Create a starter env file
    Init {
        /// Path of the env file to create
        #[arg(long, default_value = ".env")]
        env_file: PathBuf,
    },

    /// Register this server with Claude Desktop
    ConfigureClaude {
        /// Claude Desktop config file (searched in the usual locations when omitted)
        #[arg(long)]
        config_file: Option<PathBuf>,
    },

    /// List the tools this server exposes
    Tools {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(clap::Args)]
struct RunArgs {
    /// Host for the HTTP transport [env: MCP_HOST]
    #[arg(long)]
    host: Option<String>,

    /// Port for the HTTP transport [env: MCP_PORT]
    #[arg(long)]
    port: Option<u16>,

    /// SeaTunnel REST API URL [env: SEATUNNEL_API_URL]
    #[arg(long)]
    api_url: Option<String>,

    /// SeaTunnel API key [env: SEATUNNEL_API_KEY]
    #[arg(long)]
    api_key: Option<String>,

    /// Env file to load (defaults to .env if present)
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Transport to serve on
    #[arg(long, value_enum, default_value_t = Transport::Stdio)]
    transport: Transport,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error | Self::Critical => "error",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Transport {
    Stdio,
    Http,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout belongs to the stdio transport.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.directive()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();

    match cli.command {
        Some(Commands::Run(args)) => cmd_run(args)?,
        Some(Commands::Init { env_file }) => cmd_init(&env_file)?,
        Some(Commands::ConfigureClaude { config_file }) => cmd_configure_claude(config_file)?,
        Some(Commands::Tools { format }) => cmd_tools(format)?,
        Some(Commands::Completions { shell }) => cmd_completions(shell),
        None => Cli::command().print_help()?,
    }

    Ok(())
}

/// Run the MCP server.
fn cmd_run(args: RunArgs) -> Result<()> {
    config::load_env_file(args.env_file.as_deref())?;

    let config = ServerConfig::from_env()?.with_overrides(
        args.host,
        args.port,
        args.api_url,
        args.api_key,
    );

    let client = SeaTunnelClient::new(config.api_url.clone(), config.api_key.clone())
        .context("Failed to create SeaTunnel client")?;
    tracing::info!(
        api_url = %config.api_url,
        has_api_key = config.api_key.is_some(),
        "Starting SeaTunnel MCP server"
    );
    let server = Arc::new(MCPServer::new(Arc::new(client)));

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        match args.transport {
            Transport::Stdio => server.serve_stdio().await?,
            Transport::Http => serve_http(server, &config).await?,
        }
        Ok(())
    })
}

#[cfg(feature = "http")]
async fn serve_http(server: Arc<MCPServer>, config: &ServerConfig) -> Result<()> {
    let addr = config.socket_addr()?;
    seatunnel_mcp::mcp::serve_http(server, addr).await?;
    Ok(())
}

#[cfg(not(feature = "http"))]
async fn serve_http(_server: Arc<MCPServer>, _config: &ServerConfig) -> Result<()> {
    anyhow::bail!("HTTP transport not available. Rebuild with --features http")
}

/// Create a starter env file.
fn cmd_init(env_file: &std::path::Path) -> Result<()> {
    setup::create_env_file(env_file)?;
    println!("Created env file: {}", env_file.display());
    Ok(())
}

/// Register this executable with Claude Desktop.
fn cmd_configure_claude(config_file: Option<PathBuf>) -> Result<()> {
    let command = std::env::current_exe().context("Failed to locate the current executable")?;
    let path = setup::configure_claude_desktop(config_file.as_deref(), &command)?;
    println!("Configured SeaTunnel MCP server for Claude Desktop: {}", path.display());
    Ok(())
}

/// Print the tool descriptors.
fn cmd_tools(format: OutputFormat) -> Result<()> {
    let client = SeaTunnelClient::new(config::DEFAULT_API_URL, None)?;
    let registry = ToolRegistry::new(Arc::new(client));
    let tools = registry.definitions();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&tools)?;
            println!("{json}");
        }
        OutputFormat::Text => {
            for tool in &tools {
                println!("{}\n", format_tool(tool));
            }
            println!("Total: {} tools", tools.len());
        }
    }

    Ok(())
}

/// Generate shell completions.
fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, APP_NAME, &mut io::stdout());
}
