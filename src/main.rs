//! MCP Server Entry Point
//!
//! Parses the command line, loads configuration, selects the deployment
//! profile and runs the matching transport on a runtime sized for it.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use voicebox_mcp_server::core::{
    Cli, Config, DeploymentMode, DeploymentProfile, McpServer, TransportService,
};
use voicebox_mcp_server::domains::voicebox::StardogCloudClient;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Defaults, then .env and environment, then flags
    let mut config = Config::from_env();
    cli.apply_to(&mut config);

    // Logging has to be up before `select` can report an unknown mode.
    let provisional = config
        .deployment
        .mode
        .parse::<DeploymentMode>()
        .unwrap_or_default()
        .profile();
    init_logging(&config.log_level(&provisional));

    let profile = config.profile();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(profile.workers.max(1))
        .enable_all()
        .build()?;

    runtime.block_on(run(config, profile))
}

async fn run(config: Config, profile: DeploymentProfile) -> Result<()> {
    info!("Starting {} v{}", config.server.name, config.server.version);
    info!(
        "Deployment: {} ({:?}, {} worker(s))",
        profile.mode, profile.transport, profile.workers
    );
    if !profile.is_blocking() {
        info!("Serving the embedded HTTP app without session state");
    }

    let client = StardogCloudClient::new(&config.voicebox.endpoint, config.voicebox.timeout())?;
    info!("Voicebox endpoint: {}", client.base_url());

    let transport = TransportService::for_profile(&profile, &config.http)?;

    // Create the MCP server
    let server = McpServer::new(config, Arc::new(client));

    info!("Server initialized");

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr so the STDIO transport keeps stdout for protocol messages.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
