//! Voicebox MCP Server Library
//!
//! This crate exposes Stardog Cloud Voicebox to Model Context Protocol (MCP)
//! clients as three read-only tools: `voicebox_settings`, `voicebox_ask` and
//! `voicebox_generate_query`.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Configuration, CLI, deployment profiles, error handling, the
//!   main server and its transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools, credential resolution and dispatch
//!   - **voicebox**: HTTP client for the Voicebox API
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use voicebox_mcp_server::core::{Config, McpServer, TransportService};
//! use voicebox_mcp_server::domains::voicebox::StardogCloudClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let profile = config.profile();
//!     let client = StardogCloudClient::new(&config.voicebox.endpoint, config.voicebox.timeout())?;
//!     let transport = TransportService::for_profile(&profile, &config.http)?;
//!     let server = McpServer::new(config, Arc::new(client));
//!     transport.run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, DeploymentProfile, Error, McpServer, Result};
