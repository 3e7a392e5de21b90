//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration, deployment selection, server
//! lifecycle management, and transport layer abstractions.

pub mod cli;
pub mod config;
pub mod deployment;
pub mod error;
pub mod headers;
pub mod server;
pub mod transport;

pub use cli::Cli;
pub use config::Config;
pub use deployment::{DeploymentMode, DeploymentProfile, TransportKind};
pub use error::{Error, Result};
pub use headers::RequestHeaders;
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
