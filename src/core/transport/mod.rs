//! Transport layer for the MCP server.
//!
//! This module provides different transport implementations:
//! - **STDIO**: Standard input/output (development deployment) - feature: `stdio`
//! - **HTTP**: HTTP server with JSON-RPC over POST requests, stateful for the
//!   launchpad deployment and stateless for the cloud deployment - feature: `http`
//!
//! Each transport handles the connection lifecycle and delegates
//! message processing to the MCP server handler.
//!
//! # Feature Flags
//!
//! Transport implementations are conditionally compiled based on features:
//! - `stdio`: STDIO transport - minimal dependencies
//! - `http`: HTTP transport - adds axum, tower-http

#[cfg(not(any(feature = "stdio", feature = "http")))]
compile_error!("At least one transport feature must be enabled: stdio or http");

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::{HttpConfig, TransportConfig};
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use http::create_app;
