//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: the MCP tools and the dispatcher they share
//! - **voicebox**: the Stardog Cloud Voicebox API client the tools call

pub mod tools;
pub mod voicebox;
