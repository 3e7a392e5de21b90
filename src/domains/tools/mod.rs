//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `dispatcher.rs` - Credential resolution and Voicebox calls shared by all tools
//! - `params.rs` - Header/fallback parameter resolution
//! - `interceptor.rs` - Hooks run around every tool invocation
//! - `router.rs` - Dynamic ToolRouter builder for STDIO transport
//! - `registry.rs` - Central tool registry and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define params, to_tool(), create_route() and http_handler()
//! 3. Export in `definitions/mod.rs`
//! 4. Add route in `router.rs` using `with_route()`
//! 5. Register in `registry.rs` for HTTP support

pub mod definitions;
pub mod dispatcher;
mod error;
pub mod interceptor;
pub mod params;
mod registry;
pub mod router;

pub use dispatcher::ToolDispatcher;
pub use error::ToolError;
pub use interceptor::{InterceptorChain, ToolInterceptor, TracingInterceptor};
pub use params::{Credential, resolve_credential, resolve_param};
pub use registry::ToolRegistry;
pub use router::build_tool_router;
