//! HTTP transport implementation.
//!
//! HTTP server with JSON-RPC over POST requests.
//! This allows standard HTTP clients (curl, browsers, etc.) to communicate with the MCP server.
//!
//! Request headers are handed to the tools so that each call can carry its
//! own Voicebox credentials. In stateful mode `tools/list` and `tools/call`
//! are refused until the client has sent `initialize`. In stateless mode no
//! session is kept between requests, so any worker of a multi-worker host
//! can serve any request.
//!
//! Notifications are acknowledged with `202 Accepted` and an empty body.

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::core::headers::RequestHeaders;
use crate::core::server::INSTRUCTIONS;
use crate::domains::tools::ToolError;

/// Protocol version announced on initialize.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<serde_json::Value>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<serde_json::Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Method not found error.
    pub fn method_not_found(id: Option<serde_json::Value>) -> Self {
        Self::error(id, -32601, "Method not found")
    }

    /// Invalid request error.
    pub fn invalid_request(id: Option<serde_json::Value>) -> Self {
        Self::error(id, -32600, "Invalid Request")
    }

    /// Invalid params error.
    pub fn invalid_params(id: Option<serde_json::Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32602, msg)
    }

    /// Request received before `initialize` on a stateful endpoint.
    pub fn not_initialized(id: Option<serde_json::Value>) -> Self {
        Self::error(id, -32002, "Server not initialized")
    }

    /// Internal error.
    pub fn internal_error(id: Option<serde_json::Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32603, msg)
    }

    /// Map a tool failure: caller mistakes are invalid params, Voicebox
    /// failures are internal errors tagged with the tool name.
    pub fn tool_error(id: Option<serde_json::Value>, err: &ToolError) -> Self {
        if err.is_validation() {
            return Self::invalid_params(id, err.to_string());
        }

        let mut response = Self::internal_error(id, err.to_string());
        if let (Some(error), Some(tool)) = (response.error.as_mut(), err.tool_name()) {
            error.data = Some(serde_json::json!({ "tool": tool }));
        }
        response
    }
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The MCP server instance.
    server: McpServer,
    /// Session state, absent in stateless mode.
    session: Option<Arc<RwLock<Option<SessionState>>>>,
    /// Path of the JSON-RPC endpoint.
    rpc_path: String,
}

/// Session state for a client.
#[derive(Debug, Clone)]
struct SessionState {
    initialized: bool,
    protocol_version: String,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = create_app(server, &self.config);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        let session_status = if self.config.stateless {
            "stateless"
        } else {
            "stateful"
        };
        info!(
            "Ready - listening on {} (JSON-RPC over HTTP, {}, CORS {})",
            addr, session_status, cors_status
        );
        info!("  → JSON-RPC: POST {}", self.config.rpc_path);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the HTTP application for `server`.
///
/// This is the embeddable form of the transport: a host that owns the
/// listener and worker threads can serve the returned router directly.
pub fn create_app(server: McpServer, config: &HttpConfig) -> Router {
    let state = AppState {
        server,
        session: (!config.stateless).then(|| Arc::new(RwLock::new(None))),
        rpc_path: config.rpc_path.clone(),
    };

    let mut app = Router::new()
        .route(&config.rpc_path, post(handle_rpc))
        .route("/health", get(health_check))
        .route("/", get(root_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    // Add CORS if enabled
    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Root handler - provides API info.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP",
        "stateless": state.session.is_none(),
        "endpoints": {
            "rpc": state.rpc_path,
            "health": "/health"
        },
        "protocol": "JSON-RPC 2.0",
        "documentation": format!("Send POST requests to {} with JSON-RPC messages", state.rpc_path)
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Handle JSON-RPC requests.
#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<JsonRpcRequest>,
) -> Response {
    tracing::Span::current().record("method", &request.method);
    info!("Received JSON-RPC request: {}", request.method);

    // Notifications get no JSON-RPC response
    if request.method.starts_with("notifications/") {
        handle_notification(&state, &request).await;
        return StatusCode::ACCEPTED.into_response();
    }

    let headers = RequestHeaders::from_header_map(&headers);
    let response = process_request(&state, request, &headers).await;

    (StatusCode::OK, Json(response)).into_response()
}

/// Process a JSON-RPC request and return the response.
async fn process_request(
    state: &AppState,
    request: JsonRpcRequest,
    headers: &RequestHeaders,
) -> JsonRpcResponse {
    // Validate JSON-RPC version
    if request.jsonrpc != "2.0" {
        return JsonRpcResponse::invalid_request(request.id);
    }

    let started = session_started(state).await;

    match request.method.as_str() {
        // Initialize the MCP session
        "initialize" => handle_initialize(state, request).await,

        "tools/list" | "tools/call" if !started => {
            warn!("{} before initialize", request.method);
            JsonRpcResponse::not_initialized(request.id)
        }

        // List available tools
        "tools/list" => handle_tools_list(state, request).await,

        // Call a tool
        "tools/call" => handle_tools_call(state, request, headers).await,

        // Unknown method
        _ => {
            warn!("Unknown method: {}", request.method);
            JsonRpcResponse::method_not_found(request.id)
        }
    }
}

/// Whether requests may be served: always in stateless mode, otherwise
/// only once `initialize` has opened the session.
async fn session_started(state: &AppState) -> bool {
    match &state.session {
        Some(session) => session.read().await.is_some(),
        None => true,
    }
}

/// Handle initialize request.
async fn handle_initialize(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing initialize request");

    // Store session state
    if let Some(session) = &state.session {
        let mut session = session.write().await;
        if session.as_ref().is_some_and(|s| s.initialized) {
            debug!("Replacing initialized session");
        }
        *session = Some(SessionState {
            initialized: false,
            protocol_version: PROTOCOL_VERSION.to_string(),
        });
    }

    // Return server capabilities
    let result = serde_json::json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": state.server.name(),
            "version": state.server.version()
        },
        "instructions": INSTRUCTIONS
    });

    JsonRpcResponse::success(request.id, result)
}

/// Handle tools/list request.
async fn handle_tools_list(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing tools/list request");

    let tools = state.server.list_tools();
    let result = serde_json::json!({
        "tools": tools
    });

    JsonRpcResponse::success(request.id, result)
}

/// Handle tools/call request.
async fn handle_tools_call(
    state: &AppState,
    request: JsonRpcRequest,
    headers: &RequestHeaders,
) -> JsonRpcResponse {
    info!("Processing tools/call request");

    let params = match request.params {
        Some(p) => p,
        None => return JsonRpcResponse::invalid_params(request.id.clone(), "Missing params"),
    };

    let name = match params.get("name").and_then(|v| v.as_str()) {
        Some(n) => n.to_string(),
        None => return JsonRpcResponse::invalid_params(request.id.clone(), "Missing tool name"),
    };

    let arguments = params
        .get("arguments")
        .cloned()
        .unwrap_or(serde_json::json!({}));

    match state.server.call_tool(&name, arguments, headers).await {
        Ok(result) => JsonRpcResponse::success(request.id, result),
        Err(e) => JsonRpcResponse::tool_error(request.id, &e),
    }
}

/// Handle notifications.
async fn handle_notification(state: &AppState, request: &JsonRpcRequest) {
    match (request.method.as_str(), &state.session) {
        ("notifications/initialized", Some(session)) => {
            info!("Client sent initialized notification");
            let mut session = session.write().await;
            if let Some(ref mut s) = *session {
                s.initialized = true;
                debug!("Session ready (protocol {})", s.protocol_version);
            }
        }
        _ => {
            info!("Received notification: {}", request.method);
        }
    }
}
