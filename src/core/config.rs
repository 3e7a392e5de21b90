//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from defaults, a `.env` file, environment variables and finally
//! command line flags (see [`super::cli`]).

use super::deployment::{DeploymentMode, DeploymentProfile};
use super::transport::HttpConfig;
use crate::domains::tools::Credential;
use crate::domains::voicebox::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// Client id sent to Voicebox when none is configured.
pub const DEFAULT_CLIENT_ID: &str = "VBX-APP";

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP listener configuration (launchpad and cloud deployments).
    pub http: HttpConfig,

    /// Voicebox API connection settings.
    pub voicebox: VoiceboxConfig,

    /// Fallback credentials used when a request carries no header.
    pub credentials: CredentialsConfig,

    /// Deployment selection.
    pub deployment: DeploymentConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    ///
    /// When unset, the deployment profile's level is used.
    pub level: Option<String>,
}

/// Voicebox API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceboxConfig {
    /// Base URL of the Stardog Cloud API.
    pub endpoint: String,

    /// Request timeout in seconds. No timeout when unset.
    pub timeout_secs: Option<f64>,
}

/// Fallback credentials for the Voicebox tools.
#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Voicebox application API token.
    pub api_token: Option<String>,

    /// Client id reported to Voicebox.
    pub client_id: Option<String>,

    /// Stardog auth token override.
    pub auth_token_override: Option<String>,
}

/// Deployment selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentConfig {
    /// Mode name, resolved with [`DeploymentProfile::select`].
    pub mode: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("client_id", &self.client_id)
            .field(
                "auth_token_override",
                &self.auth_token_override.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl CredentialsConfig {
    /// Configured fallback for a credential.
    pub fn fallback(&self, credential: Credential) -> Option<&str> {
        match credential {
            Credential::ApiToken => self.api_token.as_deref(),
            Credential::ClientId => self.client_id.as_deref(),
            Credential::AuthTokenOverride => self.auth_token_override.as_deref(),
        }
    }
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            client_id: Some(DEFAULT_CLIENT_ID.to_string()),
            auth_token_override: None,
        }
    }
}

impl Default for VoiceboxConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
        }
    }
}

impl VoiceboxConfig {
    /// Request timeout, if a positive one is configured.
    ///
    /// Values too large for a `Duration` are logged and treated as unset.
    pub fn timeout(&self) -> Option<Duration> {
        let secs = self.timeout_secs.filter(|secs| *secs > 0.0)?;
        match Duration::try_from_secs_f64(secs) {
            Ok(timeout) => Some(timeout),
            Err(_) => {
                warn!("Ignoring out of range timeout: {} seconds", secs);
                None
            }
        }
    }
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            mode: DeploymentMode::DEFAULT.as_str().to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "voicebox-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig::default(),
            http: HttpConfig::default(),
            voicebox: VoiceboxConfig::default(),
            credentials: CredentialsConfig::default(),
            deployment: DeploymentConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a `.env` file and environment variables.
    ///
    /// Recognized variables: `SDC_ENDPOINT`, `SDC_API_TOKEN`, `SDC_CLIENT_ID`,
    /// `SD_AUTH_TOKEN_OVERRIDE`, `SDC_TIMEOUT`, `SDC_MCP_SERVER_MODE`,
    /// `SDC_PORT`, `SDC_HOST` and `SDC_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Some(endpoint) = non_empty_var("SDC_ENDPOINT") {
            config.voicebox.endpoint = endpoint;
        }

        if let Some(token) = non_empty_var("SDC_API_TOKEN") {
            config.credentials.api_token = Some(token);
        }

        if let Some(client_id) = non_empty_var("SDC_CLIENT_ID") {
            config.credentials.client_id = Some(client_id);
        }

        if let Some(auth_token) = non_empty_var("SD_AUTH_TOKEN_OVERRIDE") {
            config.credentials.auth_token_override = Some(auth_token);
        }

        if let Some(timeout) = non_empty_var("SDC_TIMEOUT") {
            match timeout.parse::<f64>() {
                Ok(secs) => config.voicebox.timeout_secs = Some(secs),
                Err(_) => warn!("Ignoring invalid SDC_TIMEOUT value: {}", timeout),
            }
        }

        if let Some(mode) = non_empty_var("SDC_MCP_SERVER_MODE") {
            config.deployment.mode = mode;
        }

        if let Some(port) = non_empty_var("SDC_PORT") {
            match port.parse::<u16>() {
                Ok(port) => config.http.port = port,
                Err(_) => warn!("Ignoring invalid SDC_PORT value: {}", port),
            }
        }

        if let Some(host) = non_empty_var("SDC_HOST") {
            config.http.host = host;
        }

        if let Some(level) = non_empty_var("SDC_LOG_LEVEL") {
            config.logging.level = Some(level);
        }

        config
    }

    /// Deployment profile selected by the configured mode.
    pub fn profile(&self) -> DeploymentProfile {
        DeploymentProfile::select(&self.deployment.mode)
    }

    /// Log level to install: the configured one, else the profile's.
    pub fn log_level(&self, profile: &DeploymentProfile) -> String {
        self.logging
            .level
            .clone()
            .unwrap_or_else(|| profile.log_level.to_string())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
