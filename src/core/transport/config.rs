//! Transport configuration types.

use serde::{Deserialize, Serialize};

use crate::core::deployment::{DeploymentProfile, TransportKind};

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (development deployment).
    #[cfg(feature = "stdio")]
    Stdio,

    /// HTTP transport with JSON-RPC over POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// HTTP transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path for JSON-RPC endpoint.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,

    /// Serve every request without session state.
    #[serde(default)]
    pub stateless: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_rpc_path() -> String {
    "/mcp".to_string()
}

fn default_cors() -> bool {
    true
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: 7000,
            host: default_host(),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
            stateless: false,
        }
    }
}

impl HttpConfig {
    /// Bind address in `host:port` form.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl TransportConfig {
    /// Build the transport for a deployment profile.
    ///
    /// Fails when the profile needs a transport that was compiled out.
    pub fn for_profile(profile: &DeploymentProfile, http: &HttpConfig) -> Result<Self, String> {
        match profile.transport {
            #[cfg(feature = "stdio")]
            TransportKind::Stdio => Ok(Self::Stdio),
            #[cfg(feature = "http")]
            TransportKind::StreamableHttp | TransportKind::Embedded => Ok(Self::Http(HttpConfig {
                stateless: profile.stateless_http(),
                ..http.clone()
            })),
            #[allow(unreachable_patterns)]
            other => Err(format!(
                "Deployment '{}' needs the {:?} transport, which is not compiled in",
                profile.mode, other
            )),
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "http")]
            Self::Http(cfg) if cfg.stateless => format!(
                "stateless HTTP on {}:{}{}",
                cfg.host, cfg.port, cfg.rpc_path
            ),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
        }
    }

    /// Check if this transport is the standard STDIO mode.
    pub fn is_stdio(&self) -> bool {
        #[cfg(feature = "stdio")]
        {
            matches!(self, Self::Stdio)
        }
        #[cfg(not(feature = "stdio"))]
        {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::deployment::DeploymentMode;

    #[test]
    fn test_http_defaults() {
        let cfg = HttpConfig::default();
        assert_eq!(cfg.port, 7000);
        assert_eq!(cfg.rpc_path, "/mcp");
        assert!(!cfg.stateless);
        assert_eq!(cfg.address(), "0.0.0.0:7000");
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_development_uses_stdio() {
        let profile = DeploymentMode::Development.profile();
        let transport = TransportConfig::for_profile(&profile, &HttpConfig::default()).unwrap();
        assert!(transport.is_stdio());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_cloud_is_stateless_http() {
        let http = HttpConfig {
            port: 9001,
            ..Default::default()
        };

        let launchpad = DeploymentMode::Launchpad.profile();
        match TransportConfig::for_profile(&launchpad, &http).unwrap() {
            TransportConfig::Http(cfg) => {
                assert_eq!(cfg.port, 9001);
                assert!(!cfg.stateless);
            }
            other => panic!("unexpected transport: {:?}", other),
        }

        let cloud = DeploymentMode::Cloud.profile();
        let transport = TransportConfig::for_profile(&cloud, &http).unwrap();
        assert!(transport.description().starts_with("stateless HTTP"));
    }
}
