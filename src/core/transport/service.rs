//! Transport service - starts the transport selected by the deployment profile.
//!
//! This service provides a unified interface for starting the MCP server
//! with different transport mechanisms.

use tracing::info;

use super::{HttpConfig, TransportConfig, TransportError, TransportResult};
use crate::core::McpServer;
use crate::core::deployment::DeploymentProfile;

#[cfg(feature = "stdio")]
use super::stdio::StdioTransport;

#[cfg(feature = "http")]
use super::http::HttpTransport;

/// Transport service - manages the transport layer for the MCP server.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    /// Create a new transport service with the given configuration.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Create the transport service for a deployment profile.
    pub fn for_profile(profile: &DeploymentProfile, http: &HttpConfig) -> TransportResult<Self> {
        TransportConfig::for_profile(profile, http)
            .map(Self::new)
            .map_err(TransportError::init)
    }

    /// Get the transport configuration.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Log information about the configured transport.
    pub fn log_info(&self) {
        info!("Starting transport: {}", self.config.description());
    }

    /// Start the transport with the given MCP server.
    ///
    /// This method blocks until the transport is shut down.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        self.log_info();

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => StdioTransport::run(server).await,
            #[cfg(feature = "http")]
            TransportConfig::Http(cfg) => HttpTransport::new(cfg).run(server).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::deployment::DeploymentMode;

    #[test]
    fn test_service_for_each_profile() {
        let http = HttpConfig::default();
        for mode in [
            DeploymentMode::Development,
            DeploymentMode::Launchpad,
            DeploymentMode::Cloud,
        ] {
            let service = TransportService::for_profile(&mode.profile(), &http).unwrap();
            assert_eq!(
                service.config().is_stdio(),
                mode == DeploymentMode::Development
            );
        }
    }
}
