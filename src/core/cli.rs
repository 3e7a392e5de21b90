//! Command line definitions.
//!
//! Flags override the values loaded by [`Config::from_env`].

use clap::Parser;

use super::config::Config;

/// CLI arguments for the Voicebox MCP server
#[derive(Parser, Debug, Default)]
#[command(name = "voicebox-mcp-server")]
#[command(author, version, about = "MCP server exposing Stardog Cloud Voicebox as tools")]
#[command(long_about = r#"
Serves the Voicebox tools (voicebox_settings, voicebox_ask,
voicebox_generate_query) over the Model Context Protocol.

Values are resolved in priority order:
1. Command line flags
2. Environment variables (SDC_ENDPOINT, SDC_API_TOKEN, SDC_CLIENT_ID, ...)
3. A .env file in the working directory
4. Built-in defaults

Deployment modes:
  development   STDIO transport (default)
  launchpad     Streamable HTTP on --host/--port
  cloud         Stateless HTTP app on a multi-worker runtime

Example:
  voicebox-mcp-server --token <APP_TOKEN>
  voicebox-mcp-server --mode launchpad --port 7000
"#)]
pub struct Cli {
    /// Stardog Cloud API endpoint
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Voicebox application API token used when a request has none
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Deployment mode (development, launchpad, cloud)
    #[arg(long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Port for the HTTP transports
    #[arg(long)]
    pub port: Option<u16>,

    /// Host address for the HTTP transports
    #[arg(long)]
    pub host: Option<String>,

    /// Client id reported to Voicebox
    #[arg(long, value_name = "ID")]
    pub client_id: Option<String>,

    /// Stardog auth token override
    #[arg(long, value_name = "TOKEN")]
    pub auth_token_override: Option<String>,

    /// Voicebox request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<f64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Apply the flags that were given on top of `config`.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.voicebox.endpoint = endpoint.clone();
        }
        if let Some(token) = &self.token {
            config.credentials.api_token = Some(token.clone());
        }
        if let Some(mode) = &self.mode {
            config.deployment.mode = mode.clone();
        }
        if let Some(port) = self.port {
            config.http.port = port;
        }
        if let Some(host) = &self.host {
            config.http.host = host.clone();
        }
        if let Some(client_id) = &self.client_id {
            config.credentials.client_id = Some(client_id.clone());
        }
        if let Some(auth_token) = &self.auth_token_override {
            config.credentials.auth_token_override = Some(auth_token.clone());
        }
        if let Some(timeout) = self.timeout {
            config.voicebox.timeout_secs = Some(timeout);
        }
        if let Some(level) = &self.log_level {
            config.logging.level = Some(level.clone());
        }
    }
}
