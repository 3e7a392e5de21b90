//! Deployment profiles.
//!
//! A deployment mode picks the transport, the default log verbosity and the
//! number of runtime workers. The mode is chosen once at startup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Named deployment modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentMode {
    /// Local development over STDIO.
    Development,
    /// Single-process streamable HTTP server.
    Launchpad,
    /// Stateless HTTP app embedded in a multi-worker host.
    Cloud,
}

/// How the server is connected to its clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransportKind {
    /// MCP over stdin/stdout.
    Stdio,
    /// JSON-RPC over HTTP served by this process.
    StreamableHttp,
    /// HTTP router handed to a host process that owns the listener and workers.
    Embedded,
}

/// Immutable settings for one deployment mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeploymentProfile {
    pub mode: DeploymentMode,
    pub transport: TransportKind,
    pub log_level: &'static str,
    pub workers: usize,
}

const PROFILES: [DeploymentProfile; 3] = [
    DeploymentProfile {
        mode: DeploymentMode::Development,
        transport: TransportKind::Stdio,
        log_level: "debug",
        workers: 1,
    },
    DeploymentProfile {
        mode: DeploymentMode::Launchpad,
        transport: TransportKind::StreamableHttp,
        log_level: "info",
        workers: 1,
    },
    DeploymentProfile {
        mode: DeploymentMode::Cloud,
        transport: TransportKind::Embedded,
        log_level: "info",
        workers: 4,
    },
];

impl DeploymentMode {
    /// Mode used when the requested name is unknown.
    pub const DEFAULT: Self = Self::Development;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Launchpad => "launchpad",
            Self::Cloud => "cloud",
        }
    }

    /// The profile for this mode.
    pub fn profile(self) -> DeploymentProfile {
        PROFILES
            .iter()
            .copied()
            .find(|p| p.mode == self)
            .unwrap_or(PROFILES[0])
    }
}

impl Default for DeploymentMode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentMode {
    type Err = String;

    /// Parse a mode name. `stdio` and `http` are accepted for the first
    /// release's `--mode` flag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "stdio" => Ok(Self::Development),
            "launchpad" | "http" => Ok(Self::Launchpad),
            "cloud" => Ok(Self::Cloud),
            other => Err(format!("Unknown deployment mode: {}", other)),
        }
    }
}

impl DeploymentProfile {
    /// Select the profile for a mode name.
    ///
    /// Unknown names fall back to the default mode instead of failing.
    pub fn select(name: &str) -> Self {
        match name.parse::<DeploymentMode>() {
            Ok(mode) => mode.profile(),
            Err(e) => {
                warn!("{}, falling back to '{}'", e, DeploymentMode::DEFAULT);
                DeploymentMode::DEFAULT.profile()
            }
        }
    }

    /// Whether the server runs its own serve loop until shutdown.
    ///
    /// The embedded profile instead hands a router to the host.
    pub fn is_blocking(&self) -> bool {
        !matches!(self.transport, TransportKind::Embedded)
    }

    /// Whether HTTP requests must be served without per-session state.
    pub fn stateless_http(&self) -> bool {
        matches!(self.transport, TransportKind::Embedded)
    }
}

impl Default for DeploymentProfile {
    fn default() -> Self {
        DeploymentMode::DEFAULT.profile()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_known_modes() {
        let dev = DeploymentProfile::select("development");
        assert_eq!(dev.transport, TransportKind::Stdio);
        assert_eq!(dev.log_level, "debug");
        assert_eq!(dev.workers, 1);

        let launchpad = DeploymentProfile::select("launchpad");
        assert_eq!(launchpad.transport, TransportKind::StreamableHttp);
        assert_eq!(launchpad.workers, 1);

        let cloud = DeploymentProfile::select("cloud");
        assert_eq!(cloud.transport, TransportKind::Embedded);
        assert_eq!(cloud.log_level, "info");
        assert_eq!(cloud.workers, 4);
    }

    #[test]
    fn test_unknown_mode_falls_back_to_default() {
        let profile = DeploymentProfile::select("staging");
        assert_eq!(profile, DeploymentProfile::default());
        assert_eq!(profile.mode, DeploymentMode::Development);

        let empty = DeploymentProfile::select("");
        assert_eq!(empty.mode, DeploymentMode::Development);
    }

    #[test]
    fn test_legacy_mode_names() {
        assert_eq!(DeploymentProfile::select("stdio").mode, DeploymentMode::Development);
        assert_eq!(DeploymentProfile::select("http").mode, DeploymentMode::Launchpad);
    }

    #[test]
    fn test_mode_names_case_insensitive() {
        assert_eq!(DeploymentProfile::select("CLOUD").mode, DeploymentMode::Cloud);
        assert_eq!(DeploymentProfile::select(" Launchpad ").mode, DeploymentMode::Launchpad);
    }

    #[test]
    fn test_blocking_and_stateless() {
        assert!(DeploymentMode::Development.profile().is_blocking());
        assert!(DeploymentMode::Launchpad.profile().is_blocking());
        assert!(!DeploymentMode::Launchpad.profile().stateless_http());

        let cloud = DeploymentMode::Cloud.profile();
        assert!(!cloud.is_blocking());
        assert!(cloud.stateless_http());
    }

    #[test]
    fn test_mode_display_round_trips() {
        for mode in [
            DeploymentMode::Development,
            DeploymentMode::Launchpad,
            DeploymentMode::Cloud,
        ] {
            assert_eq!(mode.to_string().parse::<DeploymentMode>(), Ok(mode));
        }
    }
}
