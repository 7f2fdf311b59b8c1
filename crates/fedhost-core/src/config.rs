//! Host configuration.

use serde::{Deserialize, Serialize};

/// Deployment environment flag, consumed by the static resolver strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development: remotes served from localhost dev servers.
    Development,
    /// Production: remotes served from their deployed origins.
    Production,
}

impl Environment {
    /// Parse the conventional NODE_ENV-style string, defaulting to development.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("production") || value.eq_ignore_ascii_case("prod") {
            Self::Production
        } else {
            Self::Development
        }
    }

    /// Whether this is the production environment.
    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Host shell configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    /// Host application name passed to registry initialization.
    #[serde(default = "default_host_name")]
    pub name: String,

    /// Deployment environment (static strategy only).
    #[serde(default = "default_environment")]
    pub environment: Environment,

    /// Manifest document URL; when set, selects the dynamic strategy.
    #[serde(default)]
    pub manifest_url: Option<String>,

    /// Timeout in seconds for the manifest fetch and each init probe.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_host_name() -> String {
    "shell".to_string()
}

fn default_environment() -> Environment {
    Environment::Development
}

fn default_timeout() -> u64 {
    10
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            name: default_host_name(),
            environment: default_environment(),
            manifest_url: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl HostConfig {
    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `FEDHOST_NAME` | Host application name (default: `shell`) |
    /// | `FEDHOST_ENV` | `production` or `development` |
    /// | `FEDHOST_MANIFEST_URL` | Manifest URL; selects the dynamic strategy |
    /// | `FEDHOST_TIMEOUT` | Fetch/init timeout in seconds (default: 10) |
    pub fn from_env() -> Self {
        Self {
            name: std::env::var("FEDHOST_NAME").unwrap_or_else(|_| default_host_name()),
            environment: std::env::var("FEDHOST_ENV")
                .map(|v| Environment::parse(&v))
                .unwrap_or_else(|_| default_environment()),
            manifest_url: std::env::var("FEDHOST_MANIFEST_URL").ok(),
            timeout_secs: std::env::var("FEDHOST_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_timeout),
        }
    }

    /// Set the host name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the environment flag.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Set the manifest URL (selects the dynamic strategy).
    pub fn with_manifest_url(mut self, url: impl Into<String>) -> Self {
        self.manifest_url = Some(url.into());
        self
    }

    /// Set the fetch/init timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}
