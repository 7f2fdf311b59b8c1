//! Command-line arguments for the shell host.

use clap::Parser;
use fedhost_core::{Environment, HostConfig};

/// Micro-frontend shell host: resolves, loads, and degrades gracefully.
#[derive(Debug, Parser)]
#[command(name = "fedhost", version, about)]
pub struct Cli {
    /// Host application name passed to registry initialization.
    #[arg(long, env = "FEDHOST_NAME", default_value = "shell")]
    pub name: String,

    /// Deployment environment: production or development.
    #[arg(long = "env", env = "FEDHOST_ENV", default_value = "development")]
    pub environment: String,

    /// Manifest document URL; when set, endpoints come from a fetched
    /// manifest instead of the static table.
    #[arg(long, env = "FEDHOST_MANIFEST_URL")]
    pub manifest_url: Option<String>,

    /// Base URL the production entries of the static table live under.
    #[arg(long, env = "FEDHOST_CDN_BASE", default_value = "https://cdn.fedhost.dev")]
    pub cdn_base: String,

    /// Timeout in seconds for the manifest fetch and each init probe.
    #[arg(long, env = "FEDHOST_TIMEOUT", default_value_t = 10)]
    pub timeout: u64,
}

impl Cli {
    /// Build the host config this invocation describes.
    pub fn host_config(&self) -> HostConfig {
        let mut config = HostConfig::default()
            .with_name(&self.name)
            .with_environment(Environment::parse(&self.environment))
            .with_timeout_secs(self.timeout);
        if let Some(url) = &self.manifest_url {
            config = config.with_manifest_url(url);
        }
        config
    }
}
