//! Endpoint resolution.
//!
//! Produces a [`RemoteManifest`] without performing any module loading.
//! Two strategies, selected by configuration:
//!
//! 1. Static: pure lookup in an environment-keyed endpoint table. No I/O.
//! 2. Dynamic: single HTTP GET of a manifest document, parsed as a JSON
//!    object of name -> entry URL.
//!
//! Resolution failure is terminal for the startup attempt; the caller funnels
//! it into the same fallback path as loader failures. No retries.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, info};
use url::Url;

use crate::config::{Environment, HostConfig};
use crate::error::{ResolveError, ResolveResult};
use crate::manifest::{RemoteDescriptor, RemoteManifest};

const USER_AGENT_VALUE: &str = concat!("fedhost/", env!("CARGO_PKG_VERSION"));

/// One row of the static endpoint table: a remote name and its entry URL
/// per environment.
#[derive(Debug, Clone)]
pub struct RemoteEndpoints {
    /// Remote name.
    pub name: String,

    /// Entry URL used in production.
    pub production: Url,

    /// Entry URL used in development.
    pub development: Url,
}

impl RemoteEndpoints {
    /// Build a table row, validating both URLs.
    pub fn new(name: impl Into<String>, production: &str, development: &str) -> ResolveResult<Self> {
        let name = name.into();
        let production = parse_entry(&name, production)?;
        let development = parse_entry(&name, development)?;
        Ok(Self {
            name,
            production,
            development,
        })
    }

    /// Entry URL for the given environment flag.
    pub fn entry_for(&self, environment: Environment) -> &Url {
        match environment {
            Environment::Production => &self.production,
            Environment::Development => &self.development,
        }
    }
}

fn parse_entry(name: &str, entry: &str) -> ResolveResult<Url> {
    Url::parse(entry).map_err(|e| ResolveError::InvalidEntry {
        name: name.to_string(),
        entry: entry.to_string(),
        reason: e.to_string(),
    })
}

/// Strategy for producing the remote manifest.
#[derive(Debug, Clone)]
pub enum ResolveStrategy {
    /// Hardcoded environment-keyed table; selection is a pure function of
    /// the environment flag.
    Static {
        environment: Environment,
        table: Vec<RemoteEndpoints>,
    },

    /// Fetch and parse a manifest document from this URL. The URL is
    /// validated at resolve time, so a misconfigured value classifies as a
    /// resolver failure and reaches the same fallback path.
    Dynamic { manifest_url: String },
}

/// Resolves remote names to entry URLs.
pub struct EndpointResolver {
    strategy: ResolveStrategy,
    client: reqwest::Client,
}

impl EndpointResolver {
    /// Create a resolver with an explicit strategy.
    pub fn new(strategy: ResolveStrategy, timeout_secs: u64) -> ResolveResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(|e| ResolveError::Config {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self { strategy, client })
    }

    /// Create a resolver from host config plus a static endpoint table.
    ///
    /// A configured manifest URL selects the dynamic strategy; otherwise the
    /// static strategy uses the config's environment flag over `table`. This
    /// is the single strategy switch for both shell entry modes.
    pub fn from_config(config: &HostConfig, table: Vec<RemoteEndpoints>) -> ResolveResult<Self> {
        let strategy = match &config.manifest_url {
            Some(raw) => ResolveStrategy::Dynamic {
                manifest_url: raw.clone(),
            },
            None => ResolveStrategy::Static {
                environment: config.environment,
                table,
            },
        };
        Self::new(strategy, config.timeout_secs)
    }

    /// Produce the remote manifest for this startup attempt.
    pub async fn resolve(&self) -> ResolveResult<RemoteManifest> {
        match &self.strategy {
            ResolveStrategy::Static { environment, table } => {
                debug!(environment = %environment, remotes = table.len(), "resolving static table");
                resolve_static(*environment, table)
            }
            ResolveStrategy::Dynamic { manifest_url } => {
                debug!(url = %manifest_url, "fetching remote manifest");
                self.resolve_dynamic(manifest_url).await
            }
        }
    }

    async fn resolve_dynamic(&self, raw_url: &str) -> ResolveResult<RemoteManifest> {
        let manifest_url = Url::parse(raw_url).map_err(|e| ResolveError::Config {
            message: format!("invalid manifest URL '{}': {}", raw_url, e),
        })?;

        let response = self.client.get(manifest_url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::Network {
                message: format!("manifest fetch returned HTTP {}", status.as_u16()),
            });
        }

        let document = response.text().await.map_err(|e| ResolveError::Network {
            message: format!("failed to read manifest body: {}", e),
        })?;

        let manifest = RemoteManifest::from_json(&document)?;
        info!(url = %manifest_url, remotes = manifest.len(), "resolved dynamic manifest");
        Ok(manifest)
    }
}

fn resolve_static(
    environment: Environment,
    table: &[RemoteEndpoints],
) -> ResolveResult<RemoteManifest> {
    let remotes = table
        .iter()
        .map(|row| RemoteDescriptor {
            name: row.name.clone(),
            entry: row.entry_for(environment).clone(),
        })
        .collect();

    let manifest = RemoteManifest::new(remotes)?;
    info!(environment = %environment, remotes = manifest.len(), "resolved static manifest");
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<RemoteEndpoints> {
        vec![
            RemoteEndpoints::new(
                "dashboard",
                "https://cdn.example.com/dashboard/remoteEntry.js",
                "http://localhost:4301/remoteEntry.js",
            )
            .unwrap(),
            RemoteEndpoints::new(
                "analytics",
                "https://cdn.example.com/analytics/remoteEntry.js",
                "http://localhost:4302/remoteEntry.js",
            )
            .unwrap(),
        ]
    }

    #[tokio::test]
    async fn test_static_production_selects_prod_column() {
        let resolver = EndpointResolver::new(
            ResolveStrategy::Static {
                environment: Environment::Production,
                table: table(),
            },
            10,
        )
        .unwrap();

        let manifest = resolver.resolve().await.unwrap();
        assert_eq!(manifest.names(), vec!["dashboard", "analytics"]);
        assert_eq!(
            manifest.entry("dashboard").unwrap().as_str(),
            "https://cdn.example.com/dashboard/remoteEntry.js"
        );
        assert_eq!(
            manifest.entry("analytics").unwrap().as_str(),
            "https://cdn.example.com/analytics/remoteEntry.js"
        );
    }

    #[tokio::test]
    async fn test_static_development_selects_dev_column() {
        let resolver = EndpointResolver::new(
            ResolveStrategy::Static {
                environment: Environment::Development,
                table: table(),
            },
            10,
        )
        .unwrap();

        let manifest = resolver.resolve().await.unwrap();
        assert_eq!(
            manifest.entry("dashboard").unwrap().as_str(),
            "http://localhost:4301/remoteEntry.js"
        );
        assert_eq!(
            manifest.entry("analytics").unwrap().as_str(),
            "http://localhost:4302/remoteEntry.js"
        );
    }

    #[tokio::test]
    async fn test_static_preserves_table_order() {
        let resolver = EndpointResolver::new(
            ResolveStrategy::Static {
                environment: Environment::Production,
                table: table(),
            },
            10,
        )
        .unwrap();

        let manifest = resolver.resolve().await.unwrap();
        let names: Vec<_> = manifest.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["dashboard", "analytics"]);
    }

    #[tokio::test]
    async fn test_static_empty_table_yields_empty_manifest() {
        let resolver = EndpointResolver::new(
            ResolveStrategy::Static {
                environment: Environment::Development,
                table: vec![],
            },
            10,
        )
        .unwrap();

        let manifest = resolver.resolve().await.unwrap();
        assert!(manifest.is_empty());
    }

    #[tokio::test]
    async fn test_bad_manifest_url_fails_at_resolve_time() {
        // Construction succeeds; the misconfigured URL classifies as a
        // resolver failure so it reaches the unified fallback path.
        let config = HostConfig::default().with_manifest_url("not a url");
        let resolver = EndpointResolver::from_config(&config, vec![]).unwrap();

        let result = resolver.resolve().await;
        assert!(matches!(result, Err(ResolveError::Config { .. })));
    }

    #[test]
    fn test_endpoints_reject_invalid_url() {
        let result = RemoteEndpoints::new("dashboard", "https://ok/remoteEntry.js", "nope");
        assert!(matches!(result, Err(ResolveError::InvalidEntry { .. })));
    }
}
