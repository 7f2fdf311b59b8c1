//! Runtime remote registry.
//!
//! The registry is an explicitly passed context object, created per load
//! attempt: written only during registration, read-only afterward. Name
//! lookups resolve only once the batch has been initialized.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;

use crate::error::InitError;
use crate::manifest::RemoteDescriptor;

/// Process-level registry mapping remote names to their entries.
#[derive(Debug, Clone)]
pub struct RemoteRegistry {
    host: String,
    remotes: Vec<RemoteDescriptor>,
    initialized: bool,
}

impl RemoteRegistry {
    /// Create an empty registry for the named host application.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            remotes: Vec::new(),
            initialized: false,
        }
    }

    /// Register a descriptor. Pure bookkeeping; input is assumed well-formed
    /// (the manifest enforces name uniqueness).
    pub fn register(&mut self, descriptor: RemoteDescriptor) {
        debug!(name = %descriptor.name, entry = %descriptor.entry, "registered remote");
        self.remotes.push(descriptor);
    }

    /// Mark the batch as initialized. Called once by the loader after the
    /// backend reports success.
    pub(crate) fn mark_initialized(&mut self) {
        self.initialized = true;
    }

    /// Resolve a remote name to its entry URL. Returns `None` until the
    /// registry has been initialized.
    pub fn resolve(&self, name: &str) -> Option<&Url> {
        if !self.initialized {
            return None;
        }
        self.remotes
            .iter()
            .find(|r| r.name == name)
            .map(|r| &r.entry)
    }

    /// Host application name this registry was created for.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Registered descriptors, in registration order.
    pub fn remotes(&self) -> &[RemoteDescriptor] {
        &self.remotes
    }

    /// Whether initialization succeeded for the whole batch.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of registered remotes.
    pub fn len(&self) -> usize {
        self.remotes.len()
    }

    /// Whether no remotes are registered.
    pub fn is_empty(&self) -> bool {
        self.remotes.is_empty()
    }
}

/// Initialization seam: makes a registered batch of remotes live.
///
/// One call covers the whole batch; there is no per-remote outcome. This is
/// where network/version/compatibility failures surface.
#[async_trait]
pub trait RegistryBackend: Send + Sync {
    /// Initialize the batch for the named host. All-or-nothing.
    async fn initialize(&self, host: &str, remotes: &[RemoteDescriptor]) -> Result<(), InitError>;
}

/// Backend that probes each remote's entry over HTTP.
///
/// The first unreachable or non-success entry fails the batch; probes run
/// sequentially with a bounded per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpRegistryBackend {
    client: reqwest::Client,
}

impl HttpRegistryBackend {
    /// Create a backend with the given per-probe timeout.
    pub fn new(timeout_secs: u64) -> Result<Self, InitError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| InitError::Backend {
                message: format!("failed to create HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl RegistryBackend for HttpRegistryBackend {
    async fn initialize(&self, host: &str, remotes: &[RemoteDescriptor]) -> Result<(), InitError> {
        for remote in remotes {
            debug!(host, name = %remote.name, entry = %remote.entry, "probing remote entry");

            let response = self
                .client
                .get(remote.entry.clone())
                .send()
                .await
                .map_err(|e| InitError::RemoteUnreachable {
                    name: remote.name.clone(),
                    entry: remote.entry.to_string(),
                    message: e.to_string(),
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(InitError::Rejected {
                    name: remote.name.clone(),
                    entry: remote.entry.to_string(),
                    status: status.as_u16(),
                });
            }
        }

        info!(host, remotes = remotes.len(), "registry initialized");
        Ok(())
    }
}
