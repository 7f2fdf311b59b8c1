//! Remote-module registry and loader for module-federation shell hosts.
//!
//! This crate implements the runtime core of a micro-frontend shell:
//!
//! - Endpoint resolution: static environment-keyed tables or a runtime-fetched
//!   manifest document
//! - A per-attempt remote registry with an explicit initialization seam
//! - A loader that degrades gracefully: the local bootstrap continuation runs
//!   exactly once whether or not the remotes could be loaded
//!
//! # Quick Start
//!
//! ```no_run
//! use fedhost_core::{
//!     EndpointResolver, HostConfig, HttpRegistryBackend, RemoteLoader,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HostConfig::from_env();
//! let resolver = EndpointResolver::from_config(&config, vec![])?;
//! let backend = HttpRegistryBackend::new(config.timeout_secs)?;
//! let loader = RemoteLoader::new(&config.name, backend);
//!
//! let report = loader.run(&resolver, || async { /* start the shell */ }).await;
//! if let Some(registry) = report.outcome.registry() {
//!     println!("loaded {} remotes", registry.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Degradation policy
//!
//! Remotes are independently deployed and may be unavailable or
//! version-mismatched at any startup. Resolution and initialization failures
//! are classified, logged, and never fatal: the host shell always reaches its
//! bootstrap, possibly without remote functionality. Neither failure kind is
//! retried, and there is no per-remote partial success.

pub mod config;
pub mod error;
pub mod loader;
pub mod manifest;
pub mod registry;
pub mod resolver;

// Re-export main types
pub use config::{Environment, HostConfig};
pub use error::{InitError, LoadError, ResolveError, ResolveResult};
pub use loader::{LoadOutcome, LoadPhase, LoadReport, RemoteLoader};
pub use manifest::{RemoteDescriptor, RemoteManifest};
pub use registry::{HttpRegistryBackend, RegistryBackend, RemoteRegistry};
pub use resolver::{EndpointResolver, RemoteEndpoints, ResolveStrategy};
