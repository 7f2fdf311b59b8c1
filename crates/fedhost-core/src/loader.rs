//! Remote loading and fallback.
//!
//! Drives one startup attempt: await resolution, register the batch, await
//! initialization, then hand off to the local bootstrap continuation. The
//! continuation runs exactly once from a single call site regardless of
//! outcome, so the host shell degrades instead of crashing when remotes are
//! unavailable or version-mismatched.

use std::future::Future;

use tracing::{error, info};

use crate::error::LoadError;
use crate::registry::{RegistryBackend, RemoteRegistry};
use crate::resolver::EndpointResolver;

/// States traversed by one load attempt.
///
/// `Idle -> Resolving -> {Resolved -> Initializing -> {Initialized,
/// InitFailed}} | ResolveFailed`; every terminal state transitions
/// unconditionally to `BootstrapStarted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Resolving,
    Resolved,
    ResolveFailed,
    Initializing,
    Initialized,
    InitFailed,
    BootstrapStarted,
}

impl std::fmt::Display for LoadPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Resolving => "resolving",
            Self::Resolved => "resolved",
            Self::ResolveFailed => "resolve-failed",
            Self::Initializing => "initializing",
            Self::Initialized => "initialized",
            Self::InitFailed => "init-failed",
            Self::BootstrapStarted => "bootstrap-started",
        };
        write!(f, "{}", s)
    }
}

/// Result of one load attempt. All-or-nothing: no partial success.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The registry now resolves every descriptor in the manifest.
    Loaded(RemoteRegistry),

    /// Loading failed; the host runs without remote functionality.
    Degraded(LoadError),
}

impl LoadOutcome {
    /// Whether the batch loaded.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// The initialized registry, if loading succeeded.
    pub fn registry(&self) -> Option<&RemoteRegistry> {
        match self {
            Self::Loaded(registry) => Some(registry),
            Self::Degraded(_) => None,
        }
    }

    /// The classified cause, if loading failed.
    pub fn error(&self) -> Option<&LoadError> {
        match self {
            Self::Loaded(_) => None,
            Self::Degraded(err) => Some(err),
        }
    }
}

/// Report for one completed startup attempt.
#[derive(Debug)]
pub struct LoadReport {
    /// Outcome consumed by the host after bootstrap.
    pub outcome: LoadOutcome,

    /// Phases traversed, ending in `BootstrapStarted`.
    pub phases: Vec<LoadPhase>,
}

/// Loads resolved remotes and guarantees the bootstrap handoff.
pub struct RemoteLoader<B> {
    host: String,
    backend: B,
}

impl<B: RegistryBackend> RemoteLoader<B> {
    /// Create a loader for the named host application.
    pub fn new(host: impl Into<String>, backend: B) -> Self {
        Self {
            host: host.into(),
            backend,
        }
    }

    /// Run one startup attempt, then invoke `bootstrap` exactly once.
    ///
    /// Holds no state between calls: a fresh registry is built per attempt,
    /// so the same manifest yields the same outcome classification every
    /// time. Failure emits a classified diagnostic before the handoff;
    /// success continues silently past an info line.
    pub async fn run<F, Fut>(&self, resolver: &EndpointResolver, bootstrap: F) -> LoadReport
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        let mut phases = vec![LoadPhase::Idle];
        let outcome = self.attempt(resolver, &mut phases).await;

        match &outcome {
            LoadOutcome::Loaded(registry) => {
                info!(host = %self.host, remotes = registry.len(), "remote entries loaded");
            }
            LoadOutcome::Degraded(err) => {
                let kind = if err.is_resolve() { "resolve" } else { "init" };
                error!(host = %self.host, kind, error = %err, "error loading remote entries");
            }
        }

        // Single handoff for both paths.
        bootstrap().await;
        phases.push(LoadPhase::BootstrapStarted);

        LoadReport { outcome, phases }
    }

    async fn attempt(
        &self,
        resolver: &EndpointResolver,
        phases: &mut Vec<LoadPhase>,
    ) -> LoadOutcome {
        phases.push(LoadPhase::Resolving);
        let manifest = match resolver.resolve().await {
            Ok(manifest) => manifest,
            Err(err) => {
                phases.push(LoadPhase::ResolveFailed);
                return LoadOutcome::Degraded(err.into());
            }
        };
        phases.push(LoadPhase::Resolved);

        let mut registry = RemoteRegistry::new(&self.host);
        for descriptor in manifest.iter() {
            registry.register(descriptor.clone());
        }

        phases.push(LoadPhase::Initializing);
        match self
            .backend
            .initialize(registry.host(), registry.remotes())
            .await
        {
            Ok(()) => {
                registry.mark_initialized();
                phases.push(LoadPhase::Initialized);
                LoadOutcome::Loaded(registry)
            }
            Err(err) => {
                phases.push(LoadPhase::InitFailed);
                LoadOutcome::Degraded(err.into())
            }
        }
    }
}
