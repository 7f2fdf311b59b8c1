//! Error types for remote resolution and loading.

/// Errors produced while resolving remote endpoints.
///
/// Resolution never yields a partially populated manifest: any malformed
/// entry fails the whole pass with one of these.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Network failure fetching the manifest document.
    #[error("network error: {message}")]
    Network { message: String },

    /// Manifest document could not be parsed into name -> entry pairs.
    #[error("invalid manifest: {message}")]
    InvalidManifest { message: String },

    /// A single entry was malformed (bad URL, duplicate name).
    #[error("invalid entry for remote '{name}': {entry} - {reason}")]
    InvalidEntry {
        name: String,
        entry: String,
        reason: String,
    },

    /// Resolver was misconfigured (e.g. empty static table).
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl From<reqwest::Error> for ResolveError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}

/// Errors produced while initializing the remote registry.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// Remote entry could not be reached.
    #[error("remote '{name}' unreachable at {entry}: {message}")]
    RemoteUnreachable {
        name: String,
        entry: String,
        message: String,
    },

    /// Remote entry responded with a non-success status.
    #[error("remote '{name}' rejected at {entry}: HTTP {status}")]
    Rejected {
        name: String,
        entry: String,
        status: u16,
    },

    /// Initialization infrastructure failure (e.g. HTTP client construction).
    #[error("registry backend error: {message}")]
    Backend { message: String },
}

/// Classified cause of a degraded load attempt.
///
/// Both kinds are non-fatal to the host: the loader logs the cause and
/// continues to bootstrap. Neither is retried.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Endpoint resolution failed before any loading began.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Registry initialization failed for the batch.
    #[error(transparent)]
    Init(#[from] InitError),
}

impl LoadError {
    /// Whether the failure happened before registration began.
    pub fn is_resolve(&self) -> bool {
        matches!(self, Self::Resolve(_))
    }

    /// Whether the failure happened during registry initialization.
    pub fn is_init(&self) -> bool {
        matches!(self, Self::Init(_))
    }
}

/// Result type for resolver operations.
pub type ResolveResult<T> = Result<T, ResolveError>;
