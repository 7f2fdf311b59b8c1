//! Remote manifest model.
//!
//! A manifest is an ordered collection of remote descriptors, built once per
//! startup attempt and immutable afterward. Construction validates the two
//! invariants the loader relies on: names are unique within one resolution
//! pass, and every entry is an absolute URL.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ResolveError, ResolveResult};

/// A single remote module: unique name plus the URL of its entry manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteDescriptor {
    /// Remote name (e.g. "dashboard").
    pub name: String,

    /// Absolute URL of the remote's entry (e.g. ".../remoteEntry.js").
    pub entry: Url,
}

impl RemoteDescriptor {
    /// Build a descriptor, validating the entry as an absolute URL.
    pub fn new(name: impl Into<String>, entry: &str) -> ResolveResult<Self> {
        let name = name.into();
        let entry = Url::parse(entry).map_err(|e| ResolveError::InvalidEntry {
            name: name.clone(),
            entry: entry.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { name, entry })
    }
}

/// Ordered, name-unique collection of remote descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteManifest {
    remotes: Vec<RemoteDescriptor>,
}

impl RemoteManifest {
    /// Build a manifest from descriptors, rejecting duplicate names.
    pub fn new(remotes: Vec<RemoteDescriptor>) -> ResolveResult<Self> {
        let mut seen: Vec<&str> = Vec::with_capacity(remotes.len());
        for remote in &remotes {
            if seen.contains(&remote.name.as_str()) {
                return Err(ResolveError::InvalidEntry {
                    name: remote.name.clone(),
                    entry: remote.entry.to_string(),
                    reason: "duplicate remote name".to_string(),
                });
            }
            seen.push(&remote.name);
        }
        Ok(Self { remotes })
    }

    /// Parse a fetched manifest document.
    ///
    /// The only accepted shape is a JSON object mapping remote name (string)
    /// to entry URL (string). Anything else is `InvalidManifest`; a malformed
    /// URL value is `InvalidEntry`. Entries come out ordered by name.
    pub fn from_json(document: &str) -> ResolveResult<Self> {
        let value: serde_json::Value =
            serde_json::from_str(document).map_err(|e| ResolveError::InvalidManifest {
                message: format!("failed to parse manifest document: {}", e),
            })?;

        let object = value.as_object().ok_or_else(|| ResolveError::InvalidManifest {
            message: "manifest document must be a JSON object".to_string(),
        })?;

        let mut remotes = Vec::with_capacity(object.len());
        for (name, entry) in object {
            let entry = entry.as_str().ok_or_else(|| ResolveError::InvalidManifest {
                message: format!("entry for remote '{}' must be a string URL", name),
            })?;
            remotes.push(RemoteDescriptor::new(name.clone(), entry)?);
        }

        Self::new(remotes)
    }

    /// Iterate descriptors in manifest order.
    pub fn iter(&self) -> impl Iterator<Item = &RemoteDescriptor> {
        self.remotes.iter()
    }

    /// Remote names in manifest order.
    pub fn names(&self) -> Vec<&str> {
        self.remotes.iter().map(|r| r.name.as_str()).collect()
    }

    /// Entry URL for a named remote, if present.
    pub fn entry(&self, name: &str) -> Option<&Url> {
        self.remotes
            .iter()
            .find(|r| r.name == name)
            .map(|r| &r.entry)
    }

    /// Number of described remotes.
    pub fn len(&self) -> usize {
        self.remotes.len()
    }

    /// Whether the manifest describes no remotes.
    pub fn is_empty(&self) -> bool {
        self.remotes.is_empty()
    }

    /// Descriptors as a slice, in manifest order.
    pub fn as_slice(&self) -> &[RemoteDescriptor] {
        &self.remotes
    }
}
