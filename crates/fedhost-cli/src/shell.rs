//! Default remote table and the local bootstrap continuation.

use fedhost_core::{LoadReport, RemoteEndpoints, ResolveResult};
use tracing::info;

/// Remotes of the default deployment with their development ports.
const DEFAULT_REMOTES: [(&str, u16); 4] = [
    ("dashboard", 4301),
    ("analytics", 4302),
    ("products", 4303),
    ("orders", 4304),
];

/// Static endpoint table for the default deployment.
///
/// Production entries live under `cdn_base/<name>/remoteEntry.js`;
/// development entries are the local dev servers.
pub fn default_table(cdn_base: &str) -> ResolveResult<Vec<RemoteEndpoints>> {
    let cdn_base = cdn_base.trim_end_matches('/');
    DEFAULT_REMOTES
        .iter()
        .map(|(name, dev_port)| {
            RemoteEndpoints::new(
                *name,
                &format!("{}/{}/remoteEntry.js", cdn_base, name),
                &format!("http://localhost:{}/remoteEntry.js", dev_port),
            )
        })
        .collect()
}

/// Local application entry point. Runs exactly once per startup attempt,
/// whether or not the remotes loaded.
pub async fn bootstrap() {
    info!("shell bootstrap started");
}

/// Print the post-bootstrap summary for the operator.
pub fn print_summary(report: &LoadReport) {
    match report.outcome.registry() {
        Some(registry) => {
            println!("shell running with {} remote(s):", registry.len());
            for remote in registry.remotes() {
                println!("  {} -> {}", remote.name, remote.entry);
            }
        }
        None => {
            println!("shell running degraded: no remotes available");
        }
    }
}
