//! End-to-end load attempts against mocked remotes.
//!
//! Exercises the full path: dynamic manifest fetch, registration, HTTP batch
//! initialization, and the exactly-once bootstrap handoff on every outcome.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use fedhost_core::{
    EndpointResolver, HttpRegistryBackend, LoadPhase, RemoteLoader, ResolveStrategy,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MANIFEST_PATH: &str = "/assets/module-federation.manifest.json";

fn dynamic_resolver(mock_server: &MockServer) -> EndpointResolver {
    let manifest_url = format!("{}{}", mock_server.uri(), MANIFEST_PATH);
    EndpointResolver::new(ResolveStrategy::Dynamic { manifest_url }, 5)
        .expect("failed to create resolver")
}

fn loader() -> RemoteLoader<HttpRegistryBackend> {
    RemoteLoader::new("shell", HttpRegistryBackend::new(5).expect("backend"))
}

fn bootstrap_counter() -> (Arc<AtomicUsize>, impl FnOnce() -> std::future::Ready<()>) {
    let count = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&count);
    let bootstrap = move || {
        counted.fetch_add(1, Ordering::SeqCst);
        std::future::ready(())
    };
    (count, bootstrap)
}

async fn mount_remote(mock_server: &MockServer, entry_path: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(entry_path))
        .respond_with(ResponseTemplate::new(status).set_body_string("/* remote entry */"))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_full_load_success() {
    let mock_server = MockServer::start().await;
    let manifest = format!(
        r#"{{"dashboard":"{uri}/dashboard/remoteEntry.js","analytics":"{uri}/analytics/remoteEntry.js"}}"#,
        uri = mock_server.uri()
    );
    Mock::given(method("GET"))
        .and(path(MANIFEST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(manifest))
        .mount(&mock_server)
        .await;
    mount_remote(&mock_server, "/dashboard/remoteEntry.js", 200).await;
    mount_remote(&mock_server, "/analytics/remoteEntry.js", 200).await;

    let resolver = dynamic_resolver(&mock_server);
    let (count, bootstrap) = bootstrap_counter();

    let report = loader().run(&resolver, bootstrap).await;

    assert_eq!(count.load(Ordering::SeqCst), 1);
    let registry = report.outcome.registry().expect("expected loaded outcome");
    assert!(registry.is_initialized());
    assert!(registry.resolve("dashboard").is_some());
    assert!(registry.resolve("analytics").is_some());
    assert_eq!(report.phases.last(), Some(&LoadPhase::BootstrapStarted));
}

#[tokio::test]
async fn test_missing_remote_degrades_whole_batch() {
    let mock_server = MockServer::start().await;
    let manifest = format!(
        r#"{{"dashboard":"{uri}/dashboard/remoteEntry.js","analytics":"{uri}/analytics/remoteEntry.js"}}"#,
        uri = mock_server.uri()
    );
    Mock::given(method("GET"))
        .and(path(MANIFEST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(manifest))
        .mount(&mock_server)
        .await;
    mount_remote(&mock_server, "/dashboard/remoteEntry.js", 200).await;
    mount_remote(&mock_server, "/analytics/remoteEntry.js", 404).await;

    let resolver = dynamic_resolver(&mock_server);
    let (count, bootstrap) = bootstrap_counter();

    let report = loader().run(&resolver, bootstrap).await;

    // One unavailable remote fails the batch; the shell still bootstraps.
    assert_eq!(count.load(Ordering::SeqCst), 1);
    let err = report.outcome.error().expect("expected degraded outcome");
    assert!(err.is_init());
    assert!(report.phases.contains(&LoadPhase::InitFailed));
    assert_eq!(report.phases.last(), Some(&LoadPhase::BootstrapStarted));
}

#[tokio::test]
async fn test_manifest_parse_failure_still_bootstraps() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(MANIFEST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("{invalid"))
        .mount(&mock_server)
        .await;

    let resolver = dynamic_resolver(&mock_server);
    let (count, bootstrap) = bootstrap_counter();

    let report = loader().run(&resolver, bootstrap).await;

    assert_eq!(count.load(Ordering::SeqCst), 1);
    let err = report.outcome.error().expect("expected degraded outcome");
    assert!(err.is_resolve());
    assert!(report.phases.contains(&LoadPhase::ResolveFailed));
    assert_eq!(report.phases.last(), Some(&LoadPhase::BootstrapStarted));
}

#[tokio::test]
async fn test_repeat_attempts_classify_identically() {
    let mock_server = MockServer::start().await;
    let manifest = format!(
        r#"{{"dashboard":"{uri}/dashboard/remoteEntry.js"}}"#,
        uri = mock_server.uri()
    );
    Mock::given(method("GET"))
        .and(path(MANIFEST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(manifest))
        .mount(&mock_server)
        .await;
    mount_remote(&mock_server, "/dashboard/remoteEntry.js", 503).await;

    let resolver = dynamic_resolver(&mock_server);
    let the_loader = loader();

    let first = the_loader.run(&resolver, || std::future::ready(())).await;
    let second = the_loader.run(&resolver, || std::future::ready(())).await;

    assert!(first.outcome.error().unwrap().is_init());
    assert!(second.outcome.error().unwrap().is_init());
    assert_eq!(first.phases, second.phases);
}
