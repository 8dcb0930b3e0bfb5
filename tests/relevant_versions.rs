use std::sync::Arc;

use mockito::{Server, ServerGuard};
use ui5_version_resolver::Ui5VersionResolver;
use ui5_version_resolver::version::cdn::CdnVersionSource;

const PUBLIC_CATALOG: &str = r#"{
    "latest": {"version": "1.120.0", "support": "Maintenance", "lts": false},
    "1.120.0": {"version": "1.120.0", "support": "Maintenance", "lts": false},
    "1.119.1": {"version": "1.119.1", "support": "Maintenance", "lts": false},
    "1.119.0": {"version": "1.119.0", "support": "Maintenance", "lts": false},
    "1.96.25": {"version": "1.96.25", "support": "Maintenance", "lts": true},
    "1.71.50": {"version": "1.71.50", "support": "Out of maintenance", "lts": true}
}"#;

const NEO_APP: &str = r#"{
    "routes": [
        {"path": "/1.120.0", "target": {"version": "1.120.0"}},
        {"path": "/1.119.1", "target": {"version": "1.119.1"}},
        {"path": "/1.96.25", "target": {"version": "1.96.25"}},
        {"path": "/1.38.4", "target": {"version": "1.38.4"}}
    ]
}"#;

async fn serve_catalogs(server: &mut ServerGuard) {
    server
        .mock("GET", "/version.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(PUBLIC_CATALOG)
        .create_async()
        .await;
    server
        .mock("GET", "/neo-app.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(NEO_APP)
        .create_async()
        .await;
}

fn resolver_for(server: &ServerGuard) -> Ui5VersionResolver {
    Ui5VersionResolver::new(Arc::new(CdnVersionSource::new(
        &server.url(),
        &server.url(),
    )))
}

#[tokio::test]
async fn internal_base_selection_list_for_a_snapshot_system() {
    let mut server = Server::new_async().await;
    serve_catalogs(&mut server).await;

    let resolver = resolver_for(&server);
    let versions = resolver
        .relevant_versions(Some("1.119.1.34566363464"), false)
        .await
        .unwrap();

    // Sentinels first, then the system entry, then the internal list
    // with the pre-baseline route filtered out. The system's own route
    // entry is relabeled and deduplicated against the front entry.
    assert_eq!(
        versions,
        vec![
            "snapshot".to_string(),
            "snapshot-untested".to_string(),
            "1.119.1-snapshot (system version)".to_string(),
            "1.120.0 (latest)".to_string(),
            "1.96.25".to_string()
        ]
    );
}

#[tokio::test]
async fn internal_base_selection_list_never_contains_duplicates() {
    let mut server = Server::new_async().await;
    serve_catalogs(&mut server).await;

    let resolver = resolver_for(&server);
    let versions = resolver
        .relevant_versions(Some("1.119.1"), false)
        .await
        .unwrap();

    let unique: std::collections::HashSet<_> = versions.iter().collect();
    assert_eq!(unique.len(), versions.len());
    assert!(versions.contains(&"1.119.1 (system version)".to_string()));
}

#[tokio::test]
async fn customer_base_selection_list_offers_the_system_version_and_newer() {
    let mut server = Server::new_async().await;
    serve_catalogs(&mut server).await;

    let resolver = resolver_for(&server);
    let versions = resolver
        .relevant_versions(Some("1.119.0"), true)
        .await
        .unwrap();

    assert_eq!(
        versions,
        vec![
            "1.119.0 (system version)".to_string(),
            "1.119.1".to_string(),
            "1.120.0 (latest)".to_string()
        ]
    );
}

#[tokio::test]
async fn customer_base_selection_list_without_a_system_version() {
    let mut server = Server::new_async().await;
    serve_catalogs(&mut server).await;

    let resolver = resolver_for(&server);
    let versions = resolver.relevant_versions(None, true).await.unwrap();

    assert_eq!(versions, vec!["1.120.0 (latest)".to_string()]);
}

#[tokio::test]
async fn public_endpoint_failure_degrades_to_the_bundled_catalog() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/version.json")
        .with_status(503)
        .with_body("unavailable")
        .create_async()
        .await;

    let resolver = resolver_for(&server);
    let versions = resolver.relevant_versions(None, true).await.unwrap();

    // The single offered entry comes from the bundled fallback catalog.
    assert_eq!(versions.len(), 1);
    assert!(versions[0].ends_with(" (latest)"));
}

#[tokio::test]
async fn internal_endpoint_failure_propagates() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/version.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(PUBLIC_CATALOG)
        .create_async()
        .await;
    server
        .mock("GET", "/neo-app.json")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let resolver = resolver_for(&server);
    let result = resolver.relevant_versions(Some("1.119.1"), false).await;

    assert!(result.is_err());
}
