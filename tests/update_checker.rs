//! End-to-end update checks against local HTTP servers

mod helper;

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use mockito::{Matcher, Server};
use tokio::net::TcpListener;

use helper::{FailingSource, StaticSource, unreachable_base_url};
use plugin_update_check::config::PLUGIN_META_DELIMITER;
use plugin_update_check::{
    CheckError, CheckerConfig, Endpoint, EndpointError, UpdateChecker, Version,
};

fn checker_for(endpoint: Endpoint, base_url: &str, resource: &str, current: &str) -> UpdateChecker {
    UpdateChecker::builder()
        .endpoint(endpoint)
        .base_url(base_url)
        .resource(resource)
        .current_version(Version::parse(current).unwrap())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

#[tokio::test]
async fn spigot_check_reports_available_update() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/legacy/update.php")
        .match_query(Matcher::UrlEncoded("resource".into(), "97144".into()))
        .with_status(200)
        .with_body("4.6.2")
        .create_async()
        .await;

    let checker = checker_for(Endpoint::Spigot, &server.url(), "97144", "1.0.0");
    let completed = checker.check().await;

    mock.assert_async().await;
    assert_eq!(completed.latest_version().to_string(), "4.6.2");
    assert!(!completed.is_up_to_date());
}

#[tokio::test]
async fn polymart_check_reports_up_to_date_for_same_version() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/v1/getResourceInfoSimple/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("resource_id".into(), "284".into()),
            Matcher::UrlEncoded("key".into(), "version".into()),
        ]))
        .with_status(200)
        .with_body("2.1.0")
        .create_async()
        .await;

    let checker = checker_for(Endpoint::Polymart, &server.url(), "284", "2.1.0");
    let completed = checker.check().await;

    mock.assert_async().await;
    assert!(completed.is_up_to_date());
}

#[tokio::test]
async fn github_check_parses_tag_with_configured_delimiter() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/repos/WiIIiam278/HuskHomes/releases/latest")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"tag_name": "4.7+build.12"}"#)
        .create_async()
        .await;

    let checker = UpdateChecker::builder()
        .endpoint(Endpoint::GitHub)
        .base_url(server.url())
        .resource("WiIIiam278/HuskHomes")
        .current_version(Version::parse_with_delimiter("4.6.2+dev", PLUGIN_META_DELIMITER).unwrap())
        .version_meta_delimiter(PLUGIN_META_DELIMITER)
        .build()
        .unwrap();
    let completed = checker.check().await;

    mock.assert_async().await;
    assert_eq!(completed.latest_version().components(), &[4, 7]);
    assert_eq!(completed.latest_version().metadata(), "build.12");
    assert!(completed.is_update_available());
}

#[tokio::test]
async fn modrinth_check_degrades_when_only_betas_are_published() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/v2/project/huskhomes/version")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"version_number": "5.0-beta1", "version_type": "beta"}]"#)
        .expect(2)
        .create_async()
        .await;

    let checker = checker_for(Endpoint::Modrinth, &server.url(), "huskhomes", "4.6.2");

    let strict = checker.latest_version().await;
    assert!(matches!(
        strict,
        Err(CheckError::Endpoint(EndpointError::Format(_)))
    ));

    let completed = checker.check().await;

    mock.assert_async().await;
    assert_eq!(completed.latest_version(), completed.current_version());
    assert_eq!(completed.latest_version().to_string(), "4.6.2");
    assert!(completed.is_up_to_date());
}

#[tokio::test]
async fn network_failure_degrades_to_current_version() {
    let checker = checker_for(Endpoint::Spigot, &unreachable_base_url(), "97144", "1.0.0");

    let strict = checker.latest_version().await;
    assert!(matches!(
        strict,
        Err(CheckError::Endpoint(EndpointError::Network(_)))
    ));

    let completed = checker.check().await;

    assert_eq!(completed.latest_version(), completed.current_version());
    assert!(completed.is_up_to_date());
}

#[tokio::test]
async fn hung_connection_times_out_and_degrades() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        // Accept but never answer
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let checker = UpdateChecker::builder()
        .base_url(base_url)
        .resource("97144")
        .current_version(Version::parse("1.0.0").unwrap())
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let completed = tokio::time::timeout(Duration::from_secs(10), checker.check())
        .await
        .expect("check should give up once the request timeout elapses");

    assert_eq!(completed.latest_version(), completed.current_version());
    assert!(completed.is_up_to_date());
}

#[tokio::test]
async fn failing_source_degrades_to_current_version() {
    let checker = UpdateChecker::builder()
        .source(Arc::new(FailingSource))
        .resource("owner/repo")
        .current_version(Version::parse("3.2.1-SNAPSHOT").unwrap())
        .build()
        .unwrap();

    let completed = checker.spawn_check().await.unwrap();

    assert_eq!(checker.endpoint(), Endpoint::GitHub);
    assert_eq!(completed.latest_version().to_string(), "3.2.1-SNAPSHOT");
    assert!(completed.is_up_to_date());
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_checks_are_independent() {
    let source = Arc::new(StaticSource::new("2.0.0"));
    let checker = UpdateChecker::builder()
        .source(source.clone())
        .resource("97144")
        .current_version(Version::parse("1.9.0").unwrap())
        .build()
        .unwrap();

    let handles = (0..8).map(|_| checker.spawn_check()).collect::<Vec<_>>();
    let results = join_all(handles).await;

    assert_eq!(source.calls(), 8);
    for result in results {
        let completed = result.unwrap();
        assert_eq!(completed.latest_version().to_string(), "2.0.0");
        assert!(completed.is_update_available());
    }
}

#[tokio::test]
async fn checker_from_config_queries_configured_endpoint() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/v2/project/huskhomes/version")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"version_number": "4.7-beta1", "version_type": "alpha"},
                {"version_number": "4.6.2", "version_type": "release"}
            ]"#,
        )
        .create_async()
        .await;

    let config: CheckerConfig = serde_json::from_value(serde_json::json!({
        "endpoint": "modrinth",
        "resource": "huskhomes",
        "currentVersion": "4.6.2",
        "timeout": 5000,
        "baseUrl": server.url(),
    }))
    .unwrap();

    let checker = UpdateChecker::from_config(&config).unwrap();
    let completed = checker.check().await;

    mock.assert_async().await;
    assert_eq!(completed.latest_version().to_string(), "4.6.2");
    assert!(completed.is_up_to_date());
}
