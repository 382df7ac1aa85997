//! Metric endpoint tests.

mod common;

use analytics_client::models::{LookupOptions, MetricsQuery};
use common::*;
use wiremock::matchers::{method, path, query_param};

#[tokio::test]
async fn test_get_all() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("metrics/get_all.json");

    Mock::given(method("GET"))
        .and(path(company_path("metrics")))
        .and(query_param("rsid", "rsId"))
        .and(query_param("locale", "en_US"))
        .and(query_param("segmentable", "false"))
        .and(query_param("expansion", "a,b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let query = MetricsQuery {
        rsid: "rsId".to_string(),
        locale: "en_US".to_string(),
        segmentable: false,
        expansion: vec!["a".to_string(), "b".to_string()],
    };
    let client = test_client(&mock_server);
    let metrics = client.metrics().get_all(&query).await.unwrap();

    assert_eq!(metrics.len(), 2);
    assert_eq!(metrics[1].id.as_deref(), Some("metrics/visits"));
}

#[tokio::test]
async fn test_get_by_id() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("metrics/get_by_id.json");

    Mock::given(method("GET"))
        .and(path(company_path("metrics/pageviews")))
        .and(query_param("rsid", "rsId"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let metric = client
        .metrics()
        .get_by_id("rsId", "pageviews", &LookupOptions::new())
        .await
        .unwrap();

    assert_eq!(metric.id.as_deref(), Some("metrics/pageviews"));
    assert_eq!(metric.metric_type.as_deref(), Some("int"));
    assert!(metric.allocation);
    assert_eq!(metric.categories, vec!["Traffic Metrics"]);
}

#[tokio::test]
async fn test_get_by_id_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(company_path("metrics/%3F")))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .metrics()
        .get_by_id("rsId", "?", &LookupOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));
}
