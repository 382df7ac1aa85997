//! Segment endpoint tests.

mod common;

use analytics_client::models::{LookupOptions, SegmentsQuery};
use common::*;
use wiremock::matchers::{method, path, query_param};

#[tokio::test]
async fn test_get_all() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("segments/get_all.json");

    Mock::given(method("GET"))
        .and(path(company_path("segments")))
        .and(query_param("rsids", "rsId"))
        .and(query_param("segmentFilter", "s1"))
        .and(query_param("locale", "en_US"))
        .and(query_param("name", "mobile"))
        .and(query_param("tagNames", "devices"))
        .and(query_param("filterByPublishedSegments", "all"))
        .and(query_param("limit", "10"))
        .and(query_param("page", "0"))
        .and(query_param("sortDirection", "asc"))
        .and(query_param("sortProperty", "name"))
        .and(query_param("expansion", "definition,compatibility"))
        .and(query_param("includeType", "all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = SegmentsQuery {
        rsids: "rsId".to_string(),
        segment_filter: "s1".to_string(),
        locale: "en_US".to_string(),
        name: "mobile".to_string(),
        tag_names: "devices".to_string(),
        filter_by_published_segments: "all".to_string(),
        limit: 10,
        page: 0,
        sort_direction: "asc".to_string(),
        sort_property: "name".to_string(),
        expansion: vec!["definition".to_string(), "compatibility".to_string()],
        include_type: vec!["all".to_string()],
    };
    let client = test_client(&mock_server);
    let page = client.segments().get_all(&query).await.unwrap();

    assert_eq!(page.content.len(), 2);
    let pred = page.content[0]
        .definition
        .as_ref()
        .and_then(|d| d.container.as_ref())
        .and_then(|c| c.pred.as_ref())
        .expect("predicate");
    assert_eq!(pred.literal.as_deref(), Some("Mobile Phone"));
}

#[tokio::test]
async fn test_get_by_id() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("segments/get_by_id.json");

    Mock::given(method("GET"))
        .and(path(company_path(
            "segments/s300003364_5ae74fb2f118f061698ddc5f",
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let segment = client
        .segments()
        .get_by_id("s300003364_5ae74fb2f118f061698ddc5f", &LookupOptions::new())
        .await
        .unwrap();

    let compatibility = segment.compatibility.expect("compatibility");
    assert!(compatibility.valid);
    assert_eq!(compatibility.supported_products, vec!["oberon", "dataWarehouse"]);
}

#[tokio::test]
async fn test_get_all_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(company_path("segments")))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .segments()
        .get_all(&SegmentsQuery::default())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));
}
