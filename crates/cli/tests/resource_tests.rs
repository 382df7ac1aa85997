//! Integration tests for the list and get subcommands.
//!
//! Each test checks that flags become the documented query parameters and
//! that the decoded response is printed as JSON.

mod common;

use common::{ACCESS_TOKEN, CLIENT_ID, ORG_ID, analytics_cmd_for, company_path};
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn page(content: Value) -> Value {
    json!({
        "content": content,
        "number": 0,
        "size": 10,
        "numberOfElements": 1,
        "totalElements": 1,
        "firstPage": true,
        "lastPage": true,
        "totalPages": 1
    })
}

fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("stdout should be JSON")
}

#[tokio::test]
async fn test_segments_list_sends_query_and_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(company_path("segments")))
        .and(query_param("rsids", "examplersid"))
        .and(query_param("limit", "5"))
        .and(query_param("page", "1"))
        .and(query_param("expansion", "tags,owner"))
        .and(query_param_is_missing("name"))
        .and(header("Authorization", format!("Bearer {ACCESS_TOKEN}").as_str()))
        .and(header("x-api-key", CLIENT_ID))
        .and(header("x-gw-ims-org-id", ORG_ID))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(json!([{"id": "s300000000_1", "name": "Mobile"}]))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let assert = analytics_cmd_for(&server)
        .args([
            "segments",
            "list",
            "--rsids",
            "examplersid",
            "--limit",
            "5",
            "--page",
            "1",
            "--expansion",
            "tags,owner",
        ])
        .assert()
        .success();

    let output = stdout_json(&assert.get_output().stdout);
    assert_eq!(output["content"][0]["id"], "s300000000_1");
    assert_eq!(output["lastPage"], true);
}

#[tokio::test]
async fn test_segments_list_defaults_to_configured_suite() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(company_path("segments")))
        .and(query_param("rsids", "configrsid"))
        .and(query_param("limit", "10"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    analytics_cmd_for(&server)
        .env("ANALYTICS_REPORT_SUITE_ID", "configrsid")
        .args(["segments", "list"])
        .assert()
        .success();
}

#[test]
fn test_dimensions_list_without_suite_fails() {
    common::analytics_cmd()
        .args(["dimensions", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ANALYTICS_REPORT_SUITE_ID"));
}

#[tokio::test]
async fn test_dimensions_get_encodes_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(company_path("dimensions/variables%2Fpage")))
        .and(query_param("rsid", "examplersid"))
        .and(query_param("locale", "en_US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "variables/page",
            "title": "Page",
            "segmentable": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    analytics_cmd_for(&server)
        .args([
            "dimensions",
            "get",
            "variables/page",
            "--rsid",
            "examplersid",
            "--locale",
            "en_US",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Page\""));
}

#[tokio::test]
async fn test_metrics_list_prints_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(company_path("metrics")))
        .and(query_param("rsid", "examplersid"))
        .and(query_param("segmentable", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "metrics/pageviews", "name": "Page Views"},
            {"id": "metrics/visits", "name": "Visits"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let assert = analytics_cmd_for(&server)
        .args(["metrics", "list", "--rsid", "examplersid", "--segmentable"])
        .assert()
        .success();

    let output = stdout_json(&assert.get_output().stdout);
    assert_eq!(output.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_calculated_metrics_list_flags() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(company_path("calculatedmetrics")))
        .and(query_param("favorite", "true"))
        .and(query_param("tagNames", "kpi"))
        .and(query_param("includeType", "all,shared"))
        .and(query_param("approved", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(json!([{"id": "cm1"}]))))
        .expect(1)
        .mount(&server)
        .await;

    analytics_cmd_for(&server)
        .args([
            "calculated-metrics",
            "list",
            "--favorite",
            "--tag-names",
            "kpi",
            "--include-type",
            "all,shared",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("cm1"));
}

#[tokio::test]
async fn test_collections_get_with_expansion() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(company_path("collections/suites/examplersid")))
        .and(query_param("expansion", "timezone,currency"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rsid": "examplersid",
            "name": "Example Suite"
        })))
        .expect(1)
        .mount(&server)
        .await;

    analytics_cmd_for(&server)
        .args([
            "collections",
            "get",
            "examplersid",
            "--expansion",
            "timezone,currency",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Example Suite"));
}

#[tokio::test]
async fn test_date_ranges_get() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(company_path("dateranges/dr1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "dr1",
            "name": "Last week"
        })))
        .expect(1)
        .mount(&server)
        .await;

    analytics_cmd_for(&server)
        .args(["date-ranges", "get", "dr1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Last week"));
}

#[tokio::test]
async fn test_users_list_paging() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(company_path("users")))
        .and(query_param("limit", "2"))
        .and(query_param("page", "3"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page(json!([{"login": "jdoe"}]))),
        )
        .expect(1)
        .mount(&server)
        .await;

    analytics_cmd_for(&server)
        .args(["users", "list", "--limit", "2", "--page", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jdoe"));
}
