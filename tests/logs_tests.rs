//! Tests for the logs operations.

mod common;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;
use zeus_client::mocks::MockResponse;
use zeus_client::services::BUCKET_HEADER;
use zeus_client::transport::HttpMethod;
use zeus_client::{LogQuery, ZeusError};

use common::{mock_client, TOKEN};

#[test_case(0 ; "no logs")]
#[test_case(1 ; "one log")]
#[test_case(3 ; "three logs")]
#[tokio::test]
async fn test_send_logs_posts_one_array(count: usize) {
    let (client, transport) = mock_client();
    transport.queue(MockResponse::json(&json!({"successful": count})));

    let logs: Vec<Value> = (0..count)
        .map(|i| json!({"timestamp": 1_451_606_400 + i, "message": format!("entry {}", i)}))
        .collect();

    let response = client.send_logs("ZeusTest", &logs).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(transport.request_count(), 1);

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.path, format!("/logs/{}/ZeusTest", TOKEN));
    assert_eq!(request.header(BUCKET_HEADER), None);

    let sent: Value = serde_json::from_str(request.param("logs").unwrap()).unwrap();
    assert_eq!(sent, Value::Array(logs));
}

#[tokio::test]
async fn test_send_logs_to_bucket_sets_header() {
    let (client, transport) = mock_client();

    client
        .send_logs_to_bucket("archive", "ZeusTest", &[json!({"message": "kept"})])
        .await
        .unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.path, format!("/logs/{}/ZeusTest", TOKEN));
    assert_eq!(request.header(BUCKET_HEADER), Some("archive"));

    client.send_logs("ZeusTest", &[json!({})]).await.unwrap();
    assert_eq!(transport.last_request().unwrap().header(BUCKET_HEADER), None);
}

#[test_case("" ; "empty")]
#[test_case("Zeus.Test" ; "dot")]
#[test_case("Zeus-Test" ; "dash")]
#[test_case("Zeus_Test" ; "underscore")]
#[test_case("Zeus Test" ; "space")]
#[tokio::test]
async fn test_send_logs_rejects_bad_names(name: &str) {
    let (client, transport) = mock_client();

    let err = client.send_logs(name, &[json!({"m": 1})]).await.unwrap_err();

    assert!(matches!(err, ZeusError::InvalidName { .. }));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_query_logs_sends_every_option() {
    let (client, transport) = mock_client();
    transport.queue(MockResponse::json(&json!({"total": 0, "result": []})));

    let query = LogQuery::new("ZeusTest")
        .attribute_name("message")
        .pattern("*")
        .from_date(123_456_789)
        .to_date(126_235_344_235_i64)
        .offset(23)
        .limit(10);
    let response = client.query_logs(&query).await.unwrap();

    assert_eq!(response.body, Some(json!({"total": 0, "result": []})));

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.path, format!("/logs/{}", TOKEN));

    let mut params: Vec<(String, String)> = request.params().into_iter().collect();
    params.sort();
    let expected: Vec<(String, String)> = [
        ("attribute_name", "message"),
        ("from", "123456789"),
        ("limit", "10"),
        ("log_name", "ZeusTest"),
        ("offset", "23"),
        ("pattern", "*"),
        ("to", "126235344235"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    assert_eq!(params, expected);
}

#[tokio::test]
async fn test_query_logs_rejects_non_numeric_date() {
    let (client, transport) = mock_client();

    let query = LogQuery::new("ZeusTest").from_date("wrongvalue").to_date(12346);
    let err = client.query_logs(&query).await.unwrap_err();

    assert!(matches!(err, ZeusError::InvalidDate { .. }));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_query_logs_non_json_body() {
    let (client, transport) = mock_client();
    transport.queue(MockResponse::text(404, "Not Found"));

    let response = client.query_logs(&LogQuery::new("ZeusTest")).await.unwrap();

    assert_eq!(response.status, 404);
    assert_eq!(response.body, None);
}
