//! Tests for the alert and triggered alert operations.

mod common;

use pretty_assertions::assert_eq;
use serde_json::json;
use zeus_client::mocks::MockResponse;
use zeus_client::transport::HttpMethod;
use zeus_client::{Alert, AlertStatus, AlertType, ZeusError};

use common::{mock_client, TOKEN};

fn cpu_alert() -> Alert {
    Alert::builder()
        .name("testerino")
        .username("pelegrino")
        .alert_type(AlertType::Metric)
        .expression("cpu.value > 20")
        .severity("S1")
        .metric_name("cpu.value")
        .emails("john1234@gmail.com")
        .status(AlertStatus::Disabled)
        .notify_period(60)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_create_alert_body() {
    let (client, transport) = mock_client();
    transport.queue(MockResponse::json(&json!({"id": 12})).with_status(201));

    let response = client.create_alert(&cpu_alert()).await.unwrap();

    assert_eq!(response.status, 201);
    assert_eq!(response.body, Some(json!({"id": 12})));

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.path, format!("/alerts/{}", TOKEN));
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(
        request.json_body(),
        Some(json!({
            "alert_name": "testerino",
            "username": "pelegrino",
            "token": TOKEN,
            "alerts_type": "metric",
            "alert_expression": "cpu.value > 20",
            "alert_severity": "S1",
            "metric_name": "cpu.value",
            "emails": "john1234@gmail.com",
            "status": "disabled",
            "notify_period": 60
        }))
    );
}

#[tokio::test]
async fn test_modify_alert() {
    let (client, transport) = mock_client();

    client.modify_alert(12, &cpu_alert()).await.unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, HttpMethod::Put);
    assert_eq!(request.path, format!("/alerts/{}/12", TOKEN));
    assert_eq!(request.json_body().unwrap()["alert_name"], json!("testerino"));
}

#[tokio::test]
async fn test_get_list_delete_alert() {
    let (client, transport) = mock_client();

    client.get_alert(12).await.unwrap();
    client.list_alerts().await.unwrap();
    client.delete_alert(12).await.unwrap();

    let requests = transport.requests();
    let summary: Vec<(HttpMethod, String)> = requests
        .iter()
        .map(|r| (r.method, r.path.clone()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (HttpMethod::Get, format!("/alerts/{}/12", TOKEN)),
            (HttpMethod::Get, format!("/alerts/{}", TOKEN)),
            (HttpMethod::Delete, format!("/alerts/{}/12", TOKEN)),
        ]
    );
}

#[tokio::test]
async fn test_enable_and_disable_alerts() {
    let (client, transport) = mock_client();

    client.enable_alerts(&[1, 2, 3]).await.unwrap();
    client.disable_alerts(&[2]).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(requests[0].path, format!("/alerts/{}/enable", TOKEN));
    assert_eq!(requests[0].json_body(), Some(json!({"id": [1, 2, 3]})));
    assert_eq!(requests[1].path, format!("/alerts/{}/disable", TOKEN));
    assert_eq!(requests[1].json_body(), Some(json!({"id": [2]})));
}

#[tokio::test]
async fn test_triggered_alerts() {
    let (client, transport) = mock_client();
    transport.queue(MockResponse::json(&json!([])));
    transport.queue(MockResponse::json(&json!([{"alert_id": 12}])));

    let all = client.list_triggered_alerts().await.unwrap();
    let recent = client.list_triggered_alerts_last_24_hours().await.unwrap();

    assert_eq!(all.body, Some(json!([])));
    assert_eq!(recent.body, Some(json!([{"alert_id": 12}])));

    let requests = transport.requests();
    assert_eq!(requests[0].path, format!("/triggeredalerts/{}", TOKEN));
    assert_eq!(requests[1].path, format!("/triggeredalerts/{}/last24", TOKEN));
}

#[tokio::test]
async fn test_alert_server_error_fails_fast() {
    let (client, transport) = mock_client();
    transport.queue(MockResponse::text(500, "database unavailable"));

    let err = client.get_alert(1).await.unwrap_err();

    match err {
        ZeusError::RemoteServerError { body, .. } => {
            assert_eq!(body.as_deref(), Some("database unavailable"));
        }
        other => panic!("Expected RemoteServerError, got {:?}", other),
    }
    assert_eq!(transport.request_count(), 1);
}

#[test]
fn test_alert_builder_reports_missing_field() {
    let err = Alert::builder().name("incomplete").build().unwrap_err();

    match err {
        ZeusError::Validation { param, .. } => assert_eq!(param.as_deref(), Some("username")),
        other => panic!("Expected Validation, got {:?}", other),
    }
}
