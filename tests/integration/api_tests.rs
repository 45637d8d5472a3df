//! Live-server smoke tests

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_get_impact() {
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/impact?start_date=2024-01-01&end_date=2024-12-31",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["totalDevicesCollected"].is_number());
    assert!(body["totalCO2Saved"].is_number());
    assert!(body["environmentalEquivalents"]["trees"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_generate_and_publish_report() {
    let client = Client::new();

    let response = client
        .post(format!("{}/reports", BASE_URL))
        .json(&json!({
            "title": "Smoke test",
            "type": "annual",
            "dateRange": { "start": "2024-01-01", "end": "2024-12-31" }
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "draft");
    let report_id = body["id"].as_str().expect("No report ID").to_string();

    let response = client
        .post(format!("{}/reports/{}/publish", BASE_URL, report_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "published");
}

#[tokio::test]
#[ignore]
async fn test_reversed_range_is_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/reports", BASE_URL))
        .json(&json!({
            "title": "Backwards",
            "type": "custom",
            "dateRange": { "start": "2024-12-31", "end": "2024-01-01" }
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}
