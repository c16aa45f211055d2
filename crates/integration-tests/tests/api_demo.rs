//! Integration tests for the demo request endpoint.

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use staffly_integration_tests::spawn_site;

#[tokio::test]
async fn demo_request_without_optional_fields_succeeds() {
    let base_url = spawn_site().await;
    let client = Client::new();

    let resp = client
        .post(format!("{base_url}/api/request-demo"))
        .json(&json!({
            "name": "Grace Hopper",
            "email": "grace@example.com",
            "company": "Hopper Inc",
            "productInterest": "payroll"
        }))
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("parse body");
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Demo request created successfully"));
    assert_eq!(body["data"]["productInterest"], json!("payroll"));
    assert!(body["data"]["phone"].is_null());
}

#[tokio::test]
async fn demo_request_with_all_fields_echoes_them_back() {
    let base_url = spawn_site().await;
    let client = Client::new();

    let resp = client
        .post(format!("{base_url}/api/request-demo"))
        .json(&json!({
            "name": "Grace Hopper",
            "email": "grace@example.com",
            "company": "Hopper Inc",
            "phone": "+1 555 0100",
            "productInterest": "tracking",
            "message": "Afternoons work best."
        }))
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("parse body");
    assert_eq!(body["data"]["phone"], json!("+1 555 0100"));
    assert_eq!(body["data"]["message"], json!("Afternoons work best."));
}

#[tokio::test]
async fn missing_product_interest_is_rejected() {
    let base_url = spawn_site().await;
    let client = Client::new();

    let resp = client
        .post(format!("{base_url}/api/request-demo"))
        .json(&json!({
            "name": "Grace Hopper",
            "email": "grace@example.com",
            "company": "Hopper Inc"
        }))
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("parse body");
    assert_eq!(body["success"], json!(false));
    assert!(
        body["message"]
            .as_str()
            .expect("message")
            .contains("productInterest")
    );
}
