//! Integration tests for the contact inquiry endpoint.

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use staffly_integration_tests::spawn_site;

fn valid_payload() -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "company": "Analytical Engines",
        "interest": "hrms",
        "message": "We would like a walkthrough."
    })
}

#[tokio::test]
async fn contact_submission_returns_created_envelope() {
    let base_url = spawn_site().await;
    let client = Client::new();

    let resp = client
        .post(format!("{base_url}/api/contact"))
        .json(&valid_payload())
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("parse body");
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Contact inquiry created successfully"));
    assert_eq!(body["data"]["name"], json!("Ada Lovelace"));
    assert_eq!(body["data"]["interest"], json!("hrms"));
    assert!(body["data"]["createdAt"].is_string());
}

#[tokio::test]
async fn contact_ids_are_positive_and_distinct() {
    let base_url = spawn_site().await;
    let client = Client::new();

    let mut seen = Vec::new();
    for _ in 0..3 {
        let resp = client
            .post(format!("{base_url}/api/contact"))
            .json(&valid_payload())
            .send()
            .await
            .expect("request failed");
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = resp.json().await.expect("parse body");
        let id = body["data"]["id"].as_i64().expect("id");
        assert!(id > 0);
        assert!(!seen.contains(&id), "duplicate id {id}");
        seen.push(id);
    }
}

#[tokio::test]
async fn missing_required_field_names_the_field() {
    let base_url = spawn_site().await;
    let client = Client::new();

    let mut payload = valid_payload();
    payload.as_object_mut().expect("object").remove("email");

    let resp = client
        .post(format!("{base_url}/api/contact"))
        .json(&payload)
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("parse body");
    assert_eq!(body["success"], json!(false));
    assert!(
        body["message"].as_str().expect("message").contains("email"),
        "message: {}",
        body["message"]
    );
}

#[tokio::test]
async fn wrong_typed_fields_are_all_named() {
    let base_url = spawn_site().await;
    let client = Client::new();

    let mut payload = valid_payload();
    payload["name"] = json!(123);
    payload["email"] = json!(456);

    let resp = client
        .post(format!("{base_url}/api/contact"))
        .json(&payload)
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("parse body");
    assert_eq!(body["success"], json!(false));
    let message = body["message"].as_str().expect("message");
    assert!(
        message.contains("name must be a string"),
        "message: {message}"
    );
    assert!(
        message.contains("email must be a string"),
        "message: {message}"
    );
}
