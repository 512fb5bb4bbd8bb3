//! Integration tests for the user endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_user_assigns_first_identifier() {
    let app = common::TestApp::new().await;

    let body = json!({
        "FirstName": "Ann",
        "Email": "ann@x.com",
        "HeightCm": 170.00,
        "WeightKg": 60.00,
        "Gender": "Female",
        "DateOfBirth": "1990-01-01"
    });

    let (status, response) = app.post("/users/", &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    let user: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(user["UserID"], 1);
    assert_eq!(user["FirstName"], "Ann");
    assert_eq!(user["Email"], "ann@x.com");
    assert_eq!(user["Gender"], "Female");
    assert_eq!(user["DateOfBirth"], "1990-01-01");
    // Optional fields that were not sent come back as explicit nulls
    assert!(user["LastName"].is_null());
    assert!(user["PasswordHash"].is_null());
}

#[tokio::test]
async fn test_created_user_can_be_fetched_by_id() {
    let app = common::TestApp::new().await;

    let body = json!({
        "FirstName": "Bo",
        "LastName": "Chen",
        "Email": "bo@x.com",
        "PasswordHash": "argon2-digest",
        "HeightCm": 182.5,
        "WeightKg": 81.2,
        "Gender": "Male",
        "DateOfBirth": "1985-07-20"
    });

    let (status, response) = app.post("/users/", &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    let created: serde_json::Value = serde_json::from_str(&response).unwrap();
    let id = created["UserID"].as_i64().unwrap();

    let (status, response) = app.get(&format!("/users/{id}")).await;
    assert_eq!(status, StatusCode::OK);

    let fetched: serde_json::Value = serde_json::from_str(&response).unwrap();
    // Stored record equals the input plus the assigned identifier
    assert_eq!(fetched["UserID"], id);
    assert_eq!(fetched["LastName"], "Chen");
    assert_eq!(fetched["PasswordHash"], "argon2-digest");
    assert_eq!(fetched["HeightCm"], 182.5);
    assert_eq!(fetched["WeightKg"], 81.2);
    assert_eq!(fetched["DateOfBirth"], "1985-07-20");
}

#[tokio::test]
async fn test_get_unknown_user_returns_404() {
    let app = common::TestApp::new().await;

    let (status, response) = app.get("/users/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let body: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "User not found");
}

#[tokio::test]
async fn test_duplicate_email_surfaces_storage_error() {
    let app = common::TestApp::new().await;

    app.create_test_user("dup@x.com").await;

    let body = json!({
        "FirstName": "Another",
        "Email": "dup@x.com",
        "HeightCm": 160.0,
        "WeightKg": 55.0,
        "Gender": "Other",
        "DateOfBirth": "1992-03-03"
    });

    let (status, response) = app.post("/users/", &body.to_string()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let error: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(error["error"]["code"], "DATABASE_ERROR");
}

#[tokio::test]
async fn test_identifiers_increase_monotonically() {
    let app = common::TestApp::new().await;

    let first = app.create_test_user("one@x.com").await;
    let second = app.create_test_user("two@x.com").await;
    let third = app.create_test_user("three@x.com").await;

    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert_eq!(third, 3);
}
