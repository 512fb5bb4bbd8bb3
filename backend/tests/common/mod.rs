//! Common test utilities for integration tests
//!
//! Every test application runs against its own in-memory SQLite
//! database, so tests are hermetic and need no external services.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use fitlog_backend::{config::AppConfig, db, routes, state::AppState};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub pool: SqlitePool,
}

impl TestApp {
    /// Create a new test application on a fresh in-memory database
    pub async fn new() -> Self {
        // One connection only: each new connection to `sqlite::memory:`
        // would otherwise open its own empty database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create test database pool");

        db::init_schema(&pool)
            .await
            .expect("Failed to initialize schema");

        let state = AppState::new(pool.clone(), AppConfig::default());
        let app = routes::create_router(state);

        Self { app, pool }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    /// Create a user through the API and return its assigned identifier
    pub async fn create_test_user(&self, email: &str) -> i64 {
        let body = serde_json::json!({
            "FirstName": "Ann",
            "Email": email,
            "HeightCm": 170.00,
            "WeightKg": 60.00,
            "Gender": "Female",
            "DateOfBirth": "1990-01-01"
        });

        let (status, response) = self.post("/users/", &body.to_string()).await;
        assert_eq!(status, StatusCode::OK, "user setup failed: {response}");

        let value: serde_json::Value = serde_json::from_str(&response).unwrap();
        value["UserID"].as_i64().unwrap()
    }
}
