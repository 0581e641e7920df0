//! Router tests driving the full stack against a temporary `SQLite` file.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use bankapi_storage::Database;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use crate::{AppState, create_router};


pub struct TestApp {
    router: Router,
    _temp_dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let db = Database::open_with_pool_size(&temp_dir.path().join("http.db"), 2).unwrap();
        let router = create_router(Arc::new(AppState::new(db)));
        Self { router, _temp_dir: temp_dir }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    /// Client 1 "Robert Bobby" with accounts 1 (Savings, 1000) and 2 (Checking, 15000).
    pub async fn seeded() -> Self {
        let app = Self::new();
        let body = json!({"firstName": "Robert", "lastName": "Bobby"});
        assert_eq!(app.send(Method::POST, "/clients", Some(body)).await.0, StatusCode::CREATED);
        for (account_type, amount) in [("Savings", 1000), ("Checking", 15000)] {
            let body = json!({"accountType": account_type, "amount": amount});
            let (status, _) = app.send(Method::POST, "/clients/1/accounts", Some(body)).await;
            assert_eq!(status, StatusCode::CREATED);
        }
        app
    }
}

pub fn message(body: &Value) -> &str {
    body["message"].as_str().unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let app = TestApp::new();
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("ok".to_owned()));
}
