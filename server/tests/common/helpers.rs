//! Test helper utilities for router integration tests

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tower::ServiceExt;

use cms_server::{AppState, Database, web};

/// Router over a fresh in-memory database
pub fn create_test_router() -> Router {
    let db = Database::open_in_memory().unwrap();
    web::build_router(AppState::from_database(db))
}

/// Status and raw JSON body of one request
pub struct TestResponse {
    pub status: StatusCode,
    pub request_id: Option<String>,
    pub body: Value,
}

impl TestResponse {
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_value(self.body.clone()).unwrap()
    }

    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }
}

pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let request_id = response
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    TestResponse {
        status,
        request_id,
        body,
    }
}

pub async fn get(router: &Router, uri: &str) -> TestResponse {
    send(router, Method::GET, uri, None).await
}

pub async fn post<T: Serialize>(router: &Router, uri: &str, body: &T) -> TestResponse {
    send(router, Method::POST, uri, Some(serde_json::to_value(body).unwrap())).await
}

pub async fn post_empty(router: &Router, uri: &str) -> TestResponse {
    send(router, Method::POST, uri, None).await
}

pub async fn put<T: Serialize>(router: &Router, uri: &str, body: &T) -> TestResponse {
    send(router, Method::PUT, uri, Some(serde_json::to_value(body).unwrap())).await
}

pub async fn delete(router: &Router, uri: &str) -> TestResponse {
    send(router, Method::DELETE, uri, None).await
}
