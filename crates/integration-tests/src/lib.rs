//! Shared fixtures for the end-to-end tests: a router over a fresh in-memory
//! store, and helpers that send requests the way board clients do.

#![cfg(feature = "web-axum")]

use std::sync::Arc;

use api_adapters::{build_router, AppState};
use axum::body::{to_bytes, Body};
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use configs::ResponseMode;
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use serde_json::Value;
use storage_adapters::InMemoryThreadRepository;
use tower::ServiceExt;

/// A response reduced to what the tests look at.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("body is not JSON ({e}): {}", self.body))
    }
}

pub struct TestApp {
    router: Router,
    pub repo: Arc<InMemoryThreadRepository>,
}

impl TestApp {
    pub fn new(mode: ResponseMode) -> Self {
        let repo = Arc::new(InMemoryThreadRepository::new());
        let router = build_router(AppState::new(repo.clone(), mode));
        Self { router, repo }
    }

    /// JSON-mode app, as used by automated clients.
    pub fn json() -> Self {
        Self::new(ResponseMode::Json)
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");

        TestResponse {
            status,
            location,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn json_request(&self, method: Method, uri: &str, body: Value) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn form_request(&self, method: Method, uri: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_owned()))
            .unwrap();
        self.send(request).await
    }

    /// Sends `body` with the given `Content-Type`, or with none at all.
    pub async fn raw_request(
        &self,
        method: Method,
        uri: &str,
        content_type: Option<&str>,
        body: &str,
    ) -> TestResponse {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            request = request.header(CONTENT_TYPE, content_type);
        }
        self.send(request.body(Body::from(body.to_owned())).unwrap())
            .await
    }

    /// Creates a thread through the API and returns its id.
    pub async fn create_thread(&self, board: &str, text: &str, password: &str) -> String {
        let response = self
            .json_request(
                Method::POST,
                &format!("/api/threads/{board}"),
                serde_json::json!({ "text": text, "delete_password": password }),
            )
            .await;
        created_id(&response)
    }

    /// Creates a reply through the API and returns its id.
    pub async fn create_reply(
        &self,
        board: &str,
        thread_id: &str,
        text: &str,
        password: &str,
    ) -> String {
        let response = self
            .json_request(
                Method::POST,
                &format!("/api/replies/{board}"),
                serde_json::json!({
                    "thread_id": thread_id,
                    "text": text,
                    "delete_password": password,
                }),
            )
            .await;
        created_id(&response)
    }

    pub async fn thread(&self, board: &str, thread_id: &str) -> TestResponse {
        self.get(&format!("/api/replies/{board}?thread_id={thread_id}"))
            .await
    }
}

fn created_id(response: &TestResponse) -> String {
    assert_eq!(response.status, StatusCode::OK, "create failed: {}", response.body);
    let json = response.json();
    assert_eq!(json["success"], true);
    json["_id"]
        .as_str()
        .expect("create response carries _id")
        .to_owned()
}

/// Random post body.
pub fn lorem() -> String {
    Sentence(3..8).fake()
}

/// Asserts that no object anywhere in `value` exposes a secret field.
pub fn assert_no_secrets(value: &Value) {
    match value {
        Value::Object(map) => {
            assert!(!map.contains_key("delete_password"), "leaked delete_password: {value}");
            assert!(!map.contains_key("reported"), "leaked reported: {value}");
            map.values().for_each(assert_no_secrets);
        }
        Value::Array(items) => items.iter().for_each(assert_no_secrets),
        _ => {}
    }
}
