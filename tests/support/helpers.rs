// tests/support/helpers.rs
use super::mocks::FixedClock;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use polyglot_articles::application::{
    ports::time::Clock, queries::articles::ListingDefaults, services::ApplicationServices,
};
use polyglot_articles::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use polyglot_articles::infrastructure::repositories::InMemoryArticleRepository;
use polyglot_articles::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const TEST_BASE_PATH: &str = "http://localhost/api/articles";

pub fn build_test_state() -> HttpState {
    let repo = Arc::new(InMemoryArticleRepository::new());
    let write_repo: Arc<dyn ArticleWriteRepository> = repo.clone();
    let read_repo: Arc<dyn ArticleReadRepository> = repo;
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);

    let services = Arc::new(ApplicationServices::new(
        write_repo,
        read_repo,
        clock,
        ListingDefaults::new(TEST_BASE_PATH),
    ));

    HttpState { services }
}

pub fn make_test_router() -> axum::Router {
    build_router(build_test_state(), &[])
}

/// Sends one request through a clone of the router and returns the status
/// and parsed JSON body (`Value::Null` for empty bodies).
pub async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let resp = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    read_json(resp).await
}

/// Sends a raw body with an optional content type, bypassing JSON encoding.
pub async fn send_raw(
    app: &axum::Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }

    let resp = app
        .clone()
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();
    read_json(resp).await
}

pub async fn read_json(resp: Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    if bytes.is_empty() {
        return (status, Value::Null);
    }
    let json = serde_json::from_slice(&bytes).expect("expected valid json body");
    (status, json)
}

pub async fn create_article(app: &axum::Router, payload: Value) -> Value {
    let (status, json) = send(app, Method::POST, "/api/articles", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {json}");
    json
}

/// Assert an `ErrorResponse` body with the expected status and reason.
pub fn assert_error_body(status: StatusCode, json: &Value, expected: StatusCode) {
    assert_eq!(status, expected, "unexpected body: {json}");
    assert_eq!(
        json["error"].as_str(),
        expected.canonical_reason(),
        "unexpected error field"
    );
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message field"
    );
}
