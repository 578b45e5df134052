//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use abaad_api::error::panic_response;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use common::{body_json, get};
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;

// ---------------------------------------------------------------------------
// Test: GET /api/health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "OK");
    assert_eq!(json["message"], "Abaad Contracting API is running");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns a JSON 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_route_returns_json_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "No route for /api/this-route-does-not-exist");
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // The value should be a UUID string (36 chars with hyphens).
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

// ---------------------------------------------------------------------------
// Test: extractor rejections keep the JSON error contract
// ---------------------------------------------------------------------------

/// Assert a 400 `VALIDATION_ERROR` JSON body and return its message.
async fn assert_json_validation_error(response: axum::response::Response) -> String {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let content_type = response
        .headers()
        .get("content-type")
        .expect("error response must carry a content type")
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("application/json"), "got {content_type}");

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    json["error"].as_str().expect("error must be a string").to_string()
}

fn post_raw(uri: &str, content_type: Option<&str>, body: &'static str) -> Request<Body> {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    builder.body(Body::from(body)).unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_path_id_returns_json_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/branches/abc").await;

    let message = assert_json_validation_error(response).await;
    assert!(message.contains("abc"), "got {message}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_composite_key_returns_json_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::delete(app, "/api/work-assignments/1/xyz").await;

    assert_json_validation_error(response).await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_json_returns_json_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = post_raw("/api/clients", Some("application/json"), "{\"ClientName\": ");

    let response = app.oneshot(request).await.unwrap();
    assert_json_validation_error(response).await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrongly_typed_field_returns_json_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = post_raw(
        "/api/branches",
        Some("application/json"),
        "{\"BranchName\": \"Jeddah\", \"City\": \"Jeddah\", \"ManagerID\": \"seven\"}",
    );

    let response = app.oneshot(request).await.unwrap();
    let message = assert_json_validation_error(response).await;
    assert!(message.contains("ManagerID"), "got {message}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_content_type_returns_json_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = post_raw("/api/clients", None, "{\"ClientName\": \"Aramco\"}");

    let response = app.oneshot(request).await.unwrap();
    assert_json_validation_error(response).await;
}

// ---------------------------------------------------------------------------
// Test: a panicking handler answers with a sanitized JSON 500
// ---------------------------------------------------------------------------

#[tokio::test]
async fn handler_panic_returns_json_500() {
    async fn explode() -> &'static str {
        panic!("secret connection string");
    }

    let app = Router::new()
        .route("/explode", axum::routing::get(explode))
        .layer(CatchPanicLayer::custom(panic_response));

    let response = get(app, "/explode").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
    assert!(!json.to_string().contains("secret"));
}

// ---------------------------------------------------------------------------
// Test: CORS preflight allows any origin by default
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn cors_preflight_allows_any_origin(pool: PgPool) {
    let app = common::build_test_app(pool);

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/projects")
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "*");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("POST"),
        "Allow-Methods should contain POST, got: {allow_methods}"
    );
}
