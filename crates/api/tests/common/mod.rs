#![allow(dead_code)]

use abaad_api::config::{LogFormat, ServerConfig};
use abaad_api::router::build_app_router;
use abaad_api::state::AppState;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Allows any CORS origin (the production default) and uses a 30-second
/// request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router on the given pool.
///
/// Goes through [`build_app_router`] so tests exercise the same middleware
/// stack as the binary.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState { pool };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures (created through the API)
// ---------------------------------------------------------------------------

/// POST `body` to `uri`, assert 201 and return the id under `id_field`.
pub async fn create(app: &Router, uri: &str, body: Value, id_field: &str) -> i64 {
    let response = post_json(app.clone(), uri, body).await;
    assert_eq!(response.status(), StatusCode::CREATED, "POST {uri}");
    let json = body_json(response).await;
    json[id_field]
        .as_i64()
        .unwrap_or_else(|| panic!("missing {id_field} in {json}"))
}

pub async fn create_branch(app: &Router, name: &str) -> i64 {
    create(
        app,
        "/api/branches",
        json!({ "BranchName": name, "City": "Riyadh" }),
        "BranchID",
    )
    .await
}

pub async fn create_department(app: &Router, name: &str) -> i64 {
    create(
        app,
        "/api/departments",
        json!({ "DepartmentName": name }),
        "DepartmentID",
    )
    .await
}

pub async fn create_client(app: &Router, name: &str) -> i64 {
    create(app, "/api/clients", json!({ "ClientName": name }), "ClientID").await
}

pub async fn create_material(app: &Router, name: &str, base_price: f64) -> i64 {
    create(
        app,
        "/api/materials",
        json!({ "MaterialName": name, "BaseUnitPrice": base_price, "UnitOfMeasure": "ton" }),
        "MaterialID",
    )
    .await
}

pub async fn create_supplier(app: &Router, name: &str) -> i64 {
    create(
        app,
        "/api/suppliers",
        json!({ "SupplierName": name }),
        "SupplierID",
    )
    .await
}

pub async fn create_project(app: &Router, name: &str, branch_id: i64, client_id: i64) -> i64 {
    create(
        app,
        "/api/projects",
        json!({
            "ProjectName": name,
            "BranchID": branch_id,
            "ClientID": client_id,
            "StartDate": "2024-01-01",
            "Revenue": 10000.0,
            "Status": "Active",
        }),
        "ProjectID",
    )
    .await
}

/// Id of a seeded role.
pub async fn role_id(pool: &PgPool, title: &str) -> i64 {
    sqlx::query_scalar("SELECT id FROM roles WHERE title = $1")
        .bind(title)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// A valid employee payload; tests override fields as needed.
pub fn employee_body(name: &str, role_id: i64, branch_id: i64, department_id: i64) -> Value {
    json!({
        "EmployeeName": name,
        "RoleID": role_id,
        "Salary": 16000.0,
        "BranchID": branch_id,
        "DepartmentID": department_id,
        "HireDate": "2023-06-01",
    })
}

pub async fn create_employee(app: &Router, body: Value) -> i64 {
    create(app, "/api/employees", body, "EmployeeID").await
}
