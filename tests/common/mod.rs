#![allow(dead_code)]

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{Method, StatusCode};
use actix_web::{test, App, Error};
use chrono::Duration;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};

use job_board::api;
use job_board::auth::jwt::TokenIssuer;
use job_board::db::migrations;

pub const TEST_SECRET: &str = "test-secret";

/// Fresh in-memory database with the full schema applied
pub async fn test_pool() -> Pool<Sqlite> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    migrations::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn issuer() -> TokenIssuer {
    TokenIssuer::new(TEST_SECRET, Duration::days(7))
}

/// The real app wired against an in-memory store
pub async fn spawn_app() -> impl Service<Request, Response = ServiceResponse, Error = Error> {
    let pool = test_pool().await;
    test::init_service(App::new().configure(api::app_config(pool, issuer()))).await
}

/// One request against the app, optionally authenticated and with a
/// JSON body
pub async fn api_request(
    app: &impl Service<Request, Response = ServiceResponse, Error = Error>,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> ServiceResponse {
    let mut req = test::TestRequest::default().method(method).uri(uri);

    if let Some(token) = token {
        req = req.insert_header(("Authorization", format!("Bearer {}", token)));
    }
    if let Some(body) = body {
        req = req.set_json(body);
    }

    test::call_service(app, req.to_request()).await
}

/// Register an account, asserting success, and return the response body
pub async fn register(
    app: &impl Service<Request, Response = ServiceResponse, Error = Error>,
    email: &str,
    password: &str,
    name: &str,
) -> Value {
    let resp = api_request(
        app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({ "email": email, "password": password, "name": name })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    test::read_body_json(resp).await
}

/// Register an account and return just its token
pub async fn register_token(
    app: &impl Service<Request, Response = ServiceResponse, Error = Error>,
    email: &str,
    name: &str,
) -> String {
    let body = register(app, email, "secret1", name).await;
    body["token"].as_str().expect("token in response").to_string()
}

/// Create a job posting, asserting success, and return its id
pub async fn create_job(
    app: &impl Service<Request, Response = ServiceResponse, Error = Error>,
    token: &str,
    title: &str,
) -> i64 {
    let resp = api_request(
        app,
        Method::POST,
        "/api/jobs",
        Some(token),
        Some(json!({
            "title": title,
            "description": "Build and run backend services",
            "company": "Acme",
            "location": "Remote",
            "salary": "100k",
            "type": "full-time",
        })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    body["job_id"].as_i64().expect("job_id in response")
}

/// Apply to a job and return the raw response
pub async fn apply(
    app: &impl Service<Request, Response = ServiceResponse, Error = Error>,
    token: &str,
    job_id: i64,
) -> ServiceResponse {
    api_request(
        app,
        Method::POST,
        "/api/applications",
        Some(token),
        Some(json!({ "job_id": job_id })),
    )
    .await
}

/// Apply to a job, asserting success, and return the application id
pub async fn apply_ok(
    app: &impl Service<Request, Response = ServiceResponse, Error = Error>,
    token: &str,
    job_id: i64,
) -> i64 {
    let resp = apply(app, token, job_id).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    body["application_id"].as_i64().expect("application_id in response")
}
