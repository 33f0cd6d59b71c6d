mod common;

use actix_web::http::{Method, StatusCode};
use actix_web::test;
use chrono::Duration;
use serde_json::{json, Value};

use common::{api_request, register, register_token, spawn_app};
use job_board::auth::jwt::TokenIssuer;

#[actix_web::test]
async fn register_login_and_bad_password() {
    let app = spawn_app().await;

    let body = register(&app, "a@x.com", "secret1", "Ann").await;
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["user"]["email"], "a@x.com");
    assert_eq!(body["user"]["name"], "Ann");

    let resp = api_request(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "email": "a@x.com", "password": "secret1" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["user"]["name"], "Ann");

    let resp = api_request(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "email": "a@x.com", "password": "wrong" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn unknown_email_and_wrong_password_are_indistinguishable() {
    let app = spawn_app().await;
    register(&app, "a@x.com", "secret1", "Ann").await;

    let wrong_password = api_request(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "email": "a@x.com", "password": "nope00" })),
    )
    .await;
    let unknown_email = api_request(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "email": "nobody@x.com", "password": "secret1" })),
    )
    .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    let first: Value = test::read_body_json(wrong_password).await;
    let second: Value = test::read_body_json(unknown_email).await;
    assert_eq!(first["error"], second["error"]);
}

#[actix_web::test]
async fn duplicate_email_conflicts() {
    let app = spawn_app().await;
    register(&app, "a@x.com", "secret1", "Ann").await;

    let resp = api_request(
        &app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({ "email": "a@x.com", "password": "secret2", "name": "Another Ann" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn register_validates_input() {
    let app = spawn_app().await;

    let bad_email = api_request(
        &app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({ "email": "not-an-email", "password": "secret1", "name": "Ann" })),
    )
    .await;
    assert_eq!(bad_email.status(), StatusCode::BAD_REQUEST);

    let short_password = api_request(
        &app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({ "email": "a@x.com", "password": "short", "name": "Ann" })),
    )
    .await;
    assert_eq!(short_password.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn protected_routes_require_a_token() {
    let app = spawn_app().await;

    let resp = api_request(&app, Method::GET, "/api/jobs", None, None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "no token");
}

#[actix_web::test]
async fn garbage_token_is_rejected() {
    let app = spawn_app().await;

    let resp = api_request(&app, Method::GET, "/api/jobs", Some("garbage"), None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid token");
}

#[actix_web::test]
async fn expired_token_is_rejected() {
    let app = spawn_app().await;
    register(&app, "a@x.com", "secret1", "Ann").await;

    // Same secret the app verifies with, but already expired
    let expired = TokenIssuer::new(common::TEST_SECRET, Duration::days(-1))
        .issue(1, "a@x.com")
        .unwrap();

    let resp = api_request(&app, Method::GET, "/api/jobs", Some(&expired), None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid token");
}

#[actix_web::test]
async fn foreign_signature_is_rejected() {
    let app = spawn_app().await;

    let forged = TokenIssuer::new("some-other-secret", Duration::days(7))
        .issue(1, "a@x.com")
        .unwrap();

    let resp = api_request(&app, Method::GET, "/api/jobs", Some(&forged), None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn profile_roundtrip() {
    let app = spawn_app().await;
    let token = register_token(&app, "a@x.com", "Ann").await;

    let resp = api_request(&app, Method::GET, "/api/profile", Some(&token), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["email"], "a@x.com");
    assert_eq!(body["user"]["name"], "Ann");
    // The credential hash must never appear in responses
    assert!(body["user"].get("password_hash").is_none());
    assert!(body["user"].get("password").is_none());

    let resp = api_request(
        &app,
        Method::PUT,
        "/api/profile",
        Some(&token),
        Some(json!({ "name": "Ann Smith" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = api_request(&app, Method::GET, "/api/profile", Some(&token), None).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["name"], "Ann Smith");
}

#[actix_web::test]
async fn empty_profile_name_is_rejected() {
    let app = spawn_app().await;
    let token = register_token(&app, "a@x.com", "Ann").await;

    let resp = api_request(
        &app,
        Method::PUT,
        "/api/profile",
        Some(&token),
        Some(json!({ "name": "" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn health_endpoints_respond() {
    let app = spawn_app().await;

    let health = api_request(&app, Method::GET, "/health", None, None).await;
    assert_eq!(health.status(), StatusCode::OK);

    let live = api_request(&app, Method::GET, "/live", None, None).await;
    assert_eq!(live.status(), StatusCode::OK);
}
