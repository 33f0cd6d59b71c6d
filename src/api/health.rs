use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use sqlx::{Pool, Sqlite};
use tracing::error;

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// General health check including database connectivity.
/// Use for load balancers and uptime monitors.
#[get("/health")]
async fn health_check(pool: web::Data<Pool<Sqlite>>) -> impl Responder {
    match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(HealthResponse {
            status: "healthy".to_string(),
            database: "connected".to_string(),
            error: None,
        }),
        Err(e) => {
            error!("Health check failed: {:?}", e);
            HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: "unhealthy".to_string(),
                database: "disconnected".to_string(),
                error: Some(format!("Database error: {}", e)),
            })
        }
    }
}

/// Readiness probe; removes the instance from rotation if storage is
/// unavailable, recovers when it returns.
#[get("/ready")]
async fn readiness_check(pool: web::Data<Pool<Sqlite>>) -> impl Responder {
    match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(HealthResponse {
            status: "ready".to_string(),
            database: "connected".to_string(),
            error: None,
        }),
        Err(e) => {
            error!("Readiness check failed: database unavailable: {:?}", e);
            HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: "not_ready".to_string(),
                database: "disconnected".to_string(),
                error: Some(format!("Database unavailable: {}", e)),
            })
        }
    }
}

/// Liveness probe; process-alive only, no dependency checks
#[get("/live")]
async fn liveness_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "alive".to_string(),
        database: "not_checked".to_string(),
        error: None,
    })
}

pub fn health_config(config: &mut web::ServiceConfig) {
    config
        .service(health_check)
        .service(readiness_check)
        .service(liveness_check);
}
