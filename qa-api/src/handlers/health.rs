use actix_web::{get, HttpResponse, Responder};
use chrono::Utc;
use qa_types::{HealthResponse, VersionResponse};

#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

#[get("/version")]
pub async fn version_info() -> impl Responder {
    HttpResponse::Ok().json(VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        service: "qa-api".to_string(),
    })
}
