use actix_web::{web, HttpResponse, Result};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    environment: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    user_id: Uuid,
    token: String,
}

/// Health check for test helpers
/// GET /test/health
pub async fn health_check() -> Result<HttpResponse> {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Additional safety check
    if env == "production" {
        tracing::error!("Test helper routes active in production!");
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "error",
            "reason": "test-helper-running-in-production"
        })));
    }

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        environment: env,
    }))
}

/// Mints an access token for the given user, standing in for the
/// identity provider during local runs.
/// GET /test/token/{user_id}
pub async fn generate_test_token(
    path: web::Path<String>,
    token_provider: web::Data<Arc<dyn TokenProvider + Send + Sync>>,
) -> Result<HttpResponse> {
    let user_id = Uuid::parse_str(&path.into_inner())
        .map_err(|_| actix_web::error::ErrorBadRequest("Invalid UUID format"))?;

    tracing::debug!("Generating test token for user {}", user_id);

    let token = token_provider
        .generate_access_token(user_id)
        .map_err(|e| {
            actix_web::error::ErrorInternalServerError(format!("Token encoding error: {}", e))
        })?;

    Ok(HttpResponse::Ok().json(TokenResponse { user_id, token }))
}

/// Configure test helper routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/test")
            .route("/health", web::get().to(health_check))
            .route("/token/{user_id}", web::get().to(generate_test_token)),
    );
}
