// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Form submissions arrive as JSON; a body that does not parse is
/// reported in the usual envelope instead of actix's plain-text error.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| {
            let message = err.to_string();
            tracing::debug!("Rejected form body: {}", message);
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
