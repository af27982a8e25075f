use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use tracing::error;

use crate::learning_log::application::forms::{AnnotatedForm, RedirectTarget};
use crate::learning_log::application::record_access_coordinator::{
    AccessError, SubmissionError,
};
use crate::shared::api::ApiResponse;

/// Error codes a form route reports.
pub struct FormCodes {
    pub duplicate: &'static str,
    pub not_found: &'static str,
    pub not_found_message: &'static str,
}

pub fn redirect(target: RedirectTarget) -> HttpResponse {
    ApiResponse::see_other(&target.path())
}

/// Turns a refused submission into the matching response: the annotated
/// page for 409/422, a bare error otherwise.
pub fn submission_failure<P>(err: SubmissionError<P>, codes: &FormCodes) -> HttpResponse
where
    P: AnnotatedForm + Serialize,
{
    match err {
        SubmissionError::Invalid(page) => {
            if let Some(notice) = page.notice().map(str::to_string) {
                return ApiResponse::rerender(StatusCode::CONFLICT, page, codes.duplicate, &notice);
            }

            let message = match page.field_errors() {
                [only] => only.message.clone(),
                [] => "Invalid form".to_string(),
                many => format!("{} fields need attention", many.len()),
            };
            ApiResponse::rerender(
                StatusCode::UNPROCESSABLE_ENTITY,
                page,
                "VALIDATION_ERROR",
                &message,
            )
        }
        SubmissionError::NotFound => {
            ApiResponse::not_found(codes.not_found, codes.not_found_message)
        }
        SubmissionError::Internal(msg) => {
            error!("Form submission failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

pub fn access_failure(err: AccessError, not_found_code: &str, message: &str) -> HttpResponse {
    match err {
        AccessError::NotFound => ApiResponse::not_found(not_found_code, message),
        AccessError::Internal(msg) => {
            error!("Query failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
