// src/shared/api/response.rs
use actix_web::{http::header, http::StatusCode, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Clone)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

/// Body sent along with a `303 See Other`
#[derive(Serialize, ToSchema)]
pub struct RedirectBody {
    #[schema(example = "/topics")]
    pub redirect_to: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }

    /// A form that must be shown again: the submitted values travel back
    /// in `data`, the reason in `error`.
    pub fn rerender(status: StatusCode, form: T, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse {
            success: false,
            data: Some(form),
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        })
    }
}

impl ApiResponse<()> {
    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        })
    }

    pub fn see_other(location: &str) -> HttpResponse {
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, location.to_string()))
            .json(ApiResponse {
                success: true,
                data: Some(RedirectBody {
                    redirect_to: location.to_string(),
                }),
                error: None,
            })
    }

    /// Sends an unauthenticated caller to the external login page,
    /// remembering where they were going.
    pub fn login_required(login_url: &str, next: &str) -> HttpResponse {
        let location = format!("{login_url}?next={next}");

        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, location))
            .json(ApiResponse::<()> {
                success: false,
                data: None,
                error: Some(ApiError {
                    code: "AUTHENTICATION_REQUIRED".to_string(),
                    message: "Please log in to continue".to_string(),
                }),
            })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}
