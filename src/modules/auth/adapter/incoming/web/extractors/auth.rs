use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::{
    domain::entities::UserId, ports::outgoing::token_provider::TokenProvider,
};
use crate::shared::api::ApiResponse;

pub const DEFAULT_LOGIN_URL: &str = "/accounts/login/";

/// Where unauthenticated callers are sent. Registered as app data;
/// `DEFAULT_LOGIN_URL` applies when absent.
#[derive(Debug, Clone)]
pub struct LoginUrl(pub String);

/// Represents an authenticated caller
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn login_redirect(req: &HttpRequest) -> ActixError {
    let login_url = req
        .app_data::<web::Data<LoginUrl>>()
        .map(|url| url.0.clone())
        .unwrap_or_else(|| DEFAULT_LOGIN_URL.to_string());

    create_api_error(ApiResponse::login_required(&login_url, req.path()))
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider = match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        {
            Some(provider) => provider,
            None => {
                tracing::error!("TokenProvider is not registered as app data");
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => return ready(Err(login_redirect(req))),
        };

        match token_provider.verify_token(&token) {
            Ok(claims) => ready(Ok(AuthenticatedUser {
                user_id: UserId::from(claims.sub),
            })),
            Err(e) => {
                tracing::debug!("Rejected bearer token on {}: {}", req.path(), e);
                ready(Err(login_redirect(req)))
            }
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
