use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

pub const TEST_TOKEN: &str = "test-token";

/// Token provider that skips cryptography: either every token maps to
/// one fixed user, or every token is refused.
#[derive(Debug, Clone)]
pub struct StubTokenProvider {
    user_id: Option<Uuid>,
}

impl StubTokenProvider {
    pub fn accepting(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    pub fn rejecting() -> Self {
        Self { user_id: None }
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        Ok(format!("stub-{}", user_id))
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        let sub = self.user_id.ok_or(TokenError::InvalidSignature)?;
        let now = chrono::Utc::now().timestamp();

        Ok(TokenClaims {
            sub,
            exp: now + 3600,
            iat: now,
            nbf: now,
            iss: "learning-log".to_string(),
            token_type: "access".to_string(),
        })
    }
}

pub fn bearer() -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", TEST_TOKEN))
}

pub fn jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        issuer: "learning-log".to_string(),
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        access_token_expiry: 3600,
    })
}

/// `Authorization` header carrying a real signed token for `user_id`.
pub fn bearer_for(user_id: Uuid) -> (&'static str, String) {
    let token = jwt_service()
        .generate_access_token(user_id)
        .expect("test token");
    ("Authorization", format!("Bearer {}", token))
}

/// App data the `AuthenticatedUser` extractor looks up, backed by
/// `jwt_service()` so `bearer_for` tokens verify.
pub fn jwt_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service());
    web::Data::new(provider)
}
