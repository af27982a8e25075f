use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token type, expected: {0}")]
    InvalidTokenType(String),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token was issued by an unknown issuer")]
    InvalidIssuer,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Structure for JWT Claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,          // User ID
    pub exp: i64,           // Expiration timestamp
    pub iat: i64,           // Issued at timestamp
    pub nbf: i64,           // Not before timestamp
    pub iss: String,        // Issuer
    pub token_type: String, // Only "access" tokens open the learning log
}

pub trait TokenProvider: Send + Sync {
    /// Tokens normally come from the identity provider; minting here
    /// exists for local tooling and tests.
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
