use std::env;

use crate::shared::config::{parsed_or, required, ConfigError};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = required(&lookup, "JWT_SECRET")?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: "must be at least 32 characters long for HS256".to_string(),
            });
        }

        let access_token_expiry = parsed_or(&lookup, "JWT_ACCESS_EXPIRY", 1800i64)?;
        if access_token_expiry <= 0 || access_token_expiry > 86400 {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                reason: "must be between 1 and 86400 seconds".to_string(),
            });
        }

        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| "learning-log".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
