use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Loads `.env.{RUST_ENV}` when present, otherwise `.env`.
pub fn load_env_files() -> String {
    let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    let env_file = format!(".env.{}", environment);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    environment
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub login_url: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub run_migrations: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = required(&lookup, "DATABASE_URL")?;
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parsed_or(&lookup, "PORT", 8080u16)?;
        let login_url = lookup("LOGIN_URL").unwrap_or_else(|| "/accounts/login/".to_string());
        let db_max_connections = parsed_or(&lookup, "DB_MAX_CONNECTIONS", 20u32)?;
        let db_min_connections = parsed_or(&lookup, "DB_MIN_CONNECTIONS", 2u32)?;
        let run_migrations = parsed_or(&lookup, "RUN_MIGRATIONS", false)?;
        let environment = lookup("RUST_ENV").unwrap_or_else(|| "development".to_string());

        if db_min_connections > db_max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                reason: "must not exceed DB_MAX_CONNECTIONS".to_string(),
            });
        }

        Ok(Self {
            environment,
            database_url,
            host,
            port,
            login_url,
            db_max_connections,
            db_min_connections,
            run_migrations,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub(crate) fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}

pub(crate) fn parsed_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
    }
}
