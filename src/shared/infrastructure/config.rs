use crate::shared::errors::{AppError, AppResult};
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Runtime configuration read from the process environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub bind_addr: SocketAddr,
    /// Insert the sample catalogue when the movies table is empty
    pub seed_database: bool,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// Overrides the CPU-derived pool size when set
    pub max_pool_size: Option<u32>,
}

// Keep credentials out of logs.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host())
            .field("max_pool_size", &self.max_pool_size)
            .finish()
    }
}

impl DatabaseConfig {
    /// Host part of the URL, without credentials
    pub fn host(&self) -> &str {
        self.url.rsplit('@').next().unwrap_or("unknown_host")
    }
}

impl AppConfig {
    /// Load configuration from environment variables (call `dotenvy::dotenv()` first)
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL").ok_or_else(|| {
            AppError::ConfigError("DATABASE_URL environment variable not found".to_string())
        })?;
        validate_database_url(&url)?;

        let max_pool_size = match lookup("DB_POOL_SIZE") {
            Some(raw) => Some(parse_pool_size(&raw)?),
            None => None,
        };

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse::<SocketAddr>().map_err(|e| {
            AppError::ConfigError(format!("Invalid BIND_ADDR '{}': {}", bind_raw, e))
        })?;

        let seed_database = match lookup("SEED_DATABASE") {
            Some(raw) => parse_flag("SEED_DATABASE", &raw)?,
            None => false,
        };

        Ok(Self {
            database: DatabaseConfig { url, max_pool_size },
            bind_addr,
            seed_database,
        })
    }
}

fn validate_database_url(url: &str) -> AppResult<()> {
    if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
        return Err(AppError::ConfigError(
            "Invalid database URL format. Must start with postgres:// or postgresql://"
                .to_string(),
        ));
    }
    Ok(())
}

fn parse_pool_size(raw: &str) -> AppResult<u32> {
    match raw.trim().parse::<u32>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(AppError::ConfigError(format!(
            "DB_POOL_SIZE must be a positive integer, got '{}'",
            raw
        ))),
    }
}

fn parse_flag(key: &str, raw: &str) -> AppResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(AppError::ConfigError(format!(
            "{} must be a boolean, got '{}'",
            key, raw
        ))),
    }
}
