use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://biomas.db?mode=rwc";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4441;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_UPLOAD_MAX_BYTES: usize = 10 * 1024 * 1024;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Value of `APP_ENV`; `development` exposes internal error detail.
    pub app_env: String,

    pub upload_dir: PathBuf,
    pub upload_max_bytes: usize,

    /// Log every SQL statement through sqlx.
    pub db_log_sql: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: var_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            host: var_or("HOST", DEFAULT_HOST),
            port: parse_var("PORT", DEFAULT_PORT)?,
            app_env: var_or("APP_ENV", "production"),
            upload_dir: PathBuf::from(var_or("UPLOAD_DIR", DEFAULT_UPLOAD_DIR)),
            upload_max_bytes: parse_var("UPLOAD_MAX_BYTES", DEFAULT_UPLOAD_MAX_BYTES)?,
            db_log_sql: parse_var("DB_LOG_SQL", false)?,
        })
    }

    pub fn is_development(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("development")
    }

    /// Address the HTTP listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_var<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => {
            value
                .trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::InvalidEnvVar {
                    name: name.to_string(),
                    value,
                    reason: e.to_string(),
                })
        }
        _ => Ok(default),
    }
}
