use std::{path::PathBuf, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_EXPIRES_IN_DAYS: i64 = 7;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_UPLOAD_MAX_SIZE: usize = 5 * 1024 * 1024;
const DEFAULT_APP_ENV: &str = "development";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_expires_in_days: i64,

    pub host: String,
    pub port: u16,
    pub cors_origin: String,

    pub upload_dir: PathBuf,
    pub upload_max_size: usize,

    pub app_env: String,
    pub auth_rate_limit: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_expires_in_days: parse_or(
                &lookup,
                "JWT_EXPIRES_IN_DAYS",
                DEFAULT_JWT_EXPIRES_IN_DAYS,
            )?,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            cors_origin: lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
            upload_dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            upload_max_size: parse_or(&lookup, "UPLOAD_MAX_SIZE", DEFAULT_UPLOAD_MAX_SIZE)?,
            app_env: lookup("APP_ENV").unwrap_or_else(|| DEFAULT_APP_ENV.to_string()),
            auth_rate_limit: parse_or(&lookup, "AUTH_RATE_LIMIT", true)?,
        })
    }

    /// Socket address string the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parses an optional variable, falling back to `default` when unset.
fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: value.clone(),
                reason: e.to_string(),
            }),
    }
}
