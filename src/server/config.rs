use std::{net::SocketAddr, str::FromStr};

use axum::http::HeaderValue;
use dioxus_logger::tracing::Level;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_LOG_LEVEL: Level = Level::INFO;

pub struct Config {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    pub log_level: Level,

    /// Single origin allowed by CORS. Any origin is allowed when unset.
    pub cors_allowed_origin: Option<HeaderValue>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and every value usable
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let database_url = var("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let listen_addr = match var("LISTEN_ADDR") {
            Some(value) => parse_var("LISTEN_ADDR", value)?,
            None => parse_var("LISTEN_ADDR", DEFAULT_LISTEN_ADDR.to_string())?,
        };

        let log_level = match var("LOG_LEVEL") {
            Some(value) => parse_var("LOG_LEVEL", value)?,
            None => DEFAULT_LOG_LEVEL,
        };

        let cors_allowed_origin = var("CORS_ALLOWED_ORIGIN")
            .map(|value| parse_var("CORS_ALLOWED_ORIGIN", value))
            .transpose()?;

        Ok(Self {
            database_url,
            listen_addr,
            log_level,
            cors_allowed_origin,
        })
    }
}

fn parse_var<T>(name: &str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.clone(),
            reason: e.to_string(),
        })
}
