// src/config.rs

use std::{env, time::Duration};

use anyhow::{Context, Result};

/// Runtime settings, read from the environment (after `.env` is loaded).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    /// `None` means any origin is allowed.
    pub cors_allow_origins: Option<Vec<String>>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .context("DATABASE_URL must be set (env or .env file)")?;

        let bind_host = lookup("BIND_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 8080u16)?;
        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 10u32)?;
        let acquire_secs = parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 5u64)?;

        let cors_allow_origins = lookup("CORS_ALLOW_ORIGINS").and_then(|raw| {
            let origins: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            (!origins.is_empty()).then_some(origins)
        });

        Ok(Self {
            database_url,
            bind_host,
            port,
            db_max_connections,
            db_acquire_timeout: Duration::from_secs(acquire_secs),
            cors_allow_origins,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        None => Ok(default),
    }
}
