// src/shared/config.rs
use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_COSMIC_API_URL: &str = "https://api.cosmicjs.com/v3";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Loads `.env.{RUST_ENV}` when present, otherwise `.env`.
pub fn load_dotenv() {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn parsed_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key).filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
            key,
            value: raw.clone(),
        }),
        None => Ok(default),
    }
}

//
// ──────────────────────────────────────────────────────────
// Content backend
// ──────────────────────────────────────────────────────────
//

/// Connection settings for the content bucket.
#[derive(Clone, PartialEq, Eq)]
pub struct CosmicConfig {
    pub bucket_slug: String,
    pub read_key: String,
    /// Held for completeness; reads never send it.
    pub write_key: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl CosmicConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bucket_slug = required(&lookup, "COSMIC_BUCKET_SLUG")?;
        let read_key = required(&lookup, "COSMIC_READ_KEY")?;
        let write_key = required(&lookup, "COSMIC_WRITE_KEY")?;

        let api_url = lookup("COSMIC_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_COSMIC_API_URL.to_string());

        let timeout_secs = parsed_or(&lookup, "COSMIC_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "COSMIC_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            bucket_slug,
            read_key,
            write_key,
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl fmt::Debug for CosmicConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CosmicConfig")
            .field("bucket_slug", &self.bucket_slug)
            .field("read_key", &"<redacted>")
            .field("write_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

//
// ──────────────────────────────────────────────────────────
// HTTP server
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parsed_or(&lookup, "PORT", DEFAULT_PORT)?;

        Ok(Self { host, port })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
