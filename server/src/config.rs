//! Server configuration parsed from environment variables.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DETECT_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;
pub const DEFAULT_STATIC_DIR: &str = "static";

/// A configuration variable held a value that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}={value:?}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Full URL of the restoration service's detect endpoint.
    pub detect_upstream: Option<String>,
    pub detect_timeout: Duration,
    pub max_upload_bytes: usize,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            detect_upstream: None,
            detect_timeout: Duration::from_secs(DEFAULT_DETECT_TIMEOUT_SECS),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DETECT_UPSTREAM_URL`: `/api/detect` answers 503 when absent
    /// - `DETECT_TIMEOUT_SECS`: default 300
    /// - `MAX_UPLOAD_BYTES`: default 16 MiB
    /// - `STATIC_DIR`: default `static`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for unparseable numbers or a non-HTTP upstream.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", var("PORT"), DEFAULT_PORT)?;
        let detect_upstream = parse_upstream(var("DETECT_UPSTREAM_URL"))?;
        let timeout_secs = parse_or("DETECT_TIMEOUT_SECS", var("DETECT_TIMEOUT_SECS"), DEFAULT_DETECT_TIMEOUT_SECS)?;
        let max_upload_bytes = parse_or("MAX_UPLOAD_BYTES", var("MAX_UPLOAD_BYTES"), DEFAULT_MAX_UPLOAD_BYTES)?;
        let static_dir = var("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from);

        Ok(Self {
            port,
            detect_upstream,
            detect_timeout: Duration::from_secs(timeout_secs),
            max_upload_bytes,
            static_dir,
        })
    }
}

/// Load `.env` into the process environment, if present.
///
/// Call after the tracing subscriber is installed so failures are reported.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if dotenv_failure_matters(&e) => tracing::warn!(error = %e, "failed to load .env"),
        Err(_) => {}
    }
}

/// A missing `.env` is the normal production case; anything else is not.
fn dotenv_failure_matters(e: &dotenvy::Error) -> bool {
    !e.not_found()
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse::<T>().map_err(|e| ConfigError {
            var,
            value: value.to_owned(),
            reason: e.to_string(),
        }),
    }
}

fn parse_upstream(raw: Option<String>) -> Result<Option<String>, ConfigError> {
    let Some(value) = raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError {
            var: "DETECT_UPSTREAM_URL",
            value,
            reason: "expected an http:// or https:// URL".to_owned(),
        });
    }
    Ok(Some(value))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
