//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config and one pooled HTTP client for upstream calls.
//! Clone is required by Axum; both fields are cheap to clone.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Connect timeout for the restoration service.
const UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state and the upstream HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.detect_timeout)
            .connect_timeout(std::time::Duration::from_secs(UPSTREAM_CONNECT_TIMEOUT_SECS))
            .build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}
