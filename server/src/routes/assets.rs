//! `/static` assets.
//!
//! SYSTEM CONTEXT
//! ==============
//! The restoration service publishes result images under its own `/static`
//! tree and answers with origin-relative paths such as
//! `/static/results/<name>`. When it shares this host's static directory the
//! files are served locally. Otherwise a file missing locally is fetched from
//! the restoration service's origin, so the page can load it either way.

#[cfg(test)]
#[path = "assets_test.rs"]
mod tests;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{MethodRouter, get};
use tower_http::services::ServeDir;

use super::detect::{UNAVAILABLE_MESSAGE, relay};
use crate::state::AppState;

pub const STATIC_PREFIX: &str = "/static";

/// `/static/*` from `STATIC_DIR`, falling back to the restoration service.
pub fn static_routes(state: AppState) -> Router {
    let dir = state.config.static_dir.clone();
    let upstream: MethodRouter = get(upstream_asset).with_state(state);
    Router::new().nest_service(STATIC_PREFIX, ServeDir::new(dir).fallback(upstream))
}

/// Runs only for files missing from the local directory. The nested service
/// sees the path with `/static` already stripped.
async fn upstream_asset(State(state): State<AppState>, uri: Uri) -> Response {
    let Some(upstream) = state.config.detect_upstream.as_deref() else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let Some(url) = asset_url(upstream, uri.path()) else {
        tracing::warn!(path = %uri.path(), "rejected static asset path");
        return StatusCode::NOT_FOUND.into_response();
    };

    match fetch(&state.http, url.clone()).await {
        Ok(response) => {
            tracing::debug!(%url, status = %response.status(), "static asset fetched upstream");
            response
        }
        Err(e) => {
            tracing::warn!(error = %e, %url, "static asset upstream failed");
            (StatusCode::BAD_GATEWAY, UNAVAILABLE_MESSAGE).into_response()
        }
    }
}

async fn fetch(http: &reqwest::Client, url: reqwest::Url) -> reqwest::Result<Response> {
    relay(http.get(url).send().await?).await
}

/// Resolve a `/static`-relative path against the upstream's origin.
///
/// Returns `None` if the upstream is not a valid URL or the resolved path
/// escapes `/static/`.
pub(crate) fn asset_url(upstream: &str, path: &str) -> Option<reqwest::Url> {
    let base = reqwest::Url::parse(upstream).ok()?;
    let url = base.join(&format!("{STATIC_PREFIX}{path}")).ok()?;
    url.path().starts_with("/static/").then_some(url)
}
