//! `POST /api/detect` forwarding.
//!
//! The page posts its multipart upload here, same-origin. The request body
//! and `Content-Type` go to the restoration service untouched, and its
//! status, `Content-Type`, and body come back untouched, so the service's own
//! error text reaches the user verbatim.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

pub const NOT_CONFIGURED_MESSAGE: &str = "detection service not configured";
pub const UNAVAILABLE_MESSAGE: &str = "detection service unavailable";

pub async fn detect(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let Some(upstream) = state.config.detect_upstream.as_deref() else {
        tracing::warn!("detect request received but DETECT_UPSTREAM_URL is not set");
        return (StatusCode::SERVICE_UNAVAILABLE, NOT_CONFIGURED_MESSAGE).into_response();
    };

    let size = body.len();
    match forward(&state.http, upstream, &headers, body).await {
        Ok(response) => {
            tracing::info!(%upstream, size, status = %response.status(), "detect forwarded");
            response
        }
        Err(e) => {
            tracing::warn!(error = %e, %upstream, "detect upstream failed");
            (StatusCode::BAD_GATEWAY, UNAVAILABLE_MESSAGE).into_response()
        }
    }
}

async fn forward(
    http: &reqwest::Client,
    upstream: &str,
    headers: &HeaderMap,
    body: Bytes,
) -> reqwest::Result<Response> {
    let mut request = http.post(upstream).body(body);
    if let Some(content_type) = headers.get(CONTENT_TYPE) {
        request = request.header(CONTENT_TYPE, content_type.clone());
    }

    relay(request.send().await?).await
}

/// Copy an upstream response's status, `Content-Type`, and body.
pub(crate) async fn relay(upstream_response: reqwest::Response) -> reqwest::Result<Response> {
    let status = upstream_response.status();
    let content_type = upstream_response.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream_response.bytes().await?;

    let mut response = (status, bytes).into_response();
    match content_type {
        Some(value) => {
            response.headers_mut().insert(CONTENT_TYPE, value);
        }
        None => {
            response.headers_mut().remove(CONTENT_TYPE);
        }
    }
    Ok(response)
}

#[cfg(test)]
#[path = "detect_test.rs"]
mod tests;
