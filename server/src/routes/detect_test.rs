use std::net::SocketAddr;

use axum::Router;
use axum::routing::post;

use super::*;
use crate::config::ServerConfig;
use crate::routes::api_routes;

// =============================================================================
// Helpers
// =============================================================================

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Restoration service stand-in answering with a fixed response.
async fn spawn_upstream(status: StatusCode, content_type: &'static str, body: &'static str) -> SocketAddr {
    let app = Router::new().route(
        "/api/detect",
        post(move || async move { (status, [(CONTENT_TYPE, content_type)], body) }),
    );
    spawn(app).await
}

/// Restoration service stand-in describing the request it received.
async fn spawn_echo_upstream() -> SocketAddr {
    let app = Router::new().route(
        "/api/detect",
        post(|headers: HeaderMap, body: Bytes| async move {
            let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()).unwrap_or("").to_owned();
            axum::Json(serde_json::json!({
                "content_type": content_type,
                "body": String::from_utf8_lossy(&body),
            }))
        }),
    );
    spawn(app).await
}

async fn spawn_app(config: ServerConfig) -> SocketAddr {
    let state = AppState::new(config).unwrap();
    spawn(api_routes(state)).await
}

fn config_for(upstream: SocketAddr) -> ServerConfig {
    ServerConfig { detect_upstream: Some(format!("http://{upstream}/api/detect")), ..ServerConfig::default() }
}

async fn post_detect(app: SocketAddr, content_type: &str, body: &'static str) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("http://{app}/api/detect"))
        .header(CONTENT_TYPE, content_type)
        .body(body)
        .send()
        .await
        .unwrap()
}

const MULTIPART_TYPE: &str = "multipart/form-data; boundary=XYZ";
const MULTIPART_BODY: &str = "--XYZ\r\nContent-Disposition: form-data; name=\"file\"; filename=\"rain.png\"\r\nContent-Type: image/png\r\n\r\nPNGDATA\r\n--XYZ--\r\n";

// =============================================================================
// Forwarding
// =============================================================================

#[tokio::test]
async fn success_response_passes_through() {
    let upstream = spawn_upstream(
        StatusCode::OK,
        "application/json",
        r#"{"input_image":"/static/uploads/rain.png","output_image":"/static/results/rain.png"}"#,
    )
    .await;
    let app = spawn_app(config_for(upstream)).await;

    let resp = post_detect(app, MULTIPART_TYPE, MULTIPART_BODY).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "application/json");
    let json: serde_json::Value = serde_json::from_str(&resp.text().await.unwrap()).unwrap();
    assert_eq!(json["output_image"], "/static/results/rain.png");
}

#[tokio::test]
async fn request_body_and_content_type_reach_upstream() {
    let upstream = spawn_echo_upstream().await;
    let app = spawn_app(config_for(upstream)).await;

    let resp = post_detect(app, MULTIPART_TYPE, MULTIPART_BODY).await;

    let json: serde_json::Value = serde_json::from_str(&resp.text().await.unwrap()).unwrap();
    assert_eq!(json["content_type"], MULTIPART_TYPE);
    assert_eq!(json["body"], MULTIPART_BODY);
}

#[tokio::test]
async fn upstream_error_status_and_text_pass_through() {
    let upstream = spawn_upstream(StatusCode::INTERNAL_SERVER_ERROR, "text/plain", "bad image").await;
    let app = spawn_app(config_for(upstream)).await;

    let resp = post_detect(app, MULTIPART_TYPE, MULTIPART_BODY).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.text().await.unwrap(), "bad image");
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let closed = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let app = spawn_app(config_for(closed)).await;

    let resp = post_detect(app, MULTIPART_TYPE, MULTIPART_BODY).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(resp.text().await.unwrap(), UNAVAILABLE_MESSAGE);
}

#[tokio::test]
async fn missing_upstream_is_service_unavailable() {
    let app = spawn_app(ServerConfig::default()).await;

    let resp = post_detect(app, MULTIPART_TYPE, MULTIPART_BODY).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(resp.text().await.unwrap(), NOT_CONFIGURED_MESSAGE);
}

#[tokio::test]
async fn oversized_upload_is_rejected_before_forwarding() {
    let upstream = spawn_upstream(StatusCode::OK, "application/json", r#"{"output_image":"x"}"#).await;
    let app = spawn_app(ServerConfig { max_upload_bytes: 16, ..config_for(upstream) }).await;

    let resp = post_detect(app, MULTIPART_TYPE, MULTIPART_BODY).await;

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = spawn_app(ServerConfig::default()).await;

    let resp = reqwest::get(format!("http://{app}/healthz")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}
