#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    config::load_dotenv();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let port = config.port;

    match config.detect_upstream.as_deref() {
        Some(upstream) => tracing::info!(%upstream, "forwarding /api/detect"),
        None => tracing::warn!("DETECT_UPSTREAM_URL not set; /api/detect will answer 503"),
    }

    let state = state::AppState::new(config).expect("http client init failed");
    let app = routes::leptos_app(state).expect("leptos app init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "derain listening");
    axum::serve(listener, app).await.expect("server failed");
}
