mod detector;
mod render;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // The detector endpoint is this app's reason to exist: fail fast if absent.
    let detector = detector::DetectorClient::from_env().expect("detector client init failed");
    tracing::info!(endpoint = detector.endpoint(), "detector client initialized");

    let state = state::AppState::new(std::sync::Arc::new(detector));

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "tumorlens listening");
    axum::serve(listener, app).await.expect("server failed");
}
