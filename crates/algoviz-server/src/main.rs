//! Binary entrypoint for the algoviz HTTP server.
//!
//! Reads configuration from environment variables:
//! - `ALGOVIZ_HOST`: Listen address (default: "0.0.0.0")
//! - `ALGOVIZ_PORT`: Server listen port (default: "3000")

use algoviz_server::router::build_router;
use algoviz_server::state::AppState;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let host = std::env::var("ALGOVIZ_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("ALGOVIZ_PORT").unwrap_or_else(|_| "3000".to_string());

    let state = AppState::new();
    tracing::info!(
        algorithms = state.service.registry().len(),
        "registry loaded"
    );
    let app = build_router(state);

    let addr = format!("{}:{}", host, port);
    tracing::info!("algoviz server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await
}
