use crate::routes::{
    capture_routes, data_routes, health_routes, link_routes, note_routes, search_routes,
    settings_routes, task_routes,
};
use crate::state::AppState;
use crate::{Result, WebError};
use axum::extract::DefaultBodyLimit;
use axum::http::Method;
use axum::Router;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};

const MAX_BODY_SIZE_1MB: usize = 1024 * 1024;

/// Where the API listens
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3333,
        }
    }
}

/// Assemble the full API router around shared state. Kept separate from
/// `start_server` so tests can drive the router without a socket.
pub fn build_router(state: AppState) -> Router {
    // The board UI may be served from anywhere on the LAN; this API carries
    // no credentials, so wide-open CORS is the intended posture.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    Router::new()
        .merge(data_routes())
        .merge(capture_routes())
        .merge(task_routes())
        .merge(note_routes())
        .merge(link_routes())
        .merge(search_routes())
        .merge(settings_routes())
        .with_state(state)
        .merge(health_routes())
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE_1MB))
        .layer(cors)
}

pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<()> {
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| WebError::Config(format!("Invalid address: {e}")))?;

    tracing::info!("Starting mission control API on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(WebError::Io)?;

    axum::serve(listener, app).await.map_err(WebError::Io)?;

    Ok(())
}
