use crate::{Result, WebError};
use mission_store::DocumentStore;
use std::sync::Arc;
use std::time::Duration;

/// Remote requests (link title resolution) never run longer than this
const HTTP_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DocumentStore>,
    pub http_client: reqwest::Client,
}

/// Wrap a store into shared request state, building the outbound HTTP
/// client once with its hard timeout.
pub fn build_state(store: DocumentStore) -> Result<AppState> {
    let http_client = reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(|e| WebError::Config(format!("Failed to create HTTP client: {e}")))?;

    Ok(AppState {
        store: Arc::new(store),
        http_client,
    })
}
