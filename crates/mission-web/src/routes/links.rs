use crate::services::titles;
use crate::state::AppState;
use crate::Result;
use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use mission_core::{normalize_url, Link, LinkPatch};
use mission_store::NewLink;
use serde_json::{json, Value};

pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/api/links", get(list_links).post(create_link))
        .route("/api/links/{id}", put(update_link).delete(delete_link))
}

async fn list_links(State(state): State<AppState>) -> Result<Json<Vec<Link>>> {
    Ok(Json(state.store.load().await?.links))
}

/// Create a bookmarked link. When no usable title is supplied the target
/// page is asked for one; any fetch trouble falls back to the URL itself.
async fn create_link(
    State(state): State<AppState>,
    Json(mut attrs): Json<NewLink>,
) -> Result<Json<Link>> {
    attrs.url = normalize_url(&attrs.url);
    if attrs.title.as_deref().map_or(true, |t| t.trim().is_empty()) {
        attrs.title = titles::fetch_title(&state.http_client, &attrs.url).await;
    }
    Ok(Json(state.store.create_link(attrs).await?))
}

async fn update_link(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(patch): Json<LinkPatch>,
) -> Result<Json<Link>> {
    Ok(Json(state.store.update_link(id, patch).await?))
}

async fn delete_link(State(state): State<AppState>, Path(id): Path<u64>) -> Result<Json<Value>> {
    state.store.delete_link(id).await?;
    Ok(Json(json!({ "ok": true })))
}
