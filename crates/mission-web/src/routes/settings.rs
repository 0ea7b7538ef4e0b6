use crate::state::AppState;
use crate::Result;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use mission_core::{Settings, SettingsPatch, TagColor};
use serde::Deserialize;

pub fn settings_routes() -> Router<AppState> {
    Router::new()
        .route("/api/settings", get(get_settings).put(put_settings))
        .route("/api/tags", post(upsert_tag))
}

async fn get_settings(State(state): State<AppState>) -> Result<Json<Settings>> {
    Ok(Json(state.store.settings().await?))
}

async fn put_settings(
    State(state): State<AppState>,
    Json(patch): Json<SettingsPatch>,
) -> Result<Json<Settings>> {
    Ok(Json(state.store.update_settings(patch).await?))
}

#[derive(Debug, Deserialize)]
struct TagRequest {
    name: String,
    color: String,
}

/// Register a tag in the catalog, or recolor it if the name is known
async fn upsert_tag(
    State(state): State<AppState>,
    Json(req): Json<TagRequest>,
) -> Result<Json<Vec<TagColor>>> {
    Ok(Json(state.store.upsert_tag(req.name, req.color).await?))
}
