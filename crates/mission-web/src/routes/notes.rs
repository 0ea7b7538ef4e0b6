use crate::state::AppState;
use crate::Result;
use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use mission_core::{Note, NotePatch};
use mission_store::NewNote;
use serde_json::{json, Value};

pub fn note_routes() -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route("/api/notes/{id}", put(update_note).delete(delete_note))
}

async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>> {
    Ok(Json(state.store.load().await?.notes))
}

async fn create_note(
    State(state): State<AppState>,
    Json(attrs): Json<NewNote>,
) -> Result<Json<Note>> {
    Ok(Json(state.store.create_note(attrs).await?))
}

async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(patch): Json<NotePatch>,
) -> Result<Json<Note>> {
    Ok(Json(state.store.update_note(id, patch).await?))
}

async fn delete_note(State(state): State<AppState>, Path(id): Path<u64>) -> Result<Json<Value>> {
    state.store.delete_note(id).await?;
    Ok(Json(json!({ "ok": true })))
}
