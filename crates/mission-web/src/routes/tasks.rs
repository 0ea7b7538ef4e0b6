use crate::state::AppState;
use crate::Result;
use axum::extract::{Path, State};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use mission_core::{Comment, Task, TaskPatch};
use mission_store::NewTask;
use serde::Deserialize;
use serde_json::{json, Value};

pub fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/{id}", put(update_task).delete(delete_task))
        .route("/api/tasks/{id}/comments", post(add_comment))
}

async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>> {
    Ok(Json(state.store.load().await?.tasks))
}

async fn create_task(
    State(state): State<AppState>,
    Json(attrs): Json<NewTask>,
) -> Result<Json<Task>> {
    Ok(Json(state.store.create_task(attrs).await?))
}

async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<Task>> {
    Ok(Json(state.store.update_task(id, patch).await?))
}

async fn delete_task(State(state): State<AppState>, Path(id): Path<u64>) -> Result<Json<Value>> {
    state.store.delete_task(id).await?;
    Ok(Json(json!({ "ok": true })))
}

#[derive(Debug, Deserialize)]
struct CommentRequest {
    text: String,
    author: Option<String>,
}

async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<CommentRequest>,
) -> Result<Json<Comment>> {
    Ok(Json(state.store.add_comment(id, req.text, req.author).await?))
}
