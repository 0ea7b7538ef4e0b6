use crate::state::AppState;
use crate::Result;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Local;
use mission_core::{ActivityEntry, Document};
use mission_store::TodayView;

pub fn data_routes() -> Router<AppState> {
    Router::new()
        .route("/api/data", get(get_data))
        .route("/api/today", get(get_today))
        .route("/api/activity", get(get_activity))
}

/// The whole document, exactly as persisted
async fn get_data(State(state): State<AppState>) -> Result<Json<Document>> {
    Ok(Json(state.store.load().await?))
}

/// Dashboard payload. Windows are computed against the server's local
/// calendar day, which is what "today" means for a household tool.
async fn get_today(State(state): State<AppState>) -> Result<Json<TodayView>> {
    let today = Local::now().date_naive();
    Ok(Json(state.store.today_view(today).await?))
}

async fn get_activity(State(state): State<AppState>) -> Result<Json<Vec<ActivityEntry>>> {
    Ok(Json(state.store.activity().await?))
}
