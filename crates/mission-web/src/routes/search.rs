use crate::state::AppState;
use crate::Result;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use mission_core::SearchResults;
use serde::Deserialize;

pub fn search_routes() -> Router<AppState> {
    Router::new().route("/api/search", get(run_search))
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

/// An absent or empty `q` is a valid request for nothing
async fn run_search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResults>> {
    Ok(Json(state.store.search(&query.q).await?))
}
