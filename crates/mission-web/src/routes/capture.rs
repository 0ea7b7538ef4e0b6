use crate::services::titles;
use crate::state::AppState;
use crate::Result;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Local;
use mission_core::{parse, CaptureDraft, CaptureOrigin, CaptureType};
use mission_store::NewLink;
use serde::Deserialize;
use serde_json::Value;

pub fn capture_routes() -> Router<AppState> {
    Router::new().route("/api/quick-capture", post(quick_capture))
}

#[derive(Debug, Deserialize)]
struct CaptureRequest {
    text: String,
    #[serde(rename = "type")]
    kind: CaptureType,
}

/// One line of free text in, one created entity out. This endpoint is the
/// `Server` capture origin: `@name` tokens pass through untouched and the
/// assignee defaults to Adam.
async fn quick_capture(
    State(state): State<AppState>,
    Json(req): Json<CaptureRequest>,
) -> Result<Json<Value>> {
    let today = Local::now().date_naive();

    match parse(&req.text, req.kind, CaptureOrigin::Server, today) {
        CaptureDraft::Task(draft) => {
            let task = state.store.create_task(draft.into()).await?;
            Ok(Json(serde_json::to_value(task)?))
        }
        CaptureDraft::Note(draft) => {
            let note = state.store.create_note(draft.into()).await?;
            Ok(Json(serde_json::to_value(note)?))
        }
        CaptureDraft::Link(draft) => {
            let title = titles::fetch_title(&state.http_client, &draft.url).await;
            let link = state
                .store
                .create_link(NewLink {
                    url: draft.url,
                    title,
                    description: None,
                    tags: None,
                })
                .await?;
            Ok(Json(serde_json::to_value(link)?))
        }
    }
}
