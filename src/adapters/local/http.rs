//! HTTP inbound adapter serving `GET /competitions/:competition_id/clips`.

use crate::application::query::ClipQueryService;
use crate::domain::clip::ClipRecord;
use crate::ports::repository::ClipRepository;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::error;

pub fn router<R>(service: Arc<ClipQueryService<R>>) -> Router
where
    R: ClipRepository + 'static,
{
    Router::new()
        .route("/competitions/:competition_id/clips", get(list_clips::<R>))
        .with_state(service)
}

async fn list_clips<R>(
    State(service): State<Arc<ClipQueryService<R>>>,
    Path(competition_id): Path<String>,
) -> Result<Json<Vec<ClipRecord>>, (StatusCode, String)>
where
    R: ClipRepository + 'static,
{
    service
        .clips_for_competition(&competition_id)
        .await
        .map(Json)
        .map_err(|err| {
            error!(competition = %competition_id, "Clip query failed: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        })
}
