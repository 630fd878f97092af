use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::MovieDetails,
    routes::AppState,
    services::mood,
};

pub const MOOD_REQUIRED: &str = "Mood is required.";
const SUGGESTION_FAILED: &str = "Failed to generate suggestion.";

#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    #[serde(default)]
    pub mood: Option<String>,
}

/// Handler for the mood suggestion endpoint
pub async fn suggest(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<MoodRequest>, JsonRejection>,
) -> AppResult<Json<MovieDetails>> {
    let mood = payload
        .ok()
        .and_then(|Json(request)| request.mood)
        .map(|mood| mood.trim().to_string())
        .filter(|mood| !mood.is_empty())
        .ok_or_else(|| AppError::InvalidInput(MOOD_REQUIRED.to_string()))?;

    tracing::info!(request_id = %request_id, mood = %mood, "Processing mood suggestion");

    let movie = mood::suggest_for_mood(state.model.as_ref(), state.movies.as_ref(), &mood)
        .await
        .map_err(|e| e.masked(SUGGESTION_FAILED))?;

    Ok(Json(movie))
}
