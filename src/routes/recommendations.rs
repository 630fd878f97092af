use axum::{extract::State, Json};
use uuid::Uuid;

use crate::{
    error::AppResult,
    middleware::CurrentUser,
    routes::AppState,
    services::recommendations::{self, Recommendations},
};

const RECOMMEND_FAILED: &str = "Failed to fetch recommendations.";

/// Handler for recommendations endpoint
pub async fn recommend(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<Recommendations>> {
    let likes = state
        .likes
        .list_for_user(&user.id)
        .await
        .map_err(|e| e.masked(RECOMMEND_FAILED))?;

    // v4 UUIDs come from the OS RNG; the low bits serve as the pick seed
    let seed = Uuid::new_v4().as_u128() as usize;
    let recommendations = recommendations::recommend(state.movies.as_ref(), likes, seed)
        .await
        .map_err(|e| e.masked(RECOMMEND_FAILED))?;

    Ok(Json(recommendations))
}
