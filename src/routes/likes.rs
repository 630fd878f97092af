use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    middleware::CurrentUser,
    models::{Like, LikedMovie},
    routes::AppState,
};

const LIKE_FAILED: &str = "Failed to like the movie.";
const LIST_FAILED: &str = "Failed to load liked movies.";
const INVALID_IMDB_ID: &str = "imdbID must be an IMDb id like tt0133093.";

/// `tt` followed by digits
fn is_imdb_id(id: &str) -> bool {
    id.strip_prefix("tt")
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// A movie as returned by search; only the id and title are mandatory
#[derive(Debug, Deserialize)]
pub struct LikeRequest {
    #[serde(rename = "imdbID", default)]
    pub imdb_id: Option<String>,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
}

impl TryFrom<LikeRequest> for LikedMovie {
    type Error = AppError;

    fn try_from(request: LikeRequest) -> Result<Self, Self::Error> {
        let required = |value: Option<String>, field: &str| {
            value
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| AppError::InvalidInput(format!("{} is required.", field)))
        };

        let imdb_id = required(request.imdb_id, "imdbID")?.trim().to_string();
        if !is_imdb_id(&imdb_id) {
            return Err(AppError::InvalidInput(INVALID_IMDB_ID.to_string()));
        }

        Ok(LikedMovie {
            imdb_id,
            title: required(request.title, "Title")?,
            year: request.year.unwrap_or_default(),
            poster: request.poster.unwrap_or_default(),
        })
    }
}

/// Handler for liking a movie
pub async fn like_movie(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<LikeRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Like>)> {
    let Json(request) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let movie = LikedMovie::try_from(request)?;
    let like = Like::new(&user, movie);

    state
        .likes
        .upsert(&like)
        .await
        .map_err(|e| e.masked(LIKE_FAILED))?;

    tracing::info!(user_id = %user.id, movie_id = %like.movie_id, "Movie liked");

    Ok((StatusCode::CREATED, Json(like)))
}

/// Handler listing the caller's likes
pub async fn list_likes(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<Vec<Like>>> {
    let likes = state
        .likes
        .list_for_user(&user.id)
        .await
        .map_err(|e| e.masked(LIST_FAILED))?;

    Ok(Json(likes))
}
