use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{MovieDetails, SearchPage},
    routes::AppState,
    services::movie_search,
};

const FETCH_FAILED: &str = "An error occurred while fetching data.";

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    s: Option<String>,
    #[serde(default)]
    page: Option<u32>,
}

/// Handler for movie search
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchQuery>, QueryRejection>,
) -> AppResult<Json<SearchPage>> {
    let Query(params) = params.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let query = params.s.unwrap_or_default();

    let page = movie_search::search_movies(state.movies.as_ref(), &query, params.page)
        .await
        .map_err(|e| e.masked(FETCH_FAILED))?;

    Ok(Json(page))
}

/// Handler for a single movie's full record
pub async fn details(
    State(state): State<AppState>,
    Path(imdb_id): Path<String>,
) -> AppResult<Json<MovieDetails>> {
    let movie = movie_search::movie_details(state.movies.as_ref(), &imdb_id)
        .await
        .map_err(|e| e.masked(FETCH_FAILED))?;

    Ok(Json(movie))
}
