use serde::Serialize;

use crate::{
    error::{AppError, AppResult},
    models::{Like, MovieSummary},
    services::providers::MovieProvider,
};

pub const NO_LIKES: &str = "Like some movies first to get recommendations!";

/// Movies related to one of the user's likes
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub based_on: Like,
    pub movies: Vec<MovieSummary>,
}

/// Recommends movies based on one liked movie.
///
/// `seed` selects the like (`seed % likes.len()`); callers pass a random
/// value. The movie database is searched by the like's title and the liked
/// movie itself is dropped from the hits. A search with no hits yields an
/// empty list.
pub async fn recommend(
    provider: &dyn MovieProvider,
    likes: Vec<Like>,
    seed: usize,
) -> AppResult<Recommendations> {
    if likes.is_empty() {
        return Err(AppError::InvalidInput(NO_LIKES.to_string()));
    }

    let index = seed % likes.len();
    let based_on = likes.into_iter().nth(index).ok_or_else(|| {
        AppError::Internal("Selected like out of range".to_string())
    })?;

    let movies = match provider.search(&based_on.title, 1).await {
        Ok(page) => page
            .results
            .into_iter()
            .filter(|movie| movie.imdb_id != based_on.movie_id)
            .collect(),
        Err(AppError::NotFound(_)) => Vec::new(),
        Err(e) => return Err(e),
    };

    tracing::info!(
        based_on = %based_on.title,
        recommended = movies.len(),
        "Recommendations generated"
    );

    Ok(Recommendations { based_on, movies })
}
