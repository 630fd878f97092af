use crate::{
    error::{AppError, AppResult},
    models::{MovieDetails, SearchPage},
    services::providers::MovieProvider,
};

/// Searches the movie database, validating the query and page first
pub async fn search_movies(
    provider: &dyn MovieProvider,
    query: &str,
    page: Option<u32>,
) -> AppResult<SearchPage> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AppError::InvalidInput(
            "Search query is required.".to_string(),
        ));
    }

    // OMDb pages are 1-based and capped at 100
    let page = page.unwrap_or(1);
    if !(1..=100).contains(&page) {
        return Err(AppError::InvalidInput(
            "Page must be between 1 and 100.".to_string(),
        ));
    }

    provider.search(query, page).await
}

/// Fetches one movie's full record
pub async fn movie_details(provider: &dyn MovieProvider, imdb_id: &str) -> AppResult<MovieDetails> {
    provider.details(imdb_id.trim()).await
}
