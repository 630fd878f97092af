/// Movie metadata provider abstraction
///
/// The service talks to the movie database only through this trait, so the
/// HTTP client can be swapped for a stub in tests.
use crate::{
    error::AppResult,
    models::{MovieDetails, SearchPage},
};

pub mod omdb;

pub use omdb::OmdbProvider;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    /// Free-text search, one page of hits.
    ///
    /// Returns `AppError::NotFound` with the provider's message when nothing
    /// matches.
    async fn search(&self, query: &str, page: u32) -> AppResult<SearchPage>;

    /// Full record, including the long plot, by IMDb id
    async fn details(&self, imdb_id: &str) -> AppResult<MovieDetails>;

    /// Best match for an exact title
    async fn find_by_title(&self, title: &str) -> AppResult<MovieDetails>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
