/// OMDb (Open Movie Database) provider
///
/// Every call is a GET against one base URL with the API key as a query
/// parameter:
/// 1. Search: `?s=<query>&page=<n>` → `Search` array
/// 2. Details: `?i=<imdb id>&plot=full` → one record
/// 3. Title lookup: `?t=<title>` → best-matching record
///
/// OMDb answers HTTP 200 even for misses and flags them with
/// `"Response": "False"` and an `Error` message.
use crate::{
    cached,
    db::{Cache, CacheKey},
    error::{AppError, AppResult},
    models::{MovieDetails, OmdbSearch, OmdbStatus, SearchPage},
    services::providers::MovieProvider,
};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde_json::Value;

const SEARCH_CACHE_TTL: u64 = 3600; // 1 hour
const DETAILS_CACHE_TTL: u64 = 86400; // 1 day

const DEFAULT_NOT_FOUND: &str = "Movie not found!";

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    cache: Option<Cache>,
}

impl OmdbProvider {
    pub fn new(api_key: String, api_url: String, cache: Option<Cache>) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            cache,
        }
    }

    async fn get<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> AppResult<T> {
        let response = self
            .http_client
            .get(&self.api_url)
            .query(params)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "OMDb returned status {}: {}",
                status, body
            )));
        }

        let body: Value = response.json().await?;
        parse_reply(body)
    }
}

/// Splits an OMDb reply into a not-found error or the typed payload
fn parse_reply<T: DeserializeOwned>(body: Value) -> AppResult<T> {
    let status: OmdbStatus = serde_json::from_value(body.clone())?;

    if !status.is_success() {
        let message = status
            .error
            .unwrap_or_else(|| DEFAULT_NOT_FOUND.to_string());
        return Err(AppError::NotFound(message));
    }

    Ok(serde_json::from_value(body)?)
}

#[async_trait::async_trait]
impl MovieProvider for OmdbProvider {
    async fn search(&self, query: &str, page: u32) -> AppResult<SearchPage> {
        cached!(
            self.cache.as_ref(),
            CacheKey::MovieSearch(query.to_string(), page),
            SEARCH_CACHE_TTL,
            async move {
                let page_param = page.to_string();
                let search: OmdbSearch = self
                    .get(&[("s", query), ("page", page_param.as_str())])
                    .await?;
                let page = SearchPage::from(search);

                tracing::info!(
                    query = %query,
                    results = page.results.len(),
                    total = page.total_results,
                    provider = self.name(),
                    "Movie search completed"
                );

                Ok::<_, AppError>(page)
            }
        )
    }

    async fn details(&self, imdb_id: &str) -> AppResult<MovieDetails> {
        cached!(
            self.cache.as_ref(),
            CacheKey::MovieDetails(imdb_id.to_string()),
            DETAILS_CACHE_TTL,
            async move {
                let details: MovieDetails =
                    self.get(&[("i", imdb_id), ("plot", "full")]).await?;

                tracing::info!(
                    imdb_id = %imdb_id,
                    provider = self.name(),
                    "Movie details fetched"
                );

                Ok::<_, AppError>(details)
            }
        )
    }

    async fn find_by_title(&self, title: &str) -> AppResult<MovieDetails> {
        cached!(
            self.cache.as_ref(),
            CacheKey::MovieByTitle(title.to_string()),
            DETAILS_CACHE_TTL,
            async move {
                let details: MovieDetails = self.get(&[("t", title)]).await?;

                tracing::info!(
                    title = %title,
                    imdb_id = %details.imdb_id,
                    provider = self.name(),
                    "Movie resolved by title"
                );

                Ok::<_, AppError>(details)
            }
        )
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}
