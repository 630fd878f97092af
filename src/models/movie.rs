use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Marker OMDb uses for missing values ("Poster": "N/A")
pub const NOT_AVAILABLE: &str = "N/A";

/// A single hit from a movie database search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Type", default)]
    pub kind: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

/// A full movie record.
///
/// Only the fields this service reads are typed; everything else OMDb sends
/// (ratings, cast, box office...) is carried in `extra` and serialized back
/// unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "Plot", default, skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One page of search results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub results: Vec<MovieSummary>,
    pub total_results: u32,
}

// ============================================================================
// OMDb API Types
// ============================================================================

/// Status fields present on every OMDb reply
#[derive(Debug, Deserialize)]
pub struct OmdbStatus {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl OmdbStatus {
    pub fn is_success(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }
}

/// Payload of an OMDb `?s=` search
#[derive(Debug, Deserialize)]
pub struct OmdbSearch {
    #[serde(rename = "Search", default)]
    pub search: Vec<MovieSummary>,
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<String>,
}

impl From<OmdbSearch> for SearchPage {
    fn from(search: OmdbSearch) -> Self {
        let total_results = search
            .total_results
            .and_then(|total| total.parse().ok())
            .unwrap_or(search.search.len() as u32);

        SearchPage {
            results: search.search,
            total_results,
        }
    }
}
