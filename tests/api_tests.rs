use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Map, Value};

use cinemahunt::{
    db::MemoryLikeStore,
    error::{AppError, AppResult},
    models::{MovieDetails, MovieSummary, SearchPage},
    services::{LanguageModel, MovieProvider},
    create_router, AppState,
};

const VIBE_JSON: &str = r#"{"beginning":{"vibe":"Quiet Dread","description":"A family moves into a remote hotel."},"middle":{"vibe":"Creeping Madness","description":"Isolation cracks the father's mind."},"end":{"vibe":"Frozen Chase","description":"A hedge maze decides everyone's fate."}}"#;

/// Language model stub with a canned reply; `None` simulates an upstream failure
struct StubModel {
    reply: Option<String>,
}

impl StubModel {
    fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
        }
    }

    fn failing() -> Self {
        Self { reply: None }
    }
}

#[async_trait::async_trait]
impl LanguageModel for StubModel {
    async fn generate(&self, _prompt: &str) -> AppResult<String> {
        self.reply
            .clone()
            .ok_or_else(|| AppError::LanguageModel("quota exceeded".to_string()))
    }
}

/// Movie database stub backed by a fixed catalogue
struct StubMovies {
    catalogue: Vec<MovieSummary>,
}

impl StubMovies {
    fn new() -> Self {
        Self {
            catalogue: vec![
                summary("tt0081505", "The Shining"),
                summary("tt0117571", "Scream"),
                summary("tt0045152", "Singin' in the Rain"),
                summary("tt0120737", "The Lord of the Rings: The Fellowship of the Ring"),
                summary("tt0167261", "The Lord of the Rings: The Two Towers"),
            ],
        }
    }

    fn to_details(movie: &MovieSummary) -> MovieDetails {
        let mut extra = Map::new();
        extra.insert("Director".to_string(), json!("Somebody Famous"));
        MovieDetails {
            imdb_id: movie.imdb_id.clone(),
            title: movie.title.clone(),
            year: movie.year.clone(),
            poster: movie.poster.clone(),
            plot: Some(format!("The full plot of {}.", movie.title)),
            extra,
        }
    }
}

fn summary(imdb_id: &str, title: &str) -> MovieSummary {
    MovieSummary {
        imdb_id: imdb_id.to_string(),
        title: title.to_string(),
        year: "1980".to_string(),
        kind: "movie".to_string(),
        poster: format!("https://posters.test/{}.jpg", imdb_id),
    }
}

#[async_trait::async_trait]
impl MovieProvider for StubMovies {
    async fn search(&self, query: &str, _page: u32) -> AppResult<SearchPage> {
        let needle = query.to_lowercase();
        let results: Vec<MovieSummary> = self
            .catalogue
            .iter()
            .filter(|movie| movie.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        if results.is_empty() {
            return Err(AppError::NotFound("Movie not found!".to_string()));
        }

        Ok(SearchPage {
            total_results: results.len() as u32,
            results,
        })
    }

    async fn details(&self, imdb_id: &str) -> AppResult<MovieDetails> {
        self.catalogue
            .iter()
            .find(|movie| movie.imdb_id == imdb_id)
            .map(StubMovies::to_details)
            .ok_or_else(|| AppError::NotFound("Incorrect IMDb ID.".to_string()))
    }

    async fn find_by_title(&self, title: &str) -> AppResult<MovieDetails> {
        self.catalogue
            .iter()
            .find(|movie| movie.title.eq_ignore_ascii_case(title))
            .map(StubMovies::to_details)
            .ok_or_else(|| AppError::NotFound("Movie not found!".to_string()))
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

fn create_test_server(model: StubModel) -> TestServer {
    let state = AppState::new(
        Arc::new(StubMovies::new()),
        Arc::new(model),
        Arc::new(MemoryLikeStore::new()),
    );
    TestServer::new(create_router(state)).unwrap()
}

fn user_id(id: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-user-id"),
        HeaderValue::from_str(id).unwrap(),
    )
}

fn user_email(email: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-user-email"),
        HeaderValue::from_str(email).unwrap(),
    )
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(StubModel::replying(""));
    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_request_id_echoed() {
    let server = create_test_server(StubModel::replying(""));
    let response = server.get("/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}

// ----------------------------------------------------------------------------
// Mood suggestions
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_mood_returns_movie_record() {
    let server = create_test_server(StubModel::replying("  Singin' in the Rain\n"));

    let response = server.post("/api/mood").json(&json!({ "mood": "Happy" })).await;

    response.assert_status_ok();
    let movie: Value = response.json();
    assert_eq!(movie["Title"], "Singin' in the Rain");
    assert_eq!(movie["imdbID"], "tt0045152");
    assert_eq!(movie["Director"], "Somebody Famous");
}

#[tokio::test]
async fn test_mood_missing_field_is_bad_request() {
    let server = create_test_server(StubModel::replying("Scream"));

    let response = server.post("/api/mood").json(&json!({})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Mood is required." }));

    let response = server.post("/api/mood").json(&json!({ "mood": "" })).await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_mood_without_body_is_bad_request() {
    let server = create_test_server(StubModel::replying("Scream"));
    let response = server.post("/api/mood").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_mood_unknown_movie_is_not_found() {
    let server = create_test_server(StubModel::replying("A Movie Nobody Made"));

    let response = server.post("/api/mood").json(&json!({ "mood": "Weird" })).await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "error": "Could not find details for the suggested movie." }));
}

#[tokio::test]
async fn test_mood_model_failure_is_generic_500() {
    let server = create_test_server(StubModel::failing());

    let response = server.post("/api/mood").json(&json!({ "mood": "Happy" })).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "error": "Failed to generate suggestion." }));
}

// ----------------------------------------------------------------------------
// Vibe analysis
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_vibe_fenced_and_bare_replies_match() {
    let bare = create_test_server(StubModel::replying(VIBE_JSON));
    let fenced = create_test_server(StubModel::replying(&format!("```json{}```", VIBE_JSON)));
    let body = json!({ "plot": "A writer takes a caretaker job at an isolated hotel." });

    let bare_response = bare.post("/api/vibe").json(&body).await;
    let fenced_response = fenced.post("/api/vibe").json(&body).await;

    bare_response.assert_status_ok();
    fenced_response.assert_status_ok();

    let bare_json: Value = bare_response.json();
    let fenced_json: Value = fenced_response.json();
    assert_eq!(bare_json, fenced_json);
    assert_eq!(bare_json["middle"]["vibe"], "Creeping Madness");
}

#[tokio::test]
async fn test_vibe_missing_plot_is_bad_request() {
    let server = create_test_server(StubModel::replying(VIBE_JSON));

    let response = server.post("/api/vibe").json(&json!({ "summary": "wrong key" })).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Plot summary is required." }));

    let response = server.post("/api/vibe").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_vibe_malformed_reply_is_generic_500() {
    let server = create_test_server(StubModel::replying("The vibe is mostly spooky."));

    let response = server
        .post("/api/vibe")
        .json(&json!({ "plot": "Something happens." }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "error": "Failed to generate vibe from AI." }));
}

#[tokio::test]
async fn test_vibe_partial_reply_passes_through() {
    let partial = json!({
        "beginning": { "vibe": "Calm" },
        "middle": { "vibe": "Tense", "description": "Things go wrong." },
        "end": { "description": "It ends." }
    });
    let server = create_test_server(StubModel::replying(&partial.to_string()));

    let response = server
        .post("/api/vibe")
        .json(&json!({ "plot": "Something happens." }))
        .await;

    response.assert_status_ok();
    response.assert_json(&partial);
}

#[tokio::test]
async fn test_vibe_unavailable_plot_is_bad_request() {
    let server = create_test_server(StubModel::replying(VIBE_JSON));

    let response = server.post("/api/vibe").json(&json!({ "plot": "N/A" })).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Plot summary is required." }));
}

// ----------------------------------------------------------------------------
// Movie search and details
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_search_returns_results() {
    let server = create_test_server(StubModel::replying(""));

    let response = server
        .get("/api/movies/search")
        .add_query_param("s", "lord of the rings")
        .await;

    response.assert_status_ok();
    let page: Value = response.json();
    assert_eq!(page["totalResults"], 2);
    assert_eq!(page["results"][0]["imdbID"], "tt0120737");
}

#[tokio::test]
async fn test_search_without_query_is_bad_request() {
    let server = create_test_server(StubModel::replying(""));
    let response = server.get("/api/movies/search").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_miss_is_not_found_with_provider_message() {
    let server = create_test_server(StubModel::replying(""));

    let response = server
        .get("/api/movies/search")
        .add_query_param("s", "zzzz")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "error": "Movie not found!" }));
}

#[tokio::test]
async fn test_movie_details() {
    let server = create_test_server(StubModel::replying(""));

    let response = server.get("/api/movies/tt0081505").await;
    response.assert_status_ok();
    let movie: Value = response.json();
    assert_eq!(movie["Title"], "The Shining");
    assert_eq!(movie["Plot"], "The full plot of The Shining.");

    let response = server.get("/api/movies/tt0000000").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

// ----------------------------------------------------------------------------
// Likes and recommendations
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_like_requires_user() {
    let server = create_test_server(StubModel::replying(""));

    let response = server
        .post("/api/likes")
        .json(&json!({ "imdbID": "tt0081505", "Title": "The Shining" }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_json(&json!({ "error": "You must be logged in." }));

    let response = server.get("/api/likes").await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_json(&json!({ "error": "You must be logged in." }));
}

#[tokio::test]
async fn test_like_missing_movie_id_is_bad_request() {
    let server = create_test_server(StubModel::replying(""));
    let (name, value) = user_id("uid-1");

    let response = server
        .post("/api/likes")
        .add_header(name, value)
        .json(&json!({ "Title": "The Shining" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_like_with_non_imdb_id_cannot_clobber_other_user() {
    let server = create_test_server(StubModel::replying(""));

    let (name, value) = user_id("u_1");
    let response = server
        .post("/api/likes")
        .add_header(name, value)
        .json(&json!({ "imdbID": "tt0081505", "Title": "The Shining" }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let (name, value) = user_id("u");
    let response = server
        .post("/api/likes")
        .add_header(name, value)
        .json(&json!({ "imdbID": "1_tt0081505", "Title": "Not The Shining" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "imdbID must be an IMDb id like tt0133093." }));

    let (name, value) = user_id("u_1");
    let response = server.get("/api/likes").add_header(name, value).await;
    let likes: Vec<Value> = response.json();
    assert_eq!(likes.len(), 1);
    assert_eq!(likes[0]["title"], "The Shining");
}

#[tokio::test]
async fn test_liking_twice_overwrites() {
    let server = create_test_server(StubModel::replying(""));
    let movie = json!({
        "imdbID": "tt0081505",
        "Title": "The Shining",
        "Year": "1980",
        "Poster": "https://posters.test/tt0081505.jpg"
    });

    for _ in 0..2 {
        let (id_name, id_value) = user_id("uid-1");
        let (email_name, email_value) = user_email("jack@overlook.test");
        let response = server
            .post("/api/likes")
            .add_header(id_name, id_value)
            .add_header(email_name, email_value)
            .json(&movie)
            .await;
        response.assert_status(StatusCode::CREATED);
        let like: Value = response.json();
        assert_eq!(like["id"], "uid-1_tt0081505");
    }

    let (name, value) = user_id("uid-1");
    let response = server.get("/api/likes").add_header(name, value).await;
    response.assert_status_ok();
    let likes: Vec<Value> = response.json();
    assert_eq!(likes.len(), 1);
    assert_eq!(likes[0]["userEmail"], "jack@overlook.test");
    assert_eq!(likes[0]["title"], "The Shining");

    let (name, value) = user_id("uid-2");
    let response = server.get("/api/likes").add_header(name, value).await;
    let likes: Vec<Value> = response.json();
    assert!(likes.is_empty());
}

#[tokio::test]
async fn test_recommendations_without_likes_is_bad_request() {
    let server = create_test_server(StubModel::replying(""));
    let (name, value) = user_id("uid-1");

    let response = server.get("/api/recommendations").add_header(name, value).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Like some movies first to get recommendations!" }));
}

#[tokio::test]
async fn test_recommendations_exclude_liked_movie() {
    let server = create_test_server(StubModel::replying(""));

    let (name, value) = user_id("uid-1");
    server
        .post("/api/likes")
        .add_header(name, value)
        .json(&json!({
            "imdbID": "tt0120737",
            "Title": "The Lord of the Rings",
            "Year": "2001",
            "Poster": "N/A"
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let (name, value) = user_id("uid-1");
    let response = server.get("/api/recommendations").add_header(name, value).await;

    response.assert_status_ok();
    let recs: Value = response.json();
    assert_eq!(recs["basedOn"]["movieId"], "tt0120737");
    let movies = recs["movies"].as_array().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["imdbID"], "tt0167261");
}
