use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    db::LikeStore,
    middleware::{make_span_with_request_id, request_id_middleware},
    services::{LanguageModel, MovieProvider},
};

pub mod likes;
pub mod mood;
pub mod movies;
pub mod recommendations;
pub mod vibe;

/// Collaborators shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub movies: Arc<dyn MovieProvider>,
    pub model: Arc<dyn LanguageModel>,
    pub likes: Arc<dyn LikeStore>,
}

impl AppState {
    pub fn new(
        movies: Arc<dyn MovieProvider>,
        model: Arc<dyn LanguageModel>,
        likes: Arc<dyn LikeStore>,
    ) -> Self {
        Self {
            movies,
            model,
            likes,
        }
    }
}

/// Creates the application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

/// API routes under /api
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/mood", post(mood::suggest))
        .route("/vibe", post(vibe::analyze))
        .route("/movies/search", get(movies::search))
        .route("/movies/:id", get(movies::details))
        .route("/likes", post(likes::like_movie).get(likes::list_likes))
        .route("/recommendations", get(recommendations::recommend))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
