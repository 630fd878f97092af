use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::NOT_AVAILABLE,
    routes::AppState,
    services::vibe,
};

pub const PLOT_REQUIRED: &str = "Plot summary is required.";
const VIBE_FAILED: &str = "Failed to generate vibe from AI.";

#[derive(Debug, Deserialize)]
pub struct VibeRequest {
    #[serde(default)]
    pub plot: Option<String>,
}

/// Handler for the plot vibe endpoint
pub async fn analyze(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<VibeRequest>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let plot = payload
        .ok()
        .and_then(|Json(request)| request.plot)
        .filter(|plot| !plot.trim().is_empty() && plot.trim() != NOT_AVAILABLE)
        .ok_or_else(|| AppError::InvalidInput(PLOT_REQUIRED.to_string()))?;

    tracing::info!(request_id = %request_id, plot_len = plot.len(), "Processing vibe analysis");

    let vibe = vibe::analyze_plot(state.model.as_ref(), &plot)
        .await
        .map_err(|e| e.masked(VIBE_FAILED))?;

    Ok(Json(vibe))
}
