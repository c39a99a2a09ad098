//! HTTP handler definitions

use axum::{Json, extract::State};
use tracing::{debug, error, info};

use crate::errors::ApiError;
use crate::models::{
  AnalyzeRequest, AnalyzeResponse, GenerateRequest, GenerateResponse, HealthResponse,
};

use super::state::AppState;

/// POST /analyze endpoint
///
/// Analyzes every token of a Turkish text.
///
/// # Request Body
/// ```json
/// { "text": "Kitaplarımı getirdim." }
/// ```
///
/// # Response
/// - 200 OK: analysis succeeded (tokens without analysis have an empty list)
/// - 400 Bad Request: `EMPTY_TEXT`, `TOO_MANY_WORDS`, `TEXT_TOO_LONG`
/// - 500 Internal Server Error: internal error
pub async fn post_analyze(
  State(state): State<AppState>,
  Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
  debug!(text_len = request.text.len(), "Analysis request received");

  // Graph search is CPU-bound, keep it off the async runtime
  let service = state.service.clone();
  let response =
    tokio::task::spawn_blocking(move || service.analyze(request)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking error");
      ApiError::internal("failed to run the analysis")
    })??;

  info!(word_count = response.words.len(), "Analysis completed");

  Ok(Json(response))
}

/// POST /generate endpoint
///
/// # Request Body
/// ```json
/// { "item_id": "kitap_Noun", "morphemes": ["Noun", "A3pl", "P1sg", "Nom"] }
/// ```
///
/// # Response
/// - 200 OK: generated words (possibly none)
/// - 400 Bad Request: `UNKNOWN_MORPHEME`
/// - 404 Not Found: `ITEM_NOT_FOUND`
pub async fn post_generate(
  State(state): State<AppState>,
  Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
  debug!(item_id = %request.item_id, morphemes = ?request.morphemes, "Generation request received");

  let service = state.service.clone();
  let response =
    tokio::task::spawn_blocking(move || service.generate(request)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking error");
      ApiError::internal("failed to run the generation")
    })??;

  info!(result_count = response.results.len(), "Generation completed");

  Ok(Json(response))
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
  Json(HealthResponse { status: "ok" })
}
