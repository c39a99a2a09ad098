//! API integration tests
//!
//! Verifies the HTTP endpoints through the Router.
//! Uses a stub service, so no lexicon is loaded and the tests stay fast.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode},
};
use tower::ServiceExt;

use cozumle_api::{
  api::{AppState, create_router},
  config::{Config, MAX_TEXT_LENGTH},
  errors::{ApiError, Result as ApiResult},
  models::{
    AnalysisDto, AnalyzeRequest, AnalyzeResponse, GenerateRequest, GenerateResponse,
    GenerationDto, MorphemeDto, WordDto,
  },
  service::CozumleApiService,
};

/// Lightweight stub service for integration tests
///
/// - Blank text: `EMPTY_TEXT`
/// - More than three words: `TOO_MANY_WORDS`
/// - Otherwise: one fixed `ev` analysis per word
/// - Generation knows only `ev_Noun` and the morphemes `A3sg`, `A3pl`, `Loc`
struct StubCozumleApiService;

impl CozumleApiService for StubCozumleApiService {
  fn analyze(&self, request: AnalyzeRequest) -> ApiResult<AnalyzeResponse> {
    if request.text.len() > MAX_TEXT_LENGTH {
      return Err(ApiError::text_too_long(request.text.len(), MAX_TEXT_LENGTH));
    }
    let words: Vec<&str> = request.text.split_whitespace().collect();
    if words.is_empty() {
      return Err(ApiError::EmptyText);
    }
    if words.len() > 3 {
      return Err(ApiError::too_many_words(words.len(), 3));
    }

    let words = words
      .into_iter()
      .map(|word| WordDto {
        input: word.to_string(),
        normalized: word.to_lowercase(),
        analyses: vec![AnalysisDto {
          lemma: "ev".to_string(),
          pos: "Noun".to_string(),
          secondary_pos: None,
          stem: "ev".to_string(),
          ending: String::new(),
          morphemes: vec![MorphemeDto { id: "Noun".to_string(), surface: "ev".to_string() }],
          formatted: "[ev:Noun] ev:Noun+A3sg".to_string(),
          informal: false,
        }],
      })
      .collect();
    Ok(AnalyzeResponse { words })
  }

  fn generate(&self, request: GenerateRequest) -> ApiResult<GenerateResponse> {
    if request.item_id != "ev_Noun" {
      return Err(ApiError::ItemNotFound(request.item_id));
    }
    if let Some(unknown) =
      request.morphemes.iter().find(|m| !matches!(m.as_str(), "A3sg" | "A3pl" | "Loc"))
    {
      return Err(ApiError::UnknownMorpheme(unknown.clone()));
    }
    Ok(GenerateResponse {
      results: vec![GenerationDto {
        surface: "evlerde".to_string(),
        analysis: "[ev:Noun] ev:Noun+ler:A3pl+de:Loc".to_string(),
      }],
    })
  }
}

/// Builds the Router used by the tests
fn test_app() -> Router {
  let config = Config { host: "127.0.0.1".to_string(), port: 0, ..Config::default() };

  let service: Arc<dyn CozumleApiService> = Arc::new(StubCozumleApiService);
  create_router(AppState::new(config, service))
}

fn post_json(uri: &str, payload: &serde_json::Value) -> Request<Body> {
  Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(payload.to_string()))
    .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
  let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  serde_json::from_slice(&body_bytes).expect("body should be valid json")
}

// ============================================================================
// Success cases
// ============================================================================

#[tokio::test]
async fn health_check_returns_ok() {
  let app = test_app();

  let response = app
    .oneshot(Request::builder().method("GET").uri("/health").body(Body::empty()).unwrap())
    .await
    .expect("request should succeed");

  assert_eq!(response.status(), StatusCode::OK);
  assert_eq!(body_json(response).await, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn post_analyze_success_returns_200() {
  let app = test_app();

  let response = app
    .oneshot(post_json("/analyze", &serde_json::json!({ "text": "Evler evde" })))
    .await
    .expect("request should succeed");

  assert_eq!(response.status(), StatusCode::OK);

  let json = body_json(response).await;
  let words = json["words"].as_array().expect("words array");
  assert_eq!(words.len(), 2);
  assert_eq!(words[0]["input"], "Evler");
  assert_eq!(words[0]["normalized"], "evler");
  assert_eq!(words[0]["analyses"][0]["lemma"], "ev");
  assert_eq!(words[0]["analyses"][0]["morphemes"][0]["id"], "Noun");
}

#[tokio::test]
async fn post_generate_success_returns_200() {
  let app = test_app();

  let payload = serde_json::json!({ "item_id": "ev_Noun", "morphemes": ["A3pl", "Loc"] });
  let response =
    app.oneshot(post_json("/generate", &payload)).await.expect("request should succeed");

  assert_eq!(response.status(), StatusCode::OK);

  let json = body_json(response).await;
  assert_eq!(json["results"][0]["surface"], "evlerde");
}

// ============================================================================
// Service errors
// ============================================================================

#[tokio::test]
async fn post_analyze_empty_text_returns_400() {
  let app = test_app();

  let response = app
    .oneshot(post_json("/analyze", &serde_json::json!({ "text": "   " })))
    .await
    .expect("request should succeed");

  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  assert_eq!(body_json(response).await["error"]["code"], "EMPTY_TEXT");
}

#[tokio::test]
async fn post_analyze_too_many_words_returns_400() {
  let app = test_app();

  let response = app
    .oneshot(post_json("/analyze", &serde_json::json!({ "text": "ev ev ev ev" })))
    .await
    .expect("request should succeed");

  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  let json = body_json(response).await;
  assert_eq!(json["error"]["code"], "TOO_MANY_WORDS");
  assert!(json["error"]["message"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn post_generate_unknown_item_returns_404() {
  let app = test_app();

  let payload = serde_json::json!({ "item_id": "yok_Noun", "morphemes": [] });
  let response =
    app.oneshot(post_json("/generate", &payload)).await.expect("request should succeed");

  assert_eq!(response.status(), StatusCode::NOT_FOUND);
  assert_eq!(body_json(response).await["error"]["code"], "ITEM_NOT_FOUND");
}

#[tokio::test]
async fn post_generate_unknown_morpheme_returns_400() {
  let app = test_app();

  let payload = serde_json::json!({ "item_id": "ev_Noun", "morphemes": ["A3pl", "Xyz"] });
  let response =
    app.oneshot(post_json("/generate", &payload)).await.expect("request should succeed");

  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  assert_eq!(body_json(response).await["error"]["code"], "UNKNOWN_MORPHEME");
}

#[tokio::test]
async fn post_analyze_too_long_text_returns_413() {
  let app = test_app();

  // Axum's default body limit (2MB) applies before the service check
  let long_text = "a".repeat(MAX_TEXT_LENGTH * 3);
  let response = app
    .oneshot(post_json("/analyze", &serde_json::json!({ "text": long_text })))
    .await
    .expect("request should succeed");

  assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

// ============================================================================
// JSON parse errors (Axum side)
// ============================================================================

#[tokio::test]
async fn post_analyze_invalid_json_returns_client_error() {
  let app = test_app();

  let response = app
    .oneshot(
      Request::builder()
        .method("POST")
        .uri("/analyze")
        .header("content-type", "application/json")
        .body(Body::from("{ invalid json"))
        .unwrap(),
    )
    .await
    .expect("request should succeed");

  assert!(response.status().is_client_error(), "expected 4xx, got: {}", response.status());
}

#[tokio::test]
async fn post_generate_missing_field_returns_client_error() {
  let app = test_app();

  let response = app
    .oneshot(post_json("/generate", &serde_json::json!({ "item_id": "ev_Noun" })))
    .await
    .expect("request should succeed");

  assert!(response.status().is_client_error(), "expected 4xx, got: {}", response.status());
}

#[tokio::test]
async fn unknown_route_returns_404() {
  let app = test_app();

  let response = app
    .oneshot(Request::builder().method("GET").uri("/parse").body(Body::empty()).unwrap())
    .await
    .expect("request should succeed");

  assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
