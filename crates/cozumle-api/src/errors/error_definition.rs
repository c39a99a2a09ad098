//! API error definitions

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use cozumle::errors::{CozumleError, GenerationError, MorphotacticsError};

/// Error kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// Text is empty or whitespace only
  EmptyText,
  /// More words than the configured limit
  TooManyWords,
  /// Text is too long
  TextTooLong,
  /// Lexicon item does not exist
  ItemNotFound,
  /// Morpheme id does not exist
  UnknownMorpheme,
  /// Other invalid input
  InvalidInput,
  /// Internal error
  Internal,
  /// Configuration error
  Config,
}

impl ApiErrorKind {
  /// Error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::EmptyText => "EMPTY_TEXT",
      Self::TooManyWords => "TOO_MANY_WORDS",
      Self::TextTooLong => "TEXT_TOO_LONG",
      Self::ItemNotFound => "ITEM_NOT_FOUND",
      Self::UnknownMorpheme => "UNKNOWN_MORPHEME",
      Self::InvalidInput => "INVALID_INPUT",
      Self::Internal => "INTERNAL_ERROR",
      Self::Config => "CONFIG_ERROR",
    }
  }

  /// HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::EmptyText
      | Self::TooManyWords
      | Self::TextTooLong
      | Self::UnknownMorpheme
      | Self::InvalidInput => StatusCode::BAD_REQUEST,
      Self::ItemNotFound => StatusCode::NOT_FOUND,
      Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// API error
#[derive(Debug, Error)]
pub enum ApiError {
  /// Text is empty
  #[error("text is empty")]
  EmptyText,

  /// Too many words
  #[error("too many words: {0} (max: {1})")]
  TooManyWords(usize, usize),

  /// Text is too long
  #[error("text is too long: {0} bytes (max: {1} bytes)")]
  TextTooLong(usize, usize),

  /// Unknown lexicon item
  #[error("lexicon item not found: {0}")]
  ItemNotFound(String),

  /// Unknown morpheme id
  #[error("unknown morpheme: {0}")]
  UnknownMorpheme(String),

  /// Invalid input
  #[error("invalid input: {0}")]
  InvalidInput(String),

  /// Internal error
  #[error("internal error: {0}")]
  Internal(String),

  /// Configuration error
  #[error("configuration error: {0}")]
  Config(String),
}

impl ApiError {
  /// Error kind
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::EmptyText => ApiErrorKind::EmptyText,
      Self::TooManyWords(_, _) => ApiErrorKind::TooManyWords,
      Self::TextTooLong(_, _) => ApiErrorKind::TextTooLong,
      Self::ItemNotFound(_) => ApiErrorKind::ItemNotFound,
      Self::UnknownMorpheme(_) => ApiErrorKind::UnknownMorpheme,
      Self::InvalidInput(_) => ApiErrorKind::InvalidInput,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// Error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// Creates a too-many-words error
  #[must_use]
  pub fn too_many_words(actual: usize, max: usize) -> Self {
    Self::TooManyWords(actual, max)
  }

  /// Creates a text length error
  #[must_use]
  pub fn text_too_long(actual: usize, max: usize) -> Self {
    Self::TextTooLong(actual, max)
  }

  /// Creates an invalid input error
  #[must_use]
  pub fn invalid_input(message: impl Into<String>) -> Self {
    Self::InvalidInput(message.into())
  }

  /// Creates an internal error
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// JSON structure of error responses
#[derive(Serialize)]
struct ErrorResponse {
  error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
  code: &'static str,
  message: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = ErrorResponse { error: ErrorBody { code: self.code(), message: self.to_string() } };

    (status, Json(body)).into_response()
  }
}

/// Maps domain errors to API errors.
impl From<CozumleError> for ApiError {
  fn from(err: CozumleError) -> Self {
    match err {
      CozumleError::Generation(GenerationError::ItemNotFound(id)) => ApiError::ItemNotFound(id),
      CozumleError::Morphotactics(MorphotacticsError::UnknownMorpheme(id)) => {
        ApiError::UnknownMorpheme(id)
      }
      CozumleError::Config(_) | CozumleError::Lexicon(_) => ApiError::config(err.to_string()),
      // #[non_exhaustive], covers variants added later
      _ => ApiError::internal(err.to_string()),
    }
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
  use super::*;
  use cozumle::errors::ConfigError;

  #[test]
  fn request_errors_are_bad_requests() {
    let err = ApiError::EmptyText;
    assert_eq!(err.code(), "EMPTY_TEXT");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);

    let err = ApiError::too_many_words(12, 10);
    assert_eq!(err.kind(), ApiErrorKind::TooManyWords);
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert!(err.to_string().contains("12"));
    assert!(err.to_string().contains("10"));
  }

  #[test]
  fn internal_and_config_are_server_errors() {
    assert_eq!(ApiError::internal("x").status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(ApiError::config("x").code(), "CONFIG_ERROR");
  }

  #[test]
  fn from_item_not_found() {
    let err: ApiError =
      CozumleError::from(GenerationError::ItemNotFound("yok_Noun".to_string())).into();
    assert_eq!(err.kind(), ApiErrorKind::ItemNotFound);
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert!(err.to_string().contains("yok_Noun"));
  }

  #[test]
  fn from_unknown_morpheme() {
    let err: ApiError =
      CozumleError::from(MorphotacticsError::UnknownMorpheme("Nope".to_string())).into();
    assert_eq!(err.code(), "UNKNOWN_MORPHEME");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
  }

  #[test]
  fn from_config_error() {
    let err: ApiError = CozumleError::from(ConfigError::EmptyLexicon).into();
    assert_eq!(err.kind(), ApiErrorKind::Config);
  }
}
