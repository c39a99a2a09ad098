//! Morphology service behind the HTTP handlers

use std::sync::Arc;
use std::time::Instant;

use cozumle::CozumleService;
use cozumle::service::tokenize;
use tracing::debug;

use crate::config::{Config, MAX_TEXT_LENGTH};
use crate::errors::{ApiError, Result};
use crate::models::{
  AnalyzeRequest, AnalyzeResponse, GenerateRequest, GenerateResponse, GenerationDto, WordDto,
};

/// Common interface for the morphology service
///
/// This trait allows swapping the production implementation (`CozumleApiServiceFull`) with
/// test stubs.
pub trait CozumleApiService: Send + Sync {
  /// Analyzes every token of the request text
  ///
  /// # Errors
  /// - Input error (empty text, too many words, text too long)
  /// - Internal error
  fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse>;

  /// Generates words for a lexicon item and morpheme sequence
  ///
  /// # Errors
  /// - Unknown item or morpheme id
  /// - Internal error
  fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse>;
}

/// Morphology service over a shared [`CozumleService`]
#[derive(Clone)]
pub struct CozumleApiServiceFull {
  service: Arc<CozumleService>,
  max_words: usize,
}

impl CozumleApiServiceFull {
  /// Loads the lexicon and builds the morphotactics graph
  ///
  /// # Errors
  /// Returns an error if the lexicon cannot be loaded or the configuration is invalid
  pub fn new(config: &Config) -> Result<Self> {
    let service = CozumleService::new(config.cozumle_config())?;
    Ok(Self::from_service(Arc::new(service), config.max_words))
  }

  /// Wraps an already built service
  #[must_use]
  pub fn from_service(service: Arc<CozumleService>, max_words: usize) -> Self {
    Self { service, max_words }
  }

  /// Checks the request text and returns its tokens
  fn tokens(&self, text: &str) -> Result<Vec<String>> {
    if text.len() > MAX_TEXT_LENGTH {
      return Err(ApiError::text_too_long(text.len(), MAX_TEXT_LENGTH));
    }
    let tokens = tokenize(text);
    if tokens.is_empty() {
      return Err(ApiError::EmptyText);
    }
    if tokens.len() > self.max_words {
      return Err(ApiError::too_many_words(tokens.len(), self.max_words));
    }
    Ok(tokens)
  }
}

impl CozumleApiService for CozumleApiServiceFull {
  fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
    let start = Instant::now();
    let tokens = self.tokens(&request.text)?;

    let mut words = Vec::with_capacity(tokens.len());
    for token in &tokens {
      let analysis = self.service.analyze(token)?;
      words.push(WordDto::from_word_analysis(&analysis));
    }

    debug!(words = words.len(), elapsed_ms = start.elapsed().as_millis() as u64, "Text analyzed");
    Ok(AnalyzeResponse { words })
  }

  fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
    let results = self.service.generate(&request.item_id, &request.morphemes)?;
    debug!(item_id = %request.item_id, results = results.len(), "Words generated");
    Ok(GenerateResponse { results: results.iter().map(GenerationDto::from_result).collect() })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use cozumle::CozumleConfig;
  use cozumle::lexicon::load_text;

  fn service(max_words: usize) -> CozumleApiServiceFull {
    let lexicon = load_text("kitap\nev\nAnkara").unwrap();
    let service = CozumleService::with_lexicon(lexicon, CozumleConfig::default()).unwrap();
    CozumleApiServiceFull::from_service(Arc::new(service), max_words)
  }

  #[test]
  fn analyzes_each_token() {
    let response =
      service(10).analyze(AnalyzeRequest { text: "Kitaplar evde.".to_string() }).unwrap();
    let inputs: Vec<&str> = response.words.iter().map(|w| w.input.as_str()).collect();
    assert_eq!(inputs, vec!["Kitaplar", "evde", "."]);
    assert_eq!(response.words[0].normalized, "kitaplar");
    assert!(response.words[0].analyses.iter().all(|a| a.lemma == "kitap"));
    assert_eq!(response.words[1].analyses[0].ending, "de");
  }

  #[test]
  fn rejects_empty_and_long_requests() {
    let service = service(2);
    let err = service.analyze(AnalyzeRequest { text: "  ".to_string() }).unwrap_err();
    assert_eq!(err.code(), "EMPTY_TEXT");
    let err = service.analyze(AnalyzeRequest { text: "ev ev ev".to_string() }).unwrap_err();
    assert_eq!(err.code(), "TOO_MANY_WORDS");
  }

  #[test]
  fn generates_words() {
    let service = service(10);
    let request = GenerateRequest {
      item_id: "kitap_Noun".to_string(),
      morphemes: vec!["Noun".into(), "A3pl".into(), "P1sg".into(), "Nom".into()],
    };
    let response = service.generate(request).unwrap();
    assert_eq!(response.results[0].surface, "kitaplarım");

    let request = GenerateRequest { item_id: "yok_Noun".to_string(), morphemes: Vec::new() };
    assert_eq!(service.generate(request).unwrap_err().code(), "ITEM_NOT_FOUND");
  }
}
