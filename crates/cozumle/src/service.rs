// crates/cozumle/src/service.rs

//! CozumleService: the facade of the cozumle crate.
//!
//! - lexicon and morphotactics graph (built once)
//! - rule-based analyzer, with the unidentified token analyzer as fallback
//! - word generator and informal converter
//! - surface formatter
//!
//! Callers such as the HTTP API or the tantivy tokenizer only need this struct.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::alphabet;
use crate::analysis::{
  CaseType, RuleBasedAnalyzer, SingleAnalysis, SurfaceFormatter, UnidentifiedTokenAnalyzer,
  WordAnalysis,
};
use crate::cache::LruCache;
use crate::config::CozumleConfig;
use crate::errors::{CozumleResult, LexiconError};
use crate::generator::{GenerationResult, InformalAnalysisConverter, WordGenerator};
use crate::lexicon::{self, PrimaryPos, RootLexicon};
use crate::morphotactics::TurkishMorphotactics;

/// Facade of the cozumle crate.
///
/// Shareable across threads. The analysis cache sits behind a mutex, the stem index behind
/// its own lock.
pub struct CozumleService {
  config: CozumleConfig,
  lexicon: Arc<RootLexicon>,
  morphotactics: Arc<TurkishMorphotactics>,
  analyzer: Arc<RuleBasedAnalyzer>,
  unidentified: Option<UnidentifiedTokenAnalyzer>,
  generator: Arc<WordGenerator>,
  informal_converter: InformalAnalysisConverter,
  formatter: SurfaceFormatter,
  cache: Mutex<LruCache<String, WordAnalysis>>,
}

impl CozumleService {
  /// Loads the lexicons named by `config` and builds everything.
  ///
  /// # Processing flow
  /// 1. Validate the configuration
  /// 2. Load the core lexicon and/or the extra lexicon file
  /// 3. Build the morphotactics graph and the stem index
  ///
  /// # Errors
  /// - invalid configuration
  /// - unreadable or malformed lexicon
  /// - graph construction failure
  pub fn new(config: CozumleConfig) -> CozumleResult<Self> {
    config.validate()?;
    let lexicon = load_lexicon(&config)?;
    Self::with_lexicon(lexicon, config)
  }

  /// Builds the service over an already loaded lexicon. `config.lexicon` is ignored.
  pub fn with_lexicon(lexicon: RootLexicon, config: CozumleConfig) -> CozumleResult<Self> {
    let lexicon = Arc::new(lexicon);
    let morphotactics = Arc::new(if config.morphology.informal {
      TurkishMorphotactics::informal(Arc::clone(&lexicon))?
    } else {
      TurkishMorphotactics::new(Arc::clone(&lexicon))?
    });
    let analyzer = Arc::new(if config.morphology.ignore_diacritics {
      RuleBasedAnalyzer::ignoring_diacritics(Arc::clone(&morphotactics))
    } else {
      RuleBasedAnalyzer::new(Arc::clone(&morphotactics))
    });
    let unidentified = config
      .morphology
      .use_unidentified_token_analyzer
      .then(|| UnidentifiedTokenAnalyzer::new(Arc::clone(&analyzer)));
    let generator = Arc::new(WordGenerator::new(Arc::clone(&morphotactics)));
    let informal_converter = InformalAnalysisConverter::new(Arc::clone(&generator));
    let cache = Mutex::new(LruCache::new(config.cache_capacity()));

    let graph = morphotactics.graph();
    info!(
      lexicon_items = lexicon.len(),
      states = graph.state_count(),
      transitions = graph.transition_count(),
      stem_transitions = morphotactics.stem_transitions().len(),
      informal = config.morphology.informal,
      ignore_diacritics = config.morphology.ignore_diacritics,
      "CozumleService initialized"
    );

    Ok(Self {
      config,
      lexicon,
      morphotactics,
      analyzer,
      unidentified,
      generator,
      informal_converter,
      formatter: SurfaceFormatter::new(),
      cache,
    })
  }

  /// Service over the core lexicon with default settings.
  pub fn with_defaults() -> CozumleResult<Self> {
    Self::new(CozumleConfig::default())
  }

  // ===== Analysis =====

  /// Analyzes one word. Results are cached by the raw input.
  pub fn analyze(&self, word: &str) -> CozumleResult<WordAnalysis> {
    if let Some(hit) = self.cache.lock().get(&word.to_string()) {
      return Ok(hit);
    }
    let result = self.analyze_without_cache(word)?;
    self.cache.lock().put(word.to_string(), result.clone());
    Ok(result)
  }

  /// Analyzes one word, bypassing the cache.
  ///
  /// Nothing found is an empty [`WordAnalysis`], not an error.
  pub fn analyze_without_cache(&self, word: &str) -> CozumleResult<WordAnalysis> {
    let normalized = normalize_for_analysis(word);
    if normalized.is_empty() {
      return Ok(WordAnalysis::empty(word));
    }

    let mut analyses = if alphabet::contains_apostrophe(&normalized) {
      self.analyze_with_apostrophe(&normalized)?
    } else {
      self.analyzer.analyze(&normalized)?
    };

    if analyses.is_empty()
      && let Some(unidentified) = &self.unidentified
    {
      analyses = unidentified.analyze(word)?;
    }
    if analyses.len() == 1 && analyses[0].is_unknown() {
      analyses.clear();
    }

    debug!(word, normalized = %normalized, analyses = analyses.len(), "Word analyzed");
    Ok(WordAnalysis::new(word, normalized, analyses))
  }

  /// Splits `text` into tokens and analyzes each of them.
  pub fn analyze_sentence(&self, text: &str) -> CozumleResult<Vec<WordAnalysis>> {
    tokenize(text).iter().map(|token| self.analyze(token)).collect()
  }

  /// `Ankara'da` is analyzed as `ankarada`, keeping noun readings whose stem is the part
  /// before the apostrophe or that carry `P3sg`.
  fn analyze_with_apostrophe(&self, word: &str) -> CozumleResult<Vec<SingleAnalysis>> {
    let Some(index) = word.find('\'') else {
      return Ok(Vec::new());
    };
    if index == 0 || index + 1 == word.len() {
      return Ok(Vec::new());
    }
    let before = &word[..index];
    let without_quote: String = word.chars().filter(|c| *c != '\'').collect();
    let p3sg = self.morphotactics.morphemes().p3sg;
    Ok(
      self
        .analyzer
        .analyze(&without_quote)?
        .into_iter()
        .filter(|a| {
          a.item().primary_pos == PrimaryPos::Noun
            && (a.contains_morpheme(p3sg) || a.stem() == before)
        })
        .collect(),
    )
  }

  // ===== Generation =====

  /// Generates words for the lexicon item `item_id` (`kitap_Noun`) and morpheme ids
  /// (`["A3pl", "P1sg"]`).
  ///
  /// # Errors
  /// - `GenerationError::ItemNotFound` for an unknown item
  /// - `MorphotacticsError::UnknownMorpheme` for an unknown morpheme id
  pub fn generate<S: AsRef<str>>(
    &self,
    item_id: &str,
    morpheme_ids: &[S],
  ) -> CozumleResult<Vec<GenerationResult>> {
    self.generator.generate_for_id(item_id, morpheme_ids)
  }

  /// Formal word for an informal analysis. See [`InformalAnalysisConverter::convert`].
  pub fn convert_informal(
    &self,
    input: &str,
    analysis: &SingleAnalysis,
  ) -> CozumleResult<Option<GenerationResult>> {
    self.informal_converter.convert(input, analysis)
  }

  /// Surface text of `analysis` in the requested casing.
  pub fn format_surface(&self, analysis: &SingleAnalysis, case: CaseType) -> String {
    self.formatter.format_to_case(analysis, case, None)
  }

  // ===== Accessors =====

  /// Configuration the service was built with
  pub fn config(&self) -> &CozumleConfig {
    &self.config
  }

  /// Loaded lexicon
  pub fn lexicon(&self) -> &Arc<RootLexicon> {
    &self.lexicon
  }

  /// Morphotactics graph and stem index
  pub fn morphotactics(&self) -> &Arc<TurkishMorphotactics> {
    &self.morphotactics
  }

  /// Rule-based analyzer
  pub fn analyzer(&self) -> &Arc<RuleBasedAnalyzer> {
    &self.analyzer
  }

  /// Word generator
  pub fn generator(&self) -> &Arc<WordGenerator> {
    &self.generator
  }

  /// Surface formatter
  pub fn formatter(&self) -> &SurfaceFormatter {
    &self.formatter
  }

  /// Drops all cached analyses.
  pub fn invalidate_cache(&self) {
    self.cache.lock().clear();
  }

  /// (hits, misses) of the analysis cache
  pub fn cache_stats(&self) -> (u64, u64) {
    self.cache.lock().stats()
  }
}

fn load_lexicon(config: &CozumleConfig) -> Result<RootLexicon, LexiconError> {
  let mut lexicon =
    if config.lexicon.include_core { lexicon::load_core_lexicon()? } else { RootLexicon::new() };
  if let Some(path) = config.lexicon_path() {
    let added = lexicon::load_file_into(&mut lexicon, path)?;
    info!(path = %path.display(), items = added, "Extra lexicon loaded");
  }
  Ok(lexicon)
}

/// Lowercases with Turkish rules, folds circumflexes, unifies apostrophes and removes dots
/// unless nothing else is left (`.` stays `.`).
pub fn normalize_for_analysis(word: &str) -> String {
  let lower = alphabet::to_lowercase(word);
  let folded = alphabet::normalize_circumflex(&lower);
  let no_dot: String = folded.chars().filter(|c| *c != '.').collect();
  let s = if no_dot.is_empty() { folded.into_owned() } else { no_dot };
  alphabet::normalize_apostrophe(&s).into_owned()
}

const LEADING_PUNCTUATION: &[char] = &['"', '(', '['];
const TRAILING_PUNCTUATION: &[char] = &['"', ')', ']', ',', ';', ':', '!', '?'];

/// Splits text on whitespace and peels punctuation off word edges.
///
/// A trailing dot stays on the word when the word is not the last one and looks like an
/// ordinal (`15.`), a Roman numeral (`XIV.`) or an abbreviation (`Dr.`).
pub fn tokenize(text: &str) -> Vec<String> {
  let text: String = text
    .chars()
    .map(|c| match c {
      '“' | '”' | '„' | '«' | '»' => '"',
      '‘' | '’' | '`' => '\'',
      '–' | '—' | '‐' => '-',
      _ => c,
    })
    .collect();
  let chunks: Vec<&str> = text.split_whitespace().collect();
  let mut tokens = Vec::new();
  for (i, chunk) in chunks.iter().enumerate() {
    let is_last = i + 1 == chunks.len();
    let mut word = *chunk;

    while let Some(c) = word.chars().next()
      && LEADING_PUNCTUATION.contains(&c)
      && word.len() > c.len_utf8()
    {
      tokens.push(c.to_string());
      word = &word[c.len_utf8()..];
    }

    let mut trailing = Vec::new();
    loop {
      let Some(c) = word.chars().last() else { break };
      if word.chars().count() == 1 {
        break;
      }
      if TRAILING_PUNCTUATION.contains(&c) {
        trailing.push(c.to_string());
        word = &word[..word.len() - c.len_utf8()];
        continue;
      }
      if word.ends_with("...") && word.len() > 3 {
        trailing.push("...".to_string());
        word = &word[..word.len() - 3];
        continue;
      }
      if c == '.' && (is_last || !keeps_dot(word)) {
        trailing.push(".".to_string());
        word = &word[..word.len() - 1];
        continue;
      }
      break;
    }

    if !word.is_empty() {
      tokens.push(word.to_string());
    }
    tokens.extend(trailing.into_iter().rev());
  }
  tokens
}

fn keeps_dot(word: &str) -> bool {
  use crate::analysis::TokenKind;
  let body = &word[..word.len() - 1];
  body.chars().all(|c| c.is_ascii_digit())
    || matches!(TokenKind::classify(word), TokenKind::RomanNumeral | TokenKind::Abbreviation)
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::errors::{CozumleError, GenerationError};
  use crate::lexicon::load_text;

  fn service(lines: &str) -> CozumleService {
    CozumleService::with_lexicon(load_text(lines).unwrap(), CozumleConfig::default()).unwrap()
  }

  #[test]
  fn normalization() {
    assert_eq!(normalize_for_analysis("KİTAPLAR"), "kitaplar");
    assert_eq!(normalize_for_analysis("Hâlâ"), "hala");
    assert_eq!(normalize_for_analysis("Ankara’da"), "ankara'da");
    assert_eq!(normalize_for_analysis("T.B.M.M."), "tbmm");
    assert_eq!(normalize_for_analysis("."), ".");
  }

  #[test]
  fn tokenization() {
    assert_eq!(tokenize("Ali eve geldi."), vec!["Ali", "eve", "geldi", "."]);
    assert_eq!(tokenize("(ev, kalem)"), vec!["(", "ev", ",", "kalem", ")"]);
    assert_eq!(tokenize("Dr. Ali 15. sırada"), vec!["Dr.", "Ali", "15.", "sırada"]);
    assert_eq!(tokenize("“Evet” dedi..."), vec!["\"", "Evet", "\"", "dedi", "..."]);
    assert!(tokenize("   ").is_empty());
  }

  #[test]
  fn analyzes_and_caches() {
    let service = service("kitap");
    let first = service.analyze("kitaplar").unwrap();
    assert!(first.is_correct());
    assert_eq!(first.normalized_input(), "kitaplar");
    let second = service.analyze("kitaplar").unwrap();
    assert_eq!(first, second);
    assert_eq!(service.cache_stats(), (1, 1));
  }

  #[test]
  fn apostrophe_words_keep_matching_stems() {
    let service = service("Ankara\nankara [P:Noun]");
    let result = service.analyze("Ankara'da").unwrap();
    assert!(!result.is_empty());
    for analysis in &result {
      assert_eq!(analysis.item().primary_pos, PrimaryPos::Noun);
      assert_eq!(analysis.stem(), "ankara");
    }
  }

  #[test]
  fn unknown_words_give_empty_result() {
    let service = service("kalem");
    let result = service.analyze("zzxqq").unwrap();
    assert!(result.is_empty());
    assert!(!result.is_correct());
  }

  #[test]
  fn unidentified_analyzer_can_be_disabled() {
    let mut config = CozumleConfig::default();
    config.morphology.use_unidentified_token_analyzer = false;
    let service = CozumleService::with_lexicon(load_text("kalem").unwrap(), config).unwrap();
    assert!(service.analyze("Zonguldak").unwrap().is_empty());
  }

  #[test]
  fn generation_through_the_facade() {
    let service = service("kitap");
    let results = service.generate("kitap_Noun", &["Noun", "A3pl", "P1sg", "Nom"]).unwrap();
    assert_eq!(results[0].surface, "kitaplarım");

    match service.generate("yok_Noun", &["A3sg"]) {
      Err(CozumleError::Generation(GenerationError::ItemNotFound(_))) => {}
      other => panic!("expected ItemNotFound, got {other:?}"),
    }
  }

  #[test]
  fn formats_surfaces() {
    let service = service("Ankara");
    let analysis = service.analyze("ankaraya").unwrap().into_analyses().remove(0);
    assert_eq!(service.format_surface(&analysis, CaseType::Default), "Ankara'ya");
    assert_eq!(service.format_surface(&analysis, CaseType::Upper), "ANKARA'YA");
  }

  #[test]
  fn informal_forms_are_converted() {
    let mut config = CozumleConfig::default();
    config.morphology.informal = true;
    let service = CozumleService::with_lexicon(load_text("gelmek").unwrap(), config).unwrap();
    let result = service.analyze("geliyom").unwrap();
    let converted: Vec<String> = result
      .iter()
      .filter_map(|a| service.convert_informal("geliyom", a).unwrap())
      .map(|r| r.surface)
      .collect();
    assert!(converted.contains(&"geliyorum".to_string()), "{converted:?}");
  }
}
