//! Tokenizer for Tantivy that indexes Turkish lemmas

use std::sync::Arc;

use rust_stemmers::{Algorithm, Stemmer};
use tantivy::tokenizer::{TextAnalyzer, Token, TokenStream, Tokenizer, TokenizerManager};
use tracing::debug;

use crate::alphabet;
use crate::analysis::SingleAnalysis;
use crate::lexicon::PrimaryPos;
use crate::service::CozumleService;

/// Name under which [`register_lemma_tokenizer`] registers the tokenizer
pub const LEMMA_TOKENIZER_NAME: &str = "tr_lemma";

/// Turkish tokenizer for Tantivy
///
/// - Splits on everything that is not a letter, digit or inner apostrophe
/// - Emits the normalized lemma of the first analysis (`kitaplarımda` → `kitap`)
/// - Words without analysis fall back to the Snowball Turkish stemmer
/// - `Clone + Send + Sync`, the service is shared
#[derive(Clone)]
pub struct LemmaTokenizer {
  service: Arc<CozumleService>,
  stemmer: Arc<Stemmer>,
}

/// Implementation of Tantivy's TokenStream trait
///
/// - No lifetime parameters (fully owned type)
/// - Consumes token sequence sequentially with `IntoIter`
pub struct LemmaTokenStream {
  /// Iterator of (lemma, start byte, end byte)
  tokens: std::vec::IntoIter<(String, usize, usize)>,

  /// Tantivy's Token (overwritten and reused every time)
  token: Token,
}

impl LemmaTokenizer {
  /// Tokenizer analyzing through `service`.
  pub fn new(service: Arc<CozumleService>) -> Self {
    Self { service, stemmer: Arc::new(Stemmer::create(Algorithm::Turkish)) }
  }

  fn index_term(&self, word: &str) -> Option<String> {
    let analysis = match self.service.analyze(word) {
      Ok(analysis) => analysis,
      Err(e) => {
        debug!(word, error = %e, "Analysis failed, stemming instead");
        return Some(self.stem(word));
      }
    };
    match analysis.analyses().first() {
      Some(first) if !should_index(first) => None,
      Some(first) => Some(alphabet::to_lowercase(first.item().normalized_lemma())),
      None => Some(self.stem(word)),
    }
  }

  fn stem(&self, word: &str) -> String {
    let lower = alphabet::to_lowercase(word);
    self.stemmer.stem(&lower).into_owned()
  }
}

impl Tokenizer for LemmaTokenizer {
  type TokenStream<'a> = LemmaTokenStream;

  fn token_stream<'a>(&'a mut self, input_text: &'a str) -> Self::TokenStream<'a> {
    debug!(input_text = %input_text, "Start lemma tokenization");

    let words = split_words(input_text);
    let total = words.len();
    let mut tokens = Vec::with_capacity(total);
    for (start, end) in words {
      let word = &input_text[start..end];
      let term = self.index_term(word);
      debug!(word, ?term, start, end, "Token");
      if let Some(term) = term {
        // byte offsets, as tantivy expects
        tokens.push((term, start, end));
      }
    }

    debug!(total_tokens = total, indexed_tokens = tokens.len(), "Lemma tokenization completed");

    LemmaTokenStream { tokens: tokens.into_iter(), token: Token::default() }
  }
}

/// Part-of-speech filtering
///
/// Drops punctuation, conjunctions, postpositions, interjections and question particles.
pub fn should_index(analysis: &SingleAnalysis) -> bool {
  !matches!(
    analysis.item().primary_pos,
    PrimaryPos::Punctuation
      | PrimaryPos::Conjunction
      | PrimaryPos::PostPositive
      | PrimaryPos::Interjection
      | PrimaryPos::Question
  )
}

/// Registers a [`LemmaTokenizer`] over `service` as [`LEMMA_TOKENIZER_NAME`].
pub fn register_lemma_tokenizer(manager: &TokenizerManager, service: Arc<CozumleService>) {
  manager.register(LEMMA_TOKENIZER_NAME, TextAnalyzer::from(LemmaTokenizer::new(service)));
}

/// Byte ranges of words. Apostrophes count only between two word characters.
fn split_words(text: &str) -> Vec<(usize, usize)> {
  let is_word_char = |c: char| c.is_alphanumeric();
  let mut words = Vec::new();
  let mut start: Option<usize> = None;
  let mut chars = text.char_indices().peekable();
  while let Some((i, c)) = chars.next() {
    let inner_apostrophe = (c == '\'' || c == '’')
      && start.is_some()
      && chars.peek().is_some_and(|(_, next)| is_word_char(*next));
    if is_word_char(c) || inner_apostrophe {
      start.get_or_insert(i);
    } else if let Some(s) = start.take() {
      words.push((s, i));
    }
  }
  if let Some(s) = start {
    words.push((s, text.len()));
  }
  words
}

impl TokenStream for LemmaTokenStream {
  fn advance(&mut self) -> bool {
    if let Some((term, start, end)) = self.tokens.next() {
      self.token.text = term;
      self.token.offset_from = start;
      self.token.offset_to = end;

      // Token::default() starts at usize::MAX, wrapping_add makes the first position 0
      self.token.position = self.token.position.wrapping_add(1);
      self.token.position_length = 1;

      true
    } else {
      false
    }
  }

  fn token(&self) -> &Token {
    &self.token
  }

  fn token_mut(&mut self) -> &mut Token {
    &mut self.token
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::CozumleConfig;
  use crate::lexicon::load_core_lexicon;

  fn tokenizer() -> LemmaTokenizer {
    let service =
      CozumleService::with_lexicon(load_core_lexicon().unwrap(), CozumleConfig::default()).unwrap();
    LemmaTokenizer::new(Arc::new(service))
  }

  fn collect(tokenizer: &mut LemmaTokenizer, text: &str) -> Vec<(String, usize, usize)> {
    let mut stream = tokenizer.token_stream(text);
    let mut out = Vec::new();
    while stream.advance() {
      let t = stream.token();
      out.push((t.text.clone(), t.offset_from, t.offset_to));
    }
    out
  }

  #[test]
  fn splits_on_non_word_characters() {
    assert_eq!(split_words("ev, kalem"), vec![(0, 2), (4, 9)]);
    assert_eq!(split_words("Ankara'da 'ev'"), vec![(0, 9), (11, 13)]);
    assert_eq!(split_words("çiçek"), vec![(0, 7)]);
    assert!(split_words(" .. ").is_empty());
  }

  #[test]
  fn emits_lemmas_with_byte_offsets() {
    let mut tokenizer = tokenizer();
    let tokens = collect(&mut tokenizer, "Kitapları evlerde okuyorum");
    let terms: Vec<&str> = tokens.iter().map(|(t, _, _)| t.as_str()).collect();
    assert_eq!(terms, vec!["kitap", "ev", "oku"]);
    assert_eq!((tokens[1].1, tokens[1].2), (11, 18));
  }

  #[test]
  fn function_words_are_dropped() {
    let mut tokenizer = tokenizer();
    let tokens = collect(&mut tokenizer, "kalem ve kitap");
    let terms: Vec<&str> = tokens.iter().map(|(t, _, _)| t.as_str()).collect();
    assert_eq!(terms, vec!["kalem", "kitap"]);
  }

  #[test]
  fn positions_start_at_zero() {
    let mut tokenizer = tokenizer();
    let mut stream = tokenizer.token_stream("ev kalem");
    assert!(stream.advance());
    assert_eq!(stream.token().position, 0);
    assert!(stream.advance());
    assert_eq!(stream.token().position, 1);
    assert!(!stream.advance());
  }

  #[test]
  fn unknown_words_are_stemmed() {
    let mut tokenizer = tokenizer();
    let tokens = collect(&mut tokenizer, "zzxqqlar");
    assert_eq!(tokens.len(), 1);
    assert!(!tokens[0].0.is_empty());
  }
}
