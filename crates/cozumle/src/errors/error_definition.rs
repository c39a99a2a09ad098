//! Error definitions

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Configuration (CozumleConfig) errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// morphology.cache_capacity < 1
  #[error("morphology.cache_capacity must be at least 1: actual={actual}")]
  InvalidCacheCapacity {
    /// Configured value
    actual: usize,
  },

  /// lexicon.path is set but is not a regular file
  #[error("lexicon.path is not a file: path={path:?}")]
  InvalidLexiconPath {
    /// Offending path
    path: PathBuf,
  },

  /// No lexicon source at all
  #[error("lexicon.include_core is false and no lexicon.path is given")]
  EmptyLexicon,
}

/// Lexicon loading errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum LexiconError {
  /// Lexicon file could not be read
  #[error("failed to read lexicon file: path={path:?}, error={source}")]
  Io {
    /// File path
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// A line could not be parsed
  #[error("malformed lexicon line {line_number}: {reason}: {line}")]
  MalformedLine {
    /// 1-based line number
    line_number: usize,
    /// Line content
    line: String,
    /// Why parsing failed
    reason: String,
  },

  /// Unknown primary or secondary POS token
  #[error("unknown part of speech: {0}")]
  UnknownPos(String),

  /// Unknown root attribute token
  #[error("unknown root attribute: {0}")]
  UnknownAttribute(String),

  /// `Ref:` points to an item that is not loaded
  #[error("reference item not found: item={item_id}, reference={reference_id}")]
  ReferenceNotFound {
    /// Item declaring the reference
    item_id: String,
    /// Missing reference id
    reference_id: String,
  },
}

/// Morphotactics construction and surface generation errors.
///
/// These indicate broken graph or lexicon data, not bad user input.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum MorphotacticsError {
  /// An item routed to special handling has no rule
  #[error("lexicon item is not handled as a special root: {item_id}")]
  SpecialRootNotHandled {
    /// Item id
    item_id: String,
  },

  /// Voicing was requested for a root whose last letter has no voiced form
  #[error("voicing could not be applied to {item_id}")]
  VoicingFailed {
    /// Item id
    item_id: String,
  },

  /// Special root with an unexpected part of speech
  #[error("unexpected part of speech for last vowel drop root: {item_id}")]
  UnexpectedPos {
    /// Item id
    item_id: String,
  },

  /// Vowel placeholder cannot be resolved with the current attributes
  #[error(
    "cannot resolve vowel placeholder '{placeholder}' in template '{template}' with {attributes}"
  )]
  UnresolvedVowel {
    /// `A` or `I`
    placeholder: char,
    /// Suffix template
    template: String,
    /// Attribute set rendered for debugging
    attributes: String,
  },

  /// No morpheme with the given id
  #[error("unknown morpheme id: {0}")]
  UnknownMorpheme(String),

  /// No state with the given id
  #[error("unknown morpheme state id: {0}")]
  UnknownState(String),
}

/// Word generation errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum GenerationError {
  /// No lexicon item with the given id
  #[error("lexicon item not found: {0}")]
  ItemNotFound(String),

  /// Transition morpheme does not match the next morpheme to consume
  #[error("transition morpheme {actual} does not match expected morpheme {expected}")]
  MorphemeMismatch {
    /// Morpheme expected next
    expected: String,
    /// Morpheme of the taken transition
    actual: String,
  },
}

/// Unified error.
/// Public APIs of this crate return this error.
/// Use as `CozumleResult<T>` = `Result<T, CozumleError>`.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum CozumleError {
  /// Configuration error
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// Lexicon error
  #[error(transparent)]
  Lexicon(#[from] LexiconError),

  /// Morphotactics error
  #[error(transparent)]
  Morphotactics(#[from] MorphotacticsError),

  /// Generation error
  #[error(transparent)]
  Generation(#[from] GenerationError),
}

/// Standard result alias of the cozumle crate
pub type CozumleResult<T> = Result<T, CozumleError>;
