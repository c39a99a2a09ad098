// crates/cozumle/src/config.rs

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::ConfigError;

/// Default capacity of the analysis cache
pub const DEFAULT_CACHE_CAPACITY: usize = 250;

/// Top-level configuration for cozumle.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CozumleConfig {
  /// [morphology] section
  #[serde(default)]
  pub morphology: MorphologyConfig,
  /// [lexicon] section
  #[serde(default)]
  pub lexicon: LexiconConfig,
  /// [logging] section
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// [morphology] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MorphologyConfig {
  /// Also accept colloquial verb forms (`geliyom`, `gelcem`)
  #[serde(default)]
  pub informal: bool,
  /// Match `c`/`ç`, `i`/`ı` and the other diacritic pairs as equal
  #[serde(default)]
  pub ignore_diacritics: bool,
  /// Fall back to runtime items for numbers, proper nouns and other unknown tokens
  #[serde(default = "default_true")]
  pub use_unidentified_token_analyzer: bool,
  /// Number of words kept in the analysis cache
  #[serde(default = "default_cache_capacity")]
  pub cache_capacity: usize,
}

impl Default for MorphologyConfig {
  fn default() -> Self {
    Self {
      informal: false,
      ignore_diacritics: false,
      use_unidentified_token_analyzer: true,
      cache_capacity: DEFAULT_CACHE_CAPACITY,
    }
  }
}

/// [lexicon] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LexiconConfig {
  /// Additional lexicon text file, loaded after the core lexicon.
  ///
  /// If omitted in TOML, it becomes `None`.
  #[serde(default)]
  pub path: Option<PathBuf>,
  /// Load the bundled core lexicon
  #[serde(default = "default_true")]
  pub include_core: bool,
}

impl Default for LexiconConfig {
  fn default() -> Self {
    Self { path: None, include_core: true }
  }
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  #[serde(default)]
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  /// error
  Error,
}

impl LogLevel {
  /// Directive string for `tracing_subscriber::EnvFilter`.
  pub fn as_str(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

fn default_true() -> bool {
  true
}

fn default_cache_capacity() -> usize {
  DEFAULT_CACHE_CAPACITY
}

// ===== Accessor Methods =====

impl CozumleConfig {
  /// Returns the configured extra lexicon file.
  ///
  /// `None` if unspecified in TOML.
  pub fn lexicon_path(&self) -> Option<&Path> {
    self.lexicon.path.as_deref()
  }

  /// Returns the analysis cache capacity.
  pub fn cache_capacity(&self) -> usize {
    self.morphology.cache_capacity
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `morphology.cache_capacity` >= 1
  /// - `lexicon.path` is a regular file when given
  /// - at least one lexicon source is enabled
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.morphology.cache_capacity < 1 {
      return Err(ConfigError::InvalidCacheCapacity { actual: self.morphology.cache_capacity });
    }

    if let Some(path) = &self.lexicon.path
      && !path.is_file()
    {
      return Err(ConfigError::InvalidLexiconPath { path: path.clone() });
    }

    if !self.lexicon.include_core && self.lexicon.path.is_none() {
      return Err(ConfigError::EmptyLexicon);
    }

    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  // ─── Deserialization ────────────────────────────────────────────────────

  #[test]
  fn empty_document_gives_defaults() {
    let config: CozumleConfig = serde_json::from_str("{}").unwrap();
    assert!(!config.morphology.informal);
    assert!(config.morphology.use_unidentified_token_analyzer);
    assert_eq!(config.cache_capacity(), DEFAULT_CACHE_CAPACITY);
    assert!(config.lexicon.include_core);
    assert_eq!(config.log_level(), LogLevel::Info);
    assert!(config.validate().is_ok());
  }

  #[test]
  fn sections_are_read() {
    let json = r#"{
      "morphology": {"informal": true, "ignore_diacritics": true, "cache_capacity": 10},
      "lexicon": {"include_core": false, "path": "/tmp/extra.txt"},
      "logging": {"level": "debug"}
    }"#;
    let config: CozumleConfig = serde_json::from_str(json).unwrap();
    assert!(config.morphology.informal);
    assert!(config.morphology.ignore_diacritics);
    assert_eq!(config.cache_capacity(), 10);
    assert_eq!(config.lexicon_path(), Some(Path::new("/tmp/extra.txt")));
    assert_eq!(config.log_level(), LogLevel::Debug);
    assert_eq!(config.log_level().as_str(), "debug");
  }

  // ─── validate() ─────────────────────────────────────────────────────────

  #[test]
  fn validate_rejects_zero_cache_capacity() {
    let mut config = CozumleConfig::default();
    config.morphology.cache_capacity = 0;

    match config.validate().unwrap_err() {
      ConfigError::InvalidCacheCapacity { actual } => assert_eq!(actual, 0),
      other => panic!("expected InvalidCacheCapacity, got {other:?}"),
    }
  }

  #[test]
  fn validate_accepts_existing_lexicon_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("extra.txt");
    fs::write(&path, "zonguldak [P:Noun,Prop]\n").unwrap();

    let mut config = CozumleConfig::default();
    config.lexicon.path = Some(path);
    assert!(config.validate().is_ok());
  }

  #[test]
  fn validate_rejects_directory_as_lexicon() {
    let temp_dir = TempDir::new().unwrap();

    let mut config = CozumleConfig::default();
    config.lexicon.path = Some(temp_dir.path().to_path_buf());

    match config.validate().unwrap_err() {
      ConfigError::InvalidLexiconPath { path } => assert_eq!(path, temp_dir.path()),
      other => panic!("expected InvalidLexiconPath, got {other:?}"),
    }
  }

  #[test]
  fn validate_rejects_missing_lexicon_file() {
    let temp_dir = TempDir::new().unwrap();

    let mut config = CozumleConfig::default();
    config.lexicon.path = Some(temp_dir.path().join("missing.txt"));
    assert!(matches!(config.validate(), Err(ConfigError::InvalidLexiconPath { .. })));
  }

  #[test]
  fn validate_rejects_no_lexicon_source() {
    let mut config = CozumleConfig::default();
    config.lexicon.include_core = false;
    assert!(matches!(config.validate(), Err(ConfigError::EmptyLexicon)));
  }
}
