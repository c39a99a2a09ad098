//! Config loading from environment variables

use std::path::PathBuf;

use cozumle::CozumleConfig;

use super::constants::{DEFAULT_HOST, DEFAULT_MAX_WORDS, DEFAULT_PORT};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind host (e.g. "127.0.0.1")
  pub host: String,
  /// Bind port
  pub port: u16,
  /// Accept colloquial verb forms
  pub informal: bool,
  /// Extra lexicon file loaded on top of the core lexicon
  pub lexicon_path: Option<PathBuf>,
  /// Maximum number of words per analyze request
  pub max_words: usize,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      host: DEFAULT_HOST.to_string(),
      port: DEFAULT_PORT,
      informal: false,
      lexicon_path: None,
      max_words: DEFAULT_MAX_WORDS,
    }
  }
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// - `COZUMLE_API_HOST`, `COZUMLE_API_PORT`
  /// - `COZUMLE_API_INFORMAL` (`true`/`false`/`1`/`0`)
  /// - `COZUMLE_API_LEXICON_PATH`
  /// - `COZUMLE_API_MAX_WORDS`
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Same as [`Config::from_env`] with a custom variable source.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> crate::errors::Result<Self> {
    let defaults = Self::default();

    let host = lookup("COZUMLE_API_HOST").unwrap_or(defaults.host);
    let port = match lookup("COZUMLE_API_PORT") {
      Some(v) => v
        .parse::<u16>()
        .map_err(|_| ApiError::config(format!("COZUMLE_API_PORT is not a port: {v}")))?,
      None => defaults.port,
    };
    let informal = match lookup("COZUMLE_API_INFORMAL") {
      Some(v) => parse_bool(&v)
        .ok_or_else(|| ApiError::config(format!("COZUMLE_API_INFORMAL is not a boolean: {v}")))?,
      None => defaults.informal,
    };
    let lexicon_path =
      lookup("COZUMLE_API_LEXICON_PATH").filter(|v| !v.is_empty()).map(PathBuf::from);
    let max_words = match lookup("COZUMLE_API_MAX_WORDS") {
      Some(v) => match v.parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => return Err(ApiError::config(format!("COZUMLE_API_MAX_WORDS must be positive: {v}"))),
      },
      None => defaults.max_words,
    };

    Ok(Self { host, port, informal, lexicon_path, max_words })
  }

  /// `host:port`
  pub fn bind_addr(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }

  /// Library configuration derived from the API settings.
  pub fn cozumle_config(&self) -> CozumleConfig {
    let mut config = CozumleConfig::default();
    config.morphology.informal = self.informal;
    config.lexicon.path = self.lexicon_path.clone();
    config
  }
}

fn parse_bool(value: &str) -> Option<bool> {
  match value.to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Some(true),
    "0" | "false" | "no" | "off" => Some(false),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn from_map(pairs: &[(&str, &str)]) -> crate::errors::Result<Config> {
    let map: HashMap<String, String> =
      pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    Config::from_lookup(|key| map.get(key).cloned())
  }

  #[test]
  fn defaults_without_variables() {
    let config = from_map(&[]).unwrap();
    assert_eq!(config.bind_addr(), "127.0.0.1:5540");
    assert!(!config.informal);
    assert_eq!(config.lexicon_path, None);
    assert_eq!(config.max_words, DEFAULT_MAX_WORDS);
  }

  #[test]
  fn reads_all_variables() {
    let config = from_map(&[
      ("COZUMLE_API_HOST", "0.0.0.0"),
      ("COZUMLE_API_PORT", "8080"),
      ("COZUMLE_API_INFORMAL", "TRUE"),
      ("COZUMLE_API_LEXICON_PATH", "/srv/extra.txt"),
      ("COZUMLE_API_MAX_WORDS", "50"),
    ])
    .unwrap();
    assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    assert!(config.informal);
    assert_eq!(config.max_words, 50);

    let lib = config.cozumle_config();
    assert!(lib.morphology.informal);
    assert_eq!(lib.lexicon.path, Some(PathBuf::from("/srv/extra.txt")));
  }

  #[test]
  fn rejects_invalid_values() {
    assert_eq!(from_map(&[("COZUMLE_API_PORT", "http")]).unwrap_err().code(), "CONFIG_ERROR");
    assert!(from_map(&[("COZUMLE_API_INFORMAL", "maybe")]).is_err());
    assert!(from_map(&[("COZUMLE_API_MAX_WORDS", "0")]).is_err());
  }
}
