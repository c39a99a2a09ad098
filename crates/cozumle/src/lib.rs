//! cozumle Turkish morphology library
//!
//! Rule-based morphological analysis and word generation over a finite-state morphotactics
//! graph, with a bundled core lexicon.

/// Alphabet module - Turkish letters, phonetic attributes and normalization
pub mod alphabet;

/// Analysis module - rule-based analyzer, analyses, formatter and unidentified tokens
pub mod analysis;

/// Cache module - bounded LRU used by the facade
pub mod cache;

/// Config module - defines CozumleConfig and its sections
pub mod config;

/// Error module - defines CozumleError, CozumleResult and the domain errors
pub mod errors;

/// Generator module - word generation and informal to formal conversion
pub mod generator;

/// Lexicon module - dictionary items, POS tags, root attributes and the text loader
pub mod lexicon;

/// Morphotactics module - morphemes, states, transitions and the stem index
pub mod morphotactics;

/// Service module - provides the CozumleService facade
pub mod service;

/// Tokenizer module - tantivy tokenizer emitting lemmas
pub mod tokenizer;

/// Re-export
pub use analysis::{SingleAnalysis, WordAnalysis};
pub use config::CozumleConfig;
pub use errors::{CozumleError, CozumleResult};
pub use generator::GenerationResult;
pub use service::CozumleService;
