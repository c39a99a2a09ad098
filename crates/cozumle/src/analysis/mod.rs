//! analysis module
//!
//! Surface realization of suffixes, the breadth-first analyzer and everything built on its
//! results: word analyses, surface formatting, numerals and the fallback for tokens the
//! lexicon does not know.

pub mod analyzer;
pub mod formatter;
pub mod numerals;
pub mod pronunciation;
pub mod search_path;
pub mod single_analysis;
pub mod surface;
pub mod token_kind;
pub mod unidentified;
pub mod word_analysis;

/// Re-export
pub use analyzer::RuleBasedAnalyzer;
pub use formatter::{CaseType, SurfaceFormatter};
pub use search_path::SearchPath;
pub use single_analysis::{MorphemeData, SingleAnalysis};
pub use surface::{LexicalTransition, SurfaceTransition, generate_surface};
pub use token_kind::TokenKind;
pub use unidentified::UnidentifiedTokenAnalyzer;
pub use word_analysis::WordAnalysis;
