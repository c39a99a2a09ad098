//! Word generation from lexicon items and morpheme sequences.
pub mod informal_converter;
pub mod word_generator;

pub use informal_converter::InformalAnalysisConverter;
pub use word_generator::{GenerationResult, WordGenerator};
