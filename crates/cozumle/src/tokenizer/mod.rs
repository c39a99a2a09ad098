//! tokenizer module
pub mod lemma_tokenizer;

/// Re-export
pub use lemma_tokenizer::{
  LEMMA_TOKENIZER_NAME, LemmaTokenStream, LemmaTokenizer, register_lemma_tokenizer, should_index,
};
