//! lexicon module
//!
//! Lexicon items, part-of-speech tags, root attributes and the text loader.

pub mod dictionary_item;
pub mod pos;
pub mod root_attribute;
pub mod root_lexicon;
pub mod text_loader;

/// Re-export
pub use dictionary_item::{DictionaryItem, UNKNOWN};
pub use pos::{PrimaryPos, SecondaryPos};
pub use root_attribute::{RootAttribute, RootAttributes};
pub use root_lexicon::RootLexicon;
pub use text_loader::{
  CORE_LEXICON, load_core_lexicon, load_file, load_file_into, load_into, load_text,
};
