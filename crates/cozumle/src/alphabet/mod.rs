//! alphabet module
//!
//! Turkish letters, phonology tables and phonetic attribute propagation.

pub mod letter;
pub mod phonetic_attribute;
pub mod turkish_alphabet;

/// Re-export
pub use letter::TurkicLetter;
pub use phonetic_attribute::{PhoneticAttribute, PhoneticAttributes, morphemic_attributes};
pub use turkish_alphabet::*;
