//! Config module

mod constants;
mod env;

pub use constants::{DEFAULT_HOST, DEFAULT_MAX_WORDS, DEFAULT_PORT, MAX_TEXT_LENGTH};
pub use env::Config;
