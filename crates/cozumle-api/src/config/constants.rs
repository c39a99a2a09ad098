//! API configuration constants

/// Maximum input text length (bytes)
///
/// Requests above this are rejected before tokenization.
pub const MAX_TEXT_LENGTH: usize = 1_000_000;

/// Default bind host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port
pub const DEFAULT_PORT: u16 = 5540;

/// Default per-request word limit
pub const DEFAULT_MAX_WORDS: usize = 1_000;
