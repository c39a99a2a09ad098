//! Shape classification of single tokens.
//!
//! Only decides what kind of token a string is. Splitting text into tokens happens elsewhere.

use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::SecondaryPos;

/// Kind of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  /// `ali@example.com`
  Email,
  /// `https://example.com`, `www.example.com`
  Url,
  /// `#istanbul`
  HashTag,
  /// `@kullanici`
  Mention,
  /// `:)`
  Emoticon,
  /// `XIV`, `XIV.`, `XIV'üncü`
  RomanNumeral,
  /// `Dr.`, `vb.`
  Abbreviation,
  /// `29.10.1923`
  Date,
  /// `10:30`
  Time,
  /// Anything with a digit that is not a date or a time
  Number,
  /// Everything else
  Word,
}

struct Patterns {
  email: Regex,
  url: Regex,
  hashtag: Regex,
  mention: Regex,
  emoticon: Regex,
  roman: Regex,
  abbreviation: Regex,
  date: Regex,
  time: Regex,
}

static PATTERNS: LazyLock<Patterns> = LazyLock::new(|| {
  let re = |pattern: &str| Regex::new(pattern).expect("token pattern");
  Patterns {
    email: re(r"^[\w.+\-]+@[\w\-]+(\.[\w\-]+)+('\p{L}+)?$"),
    url: re(r"^((https?|ftp)://|www\.)[^\s']+('\p{L}+)?$"),
    hashtag: re(r"^#[\p{L}\d_]+('\p{L}+)?$"),
    mention: re(r"^@[\p{L}\d_]+('\p{L}+)?$"),
    emoticon: re(r"^(:\)|:\(|;\)|:D|:P|:p|:-\)|:-\(|;-\)|:\||<3|\^_\^|:'\()$"),
    roman: re(r"^[IVXLCDM]+\.?('\p{L}+)?$"),
    abbreviation: re(r"^(\p{L}{1,4}\.)+$"),
    date: re(r"^\d{1,2}[./]\d{1,2}[./]\d{4}('\p{L}+)?$"),
    time: re(r"^([01]?\d|2[0-3]):[0-5]\d('\p{L}+)?$"),
  }
});

impl TokenKind {
  /// Classifies `token`. Apostrophes should already be unified.
  pub fn classify(token: &str) -> TokenKind {
    let p = &*PATTERNS;
    if p.emoticon.is_match(token) {
      TokenKind::Emoticon
    } else if p.email.is_match(token) {
      TokenKind::Email
    } else if p.url.is_match(token) {
      TokenKind::Url
    } else if p.hashtag.is_match(token) {
      TokenKind::HashTag
    } else if p.mention.is_match(token) {
      TokenKind::Mention
    } else if p.date.is_match(token) {
      TokenKind::Date
    } else if p.time.is_match(token) {
      TokenKind::Time
    } else if token.chars().any(|c| c.is_ascii_digit()) {
      TokenKind::Number
    } else if p.roman.is_match(token) {
      TokenKind::RomanNumeral
    } else if p.abbreviation.is_match(token) {
      TokenKind::Abbreviation
    } else {
      TokenKind::Word
    }
  }

  /// Secondary POS of runtime items created for this kind. `None` for plain words and numbers.
  pub fn secondary_pos(self) -> Option<SecondaryPos> {
    match self {
      Self::Email => Some(SecondaryPos::Email),
      Self::Url => Some(SecondaryPos::Url),
      Self::HashTag => Some(SecondaryPos::HashTag),
      Self::Mention => Some(SecondaryPos::Mention),
      Self::Emoticon => Some(SecondaryPos::Emoticon),
      Self::RomanNumeral => Some(SecondaryPos::RomanNumeral),
      Self::Abbreviation => Some(SecondaryPos::Abbreviation),
      Self::Date => Some(SecondaryPos::Date),
      Self::Time => Some(SecondaryPos::Clock),
      Self::Number | Self::Word => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn classifies_tokens() {
    assert_eq!(TokenKind::classify("ali@example.com"), TokenKind::Email);
    assert_eq!(TokenKind::classify("https://example.com/a"), TokenKind::Url);
    assert_eq!(TokenKind::classify("www.example.com'a"), TokenKind::Url);
    assert_eq!(TokenKind::classify("#istanbul"), TokenKind::HashTag);
    assert_eq!(TokenKind::classify("@kullanici"), TokenKind::Mention);
    assert_eq!(TokenKind::classify(":)"), TokenKind::Emoticon);
    assert_eq!(TokenKind::classify("XIV."), TokenKind::RomanNumeral);
    assert_eq!(TokenKind::classify("Dr."), TokenKind::Abbreviation);
    assert_eq!(TokenKind::classify("29.10.1923"), TokenKind::Date);
    assert_eq!(TokenKind::classify("10:30'da"), TokenKind::Time);
    assert_eq!(TokenKind::classify("1500'den"), TokenKind::Number);
    assert_eq!(TokenKind::classify("kalem"), TokenKind::Word);
  }

  #[test]
  fn secondary_pos_of_kinds() {
    assert_eq!(TokenKind::Time.secondary_pos(), Some(SecondaryPos::Clock));
    assert_eq!(TokenKind::Word.secondary_pos(), None);
  }
}
