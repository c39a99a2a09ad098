//! Turkish alphabet tables and text helpers.
//!
//! All functions are pure lookups over static tables.

use std::borrow::Cow;

use super::letter::TurkicLetter;

/// Lowercase letters recognized by the analyzer.
pub const LOWERCASE: &str = "abcçdefgğhıijklmnoöprsştuüvyzxwqâîû";

/// Lowercase vowels.
pub const VOWELS: &str = "aeıioöuüâîû";

const APOSTROPHES: [char; 6] = ['′', '´', '`', '’', '‘', '\''];

const TURKISH_SPECIFIC: &str = "çÇğĞıİöÖşŞüÜâîûÂÎÛ";
const TURKISH_ASCII: &str = "cCgGiIoOsSuUaiuAIU";

const ASCII_EQ_TR: &str = "cCgGiIoOsSuUçÇğĞıİöÖşŞüÜ";
const ASCII_EQ: &str = "çÇğĞıİöÖşŞüÜcCgGiIoOsSuU";

const FOREIGN_DIACRITICS: &str = "ÀÁÂÃÄÅÈÉÊËÌÍÎÏÑÒÓÔÕÙÚÛàáâãäåèéêëìíîïñòóôõùúû";
const DIACRITICS_TO_TURKISH: &str = "AAAAAAEEEEIIIINOOOOUUUaaaaaaeeeeiiiinoooouuu";

fn lookup(c: char, from: &str, to: &str) -> Option<char> {
  from.chars().zip(to.chars()).find(|(f, _)| *f == c).map(|(_, t)| t)
}

/// Returns the letter for `c`, or `None` if it is not part of the alphabet.
pub fn letter(c: char) -> Option<TurkicLetter> {
  TurkicLetter::of(c)
}

/// True if `c` is a Turkish letter (either case).
pub fn is_letter(c: char) -> bool {
  TurkicLetter::of(c).is_some()
}

/// True if `c` is a vowel (either case).
pub fn is_vowel(c: char) -> bool {
  TurkicLetter::of(c).is_some_and(|l| l.is_vowel())
}

/// True if `s` contains at least one vowel.
pub fn contains_vowel(s: &str) -> bool {
  s.chars().any(is_vowel)
}

/// Number of vowels, which equals the syllable count for Turkish words.
pub fn vowel_count(s: &str) -> usize {
  s.chars().filter(|c| is_vowel(*c)).count()
}

/// Last character as a letter.
pub fn last_letter(s: &str) -> Option<TurkicLetter> {
  s.chars().next_back().and_then(TurkicLetter::of)
}

/// First character as a letter.
pub fn first_letter(s: &str) -> Option<TurkicLetter> {
  s.chars().next().and_then(TurkicLetter::of)
}

/// Last vowel of `s`.
pub fn last_vowel(s: &str) -> Option<TurkicLetter> {
  s.chars().rev().find(|c| is_vowel(*c)).and_then(TurkicLetter::of)
}

/// First vowel of `s`.
pub fn first_vowel(s: &str) -> Option<TurkicLetter> {
  s.chars().find(|c| is_vowel(*c)).and_then(TurkicLetter::of)
}

/// Voices a stop consonant: ç→c, g→ğ, k→ğ, p→b, t→d. Other characters are returned as is.
pub fn voice(c: char) -> char {
  lookup(c, "çgkptÇGKPT", "cğğbdCĞĞBD").unwrap_or(c)
}

/// Devoices a consonant: b→p, c→ç, d→t, g→k, ğ→k. Other characters are returned as is.
pub fn devoice(c: char) -> char {
  lookup(c, "bcdgğBCDGĞ", "pçtkkPÇTKK").unwrap_or(c)
}

/// True if `s` contains â, î or û in either case.
pub fn contains_circumflex(s: &str) -> bool {
  s.chars().any(|c| matches!(c, 'â' | 'î' | 'û' | 'Â' | 'Î' | 'Û'))
}

/// Replaces circumflexed vowels with their plain forms.
pub fn normalize_circumflex(s: &str) -> Cow<'_, str> {
  if !contains_circumflex(s) {
    return Cow::Borrowed(s);
  }
  Cow::Owned(s.chars().map(|c| lookup(c, "âîûÂÎÛ", "aiuAİU").unwrap_or(c)).collect())
}

/// Turkish-aware lowercasing (`I`→`ı`, `İ`→`i`).
pub fn to_lowercase(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      'I' => out.push('ı'),
      'İ' => out.push('i'),
      _ => out.extend(c.to_lowercase()),
    }
  }
  out
}

/// Turkish-aware uppercasing (`i`→`İ`, `ı`→`I`).
pub fn to_uppercase(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      'i' => out.push('İ'),
      'ı' => out.push('I'),
      _ => out.extend(c.to_uppercase()),
    }
  }
  out
}

/// Uppercases the first letter and lowercases the rest.
pub fn capitalize(s: &str) -> String {
  let mut chars = s.chars();
  match chars.next() {
    Some(first) => {
      let mut out = to_uppercase(&first.to_string());
      out.push_str(&to_lowercase(chars.as_str()));
      out
    }
    None => String::new(),
  }
}

/// True if `c` is a Turkish-specific letter (ç, ğ, ı, İ, ö, ş, ü or a circumflexed vowel).
pub fn is_turkish_specific(c: char) -> bool {
  TURKISH_SPECIFIC.contains(c)
}

/// Maps Turkish-specific letters to their closest ASCII letters.
pub fn to_ascii(s: &str) -> String {
  s.chars().map(|c| lookup(c, TURKISH_SPECIFIC, TURKISH_ASCII).unwrap_or(c)).collect()
}

/// True if `s` has a character that has an ASCII counterpart or is itself such a counterpart.
pub fn contains_ascii_related(s: &str) -> bool {
  s.chars().any(|c| ASCII_EQ_TR.contains(c))
}

/// True if the characters are equal or are each other's ASCII counterpart
/// (c/ç, g/ğ, i/ı, o/ö, s/ş, u/ü).
pub fn is_ascii_equal(c1: char, c2: char) -> bool {
  if c1 == c2 {
    return true;
  }
  lookup(c1, ASCII_EQ_TR, ASCII_EQ).is_some_and(|a| a == c2)
}

/// Compares two strings treating ASCII counterparts as equal.
pub fn equals_ignore_diacritics(s1: &str, s2: &str) -> bool {
  s1.chars().count() == s2.chars().count()
    && s1.chars().zip(s2.chars()).all(|(a, b)| is_ascii_equal(a, b))
}

/// True if `s1` starts with `s2`, treating ASCII counterparts as equal.
pub fn starts_with_ignore_diacritics(s1: &str, s2: &str) -> bool {
  s1.chars().count() >= s2.chars().count()
    && s1.chars().zip(s2.chars()).all(|(a, b)| is_ascii_equal(a, b))
}

/// True if `s` contains an ASCII digit.
pub fn contains_digit(s: &str) -> bool {
  s.chars().any(|c| c.is_ascii_digit())
}

/// True if `s` contains any apostrophe variant.
pub fn contains_apostrophe(s: &str) -> bool {
  s.chars().any(|c| APOSTROPHES.contains(&c))
}

/// Replaces every apostrophe variant with `'`.
pub fn normalize_apostrophe(s: &str) -> Cow<'_, str> {
  if !contains_apostrophe(s) {
    return Cow::Borrowed(s);
  }
  Cow::Owned(s.chars().map(|c| if APOSTROPHES.contains(&c) { '\'' } else { c }).collect())
}

/// True if `s` contains a non-Turkish diacritic letter such as `é` or `ñ`.
pub fn contains_foreign_diacritics(s: &str) -> bool {
  s.chars().any(|c| FOREIGN_DIACRITICS.contains(c))
}

/// Folds non-Turkish diacritics to plain letters.
pub fn foreign_diacritics_to_turkish(s: &str) -> String {
  s.chars().map(|c| lookup(c, FOREIGN_DIACRITICS, DIACRITICS_TO_TURKISH).unwrap_or(c)).collect()
}

/// Lowercases, unifies apostrophes and replaces characters outside the alphabet with `?`.
///
/// `.`, `-` and `'` are kept.
pub fn normalize(s: &str) -> String {
  let lower = to_lowercase(s);
  normalize_apostrophe(&lower)
    .chars()
    .map(|c| {
      if is_letter(c) || matches!(c, '.' | '-' | '\'') {
        c
      } else {
        '?'
      }
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lowercase_uses_turkish_dotted_and_dotless_i() {
    assert_eq!(to_lowercase("IŞIK"), "ışık");
    assert_eq!(to_lowercase("İSTANBUL"), "istanbul");
    assert_eq!(to_uppercase("istanbul"), "İSTANBUL");
    assert_eq!(capitalize("izmir"), "İzmir");
    assert_eq!(capitalize("ANKARA"), "Ankara");
  }

  #[test]
  fn voicing_tables() {
    assert_eq!(voice('k'), 'ğ');
    assert_eq!(voice('p'), 'b');
    assert_eq!(voice('t'), 'd');
    assert_eq!(voice('ç'), 'c');
    assert_eq!(voice('g'), 'ğ');
    assert_eq!(voice('m'), 'm');
    assert_eq!(devoice('d'), 't');
    assert_eq!(devoice('ğ'), 'k');
    assert_eq!(devoice('c'), 'ç');
  }

  #[test]
  fn circumflex_is_folded() {
    assert_eq!(normalize_circumflex("kâğıt"), "kağıt");
    assert!(matches!(normalize_circumflex("kalem"), Cow::Borrowed(_)));
  }

  #[test]
  fn ascii_tolerant_comparisons() {
    assert_eq!(to_ascii("çağış"), "cagis");
    assert!(is_ascii_equal('ş', 's'));
    assert!(is_ascii_equal('s', 'ş'));
    assert!(!is_ascii_equal('a', 'e'));
    assert!(equals_ignore_diacritics("sogus", "söğüş"));
    assert!(starts_with_ignore_diacritics("cocuklar", "çocuk"));
    assert!(!starts_with_ignore_diacritics("çoc", "çocuk"));
    assert!(contains_ascii_related("kitap"));
    assert!(!contains_ascii_related("kalem"));
  }

  #[test]
  fn normalize_replaces_unknown_characters() {
    assert_eq!(normalize("Kalem1"), "kalem?");
    assert_eq!(normalize("Ankara’da"), "ankara'da");
    assert_eq!(normalize("a.b-c"), "a.b-c");
  }

  #[test]
  fn vowel_queries() {
    assert_eq!(vowel_count("kitaplar"), 3);
    assert_eq!(last_vowel("kitap").map(|l| l.ch), Some('a'));
    assert_eq!(first_vowel("kitap").map(|l| l.ch), Some('i'));
    assert!(!contains_vowel("tbmm"));
    assert!(last_letter("").is_none());
  }

  #[test]
  fn foreign_diacritics_fold() {
    assert!(contains_foreign_diacritics("café"));
    assert_eq!(foreign_diacritics_to_turkish("café"), "cafe");
  }
}
