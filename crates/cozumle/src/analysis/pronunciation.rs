//! Pronunciation guesses for abbreviations and tokens without vowels.

use tracing::debug;

use crate::alphabet;

use super::numerals;

fn letter_name(c: char) -> Option<&'static str> {
  let name = match c {
    'a' => "a",
    'b' => "be",
    'c' => "ce",
    'ç' => "çe",
    'd' => "de",
    'e' => "e",
    'f' => "fe",
    'g' => "ge",
    'ğ' => "yumuşakge",
    'h' => "he",
    'ı' => "ı",
    'i' => "i",
    'j' => "je",
    'k' => "ke",
    'l' => "le",
    'm' => "me",
    'n' => "ne",
    'o' => "o",
    'ö' => "ö",
    'p' => "pe",
    'q' => "kü",
    'r' => "re",
    's' => "se",
    'ş' => "şe",
    't' => "te",
    'u' => "u",
    'ü' => "ü",
    'v' => "ve",
    'w' => "ve",
    'x' => "iks",
    'y' => "ye",
    'z' => "ze",
    _ => return None,
  };
  Some(name)
}

/// `stem` itself when it has a vowel, otherwise its letters read by name.
pub fn guess(stem: &str) -> String {
  if alphabet::contains_vowel(stem) {
    stem.to_string()
  } else {
    letter_pronunciations(stem)
  }
}

/// Reads a lowercase abbreviation letter by letter: `tbmm` → `tebememe`, `ttk` → `teteka`.
///
/// A final `k` is read `ka`. Digit runs are spelled as numbers (`f16` → `feonaltı`).
pub fn letter_pronunciations(word: &str) -> String {
  if alphabet::contains_digit(word) {
    return with_digits(word);
  }
  let count = word.chars().count();
  let mut out = String::new();
  for (i, c) in word.chars().enumerate() {
    if c == '-' {
      continue;
    }
    if i + 1 == count && c == 'k' {
      out.push_str("ka");
      continue;
    }
    match letter_name(c) {
      Some(name) => out.push_str(name),
      None => debug!(letter = %c, word, "No pronunciation for letter"),
    }
  }
  out
}

fn with_digits(word: &str) -> String {
  let pieces = numerals::separate_numbers(word);
  let last = pieces.len().saturating_sub(1);
  let mut out = String::new();
  for (i, piece) in pieces.iter().enumerate() {
    if alphabet::contains_digit(piece) {
      out.push_str(&numerals::convert_number_to_string(piece));
    } else if i < last {
      out.push_str(&letter_pronunciations(piece));
    } else {
      out.push_str(&replace_english_letters(piece));
    }
  }
  out.retain(|c| c != ' ');
  out
}

fn replace_english_letters(word: &str) -> String {
  let mut out = String::with_capacity(word.len());
  for c in word.chars() {
    match c {
      '\'' | '-' => {}
      'q' => out.push('k'),
      'w' => out.push('v'),
      'x' => out.push_str("ks"),
      _ => out.push(c),
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn letters_are_read_by_name() {
    assert_eq!(letter_pronunciations("tbmm"), "tebememe");
    assert_eq!(letter_pronunciations("ttk"), "teteka");
    assert_eq!(letter_pronunciations("ab-d"), "abede");
  }

  #[test]
  fn words_with_vowels_are_kept() {
    assert_eq!(guess("nato"), "nato");
    assert_eq!(guess("thy"), "teheye");
  }

  #[test]
  fn digits_are_spelled() {
    assert_eq!(letter_pronunciations("f16"), "feonaltı");
    assert_eq!(letter_pronunciations("3g"), "üçg");
    assert_eq!(letter_pronunciations("a4x"), "adörtks");
  }
}
