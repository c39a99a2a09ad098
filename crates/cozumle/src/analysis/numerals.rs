//! Turkish numbers: spelling, Roman numerals and the lemma that governs a numeral's suffixes.
//!
//! Suffixes on a written number harmonize with the word for its last significant digit
//! group: `1500'den` is read `bin beş yüz`, so the suffix follows `yüz`.

use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::SecondaryPos;

const ONES: [&str; 10] = ["", "bir", "iki", "üç", "dört", "beş", "altı", "yedi", "sekiz", "dokuz"];
const TENS: [&str; 10] =
  ["", "on", "yirmi", "otuz", "kırk", "elli", "altmış", "yetmiş", "seksen", "doksan"];
const THOUSANDS: [&str; 7] = ["", "bin", "milyon", "milyar", "trilyon", "katrilyon", "kentilyon"];

const ORDINALS: [(&str, &str); 24] = [
  ("sıfır", "sıfırıncı"),
  ("bir", "birinci"),
  ("iki", "ikinci"),
  ("üç", "üçüncü"),
  ("dört", "dördüncü"),
  ("beş", "beşinci"),
  ("altı", "altıncı"),
  ("yedi", "yedinci"),
  ("sekiz", "sekizinci"),
  ("dokuz", "dokuzuncu"),
  ("on", "onuncu"),
  ("yirmi", "yirminci"),
  ("otuz", "otuzuncu"),
  ("kırk", "kırkıncı"),
  ("elli", "ellinci"),
  ("altmış", "altmışıncı"),
  ("yetmiş", "yetmişinci"),
  ("seksen", "sekseninci"),
  ("doksan", "doksanıncı"),
  ("yüz", "yüzüncü"),
  ("bin", "bininci"),
  ("milyon", "milyonuncu"),
  ("milyar", "milyarıncı"),
  ("trilyon", "trilyonuncu"),
];

static ROMAN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$")
    .expect("roman numeral pattern")
});

static NUMBER_PIECES: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[0-9]+|[^0-9 ]+").expect("number pieces pattern"));

/// Lemma whose harmony a suffix on the written number `digits` follows.
///
/// Digits are read from the right. Trailing zeros move the reading up through
/// `sıfır`, `yüz`, `bin`, `milyon` and `milyar`. Anything that is not a number gives an
/// empty string.
///
/// ```
/// use cozumle::analysis::numerals::numeral_ending;
/// assert_eq!(numeral_ending("1500"), "yüz");
/// assert_eq!(numeral_ending("40"), "kırk");
/// assert_eq!(numeral_ending("3"), "üç");
/// ```
pub fn numeral_ending(digits: &str) -> &'static str {
  let mut zeros = 0usize;
  for c in digits.chars().rev() {
    let Some(k) = c.to_digit(10) else {
      return if zeros > 0 { "sıfır" } else { "" };
    };
    let k = k as usize;
    if k == 0 {
      zeros += 1;
      if zeros > 11 {
        return "";
      }
      continue;
    }
    return match zeros {
      0 => ONES[k],
      1 => TENS[k],
      _ => zero_group_lemma(zeros),
    };
  }
  zero_group_lemma(zeros)
}

fn zero_group_lemma(zeros: usize) -> &'static str {
  match zeros {
    0 => "",
    1 => "sıfır",
    2 => "yüz",
    3..=5 => "bin",
    6..=8 => "milyon",
    _ => "milyar",
  }
}

/// Ordinal form of a cardinal lemma (`dört` → `dördüncü`).
pub fn ordinal_of(cardinal: &str) -> Option<&'static str> {
  ORDINALS.iter().find(|(c, _)| *c == cardinal).map(|(_, o)| *o)
}

/// Decodes a Roman numeral. Case is ignored. `None` for anything that is not a valid
/// numeral, including the empty string.
pub fn roman_to_decimal(s: &str) -> Option<u32> {
  if s.is_empty() || !ROMAN.is_match(s) {
    return None;
  }
  let value = |c: char| match c.to_ascii_uppercase() {
    'I' => 1,
    'V' => 5,
    'X' => 10,
    'L' => 50,
    'C' => 100,
    'D' => 500,
    _ => 1000,
  };
  let values: Vec<u32> = s.chars().map(value).collect();
  let mut total = 0;
  for (i, v) in values.iter().enumerate() {
    match values.get(i + 1) {
      Some(next) if next > v => total -= *v as i64,
      _ => total += *v as i64,
    }
  }
  u32::try_from(total).ok()
}

fn convert_three_digits(n: u64) -> String {
  let hundreds = (n / 100) as usize;
  let tens = (n / 10 % 10) as usize;
  let ones = (n % 10) as usize;
  let mut words: Vec<&str> = Vec::with_capacity(4);
  if hundreds > 1 {
    words.push(ONES[hundreds]);
  }
  if hundreds > 0 {
    words.push("yüz");
  }
  if tens > 0 {
    words.push(TENS[tens]);
  }
  if ones > 0 {
    words.push(ONES[ones]);
  }
  words.join(" ")
}

/// Spells out an integer: `1500` → `bin beş yüz`, `-3` → `eksi üç`.
pub fn convert_to_string(n: i64) -> String {
  if n == 0 {
    return "sıfır".to_string();
  }
  let mut rest = n.unsigned_abs();
  let mut groups = Vec::new();
  while rest > 0 {
    groups.push(rest % 1000);
    rest /= 1000;
  }

  let mut words = Vec::new();
  if n < 0 {
    words.push("eksi".to_string());
  }
  for (index, group) in groups.iter().enumerate().rev() {
    if *group == 0 {
      continue;
    }
    if index == 1 && *group == 1 {
      words.push("bin".to_string());
      continue;
    }
    words.push(convert_three_digits(*group));
    if index > 0 {
      words.push(THOUSANDS[index].to_string());
    }
  }
  words.join(" ")
}

/// Spells out every digit run of `s`. Leading zeros are read one by one
/// (`007` → `sıfır sıfır yedi`) and a leading `-` is read as `eksi`.
pub fn convert_number_to_string(s: &str) -> String {
  let s = s.strip_prefix('+').unwrap_or(s);
  let mut words = Vec::new();
  if s.starts_with('-') {
    words.push("eksi".to_string());
  }
  for run in s.split(|c: char| !c.is_ascii_digit()).filter(|r| !r.is_empty()) {
    let significant = run.trim_start_matches('0');
    for _ in 0..run.len() - significant.len() {
      words.push("sıfır".to_string());
    }
    if significant.is_empty() {
      continue;
    }
    match significant.parse::<i64>() {
      Ok(n) => words.push(convert_to_string(n)),
      Err(_) => {
        words.extend(significant.chars().filter_map(|c| c.to_digit(10)).map(|d| {
          if d == 0 { "sıfır".to_string() } else { ONES[d as usize].to_string() }
        }));
      }
    }
  }
  words.join(" ")
}

/// Splits text into digit runs and the pieces between them: `a4b` → `a`, `4`, `b`.
pub fn separate_numbers(s: &str) -> Vec<String> {
  NUMBER_PIECES.find_iter(s).map(|m| m.as_str().to_string()).collect()
}

/// Splits a numeric token into its number and its suffix.
///
/// An apostrophe is the split point when present. Otherwise the number ends at the last digit
/// or dot: `3te` → (`3`, `te`), `15.` → (`15.`, ``), `2.5ta` → (`2.5`, `ta`).
pub fn split_numeral(s: &str) -> (&str, &str) {
  if let Some(i) = s.find('\'') {
    return (&s[..i], &s[i + 1..]);
  }
  let cut = s
    .char_indices()
    .rev()
    .find(|(_, c)| *c == '.' || c.is_ascii_digit())
    .map_or(0, |(i, c)| i + c.len_utf8());
  (&s[..cut], &s[cut..])
}

/// Shapes of written numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralKind {
  /// `42`
  Cardinal,
  /// `42.`
  Ordinal,
  /// `3-5`
  Range,
  /// `3/4`
  Ratio,
  /// `2,5` or `2.5`
  Real,
  /// `3er`
  Distribution,
  /// `%50`
  Percentage,
  /// `10:30`
  Clock,
  /// `29.10.1923`
  Date,
}

static NUMERAL_PATTERNS: LazyLock<Vec<(NumeralKind, Regex)>> = LazyLock::new(|| {
  [
    (NumeralKind::Cardinal, r"^[+\-]?\d+$"),
    (NumeralKind::Ordinal, r"^[+\-]?[0-9]+[.]$"),
    (NumeralKind::Range, r"^[+\-]?[0-9]+-[0-9]+$"),
    (NumeralKind::Ratio, r"^[+\-]?[0-9]+/[0-9]+$"),
    (NumeralKind::Real, r"^[+\-]?[0-9]+[,][0-9]+$|^[+\-]?[0-9]+[.][0-9]+$"),
    (NumeralKind::Distribution, r"^\d+[^0-9.]+$"),
    (NumeralKind::Percentage, r"(^|[+\-])(%)(\d+)((([.]|[,])(\d+))|)$"),
    (NumeralKind::Clock, r"^([012][0-9]|[1-9])([.]|[:])([0-5][0-9])$"),
    (NumeralKind::Date, r"^([0-3][0-9]|[1-9])([.]|[/])([01][0-9]|[1-9])([.]|[/])(\d{4})$"),
  ]
  .into_iter()
  .map(|(kind, pattern)| (kind, Regex::new(pattern).expect("numeral pattern")))
  .collect()
});

impl NumeralKind {
  /// Secondary POS given to runtime items of this kind.
  pub fn secondary_pos(self) -> SecondaryPos {
    match self {
      Self::Cardinal => SecondaryPos::Cardinal,
      Self::Ordinal => SecondaryPos::Ordinal,
      Self::Range => SecondaryPos::Range,
      Self::Ratio => SecondaryPos::Ratio,
      Self::Real => SecondaryPos::Real,
      Self::Distribution => SecondaryPos::Distribution,
      Self::Percentage => SecondaryPos::Percentage,
      Self::Clock => SecondaryPos::Clock,
      Self::Date => SecondaryPos::Date,
    }
  }

  /// Every kind whose pattern matches `number`. Shapes overlap, so `12.30` is both a real
  /// number and a clock time.
  pub fn matching(number: &str) -> Vec<NumeralKind> {
    NUMERAL_PATTERNS.iter().filter(|(_, re)| re.is_match(number)).map(|(kind, _)| *kind).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ending_follows_last_significant_group() {
    assert_eq!(numeral_ending("1500"), "yüz");
    assert_eq!(numeral_ending("40"), "kırk");
    assert_eq!(numeral_ending("0"), "sıfır");
    assert_eq!(numeral_ending("7"), "yedi");
    assert_eq!(numeral_ending("100000"), "bin");
    assert_eq!(numeral_ending("3000000"), "milyon");
    assert_eq!(numeral_ending("2000000000"), "milyar");
    assert_eq!(numeral_ending("2.5"), "beş");
    assert_eq!(numeral_ending("1000000000000"), "");
    assert_eq!(numeral_ending("abc"), "");
  }

  #[test]
  fn ordinals() {
    assert_eq!(ordinal_of("dört"), Some("dördüncü"));
    assert_eq!(ordinal_of(numeral_ending("15")), Some("beşinci"));
    assert_eq!(ordinal_of("kalem"), None);
  }

  #[test]
  fn roman_numerals() {
    assert_eq!(roman_to_decimal("XIV"), Some(14));
    assert_eq!(roman_to_decimal("mcmxxiii"), Some(1923));
    assert_eq!(roman_to_decimal("IX"), Some(9));
    assert_eq!(roman_to_decimal("IIII"), None);
    assert_eq!(roman_to_decimal("ABC"), None);
    assert_eq!(roman_to_decimal(""), None);
  }

  #[test]
  fn spelling() {
    assert_eq!(convert_to_string(1500), "bin beş yüz");
    assert_eq!(convert_to_string(0), "sıfır");
    assert_eq!(convert_to_string(-3), "eksi üç");
    assert_eq!(convert_to_string(1_001_100), "bir milyon bin yüz");
    assert_eq!(convert_to_string(250_000), "iki yüz elli bin");
    assert_eq!(convert_number_to_string("007"), "sıfır sıfır yedi");
    assert_eq!(convert_number_to_string("+42"), "kırk iki");
    assert_eq!(separate_numbers("f16 ve a4"), vec!["f", "16", "ve", "a", "4"]);
  }

  #[test]
  fn numeral_split_points() {
    assert_eq!(split_numeral("3'te"), ("3", "te"));
    assert_eq!(split_numeral("3te"), ("3", "te"));
    assert_eq!(split_numeral("15."), ("15.", ""));
    assert_eq!(split_numeral("2.5ta"), ("2.5", "ta"));
    assert_eq!(split_numeral("1500"), ("1500", ""));
    assert_eq!(split_numeral("abc"), ("", "abc"));
  }

  #[test]
  fn numeral_kinds() {
    assert_eq!(NumeralKind::matching("1500"), vec![NumeralKind::Cardinal]);
    assert_eq!(NumeralKind::matching("15."), vec![NumeralKind::Ordinal]);
    assert_eq!(NumeralKind::matching("%50"), vec![NumeralKind::Percentage]);
    assert_eq!(NumeralKind::matching("29.10.1923"), vec![NumeralKind::Date]);
    let kinds = NumeralKind::matching("12.30");
    assert!(kinds.contains(&NumeralKind::Real) && kinds.contains(&NumeralKind::Clock));
    assert_eq!(NumeralKind::Ordinal.secondary_pos(), SecondaryPos::Ordinal);
  }
}
