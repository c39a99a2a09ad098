//! Writes analyses back as text, with apostrophes and casing the way Turkish orthography
//! expects them.

use serde::{Deserialize, Serialize};

use crate::alphabet;
use crate::lexicon::{PrimaryPos, RootAttribute, SecondaryPos};

use super::single_analysis::SingleAnalysis;

/// Casing of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseType {
  /// Left as formatted
  Default,
  /// `ankara'da`
  Lower,
  /// `ANKARA'DA`
  Upper,
  /// `Ankara'da`
  Title,
  /// `ANKARA'da`
  UpperRootLowerEnding,
  /// Anything else (`AnKaRa`)
  Mixed,
}

/// Formats analyses as surface text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceFormatter;

impl SurfaceFormatter {
  /// Creates a formatter.
  pub fn new() -> Self {
    Self
  }

  /// True for proper nouns without `NoQuote`, runtime numerals and dates. Their suffixes are
  /// written after an apostrophe.
  pub fn apostrophe_required(analysis: &SingleAnalysis) -> bool {
    let item = analysis.item();
    (item.secondary_pos == SecondaryPos::ProperNoun && !item.has_attribute(RootAttribute::NoQuote))
      || (item.primary_pos == PrimaryPos::Numeral && item.has_attribute(RootAttribute::Runtime))
      || item.secondary_pos == SecondaryPos::Date
  }

  /// Surface text of `analysis`.
  ///
  /// With `apostrophe` set, or when the item requires one, the result is
  /// `lemma + apostrophe + ending`. Otherwise it is the analyzed stem followed by the ending.
  pub fn format(&self, analysis: &SingleAnalysis, apostrophe: Option<&str>) -> String {
    let item = analysis.item();
    let ending = analysis.ending();
    if apostrophe.is_none() && !Self::apostrophe_required(analysis) {
      let stem = if item.has_attribute(RootAttribute::NoQuote) {
        item.normalized_lemma()
      } else {
        analysis.stem()
      };
      return format!("{stem}{ending}");
    }
    if ending.is_empty() {
      return item.normalized_lemma().to_string();
    }
    format!("{}{}{ending}", item.normalized_lemma(), apostrophe.unwrap_or("'"))
  }

  /// [`SurfaceFormatter::format`] followed by a casing change. [`CaseType::Mixed`] gives an
  /// empty string.
  pub fn format_to_case(
    &self,
    analysis: &SingleAnalysis,
    case: CaseType,
    apostrophe: Option<&str>,
  ) -> String {
    let formatted = self.format(analysis, apostrophe);
    match case {
      CaseType::Default => formatted,
      CaseType::Lower => alphabet::to_lowercase(&formatted),
      CaseType::Upper => alphabet::to_uppercase(&formatted),
      CaseType::Title => alphabet::capitalize(&formatted),
      CaseType::UpperRootLowerEnding => {
        let ending = analysis.ending();
        let lemma = alphabet::to_uppercase(analysis.item().normalized_lemma());
        if ending.is_empty() {
          lemma
        } else if apostrophe.is_none() && !Self::apostrophe_required(analysis) {
          format!("{lemma}{ending}")
        } else {
          format!("{lemma}{}{ending}", apostrophe.unwrap_or("'"))
        }
      }
      CaseType::Mixed => String::new(),
    }
  }

  /// Classifies the casing of `input`. Only letters are counted.
  pub fn guess_case(&self, input: &str) -> CaseType {
    let mut first_upper = false;
    let mut lower = 0;
    let mut upper = 0;
    let mut letters = 0;
    for (i, c) in input.chars().enumerate() {
      if !c.is_alphabetic() {
        continue;
      }
      if i == 0 {
        first_upper = c.is_uppercase();
      }
      if c.is_uppercase() {
        upper += 1;
      } else if c.is_lowercase() {
        lower += 1;
      }
      letters += 1;
    }

    if letters == 0 {
      return CaseType::Default;
    }
    if letters == lower {
      return CaseType::Lower;
    }
    if letters == upper {
      return CaseType::Upper;
    }
    if first_upper && letters == lower + 1 {
      return CaseType::Title;
    }
    if let Some(i) = input.find('\'')
      && i > 0
      && i + 1 < input.len()
      && self.guess_case(&input[..i]) == CaseType::Upper
      && self.guess_case(&input[i + 1..]) == CaseType::Lower
    {
      return CaseType::UpperRootLowerEnding;
    }
    CaseType::Mixed
  }
}
