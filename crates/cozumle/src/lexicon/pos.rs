//! Part-of-speech tags.

use std::fmt;
use std::str::FromStr;

use crate::errors::LexiconError;

/// Primary part of speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimaryPos {
  /// Noun
  Noun,
  /// Adjective
  Adjective,
  /// Adverb
  Adverb,
  /// Conjunction
  Conjunction,
  /// Interjection
  Interjection,
  /// Verb
  Verb,
  /// Pronoun
  Pronoun,
  /// Numeral
  Numeral,
  /// Determiner
  Determiner,
  /// Postpositive
  PostPositive,
  /// Question particle
  Question,
  /// Duplicator (falan, filan)
  Duplicator,
  /// Punctuation
  Punctuation,
  /// Unknown
  Unknown,
}

impl PrimaryPos {
  /// All values.
  pub const ALL: [PrimaryPos; 14] = [
    Self::Noun,
    Self::Adjective,
    Self::Adverb,
    Self::Conjunction,
    Self::Interjection,
    Self::Verb,
    Self::Pronoun,
    Self::Numeral,
    Self::Determiner,
    Self::PostPositive,
    Self::Question,
    Self::Duplicator,
    Self::Punctuation,
    Self::Unknown,
  ];

  /// Short form used in ids and formatted output.
  pub fn short_form(&self) -> &'static str {
    match self {
      Self::Noun => "Noun",
      Self::Adjective => "Adj",
      Self::Adverb => "Adv",
      Self::Conjunction => "Conj",
      Self::Interjection => "Interj",
      Self::Verb => "Verb",
      Self::Pronoun => "Pron",
      Self::Numeral => "Num",
      Self::Determiner => "Det",
      Self::PostPositive => "Postp",
      Self::Question => "Ques",
      Self::Duplicator => "Dup",
      Self::Punctuation => "Punc",
      Self::Unknown => "Unk",
    }
  }
}

impl fmt::Display for PrimaryPos {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.short_form())
  }
}

impl FromStr for PrimaryPos {
  type Err = LexiconError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|p| p.short_form() == s)
      .ok_or_else(|| LexiconError::UnknownPos(s.to_string()))
  }
}

/// Secondary part of speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecondaryPos {
  /// Unknown
  UnknownSec,
  /// Demonstrative pronoun
  DemonstrativePron,
  /// Time noun
  Time,
  /// Quantitive pronoun
  QuantitivePron,
  /// Question pronoun
  QuestionPron,
  /// Proper noun
  ProperNoun,
  /// Personal pronoun
  PersonalPron,
  /// Reflexive pronoun
  ReflexivePron,
  /// No secondary POS
  None,
  /// Ordinal number
  Ordinal,
  /// Cardinal number
  Cardinal,
  /// Percentage
  Percentage,
  /// Ratio
  Ratio,
  /// Range
  Range,
  /// Real number
  Real,
  /// Distribution
  Distribution,
  /// Clock time
  Clock,
  /// Date
  Date,
  /// E-mail address
  Email,
  /// URL
  Url,
  /// Mention (@user)
  Mention,
  /// Hashtag
  HashTag,
  /// Emoticon
  Emoticon,
  /// Roman numeral
  RomanNumeral,
  /// Regular abbreviation
  RegularAbbreviation,
  /// Abbreviation
  Abbreviation,
  /// Postpositive governing dative
  PCDat,
  /// Postpositive governing accusative
  PCAcc,
  /// Postpositive governing instrumental
  PCIns,
  /// Postpositive governing nominative
  PCNom,
  /// Postpositive governing genitive
  PCGen,
  /// Postpositive governing ablative
  PCAbl,
}

impl SecondaryPos {
  /// All values.
  pub const ALL: [SecondaryPos; 32] = [
    Self::UnknownSec,
    Self::DemonstrativePron,
    Self::Time,
    Self::QuantitivePron,
    Self::QuestionPron,
    Self::ProperNoun,
    Self::PersonalPron,
    Self::ReflexivePron,
    Self::None,
    Self::Ordinal,
    Self::Cardinal,
    Self::Percentage,
    Self::Ratio,
    Self::Range,
    Self::Real,
    Self::Distribution,
    Self::Clock,
    Self::Date,
    Self::Email,
    Self::Url,
    Self::Mention,
    Self::HashTag,
    Self::Emoticon,
    Self::RomanNumeral,
    Self::RegularAbbreviation,
    Self::Abbreviation,
    Self::PCDat,
    Self::PCAcc,
    Self::PCIns,
    Self::PCNom,
    Self::PCGen,
    Self::PCAbl,
  ];

  /// Short form used in ids and formatted output.
  pub fn short_form(&self) -> &'static str {
    match self {
      Self::UnknownSec => "Unk",
      Self::DemonstrativePron => "Demons",
      Self::Time => "Time",
      Self::QuantitivePron => "Quant",
      Self::QuestionPron => "Ques",
      Self::ProperNoun => "Prop",
      Self::PersonalPron => "Pers",
      Self::ReflexivePron => "Reflex",
      Self::None => "None",
      Self::Ordinal => "Ord",
      Self::Cardinal => "Card",
      Self::Percentage => "Percent",
      Self::Ratio => "Ratio",
      Self::Range => "Range",
      Self::Real => "Real",
      Self::Distribution => "Dist",
      Self::Clock => "Clock",
      Self::Date => "Date",
      Self::Email => "Email",
      Self::Url => "Url",
      Self::Mention => "Mention",
      Self::HashTag => "HashTag",
      Self::Emoticon => "Emoticon",
      Self::RomanNumeral => "RomanNumeral",
      Self::RegularAbbreviation => "RegAbbrv",
      Self::Abbreviation => "Abbrv",
      Self::PCDat => "PCDat",
      Self::PCAcc => "PCAcc",
      Self::PCIns => "PCIns",
      Self::PCNom => "PCNom",
      Self::PCGen => "PCGen",
      Self::PCAbl => "PCAbl",
    }
  }
}

impl fmt::Display for SecondaryPos {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.short_form())
  }
}

impl FromStr for SecondaryPos {
  type Err = LexiconError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|p| p.short_form() == s)
      .ok_or_else(|| LexiconError::UnknownPos(s.to_string()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn short_forms_round_trip() {
    for p in PrimaryPos::ALL {
      assert_eq!(p.short_form().parse::<PrimaryPos>().unwrap(), p);
    }
    for p in SecondaryPos::ALL {
      assert_eq!(p.short_form().parse::<SecondaryPos>().unwrap(), p);
    }
  }

  #[test]
  fn unknown_short_form_is_rejected() {
    match "Nn".parse::<PrimaryPos>() {
      Err(LexiconError::UnknownPos(s)) => assert_eq!(s, "Nn"),
      other => panic!("expected UnknownPos, got {other:?}"),
    }
  }
}
