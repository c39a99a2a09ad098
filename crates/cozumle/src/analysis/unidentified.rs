//! Analyses for tokens the lexicon does not cover: proper nouns with suffixes, numbers,
//! Roman numerals, abbreviations, hashtags and the like.
//!
//! Most paths create a temporary dictionary item for the token, add it to the stem index,
//! run the rule-based analyzer and remove the item again before returning.

use std::sync::Arc;

use tracing::debug;

use crate::alphabet;
use crate::errors::MorphotacticsError;
use crate::lexicon::{DictionaryItem, PrimaryPos, RootAttribute, RootAttributes, SecondaryPos};

use super::analyzer::RuleBasedAnalyzer;
use super::numerals::{self, NumeralKind};
use super::pronunciation;
use super::single_analysis::SingleAnalysis;
use super::token_kind::TokenKind;

/// Falls back to shape-based analysis when the rule-based analyzer finds nothing.
pub struct UnidentifiedTokenAnalyzer {
  analyzer: Arc<RuleBasedAnalyzer>,
}

impl UnidentifiedTokenAnalyzer {
  /// Wraps the analyzer whose stem index receives the runtime items.
  pub fn new(analyzer: Arc<RuleBasedAnalyzer>) -> Self {
    Self { analyzer }
  }

  /// Analyzes a raw token, casing intact.
  ///
  /// An empty result means the token could not be interpreted.
  pub fn analyze(&self, token: &str) -> Result<Vec<SingleAnalysis>, MorphotacticsError> {
    let token = alphabet::normalize_apostrophe(token);
    let token = token.as_ref();
    let kind = TokenKind::classify(token);
    debug!(token, ?kind, "Analyzing unidentified token");

    match kind {
      TokenKind::Word | TokenKind::Number => {
        if token.contains('?') {
          Ok(Vec::new())
        } else if alphabet::contains_digit(token) {
          self.try_numeral(token)
        } else {
          let secondary_pos =
            if token.contains('.') { SecondaryPos::Abbreviation } else { SecondaryPos::ProperNoun };
          self.analyze_word(token, secondary_pos)
        }
      }
      TokenKind::RomanNumeral => self.try_roman_numeral(token),
      TokenKind::Date | TokenKind::Time => self.try_numeral(token),
      TokenKind::HashTag | TokenKind::Email | TokenKind::Url | TokenKind::Mention => {
        self.analyze_word(token, kind.secondary_pos().unwrap_or(SecondaryPos::None))
      }
      TokenKind::Emoticon | TokenKind::Abbreviation => {
        let secondary_pos = kind.secondary_pos().unwrap_or(SecondaryPos::None);
        let letters: String = token.chars().filter(|c| alphabet::is_letter(*c)).collect();
        let item = DictionaryItem::new(
          token,
          token,
          PrimaryPos::Noun,
          secondary_pos,
          RootAttributes::empty(),
          Some(&letters),
          0,
        );
        self.analyze_with_runtime_item(item, token)
      }
    }
  }

  /// Runs the analyzer with `item` temporarily in the stem index. Items already in the
  /// lexicon are not added again.
  fn analyze_with_runtime_item(
    &self,
    item: DictionaryItem,
    input: &str,
  ) -> Result<Vec<SingleAnalysis>, MorphotacticsError> {
    let morphotactics = self.analyzer.morphotactics();
    if morphotactics.lexicon().contains(&item) {
      return self.analyzer.analyze(input);
    }
    let item = Arc::new(item.with_attribute(RootAttribute::Runtime));
    morphotactics.add_runtime_item(&item)?;
    let result = self.analyzer.analyze(input);
    morphotactics.remove_runtime_item(&item)?;
    result
  }

  fn analyze_word(
    &self,
    word: &str,
    secondary_pos: SecondaryPos,
  ) -> Result<Vec<SingleAnalysis>, MorphotacticsError> {
    if word.contains('\'') {
      return self.try_word_with_apostrophe(word, secondary_pos);
    }
    if is_name_like(secondary_pos) && !word.chars().next().is_some_and(char::is_uppercase) {
      return Ok(Vec::new());
    }
    self.try_without_apostrophe(word, secondary_pos)
  }

  fn try_without_apostrophe(
    &self,
    word: &str,
    secondary_pos: SecondaryPos,
  ) -> Result<Vec<SingleAnalysis>, MorphotacticsError> {
    let folded = if alphabet::contains_foreign_diacritics(word) {
      alphabet::foreign_diacritics_to_turkish(word)
    } else {
      word.to_string()
    };
    let normalized = alphabet::normalize(&folded);
    let pronunciation = pronunciation::guess(&normalized.replace('.', ""));
    let lemma = if is_name_like(secondary_pos) {
      alphabet::capitalize(&normalized)
    } else {
      normalized.clone()
    };
    let item = DictionaryItem::new(
      lemma,
      normalized.as_str(),
      PrimaryPos::Noun,
      secondary_pos,
      RootAttributes::of(&[RootAttribute::Runtime]),
      Some(&pronunciation),
      0,
    );

    if alphabet::contains_vowel(&pronunciation) {
      let morphotactics = self.analyzer.morphotactics();
      return Ok(vec![SingleAnalysis::dummy(word, Arc::new(item), morphotactics)]);
    }
    self.analyze_with_runtime_item(item, &normalized)
  }

  fn try_word_with_apostrophe(
    &self,
    word: &str,
    secondary_pos: SecondaryPos,
  ) -> Result<Vec<SingleAnalysis>, MorphotacticsError> {
    let Some((stem, ending)) = word.split_once('\'') else {
      return Ok(Vec::new());
    };
    if stem.is_empty() || ending.is_empty() {
      return Ok(Vec::new());
    }

    let stem_normalized = alphabet::normalize(stem).replace('.', "");
    let ending_normalized = alphabet::normalize(ending);
    let pronunciation = pronunciation::guess(&stem_normalized);
    let pronounceable = alphabet::contains_vowel(&pronunciation);
    let lemma = if is_name_like(secondary_pos) {
      alphabet::capitalize(&stem_normalized)
    } else if pronounceable {
      stem.to_string()
    } else {
      word.to_string()
    };
    let item = DictionaryItem::new(
      lemma,
      stem_normalized.as_str(),
      PrimaryPos::Noun,
      secondary_pos,
      RootAttributes::empty(),
      Some(&pronunciation),
      0,
    );

    if !pronounceable {
      let item = Arc::new(item.with_attribute(RootAttribute::Runtime));
      return Ok(vec![SingleAnalysis::dummy(word, item, self.analyzer.morphotactics())]);
    }

    let input = format!("{stem_normalized}{ending_normalized}");
    let analyses = self.analyze_with_runtime_item(item, &input)?;
    Ok(analyses.into_iter().filter(|a| a.stem() == stem_normalized).collect())
  }

  /// Analyzes `to_parse` and keeps the numeral readings, re-keyed onto a runtime item
  /// whose lemma is the written number.
  fn numeral_readings(
    &self,
    to_parse: &str,
    stem: &str,
    lemma: &str,
    secondary_pos: SecondaryPos,
  ) -> Result<Vec<SingleAnalysis>, MorphotacticsError> {
    let item = Arc::new(DictionaryItem::new(
      stem,
      stem,
      PrimaryPos::Numeral,
      secondary_pos,
      RootAttributes::of(&[RootAttribute::Runtime]),
      Some(lemma),
      0,
    ));
    Ok(
      self
        .analyzer
        .analyze(to_parse)?
        .iter()
        .filter(|a| a.item().primary_pos == PrimaryPos::Numeral)
        .map(|a| a.copy_for(Arc::clone(&item), stem))
        .collect(),
    )
  }

  fn try_numeral(&self, token: &str) -> Result<Vec<SingleAnalysis>, MorphotacticsError> {
    let lowered = alphabet::to_lowercase(token);
    let (stem, ending) = numerals::split_numeral(&lowered);
    let lemma = match stem.strip_suffix('.') {
      Some(number) => numerals::ordinal_of(numerals::numeral_ending(number)),
      None => Some(numerals::numeral_ending(stem)).filter(|l| !l.is_empty()),
    };
    let Some(lemma) = lemma else {
      return Ok(Vec::new());
    };

    let to_parse = numeral_surface(lemma, ending);
    let mut results = Vec::new();
    for kind in NumeralKind::matching(stem) {
      results.extend(self.numeral_readings(&to_parse, stem, lemma, kind.secondary_pos())?);
    }
    Ok(results)
  }

  fn try_roman_numeral(&self, token: &str) -> Result<Vec<SingleAnalysis>, MorphotacticsError> {
    let (stem, ending) = token.split_once('\'').unwrap_or((token, ""));
    let ordinal = stem.ends_with('.');
    let Some(decimal) = numerals::roman_to_decimal(stem.trim_end_matches('.')) else {
      return Ok(Vec::new());
    };
    let cardinal = numerals::numeral_ending(&decimal.to_string());
    let lemma = if ordinal { numerals::ordinal_of(cardinal) } else { Some(cardinal) };
    let Some(lemma) = lemma else {
      return Ok(Vec::new());
    };

    let ending = alphabet::to_lowercase(ending);
    let to_parse = numeral_surface(lemma, &ending);
    self.numeral_readings(&to_parse, stem, lemma, SecondaryPos::RomanNumeral)
  }
}

fn is_name_like(secondary_pos: SecondaryPos) -> bool {
  matches!(secondary_pos, SecondaryPos::ProperNoun | SecondaryPos::Abbreviation)
}

/// Numeral word followed by `ending`, with `dört` voiced before a vowel.
fn numeral_surface(lemma: &str, ending: &str) -> String {
  if lemma == "dört" && ending.chars().next().is_some_and(alphabet::is_vowel) {
    format!("dörd{ending}")
  } else {
    format!("{lemma}{ending}")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::lexicon::load_core_lexicon;
  use crate::morphotactics::TurkishMorphotactics;

  fn analyzer() -> UnidentifiedTokenAnalyzer {
    let lexicon = Arc::new(load_core_lexicon().unwrap());
    let morphotactics = Arc::new(TurkishMorphotactics::new(lexicon).unwrap());
    UnidentifiedTokenAnalyzer::new(Arc::new(RuleBasedAnalyzer::new(morphotactics)))
  }

  #[test]
  fn dört_is_voiced_before_vowels() {
    assert_eq!(numeral_surface("dört", "e"), "dörde");
    assert_eq!(numeral_surface("dört", "te"), "dörtte");
    assert_eq!(numeral_surface("beş", "e"), "beşe");
  }

  #[test]
  fn numbers_with_suffixes() {
    let analyzer = analyzer();
    let results = analyzer.analyze("4'e").unwrap();
    assert!(!results.is_empty());
    for analysis in &results {
      assert_eq!(analysis.item().lemma, "4");
      assert_eq!(analysis.item().secondary_pos, SecondaryPos::Cardinal);
      assert!(analysis.is_runtime());
      assert_eq!(analysis.stem(), "4");
      assert_eq!(analysis.ending(), "e");
    }

    let results = analyzer.analyze("1500'den").unwrap();
    assert!(results.iter().any(|a| a.ending() == "den"));
  }

  #[test]
  fn ordinals_and_roman_numerals() {
    let analyzer = analyzer();
    let results = analyzer.analyze("15.").unwrap();
    assert!(results.iter().any(|a| a.item().secondary_pos == SecondaryPos::Ordinal));

    let results = analyzer.analyze("XIV").unwrap();
    assert!(!results.is_empty());
    assert!(results.iter().all(|a| a.item().secondary_pos == SecondaryPos::RomanNumeral));
  }

  #[test]
  fn proper_noun_with_apostrophe_is_injected_and_retracted() {
    let analyzer = analyzer();
    let results = analyzer.analyze("Zonguldak'ta").unwrap();
    assert!(!results.is_empty());
    for analysis in &results {
      assert_eq!(analysis.item().lemma, "Zonguldak");
      assert_eq!(analysis.item().secondary_pos, SecondaryPos::ProperNoun);
      assert_eq!(analysis.stem(), "zonguldak");
      assert!(analysis.is_runtime());
    }
    let stems = analyzer.analyzer.morphotactics().stem_transitions();
    assert!(stems.get_transitions("zonguldak").is_empty());
  }

  #[test]
  fn same_proper_noun_from_many_threads() {
    let analyzer = analyzer();
    let expected = analyzer.analyze("Zonguldak'ta").unwrap().len();
    assert!(expected > 0);
    std::thread::scope(|scope| {
      for _ in 0..8 {
        scope.spawn(|| {
          for _ in 0..20 {
            assert_eq!(analyzer.analyze("Zonguldak'ta").unwrap().len(), expected);
          }
        });
      }
    });
    let stems = analyzer.analyzer.morphotactics().stem_transitions();
    assert!(stems.get_transitions("zonguldak").is_empty());
  }

  #[test]
  fn capitalized_and_vowelless_words() {
    let analyzer = analyzer();
    let results = analyzer.analyze("Zonguldak").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item().lemma, "Zonguldak");

    let results = analyzer.analyze("TBMM'ye").unwrap();
    assert!(!results.is_empty());
    assert_eq!(results[0].item().pronunciation, "tebememe");
    assert_eq!(results[0].ending(), "ye");

    assert!(analyzer.analyze("zzxqq").unwrap().is_empty());
  }

  #[test]
  fn hashtags_and_emoticons() {
    let analyzer = analyzer();
    let results = analyzer.analyze("#istanbul").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item().secondary_pos, SecondaryPos::HashTag);

    let results = analyzer.analyze(":)").unwrap();
    assert!(results.iter().all(|a| a.item().secondary_pos == SecondaryPos::Emoticon));
  }
}
