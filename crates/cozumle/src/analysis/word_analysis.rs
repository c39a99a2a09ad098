//! All analyses of one input word.

use std::slice;

use super::single_analysis::SingleAnalysis;

/// Result of analyzing one word: the raw input, the form that was analyzed and every
/// accepted analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordAnalysis {
  input: String,
  normalized_input: String,
  analyses: Vec<SingleAnalysis>,
}

impl WordAnalysis {
  /// Creates a result.
  pub fn new(
    input: impl Into<String>,
    normalized_input: impl Into<String>,
    analyses: Vec<SingleAnalysis>,
  ) -> Self {
    Self { input: input.into(), normalized_input: normalized_input.into(), analyses }
  }

  /// Result without analyses. The input doubles as the normalized form.
  pub fn empty(input: impl Into<String>) -> Self {
    let input = input.into();
    Self { normalized_input: input.clone(), input, analyses: Vec::new() }
  }

  /// Raw input
  pub fn input(&self) -> &str {
    &self.input
  }

  /// Form handed to the analyzer
  pub fn normalized_input(&self) -> &str {
    &self.normalized_input
  }

  /// Analyses in the order they were found
  pub fn analyses(&self) -> &[SingleAnalysis] {
    &self.analyses
  }

  /// True if the word has at least one analysis with a known root.
  pub fn is_correct(&self) -> bool {
    self.analyses.first().is_some_and(|a| !a.is_unknown())
  }

  /// Number of analyses
  pub fn len(&self) -> usize {
    self.analyses.len()
  }

  /// True if empty
  pub fn is_empty(&self) -> bool {
    self.analyses.is_empty()
  }

  /// Iterator
  pub fn iter(&self) -> slice::Iter<'_, SingleAnalysis> {
    self.analyses.iter()
  }

  /// Consumes the result and returns the analyses.
  pub fn into_analyses(self) -> Vec<SingleAnalysis> {
    self.analyses
  }
}

impl<'a> IntoIterator for &'a WordAnalysis {
  type Item = &'a SingleAnalysis;
  type IntoIter = slice::Iter<'a, SingleAnalysis>;

  fn into_iter(self) -> Self::IntoIter {
    self.analyses.iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::lexicon::load_text;
  use crate::morphotactics::TurkishMorphotactics;
  use std::sync::Arc;

  #[test]
  fn correctness_depends_on_first_analysis() {
    let mt = TurkishMorphotactics::new(Arc::new(load_text("kalem").unwrap())).unwrap();
    assert!(!WordAnalysis::empty("xyz").is_correct());

    let unknown = WordAnalysis::new("xyz", "xyz", vec![SingleAnalysis::unknown("xyz", &mt)]);
    assert!(!unknown.is_correct());
    assert_eq!(unknown.len(), 1);

    let item = Arc::clone(mt.lexicon().get_item_by_id("kalem_Noun").unwrap());
    let known =
      WordAnalysis::new("Kalem", "kalem", vec![SingleAnalysis::dummy("kalem", item, &mt)]);
    assert!(known.is_correct());
    assert_eq!(known.input(), "Kalem");
    assert_eq!(known.normalized_input(), "kalem");
    assert_eq!((&known).into_iter().count(), 1);
  }
}
