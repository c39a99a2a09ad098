//! Rewrites colloquial analyses (`geliyom`) into their formal words (`geliyorum`).

use std::sync::Arc;

use tracing::debug;

use crate::analysis::SingleAnalysis;
use crate::errors::CozumleResult;

use super::word_generator::{GenerationResult, WordGenerator};

/// Converts informal analyses to formal ones by regenerating them with formal morphemes.
pub struct InformalAnalysisConverter {
  generator: Arc<WordGenerator>,
}

impl InformalAnalysisConverter {
  /// Creates a converter that generates with `generator`.
  pub fn new(generator: Arc<WordGenerator>) -> Self {
    Self { generator }
  }

  /// Formal word and analysis for `analysis`.
  ///
  /// Formal analyses come back unchanged with `input` as their surface. `None` means the
  /// formal morpheme sequence cannot be generated.
  pub fn convert(
    &self,
    input: &str,
    analysis: &SingleAnalysis,
  ) -> CozumleResult<Option<GenerationResult>> {
    if !analysis.contains_informal_morpheme() {
      return Ok(Some(GenerationResult { surface: input.to_string(), analysis: analysis.clone() }));
    }
    let formal: Vec<_> = analysis
      .morpheme_data()
      .iter()
      .map(|m| match m.morpheme.mapped_morpheme {
        Some(mapped) if m.morpheme.informal => mapped,
        _ => m.morpheme_id,
      })
      .collect();
    let mut results = self.generator.generate(analysis.item(), &formal)?;
    if results.is_empty() {
      debug!(input, analysis = %analysis, "No formal form for informal analysis");
      return Ok(None);
    }
    Ok(Some(results.swap_remove(0)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::analysis::RuleBasedAnalyzer;
  use crate::lexicon::load_text;
  use crate::morphotactics::TurkishMorphotactics;

  fn setup() -> (RuleBasedAnalyzer, InformalAnalysisConverter) {
    let lexicon = Arc::new(load_text("gelmek\nokumak\nev").unwrap());
    let mt = Arc::new(TurkishMorphotactics::informal(lexicon).unwrap());
    let generator = Arc::new(WordGenerator::new(Arc::clone(&mt)));
    (RuleBasedAnalyzer::new(mt), InformalAnalysisConverter::new(generator))
  }

  #[test]
  fn informal_progressive_becomes_formal() {
    let (analyzer, converter) = setup();
    let analyses = analyzer.analyze("geliyom").unwrap();
    assert!(analyses.iter().any(SingleAnalysis::contains_informal_morpheme), "{analyses:?}");
    let converted: Vec<String> = analyses
      .iter()
      .filter_map(|a| converter.convert("geliyom", a).unwrap())
      .map(|r| r.surface)
      .collect();
    assert!(converted.contains(&"geliyorum".to_string()), "{converted:?}");
  }

  #[test]
  fn formal_analysis_is_returned_as_is() {
    let (analyzer, converter) = setup();
    let analysis = analyzer.analyze("evde").unwrap().remove(0);
    let result = converter.convert("evde", &analysis).unwrap().unwrap();
    assert_eq!(result.surface, "evde");
    assert_eq!(result.analysis, analysis);
  }
}
