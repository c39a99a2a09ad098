//! Generates surface forms from a lexicon item and a morpheme sequence.
//!
//! The search walks the same graph as the analyzer, but instead of consuming input it consumes
//! morphemes. A transition is taken only if it leads to the next morpheme still to produce, or
//! if it has no surface at all.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::alphabet::PhoneticAttribute;
use crate::analysis::surface::attributes_after;
use crate::analysis::{
  LexicalTransition, SearchPath, SingleAnalysis, SurfaceTransition, generate_surface,
};
use crate::errors::{CozumleResult, GenerationError};
use crate::lexicon::DictionaryItem;
use crate::morphotactics::{MorphemeId, StemTransition, SuffixTransition, TurkishMorphotactics};

/// Generation paths entering a state more often than this are dropped.
const MAX_STATE_VISITS: usize = 3;

/// One generated word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
  /// Generated word
  pub surface: String,
  /// Analysis the word was generated along
  pub analysis: SingleAnalysis,
}

impl fmt::Display for GenerationResult {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}-{}", self.surface, self.analysis)
  }
}

/// Search path plus the morphemes it still has to produce.
struct GenerationPath<'m> {
  path: SearchPath,
  morphemes: &'m [MorphemeId],
}

impl<'m> GenerationPath<'m> {
  fn copy(&self, path: SearchPath, mt: &TurkishMorphotactics) -> Result<Self, GenerationError> {
    let last = path.last_transition();
    let morpheme = mt.graph().state(last.state).morpheme;
    if last.surface.is_empty() {
      let morphemes = match self.morphemes.split_first() {
        Some((first, rest)) if *first == morpheme => rest,
        _ => self.morphemes,
      };
      return Ok(Self { path, morphemes });
    }
    match self.morphemes.split_first() {
      Some((first, rest)) if *first == morpheme => Ok(Self { path, morphemes: rest }),
      first => {
        let registry = mt.morphemes();
        Err(GenerationError::MorphemeMismatch {
          expected: first.map_or("-", |(m, _)| registry.id_of(*m)).to_string(),
          actual: registry.id_of(morpheme).to_string(),
        })
      }
    }
  }

  fn matches(&self, transition: &SuffixTransition, mt: &TurkishMorphotactics) -> bool {
    if !transition.has_surface_form() {
      return true;
    }
    self.morphemes.first().is_some_and(|m| *m == mt.graph().state(transition.to).morpheme)
  }
}

/// Builds words from lexicon items and morpheme ids.
pub struct WordGenerator {
  morphotactics: Arc<TurkishMorphotactics>,
}

impl WordGenerator {
  /// Creates a generator over `morphotactics`.
  pub fn new(morphotactics: Arc<TurkishMorphotactics>) -> Self {
    Self { morphotactics }
  }

  /// Morphotactics the generator walks.
  pub fn morphotactics(&self) -> &Arc<TurkishMorphotactics> {
    &self.morphotactics
  }

  /// Generates every word for `item` followed by `morphemes`.
  ///
  /// The root morpheme may be given or left out. An empty result means the graph has no path
  /// for the sequence.
  ///
  /// ```
  /// use std::sync::Arc;
  /// use cozumle::generator::WordGenerator;
  /// use cozumle::lexicon::load_text;
  /// use cozumle::morphotactics::TurkishMorphotactics;
  ///
  /// let lexicon = Arc::new(load_text("kitap").unwrap());
  /// let mt = Arc::new(TurkishMorphotactics::new(Arc::clone(&lexicon)).unwrap());
  /// let generator = WordGenerator::new(mt);
  /// let item = lexicon.get_item_by_id("kitap_Noun").unwrap();
  /// let words = generator.generate_by_ids(item, &["A3pl", "P1sg"]).unwrap();
  /// assert_eq!(words[0].surface, "kitaplarım");
  /// ```
  pub fn generate(
    &self,
    item: &DictionaryItem,
    morphemes: &[MorphemeId],
  ) -> CozumleResult<Vec<GenerationResult>> {
    let candidates = self.morphotactics.stem_transitions().get_transitions_for_item(item);
    self.generate_from_candidates(candidates, morphemes)
  }

  /// [`WordGenerator::generate`] with morphemes given by their short ids (`A3pl`, `P1sg`).
  pub fn generate_by_ids<S: AsRef<str>>(
    &self,
    item: &DictionaryItem,
    morpheme_ids: &[S],
  ) -> CozumleResult<Vec<GenerationResult>> {
    let morphemes = self.morphotactics.morphemes().require_all(morpheme_ids)?;
    self.generate(item, &morphemes)
  }

  /// Looks up `item_id` (`kitap_Noun`) in the lexicon, then generates.
  pub fn generate_for_id<S: AsRef<str>>(
    &self,
    item_id: &str,
    morpheme_ids: &[S],
  ) -> CozumleResult<Vec<GenerationResult>> {
    let item = self
      .morphotactics
      .lexicon()
      .get_item_by_id(item_id)
      .ok_or_else(|| GenerationError::ItemNotFound(item_id.to_string()))?;
    self.generate_by_ids(item, morpheme_ids)
  }

  /// Generates starting from an explicit set of stem transitions.
  pub fn generate_from_candidates(
    &self,
    candidates: Vec<StemTransition>,
    morphemes: &[MorphemeId],
  ) -> CozumleResult<Vec<GenerationResult>> {
    let mt = &*self.morphotactics;
    let graph = mt.graph();
    let paths: Vec<GenerationPath<'_>> = candidates
      .into_iter()
      .map(|stem| {
        let path = SearchPath::initial(stem, " ", graph);
        let root_morpheme = graph.state(path.current_state).morpheme;
        let rest = match morphemes.split_first() {
          Some((first, rest)) if *first == root_morpheme => rest,
          _ => morphemes,
        };
        GenerationPath { path, morphemes: rest }
      })
      .collect();

    let accepted = self.search(paths)?;
    debug!(morphemes = morphemes.len(), generated = accepted.len(), "Generation finished");

    Ok(
      accepted
        .into_iter()
        .map(|p| {
          let analysis = SingleAnalysis::from_search_path(&p.path, mt);
          GenerationResult { surface: analysis.surface_form(), analysis }
        })
        .collect(),
    )
  }

  fn search<'m>(
    &self,
    mut paths: Vec<GenerationPath<'m>>,
  ) -> CozumleResult<Vec<GenerationPath<'m>>> {
    let mut accepted = Vec::new();
    while !paths.is_empty() {
      paths.retain(|p| p.path.max_state_visits() <= MAX_STATE_VISITS);
      let mut next = Vec::new();
      for path in paths {
        if path.morphemes.is_empty()
          && path.path.terminal
          && !path.path.attributes.contains(PhoneticAttribute::CannotTerminate)
        {
          accepted.push(path);
          continue;
        }
        self.advance(&path, &mut next)?;
      }
      paths = next;
    }
    Ok(accepted)
  }

  fn advance<'m>(
    &self,
    gp: &GenerationPath<'m>,
    out: &mut Vec<GenerationPath<'m>>,
  ) -> CozumleResult<()> {
    let mt = &*self.morphotactics;
    let graph = mt.graph();
    let path = &gp.path;
    for &id in graph.state(path.current_state).outgoing() {
      let transition = graph.transition(id);
      if gp.morphemes.is_empty() && transition.has_surface_form() {
        continue;
      }
      if !gp.matches(transition, mt) || !transition.can_pass(path, graph) {
        continue;
      }

      let lexical = LexicalTransition::Suffix(id);
      if !transition.has_surface_form() {
        let step = SurfaceTransition::new("", transition.to, lexical);
        out.push(gp.copy(path.copy_for_generation(step, path.attributes, graph), mt)?);
        continue;
      }
      let surface = generate_surface(transition, path.attributes)?;
      let attributes = attributes_after(transition, &surface, path.attributes, false);
      let step = SurfaceTransition::new(surface, transition.to, lexical);
      out.push(gp.copy(path.copy_for_generation(step, attributes, graph), mt)?);
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::analysis::RuleBasedAnalyzer;
  use crate::errors::CozumleError;
  use crate::lexicon::load_text;

  fn setup(lines: &str) -> (WordGenerator, Arc<TurkishMorphotactics>) {
    let lexicon = Arc::new(load_text(lines).unwrap());
    let mt = Arc::new(TurkishMorphotactics::new(lexicon).unwrap());
    (WordGenerator::new(Arc::clone(&mt)), mt)
  }

  fn surfaces(results: &[GenerationResult]) -> Vec<&str> {
    results.iter().map(|r| r.surface.as_str()).collect()
  }

  #[test]
  fn plural_possessive() {
    let (generator, _) = setup("kitap");
    let results =
      generator.generate_for_id("kitap_Noun", &["Noun", "A3pl", "P1sg", "Nom"]).unwrap();
    assert_eq!(surfaces(&results), vec!["kitaplarım"]);
  }

  #[test]
  fn voiced_stem_before_vowel() {
    let (generator, _) = setup("kitap");
    let results = generator.generate_for_id("kitap_Noun", &["A3sg", "P1sg"]).unwrap();
    assert_eq!(surfaces(&results), vec!["kitabım"]);
  }

  #[test]
  fn re_adding_an_item_keeps_results_unique() {
    let (generator, mt) = setup("kitap");
    let analyzer = RuleBasedAnalyzer::new(Arc::clone(&mt));
    let before = analyzer.analyze("kitabım").unwrap().len();

    let kitap = Arc::clone(mt.lexicon().get_item_by_id("kitap_Noun").unwrap());
    mt.add_dictionary_item(&kitap).unwrap();
    let results = generator.generate_for_id("kitap_Noun", &["A3pl", "P1sg"]).unwrap();
    assert_eq!(surfaces(&results), vec!["kitaplarım"]);
    assert_eq!(analyzer.analyze("kitabım").unwrap().len(), before);
  }

  #[test]
  fn verb_forms() {
    let (generator, _) = setup("okumak");
    let results = generator.generate_for_id("okumak_Verb", &["Prog1", "A1sg"]).unwrap();
    assert_eq!(surfaces(&results), vec!["okuyorum"]);
    let results = generator.generate_for_id("okumak_Verb", &["Neg", "Past", "A3pl"]).unwrap();
    assert!(surfaces(&results).contains(&"okumadılar"), "{results:?}");
  }

  #[test]
  fn generated_words_analyze_back() {
    let (generator, mt) = setup("ev\nkalem\ngelmek");
    let analyzer = RuleBasedAnalyzer::new(Arc::clone(&mt));
    for word in ["evlerde", "kalemsiz", "geliyorum", "evdekiler"] {
      for analysis in analyzer.analyze(word).unwrap() {
        let generated = generator.generate(analysis.item(), &analysis.morphemes()).unwrap();
        assert!(
          generated.iter().any(|g| g.surface == word),
          "{word}: {analysis} -> {:?}",
          surfaces(&generated)
        );
      }
    }
  }

  #[test]
  fn impossible_sequence_gives_nothing() {
    let (generator, _) = setup("kalem");
    let results = generator.generate_for_id("kalem_Noun", &["Past", "Loc"]).unwrap();
    assert!(results.is_empty());
  }

  #[test]
  fn unknown_ids_are_errors() {
    let (generator, _) = setup("kalem");
    match generator.generate_for_id("yok_Noun", &["A3sg"]) {
      Err(CozumleError::Generation(GenerationError::ItemNotFound(id))) => {
        assert_eq!(id, "yok_Noun")
      }
      other => panic!("expected ItemNotFound, got {other:?}"),
    }
    match generator.generate_for_id("kalem_Noun", &["Nope"]) {
      Err(CozumleError::Morphotactics(e)) => assert!(e.to_string().contains("Nope")),
      other => panic!("expected UnknownMorpheme, got {other:?}"),
    }
  }
}
