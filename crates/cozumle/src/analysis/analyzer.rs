//! Rule-based analyzer: breadth-first search over the morphotactics graph.

use std::sync::Arc;

use tracing::debug;

use crate::alphabet::{self, PhoneticAttribute};
use crate::errors::MorphotacticsError;
use crate::morphotactics::TurkishMorphotactics;

use super::search_path::SearchPath;
use super::single_analysis::SingleAnalysis;
use super::surface::{LexicalTransition, SurfaceTransition, attributes_after, generate_surface};

/// Active path count above which cyclic paths are pruned.
const PRUNE_THRESHOLD: usize = 30;
/// Maximum number of times a path may enter the same state once pruning is active.
const MAX_STATE_VISITS: usize = 3;

/// Finds every decomposition of a word that the morphotactics accepts.
pub struct RuleBasedAnalyzer {
  morphotactics: Arc<TurkishMorphotactics>,
  ascii_tolerant: bool,
}

impl RuleBasedAnalyzer {
  /// Analyzer that matches stems and suffixes exactly.
  pub fn new(morphotactics: Arc<TurkishMorphotactics>) -> Self {
    Self { morphotactics, ascii_tolerant: false }
  }

  /// Analyzer that treats `c`/`ç`, `g`/`ğ`, `i`/`ı`, `o`/`ö`, `s`/`ş` and `u`/`ü` as equal.
  pub fn ignoring_diacritics(morphotactics: Arc<TurkishMorphotactics>) -> Self {
    Self { morphotactics, ascii_tolerant: true }
  }

  /// Morphotactics the analyzer searches.
  pub fn morphotactics(&self) -> &Arc<TurkishMorphotactics> {
    &self.morphotactics
  }

  /// True for the diacritics-insensitive variant.
  pub fn is_ascii_tolerant(&self) -> bool {
    self.ascii_tolerant
  }

  /// Analyzes an already normalized word.
  ///
  /// No analysis is an empty vector, not an error. Errors mean the graph produced a template
  /// it cannot realize.
  pub fn analyze(&self, input: &str) -> Result<Vec<SingleAnalysis>, MorphotacticsError> {
    let graph = self.morphotactics.graph();
    let candidates =
      self.morphotactics.stem_transitions().get_prefix_matches(input, self.ascii_tolerant);
    let candidate_count = candidates.len();

    let paths: Vec<SearchPath> = candidates
      .into_iter()
      .map(|stem| {
        let tail: String = input.chars().skip(stem.surface.chars().count()).collect();
        SearchPath::initial(stem, tail, graph)
      })
      .collect();

    let (accepted, pruned) = self.search(paths)?;
    debug!(
      input,
      candidates = candidate_count,
      accepted = accepted.len(),
      pruned,
      "Analysis finished"
    );

    Ok(accepted.iter().map(|p| SingleAnalysis::from_search_path(p, &self.morphotactics)).collect())
  }

  /// Expands `paths` level by level and returns the accepted ones plus the number of pruned
  /// paths.
  fn search(
    &self,
    mut paths: Vec<SearchPath>,
  ) -> Result<(Vec<SearchPath>, usize), MorphotacticsError> {
    let mut accepted = Vec::new();
    let mut pruned = 0;
    while !paths.is_empty() {
      pruned += prune_cycles(&mut paths);
      let mut next = Vec::new();
      for path in paths {
        if path.tail.is_empty()
          && path.terminal
          && !path.attributes.contains(PhoneticAttribute::CannotTerminate)
        {
          accepted.push(path);
          continue;
        }
        self.advance(&path, &mut next)?;
      }
      paths = next;
    }
    Ok((accepted, pruned))
  }

  fn advance(
    &self,
    path: &SearchPath,
    out: &mut Vec<SearchPath>,
  ) -> Result<(), MorphotacticsError> {
    let graph = self.morphotactics.graph();
    for &id in graph.state(path.current_state).outgoing() {
      let transition = graph.transition(id);
      if path.tail.is_empty() && transition.has_surface_form() {
        continue;
      }
      let surface = generate_surface(transition, path.attributes)?;
      let matches = if self.ascii_tolerant {
        alphabet::starts_with_ignore_diacritics(&path.tail, &surface)
      } else {
        path.tail.starts_with(&surface)
      };
      if !matches || !transition.can_pass(path, graph) {
        continue;
      }

      let lexical = LexicalTransition::Suffix(id);
      if !transition.has_surface_form() {
        let step = SurfaceTransition::new("", transition.to, lexical);
        out.push(path.copy(step, path.attributes, graph));
        continue;
      }
      let consumes_tail = if self.ascii_tolerant {
        alphabet::equals_ignore_diacritics(&path.tail, &surface)
      } else {
        path.tail == surface
      };
      let attributes = attributes_after(transition, &surface, path.attributes, consumes_tail);
      let step = SurfaceTransition::new(surface, transition.to, lexical);
      out.push(path.copy(step, attributes, graph));
    }
    Ok(())
  }
}

/// Drops paths that entered a state more than [`MAX_STATE_VISITS`] times, but only while more
/// than [`PRUNE_THRESHOLD`] paths are active. Returns the number of dropped paths.
fn prune_cycles(paths: &mut Vec<SearchPath>) -> usize {
  if paths.len() <= PRUNE_THRESHOLD {
    return 0;
  }
  let before = paths.len();
  paths.retain(|p| p.max_state_visits() <= MAX_STATE_VISITS);
  before - paths.len()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::lexicon::load_text;

  fn analyzer(lines: &str) -> RuleBasedAnalyzer {
    let lexicon = Arc::new(load_text(lines).unwrap());
    RuleBasedAnalyzer::new(Arc::new(TurkishMorphotactics::new(lexicon).unwrap()))
  }

  fn formatted(analyzer: &RuleBasedAnalyzer, word: &str) -> Vec<String> {
    analyzer.analyze(word).unwrap().iter().map(SingleAnalysis::format_long).collect()
  }

  #[test]
  fn plural_locative() {
    let analyzer = analyzer("ev");
    let results = formatted(&analyzer, "evlerde");
    assert!(results.contains(&"[ev:Noun] ev:Noun+ler:A3pl+de:Loc".to_string()), "{results:?}");
  }

  #[test]
  fn genitive_and_possessive_readings() {
    let analyzer = analyzer("kalem");
    let results = analyzer.analyze("kalemin").unwrap();
    assert!(results.len() >= 2);
    for analysis in &results {
      assert_eq!(analysis.item().lemma, "kalem");
      assert_eq!(analysis.surface_form(), "kalemin");
      assert_eq!(analysis.ending(), "in");
    }
  }

  #[test]
  fn voiced_stem_and_possessive() {
    let analyzer = analyzer("kitap");
    let results = formatted(&analyzer, "kitabım");
    assert!(results.contains(&"[kitap:Noun] kitab:Noun+A3sg+ım:P1sg".to_string()), "{results:?}");
    assert!(analyzer.analyze("kitapım").unwrap().is_empty());
  }

  #[test]
  fn negative_ability_past() {
    let analyzer = analyzer("okumak");
    let results = analyzer.analyze("okuyamadım").unwrap();
    let m = analyzer.morphotactics().morphemes();
    let found = results
      .iter()
      .any(|a| {
        a.contains_morpheme(m.unable) && a.contains_morpheme(m.past) && a.contains_morpheme(m.a1sg)
      });
    assert!(found, "{results:?}");
  }

  #[test]
  fn unknown_word_has_no_analysis() {
    let analyzer = analyzer("kalem\nev");
    assert!(analyzer.analyze("zzxqq").unwrap().is_empty());
    assert!(analyzer.analyze("").unwrap().is_empty());
  }

  #[test]
  fn results_are_deterministic() {
    let analyzer = analyzer("kalem\nkale\nalmak");
    let first = formatted(&analyzer, "kalemler");
    let second = formatted(&analyzer, "kalemler");
    assert_eq!(first, second);
  }

  #[test]
  fn accepted_surfaces_rebuild_the_input() {
    let analyzer = analyzer("gelmek\nev\nkalem");
    for word in ["geliyorum", "evdekiler", "kalemsiz", "gelecekmiş"] {
      for analysis in analyzer.analyze(word).unwrap() {
        assert_eq!(analysis.surface_form(), word, "{analysis}");
      }
    }
  }

  #[test]
  fn diacritics_are_ignored_when_asked() {
    let lexicon = Arc::new(load_text("çiçek").unwrap());
    let mt = Arc::new(TurkishMorphotactics::new(lexicon).unwrap());
    let exact = RuleBasedAnalyzer::new(Arc::clone(&mt));
    let tolerant = RuleBasedAnalyzer::ignoring_diacritics(mt);
    assert!(exact.analyze("cicekler").unwrap().is_empty());
    let results = tolerant.analyze("cicekler").unwrap();
    assert!(results.iter().any(|a| a.item().lemma == "çiçek"));
  }

  // Paths that loop on the stem state `visits` times.
  fn looping_paths(analyzer: &RuleBasedAnalyzer, count: usize, visits: usize) -> Vec<SearchPath> {
    let graph = analyzer.morphotactics().graph();
    let stem = analyzer.morphotactics().stem_transitions().get_prefix_matches("kalem", false);
    let stem = stem.into_iter().next().unwrap();
    (0..count)
      .map(|_| {
        let mut path = SearchPath::initial(stem.clone(), "", graph);
        for _ in 1..visits {
          let step = SurfaceTransition::new("", stem.to, LexicalTransition::Stem);
          path = path.copy(step, path.attributes, graph);
        }
        path
      })
      .collect()
  }

  #[test]
  fn cyclic_paths_are_pruned_above_threshold() {
    let analyzer = analyzer("kalem");
    let mut paths = looping_paths(&analyzer, 20, MAX_STATE_VISITS + 1);
    paths.extend(looping_paths(&analyzer, 11, MAX_STATE_VISITS));
    assert_eq!(paths.len(), PRUNE_THRESHOLD + 1);

    assert_eq!(prune_cycles(&mut paths), 20);
    assert_eq!(paths.len(), 11);
    assert!(paths.iter().all(|p| p.max_state_visits() <= MAX_STATE_VISITS));
  }

  #[test]
  fn cyclic_paths_survive_at_threshold() {
    let analyzer = analyzer("kalem");
    let mut paths = looping_paths(&analyzer, PRUNE_THRESHOLD, MAX_STATE_VISITS + 2);
    assert_eq!(prune_cycles(&mut paths), 0);
    assert_eq!(paths.len(), PRUNE_THRESHOLD);
  }

  #[test]
  fn search_reports_pruned_paths() {
    let analyzer = analyzer("kalem");
    let paths = looping_paths(&analyzer, PRUNE_THRESHOLD + 5, MAX_STATE_VISITS + 1);
    let (_, pruned) = analyzer.search(paths).unwrap();
    assert_eq!(pruned, PRUNE_THRESHOLD + 5);
  }
}
