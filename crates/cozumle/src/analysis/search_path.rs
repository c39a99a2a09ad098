//! Provisional walk state of the analyzer and the generator.

use std::fmt;
use std::sync::Arc;

use crate::alphabet::PhoneticAttributes;
use crate::lexicon::DictionaryItem;
use crate::morphotactics::{MorphotacticsGraph, StateId, StemTransition};

use super::surface::{LexicalTransition, SurfaceTransition};

/// A partial decomposition of the input.
///
/// Paths are never changed in place. Every step produces a copy that carries the history
/// forward, so sibling branches can share a predecessor.
#[derive(Debug, Clone)]
pub struct SearchPath {
  /// Input not consumed yet
  pub tail: String,
  /// State the path sits on
  pub current_state: StateId,
  /// Transitions taken so far, the stem first
  pub transitions: Vec<SurfaceTransition>,
  /// Attributes of the text consumed so far
  pub attributes: PhoneticAttributes,
  /// The current state is terminal
  pub terminal: bool,
  /// Some transition entered a derivative state
  pub contains_derivation: bool,
  /// Some suffix had a non-empty surface
  pub contains_suffix_with_surface: bool,
  stem: Arc<StemTransition>,
}

impl SearchPath {
  /// Path that has consumed the stem and has `tail` left.
  pub fn initial(
    stem: StemTransition,
    tail: impl Into<String>,
    graph: &MorphotacticsGraph,
  ) -> Self {
    let root = SurfaceTransition::new(stem.surface.clone(), stem.to, LexicalTransition::Stem);
    Self {
      tail: tail.into(),
      current_state: stem.to,
      transitions: vec![root],
      attributes: stem.attributes,
      terminal: graph.state(stem.to).terminal,
      contains_derivation: false,
      contains_suffix_with_surface: false,
      stem: Arc::new(stem),
    }
  }

  fn extend(
    &self,
    step: SurfaceTransition,
    attributes: PhoneticAttributes,
    tail: String,
    graph: &MorphotacticsGraph,
  ) -> Self {
    let state = graph.state(step.state);
    let mut transitions = Vec::with_capacity(self.transitions.len() + 1);
    transitions.extend(self.transitions.iter().cloned());
    let current_state = step.state;
    let has_surface = !step.surface.is_empty();
    transitions.push(step);
    Self {
      tail,
      current_state,
      transitions,
      attributes,
      terminal: state.terminal,
      contains_derivation: self.contains_derivation || state.derivative,
      contains_suffix_with_surface: self.contains_suffix_with_surface || has_surface,
      stem: Arc::clone(&self.stem),
    }
  }

  /// Copy that took `step`, consuming its surface from the tail.
  ///
  /// The surface is removed by character count, which also holds for diacritics-insensitive
  /// matches.
  pub fn copy(
    &self,
    step: SurfaceTransition,
    attributes: PhoneticAttributes,
    graph: &MorphotacticsGraph,
  ) -> Self {
    let consumed = step.surface.chars().count();
    let tail: String = self.tail.chars().skip(consumed).collect();
    self.extend(step, attributes, tail, graph)
  }

  /// Copy that took `step` without touching the tail. Used by the generator.
  pub fn copy_for_generation(
    &self,
    step: SurfaceTransition,
    attributes: PhoneticAttributes,
    graph: &MorphotacticsGraph,
  ) -> Self {
    self.extend(step, attributes, self.tail.clone(), graph)
  }

  /// Stem transition the path started from.
  pub fn stem_transition(&self) -> &StemTransition {
    &self.stem
  }

  /// Root item
  pub fn dictionary_item(&self) -> &Arc<DictionaryItem> {
    &self.stem.item
  }

  /// True if the path starts from `item`.
  pub fn has_dictionary_item(&self, item: &DictionaryItem) -> bool {
    *self.stem.item == *item
  }

  /// Last transition taken.
  pub fn last_transition(&self) -> &SurfaceTransition {
    // the stem transition is always present
    &self.transitions[self.transitions.len() - 1]
  }

  /// State before the current one, `None` for a path that only has its stem.
  pub fn previous_state(&self) -> Option<StateId> {
    let n = self.transitions.len();
    (n >= 2).then(|| self.transitions[n - 2].state)
  }

  /// Highest number of times a single state was entered.
  pub fn max_state_visits(&self) -> usize {
    let mut counts: Vec<(StateId, usize)> = Vec::new();
    let mut max = 0;
    for t in &self.transitions {
      let count = match counts.iter_mut().find(|(s, _)| *s == t.state) {
        Some((_, c)) => {
          *c += 1;
          *c
        }
        None => {
          counts.push((t.state, 1));
          1
        }
      };
      max = max.max(count);
    }
    max
  }

  /// Renders as `[(item_id)(-tail) stem:state + surface:state ...]`.
  pub fn display<'a>(&'a self, graph: &'a MorphotacticsGraph) -> impl fmt::Display + 'a {
    DisplayPath { path: self, graph }
  }
}

struct DisplayPath<'a> {
  path: &'a SearchPath,
  graph: &'a MorphotacticsGraph,
}

impl fmt::Display for DisplayPath<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[({})(-{}) ", self.path.dictionary_item().id(), self.path.tail)?;
    for (i, t) in self.path.transitions.iter().enumerate() {
      if i > 0 {
        f.write_str(" + ")?;
      }
      write!(f, "{}", t.display(self.graph))?;
    }
    f.write_str("]")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::lexicon::load_text;
  use crate::morphotactics::TurkishMorphotactics;

  #[test]
  fn copies_consume_tail_and_track_history() {
    let mt = TurkishMorphotactics::new(Arc::new(load_text("kalem").unwrap())).unwrap();
    let graph = mt.graph();
    let stem = mt.stem_transitions().get_transitions("kalem").remove(0);
    let path = SearchPath::initial(stem, "ler", graph);
    assert_eq!(path.current_state, mt.states().noun_s);
    assert!(path.previous_state().is_none());
    assert!(!path.terminal);

    let s = mt.states();
    let step = SurfaceTransition::new("ler", s.a3pl_s, LexicalTransition::Stem);
    let next = path.copy(step, path.attributes, graph);
    assert_eq!(next.tail, "");
    assert_eq!(next.previous_state(), Some(s.noun_s));
    assert!(next.contains_suffix_with_surface);
    assert_eq!(path.transitions.len(), 1);
    assert_eq!(next.transitions.len(), 2);
    assert_eq!(next.display(graph).to_string(), "[(kalem_Noun)(-) kalem:noun_S + ler:a3pl_S]");
  }

  #[test]
  fn tail_is_cut_by_characters() {
    let mt = TurkishMorphotactics::new(Arc::new(load_text("kalem").unwrap())).unwrap();
    let graph = mt.graph();
    let stem = mt.stem_transitions().get_transitions("kalem").remove(0);
    let path = SearchPath::initial(stem, "çığ", graph);
    let step = SurfaceTransition::new("cı", mt.states().a3pl_s, LexicalTransition::Stem);
    assert_eq!(path.copy(step, path.attributes, graph).tail, "ğ");
  }
}
