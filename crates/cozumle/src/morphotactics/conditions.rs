//! Guard conditions of suffix transitions.
//!
//! A condition is a predicate over the [`SearchPath`] built so far. The vocabulary is
//! closed, so it is a plain enum evaluated by a recursive match.

use std::fmt;
use std::ops::Not;

use crate::alphabet::PhoneticAttribute;
use crate::analysis::SearchPath;
use crate::lexicon::{RootAttribute, SecondaryPos};

use super::graph::MorphotacticsGraph;
use super::morpheme::MorphemeId;
use super::state::StateId;

/// Predicate deciding whether a transition may be taken from a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
  /// Path attributes contain the attribute
  HasPhoneticAttribute(PhoneticAttribute),
  /// Root item carries the attribute
  HasRootAttribute(RootAttribute),
  /// Root item id equals
  DictionaryItemIs(&'static str),
  /// Root item id is one of
  DictionaryItemIsAny(Vec<&'static str>),
  /// Root item id is none of
  DictionaryItemIsNone(Vec<&'static str>),
  /// Root item secondary POS equals
  SecondaryPosIs(SecondaryPos),
  /// Stem surface equals
  RootSurfaceIs(&'static str),
  /// Stem surface is one of
  RootSurfaceIsAny(Vec<&'static str>),
  /// Morpheme of the state before the current one
  PreviousMorphemeIs(MorphemeId),
  /// Morpheme of the previous state is one of
  PreviousMorphemeIsAny(Vec<MorphemeId>),
  /// Previous state equals
  PreviousStateIs(StateId),
  /// Previous state is missing or differs
  PreviousStateIsNot(StateId),
  /// Previous state is one of
  PreviousStateIsAny(Vec<StateId>),
  /// Most recent derivative state equals
  LastDerivationIs(StateId),
  /// Most recent derivative state is one of
  LastDerivationIsAny(Vec<StateId>),
  /// Current derivation group visits one of the states
  CurrentGroupContainsAny(Vec<StateId>),
  /// Derivation group before the last derivation visits one of the states
  PreviousGroupContains(Vec<StateId>),
  /// Derivation group before the last derivation contains one of the morphemes
  PreviousGroupContainsMorpheme(Vec<MorphemeId>),
  /// Any transition so far has one of the morphemes
  ContainsMorpheme(Vec<MorphemeId>),
  /// Morphemes appear consecutively somewhere in the path
  ContainsMorphemeSequence(Vec<MorphemeId>),
  /// Path ends with the morpheme sequence
  HasTailSequence(Vec<MorphemeId>),
  /// No suffix with a surface since the last derivation
  NoSurfaceAfterDerivation,
  /// Some suffix already has a non-empty surface
  HasAnySuffixSurface,
  /// Unconsumed input remains
  HasTail,
  /// Negation
  Not(Box<Condition>),
  /// Conjunction, flattened
  And(Vec<Condition>),
  /// Disjunction, flattened
  Or(Vec<Condition>),
}

/// `Condition::HasTail`
pub const HAS_TAIL: Condition = Condition::HasTail;
/// `Condition::HasAnySuffixSurface`
pub const HAS_SURFACE: Condition = Condition::HasAnySuffixSurface;
/// `Condition::NoSurfaceAfterDerivation`
pub const CURRENT_GROUP_EMPTY: Condition = Condition::NoSurfaceAfterDerivation;

/// No suffix so far has a surface.
pub fn has_no_surface() -> Condition {
  !HAS_SURFACE
}

/// Path attributes contain `attr`.
pub fn has(attr: PhoneticAttribute) -> Condition {
  Condition::HasPhoneticAttribute(attr)
}

/// Path attributes do not contain `attr`.
pub fn not_have(attr: PhoneticAttribute) -> Condition {
  !has(attr)
}

/// Root item has `attr`.
pub fn has_root(attr: RootAttribute) -> Condition {
  Condition::HasRootAttribute(attr)
}

/// Root item does not have `attr`.
pub fn not_have_root(attr: RootAttribute) -> Condition {
  !has_root(attr)
}

/// Root item id is `id`.
pub fn root_is(id: &'static str) -> Condition {
  Condition::DictionaryItemIs(id)
}

/// Root item id is not `id`.
pub fn root_is_not(id: &'static str) -> Condition {
  !root_is(id)
}

/// Root item id is one of `ids`.
pub fn root_is_any(ids: &[&'static str]) -> Condition {
  Condition::DictionaryItemIsAny(ids.to_vec())
}

/// Root item id is none of `ids`.
pub fn root_is_none(ids: &[&'static str]) -> Condition {
  Condition::DictionaryItemIsNone(ids.to_vec())
}

/// Stem surface is `surface`.
pub fn root_surface_is(surface: &'static str) -> Condition {
  Condition::RootSurfaceIs(surface)
}

/// Stem surface is one of `surfaces`.
pub fn root_surface_is_any(surfaces: &[&'static str]) -> Condition {
  Condition::RootSurfaceIsAny(surfaces.to_vec())
}

/// Root secondary POS is `pos`.
pub fn secondary_pos_is(pos: SecondaryPos) -> Condition {
  Condition::SecondaryPosIs(pos)
}

/// Previous morpheme is `m`.
pub fn previous_morpheme_is(m: MorphemeId) -> Condition {
  Condition::PreviousMorphemeIs(m)
}

/// Previous morpheme is not `m`.
pub fn previous_morpheme_is_not(m: MorphemeId) -> Condition {
  !previous_morpheme_is(m)
}

/// Previous morpheme is one of `ms`.
pub fn previous_morpheme_is_any(ms: &[MorphemeId]) -> Condition {
  Condition::PreviousMorphemeIsAny(ms.to_vec())
}

/// Previous state is `s`.
pub fn previous_state_is(s: StateId) -> Condition {
  Condition::PreviousStateIs(s)
}

/// Previous state is not `s`.
pub fn previous_state_is_not(s: StateId) -> Condition {
  Condition::PreviousStateIsNot(s)
}

/// Previous state is one of `ss`.
pub fn previous_state_is_any(ss: &[StateId]) -> Condition {
  Condition::PreviousStateIsAny(ss.to_vec())
}

/// Last derivation is `s`.
pub fn last_derivation_is(s: StateId) -> Condition {
  Condition::LastDerivationIs(s)
}

/// Last derivation is one of `ss`.
pub fn last_derivation_is_any(ss: &[StateId]) -> Condition {
  Condition::LastDerivationIsAny(ss.to_vec())
}

/// Current group contains one of `ss`.
pub fn current_group_contains_any(ss: &[StateId]) -> Condition {
  Condition::CurrentGroupContainsAny(ss.to_vec())
}

/// Previous group contains one of `ss`.
pub fn previous_group_contains(ss: &[StateId]) -> Condition {
  Condition::PreviousGroupContains(ss.to_vec())
}

/// Previous group contains one of `ms`.
pub fn previous_group_contains_morpheme(ms: &[MorphemeId]) -> Condition {
  Condition::PreviousGroupContainsMorpheme(ms.to_vec())
}

/// Path contains one of `ms`.
pub fn contains_morpheme(ms: &[MorphemeId]) -> Condition {
  Condition::ContainsMorpheme(ms.to_vec())
}

/// Path contains `ms` consecutively.
pub fn contains_morpheme_sequence(ms: &[MorphemeId]) -> Condition {
  Condition::ContainsMorphemeSequence(ms.to_vec())
}

/// Path ends with `ms`.
pub fn has_tail_sequence(ms: &[MorphemeId]) -> Condition {
  Condition::HasTailSequence(ms.to_vec())
}

impl Condition {
  /// `self AND other`. Nested conjunctions are flattened.
  #[must_use]
  pub fn and(self, other: Condition) -> Condition {
    let mut items = match self {
      Condition::And(items) => items,
      c => vec![c],
    };
    match other {
      Condition::And(more) => items.extend(more),
      c => items.push(c),
    }
    Condition::And(items)
  }

  /// `self OR other`. Nested disjunctions are flattened.
  #[must_use]
  pub fn or(self, other: Condition) -> Condition {
    let mut items = match self {
      Condition::Or(items) => items,
      c => vec![c],
    };
    match other {
      Condition::Or(more) => items.extend(more),
      c => items.push(c),
    }
    Condition::Or(items)
  }

  /// `self AND NOT other`
  #[must_use]
  pub fn and_not(self, other: Condition) -> Condition {
    self.and(!other)
  }

  /// Number of leaf predicates.
  pub fn count(&self) -> usize {
    match self {
      Condition::And(items) | Condition::Or(items) => items.iter().map(Condition::count).sum(),
      _ => 1,
    }
  }

  /// Evaluates the condition against `path`.
  pub fn accept(&self, path: &SearchPath, graph: &MorphotacticsGraph) -> bool {
    match self {
      Condition::HasPhoneticAttribute(a) => path.attributes.contains(*a),
      Condition::HasRootAttribute(a) => path.dictionary_item().has_attribute(*a),
      Condition::DictionaryItemIs(id) => path.dictionary_item().id() == *id,
      Condition::DictionaryItemIsAny(ids) => ids.contains(&path.dictionary_item().id()),
      Condition::DictionaryItemIsNone(ids) => !ids.contains(&path.dictionary_item().id()),
      Condition::SecondaryPosIs(pos) => path.dictionary_item().secondary_pos == *pos,
      Condition::RootSurfaceIs(s) => path.stem_transition().surface == *s,
      Condition::RootSurfaceIsAny(ss) => ss.contains(&path.stem_transition().surface.as_str()),
      Condition::PreviousMorphemeIs(m) => {
        path.previous_state().is_some_and(|s| graph.state(s).morpheme == *m)
      }
      Condition::PreviousMorphemeIsAny(ms) => {
        path.previous_state().is_some_and(|s| ms.contains(&graph.state(s).morpheme))
      }
      Condition::PreviousStateIs(target) => {
        path.previous_state() == Some(*target)
      }
      Condition::PreviousStateIsNot(target) => {
        path.previous_state() != Some(*target)
      }
      Condition::PreviousStateIsAny(targets) => {
        path.previous_state().is_some_and(|s| targets.contains(&s))
      }
      Condition::LastDerivationIs(target) => suffix_states(path)
        .find(|s| graph.state(*s).derivative)
        .is_some_and(|s| s == *target),
      Condition::LastDerivationIsAny(targets) => suffix_states(path)
        .find(|s| graph.state(*s).derivative)
        .is_some_and(|s| targets.contains(&s)),
      Condition::CurrentGroupContainsAny(targets) => {
        for s in suffix_states(path) {
          if targets.contains(&s) {
            return true;
          }
          if graph.state(s).derivative {
            return false;
          }
        }
        false
      }
      Condition::PreviousGroupContains(targets) => {
        previous_group_any(path, graph, |s| targets.contains(&s))
      }
      Condition::PreviousGroupContainsMorpheme(ms) => {
        previous_group_any(path, graph, |s| ms.contains(&graph.state(s).morpheme))
      }
      Condition::ContainsMorpheme(ms) => {
        path.transitions.iter().any(|t| ms.contains(&graph.state(t.state).morpheme))
      }
      Condition::ContainsMorphemeSequence(ms) => {
        if ms.is_empty() || path.transitions.len() < ms.len() {
          return false;
        }
        let mut m = 0;
        for t in &path.transitions {
          if graph.state(t.state).morpheme == ms[m] {
            m += 1;
            if m == ms.len() {
              return true;
            }
          } else {
            m = 0;
          }
        }
        false
      }
      Condition::HasTailSequence(ms) => {
        let n = path.transitions.len();
        n >= ms.len()
          && path.transitions[n - ms.len()..]
            .iter()
            .zip(ms)
            .all(|(t, m)| graph.state(t.state).morpheme == *m)
      }
      Condition::NoSurfaceAfterDerivation => {
        for t in path.transitions.iter().skip(1).rev() {
          if graph.state(t.state).derivative {
            return true;
          }
          if !t.surface.is_empty() {
            return false;
          }
        }
        true
      }
      Condition::HasAnySuffixSurface => path.contains_suffix_with_surface,
      Condition::HasTail => !path.tail.is_empty(),
      Condition::Not(c) => !c.accept(path, graph),
      Condition::And(items) => items.iter().all(|c| c.accept(path, graph)),
      Condition::Or(items) => items.iter().any(|c| c.accept(path, graph)),
    }
  }
}

/// Suffix states of the path from the most recent backwards, the stem excluded.
fn suffix_states(path: &SearchPath) -> impl Iterator<Item = StateId> + '_ {
  path.transitions.iter().skip(1).rev().map(|t| t.state)
}

/// Scans the group that precedes the last derivation, most recent first, up to and including
/// the derivative state that opens it.
fn previous_group_any(
  path: &SearchPath,
  graph: &MorphotacticsGraph,
  pred: impl Fn(StateId) -> bool,
) -> bool {
  let Some(last) = path.transitions.iter().rposition(|t| graph.state(t.state).derivative) else {
    return false;
  };
  for t in path.transitions[..last].iter().skip(1).rev() {
    if pred(t.state) {
      return true;
    }
    if graph.state(t.state).derivative {
      return false;
    }
  }
  false
}

impl Not for Condition {
  type Output = Condition;

  fn not(self) -> Condition {
    Condition::Not(Box::new(self))
  }
}

fn write_list<T: fmt::Debug>(f: &mut fmt::Formatter<'_>, name: &str, items: &[T]) -> fmt::Result {
  write!(f, "{name}{{{items:?}}}")
}

impl fmt::Display for Condition {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Condition::HasPhoneticAttribute(a) => write!(f, "HasPhoneticAttribute{{{a:?}}}"),
      Condition::HasRootAttribute(a) => write!(f, "HasRootAttribute{{{a}}}"),
      Condition::DictionaryItemIs(id) => write!(f, "DictionaryItemIs{{{id}}}"),
      Condition::DictionaryItemIsAny(ids) => write_list(f, "DictionaryItemIsAny", ids),
      Condition::DictionaryItemIsNone(ids) => write_list(f, "DictionaryItemIsNone", ids),
      Condition::SecondaryPosIs(pos) => write!(f, "SecondaryPosIs{{{pos:?}}}"),
      Condition::RootSurfaceIs(s) => write!(f, "RootSurfaceIs{{{s}}}"),
      Condition::RootSurfaceIsAny(ss) => write_list(f, "RootSurfaceIsAny", ss),
      Condition::PreviousMorphemeIs(m) => write!(f, "PreviousMorphemeIs{{{m:?}}}"),
      Condition::PreviousMorphemeIsAny(ms) => write_list(f, "PreviousMorphemeIsAny", ms),
      Condition::PreviousStateIs(s) => write!(f, "PreviousStateIs{{{s:?}}}"),
      Condition::PreviousStateIsNot(s) => write!(f, "PreviousStateIsNot{{{s:?}}}"),
      Condition::PreviousStateIsAny(ss) => write_list(f, "PreviousStateIsAny", ss),
      Condition::LastDerivationIs(s) => write!(f, "LastDerivationIs{{{s:?}}}"),
      Condition::LastDerivationIsAny(ss) => write_list(f, "LastDerivationIsAny", ss),
      Condition::CurrentGroupContainsAny(ss) => write_list(f, "CurrentGroupContainsAny", ss),
      Condition::PreviousGroupContains(ss) => write_list(f, "PreviousGroupContains", ss),
      Condition::PreviousGroupContainsMorpheme(ms) => {
        write_list(f, "PreviousGroupContainsMorpheme", ms)
      }
      Condition::ContainsMorpheme(ms) => write_list(f, "ContainsMorpheme", ms),
      Condition::ContainsMorphemeSequence(ms) => write_list(f, "ContainsMorphemeSequence", ms),
      Condition::HasTailSequence(ms) => write_list(f, "HasTailSequence", ms),
      Condition::NoSurfaceAfterDerivation => f.write_str("NoSurfaceAfterDerivation{}"),
      Condition::HasAnySuffixSurface => f.write_str("HasAnySuffixSurface{}"),
      Condition::HasTail => f.write_str("HasTail{}"),
      Condition::Not(c) => write!(f, "Not({c})"),
      Condition::And(items) | Condition::Or(items) => {
        let op = if matches!(self, Condition::And(_)) { " AND " } else { " OR " };
        for (i, c) in items.iter().enumerate() {
          if i > 0 {
            f.write_str(op)?;
          }
          write!(f, "{c}")?;
        }
        Ok(())
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn and_flattens_nested_conjunctions() {
    let c = has(PhoneticAttribute::LastLetterVowel)
      .and(has(PhoneticAttribute::LastVowelBack))
      .and(has_root(RootAttribute::Voicing).and(HAS_TAIL));
    match &c {
      Condition::And(items) => assert_eq!(items.len(), 4),
      other => panic!("expected And, got {other:?}"),
    }
    assert_eq!(c.count(), 4);
  }

  #[test]
  fn or_inside_and_is_kept_as_one_operand() {
    let c = HAS_TAIL.and(has(PhoneticAttribute::LastLetterVowel).or(HAS_SURFACE));
    match &c {
      Condition::And(items) => {
        assert_eq!(items.len(), 2);
        assert!(matches!(items[1], Condition::Or(_)));
      }
      other => panic!("expected And, got {other:?}"),
    }
    assert_eq!(c.count(), 3);
  }

  #[test]
  fn display_is_stable() {
    let c = not_have(PhoneticAttribute::ExpectsVowel).and(root_is("değil_Verb"));
    assert_eq!(
      c.to_string(),
      "Not(HasPhoneticAttribute{ExpectsVowel}) AND DictionaryItemIs{değil_Verb}"
    );
    assert_eq!(
      HAS_TAIL.or(HAS_SURFACE).to_string(),
      "HasTail{} OR HasAnySuffixSurface{}"
    );
  }
}
