//! Arena holding morpheme states and suffix transitions.
//!
//! States and transitions live in two vectors and refer to each other by index, so the
//! cyclic graph needs no shared ownership. Each state keeps the ids of its outgoing
//! transitions in insertion order, which is also the order the analyzer tries them.

use std::collections::HashMap;

use tracing::warn;

use super::conditions::Condition;
use super::morpheme::MorphemeId;
use super::state::{MorphemeState, StateId};
use super::transition::{SuffixTransition, TransitionId};

/// States and transitions of the morphotactics, addressed by index.
#[derive(Debug, Default)]
pub struct MorphotacticsGraph {
  states: Vec<MorphemeState>,
  transitions: Vec<SuffixTransition>,
  by_name: HashMap<&'static str, StateId>,
}

impl MorphotacticsGraph {
  /// Empty graph
  pub fn new() -> Self {
    Self::default()
  }

  fn push_state(
    &mut self,
    name: &'static str,
    morpheme: MorphemeId,
    terminal: bool,
    derivative: bool,
    pos_root: bool,
  ) -> StateId {
    let id = StateId(self.states.len() as u16);
    if self.by_name.insert(name, id).is_some() {
      warn!(name, "State name registered twice, lookups resolve to the newest");
    }
    self.states.push(MorphemeState {
      name,
      morpheme,
      terminal,
      derivative,
      pos_root,
      outgoing: Vec::new(),
      incoming: Vec::new(),
    });
    id
  }

  /// Terminal state
  pub fn terminal(&mut self, name: &'static str, morpheme: MorphemeId) -> StateId {
    self.push_state(name, morpheme, true, false, false)
  }

  /// Non-terminal state
  pub fn non_terminal(&mut self, name: &'static str, morpheme: MorphemeId) -> StateId {
    self.push_state(name, morpheme, false, false, false)
  }

  /// Non-terminal state that starts a derivation group
  pub fn derivative(&mut self, name: &'static str, morpheme: MorphemeId) -> StateId {
    self.push_state(name, morpheme, false, true, false)
  }

  /// Registers a non-terminal POS root state.
  pub fn root(&mut self, name: &'static str, morpheme: MorphemeId) -> StateId {
    self.push_state(name, morpheme, false, false, true)
  }

  /// Registers a terminal POS root state.
  pub fn terminal_root(&mut self, name: &'static str, morpheme: MorphemeId) -> StateId {
    self.push_state(name, morpheme, true, false, true)
  }

  /// State data
  pub fn state(&self, id: StateId) -> &MorphemeState {
    &self.states[id.index()]
  }

  /// Transition data
  pub fn transition(&self, id: TransitionId) -> &SuffixTransition {
    &self.transitions[id.index()]
  }

  /// Outgoing transitions of a state.
  pub fn outgoing(&self, id: StateId) -> impl Iterator<Item = &SuffixTransition> + '_ {
    self.state(id).outgoing.iter().map(|t| self.transition(*t))
  }

  /// State registered under `name`.
  pub fn state_by_name(&self, name: &str) -> Option<StateId> {
    self.by_name.get(name).copied()
  }

  /// Number of states
  pub fn state_count(&self) -> usize {
    self.states.len()
  }

  /// Number of transitions that are still connected.
  pub fn transition_count(&self) -> usize {
    self.states.iter().map(|s| s.outgoing.len()).sum()
  }

  /// Builder for transitions leaving `from`.
  pub fn at(&mut self, from: StateId) -> StateBuilder<'_> {
    StateBuilder { graph: self, from }
  }

  /// Registers a transition. A structurally equal transition already leaving `from` is logged
  /// and the call is ignored.
  pub fn connect(
    &mut self,
    from: StateId,
    to: StateId,
    template: &'static str,
    condition: Option<Condition>,
  ) -> Option<TransitionId> {
    self.insert(SuffixTransition::new(from, to, template, condition))
  }

  fn insert(&mut self, transition: SuffixTransition) -> Option<TransitionId> {
    let from = transition.from;
    let duplicate =
      self.state(from).outgoing.iter().any(|t| self.transition(*t).same_as(&transition));
    if duplicate {
      warn!(
        from = self.state(from).name,
        to = self.state(transition.to).name,
        template = transition.template,
        "Outgoing transition already exists"
      );
      return None;
    }
    let id = TransitionId(self.transitions.len() as u32);
    let to = transition.to;
    self.transitions.push(transition);
    self.states[from.index()].outgoing.push(id);
    self.states[to.index()].incoming.push(id);
    Some(id)
  }

  /// Copies every outgoing transition of `source` to `target`.
  pub fn copy_outgoing_transitions(&mut self, target: StateId, source: StateId) {
    let copies: Vec<SuffixTransition> =
      self.outgoing(source).map(|t| t.copy_from(target)).collect();
    for copy in copies {
      self.insert(copy);
    }
  }

  /// Disconnects outgoing transitions of `state` that lead to a state of `morpheme`.
  pub fn remove_transitions_to(&mut self, state: StateId, morpheme: MorphemeId) {
    let outgoing = std::mem::take(&mut self.states[state.index()].outgoing);
    let (removed, kept): (Vec<TransitionId>, Vec<TransitionId>) = outgoing
      .into_iter()
      .partition(|t| self.state(self.transition(*t).to).morpheme == morpheme);
    for t in removed {
      let to = self.transition(t).to;
      self.states[to.index()].incoming.retain(|i| *i != t);
    }
    self.states[state.index()].outgoing = kept;
  }
}

/// Chained transition registration for one source state.
pub struct StateBuilder<'g> {
  graph: &'g mut MorphotacticsGraph,
  from: StateId,
}

impl StateBuilder<'_> {
  /// Transition with a surface template.
  pub fn add(self, to: StateId, template: &'static str) -> Self {
    self.graph.connect(self.from, to, template, None);
    self
  }

  /// Guarded transition with a surface template.
  pub fn add_when(self, to: StateId, template: &'static str, condition: Condition) -> Self {
    self.graph.connect(self.from, to, template, Some(condition));
    self
  }

  /// Transition without surface.
  pub fn add_empty(self, to: StateId) -> Self {
    self.graph.connect(self.from, to, "", None);
    self
  }

  /// Guarded transition without surface.
  pub fn add_empty_when(self, to: StateId, condition: Condition) -> Self {
    self.graph.connect(self.from, to, "", Some(condition));
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::morphotactics::Morphemes;

  #[test]
  fn duplicate_transitions_are_ignored() {
    let m = Morphemes::new();
    let mut g = MorphotacticsGraph::new();
    let a = g.root("noun_S", m.noun);
    let b = g.non_terminal("a3pl_S", m.a3pl);
    g.at(a).add(b, "lAr").add(b, "lAr").add_empty(b);
    assert_eq!(g.state(a).outgoing().len(), 2);
    assert_eq!(g.state(b).incoming().len(), 2);
    assert_eq!(g.transition_count(), 2);
  }

  #[test]
  fn states_are_found_by_name() {
    let m = Morphemes::new();
    let mut g = MorphotacticsGraph::new();
    let a = g.terminal_root("advRoot_ST", m.adv);
    let b = g.derivative("vWhen_S", m.when);
    assert_eq!(g.state_by_name("advRoot_ST"), Some(a));
    assert_eq!(g.state_by_name("vWhen_S"), Some(b));
    assert!(g.state(a).terminal && g.state(a).pos_root);
    assert!(g.state(b).derivative && !g.state(b).terminal);
    assert_eq!(g.state_count(), 2);
  }

  #[test]
  fn copy_and_remove() {
    let m = Morphemes::new();
    let mut g = MorphotacticsGraph::new();
    let root = g.root("verbRoot_S", m.verb);
    let other = g.root("verbOther_S", m.verb);
    let pass = g.derivative("vPass_S", m.pass);
    let neg = g.non_terminal("vNeg_S", m.neg);
    g.at(root).add(pass, "In").add(neg, "mA");
    g.copy_outgoing_transitions(other, root);
    assert_eq!(g.state(other).outgoing().len(), 2);
    assert!(g.outgoing(other).all(|t| t.from == other));

    g.remove_transitions_to(other, m.pass);
    let targets: Vec<StateId> = g.outgoing(other).map(|t| t.to).collect();
    assert_eq!(targets, vec![neg]);
    assert_eq!(g.state(pass).incoming().len(), 1);
    assert_eq!(g.state(root).outgoing().len(), 2);
  }
}
