//! Morpheme states.

use std::fmt;

use super::morpheme::MorphemeId;
use super::transition::TransitionId;

/// Index of a state in the graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub(crate) u16);

impl StateId {
  /// Position in the arena
  pub fn index(self) -> usize {
    self.0 as usize
  }
}

/// Node of the morphotactics graph.
#[derive(Debug, Clone)]
pub struct MorphemeState {
  /// Name, e.g. `noun_S` or `nom_ST`
  pub name: &'static str,
  /// Morpheme realized when entering this state
  pub morpheme: MorphemeId,
  /// A word may end here
  pub terminal: bool,
  /// Entering this state starts a new derivation group
  pub derivative: bool,
  /// Entry state of a part of speech
  pub pos_root: bool,
  pub(crate) outgoing: Vec<TransitionId>,
  pub(crate) incoming: Vec<TransitionId>,
}

impl MorphemeState {
  /// Outgoing transitions in insertion order
  pub fn outgoing(&self) -> &[TransitionId] {
    &self.outgoing
  }

  /// Incoming transitions in insertion order
  pub fn incoming(&self) -> &[TransitionId] {
    &self.incoming
  }
}

impl fmt::Display for MorphemeState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[{}]", self.name)
  }
}
