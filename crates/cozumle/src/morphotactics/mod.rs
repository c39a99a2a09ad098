//! morphotactics module
//!
//! Morphemes, the state graph with its guarded suffix transitions, the formal and informal
//! wiring, and the stem transition index that connects lexicon roots to the graph.

pub mod conditions;
pub mod graph;
pub mod informal;
pub mod morpheme;
mod nominal;
pub mod state;
pub mod states;
pub mod stem_transitions;
pub mod transition;
pub mod turkish;
mod verbal;

/// Re-export
pub use conditions::Condition;
pub use graph::MorphotacticsGraph;
pub use informal::InformalStates;
pub use morpheme::{Morpheme, MorphemeId, Morphemes};
pub use state::{MorphemeState, StateId};
pub use states::States;
pub use stem_transitions::StemTransitions;
pub use transition::{StemTransition, SuffixTransition, TemplateToken, TransitionId};
pub use turkish::TurkishMorphotactics;
