//! The Turkish morphotactics: morphemes, the state graph and the stem transition index.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{info, warn};

use crate::alphabet::{PhoneticAttribute, PhoneticAttributes};
use crate::analysis::MorphemeData;
use crate::errors::MorphotacticsError;
use crate::lexicon::{DictionaryItem, PrimaryPos, RootAttribute, RootLexicon, SecondaryPos};

use super::graph::MorphotacticsGraph;
use super::informal::{self, InformalStates};
use super::morpheme::{MorphemeId, Morphemes};
use super::state::StateId;
use super::states::States;
use super::stem_transitions::{self, StemTransitions};
use super::transition::StemTransition;
use super::{nominal, verbal};

/// Fully wired morphotactics for a lexicon.
///
/// The graph is immutable after construction. Only the stem transition index changes, when
/// runtime items are injected and retracted around an analysis.
pub struct TurkishMorphotactics {
  morphemes: Morphemes,
  graph: MorphotacticsGraph,
  states: States,
  informal: Option<InformalStates>,
  item_root_states: HashMap<&'static str, StateId>,
  lexicon: Arc<RootLexicon>,
  stem_transitions: StemTransitions,
  /// Surface-less data of every morpheme, indexed by [`MorphemeId`]
  empty_morpheme_data: Vec<MorphemeData>,
  /// Runtime item id to the number of callers currently holding it in the index
  runtime_items: Mutex<HashMap<String, usize>>,
}

impl TurkishMorphotactics {
  /// Builds the formal morphotactics and indexes every lexicon item.
  pub fn new(lexicon: Arc<RootLexicon>) -> Result<Self, MorphotacticsError> {
    Self::build(lexicon, false)
  }

  /// Same as [`TurkishMorphotactics::new`] plus colloquial suffixes (`geliyom`, `gelcem`).
  pub fn informal(lexicon: Arc<RootLexicon>) -> Result<Self, MorphotacticsError> {
    Self::build(lexicon, true)
  }

  fn build(lexicon: Arc<RootLexicon>, with_informal: bool) -> Result<Self, MorphotacticsError> {
    let morphemes = Morphemes::new();
    let mut graph = MorphotacticsGraph::new();
    let states = States::register(&mut graph, &morphemes);
    wire(&mut graph, &morphemes, &states);

    let informal = with_informal.then(|| {
      let informal_states = InformalStates::register(&mut graph, &morphemes);
      informal::connect_informal(&mut graph, &states, &informal_states);
      informal_states
    });

    let item_root_states = HashMap::from([
      ("değil_Verb", states.n_verb_degil_s),
      ("imek_Verb", states.imek_root_s),
      ("su_Noun", states.noun_su_root_s),
      ("akarsu_Noun", states.noun_su_root_s),
      ("öyle_Adv", states.adv_for_verb_deriv_st),
      ("böyle_Adv", states.adv_for_verb_deriv_st),
      ("şöyle_Adv", states.adv_for_verb_deriv_st),
    ]);

    let empty_morpheme_data =
      morphemes.iter().map(|(id, m)| MorphemeData::new(id, m.clone(), "")).collect();
    let morphotactics = Self {
      empty_morpheme_data,
      morphemes,
      graph,
      states,
      informal,
      item_root_states,
      lexicon: Arc::clone(&lexicon),
      stem_transitions: StemTransitions::new(),
      runtime_items: Mutex::new(HashMap::new()),
    };
    for item in lexicon.iter() {
      morphotactics.add_dictionary_item(item)?;
    }

    info!(
      informal = with_informal,
      lexicon_size = lexicon.len(),
      states = morphotactics.graph.state_count(),
      transitions = morphotactics.graph.transition_count(),
      "Morphotactics ready"
    );
    Ok(morphotactics)
  }

  /// Morpheme registry
  pub fn morphemes(&self) -> &Morphemes {
    &self.morphemes
  }

  /// Shared data of `id` realized with an empty surface.
  pub fn empty_morpheme_data(&self, id: MorphemeId) -> &MorphemeData {
    &self.empty_morpheme_data[id.index()]
  }

  /// State graph
  pub fn graph(&self) -> &MorphotacticsGraph {
    &self.graph
  }

  /// Named formal states
  pub fn states(&self) -> &States {
    &self.states
  }

  /// Named informal states, present for the informal morphotactics.
  pub fn informal_states(&self) -> Option<&InformalStates> {
    self.informal.as_ref()
  }

  /// True if colloquial suffixes are wired.
  pub fn is_informal(&self) -> bool {
    self.informal.is_some()
  }

  /// Lexicon the index was built from.
  pub fn lexicon(&self) -> &Arc<RootLexicon> {
    &self.lexicon
  }

  /// Stem transition index
  pub fn stem_transitions(&self) -> &StemTransitions {
    &self.stem_transitions
  }

  /// Generates the stem transitions of `item` and adds them to the index.
  pub fn add_dictionary_item(&self, item: &Arc<DictionaryItem>) -> Result<(), MorphotacticsError> {
    let transitions = stem_transitions::generate(self, item)?;
    self.stem_transitions.add(item, transitions);
    Ok(())
  }

  /// Retracts every stem transition of `item` from the index.
  pub fn remove_dictionary_item(
    &self,
    item: &Arc<DictionaryItem>,
  ) -> Result<(), MorphotacticsError> {
    let transitions = stem_transitions::generate(self, item)?;
    self.stem_transitions.remove(item, &transitions);
    Ok(())
  }

  /// Adds a temporary item for one analysis.
  ///
  /// Callers may hold the same item at once. It stays indexed until each of them has called
  /// [`TurkishMorphotactics::remove_runtime_item`].
  pub fn add_runtime_item(&self, item: &Arc<DictionaryItem>) -> Result<(), MorphotacticsError> {
    let mut held = self.runtime_items.lock();
    let count = held.get(item.id()).copied().unwrap_or(0);
    if count == 0 {
      self.add_dictionary_item(item)?;
    }
    held.insert(item.id().to_string(), count + 1);
    Ok(())
  }

  /// Releases an item taken with [`TurkishMorphotactics::add_runtime_item`]. The last release
  /// retracts it from the index.
  pub fn remove_runtime_item(
    &self,
    item: &Arc<DictionaryItem>,
  ) -> Result<(), MorphotacticsError> {
    let mut held = self.runtime_items.lock();
    let Some(count) = held.get_mut(item.id()) else {
      warn!(item = %item.id(), "Runtime item was not held");
      return Ok(());
    };
    *count -= 1;
    if *count > 0 {
      return Ok(());
    }
    held.remove(item.id());
    self.remove_dictionary_item(item)
  }

  /// Stem transitions of an item, generated without touching the index.
  pub fn generate_stem_transitions(
    &self,
    item: &Arc<DictionaryItem>,
  ) -> Result<Vec<StemTransition>, MorphotacticsError> {
    stem_transitions::generate(self, item)
  }

  /// Looks up a state by its name (`noun_S`, `vA1sg_ST`).
  pub fn state_by_name(&self, name: &str) -> Result<StateId, MorphotacticsError> {
    self.graph.state_by_name(name).ok_or_else(|| MorphotacticsError::UnknownState(name.to_string()))
  }

  /// Entry state of a root with the given phonetic attributes.
  pub fn get_root_state(&self, item: &DictionaryItem, attrs: PhoneticAttributes) -> StateId {
    let s = &self.states;
    if let Some(state) = self.item_root_states.get(item.id()) {
      return *state;
    }
    if attrs.contains(PhoneticAttribute::LastLetterDropped) {
      return s.verb_root_vowel_drop_s;
    }
    if item.has_attribute(RootAttribute::Reciprocal) {
      return s.v_implicit_recip_root_s;
    }
    if item.has_attribute(RootAttribute::Reflexive) {
      return s.v_implicit_reflex_root_s;
    }
    match item.primary_pos {
      PrimaryPos::Noun => match item.secondary_pos {
        SecondaryPos::ProperNoun
        | SecondaryPos::Email
        | SecondaryPos::Url
        | SecondaryPos::HashTag
        | SecondaryPos::Mention => s.noun_proper_s,
        SecondaryPos::Abbreviation => s.noun_abbrv_s,
        SecondaryPos::Emoticon | SecondaryPos::RomanNumeral => s.noun_no_suffix_s,
        _ if item.has_attribute(RootAttribute::CompoundP3sg) => s.noun_compound_root_s,
        _ => s.noun_s,
      },
      PrimaryPos::Adjective => s.adjective_root_st,
      PrimaryPos::Pronoun => match item.secondary_pos {
        SecondaryPos::PersonalPron => s.pron_pers_s,
        SecondaryPos::DemonstrativePron => s.pron_demons_s,
        SecondaryPos::QuestionPron => s.pron_ques_s,
        SecondaryPos::ReflexivePron => s.pron_reflex_s,
        _ => s.pron_quant_s,
      },
      PrimaryPos::Adverb => s.adv_root_st,
      PrimaryPos::Conjunction => s.conj_root_st,
      PrimaryPos::Question => s.question_root_s,
      PrimaryPos::Interjection => s.interj_root_st,
      PrimaryPos::Verb => s.verb_root_s,
      PrimaryPos::Punctuation => s.punc_root_st,
      PrimaryPos::Determiner => s.det_root_st,
      PrimaryPos::PostPositive => s.postp_root_st,
      PrimaryPos::Numeral => s.numeral_root_st,
      PrimaryPos::Duplicator => s.dup_root_st,
      PrimaryPos::Unknown => s.noun_s,
    }
  }
}

fn wire(g: &mut MorphotacticsGraph, m: &Morphemes, s: &States) {
  nominal::connect_nouns(g, m, s);
  nominal::connect_proper_nouns_and_abbreviations(g, s);
  nominal::connect_adjectives(g, m, s);
  nominal::connect_numerals(g, m, s);
  nominal::connect_verb_after_noun_adj(g, m, s);
  nominal::connect_pronouns(g, m, s);
  nominal::connect_verb_after_pronoun(g, s);
  verbal::connect_verbs(g, m, s);
  verbal::connect_question(g, s);
  nominal::connect_adverbs(g, s);
  nominal::connect_last_vowel_drop_words(g, s);
  nominal::connect_postpositives(g, s);
  verbal::connect_imek(g, s);
  verbal::connect_post_processing(g, m, s);
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::lexicon::load_text;

  fn morphotactics(lines: &str) -> TurkishMorphotactics {
    TurkishMorphotactics::new(Arc::new(load_text(lines).unwrap())).unwrap()
  }

  #[test]
  fn root_states_follow_part_of_speech() {
    let mt =
      morphotactics("kalem\nokumak\nben [P:Pron,Pers]\nkırmızı [P:Adj]\nAnkara [P:Noun,Prop]");
    let s = mt.states();
    let item = |id: &str| Arc::clone(mt.lexicon().get_item_by_id(id).unwrap());
    let state_of = |id: &str| {
      let item = item(id);
      mt.get_root_state(&item, PhoneticAttributes::empty())
    };
    assert_eq!(state_of("kalem_Noun"), s.noun_s);
    assert_eq!(state_of("okumak_Verb"), s.verb_root_s);
    assert_eq!(state_of("ben_Pron_Pers"), s.pron_pers_s);
    assert_eq!(state_of("kırmızı_Adj"), s.adjective_root_st);
    assert_eq!(state_of("Ankara_Noun_Prop"), s.noun_proper_s);
  }

  #[test]
  fn special_items_have_fixed_root_states() {
    let mt = morphotactics("değil [P:Verb]\nimek [P:Verb]\nsu");
    let s = mt.states();
    let item = Arc::clone(mt.lexicon().get_item_by_id("değil_Verb").unwrap());
    assert_eq!(mt.get_root_state(&item, PhoneticAttributes::empty()), s.n_verb_degil_s);
    let item = Arc::clone(mt.lexicon().get_item_by_id("su_Noun").unwrap());
    assert_eq!(mt.get_root_state(&item, PhoneticAttributes::empty()), s.noun_su_root_s);
  }

  #[test]
  fn informal_graph_adds_states() {
    let lexicon = Arc::new(load_text("gelmek").unwrap());
    let formal = TurkishMorphotactics::new(Arc::clone(&lexicon)).unwrap();
    let informal = TurkishMorphotactics::informal(lexicon).unwrap();
    assert!(!formal.is_informal());
    assert!(informal.is_informal());
    assert!(informal.graph().state_count() > formal.graph().state_count());
    assert!(informal.state_by_name("vProgYor_S_Inf").is_ok());
    match formal.state_by_name("vProgYor_S_Inf") {
      Err(MorphotacticsError::UnknownState(name)) => assert_eq!(name, "vProgYor_S_Inf"),
      other => panic!("expected UnknownState, got {other:?}"),
    }
  }

  #[test]
  fn last_vowel_drop_verb_root_has_no_passive() {
    let mt = morphotactics("kavurmak [A:LastVowelDrop]");
    let s = mt.states();
    let m = mt.morphemes();
    let targets: Vec<_> = mt
      .graph()
      .outgoing(s.verb_last_vowel_drop_unmod_root_s)
      .map(|t| mt.graph().state(t.to).morpheme)
      .collect();
    assert!(!targets.is_empty());
    assert!(!targets.contains(&m.pass));
    assert!(mt.graph().outgoing(s.verb_root_s).any(|t| mt.graph().state(t.to).morpheme == m.pass));
  }

  #[test]
  fn runtime_item_stays_until_last_release() {
    let mt = morphotactics("kalem");
    let stems = mt.stem_transitions();
    let before = stems.len();
    let item = Arc::new(
      DictionaryItem::simple("Çorlu", PrimaryPos::Noun, SecondaryPos::ProperNoun)
        .with_attribute(RootAttribute::Runtime),
    );

    mt.add_runtime_item(&item).unwrap();
    mt.add_runtime_item(&item).unwrap();
    assert_eq!(stems.len(), before + 1);

    mt.remove_runtime_item(&item).unwrap();
    assert_eq!(stems.get_transitions("Çorlu").len(), 1);

    mt.remove_runtime_item(&item).unwrap();
    assert!(stems.get_transitions("Çorlu").is_empty());
    assert_eq!(stems.len(), before);

    mt.remove_runtime_item(&item).unwrap();
    assert_eq!(stems.len(), before);
  }

  #[test]
  fn overlapping_runtime_items_across_threads() {
    let mt = Arc::new(morphotactics("kalem"));
    let before = mt.stem_transitions().len();
    let item =
      Arc::new(DictionaryItem::simple("Çorlu", PrimaryPos::Noun, SecondaryPos::ProperNoun));

    let handles: Vec<_> = (0..8)
      .map(|_| {
        let mt = Arc::clone(&mt);
        let item = Arc::clone(&item);
        std::thread::spawn(move || {
          for _ in 0..50 {
            mt.add_runtime_item(&item).unwrap();
            assert_eq!(mt.stem_transitions().get_transitions("Çorlu").len(), 1);
            mt.remove_runtime_item(&item).unwrap();
          }
        })
      })
      .collect();
    for handle in handles {
      handle.join().unwrap();
    }
    assert_eq!(mt.stem_transitions().len(), before);
  }
}
