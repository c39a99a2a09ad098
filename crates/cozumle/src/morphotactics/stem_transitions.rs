//! Stem transition generation and the surface index used to seed the search.
//!
//! Every dictionary item yields one or more stem transitions. Items whose root changes
//! shape before some suffixes (`kitap`/`kitab`, `burun`/`burn`, `ben`/`ban`) get one
//! transition per shape, each carrying the phonetic attributes that decide which suffixes
//! may follow it.
//!
//! The index keys transitions by surface. Most surfaces map to exactly one transition and
//! stay in a flat map; surfaces shared by several items move to a list and move back once
//! only one item is left. Items with more than one shape are also kept in a side table so
//! the generator can find every shape of an item without scanning the index.
//!
//! Diacritics-insensitive lookups go through a map from ASCII-folded surfaces to the real
//! ones. That map is built on the first such lookup and updated on every add and remove
//! afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::alphabet::{self, PhoneticAttribute, PhoneticAttributes, morphemic_attributes};
use crate::errors::MorphotacticsError;
use crate::lexicon::{DictionaryItem, PrimaryPos, RootAttribute};

use super::state::StateId;
use super::transition::StemTransition;
use super::turkish::TurkishMorphotactics;

/// Items whose stems change irregularly.
const SPECIAL_ROOTS: [&str; 20] = [
  "içeri_Noun",
  "içeri_Adj",
  "dışarı_Adj",
  "şura_Noun",
  "bura_Noun",
  "ora_Noun",
  "dışarı_Noun",
  "dışarı_Postp",
  "yukarı_Noun",
  "yukarı_Adj",
  "ileri_Noun",
  "ben_Pron_Pers",
  "sen_Pron_Pers",
  "demek_Verb",
  "yemek_Verb",
  "imek_Verb",
  "birbiri_Pron_Quant",
  "çoğu_Pron_Quant",
  "öbürü_Pron_Quant",
  "birçoğu_Pron_Quant",
];

fn attributes_of(seq: &str) -> PhoneticAttributes {
  morphemic_attributes(seq, PhoneticAttributes::empty())
}

fn drop_last_char(s: &str) -> &str {
  s.char_indices().next_back().map_or(s, |(i, _)| &s[..i])
}

/// Generates the stem transitions of an item: one for plain roots, two when the root has a
/// modified form (`kitap`/`kitab`, `burun`/`burn`, `ben`/`ban`).
pub fn generate(
  morphotactics: &TurkishMorphotactics,
  item: &Arc<DictionaryItem>,
) -> Result<Vec<StemTransition>, MorphotacticsError> {
  if SPECIAL_ROOTS.contains(&item.id()) {
    return special_roots(morphotactics, item);
  }
  if item.attributes.contains_any(&RootAttribute::MODIFIERS) {
    return modified_roots(morphotactics, item);
  }
  let attrs = attributes_of(&item.pronunciation);
  let to = morphotactics.get_root_state(item, attrs);
  Ok(vec![StemTransition::new(item.root.clone(), Arc::clone(item), attrs, to)])
}

fn modified_roots(
  morphotactics: &TurkishMorphotactics,
  item: &Arc<DictionaryItem>,
) -> Result<Vec<StemTransition>, MorphotacticsError> {
  use PhoneticAttribute::*;

  let mut modified_seq = item.pronunciation.clone();
  let mut original_attrs = attributes_of(&item.pronunciation);
  let mut modified_attrs = original_attrs;
  let mut unmodified_state: Option<StateId> = None;
  let mut modified_state: Option<StateId> = None;

  for attribute in item.attributes.iter() {
    match attribute {
      RootAttribute::Voicing => {
        let Some(last) = modified_seq.chars().last() else {
          return Err(MorphotacticsError::VoicingFailed { item_id: item.id().to_string() });
        };
        let mut voiced = alphabet::voice(last);
        if voiced == last {
          return Err(MorphotacticsError::VoicingFailed { item_id: item.id().to_string() });
        }
        if item.lemma.ends_with("nk") {
          voiced = 'g';
        }
        modified_seq = format!("{}{}", drop_last_char(&modified_seq), voiced);
        modified_attrs.remove(LastLetterVoicelessStop);
        original_attrs.insert(ExpectsConsonant);
        modified_attrs.insert(ExpectsVowel);
        modified_attrs.insert(CannotTerminate);
      }
      RootAttribute::Doubling => {
        if let Some(last) = modified_seq.chars().last() {
          modified_seq.push(last);
        }
        original_attrs.insert(ExpectsConsonant);
        modified_attrs.insert(ExpectsVowel);
        modified_attrs.insert(CannotTerminate);
      }
      RootAttribute::LastVowelDrop => {
        if alphabet::last_letter(&modified_seq).is_some_and(|l| l.is_vowel()) {
          modified_seq = drop_last_char(&modified_seq).to_string();
          modified_attrs.insert(ExpectsConsonant);
          modified_attrs.insert(CannotTerminate);
        } else {
          let chars: Vec<char> = modified_seq.chars().collect();
          if chars.len() >= 2 {
            let n = chars.len();
            modified_seq = chars[..n - 2].iter().chain(&chars[n - 1..]).collect();
          }
          if item.primary_pos == PrimaryPos::Verb {
            let states = morphotactics.states();
            unmodified_state = Some(states.verb_last_vowel_drop_unmod_root_s);
            modified_state = Some(states.verb_last_vowel_drop_mod_root_s);
          } else {
            original_attrs.insert(ExpectsConsonant);
          }
          modified_attrs.insert(ExpectsVowel);
          modified_attrs.insert(CannotTerminate);
        }
      }
      RootAttribute::InverseHarmony => {
        original_attrs.insert(LastVowelFrontal);
        original_attrs.remove(LastVowelBack);
        modified_attrs.insert(LastVowelFrontal);
        modified_attrs.remove(LastVowelBack);
      }
      RootAttribute::ProgressiveVowelDrop => {
        if modified_seq.chars().count() > 1 {
          modified_seq = drop_last_char(&modified_seq).to_string();
          if alphabet::contains_vowel(&modified_seq) {
            modified_attrs = attributes_of(&modified_seq);
          }
          modified_attrs.insert(LastLetterDropped);
        }
      }
      _ => {}
    }
  }

  let unmodified_state =
    unmodified_state.unwrap_or_else(|| morphotactics.get_root_state(item, original_attrs));
  let modified_state =
    modified_state.unwrap_or_else(|| morphotactics.get_root_state(item, modified_attrs));

  let original =
    StemTransition::new(item.root.clone(), Arc::clone(item), original_attrs, unmodified_state);
  let modified =
    StemTransition::new(modified_seq, Arc::clone(item), modified_attrs, modified_state);
  if original == modified {
    Ok(vec![original])
  } else {
    Ok(vec![original, modified])
  }
}

fn special_roots(
  morphotactics: &TurkishMorphotactics,
  item: &Arc<DictionaryItem>,
) -> Result<Vec<StemTransition>, MorphotacticsError> {
  use PhoneticAttribute::*;

  let states = morphotactics.states();
  let original_attrs = attributes_of(&item.pronunciation);
  let root_state = morphotactics.get_root_state(item, original_attrs);
  let stem = |surface: &str, attrs: PhoneticAttributes, to: StateId| {
    StemTransition::new(surface, Arc::clone(item), attrs, to)
  };
  let pronoun_pair = |modified: &str, original_to: StateId, modified_to: StateId| {
    vec![
      stem(&item.root, original_attrs.with(UnModifiedPronoun), original_to),
      stem(modified, attributes_of(modified).with(ModifiedPronoun), modified_to),
    ]
  };

  let transitions = match item.id() {
    "içeri_Noun" | "içeri_Adj" | "dışarı_Adj" | "dışarı_Noun" | "dışarı_Postp" | "yukarı_Noun"
    | "ileri_Noun" | "yukarı_Adj" | "şura_Noun" | "bura_Noun" | "ora_Noun" => {
      let modified_to = match item.primary_pos {
        PrimaryPos::Noun => states.noun_last_vowel_drop_root_s,
        PrimaryPos::Adjective | PrimaryPos::PostPositive => states.adj_last_vowel_drop_root_s,
        _ => return Err(MorphotacticsError::UnexpectedPos { item_id: item.id().to_string() }),
      };
      let modified = drop_last_char(&item.root);
      let modified_attrs = attributes_of(modified).with(ExpectsConsonant).with(CannotTerminate);
      vec![
        stem(&item.root, original_attrs, root_state),
        stem(modified, modified_attrs, modified_to),
      ]
    }
    "ben_Pron_Pers" | "sen_Pron_Pers" => {
      let modified = if item.lemma == "ben" { "ban" } else { "san" };
      pronoun_pair(modified, root_state, states.pron_pers_mod_s)
    }
    "demek_Verb" | "yemek_Verb" => {
      let modified = if item.lemma == "demek" { "di" } else { "yi" };
      vec![
        stem(&item.root, original_attrs, states.v_de_ye_root_s),
        stem(modified, attributes_of(modified), states.v_de_ye_root_s),
      ]
    }
    "imek_Verb" => vec![stem(&item.root, original_attrs, states.imek_root_s)],
    "birbiri_Pron_Quant" | "çoğu_Pron_Quant" | "öbürü_Pron_Quant" | "birçoğu_Pron_Quant" => {
      let modified = match item.lemma.as_str() {
        "birbiri" => "birbir",
        "çoğu" => "çok",
        "öbürü" => "öbür",
        _ => "birçok",
      };
      pronoun_pair(modified, states.pron_quant_s, states.pron_quant_modified_s)
    }
    _ => {
      return Err(MorphotacticsError::SpecialRootNotHandled { item_id: item.id().to_string() });
    }
  };
  Ok(transitions)
}

#[derive(Debug, Default)]
struct Index {
  single: HashMap<String, StemTransition>,
  multi: HashMap<String, Vec<StemTransition>>,
  different_stem_items: HashMap<String, Vec<StemTransition>>,
  // lazy
  ascii_keys: Option<HashMap<String, Vec<String>>>,
}

impl Index {
  fn insert(&mut self, transition: StemTransition) {
    let surface = transition.surface.clone();
    if let Some(list) = self.multi.get_mut(&surface) {
      if list.contains(&transition) {
        warn!(stem = %transition, "Stem transition already indexed");
        return;
      }
      list.push(transition);
    } else if let Some(existing) = self.single.remove(&surface) {
      if existing == transition {
        warn!(stem = %transition, "Stem transition already indexed");
        self.single.insert(surface, existing);
        return;
      }
      self.multi.insert(surface.clone(), vec![existing, transition]);
    } else {
      self.single.insert(surface.clone(), transition);
      self.add_ascii_key(&surface);
    }
  }

  fn remove(&mut self, transition: &StemTransition) {
    let surface = &transition.surface;
    if let Some(list) = self.multi.get_mut(surface) {
      list.retain(|t| t != transition);
      match list.len() {
        0 => {
          self.multi.remove(surface);
          self.remove_ascii_key(surface);
        }
        1 => {
          if let Some(last) = self.multi.remove(surface).and_then(|mut l| l.pop()) {
            self.single.insert(surface.clone(), last);
          }
        }
        _ => {}
      }
    } else if self.single.get(surface).is_some_and(|t| t == transition) {
      self.single.remove(surface);
      self.remove_ascii_key(surface);
    }
  }

  fn lookup(&self, surface: &str, out: &mut Vec<StemTransition>) {
    if let Some(t) = self.single.get(surface) {
      out.push(t.clone());
    } else if let Some(list) = self.multi.get(surface) {
      out.extend(list.iter().cloned());
    }
  }

  fn build_ascii_keys(&mut self) {
    let mut keys: HashMap<String, Vec<String>> = HashMap::new();
    for surface in self.single.keys().chain(self.multi.keys()) {
      if alphabet::contains_ascii_related(surface) {
        keys.entry(alphabet::to_ascii(surface)).or_default().push(surface.clone());
      }
    }
    self.ascii_keys = Some(keys);
  }

  fn add_ascii_key(&mut self, surface: &str) {
    if let Some(keys) = self.ascii_keys.as_mut()
      && alphabet::contains_ascii_related(surface)
    {
      let list = keys.entry(alphabet::to_ascii(surface)).or_default();
      if !list.iter().any(|s| s == surface) {
        list.push(surface.to_string());
      }
    }
  }

  fn remove_ascii_key(&mut self, surface: &str) {
    let Some(keys) = self.ascii_keys.as_mut() else { return };
    let ascii = alphabet::to_ascii(surface);
    if let Some(list) = keys.get_mut(&ascii) {
      list.retain(|s| s != surface);
      if list.is_empty() {
        keys.remove(&ascii);
      }
    }
  }
}

/// Stem transitions indexed by surface.
///
/// Lookups take the read lock. Runtime item injection and the lazy ASCII fold map take the
/// write lock.
#[derive(Debug, Default)]
pub struct StemTransitions {
  index: RwLock<Index>,
}

impl StemTransitions {
  /// Empty index
  pub fn new() -> Self {
    Self::default()
  }

  /// Indexes the transitions generated for `item`.
  ///
  /// Adding an item that is already indexed changes nothing.
  pub fn add(&self, item: &DictionaryItem, transitions: Vec<StemTransition>) {
    let mut index = self.index.write();
    let different_stem =
      transitions.len() > 1 || transitions.first().is_some_and(|t| t.surface != item.root);
    if different_stem {
      if index.different_stem_items.contains_key(item.id()) {
        warn!(item = %item.id(), "Stem transitions already indexed, skipped");
        return;
      }
      index.different_stem_items.insert(item.id().to_string(), transitions.clone());
    }
    for transition in transitions {
      index.insert(transition);
    }
  }

  /// Retracts the transitions generated for `item`, including its side index entry.
  pub fn remove(&self, item: &DictionaryItem, transitions: &[StemTransition]) {
    let mut index = self.index.write();
    for transition in transitions {
      index.remove(transition);
    }
    index.different_stem_items.remove(item.id());
  }

  /// Transitions whose surface is exactly `stem`.
  pub fn get_transitions(&self, stem: &str) -> Vec<StemTransition> {
    let mut out = Vec::new();
    self.index.read().lookup(stem, &mut out);
    out
  }

  /// Every indexed transition.
  pub fn all(&self) -> Vec<StemTransition> {
    let index = self.index.read();
    index.single.values().chain(index.multi.values().flatten()).cloned().collect()
  }

  /// Number of indexed transitions
  pub fn len(&self) -> usize {
    let index = self.index.read();
    index.single.len() + index.multi.values().map(Vec::len).sum::<usize>()
  }

  /// True if nothing is indexed.
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Transitions generated for `item`.
  pub fn get_transitions_for_item(&self, item: &DictionaryItem) -> Vec<StemTransition> {
    let index = self.index.read();
    if let Some(list) = index.different_stem_items.get(item.id()) {
      return list.clone();
    }
    let mut out = Vec::new();
    index.lookup(&item.root, &mut out);
    out.retain(|t| *t.item == *item);
    out
  }

  /// Transitions whose surface is `stem` or folds to the same ASCII form.
  pub fn get_transitions_ascii_tolerant(&self, stem: &str) -> Vec<StemTransition> {
    self.ensure_ascii_keys();
    let index = self.index.read();
    let mut out = Vec::new();
    Self::ascii_tolerant_lookup(&index, stem, &mut out);
    out
  }

  fn ascii_tolerant_lookup(index: &Index, stem: &str, out: &mut Vec<StemTransition>) {
    let start = out.len();
    index.lookup(stem, out);
    let Some(keys) = index.ascii_keys.as_ref() else { return };
    if let Some(surfaces) = keys.get(&alphabet::to_ascii(stem)) {
      for surface in surfaces {
        let mut found = Vec::new();
        index.lookup(surface, &mut found);
        for t in found {
          if !out[start..].contains(&t) {
            out.push(t);
          }
        }
      }
    }
  }

  /// Transitions of every prefix of `input`, shortest prefix first.
  pub fn get_prefix_matches(&self, input: &str, ascii_tolerant: bool) -> Vec<StemTransition> {
    if ascii_tolerant {
      self.ensure_ascii_keys();
    }
    let index = self.index.read();
    let mut matches = Vec::new();
    let ends = input.char_indices().skip(1).map(|(i, _)| i).chain(std::iter::once(input.len()));
    for end in ends.filter(|e| *e > 0) {
      let prefix = &input[..end];
      if ascii_tolerant {
        Self::ascii_tolerant_lookup(&index, prefix, &mut matches);
      } else {
        index.lookup(prefix, &mut matches);
      }
    }
    matches
  }

  fn ensure_ascii_keys(&self) {
    if self.index.read().ascii_keys.is_some() {
      return;
    }
    let mut index = self.index.write();
    if index.ascii_keys.is_none() {
      index.build_ascii_keys();
      debug!(keys = index.ascii_keys.as_ref().map_or(0, HashMap::len), "Built ASCII stem map");
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::lexicon::load_text;

  fn morphotactics(lines: &str) -> TurkishMorphotactics {
    TurkishMorphotactics::new(Arc::new(load_text(lines).unwrap())).unwrap()
  }

  fn item(mt: &TurkishMorphotactics, id: &str) -> Arc<DictionaryItem> {
    Arc::clone(mt.lexicon().get_item_by_id(id).unwrap())
  }

  fn surfaces(transitions: &[StemTransition]) -> Vec<&str> {
    transitions.iter().map(|t| t.surface.as_str()).collect()
  }

  #[test]
  fn voicing_produces_modified_stem() {
    let mt = morphotactics("kitap\nrenk [A:Voicing]");
    let ts = mt.generate_stem_transitions(&item(&mt, "kitap_Noun")).unwrap();
    assert_eq!(surfaces(&ts), vec!["kitap", "kitab"]);
    assert!(ts[0].attributes.contains(PhoneticAttribute::ExpectsConsonant));
    assert!(ts[1].attributes.contains(PhoneticAttribute::ExpectsVowel));
    assert!(ts[1].attributes.contains(PhoneticAttribute::CannotTerminate));
    assert!(!ts[1].attributes.contains(PhoneticAttribute::LastLetterVoicelessStop));

    let ts = mt.generate_stem_transitions(&item(&mt, "renk_Noun")).unwrap();
    assert_eq!(surfaces(&ts), vec!["renk", "reng"]);
  }

  #[test]
  fn voicing_on_unvoiceable_letter_fails() {
    let mt = morphotactics("kalem");
    let bad = Arc::new(
      DictionaryItem::simple("kalem", PrimaryPos::Noun, crate::lexicon::SecondaryPos::None)
        .with_attribute(RootAttribute::Voicing),
    );
    match mt.generate_stem_transitions(&bad) {
      Err(MorphotacticsError::VoicingFailed { item_id }) => assert_eq!(item_id, "kalem_Noun"),
      other => panic!("expected VoicingFailed, got {other:?}"),
    }
  }

  #[test]
  fn last_vowel_drop_and_doubling() {
    let mt = morphotactics("burun [A:LastVowelDrop]\nhak [A:Doubling]\nkavurmak [A:LastVowelDrop]");
    let ts = mt.generate_stem_transitions(&item(&mt, "burun_Noun")).unwrap();
    assert_eq!(surfaces(&ts), vec!["burun", "burn"]);

    let ts = mt.generate_stem_transitions(&item(&mt, "hak_Noun")).unwrap();
    assert_eq!(surfaces(&ts), vec!["hak", "hakk"]);

    let ts = mt.generate_stem_transitions(&item(&mt, "kavurmak_Verb")).unwrap();
    assert_eq!(surfaces(&ts), vec!["kavur", "kavr"]);
    assert_eq!(ts[0].to, mt.states().verb_last_vowel_drop_unmod_root_s);
    assert_eq!(ts[1].to, mt.states().verb_last_vowel_drop_mod_root_s);
  }

  #[test]
  fn progressive_vowel_drop_marks_dropped_letter() {
    let mt = morphotactics("aramak");
    let ts = mt.generate_stem_transitions(&item(&mt, "aramak_Verb")).unwrap();
    assert_eq!(surfaces(&ts), vec!["ara", "ar"]);
    assert!(ts[1].attributes.contains(PhoneticAttribute::LastLetterDropped));
    assert_eq!(ts[1].to, mt.states().verb_root_vowel_drop_s);
  }

  #[test]
  fn special_pronoun_stems() {
    let mt = morphotactics("ben [P:Pron,Pers]\nçoğu [P:Pron,Quant]");
    let ts = mt.generate_stem_transitions(&item(&mt, "ben_Pron_Pers")).unwrap();
    assert_eq!(surfaces(&ts), vec!["ben", "ban"]);
    assert!(ts[0].attributes.contains(PhoneticAttribute::UnModifiedPronoun));
    assert!(ts[1].attributes.contains(PhoneticAttribute::ModifiedPronoun));
    assert_eq!(ts[1].to, mt.states().pron_pers_mod_s);

    let ts = mt.generate_stem_transitions(&item(&mt, "çoğu_Pron_Quant")).unwrap();
    assert_eq!(surfaces(&ts), vec!["çoğu", "çok"]);
  }

  #[test]
  fn prefix_matches_cover_every_prefix() {
    let mt = morphotactics("kitap\nkit\nki [P:Conj]");
    let matches = mt.stem_transitions().get_prefix_matches("kitaba", false);
    let mut found = surfaces(&matches);
    found.sort_unstable();
    assert_eq!(found, vec!["ki", "kit", "kitab"]);
  }

  #[test]
  fn ascii_tolerant_matches_fold_diacritics() {
    let mt = morphotactics("çiçek\nşeker");
    let stems = mt.stem_transitions();
    assert!(stems.get_prefix_matches("cicek", false).is_empty());
    let matches = stems.get_prefix_matches("cicekler", true);
    assert_eq!(surfaces(&matches), vec!["çiçek"]);
    assert_eq!(surfaces(&stems.get_transitions_ascii_tolerant("seker")), vec!["şeker"]);
  }

  #[test]
  fn add_then_remove_restores_index() {
    let mt = morphotactics("kitap\nkalem");
    let stems = mt.stem_transitions();
    let before = stems.len();
    stems.get_prefix_matches("x", true);

    let runtime = Arc::new(
      DictionaryItem::simple("Çorlu", PrimaryPos::Noun, crate::lexicon::SecondaryPos::ProperNoun),
    );
    mt.add_dictionary_item(&runtime).unwrap();
    assert_eq!(stems.len(), before + 1);
    assert_eq!(surfaces(&stems.get_transitions_ascii_tolerant("Corlu")), vec!["Çorlu"]);

    mt.remove_dictionary_item(&runtime).unwrap();
    assert_eq!(stems.len(), before);
    assert!(stems.get_transitions("Çorlu").is_empty());
    assert!(stems.get_transitions_ascii_tolerant("Corlu").is_empty());
    assert!(stems.get_transitions_for_item(&runtime).is_empty());
  }

  #[test]
  fn shared_surfaces_collapse_back_to_single() {
    let mt = morphotactics("yüz [P:Num]\nyüz\nyüzmek");
    let stems = mt.stem_transitions();
    assert_eq!(stems.get_transitions("yüz").len(), 3);

    let noun = item(&mt, "yüz_Noun");
    mt.remove_dictionary_item(&noun).unwrap();
    assert_eq!(stems.get_transitions("yüz").len(), 2);
    let verb = item(&mt, "yüzmek_Verb");
    mt.remove_dictionary_item(&verb).unwrap();
    let rest = stems.get_transitions("yüz");
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].item.id(), "yüz_Num");
  }

  #[test]
  fn transitions_for_item_use_side_index() {
    let mt = morphotactics("kitap\nkalem");
    let kitap = item(&mt, "kitap_Noun");
    assert_eq!(surfaces(&mt.stem_transitions().get_transitions_for_item(&kitap)), vec![
      "kitap", "kitab"
    ]);
    let kalem = item(&mt, "kalem_Noun");
    assert_eq!(surfaces(&mt.stem_transitions().get_transitions_for_item(&kalem)), vec!["kalem"]);
  }

  #[test]
  fn adding_an_item_twice_changes_nothing() {
    let mt = morphotactics("kitap\nkalem");
    let stems = mt.stem_transitions();
    let before = stems.len();
    let kitap = item(&mt, "kitap_Noun");
    let kalem = item(&mt, "kalem_Noun");

    mt.add_dictionary_item(&kitap).unwrap();
    mt.add_dictionary_item(&kalem).unwrap();
    assert_eq!(stems.len(), before);
    assert_eq!(surfaces(&stems.get_transitions_for_item(&kitap)), vec!["kitap", "kitab"]);
    assert_eq!(surfaces(&stems.get_transitions_for_item(&kalem)), vec!["kalem"]);
    assert_eq!(stems.get_transitions("kitab").len(), 1);
  }
}
