//! Accepted analyses.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::lexicon::{DictionaryItem, RootAttribute, SecondaryPos, UNKNOWN};
use crate::morphotactics::{Morpheme, MorphemeId, TurkishMorphotactics};

use super::search_path::SearchPath;

/// A morpheme with the text that realized it.
#[derive(Debug, Clone)]
pub struct MorphemeData {
  /// Registry index
  pub morpheme_id: MorphemeId,
  /// Morpheme description
  pub morpheme: Morpheme,
  /// Realized text, empty for morphemes without surface
  pub surface: String,
}

impl MorphemeData {
  /// Creates morpheme data.
  pub fn new(morpheme_id: MorphemeId, morpheme: Morpheme, surface: impl Into<String>) -> Self {
    Self { morpheme_id, morpheme, surface: surface.into() }
  }
}

impl PartialEq for MorphemeData {
  fn eq(&self, other: &Self) -> bool {
    self.morpheme_id == other.morpheme_id && self.surface == other.surface
  }
}

impl Eq for MorphemeData {}

impl Hash for MorphemeData {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.morpheme_id.hash(state);
    self.surface.hash(state);
  }
}

impl fmt::Display for MorphemeData {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if !self.surface.is_empty() {
      write!(f, "{}:", self.surface)?;
    }
    f.write_str(self.morpheme.id)
  }
}

/// One decomposition of a word: the root item and its morphemes.
///
/// Morphemes are split into derivation groups. `group_boundaries[i]` is the index of the
/// first morpheme of group `i`, so the first boundary is always 0.
#[derive(Debug, Clone)]
pub struct SingleAnalysis {
  item: Arc<DictionaryItem>,
  morphemes: Vec<MorphemeData>,
  group_boundaries: Vec<usize>,
}

impl SingleAnalysis {
  /// Creates an analysis.
  pub fn new(
    item: Arc<DictionaryItem>,
    morphemes: Vec<MorphemeData>,
    group_boundaries: Vec<usize>,
  ) -> Self {
    Self { item, morphemes, group_boundaries }
  }

  /// Builds the analysis of an accepted path.
  ///
  /// `Nom` and `Pnon` are bookkeeping morphemes and are left out. Dummy items are replaced by
  /// the item they refer to.
  pub fn from_search_path(path: &SearchPath, morphotactics: &TurkishMorphotactics) -> Self {
    let graph = morphotactics.graph();
    let registry = morphotactics.morphemes();
    let mut morphemes = Vec::with_capacity(path.transitions.len());
    for t in &path.transitions {
      let id = graph.state(t.state).morpheme;
      if id == registry.nom || id == registry.pnon {
        continue;
      }
      let data = if t.surface.is_empty() {
        morphotactics.empty_morpheme_data(id).clone()
      } else {
        MorphemeData::new(id, registry.get(id).clone(), t.surface.clone())
      };
      morphemes.push(data);
    }

    let mut group_boundaries = vec![0];
    group_boundaries.extend(
      morphemes.iter().enumerate().filter(|(_, m)| m.morpheme.derivational).map(|(i, _)| i),
    );

    let mut item = Arc::clone(path.dictionary_item());
    if item.has_attribute(RootAttribute::Dummy)
      && let Some(reference) = item.reference_item.clone()
    {
      item = reference;
    }
    Self { item, morphemes, group_boundaries }
  }

  /// Analysis of an unrecognized word: [`UNKNOWN`] with the whole input as stem.
  pub fn unknown(input: &str, morphotactics: &TurkishMorphotactics) -> Self {
    Self::dummy(input, Arc::clone(&UNKNOWN), morphotactics)
  }

  /// Single-morpheme analysis of `input` for `item`.
  pub fn dummy(
    input: &str,
    item: Arc<DictionaryItem>,
    morphotactics: &TurkishMorphotactics,
  ) -> Self {
    let registry = morphotactics.morphemes();
    let unknown = registry.unknown;
    Self::new(item, vec![MorphemeData::new(unknown, registry.get(unknown).clone(), input)], vec![0])
  }

  /// Root item
  pub fn item(&self) -> &Arc<DictionaryItem> {
    &self.item
  }

  /// Morphemes with their surfaces, the root morpheme first.
  pub fn morpheme_data(&self) -> &[MorphemeData] {
    &self.morphemes
  }

  /// Morpheme ids in order
  pub fn morphemes(&self) -> Vec<MorphemeId> {
    self.morphemes.iter().map(|m| m.morpheme_id).collect()
  }

  /// Start index of each derivation group.
  pub fn group_boundaries(&self) -> &[usize] {
    &self.group_boundaries
  }

  /// Number of derivation groups
  pub fn group_count(&self) -> usize {
    self.group_boundaries.len()
  }

  /// Morphemes of derivation group `index`, if it exists.
  pub fn group(&self, index: usize) -> Option<&[MorphemeData]> {
    let start = *self.group_boundaries.get(index)?;
    let end = self.group_boundaries.get(index + 1).copied().unwrap_or(self.morphemes.len());
    Some(&self.morphemes[start..end])
  }

  /// Morphemes of the last derivation group.
  pub fn last_group(&self) -> &[MorphemeData] {
    let start = self.group_boundaries.last().copied().unwrap_or(0);
    &self.morphemes[start..]
  }

  /// Surface of the root
  pub fn stem(&self) -> &str {
    self.morphemes.first().map_or("", |m| m.surface.as_str())
  }

  /// Concatenated suffix surfaces
  pub fn ending(&self) -> String {
    self.morphemes.iter().skip(1).map(|m| m.surface.as_str()).collect()
  }

  /// Stem plus ending
  pub fn surface_form(&self) -> String {
    let mut surface = self.stem().to_string();
    surface.push_str(&self.ending());
    surface
  }

  /// True if `morpheme` appears anywhere.
  pub fn contains_morpheme(&self, morpheme: MorphemeId) -> bool {
    self.morphemes.iter().any(|m| m.morpheme_id == morpheme)
  }

  /// True if some morpheme is colloquial.
  pub fn contains_informal_morpheme(&self) -> bool {
    self.morphemes.iter().any(|m| m.morpheme.informal)
  }

  /// True for the [`UNKNOWN`] placeholder analysis.
  pub fn is_unknown(&self) -> bool {
    self.item.is_unknown()
  }

  /// True if the root was created for this input only.
  pub fn is_runtime(&self) -> bool {
    self.item.has_attribute(RootAttribute::Runtime)
  }

  /// Same analysis re-keyed onto another item and stem surface.
  pub fn copy_for(&self, item: Arc<DictionaryItem>, stem: &str) -> Self {
    let mut morphemes = self.morphemes.clone();
    if let Some(first) = morphemes.first_mut() {
      first.surface = stem.to_string();
    }
    Self { item, morphemes, group_boundaries: self.group_boundaries.clone() }
  }

  /// Morphemes rendered as `stem:Noun+ler:A3pl+im:P1sg`, with `|` before and `→` after each
  /// derivational morpheme.
  pub fn format_morphemes(&self) -> String {
    let data = &self.morphemes;
    let Some(first) = data.first() else { return String::new() };
    let mut out = format!("{}:{}", first.surface, first.morpheme.id);
    if data.len() > 1 && !data[1].morpheme.derivational {
      out.push('+');
    }
    for (i, m) in data.iter().enumerate().skip(1) {
      if m.morpheme.derivational {
        out.push('|');
      }
      out.push_str(&m.to_string());
      if m.morpheme.derivational {
        out.push('→');
      } else if i + 1 < data.len() && !data[i + 1].morpheme.derivational {
        out.push('+');
      }
    }
    out
  }

  /// Full rendering: `[lemma:Pos, SPos] morphemes`.
  pub fn format_long(&self) -> String {
    let mut out = format!("[{}:{}", self.item.lemma, self.item.primary_pos.short_form());
    if self.item.secondary_pos != SecondaryPos::None {
      out.push_str(", ");
      out.push_str(self.item.secondary_pos.short_form());
    }
    out.push_str("] ");
    out.push_str(&self.format_morphemes());
    out
  }
}

impl PartialEq for SingleAnalysis {
  fn eq(&self, other: &Self) -> bool {
    self.item == other.item && self.morphemes == other.morphemes
  }
}

impl Eq for SingleAnalysis {}

impl Hash for SingleAnalysis {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.item.id().hash(state);
    self.morphemes.hash(state);
  }
}

impl fmt::Display for SingleAnalysis {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.format_long())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::lexicon::{PrimaryPos, load_text};

  fn morphotactics() -> TurkishMorphotactics {
    TurkishMorphotactics::new(Arc::new(load_text("kitap").unwrap())).unwrap()
  }

  fn data(mt: &TurkishMorphotactics, id: MorphemeId, surface: &str) -> MorphemeData {
    MorphemeData::new(id, mt.morphemes().get(id).clone(), surface)
  }

  fn kitapligim(mt: &TurkishMorphotactics) -> SingleAnalysis {
    let m = mt.morphemes();
    let item = Arc::clone(mt.lexicon().get_item_by_id("kitap_Noun").unwrap());
    SingleAnalysis::new(
      item,
      vec![
        data(mt, m.noun, "kitap"),
        data(mt, m.a3sg, ""),
        data(mt, m.ness, "lığ"),
        data(mt, m.noun, ""),
        data(mt, m.a3sg, ""),
        data(mt, m.p1sg, "ım"),
      ],
      vec![0, 2],
    )
  }

  #[test]
  fn formats_groups() {
    let mt = morphotactics();
    let analysis = kitapligim(&mt);
    assert_eq!(analysis.format_long(), "[kitap:Noun] kitap:Noun+A3sg|lığ:Ness→Noun+A3sg+ım:P1sg");
    assert_eq!(analysis.surface_form(), "kitaplığım");
    assert_eq!(analysis.ending(), "lığım");
    assert_eq!(analysis.group_count(), 2);
    assert_eq!(analysis.group(1).map(<[MorphemeData]>::len), Some(4));
    assert!(analysis.group(2).is_none());
    assert_eq!(analysis.last_group()[0].surface, "lığ");
  }

  #[test]
  fn equality_ignores_group_boundaries() {
    let mt = morphotactics();
    let a = kitapligim(&mt);
    let mut b = a.clone();
    b.group_boundaries = vec![0];
    assert_eq!(a, b);
    let kitap = DictionaryItem::simple("kitap", PrimaryPos::Noun, SecondaryPos::None);
    let other = a.copy_for(Arc::new(kitap), "kitab");
    assert_ne!(a, other);
    assert_eq!(other.stem(), "kitab");
  }

  #[test]
  fn unknown_analysis() {
    let mt = morphotactics();
    let analysis = SingleAnalysis::unknown("xyz", &mt);
    assert!(analysis.is_unknown());
    assert!(!analysis.is_runtime());
    assert_eq!(analysis.stem(), "xyz");
    assert_eq!(analysis.format_morphemes(), "xyz:Unknown");
  }

  #[test]
  fn surface_less_morphemes_come_from_shared_table() {
    let mt = Arc::new(morphotactics());
    for (id, morpheme) in mt.morphemes().iter() {
      let shared = mt.empty_morpheme_data(id);
      assert_eq!(shared.morpheme_id, id);
      assert_eq!(shared.morpheme, *morpheme);
      assert!(shared.surface.is_empty());
    }

    let analyzer = crate::analysis::RuleBasedAnalyzer::new(Arc::clone(&mt));
    let results = analyzer.analyze("kitabım").unwrap();
    assert!(!results.is_empty());
    for analysis in &results {
      let empty: Vec<_> =
        analysis.morpheme_data().iter().filter(|d| d.surface.is_empty()).collect();
      assert!(!empty.is_empty(), "{analysis}");
      for data in empty {
        assert_eq!(data, mt.empty_morpheme_data(data.morpheme_id));
        assert_eq!(data.morpheme, mt.empty_morpheme_data(data.morpheme_id).morpheme);
      }
    }
    assert_eq!(analyzer.analyze("kitabım").unwrap(), results);
  }
}
