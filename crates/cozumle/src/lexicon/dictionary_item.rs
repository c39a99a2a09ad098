//! Lexicon entry.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, LazyLock};

use super::pos::{PrimaryPos, SecondaryPos};
use super::root_attribute::{RootAttribute, RootAttributes};

/// A word in the lexicon.
///
/// Identity is the generated `id` (`lemma_Pos[_SPos][_index]`), e.g. `kalem_Noun` or
/// `ben_Pron_Pers`.
#[derive(Clone)]
pub struct DictionaryItem {
  /// Lemma (dictionary form, `okumak` for verbs)
  pub lemma: String,
  /// Root (`oku` for `okumak`)
  pub root: String,
  /// Primary part of speech
  pub primary_pos: PrimaryPos,
  /// Secondary part of speech
  pub secondary_pos: SecondaryPos,
  /// Root attributes
  pub attributes: RootAttributes,
  /// Pronunciation. Defaults to the root.
  pub pronunciation: String,
  /// Disambiguation index for homographs with the same POS
  pub index: u32,
  /// Item this one stands for (used with [`RootAttribute::Dummy`])
  pub reference_item: Option<Arc<DictionaryItem>>,
  id: String,
}

/// Placeholder item used for analyses of unknown words.
pub static UNKNOWN: LazyLock<Arc<DictionaryItem>> = LazyLock::new(|| {
  Arc::new(DictionaryItem::new(
    "UNK",
    "UNK",
    PrimaryPos::Unknown,
    SecondaryPos::UnknownSec,
    RootAttributes::empty(),
    Some("UNK"),
    0,
  ))
});

impl DictionaryItem {
  /// Creates an item. `pronunciation` defaults to `root`.
  pub fn new(
    lemma: impl Into<String>,
    root: impl Into<String>,
    primary_pos: PrimaryPos,
    secondary_pos: SecondaryPos,
    attributes: RootAttributes,
    pronunciation: Option<&str>,
    index: u32,
  ) -> Self {
    let lemma = lemma.into();
    let root = root.into();
    let pronunciation = pronunciation.map(str::to_string).unwrap_or_else(|| root.clone());
    let id = Self::generate_id(&lemma, primary_pos, secondary_pos, index);
    Self {
      lemma,
      root,
      primary_pos,
      secondary_pos,
      attributes,
      pronunciation,
      index,
      reference_item: None,
      id,
    }
  }

  /// Shorthand for an item whose lemma and root are the same.
  pub fn simple(word: &str, primary_pos: PrimaryPos, secondary_pos: SecondaryPos) -> Self {
    Self::new(word, word, primary_pos, secondary_pos, RootAttributes::empty(), None, 0)
  }

  /// Builds the id: `kalem` + Noun → `kalem_Noun`.
  pub fn generate_id(
    lemma: &str,
    primary_pos: PrimaryPos,
    secondary_pos: SecondaryPos,
    index: u32,
  ) -> String {
    let mut id = format!("{}_{}", lemma, primary_pos.short_form());
    if secondary_pos != SecondaryPos::None {
      id.push('_');
      id.push_str(secondary_pos.short_form());
    }
    if index > 0 {
      id.push('_');
      id.push_str(&index.to_string());
    }
    id
  }

  /// Item id
  pub fn id(&self) -> &str {
    &self.id
  }

  /// Attribute membership
  pub fn has_attribute(&self, attr: RootAttribute) -> bool {
    self.attributes.contains(attr)
  }

  /// True for the [`UNKNOWN`] placeholder.
  pub fn is_unknown(&self) -> bool {
    self.primary_pos == PrimaryPos::Unknown && self.id == UNKNOWN.id
  }

  /// Lemma without the verb infinitive suffix (`okumak` → `oku`).
  pub fn normalized_lemma(&self) -> &str {
    if self.primary_pos == PrimaryPos::Verb && self.lemma.chars().count() > 3 {
      let cut = self.lemma.char_indices().rev().nth(2).map_or(0, |(i, _)| i);
      &self.lemma[..cut]
    } else {
      &self.lemma
    }
  }

  /// Returns a copy carrying an additional attribute.
  #[must_use]
  pub fn with_attribute(mut self, attr: RootAttribute) -> Self {
    self.attributes.insert(attr);
    self
  }

  /// Links this item to the item it stands for.
  pub fn set_reference_item(&mut self, item: Arc<DictionaryItem>) {
    self.reference_item = Some(item);
  }
}

impl PartialEq for DictionaryItem {
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id
  }
}

impl Eq for DictionaryItem {}

impl Hash for DictionaryItem {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.id.hash(state);
  }
}

impl fmt::Debug for DictionaryItem {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DictionaryItem")
      .field("id", &self.id)
      .field("root", &self.root)
      .field("pronunciation", &self.pronunciation)
      .field("attributes", &self.attributes)
      .finish()
  }
}

impl fmt::Display for DictionaryItem {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} [P:{}", self.lemma, self.primary_pos.short_form())?;
    if self.secondary_pos != SecondaryPos::None {
      write!(f, ", {}", self.secondary_pos.short_form())?;
    }
    if !self.attributes.is_empty() {
      let names: Vec<&str> = self.attributes.iter().map(|a| a.name()).collect();
      write!(f, "; A:{}", names.join(", "))?;
    }
    write!(f, "]")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn id_includes_secondary_pos_and_index() {
    let item = DictionaryItem::simple("kalem", PrimaryPos::Noun, SecondaryPos::None);
    assert_eq!(item.id(), "kalem_Noun");

    let item = DictionaryItem::simple("ben", PrimaryPos::Pronoun, SecondaryPos::PersonalPron);
    assert_eq!(item.id(), "ben_Pron_Pers");

    let item = DictionaryItem::new(
      "yüz",
      "yüz",
      PrimaryPos::Noun,
      SecondaryPos::None,
      RootAttributes::empty(),
      None,
      2,
    );
    assert_eq!(item.id(), "yüz_Noun_2");
  }

  #[test]
  fn normalized_lemma_strips_infinitive() {
    let verb = DictionaryItem::new(
      "okumak",
      "oku",
      PrimaryPos::Verb,
      SecondaryPos::None,
      RootAttributes::empty(),
      None,
      0,
    );
    assert_eq!(verb.normalized_lemma(), "oku");
    let verb = DictionaryItem::new(
      "gitmek",
      "git",
      PrimaryPos::Verb,
      SecondaryPos::None,
      RootAttributes::empty(),
      None,
      0,
    );
    assert_eq!(verb.normalized_lemma(), "git");
    let noun = DictionaryItem::simple("kalem", PrimaryPos::Noun, SecondaryPos::None);
    assert_eq!(noun.normalized_lemma(), "kalem");
  }

  #[test]
  fn display_lists_attributes() {
    let item = DictionaryItem::simple("kitap", PrimaryPos::Noun, SecondaryPos::None)
      .with_attribute(RootAttribute::Voicing);
    assert_eq!(item.to_string(), "kitap [P:Noun; A:Voicing]");
  }

  #[test]
  fn unknown_item() {
    assert!(UNKNOWN.is_unknown());
    assert_eq!(UNKNOWN.id(), "UNK_Unk_Unk");
  }
}
