//! In-memory lexicon.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use super::dictionary_item::DictionaryItem;

/// Ordered collection of lexicon items, indexed by id and by lemma.
#[derive(Debug, Default, Clone)]
pub struct RootLexicon {
  items: Vec<Arc<DictionaryItem>>,
  id_map: HashMap<String, Arc<DictionaryItem>>,
  lemma_map: HashMap<String, Vec<Arc<DictionaryItem>>>,
}

impl RootLexicon {
  /// Empty lexicon
  pub fn new() -> Self {
    Self::default()
  }

  /// Builds a lexicon from items. Duplicates are skipped.
  pub fn from_items(items: impl IntoIterator<Item = DictionaryItem>) -> Self {
    let mut lexicon = Self::new();
    for item in items {
      lexicon.add(item);
    }
    lexicon
  }

  /// Adds an item. A second item with an existing id is logged and ignored.
  ///
  /// Returns the stored item.
  pub fn add(&mut self, item: DictionaryItem) -> Arc<DictionaryItem> {
    self.add_shared(Arc::new(item))
  }

  /// Adds an already shared item.
  pub fn add_shared(&mut self, item: Arc<DictionaryItem>) -> Arc<DictionaryItem> {
    if let Some(existing) = self.id_map.get(item.id()) {
      warn!(id = %item.id(), "Duplicated lexicon item, ignored");
      return Arc::clone(existing);
    }
    self.id_map.insert(item.id().to_string(), Arc::clone(&item));
    self.lemma_map.entry(item.lemma.clone()).or_default().push(Arc::clone(&item));
    self.items.push(Arc::clone(&item));
    item
  }

  /// Looks up an item by id (`kalem_Noun`).
  pub fn get_item_by_id(&self, id: &str) -> Option<&Arc<DictionaryItem>> {
    self.id_map.get(id)
  }

  /// All items with the given lemma.
  pub fn get_matching_items(&self, lemma: &str) -> &[Arc<DictionaryItem>] {
    self.lemma_map.get(lemma).map(Vec::as_slice).unwrap_or(&[])
  }

  /// True if an item with the same id exists.
  pub fn contains(&self, item: &DictionaryItem) -> bool {
    self.id_map.contains_key(item.id())
  }

  /// Number of items
  pub fn len(&self) -> usize {
    self.items.len()
  }

  /// True if empty
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Items in insertion order.
  pub fn iter(&self) -> impl Iterator<Item = &Arc<DictionaryItem>> {
    self.items.iter()
  }
}

impl<'a> IntoIterator for &'a RootLexicon {
  type Item = &'a Arc<DictionaryItem>;
  type IntoIter = std::slice::Iter<'a, Arc<DictionaryItem>>;

  fn into_iter(self) -> Self::IntoIter {
    self.items.iter()
  }
}
