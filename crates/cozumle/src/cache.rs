//! Bounded least-recently-used cache for analysis results.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Capacity-bounded LRU map.
///
/// Recency is kept in a queue of keys. Touching a key moves it to the back, eviction pops the
/// front. Both are linear in the queue length, which stays small for word caches.
#[derive(Debug)]
pub struct LruCache<K, V> {
  capacity: usize,
  entries: HashMap<K, V>,
  order: VecDeque<K>,
  hits: u64,
  misses: u64,
}

impl<K: Eq + Hash + Clone, V: Clone> LruCache<K, V> {
  /// Creates a cache holding at most `capacity` entries. A zero capacity is raised to one.
  pub fn new(capacity: usize) -> Self {
    let capacity = capacity.max(1);
    Self {
      capacity,
      entries: HashMap::with_capacity(capacity),
      order: VecDeque::with_capacity(capacity),
      hits: 0,
      misses: 0,
    }
  }

  /// Cached value for `key`, marking it most recently used.
  pub fn get(&mut self, key: &K) -> Option<V> {
    match self.entries.get(key) {
      Some(value) => {
        let value = value.clone();
        self.touch(key);
        self.hits += 1;
        Some(value)
      }
      None => {
        self.misses += 1;
        None
      }
    }
  }

  /// Stores `value`, evicting the least recently used entry when full.
  pub fn put(&mut self, key: K, value: V) {
    if self.entries.insert(key.clone(), value).is_some() {
      self.touch(&key);
      return;
    }
    self.order.push_back(key);
    while self.entries.len() > self.capacity {
      match self.order.pop_front() {
        Some(old) => {
          self.entries.remove(&old);
        }
        None => break,
      }
    }
  }

  /// Drops every entry. Hit and miss counters are kept.
  pub fn clear(&mut self) {
    self.entries.clear();
    self.order.clear();
  }

  /// Number of cached entries
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// True if nothing is cached.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Maximum number of entries
  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// (hits, misses) since creation
  pub fn stats(&self) -> (u64, u64) {
    (self.hits, self.misses)
  }

  fn touch(&mut self, key: &K) {
    if let Some(pos) = self.order.iter().position(|k| k == key)
      && let Some(k) = self.order.remove(pos)
    {
      self.order.push_back(k);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn evicts_least_recently_used() {
    let mut cache = LruCache::new(2);
    cache.put("a", 1);
    cache.put("b", 2);
    assert_eq!(cache.get(&"a"), Some(1));
    cache.put("c", 3);

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get(&"b"), None);
    assert_eq!(cache.get(&"a"), Some(1));
    assert_eq!(cache.get(&"c"), Some(3));
  }

  #[test]
  fn overwrite_refreshes_entry() {
    let mut cache = LruCache::new(2);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("a", 10);
    cache.put("c", 3);

    assert_eq!(cache.get(&"a"), Some(10));
    assert_eq!(cache.get(&"b"), None);
  }

  #[test]
  fn counts_hits_and_misses() {
    let mut cache = LruCache::new(0);
    assert_eq!(cache.capacity(), 1);
    assert_eq!(cache.get(&1), None::<u8>);
    cache.put(1, 7);
    assert_eq!(cache.get(&1), Some(7));
    assert_eq!(cache.stats(), (1, 1));

    cache.clear();
    assert!(cache.is_empty());
    assert_eq!(cache.stats(), (1, 1));
  }
}
