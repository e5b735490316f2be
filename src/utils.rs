//! Shared contract trait and injectable hash functions for the hash maps.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::{ChainingHashMap, ProbingHashMap};

/// An externally supplied hash function.
///
/// Must be pure and independent of any table capacity; the maps reduce the
/// result modulo their current capacity themselves.
pub type HashFn = fn(&str) -> u64;

/// Sums the byte values of the key.
///
/// Deliberately weak (anagrams collide), which makes it useful for exercising
/// collision handling.
#[must_use]
pub fn hash_byte_sum(key: &str) -> u64 {
    key.bytes().map(u64::from).sum()
}

/// Sums the byte values of the key, weighting each by its position.
#[must_use]
pub fn hash_positional(key: &str) -> u64 {
    key.bytes().zip(1_u64..).fold(0_u64, |acc, (byte, weight)| {
        acc.saturating_add(u64::from(byte).saturating_mul(weight))
    })
}

/// Feeds the key through the standard library's default hasher, for callers
/// that want a well-distributed function without writing one.
#[must_use]
pub fn hash_default(key: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

/// The contract shared by both collision-resolution strategies.
///
/// Implemented by [`ProbingHashMap`] and [`ChainingHashMap`], so a caller can
/// pick a strategy at construction time and drive either through
/// `Box<dyn HashTable<V>>`.
pub trait HashTable<V> {
    /// Inserts or overwrites the value stored under `key`.
    fn put(&mut self, key: &str, value: V);

    /// Returns the value stored under `key`, if present.
    fn get(&self, key: &str) -> Option<&V>;

    /// Returns true if a live entry for `key` exists.
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes the entry stored under `key`; absent keys are a no-op.
    fn remove(&mut self, key: &str);

    /// Rebuilds the table at `new_capacity`; invalid capacities are a no-op.
    fn resize(&mut self, new_capacity: usize);

    /// Live entries divided by capacity.
    fn table_load(&self) -> f64;

    /// Number of buckets holding no live entry.
    fn empty_buckets(&self) -> usize;

    /// Drops every entry, keeping the current capacity.
    fn clear(&mut self);

    /// All live keys in bucket order.
    fn keys(&self) -> Vec<String>;

    /// Number of live entries.
    fn len(&self) -> usize;

    /// Returns true if the table holds no live entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of buckets the table currently addresses.
    fn capacity(&self) -> usize;
}

impl<V> HashTable<V> for ProbingHashMap<V> {
    fn put(&mut self, key: &str, value: V) {
        Self::put(self, key, value);
    }

    fn get(&self, key: &str) -> Option<&V> {
        Self::get(self, key)
    }

    fn remove(&mut self, key: &str) {
        Self::remove(self, key);
    }

    fn resize(&mut self, new_capacity: usize) {
        Self::resize(self, new_capacity);
    }

    fn table_load(&self) -> f64 {
        Self::table_load(self)
    }

    fn empty_buckets(&self) -> usize {
        Self::empty_buckets(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn keys(&self) -> Vec<String> {
        Self::keys(self)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn capacity(&self) -> usize {
        Self::capacity(self)
    }
}

impl<V> HashTable<V> for ChainingHashMap<V> {
    fn put(&mut self, key: &str, value: V) {
        Self::put(self, key, value);
    }

    fn get(&self, key: &str) -> Option<&V> {
        Self::get(self, key)
    }

    fn remove(&mut self, key: &str) {
        Self::remove(self, key);
    }

    fn resize(&mut self, new_capacity: usize) {
        Self::resize(self, new_capacity);
    }

    fn table_load(&self) -> f64 {
        Self::table_load(self)
    }

    fn empty_buckets(&self) -> usize {
        Self::empty_buckets(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn keys(&self) -> Vec<String> {
        Self::keys(self)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn capacity(&self) -> usize {
        Self::capacity(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_byte_sum() {
        assert_eq!(hash_byte_sum(""), 0);
        assert_eq!(hash_byte_sum("a"), 97);
        assert_eq!(hash_byte_sum("ab"), 195);
        // Anagrams collide.
        assert_eq!(hash_byte_sum("ab"), hash_byte_sum("ba"));
    }

    #[test]
    fn test_hash_positional() {
        assert_eq!(hash_positional(""), 0);
        assert_eq!(hash_positional("a"), 97);
        // 'a' * 1 + 'b' * 2 = 97 + 196
        assert_eq!(hash_positional("ab"), 293);
        // Position weighting separates anagrams.
        assert_ne!(hash_positional("ab"), hash_positional("ba"));
    }

    #[test]
    fn test_hash_default_is_stable_per_run() {
        assert_eq!(hash_default("key"), hash_default("key"));
        assert_ne!(hash_default("key1"), hash_default("key2"));
    }

    #[test]
    fn test_strategies_behind_one_interface() {
        let mut maps: Vec<Box<dyn HashTable<i32>>> = vec![
            Box::new(ProbingHashMap::new(8, hash_default)),
            Box::new(ChainingHashMap::new(8, hash_default)),
        ];

        for map in &mut maps {
            map.put("one", 1);
            map.put("two", 2);
            map.put("one", 11);

            assert_eq!(map.get("one"), Some(&11));
            assert!(map.contains_key("two"));
            assert_eq!(map.len(), 2);
            assert!(!map.is_empty());

            map.remove("two");
            assert_eq!(map.len(), 1);
            assert!(!map.contains_key("two"));

            map.clear();
            assert!(map.is_empty());
            assert_eq!(map.capacity(), 8);
        }
    }

    #[test]
    fn test_interface_resize_and_metrics() {
        let mut maps: Vec<Box<dyn HashTable<i32>>> = vec![
            Box::new(ProbingHashMap::new(20, hash_byte_sum)),
            Box::new(ChainingHashMap::new(20, hash_byte_sum)),
        ];

        for map in &mut maps {
            map.put("key1", 10);
            map.resize(30);

            assert_eq!(map.len(), 1);
            assert_eq!(map.capacity(), 30);
            assert_eq!(map.get("key1"), Some(&10));
            assert_eq!(map.empty_buckets(), 29);
            assert!((map.table_load() - 1.0 / 30.0).abs() < f64::EPSILON);
            assert_eq!(map.keys(), vec!["key1".to_string()]);
        }
    }
}
