use std::fmt;
use std::mem;

use crate::dyn_array::DynArray;
use crate::linked_bucket::LinkedBucket;
use crate::utils::HashFn;

/// A hash map using separate chaining for collision resolution.
///
/// Every key hashing to the same home index shares one [`LinkedBucket`].
/// The hash function is injected at construction and fixed for the map's
/// lifetime; the map reduces its output modulo the current capacity.
///
/// Unlike [`ProbingHashMap`](crate::ProbingHashMap), this variant never
/// resizes on its own: chains simply grow, and the load factor is reported
/// but not enforced. Callers that care can watch
/// [`table_load`](Self::table_load) and call [`resize`](Self::resize).
#[derive(Clone)]
pub struct ChainingHashMap<V> {
    /// One linked bucket per home index.
    buckets: DynArray<LinkedBucket<V>>,
    /// Number of buckets the table currently addresses.
    capacity: usize,
    /// Current number of entries.
    size: usize,
    /// Injected hash function; pure and capacity-independent.
    hash_fn: HashFn,
}

impl<V> ChainingHashMap<V> {
    /// Creates a map with the given initial capacity (clamped to at least 1)
    /// and hash function.
    #[must_use]
    pub fn new(initial_capacity: usize, hash_fn: HashFn) -> Self {
        let capacity = initial_capacity.max(1);
        Self { buckets: Self::fresh_buckets(capacity), capacity, size: 0, hash_fn }
    }

    /// Allocates `capacity` empty buckets.
    fn fresh_buckets(capacity: usize) -> DynArray<LinkedBucket<V>> {
        let mut buckets = DynArray::with_capacity(capacity);
        for _ in 0..capacity {
            buckets.push(LinkedBucket::new());
        }
        buckets
    }

    /// Home bucket for a key under the current capacity.
    #[allow(clippy::cast_possible_truncation, clippy::arithmetic_side_effects)]
    fn home_index(&self, key: &str) -> usize {
        (self.hash_fn)(key) as usize % self.capacity
    }

    /// Inserts or overwrites the value stored under `key`.
    pub fn put(&mut self, key: &str, value: V) {
        let home = self.home_index(key);
        let Some(bucket) = self.buckets.get_mut(home) else {
            return;
        };
        if let Some(existing) = bucket.get_mut(key) {
            *existing = value;
        } else {
            bucket.push_front(key.to_string(), value);
            self.size = self.size.saturating_add(1);
        }
    }

    /// Returns the value stored under `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.buckets.get(self.home_index(key))?.get(key)
    }

    /// Returns the value stored under `key` mutably, if present.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let home = self.home_index(key);
        self.buckets.get_mut(home)?.get_mut(key)
    }

    /// Returns true if an entry for `key` exists.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Splices the entry stored under `key` out of its bucket and decrements
    /// the size. Absent keys are a no-op.
    pub fn remove(&mut self, key: &str) {
        let home = self.home_index(key);
        if let Some(bucket) = self.buckets.get_mut(home) {
            if bucket.remove(key).is_some() {
                self.size = self.size.saturating_sub(1);
            }
        }
    }

    /// Rebuilds the table at `new_capacity`, re-inserting every entry.
    ///
    /// A capacity below 1 is silently ignored. Shrinking below the current
    /// size is legal here: chains absorb any crowding.
    pub fn resize(&mut self, new_capacity: usize) {
        if new_capacity < 1 {
            return;
        }
        let old_buckets = mem::replace(&mut self.buckets, Self::fresh_buckets(new_capacity));
        self.capacity = new_capacity;
        self.size = 0;
        for bucket in old_buckets {
            for (key, value) in bucket {
                self.put(&key, value);
            }
        }
    }

    /// Entries divided by capacity. Can exceed 1.0, since this variant never
    /// resizes on its own.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.capacity as f64
    }

    /// Number of buckets with no nodes.
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|bucket| bucket.is_empty()).count()
    }

    /// Drops every entry, keeping the current capacity.
    pub fn clear(&mut self) {
        self.buckets = Self::fresh_buckets(self.capacity);
        self.size = 0;
    }

    /// All keys, in bucket order and then chain order within each bucket.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|(key, _)| key.to_string()))
            .collect()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of buckets the table currently addresses.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<V: fmt::Debug> fmt::Debug for ChainingHashMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dump = f.debug_map();
        for (index, bucket) in self.buckets.iter().enumerate() {
            dump.entry(&index, bucket);
        }
        dump.finish()
    }
}
