use std::fmt;
use std::mem;

use crate::dyn_array::DynArray;
use crate::utils::HashFn;

/// A slot in the probing table.
///
/// The tombstone state is what keeps probe sequences correct after deletions:
/// a plain option would forget that a slot once held an entry, and lookups
/// would stop short.
#[derive(Debug, Clone)]
enum Slot<V> {
    /// Never held an entry since the last resize or clear.
    Empty,
    /// Held an entry that was logically removed; probing continues past it.
    Tombstone,
    /// Holds a live entry.
    Occupied(Entry<V>),
}

/// A live key-value pair stored in an occupied slot.
#[derive(Debug, Clone)]
struct Entry<V> {
    /// The key in the key-value pair.
    key: String,
    /// The value associated with the key.
    value: V,
}

/// A hash map using open addressing with quadratic probing for collision
/// resolution.
///
/// The hash function is injected at construction and fixed for the map's
/// lifetime; the map reduces its output modulo the current capacity. Removal
/// is a soft delete: the slot becomes a tombstone and is physically reclaimed
/// only by a later insert, a resize, or a clear.
///
/// An insert checks the load factor first and doubles the capacity once
/// `size / capacity` reaches one half, so lookups stay short. The check runs
/// before the probe, which means it fires even when the insert only
/// overwrites an existing key.
#[derive(Clone)]
pub struct ProbingHashMap<V> {
    /// The slots storing the entries.
    buckets: DynArray<Slot<V>>,
    /// Number of slots the table currently addresses.
    capacity: usize,
    /// Current number of live entries.
    size: usize,
    /// Injected hash function; pure and capacity-independent.
    hash_fn: HashFn,
}

impl<V> ProbingHashMap<V> {
    /// Creates a map with the given initial capacity (clamped to at least 1)
    /// and hash function.
    #[must_use]
    pub fn new(initial_capacity: usize, hash_fn: HashFn) -> Self {
        let capacity = initial_capacity.max(1);
        Self { buckets: Self::fresh_buckets(capacity), capacity, size: 0, hash_fn }
    }

    /// Allocates `capacity` empty slots.
    fn fresh_buckets(capacity: usize) -> DynArray<Slot<V>> {
        let mut buckets = DynArray::with_capacity(capacity);
        for _ in 0..capacity {
            buckets.push(Slot::Empty);
        }
        buckets
    }

    /// Home slot for a key under the current capacity.
    #[allow(clippy::cast_possible_truncation, clippy::arithmetic_side_effects)]
    fn home_index(&self, key: &str) -> usize {
        (self.hash_fn)(key) as usize % self.capacity
    }

    /// Slot visited on the given probe attempt; attempt 0 is the home slot.
    #[allow(clippy::arithmetic_side_effects)]
    fn probe_index(&self, home: usize, attempt: usize) -> usize {
        home.wrapping_add(attempt.wrapping_mul(attempt)) % self.capacity
    }

    /// Slot index of the live entry for `key`, if one is reachable along the
    /// probe sequence before an empty slot terminates the search. Tombstones
    /// are skipped, never matched.
    fn find_index(&self, key: &str) -> Option<usize> {
        let home = self.home_index(key);
        for attempt in 0..self.capacity {
            let index = self.probe_index(home, attempt);
            match self.buckets.get(index) {
                None | Some(Slot::Empty) => return None,
                Some(Slot::Tombstone) => {}
                Some(Slot::Occupied(entry)) if entry.key == key => return Some(index),
                Some(Slot::Occupied(_)) => {}
            }
        }
        None
    }

    /// Inserts or overwrites the value stored under `key`.
    ///
    /// Probing stops at the first empty or tombstoned slot, or at a slot
    /// already holding `key`, whichever comes first in the sequence. After
    /// `capacity` fruitless attempts the insert is abandoned; the load
    /// invariant keeps that out of reach in practice.
    pub fn put(&mut self, key: &str, value: V) {
        // The load check runs before the key is even looked up, so a put that
        // only overwrites still doubles the table at the threshold.
        if self.table_load() >= 0.5 {
            self.resize(self.capacity.saturating_mul(2));
        }

        let home = self.home_index(key);
        for attempt in 0..self.capacity {
            let index = self.probe_index(home, attempt);
            let Some(slot) = self.buckets.get_mut(index) else {
                return;
            };
            match slot {
                Slot::Occupied(entry) if entry.key == key => {
                    entry.value = value;
                    return;
                }
                Slot::Occupied(_) => {}
                Slot::Empty | Slot::Tombstone => {
                    *slot = Slot::Occupied(Entry { key: key.to_string(), value });
                    self.size = self.size.saturating_add(1);
                    return;
                }
            }
        }
    }

    /// Returns the value stored under `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        let index = self.find_index(key)?;
        match self.buckets.get(index) {
            Some(Slot::Occupied(entry)) => Some(&entry.value),
            _ => None,
        }
    }

    /// Returns the value stored under `key` mutably, if present.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.find_index(key)?;
        match self.buckets.get_mut(index) {
            Some(Slot::Occupied(entry)) => Some(&mut entry.value),
            _ => None,
        }
    }

    /// Returns true if a live entry for `key` exists.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.find_index(key).is_some()
    }

    /// Marks the entry stored under `key` as a tombstone and decrements the
    /// size. Absent keys are a no-op.
    pub fn remove(&mut self, key: &str) {
        let Some(index) = self.find_index(key) else {
            return;
        };
        if let Some(slot) = self.buckets.get_mut(index) {
            *slot = Slot::Tombstone;
            self.size = self.size.saturating_sub(1);
        }
    }

    /// Rebuilds the table at `new_capacity`, re-inserting every live entry
    /// and dropping tombstones.
    ///
    /// A capacity below 1 or below the current size is silently ignored.
    /// Re-insertion goes through [`put`](Self::put), so a requested capacity
    /// that would sit at or over half load keeps doubling until the invariant
    /// holds again.
    pub fn resize(&mut self, new_capacity: usize) {
        if new_capacity < 1 || new_capacity < self.size {
            return;
        }
        let old_buckets = mem::replace(&mut self.buckets, Self::fresh_buckets(new_capacity));
        self.capacity = new_capacity;
        self.size = 0;
        for slot in old_buckets {
            if let Slot::Occupied(entry) = slot {
                self.put(&entry.key, entry.value);
            }
        }
    }

    /// Live entries divided by capacity.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.capacity as f64
    }

    /// Number of slots holding no live entry. Tombstones count as empty here,
    /// unlike in [`table_load`](Self::table_load).
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|slot| !matches!(slot, Slot::Occupied(_))).count()
    }

    /// Drops every entry and tombstone, keeping the current capacity.
    pub fn clear(&mut self) {
        self.buckets = Self::fresh_buckets(self.capacity);
        self.size = 0;
    }

    /// All live keys in slot-index order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.buckets
            .iter()
            .filter_map(|slot| match slot {
                Slot::Occupied(entry) => Some(entry.key.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no live entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of slots the table currently addresses.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<V: fmt::Debug> fmt::Debug for ProbingHashMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dump = f.debug_map();
        for (index, slot) in self.buckets.iter().enumerate() {
            match slot {
                Slot::Empty => {
                    dump.entry(&index, &"empty");
                }
                Slot::Tombstone => {
                    dump.entry(&index, &"tombstone");
                }
                Slot::Occupied(entry) => {
                    dump.entry(&index, &(&entry.key, &entry.value));
                }
            }
        }
        dump.finish()
    }
}
