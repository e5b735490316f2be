//! # Probemap
//!
//! Hash maps built from first principles, including their own backing
//! resizable array, with two interchangeable collision-resolution strategies:
//!
//! - [`ProbingHashMap`]: open addressing with quadratic probing and tombstone
//!   deletion
//! - [`ChainingHashMap`]: separate chaining with singly-linked buckets
//!
//! Hash functions are not baked in: each map captures a plain
//! `fn(&str) -> u64` at construction and reduces its output modulo the
//! current capacity. The [`utils`] sample functions cover the usual cases,
//! from deliberately collision-prone to well distributed.
//!
//! ## Basic Usage
//!
//! ```rust
//! use probemap::{ProbingHashMap, hash_positional};
//!
//! // Create a map with an initial capacity and an injected hash function
//! let mut map = ProbingHashMap::new(16, hash_positional);
//!
//! // Insert values
//! map.put("apple", 1);
//! map.put("banana", 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Update values
//! map.put("apple", 10);
//! assert_eq!(map.get("apple"), Some(&10));
//!
//! // Remove values
//! map.remove("apple");
//! assert_eq!(map.get("apple"), None);
//! assert!(map.contains_key("banana"));
//! ```
//!
//! ## Choosing a strategy at run time
//!
//! Both maps implement the [`HashTable`] contract, so the collision strategy
//! can be a run-time decision:
//!
//! ```rust
//! use probemap::{ChainingHashMap, HashTable, ProbingHashMap, hash_default};
//!
//! let prefer_probing = true;
//! let mut map: Box<dyn HashTable<u32>> = if prefer_probing {
//!     Box::new(ProbingHashMap::new(16, hash_default))
//! } else {
//!     Box::new(ChainingHashMap::new(16, hash_default))
//! };
//!
//! map.put("answer", 42);
//! assert_eq!(map.get("answer"), Some(&42));
//! assert!(map.table_load() > 0.0);
//! ```
//!
//! ## Finding the mode of a sequence
//!
//! [`find_mode`] drives a chaining map internally to tally frequencies:
//!
//! ```rust
//! use probemap::find_mode;
//!
//! let (mut modes, frequency) =
//!     find_mode(&["apple", "apple", "grape", "melon", "melon", "peach"]);
//! modes.sort_unstable();
//! assert_eq!(modes, vec!["apple", "melon"]);
//! assert_eq!(frequency, 2);
//! ```

/// Module implementing the hash map using separate chaining
mod chaining_hashmap;
/// Module implementing the resizable array backing both map variants
mod dyn_array;
/// Module implementing the singly-linked bucket used by the chaining map
mod linked_bucket;
/// Module implementing the mode finder built on the chaining map
mod mode;
/// Module implementing the hash map using quadratic probing
mod probing_hashmap;
/// Shared contract trait and injectable hash functions
pub mod utils;

pub use chaining_hashmap::ChainingHashMap;
pub use dyn_array::DynArray;
pub use linked_bucket::LinkedBucket;
pub use mode::find_mode;
pub use probing_hashmap::ProbingHashMap;
pub use utils::{HashFn, HashTable, hash_byte_sum, hash_default, hash_positional};
