//! Hash containers keyed by cell ids and index paths.
//!
//! Fx hashing by default. The `std-hash` feature switches to the std hasher.

#[cfg(not(feature = "std-hash"))]
pub type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "std-hash"))]
pub type HashSet<T> = rustc_hash::FxHashSet<T>;

#[cfg(feature = "std-hash")]
pub type HashMap<K, V> = std::collections::HashMap<K, V>;
#[cfg(feature = "std-hash")]
pub type HashSet<T> = std::collections::HashSet<T>;
