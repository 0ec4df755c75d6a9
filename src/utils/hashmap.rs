//! The hash-map used by the per-step caches.

/// Hashmap using [`hashbrown::HashMap`] with its default hasher.
pub type HashMap<K, V> = hashbrown::HashMap<K, V>;

/// Hashset using [`hashbrown::HashSet`] with its default hasher.
pub type HashSet<K> = hashbrown::HashSet<K>;
