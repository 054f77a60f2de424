//! Map entries as Lenses on `Option`.
//!
//! [`at_key`] focuses on the presence of a key in a string-keyed `BTreeMap`.
//! Its focus is an `Option`, which makes it a Lens: getting `None` means the
//! key is absent, setting `Some(value)` inserts or replaces the entry and
//! setting `None` deletes it.
//!
//! # Examples
//!
//! ```
//! use optica::optics::{at_key, Lens};
//! use std::collections::BTreeMap;
//!
//! let entry = at_key("b");
//! let map = BTreeMap::from([("a".to_string(), 1)]);
//!
//! assert_eq!(entry.get(&map), None);
//!
//! let inserted = entry.set(map, Some(2));
//! assert_eq!(inserted.get("b"), Some(&2));
//!
//! let removed = entry.set(inserted, None);
//! assert!(!removed.contains_key("b"));
//! ```

use std::collections::BTreeMap;
use std::marker::PhantomData;

use crate::optics::Lens;

/// Lens on the optional value stored under a key.
pub struct MapAt<V> {
    key: String,
    _marker: PhantomData<fn() -> V>,
}

impl<V> MapAt<V> {
    /// Creates a lens for the given key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            _marker: PhantomData,
        }
    }
}

impl<V: Clone> Lens<BTreeMap<String, V>, Option<V>> for MapAt<V> {
    fn get(&self, source: &BTreeMap<String, V>) -> Option<V> {
        source.get(&self.key).cloned()
    }

    fn set(&self, mut source: BTreeMap<String, V>, value: Option<V>) -> BTreeMap<String, V> {
        match value {
            Some(value) => {
                source.insert(self.key.clone(), value);
            }
            None => {
                source.remove(&self.key);
            }
        }
        source
    }
}

impl<V> Clone for MapAt<V> {
    fn clone(&self) -> Self {
        Self::new(self.key.clone())
    }
}

impl<V> std::fmt::Debug for MapAt<V> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("MapAt")
            .field("key", &self.key)
            .finish()
    }
}

/// Returns a lens on the optional value stored under `key`.
#[must_use]
pub fn at_key<V>(key: impl Into<String>) -> MapAt<V> {
    MapAt::new(key)
}
