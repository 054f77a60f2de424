//! Index and key lookups as Optionals.
//!
//! [`index`] focuses on the element of a `Vec` at a position and [`key`]
//! focuses on the value of a string-keyed `BTreeMap`. Both only see existing
//! entries: a missing position or key has no focus, and setting it leaves the
//! collection unchanged. Use [`at_key`](super::at_key) to insert or delete
//! map entries.
//!
//! # Examples
//!
//! ```
//! use optica::optics::{index, Optional};
//!
//! let second = index(1);
//!
//! assert_eq!(second.get_option(&vec![1, 2]), Some(2));
//! assert_eq!(second.set(vec![1, 2], 3), vec![1, 3]);
//!
//! assert_eq!(second.get_option(&vec![1]), None);
//! assert_eq!(second.set(vec![1], 3), vec![1]);
//! ```

use std::collections::BTreeMap;
use std::marker::PhantomData;

use crate::optics::Optional;

/// Types whose existing elements can be looked up by an index.
///
/// # Examples
///
/// ```
/// use optica::optics::{Ixed, Optional};
///
/// let third = <Vec<char> as Ixed<usize>>::ix(2);
/// assert_eq!(third.get_option(&vec!['a', 'b', 'c']), Some('c'));
/// ```
pub trait Ixed<I>: Sized {
    /// The element type.
    type Element;

    /// The optional returned by [`ix`](Self::ix).
    type IxOptional: Optional<Self, Self::Element>;

    /// Returns an optional focusing on the element at `index`.
    fn ix(index: I) -> Self::IxOptional;
}

/// Optional focusing on a position of a `Vec`.
pub struct VecIx<T> {
    index: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> VecIx<T> {
    /// Creates an optional for the given position.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }
}

impl<T: Clone> Optional<Vec<T>, T> for VecIx<T> {
    fn get_option(&self, source: &Vec<T>) -> Option<T> {
        source.get(self.index).cloned()
    }

    fn set(&self, mut source: Vec<T>, value: T) -> Vec<T> {
        if let Some(slot) = source.get_mut(self.index) {
            *slot = value;
        }
        source
    }
}

impl<T: Clone> Ixed<usize> for Vec<T> {
    type Element = T;
    type IxOptional = VecIx<T>;

    fn ix(index: usize) -> Self::IxOptional {
        VecIx::new(index)
    }
}

impl<T> Clone for VecIx<T> {
    fn clone(&self) -> Self {
        Self::new(self.index)
    }
}

impl<T> std::fmt::Debug for VecIx<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("VecIx")
            .field("index", &self.index)
            .finish()
    }
}

/// Optional focusing on an existing entry of a string-keyed `BTreeMap`.
pub struct MapIx<V> {
    key: String,
    _marker: PhantomData<fn() -> V>,
}

impl<V> MapIx<V> {
    /// Creates an optional for the given key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            _marker: PhantomData,
        }
    }
}

impl<V: Clone> Optional<BTreeMap<String, V>, V> for MapIx<V> {
    fn get_option(&self, source: &BTreeMap<String, V>) -> Option<V> {
        source.get(&self.key).cloned()
    }

    fn set(&self, mut source: BTreeMap<String, V>, value: V) -> BTreeMap<String, V> {
        if let Some(slot) = source.get_mut(&self.key) {
            *slot = value;
        }
        source
    }
}

impl<V: Clone> Ixed<String> for BTreeMap<String, V> {
    type Element = V;
    type IxOptional = MapIx<V>;

    fn ix(key: String) -> Self::IxOptional {
        MapIx::new(key)
    }
}

impl<V> Clone for MapIx<V> {
    fn clone(&self) -> Self {
        Self::new(self.key.clone())
    }
}

impl<V> std::fmt::Debug for MapIx<V> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("MapIx")
            .field("key", &self.key)
            .finish()
    }
}

/// Returns an optional focusing on the element of a `Vec` at `index`.
#[must_use]
pub const fn index<T>(index: usize) -> VecIx<T> {
    VecIx::new(index)
}

/// Returns an optional focusing on the existing entry of a map at `key`.
///
/// # Example
///
/// ```
/// use optica::optics::{key, Optional};
/// use std::collections::BTreeMap;
///
/// let scores = BTreeMap::from([("alice".to_string(), 3)]);
/// assert_eq!(key("alice").get_option(&scores), Some(3));
/// assert_eq!(key("bob").set(scores.clone(), 5), scores);
/// ```
#[must_use]
pub fn key<V>(key: impl Into<String>) -> MapIx<V> {
    MapIx::new(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![1, 2], 1, Some(2))]
    #[case(vec![1], 1, None)]
    #[case(vec![], 0, None)]
    fn index_get_option(
        #[case] items: Vec<i32>,
        #[case] position: usize,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(index(position).get_option(&items), expected);
    }

    #[rstest]
    #[case(vec![1, 2], vec![1, 3])]
    #[case(vec![1], vec![1])]
    fn index_set(#[case] items: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(index(1).set(items, 3), expected);
    }

    #[test]
    fn key_never_inserts() {
        let map = BTreeMap::from([("a".to_string(), 1)]);
        let updated = key("a").set(map.clone(), 10);
        assert_eq!(updated.get("a"), Some(&10));

        let untouched = key("z").set(map.clone(), 10);
        assert_eq!(untouched, map);
    }

    #[test]
    fn ixed_trait_builds_same_optics() {
        let by_trait = <BTreeMap<String, i32> as Ixed<String>>::ix("k".to_string());
        let map = BTreeMap::from([("k".to_string(), 7)]);
        assert_eq!(by_trait.get_option(&map), key("k").get_option(&map));
    }
}
