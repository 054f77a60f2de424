//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```
//!
//! Monoids are what [`Const`](super::Const) needs to be an applicative, so
//! every monoid can summarise the foci of a
//! [`Traversal`](crate::optics::Traversal).
//!
//! # Examples
//!
//! ```rust
//! use optica::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//! assert!(Vec::<i32>::empty().is_empty());
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines every element of an iterator, starting from [`empty`](Self::empty).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::typeclass::Monoid;
    ///
    /// assert_eq!(String::combine_all(vec!["a".to_string(), "b".to_string()]), "ab");
    /// assert_eq!(String::combine_all(Vec::<String>::new()), "");
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| accumulator.combine(element))
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}
