//! Traversals over every element of a traversable container.
//!
//! [`from_traversable`] lifts any [`Traversable`] brand into a Traversal
//! focusing on each element; [`each`] is the shortcut for `Vec`.
//!
//! # Examples
//!
//! ```
//! use optica::optics::{each, from_traversable, Traversal};
//! use optica::typeclass::OptionBrand;
//!
//! assert_eq!(each().modify(vec![1, 2, 3], |n: i32| n + 1), vec![2, 3, 4]);
//!
//! let maybe = from_traversable::<OptionBrand>();
//! assert_eq!(maybe.get_all(&Some(5)), vec![5]);
//! assert!(maybe.get_all(&None::<i32>).is_empty());
//! ```

use std::marker::PhantomData;

use crate::optics::Traversal;
use crate::typeclass::{Applicative, Traversable, VecBrand};

/// Traversal over every element of a container of brand `T`.
pub struct Each<T> {
    _marker: PhantomData<T>,
}

impl<T> Each<T> {
    /// Creates a new `Each`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Each<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Each<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for Each<T> {}

impl<T> std::fmt::Debug for Each<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("Each")
    }
}

impl<T, A> Traversal<T::WithType<A>, A> for Each<T>
where
    T: Traversable,
{
    fn traverse<F>(
        &self,
        source: T::WithType<A>,
        function: &mut dyn FnMut(A) -> F::WithType<A>,
    ) -> F::WithType<T::WithType<A>>
    where
        F: Applicative,
    {
        T::traverse::<F, A, A>(source, function)
    }
}

/// Returns a traversal over every element of a container of brand `T`.
#[must_use]
pub const fn from_traversable<T: Traversable>() -> Each<T> {
    Each::new()
}

/// Returns a traversal over every element of a `Vec`.
#[must_use]
pub const fn each() -> Each<VecBrand> {
    Each::new()
}
