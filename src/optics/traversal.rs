//! Traversal optics for focusing on zero or more parts.
//!
//! A Traversal is defined by a single operation, [`Traversal::traverse`],
//! which visits every focus left to right inside an [`Applicative`] effect
//! chosen by the caller. Everything else is derived from it by picking an
//! effect:
//!
//! - [`Identity`] gives [`Traversal::modify`] and [`Traversal::set`]
//! - [`Const`] over `Vec<A>` gives [`Traversal::get_all`]
//! - [`Const`] over any [`Monoid`] gives [`Traversal::fold_map`]
//! - [`OptionBrand`](crate::typeclass::OptionBrand) or
//!   [`ValidationBrand`](crate::typeclass::ValidationBrand) give effectful
//!   updates that may fail
//!
//! # Laws
//!
//! 1. **Modify Identity Law**: Applying the identity function yields the original.
//!    ```text
//!    traversal.modify(source.clone(), |x| x) == source
//!    ```
//!
//! 2. **Modify Composition Law**: Consecutive modifies equal a single composed one.
//!    ```text
//!    traversal.modify(traversal.modify(source, f), g) == traversal.modify(source, |x| g(f(x)))
//!    ```
//!
//! # Examples
//!
//! ```
//! use optica::optics::{each, Traversal};
//! use optica::typeclass::Sum;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//!
//! assert_eq!(each().get_all(&numbers), vec![1, 2, 3, 4, 5]);
//! assert_eq!(each().fold_map(&numbers, Sum), Sum(15));
//! assert_eq!(each().modify(numbers, |x: i32| x * 2), vec![2, 4, 6, 8, 10]);
//! ```

use std::marker::PhantomData;

use super::kind::OpticKind;
use crate::typeclass::{All, Any, Applicative, Const, Identity, Monoid, Sum};

/// A Traversal focuses on zero or more parts of a structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (each focused part)
pub trait Traversal<S, A> {
    /// The kind of this optic.
    const KIND: OpticKind = OpticKind::Traversal;

    /// Applies an effectful function to every focus, left to right, and
    /// rebuilds the source inside the effect.
    ///
    /// # Type Parameters
    ///
    /// - `F`: The applicative brand of the effect
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{each, Traversal};
    /// use optica::typeclass::OptionBrand;
    ///
    /// let halve = |x: i32| if x % 2 == 0 { Some(x / 2) } else { None };
    ///
    /// assert_eq!(each().traverse::<OptionBrand>(vec![2, 4], &mut |x| halve(x)), Some(vec![1, 2]));
    /// assert_eq!(each().traverse::<OptionBrand>(vec![2, 3], &mut |x| halve(x)), None);
    /// ```
    fn traverse<F>(
        &self,
        source: S,
        function: &mut dyn FnMut(A) -> F::WithType<A>,
    ) -> F::WithType<S>
    where
        F: Applicative;

    /// Applies a function to every focus.
    fn modify<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.traverse::<Identity>(source, &mut function)
    }

    /// Replaces every focus with the same value.
    fn set(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.modify(source, |_| value.clone())
    }

    /// Collects every focus of an owned source, left to right.
    fn get_all_owned(&self, source: S) -> Vec<A> {
        self.traverse::<Const<Vec<A>>>(source, &mut |focus| vec![focus])
    }

    /// Collects every focus, left to right, without removing duplicates.
    fn get_all(&self, source: &S) -> Vec<A>
    where
        S: Clone,
    {
        self.get_all_owned(source.clone())
    }

    /// Maps every focus into a monoid and combines the results left to right.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{each, Traversal};
    ///
    /// let words = vec!["a".to_string(), "b".to_string()];
    /// assert_eq!(each().fold_map(&words, |word: String| word.to_uppercase()), "AB");
    /// ```
    fn fold_map<M, F>(&self, source: &S, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(A) -> M,
        S: Clone,
    {
        self.traverse::<Const<M>>(source.clone(), &mut function)
    }

    /// Folds every focus from the left.
    fn fold<B, F>(&self, source: &S, initial: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
        S: Clone,
    {
        self.get_all(source).into_iter().fold(initial, function)
    }

    /// Returns the first focus satisfying a predicate.
    fn find<P>(&self, source: &S, predicate: P) -> Option<A>
    where
        P: FnMut(&A) -> bool,
        S: Clone,
    {
        self.get_all(source).into_iter().find(predicate)
    }

    /// Returns the first focus, if any.
    fn head_option(&self, source: &S) -> Option<A>
    where
        S: Clone,
    {
        self.get_all(source).into_iter().next()
    }

    /// Counts the foci.
    fn length(&self, source: &S) -> usize
    where
        S: Clone,
    {
        self.fold_map(source, |_| Sum(1_usize)).0
    }

    /// Checks whether every focus satisfies a predicate.
    fn for_all<P>(&self, source: &S, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
        S: Clone,
    {
        self.fold_map(source, |focus| All(predicate(&focus))).0
    }

    /// Checks whether some focus satisfies a predicate.
    fn exists<P>(&self, source: &S, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
        S: Clone,
    {
        self.fold_map(source, |focus| Any(predicate(&focus))).0
    }

    /// Composes this traversal with another traversal.
    fn compose<B, T>(self, other: T) -> ComposedTraversal<Self, T, A>
    where
        Self: Sized,
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(self, other)
    }
}

/// Two traversals composed end to end.
///
/// Every focus of the first traversal is traversed with the second, so the
/// foci of the composition are visited in nested left-to-right order.
pub struct ComposedTraversal<T1, T2, A> {
    first: T1,
    second: T2,
    _marker: PhantomData<fn() -> A>,
}

impl<T1, T2, A> ComposedTraversal<T1, T2, A> {
    /// Creates a new composed traversal.
    #[must_use]
    pub const fn new(first: T1, second: T2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, T1, T2> Traversal<S, B> for ComposedTraversal<T1, T2, A>
where
    T1: Traversal<S, A>,
    T2: Traversal<A, B>,
{
    fn traverse<F>(
        &self,
        source: S,
        function: &mut dyn FnMut(B) -> F::WithType<B>,
    ) -> F::WithType<S>
    where
        F: Applicative,
    {
        self.first.traverse::<F>(source, &mut |intermediate| {
            self.second.traverse::<F>(intermediate, &mut *function)
        })
    }
}

impl<T1: Clone, T2: Clone, A> Clone for ComposedTraversal<T1, T2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<T1: std::fmt::Debug, T2: std::fmt::Debug, A> std::fmt::Debug for ComposedTraversal<T1, T2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedTraversal")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}
