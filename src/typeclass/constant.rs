//! Const brand - an effect that only accumulates a monoidal summary.
//!
//! `Const<M>::WithType<A>` is `M` regardless of `A`. Mapping ignores the
//! function and `map2` combines the two summaries with
//! [`Semigroup::combine`](super::Semigroup::combine). Running a traversal in
//! `Const<M>` therefore folds every focus into `M` without rebuilding the
//! structure, which is how
//! [`Traversal::fold_map`](crate::optics::Traversal::fold_map) and
//! [`Traversal::get_all`](crate::optics::Traversal::get_all) are defined.

use std::marker::PhantomData;

use super::applicative::Applicative;
use super::functor::Functor;
use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// The constant brand over the summary type `M`.
///
/// # Examples
///
/// ```rust
/// use optica::typeclass::{Applicative, Const};
///
/// let left: Vec<i32> = vec![1];
/// let right: Vec<i32> = vec![2, 3];
/// let combined = Const::<Vec<i32>>::map2::<(), (), (), _>(left, right, |(), ()| ());
/// assert_eq!(combined, vec![1, 2, 3]);
/// ```
#[derive(Debug)]
pub struct Const<M>(PhantomData<M>);

impl<M> TypeConstructor for Const<M> {
    type WithType<T> = M;
}

impl<M> Functor for Const<M> {
    fn map<A, B, F>(fa: M, _function: F) -> M
    where
        F: FnOnce(A) -> B,
    {
        fa
    }
}

impl<M: Monoid> Applicative for Const<M> {
    fn pure<A>(_value: A) -> M {
        M::empty()
    }

    fn map2<A, B, C, F>(fa: M, fb: M, _function: F) -> M
    where
        F: FnOnce(A, B) -> C,
    {
        fa.combine(fb)
    }
}
