//! Functor type class - mapping over values inside a type constructor.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! F::map(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! F::map(F::map(fa, f), g) == F::map(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optica::typeclass::{Functor, OptionBrand};
//!
//! assert_eq!(OptionBrand::map(Some(20), |x| x + 1), Some(21));
//! assert_eq!(OptionBrand::map(None::<i32>, |x| x + 1), None);
//! ```

use super::higher::{OptionBrand, ResultBrand, TypeConstructor};

/// A type class for brands whose values can be mapped over.
///
/// The mapping function is `FnOnce`: every brand implementing `Functor` holds
/// at most one value. Multi-element containers such as [`Vec`] only implement
/// [`Traversable`](super::Traversable).
pub trait Functor: TypeConstructor {
    /// Applies `function` to the value inside `fa`.
    fn map<A, B, F>(fa: Self::WithType<A>, function: F) -> Self::WithType<B>
    where
        F: FnOnce(A) -> B;

    /// Replaces the value inside `fa` with `value`.
    fn replace<A, B>(fa: Self::WithType<A>, value: B) -> Self::WithType<B> {
        Self::map(fa, |_| value)
    }
}

impl Functor for OptionBrand {
    fn map<A, B, F>(fa: Option<A>, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        fa.map(function)
    }
}

impl<E> Functor for ResultBrand<E> {
    fn map<A, B, F>(fa: Result<A, E>, function: F) -> Result<B, E>
    where
        F: FnOnce(A) -> B,
    {
        fa.map(function)
    }
}
