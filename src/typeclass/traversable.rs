//! Traversable type class - rebuilding a structure inside an effect.
//!
//! `traverse` visits every element of a structure left to right, applies an
//! effectful function, and rebuilds the structure inside the effect. The
//! effect is chosen by the caller through an [`Applicative`] brand.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! T::traverse::<Identity, _, _>(ta, &mut |a| a) == ta
//! ```
//!
//! ## Naturality / ordering
//!
//! Elements are visited exactly once, in structural (left-to-right) order.
//!
//! # Examples
//!
//! ```rust
//! use optica::typeclass::{OptionBrand, Traversable, VecBrand};
//!
//! let parsed = VecBrand::traverse::<OptionBrand, _, _>(
//!     vec!["1", "2", "3"],
//!     &mut |s: &str| s.parse::<i32>().ok(),
//! );
//! assert_eq!(parsed, Some(vec![1, 2, 3]));
//! ```

use super::applicative::Applicative;
use super::higher::{OptionBrand, TypeConstructor, VecBrand};

/// A type class for brands whose values can be traversed with an effect.
pub trait Traversable: TypeConstructor {
    /// Applies `function` to every element and rebuilds the structure inside `F`.
    fn traverse<F, A, B>(
        ta: Self::WithType<A>,
        function: &mut dyn FnMut(A) -> F::WithType<B>,
    ) -> F::WithType<Self::WithType<B>>
    where
        F: Applicative;

    /// Turns a structure of effects into an effect of a structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::typeclass::{OptionBrand, Traversable, VecBrand};
    ///
    /// let all = VecBrand::sequence::<OptionBrand, i32>(vec![Some(1), Some(2)]);
    /// assert_eq!(all, Some(vec![1, 2]));
    ///
    /// let missing = VecBrand::sequence::<OptionBrand, i32>(vec![Some(1), None]);
    /// assert_eq!(missing, None);
    /// ```
    fn sequence<F, A>(tfa: Self::WithType<F::WithType<A>>) -> F::WithType<Self::WithType<A>>
    where
        F: Applicative,
    {
        Self::traverse::<F, F::WithType<A>, A>(tfa, &mut |fa| fa)
    }
}

impl Traversable for VecBrand {
    fn traverse<F, A, B>(
        ta: Vec<A>,
        function: &mut dyn FnMut(A) -> F::WithType<B>,
    ) -> F::WithType<Vec<B>>
    where
        F: Applicative,
    {
        let capacity = ta.len();
        ta.into_iter()
            .fold(F::pure(Vec::with_capacity(capacity)), |accumulator, element| {
                F::map2(accumulator, function(element), |mut collected, value| {
                    collected.push(value);
                    collected
                })
            })
    }
}

impl Traversable for OptionBrand {
    fn traverse<F, A, B>(
        ta: Option<A>,
        function: &mut dyn FnMut(A) -> F::WithType<B>,
    ) -> F::WithType<Option<B>>
    where
        F: Applicative,
    {
        match ta {
            Some(value) => F::map(function(value), Some),
            None => F::pure(None),
        }
    }
}
