//! Applicative type class - lifting values and combining independent effects.
//!
//! `Applicative` extends [`Functor`] with:
//!
//! - `pure`: lift a value into the effect
//! - `map2`: combine two effectful values with a binary function
//!
//! This is exactly the interface a [`Traversal`](crate::optics::Traversal)
//! needs to rebuild a structure inside an effect, which is why the optics
//! and the decoders depend on it.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! F::map2(F::pure(()), fa, |(), a| a) == fa
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! F::map2(F::pure(a), F::pure(b), f) == F::pure(f(a, b))
//! ```
//!
//! ## Associativity of `product`
//!
//! ```text
//! product(product(fa, fb), fc) ≅ product(fa, product(fb, fc))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optica::typeclass::{Applicative, OptionBrand};
//!
//! let x: Option<i32> = OptionBrand::pure(42);
//! assert_eq!(x, Some(42));
//!
//! let sum = OptionBrand::map2(Some(1), Some(2), |a, b| a + b);
//! assert_eq!(sum, Some(3));
//! ```

use super::functor::Functor;
use super::higher::{OptionBrand, ResultBrand};

/// A type class for brands that can lift values and combine independent effects.
pub trait Applicative: Functor {
    /// Lifts a pure value into the effect.
    fn pure<A>(value: A) -> Self::WithType<A>;

    /// Combines two effectful values with a binary function.
    ///
    /// The left operand's effect happens first.
    fn map2<A, B, C, F>(
        fa: Self::WithType<A>,
        fb: Self::WithType<B>,
        function: F,
    ) -> Self::WithType<C>
    where
        F: FnOnce(A, B) -> C;

    /// Pairs two effectful values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::typeclass::{Applicative, OptionBrand};
    ///
    /// assert_eq!(OptionBrand::product(Some(1), Some("a")), Some((1, "a")));
    /// assert_eq!(OptionBrand::product(Some(1), None::<&str>), None);
    /// ```
    fn product<A, B>(fa: Self::WithType<A>, fb: Self::WithType<B>) -> Self::WithType<(A, B)> {
        Self::map2(fa, fb, |a, b| (a, b))
    }

    /// Combines three effectful values, left to right.
    fn map3<A, B, C, D, F>(
        fa: Self::WithType<A>,
        fb: Self::WithType<B>,
        fc: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Self::map2(Self::product(fa, fb), fc, |(a, b), c| function(a, b, c))
    }
}

impl Applicative for OptionBrand {
    fn pure<A>(value: A) -> Option<A> {
        Some(value)
    }

    fn map2<A, B, C, F>(fa: Option<A>, fb: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (fa, fb) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }
}

impl<E> Applicative for ResultBrand<E> {
    fn pure<A>(value: A) -> Result<A, E> {
        Ok(value)
    }

    fn map2<A, B, C, F>(fa: Result<A, E>, fb: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(A, B) -> C,
    {
        let a = fa?;
        let b = fb?;
        Ok(function(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(1), Some(2), Some(3))]
    #[case(Some(1), None, None)]
    #[case(None, Some(2), None)]
    fn option_map2(
        #[case] left: Option<i32>,
        #[case] right: Option<i32>,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(OptionBrand::map2(left, right, |a, b| a + b), expected);
    }

    #[test]
    fn result_map2_keeps_first_error() {
        let left: Result<i32, &str> = Err("first");
        let right: Result<i32, &str> = Err("second");
        assert_eq!(ResultBrand::map2(left, right, |a, b| a + b), Err("first"));
    }

    #[test]
    fn map3_combines_in_order() {
        let result = OptionBrand::map3(Some("a"), Some("b"), Some("c"), |a, b, c| {
            format!("{a}{b}{c}")
        });
        assert_eq!(result, Some("abc".to_string()));
    }

    #[test]
    fn homomorphism_law_for_option() {
        let left = OptionBrand::map2(OptionBrand::pure(3), OptionBrand::pure(4), |a, b| a * b);
        assert_eq!(left, OptionBrand::pure(12));
    }
}
