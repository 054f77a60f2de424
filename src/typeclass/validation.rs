//! Validation brand - a `Result` effect that accumulates every error.
//!
//! `ValidationBrand<E>::WithType<A>` is `Result<A, E>`, like
//! [`ResultBrand`](super::ResultBrand), but `map2` does not stop at the first
//! failure: when both sides fail their errors are combined with
//! [`Semigroup::combine`]. The decoders use it to report every failing field
//! of a struct instead of only the first one.
//!
//! # Examples
//!
//! ```rust
//! use optica::typeclass::{Applicative, ValidationBrand};
//!
//! let left: Result<i32, Vec<&str>> = Err(vec!["left"]);
//! let right: Result<i32, Vec<&str>> = Err(vec!["right"]);
//! let both = ValidationBrand::map2(left, right, |a, b| a + b);
//! assert_eq!(both, Err(vec!["left", "right"]));
//! ```

use std::marker::PhantomData;

use super::applicative::Applicative;
use super::functor::Functor;
use super::higher::TypeConstructor;
use super::semigroup::Semigroup;

/// Brand for an error-accumulating `Result`.
#[derive(Debug)]
pub struct ValidationBrand<E>(PhantomData<E>);

impl<E> TypeConstructor for ValidationBrand<E> {
    type WithType<T> = Result<T, E>;
}

impl<E> Functor for ValidationBrand<E> {
    fn map<A, B, F>(fa: Result<A, E>, function: F) -> Result<B, E>
    where
        F: FnOnce(A) -> B,
    {
        fa.map(function)
    }
}

impl<E: Semigroup> Applicative for ValidationBrand<E> {
    fn pure<A>(value: A) -> Result<A, E> {
        Ok(value)
    }

    fn map2<A, B, C, F>(fa: Result<A, E>, fb: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(A, B) -> C,
    {
        match (fa, fb) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(left), Err(right)) => Err(left.combine(right)),
            (Err(error), Ok(_)) | (Ok(_), Err(error)) => Err(error),
        }
    }
}
