//! Identity brand - the effect that does nothing.
//!
//! `Identity::WithType<A>` is `A` itself. Running a traversal in the identity
//! effect is a pure rebuild, which is how
//! [`Traversal::modify`](crate::optics::Traversal::modify) is defined.

use super::applicative::Applicative;
use super::functor::Functor;
use super::higher::TypeConstructor;

/// The identity brand.
///
/// # Examples
///
/// ```rust
/// use optica::typeclass::{Applicative, Identity};
///
/// let value: i32 = Identity::pure(42);
/// assert_eq!(Identity::map2(value, 8, |a, b| a + b), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Identity;

impl TypeConstructor for Identity {
    type WithType<T> = T;
}

impl Functor for Identity {
    #[inline]
    fn map<A, B, F>(fa: A, function: F) -> B
    where
        F: FnOnce(A) -> B,
    {
        function(fa)
    }
}

impl Applicative for Identity {
    #[inline]
    fn pure<A>(value: A) -> A {
        value
    }

    #[inline]
    fn map2<A, B, C, F>(fa: A, fb: B, function: F) -> C
    where
        F: FnOnce(A, B) -> C,
    {
        function(fa, fb)
    }
}
