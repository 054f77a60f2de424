//! Newtype wrappers selecting a particular monoid for a type.
//!
//! Numbers form several monoids. These wrappers pick one, which makes them
//! convenient summaries for
//! [`Traversal::fold_map`](crate::optics::Traversal::fold_map).

use std::ops::{Add, Mul};

use super::monoid::Monoid;
use super::semigroup::Semigroup;

/// Numeric values combined with `+`, identity `0`.
///
/// # Examples
///
/// ```rust
/// use optica::typeclass::{Monoid, Sum};
///
/// assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

/// Numeric values combined with `*`, identity `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);

/// Boolean conjunction, identity `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct All(pub bool);

/// Boolean disjunction, identity `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Any(pub bool);

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A: Mul<Output = A> + From<u8>> Monoid for Product<A> {
    fn empty() -> Self {
        Self(A::from(1))
    }
}

impl Semigroup for All {
    fn combine(self, other: Self) -> Self {
        Self(self.0 && other.0)
    }
}

impl Monoid for All {
    fn empty() -> Self {
        Self(true)
    }
}

impl Semigroup for Any {
    fn combine(self, other: Self) -> Self {
        Self(self.0 || other.0)
    }
}

impl Monoid for Any {
    fn empty() -> Self {
        Self(false)
    }
}
