//! Prisms on the standard sum types.
//!
//! - [`some`] focuses on the value inside `Some`
//! - [`right`] focuses on the success side of a `Result`
//! - [`left`] focuses on the error side of a `Result`
//!
//! # Examples
//!
//! ```
//! use optica::optics::{left, right, Prism};
//!
//! let parsed: Result<i32, String> = Ok(3);
//! let failed: Result<i32, String> = Err("bad".to_string());
//!
//! assert_eq!(right().get_option(&parsed), Some(3));
//! assert_eq!(right().get_option(&failed), None);
//! assert_eq!(left().get_option(&failed), Some("bad".to_string()));
//! assert_eq!(right::<i32, String>().reverse_get(7), Ok(7));
//! ```

use std::marker::PhantomData;

use crate::optics::Prism;

/// Prism focusing on the value inside `Some`.
pub struct SomePrism<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> SomePrism<T> {
    /// Creates a new `SomePrism`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for SomePrism<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SomePrism<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for SomePrism<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("SomePrism")
    }
}

impl<T: Clone> Prism<Option<T>, T> for SomePrism<T> {
    fn get_option(&self, source: &Option<T>) -> Option<T> {
        source.clone()
    }

    fn reverse_get(&self, value: T) -> Option<T> {
        Some(value)
    }
}

/// Prism focusing on the `Ok` side of a `Result`.
pub struct RightPrism<A, E> {
    _marker: PhantomData<fn() -> (A, E)>,
}

impl<A, E> RightPrism<A, E> {
    /// Creates a new `RightPrism`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A, E> Default for RightPrism<A, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, E> Clone for RightPrism<A, E> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<A, E> std::fmt::Debug for RightPrism<A, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("RightPrism")
    }
}

impl<A: Clone, E> Prism<Result<A, E>, A> for RightPrism<A, E> {
    fn get_option(&self, source: &Result<A, E>) -> Option<A> {
        source.as_ref().ok().cloned()
    }

    fn reverse_get(&self, value: A) -> Result<A, E> {
        Ok(value)
    }
}

/// Prism focusing on the `Err` side of a `Result`.
pub struct LeftPrism<E, A> {
    _marker: PhantomData<fn() -> (E, A)>,
}

impl<E, A> LeftPrism<E, A> {
    /// Creates a new `LeftPrism`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<E, A> Default for LeftPrism<E, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, A> Clone for LeftPrism<E, A> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<E, A> std::fmt::Debug for LeftPrism<E, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("LeftPrism")
    }
}

impl<E, A: Clone> Prism<Result<E, A>, A> for LeftPrism<E, A> {
    fn get_option(&self, source: &Result<E, A>) -> Option<A> {
        source.as_ref().err().cloned()
    }

    fn reverse_get(&self, value: A) -> Result<E, A> {
        Err(value)
    }
}

/// Returns a prism on the value inside `Some`.
#[must_use]
pub const fn some<T>() -> SomePrism<T> {
    SomePrism::new()
}

/// Returns a prism on the `Ok` side of a `Result<A, E>`.
#[must_use]
pub const fn right<A, E>() -> RightPrism<A, E> {
    RightPrism::new()
}

/// Returns a prism on the `Err` side of a `Result<E, A>`.
#[must_use]
pub const fn left<E, A>() -> LeftPrism<E, A> {
    LeftPrism::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(1), Some(1))]
    #[case(None, None)]
    fn some_matches_present_value(#[case] source: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(some().get_option(&source), expected);
    }

    #[test]
    fn some_modify_keeps_none() {
        assert_eq!(some().modify(None, |x: i32| x + 1), None);
        assert_eq!(some().modify(Some(1), |x| x + 1), Some(2));
    }

    #[test]
    fn right_and_left_are_disjoint() {
        let ok: Result<u8, char> = Ok(1);
        let err: Result<u8, char> = Err('x');

        assert_eq!(right().get_option(&ok), Some(1));
        assert_eq!(left().get_option(&ok), None);
        assert_eq!(right().get_option(&err), None);
        assert_eq!(left().get_option(&err), Some('x'));
    }

    #[test]
    fn left_set_only_touches_errors() {
        let ok: Result<u8, char> = Ok(1);
        assert_eq!(left().set(ok, 'y'), Ok(1));
        assert_eq!(left().set(Err::<u8, char>('x'), 'y'), Err('y'));
    }
}
