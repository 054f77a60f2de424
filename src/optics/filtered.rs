//! Predicate-driven optics.
//!
//! [`from_predicate`] turns a predicate into a Prism from a type to itself
//! that only matches values satisfying it. Composed after another optic it
//! filters that optic's foci. [`find_first`] focuses on the first element of
//! a `Vec` satisfying a predicate.
//!
//! A filtering prism is only lawful when updates keep the predicate true:
//! setting a value that fails the predicate produces a source that no longer
//! matches.
//!
//! # Examples
//!
//! ```
//! use optica::optics::{each, from_predicate, Traversal, TraversalCompose};
//!
//! let evens = each().compose_prism(from_predicate(|n: &i32| n % 2 == 0));
//!
//! assert_eq!(evens.get_all(&vec![1, 2, 3, 4]), vec![2, 4]);
//! assert_eq!(evens.modify(vec![1, 2, 3, 4], |n| n * 10), vec![1, 20, 3, 40]);
//! ```

use std::marker::PhantomData;

use crate::optics::{Optional, Prism};

/// Prism matching the values that satisfy a predicate.
pub struct PredicatePrism<A, P> {
    predicate: P,
    _marker: PhantomData<fn(&A)>,
}

impl<A, P> PredicatePrism<A, P>
where
    P: Fn(&A) -> bool,
{
    /// Creates a new prism from a predicate.
    #[must_use]
    pub const fn new(predicate: P) -> Self {
        Self {
            predicate,
            _marker: PhantomData,
        }
    }
}

impl<A: Clone, P> Prism<A, A> for PredicatePrism<A, P>
where
    P: Fn(&A) -> bool,
{
    fn get_option(&self, source: &A) -> Option<A> {
        (self.predicate)(source).then(|| source.clone())
    }

    fn reverse_get(&self, value: A) -> A {
        value
    }
}

impl<A, P: Clone> Clone for PredicatePrism<A, P> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            _marker: PhantomData,
        }
    }
}

impl<A, P> std::fmt::Debug for PredicatePrism<A, P> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PredicatePrism")
            .finish_non_exhaustive()
    }
}

/// Optional focusing on the first element of a `Vec` satisfying a predicate.
pub struct FindFirst<A, P> {
    predicate: P,
    _marker: PhantomData<fn(&A)>,
}

impl<A, P> FindFirst<A, P>
where
    P: Fn(&A) -> bool,
{
    /// Creates a new optional from a predicate.
    #[must_use]
    pub const fn new(predicate: P) -> Self {
        Self {
            predicate,
            _marker: PhantomData,
        }
    }

    fn position(&self, source: &[A]) -> Option<usize> {
        source.iter().position(|element| (self.predicate)(element))
    }
}

impl<A: Clone, P> Optional<Vec<A>, A> for FindFirst<A, P>
where
    P: Fn(&A) -> bool,
{
    fn get_option(&self, source: &Vec<A>) -> Option<A> {
        self.position(source).map(|position| source[position].clone())
    }

    fn set(&self, mut source: Vec<A>, value: A) -> Vec<A> {
        if let Some(position) = self.position(&source) {
            source[position] = value;
        }
        source
    }
}

impl<A, P: Clone> Clone for FindFirst<A, P> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            _marker: PhantomData,
        }
    }
}

impl<A, P> std::fmt::Debug for FindFirst<A, P> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FindFirst").finish_non_exhaustive()
    }
}

/// Returns a prism matching the values that satisfy `predicate`.
#[must_use]
pub const fn from_predicate<A, P>(predicate: P) -> PredicatePrism<A, P>
where
    P: Fn(&A) -> bool,
{
    PredicatePrism::new(predicate)
}

/// Returns an optional on the first element satisfying `predicate`.
///
/// # Example
///
/// ```
/// use optica::optics::{find_first, Optional};
///
/// let first_negative = find_first(|n: &i32| *n < 0);
/// assert_eq!(first_negative.get_option(&vec![3, -1, -2]), Some(-1));
/// assert_eq!(first_negative.set(vec![3, -1, -2], 0), vec![3, 0, -2]);
/// assert_eq!(first_negative.set(vec![3], 0), vec![3]);
/// ```
#[must_use]
pub const fn find_first<A, P>(predicate: P) -> FindFirst<A, P>
where
    P: Fn(&A) -> bool,
{
    FindFirst::new(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(4, Some(4))]
    #[case(3, None)]
    fn predicate_prism_matches(#[case] value: i32, #[case] expected: Option<i32>) {
        let even = from_predicate(|n: &i32| n % 2 == 0);
        assert_eq!(even.get_option(&value), expected);
    }

    #[test]
    fn predicate_prism_set_ignores_failing_source() {
        let long = from_predicate(|text: &String| text.len() > 3);
        assert_eq!(long.set("ab".to_string(), "abcdef".to_string()), "ab");
        assert_eq!(long.set("abcd".to_string(), "abcdef".to_string()), "abcdef");
    }

    #[test]
    fn find_first_on_empty_vec() {
        let any = find_first(|_: &u8| true);
        assert_eq!(any.get_option(&Vec::new()), None);
    }
}
