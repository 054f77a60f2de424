//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! Some semigroups, such as
//! [`FreeSemigroup`](crate::decoder::FreeSemigroup), only satisfy the law
//! observationally: both sides flatten to the same sequence even though
//! their trees differ.
//!
//! # Examples
//!
//! ```rust
//! use optica::typeclass::Semigroup;
//!
//! assert_eq!(String::from("Hello, ").combine(String::from("World!")), "Hello, World!");
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! ```

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Reduces all elements of an iterator with [`combine`](Self::combine).
    ///
    /// Returns `None` for an empty iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::typeclass::Semigroup;
    ///
    /// let joined = String::reduce_all(vec!["a".to_string(), "b".to_string()]);
    /// assert_eq!(joined, Some("ab".to_string()));
    /// assert_eq!(String::reduce_all(Vec::<String>::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl Semigroup for () {
    fn combine(self, (): Self) -> Self {}
}

/// `Option<T>` lifts a semigroup: `None` is absorbed, two `Some`s combine.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (left, None) => left,
            (None, right) => right,
        }
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, None, None)]
    #[case(Some("a"), None, Some("a"))]
    #[case(None, Some("b"), Some("b"))]
    #[case(Some("a"), Some("b"), Some("ab"))]
    fn option_combine(
        #[case] left: Option<&str>,
        #[case] right: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let left = left.map(String::from);
        let right = right.map(String::from);
        assert_eq!(left.combine(right), expected.map(String::from));
    }

    #[test]
    fn tuple_combines_componentwise() {
        let left = ("a".to_string(), vec![1]);
        let right = ("b".to_string(), vec![2]);
        assert_eq!(left.combine(right), ("ab".to_string(), vec![1, 2]));
    }

    proptest! {
        #[test]
        fn vec_combine_is_associative(
            a in proptest::collection::vec(any::<i8>(), 0..5),
            b in proptest::collection::vec(any::<i8>(), 0..5),
            c in proptest::collection::vec(any::<i8>(), 0..5),
        ) {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }
    }
}
