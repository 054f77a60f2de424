//! The free semigroup: a non-empty sequence kept as an unbalanced binary tree.
//!
//! Concatenation allocates one node and never walks its operands, which is
//! what decoders need when they pile up errors from every branch of a large
//! input. Flattening happens once, at presentation time, with an explicit
//! stack.
//!
//! # Examples
//!
//! ```rust
//! use optica::decoder::FreeSemigroup;
//! use optica::typeclass::Semigroup;
//!
//! let left = FreeSemigroup::of(1).combine(FreeSemigroup::of(2));
//! let right = FreeSemigroup::concat(left, FreeSemigroup::of(3));
//! assert_eq!(right.to_vec(), vec![1, 2, 3]);
//! ```

use std::fmt;

use crate::typeclass::Semigroup;

/// A non-empty sequence with constant-time concatenation.
///
/// Equality compares the elements in order, not the shape of the tree, so
/// `(a ++ b) ++ c == a ++ (b ++ c)`.
pub struct FreeSemigroup<T> {
    node: Node<T>,
}

enum Node<T> {
    Of(T),
    Concat(Box<Node<T>>, Box<Node<T>>),
    // Left behind by `Drop` and `into_fold` once the tree has been taken.
    Vacant,
}

enum Step<N> {
    Visit(N),
    Combine,
}

impl<T> FreeSemigroup<T> {
    /// Creates a sequence of one element.
    #[must_use]
    pub const fn of(value: T) -> Self {
        Self {
            node: Node::Of(value),
        }
    }

    /// Joins two sequences without inspecting them.
    #[must_use]
    pub fn concat(mut left: Self, mut right: Self) -> Self {
        Self {
            node: Node::Concat(Box::new(left.take()), Box::new(right.take())),
        }
    }

    fn take(&mut self) -> Node<T> {
        std::mem::replace(&mut self.node, Node::Vacant)
    }

    /// Folds the tree structurally.
    ///
    /// Unlike iterating, this sees the shape of the tree, so `on_concat`
    /// is called once per concatenation with the results of both sides.
    /// The walk uses an explicit stack, so arbitrarily deep trees are fine.
    pub fn fold<R>(
        &self,
        on_of: &mut impl FnMut(&T) -> R,
        on_concat: &mut impl FnMut(R, R) -> R,
    ) -> R {
        let mut steps = vec![Step::Visit(&self.node)];
        let mut results = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Node::Of(value)) => results.push(on_of(value)),
                Step::Visit(Node::Concat(left, right)) => {
                    steps.push(Step::Combine);
                    steps.push(Step::Visit(&**right));
                    steps.push(Step::Visit(&**left));
                }
                Step::Visit(Node::Vacant) => {
                    unreachable!("a live free semigroup has no vacant node")
                }
                Step::Combine => combine_top(&mut results, on_concat),
            }
        }
        single(results)
    }

    /// Folds the tree structurally, consuming it.
    pub fn into_fold<R>(
        mut self,
        on_of: &mut impl FnMut(T) -> R,
        on_concat: &mut impl FnMut(R, R) -> R,
    ) -> R {
        let mut steps = vec![Step::Visit(self.take())];
        let mut results = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Node::Of(value)) => results.push(on_of(value)),
                Step::Visit(Node::Concat(left, right)) => {
                    steps.push(Step::Combine);
                    steps.push(Step::Visit(*right));
                    steps.push(Step::Visit(*left));
                }
                Step::Visit(Node::Vacant) => {
                    unreachable!("a live free semigroup has no vacant node")
                }
                Step::Combine => combine_top(&mut results, on_concat),
            }
        }
        single(results)
    }

    /// Iterates over the elements from left to right.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: vec![&self.node],
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Always `false`: a free semigroup holds at least one element.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Clones the elements into a `Vec`, left to right.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Applies `function` to every element, left to right, keeping the tree
    /// shape.
    #[must_use]
    pub fn map<U, F>(self, mut function: F) -> FreeSemigroup<U>
    where
        F: FnMut(T) -> U,
    {
        self.into_fold(&mut |value| FreeSemigroup::of(function(value)), &mut FreeSemigroup::concat)
    }
}

fn combine_top<R>(results: &mut Vec<R>, on_concat: &mut impl FnMut(R, R) -> R) {
    match (results.pop(), results.pop()) {
        (Some(right), Some(left)) => results.push(on_concat(left, right)),
        _ => unreachable!("both sides of a concatenation are folded before it"),
    }
}

fn single<R>(mut results: Vec<R>) -> R {
    match (results.pop(), results.is_empty()) {
        (Some(result), true) => result,
        _ => unreachable!("a fold leaves exactly one result"),
    }
}

impl<T> Drop for FreeSemigroup<T> {
    fn drop(&mut self) {
        let mut stack = vec![self.take()];
        while let Some(node) = stack.pop() {
            if let Node::Concat(left, right) = node {
                stack.push(*left);
                stack.push(*right);
            }
        }
    }
}

impl<T: Clone> Clone for FreeSemigroup<T> {
    fn clone(&self) -> Self {
        self.fold(&mut |value| Self::of(value.clone()), &mut Self::concat)
    }
}

impl<T: PartialEq> PartialEq for FreeSemigroup<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for FreeSemigroup<T> {}

impl<T: fmt::Debug> fmt::Debug for FreeSemigroup<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Semigroup for FreeSemigroup<T> {
    fn combine(self, other: Self) -> Self {
        Self::concat(self, other)
    }
}

/// Left-to-right iterator over a [`FreeSemigroup`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Iter").field("pending", &self.stack.len()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                Node::Of(value) => return Some(value),
                Node::Concat(left, right) => {
                    self.stack.push(right);
                    self.stack.push(left);
                }
                Node::Vacant => {}
            }
        }
        None
    }
}

impl<'a, T> IntoIterator for &'a FreeSemigroup<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn from_values(values: &[i32]) -> Option<FreeSemigroup<i32>> {
        values
            .iter()
            .map(|value| FreeSemigroup::of(*value))
            .reduce(FreeSemigroup::concat)
    }

    #[test]
    fn iter_is_left_to_right_for_right_leaning_trees() {
        let tree = FreeSemigroup::concat(
            FreeSemigroup::of('a'),
            FreeSemigroup::concat(FreeSemigroup::of('b'), FreeSemigroup::of('c')),
        );
        assert_eq!(tree.iter().collect::<String>(), "abc");
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn fold_counts_concat_nodes() {
        let tree = FreeSemigroup::concat(
            FreeSemigroup::concat(FreeSemigroup::of(1), FreeSemigroup::of(2)),
            FreeSemigroup::of(3),
        );
        let depth = tree.fold(&mut |_| 0, &mut |left: usize, right: usize| 1 + left.max(right));
        assert_eq!(depth, 2);
    }

    #[test]
    fn map_keeps_shape() {
        let tree = FreeSemigroup::concat(FreeSemigroup::of(1), FreeSemigroup::of(2));
        assert_eq!(
            tree.map(|value| value * 10),
            FreeSemigroup::concat(FreeSemigroup::of(10), FreeSemigroup::of(20))
        );
    }

    fn left_leaning(size: u32) -> FreeSemigroup<u32> {
        (1..size).fold(FreeSemigroup::of(0), |tree, value| {
            FreeSemigroup::concat(tree, FreeSemigroup::of(value))
        })
    }

    #[test]
    fn deep_trees_are_walked_and_dropped_without_recursion() {
        let tree = left_leaning(200_000);

        assert_eq!(tree.len(), 200_000);
        let sum = tree.fold(&mut |value| u64::from(*value), &mut |left: u64, right: u64| {
            left + right
        });
        assert_eq!(sum, 19_999_900_000);

        let copy = tree.clone();
        assert_eq!(copy, tree);

        let shifted = copy.map(|value| value + 1);
        assert_eq!(shifted.iter().next(), Some(&1));
        drop(shifted);
        drop(tree);
    }

    #[test]
    fn equality_ignores_grouping() {
        let left = FreeSemigroup::concat(
            FreeSemigroup::concat(FreeSemigroup::of(1), FreeSemigroup::of(2)),
            FreeSemigroup::of(3),
        );
        let right = FreeSemigroup::concat(
            FreeSemigroup::of(1),
            FreeSemigroup::concat(FreeSemigroup::of(2), FreeSemigroup::of(3)),
        );
        assert_eq!(left, right);
        assert_ne!(left, FreeSemigroup::of(1));
        assert_eq!(format!("{left:?}"), "[1, 2, 3]");
    }

    #[test]
    fn into_fold_consumes_left_to_right() {
        let tree = FreeSemigroup::concat(
            FreeSemigroup::of("a".to_string()),
            FreeSemigroup::of("b".to_string()),
        );
        let joined =
            tree.into_fold(&mut |value| value, &mut |left: String, right: String| left + &right);
        assert_eq!(joined, "ab");
    }

    proptest! {
        #[test]
        fn combine_is_associative_after_flattening(
            a in prop::collection::vec(any::<i32>(), 1..5),
            b in prop::collection::vec(any::<i32>(), 1..5),
            c in prop::collection::vec(any::<i32>(), 1..5),
        ) {
            let (a, b, c) =
                (from_values(&a).unwrap(), from_values(&b).unwrap(), from_values(&c).unwrap());
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left.to_vec(), right.to_vec());
        }
    }
}
