//! Optional optics for focusing on a part that may be absent.
//!
//! An Optional provides get/set access to at most one focus. It is what a
//! Lens composed with a Prism becomes, and what index or key lookups into
//! collections are.
//!
//! Setting through an Optional whose focus is absent returns the source
//! unchanged: an Optional never creates the structure it looks into.
//!
//! # Laws
//!
//! 1. **GetOptionSet Law**: If present, setting what was got yields the original.
//!    ```text
//!    if let Some(value) = optional.get_option(&source) {
//!        optional.set(source.clone(), value) == source
//!    }
//!    ```
//!
//! 2. **SetGetOption Law**: If present, getting what was set yields the set value.
//!    ```text
//!    if optional.get_option(&source).is_some() {
//!        optional.get_option(&optional.set(source, value.clone())) == Some(value)
//!    }
//!    ```
//!
//! 3. **Absent Law**: If absent, setting is the identity.
//!    ```text
//!    if optional.get_option(&source).is_none() {
//!        optional.set(source.clone(), value) == source
//!    }
//!    ```
//!
//! # Examples
//!
//! ```
//! use optica::optics::{index, Optional};
//!
//! let second = index(1);
//! assert_eq!(second.get_option(&vec![1, 2]), Some(2));
//! assert_eq!(second.get_option(&vec![1]), None);
//! assert_eq!(second.set(vec![1], 3), vec![1]);
//! ```

use std::marker::PhantomData;

use super::kind::OpticKind;
use super::traversal::Traversal;
use crate::typeclass::Applicative;

/// An Optional focuses on a part that may or may not exist.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused part, if present)
pub trait Optional<S, A> {
    /// The kind of this optic.
    const KIND: OpticKind = OpticKind::Optional;

    /// Attempts to get the focused part.
    ///
    /// # Returns
    ///
    /// An owned copy of the focus if present, `None` otherwise
    fn get_option(&self, source: &S) -> Option<A>;

    /// Replaces the focused part if present.
    ///
    /// # Returns
    ///
    /// A new source with the focus replaced, or the unchanged source when the
    /// focus is absent
    fn set(&self, source: S, value: A) -> S;

    /// Modifies the focused part if present, otherwise returns the source.
    ///
    /// When `function` returns a value equal to the current focus, the
    /// original source is returned without calling `set`.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{key, Optional};
    /// use std::collections::BTreeMap;
    ///
    /// let counts = BTreeMap::from([("a".to_string(), 1)]);
    /// let bumped = key("a").modify(counts.clone(), |n| n + 1);
    /// assert_eq!(bumped["a"], 2);
    ///
    /// let missing = key("b").modify(counts.clone(), |n: i32| n + 1);
    /// assert_eq!(missing, counts);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone + PartialEq,
    {
        match self.get_option(&source) {
            Some(current) => {
                let next = function(current.clone());
                if next == current {
                    source
                } else {
                    self.set(source, next)
                }
            }
            None => source,
        }
    }

    /// Modifies the focused part if present.
    ///
    /// # Returns
    ///
    /// `Some(modified_source)` if the focus is present, `None` otherwise
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
        A: Clone + PartialEq,
    {
        let current = self.get_option(&source)?;
        let next = function(current.clone());
        if next == current {
            Some(source)
        } else {
            Some(self.set(source, next))
        }
    }

    /// Replaces the focused part if present.
    ///
    /// # Returns
    ///
    /// `Some(updated_source)` if the focus is present, `None` otherwise
    fn set_option(&self, source: S, value: A) -> Option<S> {
        self.get_option(&source)
            .map(move |_| self.set(source, value))
    }

    /// Checks whether the focused part is present.
    fn is_present(&self, source: &S) -> bool {
        self.get_option(source).is_some()
    }

    /// Composes this optional with another optional.
    ///
    /// The composed `set` leaves the source untouched when the outer focus
    /// is absent.
    fn compose<B, O>(self, other: O) -> ComposedOptional<Self, O, A>
    where
        Self: Sized,
        O: Optional<A, B>,
    {
        ComposedOptional::new(self, other)
    }

    /// Views this optional as a traversal with zero or one focus.
    fn as_traversal(self) -> OptionalAsTraversal<Self>
    where
        Self: Sized,
    {
        OptionalAsTraversal::new(self)
    }
}

/// An optional implemented using a partial getter and a setter.
///
/// The setter is only called when the getter finds a focus.
///
/// # Example
///
/// ```
/// use optica::optics::{FunctionOptional, Optional};
///
/// let head = FunctionOptional::new(
///     |items: &Vec<i32>| items.first().copied(),
///     |mut items: Vec<i32>, value: i32| {
///         items[0] = value;
///         items
///     },
/// );
///
/// assert_eq!(head.get_option(&vec![1, 2]), Some(1));
/// assert_eq!(head.set(vec![1, 2], 9), vec![9, 2]);
/// assert_eq!(head.set(vec![], 9), Vec::<i32>::new());
/// ```
pub struct FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionOptional`.
    ///
    /// # Arguments
    ///
    /// * `getter` - Returns the focus if present
    /// * `setter` - Replaces a focus known to be present
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Optional<S, A> for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    fn get_option(&self, source: &S) -> Option<A> {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        if self.is_present(&source) {
            (self.setter)(source, value)
        } else {
            source
        }
    }
}

impl<S, A, G, St> Clone for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A> + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionOptional")
            .finish_non_exhaustive()
    }
}

/// Two optionals composed end to end.
///
/// `A` is the intermediate type: the target of `O1` and the source of `O2`.
pub struct ComposedOptional<O1, O2, A> {
    first: O1,
    second: O2,
    _marker: PhantomData<fn() -> A>,
}

impl<O1, O2, A> ComposedOptional<O1, O2, A> {
    /// Creates a new composed optional.
    #[must_use]
    pub const fn new(first: O1, second: O2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O1, O2> Optional<S, B> for ComposedOptional<O1, O2, A>
where
    O1: Optional<S, A>,
    O2: Optional<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.first
            .get_option(source)
            .and_then(|intermediate| self.second.get_option(&intermediate))
    }

    fn set(&self, source: S, value: B) -> S {
        match self.first.get_option(&source) {
            Some(intermediate) => {
                let updated = self.second.set(intermediate, value);
                self.first.set(source, updated)
            }
            None => source,
        }
    }
}

impl<O1: Clone, O2: Clone, A> Clone for ComposedOptional<O1, O2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<O1: std::fmt::Debug, O2: std::fmt::Debug, A> std::fmt::Debug for ComposedOptional<O1, O2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedOptional")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// An optional used as a traversal.
///
/// The traversal has one focus when the optional matches and none otherwise.
#[derive(Debug, Clone)]
pub struct OptionalAsTraversal<O> {
    optional: O,
}

impl<O> OptionalAsTraversal<O> {
    /// Wraps an optional as a traversal.
    #[must_use]
    pub const fn new(optional: O) -> Self {
        Self { optional }
    }
}

impl<S, A, O> Traversal<S, A> for OptionalAsTraversal<O>
where
    O: Optional<S, A>,
{
    fn traverse<F>(
        &self,
        source: S,
        function: &mut dyn FnMut(A) -> F::WithType<A>,
    ) -> F::WithType<S>
    where
        F: Applicative,
    {
        match self.optional.get_option(&source) {
            Some(focus) => F::map(function(focus), move |value| self.optional.set(source, value)),
            None => F::pure(source),
        }
    }
}
