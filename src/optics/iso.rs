//! Iso optics for lossless conversions between two types.
//!
//! An Iso witnesses that `S` and `A` carry the same information: every `S`
//! converts to an `A` and back without loss. Being the most capable optic,
//! an Iso can be used as any other kind through the `as_*` conversions.
//!
//! # Laws
//!
//! 1. **GetReverseGet Law**: converting there and back yields the original.
//!    ```text
//!    iso.reverse_get(iso.get(&source)) == source
//!    ```
//!
//! 2. **ReverseGetGet Law**: converting back and there yields the original.
//!    ```text
//!    iso.get(&iso.reverse_get(value)) == value
//!    ```
//!
//! The laws are the constructor's responsibility; they are not checked.
//!
//! # Examples
//!
//! ```
//! use optica::optics::{FunctionIso, Iso};
//!
//! let celsius_to_fahrenheit = FunctionIso::new(
//!     |celsius: &f64| celsius * 9.0 / 5.0 + 32.0,
//!     |fahrenheit: f64| (fahrenheit - 32.0) * 5.0 / 9.0,
//! );
//!
//! assert_eq!(celsius_to_fahrenheit.get(&100.0), 212.0);
//! assert_eq!(celsius_to_fahrenheit.reverse_get(32.0), 0.0);
//! ```

use std::marker::PhantomData;

use super::kind::OpticKind;
use super::lens::{Lens, LensAsOptional};
use super::optional::OptionalAsTraversal;
use super::prism::Prism;

/// An isomorphism between `S` and `A`.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
pub trait Iso<S, A> {
    /// The kind of this optic.
    const KIND: OpticKind = OpticKind::Iso;

    /// Converts a source into the target representation.
    fn get(&self, source: &S) -> A;

    /// Converts a target back into the source representation.
    fn reverse_get(&self, value: A) -> S;

    /// Modifies the source by transforming its target representation.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{FunctionIso, Iso};
    ///
    /// let chars = FunctionIso::new(
    ///     |text: &String| text.chars().collect::<Vec<_>>(),
    ///     |chars: Vec<char>| chars.into_iter().collect::<String>(),
    /// );
    ///
    /// let reversed = chars.modify("abc".to_string(), |mut cs| {
    ///     cs.reverse();
    ///     cs
    /// });
    /// assert_eq!(reversed, "cba");
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.reverse_get(function(self.get(&source)))
    }

    /// Swaps the two directions of this iso.
    fn reverse(self) -> ReversedIso<Self>
    where
        Self: Sized,
    {
        ReversedIso::new(self)
    }

    /// Composes this iso with another iso.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{FunctionIso, Iso};
    ///
    /// let double = FunctionIso::new(|x: &i32| x * 2, |x: i32| x / 2);
    /// let negate = FunctionIso::new(|x: &i32| -x, |x: i32| -x);
    /// let both = double.compose(negate);
    ///
    /// assert_eq!(both.get(&3), -6);
    /// assert_eq!(both.reverse_get(-6), 3);
    /// ```
    fn compose<B, I>(self, other: I) -> ComposedIso<Self, I, A>
    where
        Self: Sized,
        I: Iso<A, B>,
    {
        ComposedIso::new(self, other)
    }

    /// Post-composes this iso with a pair of inverse functions.
    fn imap<B, F, G>(self, forward: F, backward: G) -> ComposedIso<Self, FunctionIso<A, B, F, G>, A>
    where
        Self: Sized,
        F: Fn(&A) -> B,
        G: Fn(B) -> A,
    {
        ComposedIso::new(self, FunctionIso::new(forward, backward))
    }

    /// Views this iso as a lens.
    fn as_lens(self) -> IsoAsLens<Self>
    where
        Self: Sized,
    {
        IsoAsLens::new(self)
    }

    /// Views this iso as a prism.
    fn as_prism(self) -> IsoAsPrism<Self>
    where
        Self: Sized,
    {
        IsoAsPrism::new(self)
    }

    /// Views this iso as an optional.
    fn as_optional(self) -> IsoAsOptional<Self>
    where
        Self: Sized,
    {
        LensAsOptional::new(self.as_lens())
    }

    /// Views this iso as a traversal with exactly one focus.
    fn as_traversal(self) -> IsoAsTraversal<Self>
    where
        Self: Sized,
    {
        OptionalAsTraversal::new(self.as_optional())
    }
}

/// An iso viewed as an optional.
pub type IsoAsOptional<I> = LensAsOptional<IsoAsLens<I>>;

/// An iso viewed as a traversal.
pub type IsoAsTraversal<I> = OptionalAsTraversal<IsoAsOptional<I>>;

/// An iso built from a pair of inverse functions.
///
/// # Example
///
/// ```
/// use optica::optics::{FunctionIso, Iso};
///
/// let wrap = FunctionIso::new(|text: &String| text.len(), |len: usize| "x".repeat(len));
/// assert_eq!(wrap.get(&"abc".to_string()), 3);
/// ```
pub struct FunctionIso<S, A, G, R>
where
    G: Fn(&S) -> A,
    R: Fn(A) -> S,
{
    getter: G,
    reverse_getter: R,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, R> FunctionIso<S, A, G, R>
where
    G: Fn(&S) -> A,
    R: Fn(A) -> S,
{
    /// Creates a new `FunctionIso` from a conversion and its inverse.
    ///
    /// # Arguments
    ///
    /// * `getter` - Converts `S` into `A`
    /// * `reverse_getter` - Converts `A` back into `S`
    #[must_use]
    pub const fn new(getter: G, reverse_getter: R) -> Self {
        Self {
            getter,
            reverse_getter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, R> Iso<S, A> for FunctionIso<S, A, G, R>
where
    G: Fn(&S) -> A,
    R: Fn(A) -> S,
{
    fn get(&self, source: &S) -> A {
        (self.getter)(source)
    }

    fn reverse_get(&self, value: A) -> S {
        (self.reverse_getter)(value)
    }
}

impl<S, A, G, R> Clone for FunctionIso<S, A, G, R>
where
    G: Fn(&S) -> A + Clone,
    R: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            reverse_getter: self.reverse_getter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, R> std::fmt::Debug for FunctionIso<S, A, G, R>
where
    G: Fn(&S) -> A,
    R: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionIso").finish_non_exhaustive()
    }
}

/// Two isos composed end to end.
///
/// `A` is the intermediate type: the target of `I1` and the source of `I2`.
pub struct ComposedIso<I1, I2, A> {
    first: I1,
    second: I2,
    _marker: PhantomData<fn() -> A>,
}

impl<I1, I2, A> ComposedIso<I1, I2, A> {
    /// Creates a new composed iso.
    #[must_use]
    pub const fn new(first: I1, second: I2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<I1: Clone, I2: Clone, A> Clone for ComposedIso<I1, I2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<I1: std::fmt::Debug, I2: std::fmt::Debug, A> std::fmt::Debug for ComposedIso<I1, I2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedIso")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

impl<S, A, B, I1, I2> Iso<S, B> for ComposedIso<I1, I2, A>
where
    I1: Iso<S, A>,
    I2: Iso<A, B>,
{
    fn get(&self, source: &S) -> B {
        self.second.get(&self.first.get(source))
    }

    fn reverse_get(&self, value: B) -> S {
        self.first.reverse_get(self.second.reverse_get(value))
    }
}

/// An iso with its two directions swapped.
#[derive(Debug, Clone)]
pub struct ReversedIso<I> {
    iso: I,
}

impl<I> ReversedIso<I> {
    /// Wraps an iso, swapping its directions.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self { iso }
    }
}

impl<S, A, I> Iso<A, S> for ReversedIso<I>
where
    I: Iso<S, A>,
    A: Clone,
{
    fn get(&self, source: &A) -> S {
        self.iso.reverse_get(source.clone())
    }

    fn reverse_get(&self, value: S) -> A {
        self.iso.get(&value)
    }
}

/// An iso used as a lens.
///
/// Setting ignores the old source entirely.
#[derive(Debug, Clone)]
pub struct IsoAsLens<I> {
    iso: I,
}

impl<I> IsoAsLens<I> {
    /// Wraps an iso as a lens.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self { iso }
    }
}

impl<S, A, I> Lens<S, A> for IsoAsLens<I>
where
    I: Iso<S, A>,
{
    fn get(&self, source: &S) -> A {
        self.iso.get(source)
    }

    fn set(&self, _source: S, value: A) -> S {
        self.iso.reverse_get(value)
    }
}

/// An iso used as a prism whose match always succeeds.
#[derive(Debug, Clone)]
pub struct IsoAsPrism<I> {
    iso: I,
}

impl<I> IsoAsPrism<I> {
    /// Wraps an iso as a prism.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self { iso }
    }
}

impl<S, A, I> Prism<S, A> for IsoAsPrism<I>
where
    I: Iso<S, A>,
{
    fn get_option(&self, source: &S) -> Option<A> {
        Some(self.iso.get(source))
    }

    fn reverse_get(&self, value: A) -> S {
        self.iso.reverse_get(value)
    }
}

/// Creates a [`FunctionIso`] from a conversion and its inverse.
///
/// # Example
///
/// ```
/// use optica::iso;
/// use optica::optics::Iso;
///
/// let tupled = iso!(|pair: &(i32, i32)| [pair.0, pair.1], |array: [i32; 2]| (array[0], array[1]));
/// assert_eq!(tupled.get(&(1, 2)), [1, 2]);
/// ```
#[macro_export]
macro_rules! iso {
    ($get:expr, $reverse_get:expr) => {
        $crate::optics::FunctionIso::new($get, $reverse_get)
    };
}
