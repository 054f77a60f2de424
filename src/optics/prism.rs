//! Prism optics for focusing on one case of a sum type.
//!
//! A Prism matches a source against one case. Matching may fail, but a
//! focus value is always enough to build a source of that case again.
//!
//! # Laws
//!
//! Every Prism must satisfy two laws:
//!
//! 1. **ReverseGetGetOption Law**: Building then matching yields the value.
//!    ```text
//!    prism.get_option(&prism.reverse_get(value.clone())) == Some(value)
//!    ```
//!
//! 2. **GetOptionReverseGet Law**: If matching succeeds, rebuilding yields the original.
//!    ```text
//!    if let Some(value) = prism.get_option(&source) {
//!        prism.reverse_get(value) == source
//!    }
//!    ```
//!
//! # Examples
//!
//! ```
//! use optica::optics::Prism;
//! use optica::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! let circle_prism = prism!(Shape, Circle);
//!
//! assert_eq!(circle_prism.get_option(&Shape::Circle(5.0)), Some(5.0));
//! assert_eq!(circle_prism.get_option(&Shape::Rectangle(3.0, 4.0)), None);
//! assert_eq!(circle_prism.reverse_get(10.0), Shape::Circle(10.0));
//! ```

use std::marker::PhantomData;

use super::kind::OpticKind;
use super::optional::{Optional, OptionalAsTraversal};

/// A Prism focuses on one case of a sum type.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole sum type)
/// - `A`: The target type (the value inside the case)
pub trait Prism<S, A> {
    /// The kind of this optic.
    const KIND: OpticKind = OpticKind::Prism;

    /// Attempts to match the source against this case.
    ///
    /// # Returns
    ///
    /// The focus if the source is of this case, `None` otherwise
    fn get_option(&self, source: &S) -> Option<A>;

    /// Builds a source of this case from a focus value.
    fn reverse_get(&self, value: A) -> S;

    /// Modifies the focus if the source matches, otherwise returns the source.
    ///
    /// When `function` returns a value equal to the current focus, the
    /// original source is returned without rebuilding it.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{some, Prism};
    ///
    /// assert_eq!(some().modify(Some(2), |x| x * 3), Some(6));
    /// assert_eq!(some().modify(None, |x: i32| x * 3), None);
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
                    self.reverse_get(next)
                }
            }
            None => source,
        }
    }

    /// Modifies the focus if the source matches.
    ///
    /// # Returns
    ///
    /// `Some(modified_source)` if the source matches, `None` otherwise
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
            Some(self.reverse_get(next))
        }
    }

    /// Replaces the focus if the source matches, otherwise returns the source.
    fn set(&self, source: S, value: A) -> S {
        if self.get_option(&source).is_some() {
            self.reverse_get(value)
        } else {
            source
        }
    }

    /// Composes this prism with another prism.
    ///
    /// Matching chains both prisms, and building goes through the inner
    /// prism first.
    fn compose<B, P>(self, other: P) -> ComposedPrism<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedPrism::new(self, other)
    }

    /// Views this prism as an optional.
    fn as_optional(self) -> PrismAsOptional<Self>
    where
        Self: Sized,
    {
        PrismAsOptional::new(self)
    }

    /// Views this prism as a traversal with zero or one focus.
    fn as_traversal(self) -> PrismAsTraversal<Self>
    where
        Self: Sized,
    {
        OptionalAsTraversal::new(self.as_optional())
    }
}

/// A prism viewed as a traversal.
pub type PrismAsTraversal<P> = OptionalAsTraversal<PrismAsOptional<P>>;

/// A prism implemented using a matching function and a constructor.
///
/// # Example
///
/// ```
/// use optica::optics::{FunctionPrism, Prism};
///
/// let positive = FunctionPrism::new(
///     |n: &i64| u64::try_from(*n).ok(),
///     |n: u64| i64::try_from(n).unwrap_or(i64::MAX),
/// );
///
/// assert_eq!(positive.get_option(&5), Some(5));
/// assert_eq!(positive.get_option(&-5), None);
/// ```
pub struct FunctionPrism<S, A, G, R>
where
    G: Fn(&S) -> Option<A>,
    R: Fn(A) -> S,
{
    get_option: G,
    reverse_get: R,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, R> FunctionPrism<S, A, G, R>
where
    G: Fn(&S) -> Option<A>,
    R: Fn(A) -> S,
{
    /// Creates a new `FunctionPrism`.
    ///
    /// # Arguments
    ///
    /// * `get_option` - Matches a source against the case
    /// * `reverse_get` - Builds a source of the case
    #[must_use]
    pub const fn new(get_option: G, reverse_get: R) -> Self {
        Self {
            get_option,
            reverse_get,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, R> Prism<S, A> for FunctionPrism<S, A, G, R>
where
    G: Fn(&S) -> Option<A>,
    R: Fn(A) -> S,
{
    fn get_option(&self, source: &S) -> Option<A> {
        (self.get_option)(source)
    }

    fn reverse_get(&self, value: A) -> S {
        (self.reverse_get)(value)
    }
}

impl<S, A, G, R> Clone for FunctionPrism<S, A, G, R>
where
    G: Fn(&S) -> Option<A> + Clone,
    R: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            get_option: self.get_option.clone(),
            reverse_get: self.reverse_get.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, R> std::fmt::Debug for FunctionPrism<S, A, G, R>
where
    G: Fn(&S) -> Option<A>,
    R: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionPrism")
            .finish_non_exhaustive()
    }
}

/// Two prisms composed end to end.
///
/// `A` is the intermediate type: the target of `P1` and the source of `P2`.
pub struct ComposedPrism<P1, P2, A> {
    first: P1,
    second: P2,
    _marker: PhantomData<fn() -> A>,
}

impl<P1, P2, A> ComposedPrism<P1, P2, A> {
    /// Creates a new composed prism.
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P1, P2> Prism<S, B> for ComposedPrism<P1, P2, A>
where
    P1: Prism<S, A>,
    P2: Prism<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.first
            .get_option(source)
            .and_then(|intermediate| self.second.get_option(&intermediate))
    }

    fn reverse_get(&self, value: B) -> S {
        self.first.reverse_get(self.second.reverse_get(value))
    }
}

impl<P1: Clone, P2: Clone, A> Clone for ComposedPrism<P1, P2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<P1: std::fmt::Debug, P2: std::fmt::Debug, A> std::fmt::Debug for ComposedPrism<P1, P2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedPrism")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// A prism used as an optional.
///
/// Setting only takes effect when the source already matches the case.
#[derive(Debug, Clone)]
pub struct PrismAsOptional<P> {
    prism: P,
}

impl<P> PrismAsOptional<P> {
    /// Wraps a prism as an optional.
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self { prism }
    }
}

impl<S, A, P> Optional<S, A> for PrismAsOptional<P>
where
    P: Prism<S, A>,
{
    fn get_option(&self, source: &S) -> Option<A> {
        self.prism.get_option(source)
    }

    fn set(&self, source: S, value: A) -> S {
        self.prism.set(source, value)
    }
}

/// Creates a prism for a single-field tuple variant of an enum.
///
/// The match clones the payload, so it must implement `Clone`.
///
/// # Syntax
///
/// ```text
/// prism!(EnumType, VariantName)
/// ```
///
/// # Example
///
/// ```
/// use optica::optics::Prism;
/// use optica::prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Json {
///     Number(f64),
///     Text(String),
/// }
///
/// let text = prism!(Json, Text);
/// assert_eq!(text.get_option(&Json::Text("hi".into())), Some("hi".to_string()));
/// assert_eq!(text.get_option(&Json::Number(1.0)), None);
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type| match source {
                $enum_type::$variant(value) => Some(::core::clone::Clone::clone(value)),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => Some(::core::clone::Clone::clone(value)),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:path, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type| match source {
                <$enum_type>::$variant(value) => Some(::core::clone::Clone::clone(value)),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| <$enum_type>::$variant(value),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::Traversal;

    #[derive(Clone, PartialEq, Debug)]
    enum Shape {
        Circle(f64),
        Square(f64),
    }

    #[derive(Clone, PartialEq, Debug)]
    enum Wrapper {
        Shape(Shape),
        Empty,
    }

    #[test]
    fn prism_macro_matches_variant() {
        let circle = prism!(Shape, Circle);
        assert_eq!(circle.get_option(&Shape::Circle(1.0)), Some(1.0));
        assert_eq!(circle.get_option(&Shape::Square(1.0)), None);
    }

    #[test]
    fn set_only_applies_to_matching_source() {
        let circle = prism!(Shape, Circle);
        assert_eq!(circle.set(Shape::Circle(1.0), 2.0), Shape::Circle(2.0));
        assert_eq!(circle.set(Shape::Square(1.0), 2.0), Shape::Square(1.0));
    }

    #[test]
    fn modify_option_reports_absence() {
        let circle = prism!(Shape, Circle);
        assert_eq!(
            circle.modify_option(Shape::Circle(1.0), |r| r * 2.0),
            Some(Shape::Circle(2.0))
        );
        assert_eq!(circle.modify_option(Shape::Square(1.0), |r| r * 2.0), None);
    }

    #[test]
    fn compose_chains_matches() {
        let wrapped_circle = prism!(Wrapper, Shape).compose(prism!(Shape, Circle));

        assert_eq!(
            wrapped_circle.get_option(&Wrapper::Shape(Shape::Circle(3.0))),
            Some(3.0)
        );
        assert_eq!(wrapped_circle.get_option(&Wrapper::Shape(Shape::Square(3.0))), None);
        assert_eq!(wrapped_circle.get_option(&Wrapper::Empty), None);
        assert_eq!(wrapped_circle.reverse_get(4.0), Wrapper::Shape(Shape::Circle(4.0)));
    }

    #[test]
    fn as_optional_set_keeps_non_matching_source() {
        let optional = prism!(Shape, Square).as_optional();
        assert_eq!(optional.set(Shape::Circle(1.0), 5.0), Shape::Circle(1.0));
        assert_eq!(optional.set(Shape::Square(1.0), 5.0), Shape::Square(5.0));
    }

    #[test]
    fn as_traversal_collects_match() {
        let traversal = prism!(Shape, Circle).as_traversal();
        assert_eq!(traversal.get_all(&Shape::Circle(2.5)), vec![2.5]);
        assert!(traversal.get_all(&Shape::Square(2.5)).is_empty());
    }
}
