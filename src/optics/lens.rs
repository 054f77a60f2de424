//! Lens optics for focusing on a part that is always present.
//!
//! A Lens provides get/set access to one component of a larger structure.
//! Getting returns an owned copy of the focus, and setting consumes the old
//! structure and returns a new one, so lenses never mutate in place.
//!
//! # Laws
//!
//! ```text
//! get-set: lens.set(s.clone(), lens.get(&s)) == s
//! set-get: lens.get(&lens.set(s, a.clone())) == a
//! set-set: lens.set(lens.set(s, a1), a2) == lens.set(s, a2)
//! ```
//!
//! ```
//! use optica::optics::Lens;
//! use optica::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Endpoint { host: String, port: u16 }
//!
//! let port = lens!(Endpoint, port);
//! let endpoint = Endpoint { host: "localhost".to_string(), port: 80 };
//!
//! assert_eq!(port.get(&endpoint), 80);
//! assert_eq!(port.set(endpoint, 8080).port, 8080);
//! ```

use std::marker::PhantomData;

use super::kind::OpticKind;
use super::optional::{Optional, OptionalAsTraversal};

/// Focuses on exactly one `A` inside an `S`.
pub trait Lens<S, A> {
    /// The kind of this optic.
    const KIND: OpticKind = OpticKind::Lens;

    /// Returns an owned copy of the focus.
    fn get(&self, source: &S) -> A;

    /// Replaces the focus, consuming the source.
    fn set(&self, source: S, value: A) -> S;

    /// Applies `function` to the focus.
    ///
    /// When `function` returns a value equal to the current focus, the
    /// original source is returned as is and `set` is never called.
    ///
    /// ```
    /// use optica::optics::Lens;
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Retry { attempts: u32 }
    ///
    /// let attempts = lens!(Retry, attempts);
    /// assert_eq!(attempts.modify(Retry { attempts: 2 }, |n| n + 1), Retry { attempts: 3 });
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone + PartialEq,
    {
        let current = self.get(&source);
        let next = function(current.clone());
        if next == current {
            source
        } else {
            self.set(source, next)
        }
    }

    /// Composes this lens with another lens to focus on a nested part.
    ///
    /// Getting goes through both lenses, and setting rebuilds the
    /// intermediate structure with the inner lens before handing it to the
    /// outer one.
    ///
    /// ```
    /// use optica::optics::Lens;
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Tls { cert: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Listener { port: u16, tls: Tls }
    ///
    /// let cert = lens!(Listener, tls).compose(lens!(Tls, cert));
    /// let listener = Listener { port: 443, tls: Tls { cert: "a.pem".to_string() } };
    ///
    /// assert_eq!(cert.get(&listener), "a.pem");
    /// assert_eq!(cert.set(listener, "b.pem".to_string()).tls.cert, "b.pem");
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }

    /// Combines this lens with another lens on the same source into a lens
    /// focusing on both parts at once.
    ///
    /// The two lenses should focus on disjoint parts, otherwise the SetGet
    /// law does not hold for the product.
    fn zip<B, L>(self, other: L) -> ZippedLens<Self, L>
    where
        Self: Sized,
        L: Lens<S, B>,
    {
        ZippedLens::new(self, other)
    }

    /// Views this lens as an optional whose focus is always present.
    fn as_optional(self) -> LensAsOptional<Self>
    where
        Self: Sized,
    {
        LensAsOptional::new(self)
    }

    /// Views this lens as a traversal with exactly one focus.
    fn as_traversal(self) -> LensAsTraversal<Self>
    where
        Self: Sized,
    {
        OptionalAsTraversal::new(self.as_optional())
    }
}

/// A lens viewed as a traversal.
pub type LensAsTraversal<L> = OptionalAsTraversal<LensAsOptional<L>>;

/// A lens built from a getter and a setter closure. `lens!` expands to one.
///
/// ```
/// use optica::optics::{Lens, FunctionLens};
///
/// let first = FunctionLens::new(
///     |pair: &(u8, char)| pair.0,
///     |pair: (u8, char), first: u8| (first, pair.1),
/// );
/// assert_eq!(first.set((1, 'a'), 2), (2, 'a'));
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    /// Creates a lens from `getter` and `setter`.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn get(&self, source: &S) -> A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A + Clone,
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

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// A lens composed of two lenses.
///
/// # Type Parameters
///
/// - `L1`: The type of the outer lens
/// - `L2`: The type of the inner lens
/// - `A`: The intermediate type (target of L1, source of L2)
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<fn() -> A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates a new composed lens.
    ///
    /// # Arguments
    ///
    /// * `first` - The outer lens (focuses on the intermediate structure)
    /// * `second` - The inner lens (focuses on the final part)
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
{
    fn get(&self, source: &S) -> B {
        self.second.get(&self.first.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        let intermediate = self.first.get(&source);
        let new_intermediate = self.second.set(intermediate, value);
        self.first.set(source, new_intermediate)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Two lenses on the same source, focusing on the pair of their targets.
///
/// Setting applies the first lens, then the second.
#[derive(Debug, Clone)]
pub struct ZippedLens<L1, L2> {
    first: L1,
    second: L2,
}

impl<L1, L2> ZippedLens<L1, L2> {
    /// Creates a product of two lenses.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self { first, second }
    }
}

impl<S, A, B, L1, L2> Lens<S, (A, B)> for ZippedLens<L1, L2>
where
    L1: Lens<S, A>,
    L2: Lens<S, B>,
{
    fn get(&self, source: &S) -> (A, B) {
        (self.first.get(source), self.second.get(source))
    }

    fn set(&self, source: S, (first, second): (A, B)) -> S {
        self.second.set(self.first.set(source, first), second)
    }
}

/// A lens used as an optional.
///
/// `get_option` always returns `Some`.
#[derive(Debug, Clone)]
pub struct LensAsOptional<L> {
    lens: L,
}

impl<L> LensAsOptional<L> {
    /// Wraps a lens as an optional.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self { lens }
    }
}

impl<S, A, L> Optional<S, A> for LensAsOptional<L>
where
    L: Lens<S, A>,
{
    fn get_option(&self, source: &S) -> Option<A> {
        Some(self.lens.get(source))
    }

    fn set(&self, source: S, value: A) -> S {
        self.lens.set(source, value)
    }
}

/// Creates a lens for a struct field.
///
/// The getter clones the field, so the field type must implement `Clone`.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use optica::optics::Lens;
/// use optica::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens!(Point, x);
/// let y_lens = lens!(Point, y);
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(x_lens.get(&point), 10);
/// assert_eq!(y_lens.get(&point), 20);
///
/// let updated = x_lens.set(point, 100);
/// assert_eq!(updated, Point { x: 100, y: 20 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| ::core::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| ::core::clone::Clone::clone(&source.$field),
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| ::core::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}

/// Creates a lens focusing on several fields of a struct at once, as a tuple.
///
/// # Example
///
/// ```
/// use optica::optics::Lens;
/// use optica::props;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32, z: i32 }
///
/// let xz = props!(Point, x, z);
/// let point = Point { x: 1, y: 2, z: 3 };
/// assert_eq!(xz.get(&point), (1, 3));
/// assert_eq!(xz.set(point, (10, 30)), Point { x: 10, y: 2, z: 30 });
/// ```
#[macro_export]
macro_rules! props {
    ($struct_type:path, $($field:ident),+ $(,)?) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| ($(::core::clone::Clone::clone(&source.$field),)+),
            |mut source: $struct_type, ($($field,)+)| {
                $(source.$field = $field;)+
                source
            },
        )
    };
}
