//! The composition table and the combinators built on it.
//!
//! Any two optics compose, and the kind of the result is the join of the two
//! kinds in the capability lattice (see [`OpticKind::join`]):
//!
//! ```text
//!              | Iso        Lens       Prism      Optional   Traversal
//! -------------+-------------------------------------------------------
//! Iso          | Iso        Lens       Prism      Optional   Traversal
//! Lens         | Lens       Lens       Optional   Optional   Traversal
//! Prism        | Prism      Optional   Prism      Optional   Traversal
//! Optional     | Optional   Optional   Optional   Optional   Traversal
//! Traversal    | Traversal  Traversal  Traversal  Traversal  Traversal
//! ```
//!
//! Each row is an extension trait with a blanket implementation for every
//! optic of that kind, providing one `compose_*` method per column. Mixed
//! entries widen both operands to the joined kind with the `as_*`
//! conversions and use that kind's own composition.
//!
//! The combinators (`prop`, `index`, `some`, `filter`, ...) are compositions
//! with the primitives of [`ixed`](super::ixed), [`at`](super::at),
//! [`choice`](super::choice), [`filtered`](super::filtered) and
//! [`each`](super::each).
//!
//! # Example
//!
//! ```
//! use optica::lens;
//! use optica::optics::{Lens, LensCompose, Optional};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Container {
//!     items: Vec<i32>,
//! }
//!
//! let first_item = lens!(Container, items).index(0);
//!
//! let container = Container { items: vec![1, 2, 3] };
//! assert_eq!(first_item.get_option(&container), Some(1));
//!
//! let empty = Container { items: vec![] };
//! assert_eq!(first_item.set(empty.clone(), 9), empty);
//! ```
//!
//! [`OpticKind::join`]: super::OpticKind::join

use super::at::{at_key, MapAt};
use super::choice::{left, right, some, LeftPrism, RightPrism, SomePrism};
use super::each::{from_traversable, Each};
use super::filtered::{find_first, from_predicate, FindFirst, PredicatePrism};
use super::iso::{ComposedIso, Iso, IsoAsLens, IsoAsOptional, IsoAsPrism, IsoAsTraversal};
use super::ixed::{index, key, MapIx, VecIx};
use super::lens::{ComposedLens, Lens, LensAsOptional, LensAsTraversal, ZippedLens};
use super::optional::{ComposedOptional, Optional, OptionalAsTraversal};
use super::prism::{ComposedPrism, Prism, PrismAsOptional, PrismAsTraversal};
use super::traversal::{ComposedTraversal, Traversal};
use crate::typeclass::{Traversable, VecBrand};

// =============================================================================
// Iso row
// =============================================================================

/// Composition of an Iso with every optic kind.
pub trait IsoCompose<S, A>: Iso<S, A> + Sized {
    /// Iso ∘ Iso = Iso.
    fn compose_iso<B, I>(self, other: I) -> ComposedIso<Self, I, A>
    where
        I: Iso<A, B>,
    {
        ComposedIso::new(self, other)
    }

    /// Iso ∘ Lens = Lens.
    fn compose_lens<B, L>(self, other: L) -> ComposedLens<IsoAsLens<Self>, L, A>
    where
        L: Lens<A, B>,
    {
        ComposedLens::new(self.as_lens(), other)
    }

    /// Iso ∘ Prism = Prism.
    fn compose_prism<B, P>(self, other: P) -> ComposedPrism<IsoAsPrism<Self>, P, A>
    where
        P: Prism<A, B>,
    {
        ComposedPrism::new(self.as_prism(), other)
    }

    /// Iso ∘ Optional = Optional.
    fn compose_optional<B, O>(self, other: O) -> ComposedOptional<IsoAsOptional<Self>, O, A>
    where
        O: Optional<A, B>,
    {
        ComposedOptional::new(self.as_optional(), other)
    }

    /// Iso ∘ Traversal = Traversal.
    fn compose_traversal<B, T>(self, other: T) -> ComposedTraversal<IsoAsTraversal<Self>, T, A>
    where
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(self.as_traversal(), other)
    }
}

impl<S, A, I> IsoCompose<S, A> for I where I: Iso<S, A> {}

// =============================================================================
// Lens row
// =============================================================================

/// Composition of a Lens with every optic kind, and the Lens combinators.
pub trait LensCompose<S, A>: Lens<S, A> + Sized {
    /// Lens ∘ Iso = Lens.
    fn compose_iso<B, I>(self, other: I) -> ComposedLens<Self, IsoAsLens<I>, A>
    where
        I: Iso<A, B>,
    {
        ComposedLens::new(self, other.as_lens())
    }

    /// Lens ∘ Lens = Lens.
    fn compose_lens<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }

    /// Lens ∘ Prism = Optional.
    fn compose_prism<B, P>(
        self,
        other: P,
    ) -> ComposedOptional<LensAsOptional<Self>, PrismAsOptional<P>, A>
    where
        P: Prism<A, B>,
    {
        ComposedOptional::new(self.as_optional(), other.as_optional())
    }

    /// Lens ∘ Optional = Optional.
    fn compose_optional<B, O>(self, other: O) -> ComposedOptional<LensAsOptional<Self>, O, A>
    where
        O: Optional<A, B>,
    {
        ComposedOptional::new(self.as_optional(), other)
    }

    /// Lens ∘ Traversal = Traversal.
    fn compose_traversal<B, T>(self, other: T) -> ComposedTraversal<LensAsTraversal<Self>, T, A>
    where
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(self.as_traversal(), other)
    }

    /// Focuses on a field of the focus, given the field's lens.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::lens;
    /// use optica::optics::{lens_identity, Lens, LensCompose};
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Record { one: i32 }
    ///
    /// let one = lens_identity::<Record>().prop(lens!(Record, one));
    /// assert_eq!(one.get(&Record { one: 1 }), 1);
    /// assert_eq!(one.set(Record { one: 1 }, 2), Record { one: 2 });
    /// ```
    fn prop<B, L>(self, field: L) -> ComposedLens<Self, L, A>
    where
        L: Lens<A, B>,
    {
        self.compose_lens(field)
    }

    /// Focuses on two fields of the focus at once, as a pair.
    fn props<B, C, L1, L2>(self, first: L1, second: L2) -> ComposedLens<Self, ZippedLens<L1, L2>, A>
    where
        L1: Lens<A, B>,
        L2: Lens<A, C>,
    {
        self.compose_lens(first.zip(second))
    }

    /// Focuses on the element at `position` of a `Vec` focus.
    fn index<B>(self, position: usize) -> ComposedOptional<LensAsOptional<Self>, VecIx<B>, A>
    where
        VecIx<B>: Optional<A, B>,
    {
        self.compose_optional(index(position))
    }

    /// Focuses on the existing entry at `name` of a map focus.
    fn key<B>(self, name: impl Into<String>) -> ComposedOptional<LensAsOptional<Self>, MapIx<B>, A>
    where
        MapIx<B>: Optional<A, B>,
    {
        self.compose_optional(key(name))
    }

    /// Focuses on the optional entry at `name` of a map focus.
    fn at_key<B>(self, name: impl Into<String>) -> ComposedLens<Self, MapAt<B>, A>
    where
        MapAt<B>: Lens<A, Option<B>>,
    {
        self.compose_lens(at_key(name))
    }

    /// Keeps the focus only when it satisfies `predicate`.
    fn filter<P>(
        self,
        predicate: P,
    ) -> ComposedOptional<LensAsOptional<Self>, PrismAsOptional<PredicatePrism<A, P>>, A>
    where
        P: Fn(&A) -> bool,
        A: Clone,
    {
        self.compose_prism(from_predicate(predicate))
    }

    /// Focuses inside an `Option` focus.
    fn some<B>(self) -> ComposedOptional<LensAsOptional<Self>, PrismAsOptional<SomePrism<B>>, A>
    where
        SomePrism<B>: Prism<A, B>,
    {
        self.compose_prism(some())
    }

    /// Focuses on the `Ok` side of a `Result` focus.
    fn right<B, E>(
        self,
    ) -> ComposedOptional<LensAsOptional<Self>, PrismAsOptional<RightPrism<B, E>>, A>
    where
        RightPrism<B, E>: Prism<A, B>,
    {
        self.compose_prism(right())
    }

    /// Focuses on the `Err` side of a `Result` focus.
    fn left<E, B>(
        self,
    ) -> ComposedOptional<LensAsOptional<Self>, PrismAsOptional<LeftPrism<E, B>>, A>
    where
        LeftPrism<E, B>: Prism<A, B>,
    {
        self.compose_prism(left())
    }

    /// Focuses on every element of a focus of traversable brand `T`.
    fn traverse_with<T, B>(self) -> ComposedTraversal<LensAsTraversal<Self>, Each<T>, A>
    where
        T: Traversable,
        Each<T>: Traversal<A, B>,
    {
        self.compose_traversal(from_traversable::<T>())
    }

    /// Focuses on every element of a `Vec` focus.
    fn each<B>(self) -> ComposedTraversal<LensAsTraversal<Self>, Each<VecBrand>, A>
    where
        Each<VecBrand>: Traversal<A, B>,
    {
        self.traverse_with::<VecBrand, B>()
    }

    /// Focuses on the first element of a `Vec` focus satisfying `predicate`.
    fn find_first<B, P>(
        self,
        predicate: P,
    ) -> ComposedOptional<LensAsOptional<Self>, FindFirst<B, P>, A>
    where
        P: Fn(&B) -> bool,
        FindFirst<B, P>: Optional<A, B>,
    {
        self.compose_optional(find_first(predicate))
    }
}

impl<S, A, L> LensCompose<S, A> for L where L: Lens<S, A> {}

// =============================================================================
// Prism row
// =============================================================================

/// Composition of a Prism with every optic kind, and the Prism combinators.
pub trait PrismCompose<S, A>: Prism<S, A> + Sized {
    /// Prism ∘ Iso = Prism.
    fn compose_iso<B, I>(self, other: I) -> ComposedPrism<Self, IsoAsPrism<I>, A>
    where
        I: Iso<A, B>,
    {
        ComposedPrism::new(self, other.as_prism())
    }

    /// Prism ∘ Lens = Optional.
    fn compose_lens<B, L>(
        self,
        other: L,
    ) -> ComposedOptional<PrismAsOptional<Self>, LensAsOptional<L>, A>
    where
        L: Lens<A, B>,
    {
        ComposedOptional::new(self.as_optional(), other.as_optional())
    }

    /// Prism ∘ Prism = Prism.
    fn compose_prism<B, P>(self, other: P) -> ComposedPrism<Self, P, A>
    where
        P: Prism<A, B>,
    {
        ComposedPrism::new(self, other)
    }

    /// Prism ∘ Optional = Optional.
    fn compose_optional<B, O>(self, other: O) -> ComposedOptional<PrismAsOptional<Self>, O, A>
    where
        O: Optional<A, B>,
    {
        ComposedOptional::new(self.as_optional(), other)
    }

    /// Prism ∘ Traversal = Traversal.
    fn compose_traversal<B, T>(self, other: T) -> ComposedTraversal<PrismAsTraversal<Self>, T, A>
    where
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(self.as_traversal(), other)
    }

    /// Focuses on a field of the focus, given the field's lens.
    fn prop<B, L>(self, field: L) -> ComposedOptional<PrismAsOptional<Self>, LensAsOptional<L>, A>
    where
        L: Lens<A, B>,
    {
        self.compose_lens(field)
    }

    /// Focuses on two fields of the focus at once, as a pair.
    fn props<B, C, L1, L2>(
        self,
        first: L1,
        second: L2,
    ) -> ComposedOptional<PrismAsOptional<Self>, LensAsOptional<ZippedLens<L1, L2>>, A>
    where
        L1: Lens<A, B>,
        L2: Lens<A, C>,
    {
        self.compose_lens(first.zip(second))
    }

    /// Focuses on the element at `position` of a `Vec` focus.
    fn index<B>(self, position: usize) -> ComposedOptional<PrismAsOptional<Self>, VecIx<B>, A>
    where
        VecIx<B>: Optional<A, B>,
    {
        self.compose_optional(index(position))
    }

    /// Focuses on the existing entry at `name` of a map focus.
    fn key<B>(self, name: impl Into<String>) -> ComposedOptional<PrismAsOptional<Self>, MapIx<B>, A>
    where
        MapIx<B>: Optional<A, B>,
    {
        self.compose_optional(key(name))
    }

    /// Focuses on the optional entry at `name` of a map focus.
    fn at_key<B>(
        self,
        name: impl Into<String>,
    ) -> ComposedOptional<PrismAsOptional<Self>, LensAsOptional<MapAt<B>>, A>
    where
        MapAt<B>: Lens<A, Option<B>>,
    {
        self.compose_lens(at_key(name))
    }

    /// Keeps the focus only when it satisfies `predicate`.
    fn filter<P>(self, predicate: P) -> ComposedPrism<Self, PredicatePrism<A, P>, A>
    where
        P: Fn(&A) -> bool,
        A: Clone,
    {
        self.compose_prism(from_predicate(predicate))
    }

    /// Focuses inside an `Option` focus.
    fn some<B>(self) -> ComposedPrism<Self, SomePrism<B>, A>
    where
        SomePrism<B>: Prism<A, B>,
    {
        self.compose_prism(some())
    }

    /// Focuses on the `Ok` side of a `Result` focus.
    fn right<B, E>(self) -> ComposedPrism<Self, RightPrism<B, E>, A>
    where
        RightPrism<B, E>: Prism<A, B>,
    {
        self.compose_prism(right())
    }

    /// Focuses on the `Err` side of a `Result` focus.
    fn left<E, B>(self) -> ComposedPrism<Self, LeftPrism<E, B>, A>
    where
        LeftPrism<E, B>: Prism<A, B>,
    {
        self.compose_prism(left())
    }

    /// Focuses on every element of a focus of traversable brand `T`.
    fn traverse_with<T, B>(self) -> ComposedTraversal<PrismAsTraversal<Self>, Each<T>, A>
    where
        T: Traversable,
        Each<T>: Traversal<A, B>,
    {
        self.compose_traversal(from_traversable::<T>())
    }

    /// Focuses on every element of a `Vec` focus.
    fn each<B>(self) -> ComposedTraversal<PrismAsTraversal<Self>, Each<VecBrand>, A>
    where
        Each<VecBrand>: Traversal<A, B>,
    {
        self.traverse_with::<VecBrand, B>()
    }

    /// Focuses on the first element of a `Vec` focus satisfying `predicate`.
    fn find_first<B, P>(
        self,
        predicate: P,
    ) -> ComposedOptional<PrismAsOptional<Self>, FindFirst<B, P>, A>
    where
        P: Fn(&B) -> bool,
        FindFirst<B, P>: Optional<A, B>,
    {
        self.compose_optional(find_first(predicate))
    }
}

impl<S, A, P> PrismCompose<S, A> for P where P: Prism<S, A> {}

// =============================================================================
// Optional row
// =============================================================================

/// Composition of an Optional with every optic kind, and the Optional
/// combinators.
pub trait OptionalCompose<S, A>: Optional<S, A> + Sized {
    /// Optional ∘ Iso = Optional.
    fn compose_iso<B, I>(self, other: I) -> ComposedOptional<Self, IsoAsOptional<I>, A>
    where
        I: Iso<A, B>,
    {
        ComposedOptional::new(self, other.as_optional())
    }

    /// Optional ∘ Lens = Optional.
    fn compose_lens<B, L>(self, other: L) -> ComposedOptional<Self, LensAsOptional<L>, A>
    where
        L: Lens<A, B>,
    {
        ComposedOptional::new(self, other.as_optional())
    }

    /// Optional ∘ Prism = Optional.
    fn compose_prism<B, P>(self, other: P) -> ComposedOptional<Self, PrismAsOptional<P>, A>
    where
        P: Prism<A, B>,
    {
        ComposedOptional::new(self, other.as_optional())
    }

    /// Optional ∘ Optional = Optional.
    fn compose_optional<B, O>(self, other: O) -> ComposedOptional<Self, O, A>
    where
        O: Optional<A, B>,
    {
        ComposedOptional::new(self, other)
    }

    /// Optional ∘ Traversal = Traversal.
    fn compose_traversal<B, T>(self, other: T) -> ComposedTraversal<OptionalAsTraversal<Self>, T, A>
    where
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(self.as_traversal(), other)
    }

    /// Focuses on a field of the focus, given the field's lens.
    fn prop<B, L>(self, field: L) -> ComposedOptional<Self, LensAsOptional<L>, A>
    where
        L: Lens<A, B>,
    {
        self.compose_lens(field)
    }

    /// Focuses on two fields of the focus at once, as a pair.
    fn props<B, C, L1, L2>(
        self,
        first: L1,
        second: L2,
    ) -> ComposedOptional<Self, LensAsOptional<ZippedLens<L1, L2>>, A>
    where
        L1: Lens<A, B>,
        L2: Lens<A, C>,
    {
        self.compose_lens(first.zip(second))
    }

    /// Focuses on the element at `position` of a `Vec` focus.
    fn index<B>(self, position: usize) -> ComposedOptional<Self, VecIx<B>, A>
    where
        VecIx<B>: Optional<A, B>,
    {
        self.compose_optional(index(position))
    }

    /// Focuses on the existing entry at `name` of a map focus.
    fn key<B>(self, name: impl Into<String>) -> ComposedOptional<Self, MapIx<B>, A>
    where
        MapIx<B>: Optional<A, B>,
    {
        self.compose_optional(key(name))
    }

    /// Focuses on the optional entry at `name` of a map focus.
    fn at_key<B>(
        self,
        name: impl Into<String>,
    ) -> ComposedOptional<Self, LensAsOptional<MapAt<B>>, A>
    where
        MapAt<B>: Lens<A, Option<B>>,
    {
        self.compose_lens(at_key(name))
    }

    /// Keeps the focus only when it satisfies `predicate`.
    fn filter<P>(
        self,
        predicate: P,
    ) -> ComposedOptional<Self, PrismAsOptional<PredicatePrism<A, P>>, A>
    where
        P: Fn(&A) -> bool,
        A: Clone,
    {
        self.compose_prism(from_predicate(predicate))
    }

    /// Focuses inside an `Option` focus.
    fn some<B>(self) -> ComposedOptional<Self, PrismAsOptional<SomePrism<B>>, A>
    where
        SomePrism<B>: Prism<A, B>,
    {
        self.compose_prism(some())
    }

    /// Focuses on the `Ok` side of a `Result` focus.
    fn right<B, E>(self) -> ComposedOptional<Self, PrismAsOptional<RightPrism<B, E>>, A>
    where
        RightPrism<B, E>: Prism<A, B>,
    {
        self.compose_prism(right())
    }

    /// Focuses on the `Err` side of a `Result` focus.
    fn left<E, B>(self) -> ComposedOptional<Self, PrismAsOptional<LeftPrism<E, B>>, A>
    where
        LeftPrism<E, B>: Prism<A, B>,
    {
        self.compose_prism(left())
    }

    /// Focuses on every element of a focus of traversable brand `T`.
    fn traverse_with<T, B>(self) -> ComposedTraversal<OptionalAsTraversal<Self>, Each<T>, A>
    where
        T: Traversable,
        Each<T>: Traversal<A, B>,
    {
        self.compose_traversal(from_traversable::<T>())
    }

    /// Focuses on every element of a `Vec` focus.
    fn each<B>(self) -> ComposedTraversal<OptionalAsTraversal<Self>, Each<VecBrand>, A>
    where
        Each<VecBrand>: Traversal<A, B>,
    {
        self.traverse_with::<VecBrand, B>()
    }

    /// Focuses on the first element of a `Vec` focus satisfying `predicate`.
    fn find_first<B, P>(self, predicate: P) -> ComposedOptional<Self, FindFirst<B, P>, A>
    where
        P: Fn(&B) -> bool,
        FindFirst<B, P>: Optional<A, B>,
    {
        self.compose_optional(find_first(predicate))
    }
}

impl<S, A, O> OptionalCompose<S, A> for O where O: Optional<S, A> {}

// =============================================================================
// Traversal row
// =============================================================================

/// Composition of a Traversal with every optic kind, and the Traversal
/// combinators.
pub trait TraversalCompose<S, A>: Traversal<S, A> + Sized {
    /// Traversal ∘ Iso = Traversal.
    fn compose_iso<B, I>(self, other: I) -> ComposedTraversal<Self, IsoAsTraversal<I>, A>
    where
        I: Iso<A, B>,
    {
        ComposedTraversal::new(self, other.as_traversal())
    }

    /// Traversal ∘ Lens = Traversal.
    fn compose_lens<B, L>(self, other: L) -> ComposedTraversal<Self, LensAsTraversal<L>, A>
    where
        L: Lens<A, B>,
    {
        ComposedTraversal::new(self, other.as_traversal())
    }

    /// Traversal ∘ Prism = Traversal.
    fn compose_prism<B, P>(self, other: P) -> ComposedTraversal<Self, PrismAsTraversal<P>, A>
    where
        P: Prism<A, B>,
    {
        ComposedTraversal::new(self, other.as_traversal())
    }

    /// Traversal ∘ Optional = Traversal.
    fn compose_optional<B, O>(self, other: O) -> ComposedTraversal<Self, OptionalAsTraversal<O>, A>
    where
        O: Optional<A, B>,
    {
        ComposedTraversal::new(self, other.as_traversal())
    }

    /// Traversal ∘ Traversal = Traversal.
    fn compose_traversal<B, T>(self, other: T) -> ComposedTraversal<Self, T, A>
    where
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(self, other)
    }

    /// Focuses on a field of every focus, given the field's lens.
    fn prop<B, L>(self, field: L) -> ComposedTraversal<Self, LensAsTraversal<L>, A>
    where
        L: Lens<A, B>,
    {
        self.compose_lens(field)
    }

    /// Focuses on two fields of every focus at once, as a pair.
    fn props<B, C, L1, L2>(
        self,
        first: L1,
        second: L2,
    ) -> ComposedTraversal<Self, LensAsTraversal<ZippedLens<L1, L2>>, A>
    where
        L1: Lens<A, B>,
        L2: Lens<A, C>,
    {
        self.compose_lens(first.zip(second))
    }

    /// Focuses on the element at `position` of every `Vec` focus.
    fn index<B>(self, position: usize) -> ComposedTraversal<Self, OptionalAsTraversal<VecIx<B>>, A>
    where
        VecIx<B>: Optional<A, B>,
    {
        self.compose_optional(index(position))
    }

    /// Focuses on the existing entry at `name` of every map focus.
    fn key<B>(
        self,
        name: impl Into<String>,
    ) -> ComposedTraversal<Self, OptionalAsTraversal<MapIx<B>>, A>
    where
        MapIx<B>: Optional<A, B>,
    {
        self.compose_optional(key(name))
    }

    /// Focuses on the optional entry at `name` of every map focus.
    fn at_key<B>(
        self,
        name: impl Into<String>,
    ) -> ComposedTraversal<Self, LensAsTraversal<MapAt<B>>, A>
    where
        MapAt<B>: Lens<A, Option<B>>,
    {
        self.compose_lens(at_key(name))
    }

    /// Keeps only the foci satisfying `predicate`.
    fn filter<P>(
        self,
        predicate: P,
    ) -> ComposedTraversal<Self, PrismAsTraversal<PredicatePrism<A, P>>, A>
    where
        P: Fn(&A) -> bool,
        A: Clone,
    {
        self.compose_prism(from_predicate(predicate))
    }

    /// Focuses inside every `Option` focus.
    fn some<B>(self) -> ComposedTraversal<Self, PrismAsTraversal<SomePrism<B>>, A>
    where
        SomePrism<B>: Prism<A, B>,
    {
        self.compose_prism(some())
    }

    /// Focuses on the `Ok` side of every `Result` focus.
    fn right<B, E>(self) -> ComposedTraversal<Self, PrismAsTraversal<RightPrism<B, E>>, A>
    where
        RightPrism<B, E>: Prism<A, B>,
    {
        self.compose_prism(right())
    }

    /// Focuses on the `Err` side of every `Result` focus.
    fn left<E, B>(self) -> ComposedTraversal<Self, PrismAsTraversal<LeftPrism<E, B>>, A>
    where
        LeftPrism<E, B>: Prism<A, B>,
    {
        self.compose_prism(left())
    }

    /// Focuses on every element of every focus of traversable brand `T`.
    fn traverse_with<T, B>(self) -> ComposedTraversal<Self, Each<T>, A>
    where
        T: Traversable,
        Each<T>: Traversal<A, B>,
    {
        self.compose_traversal(from_traversable::<T>())
    }

    /// Focuses on every element of every `Vec` focus.
    fn each<B>(self) -> ComposedTraversal<Self, Each<VecBrand>, A>
    where
        Each<VecBrand>: Traversal<A, B>,
    {
        self.traverse_with::<VecBrand, B>()
    }

    /// Focuses on the first element satisfying `predicate` of every `Vec` focus.
    fn find_first<B, P>(
        self,
        predicate: P,
    ) -> ComposedTraversal<Self, OptionalAsTraversal<FindFirst<B, P>>, A>
    where
        P: Fn(&B) -> bool,
        FindFirst<B, P>: Optional<A, B>,
    {
        self.compose_optional(find_first(predicate))
    }
}

impl<S, A, T> TraversalCompose<S, A> for T where T: Traversal<S, A> {}
