//! Identity optics and other structural building blocks.
//!
//! Each optic kind has an identity optic focusing on the whole source. They
//! are the units of composition:
//!
//! ```text
//! lens_identity().compose(lens) == lens
//! lens.compose(lens_identity()) == lens
//! ```
//!
//! # Examples
//!
//! ```
//! use optica::optics::{iso_swap, lens_identity, Iso, Lens};
//!
//! assert_eq!(lens_identity().get(&5), 5);
//! assert_eq!(iso_swap().get(&(1, "one")), ("one", 1));
//! ```

use std::marker::PhantomData;

use crate::optics::{Iso, Lens, Optional, Prism, Traversal};
use crate::typeclass::Applicative;

/// Identity iso.
pub struct IsoIdentity<S>(PhantomData<fn(S) -> S>);
/// Identity lens.
pub struct LensIdentity<S>(PhantomData<fn(S) -> S>);
/// Identity prism.
pub struct PrismIdentity<S>(PhantomData<fn(S) -> S>);
/// Identity optional.
pub struct OptionalIdentity<S>(PhantomData<fn(S) -> S>);
/// Identity traversal.
pub struct TraversalIdentity<S>(PhantomData<fn(S) -> S>);

macro_rules! identity_optic_impls {
    ($($optic:ident),+) => {
        $(
            impl<S> Clone for $optic<S> {
                fn clone(&self) -> Self {
                    Self(PhantomData)
                }
            }

            impl<S> Default for $optic<S> {
                fn default() -> Self {
                    Self(PhantomData)
                }
            }

            impl<S> std::fmt::Debug for $optic<S> {
                fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    formatter.write_str(stringify!($optic))
                }
            }
        )+
    };
}

identity_optic_impls!(
    IsoIdentity,
    LensIdentity,
    PrismIdentity,
    OptionalIdentity,
    TraversalIdentity
);

impl<S: Clone> Iso<S, S> for IsoIdentity<S> {
    fn get(&self, source: &S) -> S {
        source.clone()
    }

    fn reverse_get(&self, value: S) -> S {
        value
    }
}

impl<S: Clone> Lens<S, S> for LensIdentity<S> {
    fn get(&self, source: &S) -> S {
        source.clone()
    }

    fn set(&self, _source: S, value: S) -> S {
        value
    }
}

impl<S: Clone> Prism<S, S> for PrismIdentity<S> {
    fn get_option(&self, source: &S) -> Option<S> {
        Some(source.clone())
    }

    fn reverse_get(&self, value: S) -> S {
        value
    }
}

impl<S: Clone> Optional<S, S> for OptionalIdentity<S> {
    fn get_option(&self, source: &S) -> Option<S> {
        Some(source.clone())
    }

    fn set(&self, _source: S, value: S) -> S {
        value
    }
}

impl<S> Traversal<S, S> for TraversalIdentity<S> {
    fn traverse<F>(
        &self,
        source: S,
        function: &mut dyn FnMut(S) -> F::WithType<S>,
    ) -> F::WithType<S>
    where
        F: Applicative,
    {
        function(source)
    }
}

/// Returns the identity iso.
#[must_use]
pub const fn iso_identity<S>() -> IsoIdentity<S> {
    IsoIdentity(PhantomData)
}

/// Returns the identity lens.
#[must_use]
pub const fn lens_identity<S>() -> LensIdentity<S> {
    LensIdentity(PhantomData)
}

/// Returns the identity prism.
#[must_use]
pub const fn prism_identity<S>() -> PrismIdentity<S> {
    PrismIdentity(PhantomData)
}

/// Returns the identity optional.
#[must_use]
pub const fn optional_identity<S>() -> OptionalIdentity<S> {
    OptionalIdentity(PhantomData)
}

/// Returns the identity traversal.
#[must_use]
pub const fn traversal_identity<S>() -> TraversalIdentity<S> {
    TraversalIdentity(PhantomData)
}

/// Iso swapping the components of a pair.
pub struct SwapIso<A, B> {
    _marker: PhantomData<fn(A, B)>,
}

impl<A, B> Clone for SwapIso<A, B> {
    fn clone(&self) -> Self {
        iso_swap()
    }
}

impl<A, B> std::fmt::Debug for SwapIso<A, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("SwapIso")
    }
}

impl<A: Clone, B: Clone> Iso<(A, B), (B, A)> for SwapIso<A, B> {
    fn get(&self, (first, second): &(A, B)) -> (B, A) {
        (second.clone(), first.clone())
    }

    fn reverse_get(&self, (second, first): (B, A)) -> (A, B) {
        (first, second)
    }
}

/// Returns the iso swapping the components of a pair.
#[must_use]
pub const fn iso_swap<A, B>() -> SwapIso<A, B> {
    SwapIso {
        _marker: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lens;

    #[derive(Clone, PartialEq, Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn identity_lens_is_left_and_right_unit() {
        let point = Point { x: 1, y: 2 };

        let left = lens_identity().compose(lens!(Point, x));
        let right = lens!(Point, x).compose(lens_identity());

        assert_eq!(left.get(&point), 1);
        assert_eq!(right.get(&point), 1);
        assert_eq!(left.set(point.clone(), 5), right.set(point, 5));
    }

    #[test]
    fn identity_optics_focus_on_whole() {
        assert_eq!(iso_identity().reverse_get(3), 3);
        assert_eq!(prism_identity().get_option(&"x"), Some("x"));
        assert_eq!(optional_identity().set(1, 2), 2);
        assert_eq!(traversal_identity().get_all(&7), vec![7]);
    }

    #[test]
    fn swap_is_its_own_inverse() {
        let swapped = iso_swap().get(&(1, 'a'));
        assert_eq!(swapped, ('a', 1));
        assert_eq!(iso_swap().get(&swapped), (1, 'a'));
        assert_eq!(iso_swap::<i32, char>().reverse_get(('a', 1)), (1, 'a'));
    }
}
