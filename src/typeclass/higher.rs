//! Type-constructor brands through Generic Associated Types.
//!
//! Rust cannot abstract over `Option<_>` or `Result<_, E>` as type
//! constructors directly. Instead, every type constructor is represented by a
//! zero-sized *brand* type whose generic associated type `WithType<T>` applies
//! the constructor to `T`.
//!
//! Type classes ([`Functor`](super::Functor), [`Applicative`](super::Applicative),
//! [`Traversable`](super::Traversable)) are then implemented on the brand, and
//! their operations are associated functions rather than methods. This keeps
//! `F::WithType<A>` and `F::WithType<B>` related through the same `F`, which is
//! what an effectful traversal needs.
//!
//! # Example
//!
//! ```rust
//! use optica::typeclass::{OptionBrand, TypeConstructor};
//!
//! fn empty<F: TypeConstructor, T>() -> F::WithType<T>
//! where
//!     F::WithType<T>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Option<String> = empty::<OptionBrand, String>();
//! assert_eq!(none, None);
//! ```

use std::marker::PhantomData;

/// A brand standing for a type constructor.
///
/// # Associated Types
///
/// - `WithType<T>`: the type constructor applied to `T`.
pub trait TypeConstructor {
    /// The type constructor applied to `T`.
    ///
    /// For [`OptionBrand`], `WithType<i32>` is `Option<i32>`.
    type WithType<T>;
}

/// Brand for [`Option`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionBrand;

impl TypeConstructor for OptionBrand {
    type WithType<T> = Option<T>;
}

/// Brand for [`Result`] with a fixed error type `E`.
///
/// Its [`Applicative`](super::Applicative) instance short-circuits on the first
/// error. See [`ValidationBrand`](super::ValidationBrand) for the accumulating
/// variant.
#[derive(Debug)]
pub struct ResultBrand<E>(PhantomData<E>);

impl<E> TypeConstructor for ResultBrand<E> {
    type WithType<T> = Result<T, E>;
}

/// Brand for [`Vec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VecBrand;

impl TypeConstructor for VecBrand {
    type WithType<T> = Vec<T>;
}
