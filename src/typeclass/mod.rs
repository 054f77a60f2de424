//! Type class traits consumed by the optics and the decoders.
//!
//! This module provides the small capability layer the rest of the crate is
//! written against:
//!
//! - [`TypeConstructor`]: brands standing for type constructors
//! - [`Functor`]: mapping inside a brand
//! - [`Applicative`]: lifting and combining independent effects
//! - [`Traversable`]: rebuilding a structure inside an effect
//! - [`Semigroup`] / [`Monoid`]: associative combination with identity
//!
//! ## Brands
//!
//! Rust has no higher-kinded types. Each type constructor is represented by a
//! zero-sized brand whose generic associated type `WithType<T>` applies the
//! constructor. The brands shipped here are:
//!
//! - [`OptionBrand`], [`ResultBrand`], [`VecBrand`]
//! - [`Identity`]: no effect, used for pure rebuilds
//! - [`Const`]: accumulate a monoidal summary, used for folds
//! - [`ValidationBrand`]: `Result` that accumulates every error
//!
//! # Examples
//!
//! ```rust
//! use optica::typeclass::{Applicative, OptionBrand, Semigroup, Monoid};
//!
//! assert_eq!(OptionBrand::map2(Some(1), Some(2), |a, b| a + b), Some(3));
//! assert_eq!(String::empty().combine("x".to_string()), "x");
//! ```

mod applicative;
mod constant;
mod functor;
mod higher;
mod identity;
mod monoid;
mod semigroup;
mod traversable;
mod validation;
mod wrappers;

pub use applicative::Applicative;
pub use constant::Const;
pub use functor::Functor;
pub use higher::{OptionBrand, ResultBrand, TypeConstructor, VecBrand};
pub use identity::Identity;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use traversable::Traversable;
pub use validation::ValidationBrand;
pub use wrappers::{All, Any, Product, Sum};
