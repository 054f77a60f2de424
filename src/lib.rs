//! # optica
//!
//! Composable optics and schema-driven JSON decoding for Rust.
//!
//! ## Overview
//!
//! - **Type Classes**: brands with a generic associated type stand in for
//!   higher-kinded types; `Functor`, `Applicative`, `Traversable`,
//!   `Semigroup` and `Monoid` over them.
//! - **Optics**: Iso, Lens, Prism, Optional and Traversal, a capability
//!   lattice over their kinds, and a total composition table.
//! - **Decoders**: decoders, guards and JSON Schemas interpreted from a
//!   single schema definition, failing with positional errors kept in a free
//!   semigroup.
//!
//! ## Feature Flags
//!
//! - `typeclass`: type class traits and brands
//! - `optics`: optics (needs `typeclass`)
//! - `schema`: decoders, guards, JSON Schema (needs `typeclass`)
//! - `derive`: `#[derive(Lenses, Prisms)]`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use optica::prelude::*;
//! use optica::lens;
//! use serde_json::json;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Config {
//!     ports: Vec<f64>,
//! }
//!
//! let ports = optica::decoder::array(optica::decoder::number());
//! let ports = optica::decoder::struct_((("ports", ports),)).map(|(ports,)| Config { ports });
//! let config = ports.decode(&json!({ "ports": [80, 443] })).unwrap();
//!
//! let first_port = lens!(Config, ports).index(0);
//! assert_eq!(first_port.set(config, 8080.0).ports, vec![8080.0, 443.0]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the traits and types most code needs. Decoder and guard
/// combinators stay under [`decoder`] and [`decoder::guard`], where their
/// short names do not collide.
///
/// # Usage
///
/// ```rust
/// use optica::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "schema")]
    pub use crate::decoder::{
        draw, DecodeError, DecodeErrors, DecodeFailure, Decoder, DecoderBrand, FieldKind,
        FreeSemigroup, Guard, GuardBrand, JsonSchema, JsonSchemaBrand, Schema, SchemaCache,
        Schemable,
    };

    #[cfg(feature = "derive")]
    pub use optica_derive::{Lenses, Prisms};
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "schema")]
pub mod decoder;

#[cfg(feature = "derive")]
pub use optica_derive::{Lenses, Prisms};
