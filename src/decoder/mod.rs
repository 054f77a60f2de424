//! Decoding untyped JSON, with structured errors.
//!
//! - [`FreeSemigroup`] and [`DecodeError`]: the error substrate. Decoders
//!   never stop at the first problem; every failure is kept with the path
//!   that led to it and can be rendered with [`draw`].
//! - [`Decoder`]: JSON to typed values. Its combinators live at this
//!   module's root ([`string`], [`struct_`], [`union`], ...).
//! - [`Guard`]: shape predicates over JSON, with the same combinators in
//!   [`guard`].
//! - [`JsonSchema`]: JSON Schema documents.
//! - [`Schemable`] and [`Schema`]: one definition, interpreted as any of the
//!   above, with [`SchemaCache`] to reuse interpretations.
//!
//! # Example
//!
//! ```rust
//! use optica::decoder::{draw, number, partial, string, struct_};
//! use serde_json::json;
//!
//! let user = struct_((("name", string()),)).intersect(partial((("age", number()),)));
//!
//! assert_eq!(
//!     user.decode(&json!({ "name": "Ada", "age": 36 })),
//!     Ok((("Ada".to_string(),), (Some(36.0),)))
//! );
//!
//! let errors = user.decode(&json!({ "age": "old" })).unwrap_err();
//! assert_eq!(
//!     draw(&errors),
//!     [
//!         "cannot decode struct",
//!         "└─ required property \"name\"",
//!         "   └─ cannot decode undefined, should be string",
//!         "cannot decode struct",
//!         "└─ optional property \"age\"",
//!         "   └─ cannot decode \"old\", should be number",
//!     ]
//!     .join("\n")
//! );
//! ```

mod decode;
mod decode_error;
mod error;
mod free_semigroup;
pub mod guard;
mod json_schema;
mod schema;
mod schemable;

pub use decode::array;
pub use decode::boolean;
pub use decode::extract;
pub use decode::failure;
pub use decode::from_guard;
pub use decode::intersect;
pub use decode::lazy;
pub use decode::literal;
pub use decode::nullable;
pub use decode::number;
pub use decode::partial;
pub use decode::record;
pub use decode::string;
pub use decode::struct_;
pub use decode::success;
pub use decode::tuple;
pub use decode::undefinable;
pub use decode::union;
pub use decode::unknown;
pub use decode::Decoder;
pub use decode::DecoderBrand;
pub use decode::DecoderFields;

pub use decode_error::draw;
pub use decode_error::draw_tree;
pub use decode_error::to_forest;
pub use decode_error::DecodeError;
pub use decode_error::DecodeErrors;
pub use decode_error::FieldKind;
pub use decode_error::Tree;

pub use error::DecodeFailure;

pub use free_semigroup::FreeSemigroup;
pub use free_semigroup::Iter;

pub use guard::Guard;
pub use guard::GuardBrand;
pub use guard::GuardFields;

pub use json_schema::JsonSchema;
pub use json_schema::JsonSchemaBrand;
pub use json_schema::JsonSchemaFields;

pub use schema::Schema;
pub use schema::SchemaCache;

pub use schemable::Components;
pub use schemable::Position;
pub use schemable::Props;
pub use schemable::Represent;
pub use schemable::Schemable;
