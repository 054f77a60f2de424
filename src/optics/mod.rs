//! Optics for immutable data manipulation.
//!
//! An optic is a first-class accessor: it focuses on some part of a source
//! value and supports reading the focus and producing an updated copy of the
//! source. Optics compose, so a deep update is written as a chain of small
//! accessors instead of nested struct rebuilding.
//!
//! # Optic kinds
//!
//! ```text
//!             Iso
//!           /     \
//!        Lens     Prism
//!           \     /
//!          Optional
//!              |
//!          Traversal
//! ```
//!
//! - [`Iso`]: lossless conversion between two types
//! - [`Lens`]: exactly one focus, always present
//! - [`Prism`]: zero or one focus, and the focus alone rebuilds the source
//! - [`Optional`]: zero or one focus
//! - [`Traversal`]: zero or more foci, visited in order
//!
//! Every optic can be viewed as any kind below it (`as_lens`, `as_prism`,
//! `as_optional`, `as_traversal`), and composing two optics yields the join
//! of their kinds (see [`OpticKind::join`] and the table in the
//! [`IsoCompose`] family of traits).
//!
//! # Example
//!
//! ```
//! use optica::lens;
//! use optica::optics::{
//!     lens_identity, Lens, LensCompose, Optional, OptionalCompose, Traversal, TraversalCompose,
//! };
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, addresses: Vec<Address> }
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     addresses: vec![Address { street: "Main St".to_string(), city: "Tokyo".to_string() }],
//! };
//!
//! let first_street = lens!(Person, addresses).index(0).prop(lens!(Address, street));
//! assert_eq!(first_street.get_option(&person), Some("Main St".to_string()));
//!
//! let cities = lens_identity::<Person>()
//!     .prop(lens!(Person, addresses))
//!     .each()
//!     .prop(lens!(Address, city));
//! let moved = cities.set(person, "Osaka".to_string());
//! assert_eq!(moved.addresses[0].city, "Osaka");
//! ```
//!
//! # Laws
//!
//! Lens:
//!
//! ```text
//! lens.set(source, lens.get(&source)) == source
//! lens.get(&lens.set(source, value)) == value
//! lens.set(lens.set(source, a), b) == lens.set(source, b)
//! ```
//!
//! Prism:
//!
//! ```text
//! prism.get_option(&prism.reverse_get(value)) == Some(value)
//! prism.get_option(&source).map(|a| prism.reverse_get(a)).unwrap_or(source) == source
//! ```
//!
//! Optional:
//!
//! ```text
//! optional.get_option(&source).map(|a| optional.set(source, a)).unwrap_or(source) == source
//! optional.get_option(&optional.set(source, value)) == optional.get_option(&source).map(|_| value)
//! ```
//!
//! Iso:
//!
//! ```text
//! iso.reverse_get(iso.get(&source)) == source
//! iso.get(&iso.reverse_get(value)) == value
//! ```
//!
//! Traversal:
//!
//! ```text
//! traversal.modify(source, |a| a) == source
//! traversal.modify(traversal.modify(source, f), g) == traversal.modify(source, |a| g(f(a)))
//! ```

mod at;
mod choice;
mod each;
mod filtered;
mod iso;
mod ixed;
mod kind;
mod lens;
mod optics_compose;
mod optional;
mod prism;
mod standard_optics;
mod traversal;

pub use kind::OpticKind;

pub use iso::ComposedIso;
pub use iso::FunctionIso;
pub use iso::Iso;
pub use iso::IsoAsLens;
pub use iso::IsoAsOptional;
pub use iso::IsoAsPrism;
pub use iso::IsoAsTraversal;
pub use iso::ReversedIso;

pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::Lens;
pub use lens::LensAsOptional;
pub use lens::LensAsTraversal;
pub use lens::ZippedLens;

pub use prism::ComposedPrism;
pub use prism::FunctionPrism;
pub use prism::Prism;
pub use prism::PrismAsOptional;
pub use prism::PrismAsTraversal;

pub use optional::ComposedOptional;
pub use optional::FunctionOptional;
pub use optional::Optional;
pub use optional::OptionalAsTraversal;

pub use traversal::ComposedTraversal;
pub use traversal::Traversal;

pub use optics_compose::IsoCompose;
pub use optics_compose::LensCompose;
pub use optics_compose::OptionalCompose;
pub use optics_compose::PrismCompose;
pub use optics_compose::TraversalCompose;

pub use standard_optics::iso_identity;
pub use standard_optics::iso_swap;
pub use standard_optics::lens_identity;
pub use standard_optics::optional_identity;
pub use standard_optics::prism_identity;
pub use standard_optics::traversal_identity;
pub use standard_optics::IsoIdentity;
pub use standard_optics::LensIdentity;
pub use standard_optics::OptionalIdentity;
pub use standard_optics::PrismIdentity;
pub use standard_optics::SwapIso;
pub use standard_optics::TraversalIdentity;

pub use ixed::index;
pub use ixed::key;
pub use ixed::Ixed;
pub use ixed::MapIx;
pub use ixed::VecIx;

pub use at::at_key;
pub use at::MapAt;

pub use choice::left;
pub use choice::right;
pub use choice::some;
pub use choice::LeftPrism;
pub use choice::RightPrism;
pub use choice::SomePrism;

pub use filtered::find_first;
pub use filtered::from_predicate;
pub use filtered::FindFirst;
pub use filtered::PredicatePrism;

pub use each::each;
pub use each::from_traversable;
pub use each::Each;
