//! Derive macros generating optica optics.
//!
//! - [`Lenses`]: one lens per named struct field
//! - [`Prisms`]: one prism per enum variant
//!
//! Generated optics are owned: getters clone the focus out of the source, so
//! every focused field or variant payload must be `Clone`.
//!
//! # Example
//!
//! ```rust,ignore
//! use optica::optics::{Lens, LensCompose, Prism};
//! use optica::{Lenses, Prisms};
//!
//! #[derive(Clone, Debug, PartialEq, Lenses)]
//! struct Server {
//!     ports: Vec<u16>,
//! }
//!
//! #[derive(Clone, Debug, PartialEq, Prisms)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! // Server::ports_lens() -> impl Lens<Server, Vec<u16>>
//! let first_port = Server::ports_lens().index(0);
//!
//! // Shape::rectangle_prism() -> impl Prism<Shape, (f64, f64)>
//! assert_eq!(
//!     Shape::rectangle_prism().get_option(&Shape::Rectangle(3.0, 4.0)),
//!     Some((3.0, 4.0))
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;
mod prisms;

use proc_macro::TokenStream;

/// Generates a `{field}_lens()` constructor for every named field.
///
/// # Requirements
///
/// - The struct must have named fields
/// - Every field type must implement `Clone`
///
/// # Generated Code
///
/// For each field `foo: T`:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> impl ::optica::optics::Lens<Self, T> + Clone { ... }
/// }
/// ```
///
/// # Example
///
/// ```rust,ignore
/// use optica::optics::Lens;
/// use optica::Lenses;
///
/// #[derive(Clone, Debug, PartialEq, Lenses)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let person = Person { name: "Ada".to_string(), age: 36 };
/// assert_eq!(Person::name_lens().get(&person), "Ada");
///
/// let older = Person::age_lens().modify(person, |age| age + 1);
/// assert_eq!(older.age, 37);
/// ```
///
/// Generic structs work the same way, with the lens constructor called on
/// the concrete type: `Container::<i32>::value_lens()`.
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}

/// Generates a `{variant_snake_case}_prism()` constructor for every variant.
///
/// # Variant Shapes
///
/// - **Unit** (`Empty`): focus `()`
/// - **Single-field tuple** (`Circle(f64)`): focus `f64`
/// - **Multi-field tuple** (`Rectangle(f64, f64)`): focus `(f64, f64)`
/// - **Struct** (`Click { x: i32, y: i32 }`): focus `(i32, i32)` in field
///   declaration order
///
/// # Example
///
/// ```rust,ignore
/// use optica::optics::Prism;
/// use optica::Prisms;
///
/// #[derive(Clone, Debug, PartialEq, Prisms)]
/// enum Event {
///     KeyPress(char),
///     Click { x: i32, y: i32 },
///     Quit,
/// }
///
/// assert_eq!(Event::key_press_prism().get_option(&Event::KeyPress('q')), Some('q'));
/// assert_eq!(Event::click_prism().reverse_get((1, 2)), Event::Click { x: 1, y: 2 });
/// assert_eq!(Event::quit_prism().get_option(&Event::KeyPress('q')), None);
/// ```
#[proc_macro_derive(Prisms)]
pub fn derive_prisms(input: TokenStream) -> TokenStream {
    prisms::derive_prisms_impl(input)
}
