//! One schema definition, many interpretations.
//!
//! A [`Schemable`] is an interpreter brand: it says what a schema *becomes*
//! (`Repr<A>`) and how object or tuple fields are assembled (`Fields<A>`).
//! Writing a definition once, generically over `S: Schemable`, gives a
//! [`Decoder`](super::Decoder), a [`Guard`](super::Guard) and a
//! [`JsonSchema`](super::JsonSchema) from the same source.
//!
//! ```rust
//! use optica::decoder::{DecoderBrand, GuardBrand, Schemable};
//! use serde_json::json;
//!
//! fn person<S: Schemable>() -> S::Repr<(String, Option<f64>)> {
//!     S::struct_((("name", S::string()), ("age", S::undefinable(S::number()))))
//! }
//!
//! let input = json!({ "name": "Ada" });
//! assert_eq!(person::<DecoderBrand>().decode(&input), Ok(("Ada".to_string(), None)));
//! assert!(person::<GuardBrand>().is(&input));
//! ```

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Where a field lives inside its container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    /// An object key.
    Key(&'static str),
    /// An array index.
    Index(usize),
}

/// The container a set of fields is read from.
#[derive(Clone, Copy, Debug)]
pub(crate) enum FieldSource<'a> {
    Object(&'a Map<String, Value>),
    Array(&'a [Value]),
}

impl<'a> FieldSource<'a> {
    pub(crate) fn lookup(self, position: Position) -> Option<&'a Value> {
        match (self, position) {
            (Self::Object(object), Position::Key(key)) => object.get(key),
            (Self::Array(items), Position::Index(index)) => items.get(index),
            _ => None,
        }
    }
}

/// A value that is the representation of some type under interpreter `S`.
///
/// Lets the tuple helpers ([`Props`], [`Components`]) accept plain tuples of
/// representations and recover the represented types.
pub trait Represent<S: Schemable> {
    /// The represented type.
    type Target: 'static;

    /// Returns the representation as `S` sees it.
    fn into_repr(self) -> S::Repr<Self::Target>;
}

/// An interpreter of schema definitions.
pub trait Schemable: Sized + 'static {
    /// What a schema for `A` becomes under this interpreter.
    type Repr<A: 'static>: Clone + 'static + Represent<Self, Target = A>;

    /// A set of fields producing an `A`, before it is closed into an object
    /// or a tuple.
    type Fields<A: 'static>: Clone + 'static;

    /// Accepts any present JSON value.
    fn unknown() -> Self::Repr<Value>;

    /// A JSON string.
    fn string() -> Self::Repr<String>;

    /// A JSON number.
    fn number() -> Self::Repr<f64>;

    /// A JSON boolean.
    fn boolean() -> Self::Repr<bool>;

    /// Exactly `value`.
    fn literal(value: Value) -> Self::Repr<Value>;

    /// `null`, or whatever `inner` accepts.
    fn nullable<A: 'static>(inner: Self::Repr<A>) -> Self::Repr<Option<A>>;

    /// An absent value, or whatever `inner` accepts.
    fn undefinable<A: 'static>(inner: Self::Repr<A>) -> Self::Repr<Option<A>>;

    /// An array whose items all match `item`.
    fn array<A: 'static>(item: Self::Repr<A>) -> Self::Repr<Vec<A>>;

    /// An object whose values all match `value`.
    fn record<A: 'static>(value: Self::Repr<A>) -> Self::Repr<BTreeMap<String, A>>;

    /// A field that must match `repr`, absent counting as a mismatch.
    fn required<A: 'static>(position: Position, repr: Self::Repr<A>) -> Self::Fields<A>;

    /// A field that may be absent, and otherwise must match `repr`.
    fn optional<A: 'static>(position: Position, repr: Self::Repr<A>) -> Self::Fields<Option<A>>;

    /// Both sets of fields.
    fn zip<A: 'static, B: 'static>(
        first: Self::Fields<A>,
        second: Self::Fields<B>,
    ) -> Self::Fields<(A, B)>;

    /// Reshapes what a set of fields produces.
    fn map_fields<A: 'static, B: 'static>(
        fields: Self::Fields<A>,
        function: impl Fn(A) -> B + 'static,
    ) -> Self::Fields<B>;

    /// Closes fields over a JSON object.
    fn structure<A: 'static>(fields: Self::Fields<A>) -> Self::Repr<A>;

    /// Closes fields over a JSON array.
    fn positional<A: 'static>(fields: Self::Fields<A>) -> Self::Repr<A>;

    /// Values matching both `left` and `right`.
    fn intersect<A: 'static, B: 'static>(
        left: Self::Repr<A>,
        right: Self::Repr<B>,
    ) -> Self::Repr<(A, B)>;

    /// Values matching any of `members`, tried in order.
    fn union<A: 'static>(members: Vec<Self::Repr<A>>) -> Self::Repr<A>;

    /// A recursive definition, forced on first use and identified by `id`.
    fn lazy<A: 'static>(
        id: &'static str,
        definition: impl Fn() -> Self::Repr<A> + 'static,
    ) -> Self::Repr<A>;

    /// Transforms the represented value.
    fn map<A: 'static, B: 'static>(
        repr: Self::Repr<A>,
        function: impl Fn(A) -> B + 'static,
    ) -> Self::Repr<B>;

    /// An object with every listed property required.
    fn struct_<P: Props<Self>>(props: P) -> Self::Repr<P::Output> {
        Self::structure(props.into_required())
    }

    /// An object with every listed property optional.
    fn partial<P: Props<Self>>(props: P) -> Self::Repr<P::PartialOutput> {
        Self::structure(props.into_optional())
    }

    /// A fixed-length array with one schema per position.
    fn tuple<C: Components<Self>>(components: C) -> Self::Repr<C::Output> {
        Self::positional(components.into_fields())
    }
}

/// A tuple of `(key, representation)` pairs.
pub trait Props<S: Schemable> {
    /// The tuple of represented types.
    type Output: 'static;
    /// The tuple of represented types, each optional.
    type PartialOutput: 'static;

    /// Every property required.
    fn into_required(self) -> S::Fields<Self::Output>;

    /// Every property optional.
    fn into_optional(self) -> S::Fields<Self::PartialOutput>;
}

/// A tuple of representations, one per array position.
pub trait Components<S: Schemable> {
    /// The tuple of represented types.
    type Output: 'static;

    /// Every position required.
    fn into_fields(self) -> S::Fields<Self::Output>;
}

// `nested_pattern!(a, b, c)` expands to `((a, b), c)`, the shape `zip` builds.
macro_rules! nested_pattern {
    ($first:ident $(, $rest:ident)*) => {
        nested_pattern!(@nest $first $(, $rest)*)
    };
    (@nest $nested:tt) => {
        $nested
    };
    (@nest $nested:tt, $next:ident $(, $rest:ident)*) => {
        nested_pattern!(@nest ($nested, $next) $(, $rest)*)
    };
}

macro_rules! zip_all {
    ($schemable:ident; $first:expr $(, $rest:expr)*; $($value:ident),+) => {{
        let fields = $first;
        $(let fields = $schemable::zip(fields, $rest);)*
        $schemable::map_fields(fields, |nested_pattern!($($value),+)| ($($value,)+))
    }};
}

macro_rules! tuple_schemas {
    ($($index:tt => $repr:ident),+) => {
        paste::paste! {
            impl<S, $($repr),+> Props<S> for ($((&'static str, $repr),)+)
            where
                S: Schemable,
                $($repr: Represent<S>,)+
            {
                type Output = ($($repr::Target,)+);
                type PartialOutput = ($(Option<$repr::Target>,)+);

                fn into_required(self) -> S::Fields<Self::Output> {
                    let ($(([<key_ $index>], [<repr_ $index>]),)+) = self;
                    zip_all!(
                        S;
                        $(S::required(
                            Position::Key([<key_ $index>]),
                            [<repr_ $index>].into_repr()
                        )),+;
                        $([<value_ $index>]),+
                    )
                }

                fn into_optional(self) -> S::Fields<Self::PartialOutput> {
                    let ($(([<key_ $index>], [<repr_ $index>]),)+) = self;
                    zip_all!(
                        S;
                        $(S::optional(
                            Position::Key([<key_ $index>]),
                            [<repr_ $index>].into_repr()
                        )),+;
                        $([<value_ $index>]),+
                    )
                }
            }

            impl<S, $($repr),+> Components<S> for ($($repr,)+)
            where
                S: Schemable,
                $($repr: Represent<S>,)+
            {
                type Output = ($($repr::Target,)+);

                fn into_fields(self) -> S::Fields<Self::Output> {
                    let ($([<repr_ $index>],)+) = self;
                    zip_all!(
                        S;
                        $(S::required(Position::Index($index), [<repr_ $index>].into_repr())),+;
                        $([<value_ $index>]),+
                    )
                }
            }
        }
    };
}

tuple_schemas!(0 => R0);
tuple_schemas!(0 => R0, 1 => R1);
tuple_schemas!(0 => R0, 1 => R1, 2 => R2);
tuple_schemas!(0 => R0, 1 => R1, 2 => R2, 3 => R3);
tuple_schemas!(0 => R0, 1 => R1, 2 => R2, 3 => R3, 4 => R4);
tuple_schemas!(0 => R0, 1 => R1, 2 => R2, 3 => R3, 4 => R4, 5 => R5);
tuple_schemas!(0 => R0, 1 => R1, 2 => R2, 3 => R3, 4 => R4, 5 => R5, 6 => R6);
tuple_schemas!(0 => R0, 1 => R1, 2 => R2, 3 => R3, 4 => R4, 5 => R5, 6 => R6, 7 => R7);
