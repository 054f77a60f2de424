//! Guards: typed predicates over JSON.
//!
//! A [`Guard<A>`] answers whether a JSON value has the shape of an `A`
//! without building one. Guards support the same combinators as decoders,
//! and [`from_guard`](super::from_guard) turns one into a decoder.
//!
//! # Examples
//!
//! ```rust
//! use optica::decoder::guard::{array, number, nullable, struct_};
//! use serde_json::json;
//!
//! let readings = struct_((("values", array(nullable(number()))),));
//!
//! assert!(readings.is(&json!({ "values": [1, null, 3] })));
//! assert!(!readings.is(&json!({ "values": [1, "2"] })));
//! ```

use std::cell::OnceCell;
use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::rc::Rc;

use serde_json::Value;

use super::schemable::{Components, FieldSource, Position, Props, Represent, Schemable};

/// A predicate accepting the JSON shapes of an `A`.
pub struct Guard<A> {
    check: Rc<dyn Fn(Option<&Value>) -> bool>,
    _marker: PhantomData<fn() -> A>,
}

impl<A> Clone for Guard<A> {
    fn clone(&self) -> Self {
        Self {
            check: Rc::clone(&self.check),
            _marker: PhantomData,
        }
    }
}

impl<A> std::fmt::Debug for Guard<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Guard").finish_non_exhaustive()
    }
}

impl<A> Guard<A> {
    /// Creates a guard from a predicate; `None` stands for absent input.
    pub fn new(check: impl Fn(Option<&Value>) -> bool + 'static) -> Self {
        Self {
            check: Rc::new(check),
            _marker: PhantomData,
        }
    }

    /// Whether `value` is accepted.
    #[must_use]
    pub fn is(&self, value: &Value) -> bool {
        (self.check)(Some(value))
    }

    /// Whether the possibly absent `input` is accepted.
    #[must_use]
    pub fn check(&self, input: Option<&Value>) -> bool {
        (self.check)(input)
    }

    /// The same predicate, for the type a decoder maps `A` into.
    #[must_use]
    pub fn retype<B>(self) -> Guard<B> {
        Guard {
            check: self.check,
            _marker: PhantomData,
        }
    }
}

impl<A: 'static> Guard<A> {
    /// Additionally requires `predicate` on present input.
    #[must_use]
    pub fn refine(self, predicate: impl Fn(&Value) -> bool + 'static) -> Self {
        Self::new(move |input| self.check(input) && input.is_some_and(&predicate))
    }

    /// Accepts what either guard accepts.
    #[must_use]
    pub fn alt(self, other: Self) -> Self {
        Self::new(move |input| self.check(input) || other.check(input))
    }
}

/// Accepts any present value.
#[must_use]
pub fn unknown() -> Guard<Value> {
    Guard::new(|input| input.is_some())
}

/// Accepts a JSON string.
#[must_use]
pub fn string() -> Guard<String> {
    Guard::new(|input| input.is_some_and(Value::is_string))
}

/// Accepts a JSON number.
#[must_use]
pub fn number() -> Guard<f64> {
    Guard::new(|input| input.is_some_and(Value::is_number))
}

/// Accepts a JSON boolean.
#[must_use]
pub fn boolean() -> Guard<bool> {
    Guard::new(|input| input.is_some_and(Value::is_boolean))
}

/// Accepts exactly `expected`.
#[must_use]
pub fn literal(expected: Value) -> Guard<Value> {
    Guard::new(move |input| input == Some(&expected))
}

/// Accepts `null`, or what `inner` accepts.
#[must_use]
pub fn nullable<A: 'static>(inner: Guard<A>) -> Guard<Option<A>> {
    Guard::new(move |input| input.is_some_and(Value::is_null) || inner.check(input))
}

/// Accepts an absent value, or what `inner` accepts.
#[must_use]
pub fn undefinable<A: 'static>(inner: Guard<A>) -> Guard<Option<A>> {
    Guard::new(move |input| input.is_none() || inner.check(input))
}

/// Accepts an array whose items `item` all accepts.
#[must_use]
pub fn array<A: 'static>(item: Guard<A>) -> Guard<Vec<A>> {
    Guard::new(move |input| match input {
        Some(Value::Array(items)) => items.iter().all(|value| item.is(value)),
        _ => false,
    })
}

/// Accepts an object whose values `value` all accepts.
#[must_use]
pub fn record<A: 'static>(value: Guard<A>) -> Guard<BTreeMap<String, A>> {
    Guard::new(move |input| match input {
        Some(Value::Object(object)) => object.values().all(|entry| value.is(entry)),
        _ => false,
    })
}

/// Accepts what both guards accept.
#[must_use]
pub fn intersect<A: 'static, B: 'static>(left: Guard<A>, right: Guard<B>) -> Guard<(A, B)> {
    Guard::new(move |input| left.check(input) && right.check(input))
}

/// Accepts what any member accepts.
#[must_use]
pub fn union<A: 'static>(members: Vec<Guard<A>>) -> Guard<A> {
    Guard::new(move |input| members.iter().any(|member| member.check(input)))
}

/// A guard defined in terms of itself, forced on first use.
#[must_use]
pub fn lazy<A: 'static>(id: &'static str, definition: impl Fn() -> Guard<A> + 'static) -> Guard<A> {
    let forced: OnceCell<Guard<A>> = OnceCell::new();
    Guard::new(move |input| {
        forced
            .get_or_init(|| {
                tracing::trace!(id, "forcing lazy guard");
                definition()
            })
            .check(input)
    })
}

/// Fields checked inside an object or an array.
pub struct GuardFields<A> {
    check: Rc<dyn Fn(FieldSource<'_>) -> bool>,
    _marker: PhantomData<fn() -> A>,
}

impl<A> Clone for GuardFields<A> {
    fn clone(&self) -> Self {
        Self {
            check: Rc::clone(&self.check),
            _marker: PhantomData,
        }
    }
}

impl<A> std::fmt::Debug for GuardFields<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("GuardFields").finish_non_exhaustive()
    }
}

impl<A> GuardFields<A> {
    fn new(check: impl Fn(FieldSource<'_>) -> bool + 'static) -> Self {
        Self {
            check: Rc::new(check),
            _marker: PhantomData,
        }
    }
}

/// Interpreter brand producing [`Guard`]s.
#[derive(Debug, Clone, Copy)]
pub enum GuardBrand {}

impl<A: 'static> Represent<GuardBrand> for Guard<A> {
    type Target = A;

    fn into_repr(self) -> Self {
        self
    }
}

impl Schemable for GuardBrand {
    type Repr<A: 'static> = Guard<A>;
    type Fields<A: 'static> = GuardFields<A>;

    fn unknown() -> Guard<Value> {
        unknown()
    }

    fn string() -> Guard<String> {
        string()
    }

    fn number() -> Guard<f64> {
        number()
    }

    fn boolean() -> Guard<bool> {
        boolean()
    }

    fn literal(value: Value) -> Guard<Value> {
        literal(value)
    }

    fn nullable<A: 'static>(inner: Guard<A>) -> Guard<Option<A>> {
        nullable(inner)
    }

    fn undefinable<A: 'static>(inner: Guard<A>) -> Guard<Option<A>> {
        undefinable(inner)
    }

    fn array<A: 'static>(item: Guard<A>) -> Guard<Vec<A>> {
        array(item)
    }

    fn record<A: 'static>(value: Guard<A>) -> Guard<BTreeMap<String, A>> {
        record(value)
    }

    fn required<A: 'static>(position: Position, repr: Guard<A>) -> GuardFields<A> {
        GuardFields::new(move |source| repr.check(source.lookup(position)))
    }

    fn optional<A: 'static>(position: Position, repr: Guard<A>) -> GuardFields<Option<A>> {
        GuardFields::new(move |source| source.lookup(position).is_none_or(|value| repr.is(value)))
    }

    fn zip<A: 'static, B: 'static>(
        first: GuardFields<A>,
        second: GuardFields<B>,
    ) -> GuardFields<(A, B)> {
        GuardFields::new(move |source| (first.check)(source) && (second.check)(source))
    }

    fn map_fields<A: 'static, B: 'static>(
        fields: GuardFields<A>,
        _function: impl Fn(A) -> B + 'static,
    ) -> GuardFields<B> {
        GuardFields {
            check: fields.check,
            _marker: PhantomData,
        }
    }

    fn structure<A: 'static>(fields: GuardFields<A>) -> Guard<A> {
        Guard::new(move |input| match input {
            Some(Value::Object(object)) => (fields.check)(FieldSource::Object(object)),
            _ => false,
        })
    }

    fn positional<A: 'static>(fields: GuardFields<A>) -> Guard<A> {
        Guard::new(move |input| match input {
            Some(Value::Array(items)) => (fields.check)(FieldSource::Array(items)),
            _ => false,
        })
    }

    fn intersect<A: 'static, B: 'static>(left: Guard<A>, right: Guard<B>) -> Guard<(A, B)> {
        intersect(left, right)
    }

    fn union<A: 'static>(members: Vec<Guard<A>>) -> Guard<A> {
        union(members)
    }

    fn lazy<A: 'static>(id: &'static str, definition: impl Fn() -> Guard<A> + 'static) -> Guard<A> {
        lazy(id, definition)
    }

    fn map<A: 'static, B: 'static>(
        repr: Guard<A>,
        _function: impl Fn(A) -> B + 'static,
    ) -> Guard<B> {
        repr.retype()
    }
}

/// Accepts an object whose listed properties are all accepted.
#[must_use]
pub fn struct_<P: Props<GuardBrand>>(props: P) -> Guard<P::Output> {
    GuardBrand::struct_(props)
}

/// Accepts an object whose listed properties are accepted when present.
#[must_use]
pub fn partial<P: Props<GuardBrand>>(props: P) -> Guard<P::PartialOutput> {
    GuardBrand::partial(props)
}

/// Accepts an array with one guard per position.
#[must_use]
pub fn tuple<C: Components<GuardBrand>>(components: C) -> Guard<C::Output> {
    GuardBrand::tuple(components)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({ "a": "x" }), true)]
    #[case(json!({ "a": "x", "b": 1 }), true)]
    #[case(json!({ "a": 1 }), false)]
    #[case(json!({ "b": 1 }), false)]
    #[case(json!(["x"]), false)]
    fn struct_guard(#[case] input: Value, #[case] accepted: bool) {
        assert_eq!(struct_((("a", string()),)).is(&input), accepted);
    }

    #[rstest]
    #[case(json!({}), true)]
    #[case(json!({ "a": "x" }), true)]
    #[case(json!({ "a": null }), false)]
    fn partial_guard(#[case] input: Value, #[case] accepted: bool) {
        assert_eq!(partial((("a", string()),)).is(&input), accepted);
    }

    #[test]
    fn tuple_guard_checks_each_position() {
        let pair = tuple((number(), boolean()));
        assert!(pair.is(&json!([1, true])));
        assert!(!pair.is(&json!([1])));
        assert!(!pair.is(&json!([true, 1])));
    }

    #[test]
    fn nullable_and_undefinable() {
        assert!(nullable(number()).is(&json!(null)));
        assert!(!nullable(number()).check(None));
        assert!(undefinable(number()).check(None));
        assert!(!undefinable(number()).is(&json!(null)));
    }

    #[test]
    fn refine_and_alt() {
        let short = string().refine(|value| value.as_str().is_some_and(|text| text.len() < 3));
        assert!(short.is(&json!("ab")));
        assert!(!short.is(&json!("abcd")));

        let either = short.alt(number().retype());
        assert!(either.is(&json!(5)));
    }

    fn maybe_list<A: 'static>(item: Guard<A>) -> Guard<Option<Vec<A>>> {
        undefinable(array(item)).alt(nullable(array(union(Vec::new()))))
    }

    fn non_empty_both<A: 'static, B: 'static>(left: Guard<A>, right: Guard<B>) -> Guard<(A, B)> {
        intersect(left, right)
            .refine(|value| value.as_object().is_some_and(|object| !object.is_empty()))
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some(json!(["a"])), true)]
    #[case(Some(json!(null)), true)]
    #[case(Some(json!([])), true)]
    #[case(Some(json!([1])), false)]
    #[case(Some(json!("a")), false)]
    fn combinators_over_generic_items(#[case] input: Option<Value>, #[case] accepted: bool) {
        assert_eq!(maybe_list(string()).check(input.as_ref()), accepted);
    }

    #[test]
    fn intersect_over_generic_sides() {
        let numbers = non_empty_both(record(number()), record(unknown()));
        assert!(numbers.is(&json!({ "a": 1 })));
        assert!(!numbers.is(&json!({ "a": "x" })));
        assert!(!numbers.is(&json!({})));
    }

    #[test]
    fn lazy_guard_handles_recursion() {
        fn nested() -> Guard<Vec<Value>> {
            lazy("Nested", || array(nested()).retype())
        }
        assert!(nested().is(&json!([[], [[]]])));
        assert!(!nested().is(&json!([[1]])));
    }

    #[test]
    fn literal_and_union() {
        let mode = union(vec![literal(json!("on")), literal(json!("off"))]);
        assert!(mode.is(&json!("off")));
        assert!(!mode.is(&json!("auto")));
        assert!(record(boolean()).is(&json!({ "a": true })));
        assert!(unknown().is(&json!(null)));
        assert!(!unknown().check(None));
    }
}
