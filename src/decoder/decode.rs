//! Decoders from untyped JSON to typed values.
//!
//! A [`Decoder<A>`] reads an optional [`Value`] (absent input is `None`,
//! rendered as `undefined` in errors) and either produces an `A` or the
//! complete, positional list of reasons it could not.
//!
//! Struct, tuple, array and record decoders decode every member and report
//! every failure instead of stopping at the first one.
//!
//! # Examples
//!
//! ```rust
//! use optica::decoder::{draw, number, string, struct_};
//! use serde_json::json;
//!
//! let point = struct_((("x", number()), ("label", string())));
//!
//! assert_eq!(point.decode(&json!({ "x": 1, "label": "a" })), Ok((1.0, "a".to_string())));
//!
//! let errors = point.decode(&json!({ "x": "1" })).unwrap_err();
//! assert_eq!(
//!     draw(&errors),
//!     [
//!         "cannot decode struct",
//!         "├─ required property \"x\"",
//!         "│  └─ cannot decode \"1\", should be number",
//!         "└─ required property \"label\"",
//!         "   └─ cannot decode undefined, should be string",
//!     ]
//!     .join("\n")
//! );
//! ```

use std::cell::OnceCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde_json::Value;
use static_assertions::assert_not_impl_any;

use super::schemable::{Components, FieldSource, Position, Props, Represent, Schemable};
use super::{DecodeError, DecodeErrors, DecodeFailure, FieldKind, FreeSemigroup, Guard};
use crate::typeclass::{Applicative, ValidationBrand};

type Validated<A> = Result<A, DecodeErrors>;

/// A decoder producing an `A` from JSON.
pub struct Decoder<A> {
    run: Rc<dyn Fn(Option<&Value>) -> Validated<A>>,
}

assert_not_impl_any!(Decoder<i32>: Send, Sync);

impl<A> Clone for Decoder<A> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<A> std::fmt::Debug for Decoder<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Decoder").finish_non_exhaustive()
    }
}

impl<A: 'static> Decoder<A> {
    /// Creates a decoder from a decoding function.
    ///
    /// The function receives `None` when the input is absent.
    pub fn new(run: impl Fn(Option<&Value>) -> Validated<A> + 'static) -> Self {
        Self { run: Rc::new(run) }
    }

    /// Decodes a present value.
    ///
    /// # Errors
    ///
    /// Returns every reason the value does not match.
    pub fn decode(&self, value: &Value) -> Validated<A> {
        self.decode_option(Some(value))
    }

    /// Decodes a value that may be absent.
    ///
    /// # Errors
    ///
    /// Returns every reason the input does not match.
    pub fn decode_option(&self, input: Option<&Value>) -> Validated<A> {
        let result = (self.run)(input);
        if let Err(errors) = &result {
            tracing::debug!(failures = errors.len(), "decoding failed");
        }
        result
    }

    fn run(&self, input: Option<&Value>) -> Validated<A> {
        (self.run)(input)
    }

    /// Transforms the decoded value.
    #[must_use]
    pub fn map<B: 'static>(self, function: impl Fn(A) -> B + 'static) -> Decoder<B> {
        Decoder::new(move |input| self.run(input).map(&function))
    }

    /// Rejects decoded values failing `predicate`, expecting `expected`.
    #[must_use]
    pub fn refine(
        self,
        predicate: impl Fn(&A) -> bool + 'static,
        expected: impl Into<String>,
    ) -> Self {
        let expected = expected.into();
        Self::new(move |input| {
            let value = self.run(input)?;
            if predicate(&value) {
                Ok(value)
            } else {
                failure(input, expected.clone())
            }
        })
    }

    /// Continues with a fallible transformation of the decoded value.
    #[must_use]
    pub fn parse<B: 'static>(self, parser: impl Fn(A) -> Validated<B> + 'static) -> Decoder<B> {
        Decoder::new(move |input| self.run(input).and_then(&parser))
    }

    /// Wraps failures under a message built from the input and the errors.
    #[must_use]
    pub fn with_message(
        self,
        message: impl Fn(Option<&Value>, &DecodeErrors) -> String + 'static,
    ) -> Self {
        Self::new(move |input| {
            self.run(input)
                .map_err(|errors| DecodeError::wrap(message(input, &errors), errors))
        })
    }

    /// Tries `other` when this decoder fails.
    ///
    /// When both fail, the failures are reported as members 0 and 1.
    #[must_use]
    pub fn alt(self, other: Self) -> Self {
        union(vec![self, other])
    }

    /// Decodes the same input with both decoders, keeping both results.
    #[must_use]
    pub fn intersect<B: 'static>(self, other: Decoder<B>) -> Decoder<(A, B)> {
        intersect(self, other)
    }
}

impl Decoder<Value> {
    /// Feeds the JSON produced by this decoder into `next`.
    #[must_use]
    pub fn compose<B: 'static>(self, next: Decoder<B>) -> Decoder<B> {
        Decoder::new(move |input| {
            let value = self.run(input)?;
            next.run(Some(&value))
        })
    }
}

/// A successful decode.
///
/// # Errors
///
/// Never fails; the `Result` matches what decoding functions return.
pub const fn success<A>(value: A) -> Validated<A> {
    Ok(value)
}

/// A failed decode of `actual`, which should have been `expected`.
///
/// # Errors
///
/// Always fails.
pub fn failure<A>(actual: Option<&Value>, expected: impl Into<String>) -> Validated<A> {
    Err(DecodeError::leaf(actual.cloned(), expected.into()))
}

/// Turns decode errors into a [`DecodeFailure`].
///
/// # Errors
///
/// Fails exactly when `result` does.
pub fn extract<A>(result: Validated<A>) -> Result<A, DecodeFailure> {
    result.map_err(DecodeFailure::new)
}

/// A decoder accepting the JSON values `guard` accepts.
#[must_use]
pub fn from_guard<A: 'static>(guard: Guard<A>, expected: impl Into<String>) -> Decoder<Value> {
    let expected = expected.into();
    Decoder::new(move |input| match input {
        Some(value) if guard.check(input) => Ok(value.clone()),
        _ => failure(input, expected.clone()),
    })
}

/// Accepts any present value.
#[must_use]
pub fn unknown() -> Decoder<Value> {
    Decoder::new(|input| input.cloned().map_or_else(|| failure(None, "unknown"), Ok))
}

/// Accepts a JSON string.
#[must_use]
pub fn string() -> Decoder<String> {
    Decoder::new(|input| match input {
        Some(Value::String(text)) => Ok(text.clone()),
        _ => failure(input, "string"),
    })
}

/// Accepts a JSON number.
#[must_use]
pub fn number() -> Decoder<f64> {
    Decoder::new(|input| input.and_then(Value::as_f64).map_or_else(|| failure(input, "number"), Ok))
}

/// Accepts a JSON boolean.
#[must_use]
pub fn boolean() -> Decoder<bool> {
    Decoder::new(|input| {
        input
            .and_then(Value::as_bool)
            .map_or_else(|| failure(input, "boolean"), Ok)
    })
}

/// Accepts exactly `expected`.
#[must_use]
pub fn literal(expected: Value) -> Decoder<Value> {
    Decoder::new(move |input| match input {
        Some(value) if *value == expected => Ok(expected.clone()),
        _ => failure(input, expected.to_string()),
    })
}

/// Accepts `null` as `None`, or what `inner` accepts.
#[must_use]
pub fn nullable<A: 'static>(inner: Decoder<A>) -> Decoder<Option<A>> {
    Decoder::new(move |input| match input {
        Some(Value::Null) => Ok(None),
        _ => inner.run(input).map(Some).map_err(|errors| {
            FreeSemigroup::concat(
                DecodeError::member(0, DecodeError::leaf(input.cloned(), "null".to_string())),
                DecodeError::member(1, errors),
            )
        }),
    })
}

/// Accepts an absent value as `None`, or what `inner` accepts.
#[must_use]
pub fn undefinable<A: 'static>(inner: Decoder<A>) -> Decoder<Option<A>> {
    Decoder::new(move |input| match input {
        None => Ok(None),
        Some(_) => inner.run(input).map(Some).map_err(|errors| {
            FreeSemigroup::concat(
                DecodeError::member(0, DecodeError::leaf(input.cloned(), "undefined".to_string())),
                DecodeError::member(1, errors),
            )
        }),
    })
}

fn accumulate<A>(results: impl IntoIterator<Item = Validated<A>>) -> Validated<Vec<A>> {
    results
        .into_iter()
        .fold(ValidationBrand::pure(Vec::new()), |accumulator, result| {
            ValidationBrand::map2(accumulator, result, |mut values, value| {
                values.push(value);
                values
            })
        })
}

/// Accepts an array whose items all decode with `item`.
#[must_use]
pub fn array<A: 'static>(item: Decoder<A>) -> Decoder<Vec<A>> {
    Decoder::new(move |input| match input {
        Some(Value::Array(items)) => accumulate(items.iter().enumerate().map(|(index, value)| {
            item.run(Some(value))
                .map_err(|errors| DecodeError::index(index, FieldKind::Optional, errors))
        })),
        _ => failure(input, "Array<unknown>"),
    })
}

/// Accepts an object whose values all decode with `value`.
#[must_use]
pub fn record<A: 'static>(value: Decoder<A>) -> Decoder<BTreeMap<String, A>> {
    Decoder::new(move |input| match input {
        Some(Value::Object(object)) => {
            let decoded = accumulate(object.iter().map(|(key, entry)| {
                value
                    .run(Some(entry))
                    .map(|decoded| (key.clone(), decoded))
                    .map_err(|errors| DecodeError::key(key.clone(), FieldKind::Optional, errors))
            }));
            decoded.map(|entries| entries.into_iter().collect())
        }
        _ => failure(input, "Record<string, unknown>"),
    })
}

/// Fields read out of an object or an array.
pub struct DecoderFields<A> {
    run: Rc<dyn Fn(FieldSource<'_>) -> Validated<A>>,
}

impl<A> Clone for DecoderFields<A> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<A> std::fmt::Debug for DecoderFields<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("DecoderFields").finish_non_exhaustive()
    }
}

impl<A: 'static> DecoderFields<A> {
    fn new(run: impl Fn(FieldSource<'_>) -> Validated<A> + 'static) -> Self {
        Self { run: Rc::new(run) }
    }
}

fn at_position(position: Position, kind: FieldKind, errors: DecodeErrors) -> DecodeErrors {
    match position {
        Position::Key(key) => DecodeError::key(key, kind, errors),
        Position::Index(index) => DecodeError::index(index, kind, errors),
    }
}

fn close<A: 'static>(
    fields: DecoderFields<A>,
    source: impl Fn(&Value) -> Option<FieldSource<'_>> + 'static,
    expected: &'static str,
    message: &'static str,
) -> Decoder<A> {
    Decoder::new(move |input| match input.and_then(&source) {
        Some(container) => (fields.run)(container)
            .map_err(|errors| DecodeError::wrap(message.to_string(), errors)),
        None => failure(input, expected),
    })
}

/// Interpreter brand producing [`Decoder`]s.
#[derive(Debug, Clone, Copy)]
pub enum DecoderBrand {}

impl<A: 'static> Represent<DecoderBrand> for Decoder<A> {
    type Target = A;

    fn into_repr(self) -> Self {
        self
    }
}

impl Schemable for DecoderBrand {
    type Repr<A: 'static> = Decoder<A>;
    type Fields<A: 'static> = DecoderFields<A>;

    fn unknown() -> Decoder<Value> {
        unknown()
    }

    fn string() -> Decoder<String> {
        string()
    }

    fn number() -> Decoder<f64> {
        number()
    }

    fn boolean() -> Decoder<bool> {
        boolean()
    }

    fn literal(value: Value) -> Decoder<Value> {
        literal(value)
    }

    fn nullable<A: 'static>(inner: Decoder<A>) -> Decoder<Option<A>> {
        nullable(inner)
    }

    fn undefinable<A: 'static>(inner: Decoder<A>) -> Decoder<Option<A>> {
        undefinable(inner)
    }

    fn array<A: 'static>(item: Decoder<A>) -> Decoder<Vec<A>> {
        array(item)
    }

    fn record<A: 'static>(value: Decoder<A>) -> Decoder<BTreeMap<String, A>> {
        record(value)
    }

    fn required<A: 'static>(position: Position, repr: Decoder<A>) -> DecoderFields<A> {
        DecoderFields::new(move |source| {
            repr.run(source.lookup(position))
                .map_err(|errors| at_position(position, FieldKind::Required, errors))
        })
    }

    fn optional<A: 'static>(position: Position, repr: Decoder<A>) -> DecoderFields<Option<A>> {
        DecoderFields::new(move |source| match source.lookup(position) {
            None => Ok(None),
            Some(value) => repr
                .run(Some(value))
                .map(Some)
                .map_err(|errors| at_position(position, FieldKind::Optional, errors)),
        })
    }

    fn zip<A: 'static, B: 'static>(
        first: DecoderFields<A>,
        second: DecoderFields<B>,
    ) -> DecoderFields<(A, B)> {
        DecoderFields::new(move |source| {
            ValidationBrand::product((first.run)(source), (second.run)(source))
        })
    }

    fn map_fields<A: 'static, B: 'static>(
        fields: DecoderFields<A>,
        function: impl Fn(A) -> B + 'static,
    ) -> DecoderFields<B> {
        DecoderFields::new(move |source| (fields.run)(source).map(&function))
    }

    fn structure<A: 'static>(fields: DecoderFields<A>) -> Decoder<A> {
        close(
            fields,
            |value| value.as_object().map(FieldSource::Object),
            "Record<string, unknown>",
            "cannot decode struct",
        )
    }

    fn positional<A: 'static>(fields: DecoderFields<A>) -> Decoder<A> {
        close(
            fields,
            |value| value.as_array().map(|items| FieldSource::Array(items)),
            "Array<unknown>",
            "cannot decode tuple",
        )
    }

    fn intersect<A: 'static, B: 'static>(left: Decoder<A>, right: Decoder<B>) -> Decoder<(A, B)> {
        intersect(left, right)
    }

    fn union<A: 'static>(members: Vec<Decoder<A>>) -> Decoder<A> {
        union(members)
    }

    fn lazy<A: 'static>(
        id: &'static str,
        definition: impl Fn() -> Decoder<A> + 'static,
    ) -> Decoder<A> {
        lazy(id, definition)
    }

    fn map<A: 'static, B: 'static>(
        repr: Decoder<A>,
        function: impl Fn(A) -> B + 'static,
    ) -> Decoder<B> {
        repr.map(function)
    }
}

/// Accepts an object with every listed property decoding.
///
/// Every failing property is reported, wrapped once in
/// `cannot decode struct`.
#[must_use]
pub fn struct_<P: Props<DecoderBrand>>(props: P) -> Decoder<P::Output> {
    DecoderBrand::struct_(props)
}

/// Accepts an object whose listed properties decode when present.
#[must_use]
pub fn partial<P: Props<DecoderBrand>>(props: P) -> Decoder<P::PartialOutput> {
    DecoderBrand::partial(props)
}

/// Accepts an array with one decoder per position.
#[must_use]
pub fn tuple<C: Components<DecoderBrand>>(components: C) -> Decoder<C::Output> {
    DecoderBrand::tuple(components)
}

/// Decodes the same input with both decoders; failures of both are kept.
#[must_use]
pub fn intersect<A: 'static, B: 'static>(left: Decoder<A>, right: Decoder<B>) -> Decoder<(A, B)> {
    Decoder::new(move |input| ValidationBrand::product(left.run(input), right.run(input)))
}

/// Tries each member in order and keeps the first success.
///
/// When every member fails, each member's failures are reported under its
/// position.
#[must_use]
pub fn union<A: 'static>(members: Vec<Decoder<A>>) -> Decoder<A> {
    Decoder::new(move |input| {
        let mut failures: Option<DecodeErrors> = None;
        for (index, member) in members.iter().enumerate() {
            match member.run(input) {
                Ok(value) => return Ok(value),
                Err(errors) => {
                    let tagged = DecodeError::member(index, errors);
                    failures = Some(match failures {
                        None => tagged,
                        Some(previous) => FreeSemigroup::concat(previous, tagged),
                    });
                }
            }
        }
        Err(failures.unwrap_or_else(|| DecodeError::leaf(input.cloned(), "never".to_string())))
    })
}

/// A decoder defined in terms of itself.
///
/// `definition` runs on the first decode and its result is kept for the
/// lifetime of this decoder. Failures are reported under `lazy type <id>`.
///
/// # Examples
///
/// ```rust
/// use optica::decoder::{array, lazy, number, struct_, Decoder};
/// use serde_json::json;
///
/// #[derive(Debug, PartialEq)]
/// struct Tree {
///     value: f64,
///     children: Vec<Tree>,
/// }
///
/// fn tree() -> Decoder<Tree> {
///     lazy("Tree", || {
///         struct_((("value", number()), ("children", array(tree()))))
///             .map(|(value, children)| Tree { value, children })
///     })
/// }
///
/// let input = json!({ "value": 1, "children": [{ "value": 2, "children": [] }] });
/// let decoded = tree().decode(&input);
/// assert_eq!(decoded.unwrap().children[0].value, 2.0);
/// ```
#[must_use]
pub fn lazy<A: 'static>(
    id: &'static str,
    definition: impl Fn() -> Decoder<A> + 'static,
) -> Decoder<A> {
    let forced: OnceCell<Decoder<A>> = OnceCell::new();
    Decoder::new(move |input| {
        let decoder = forced.get_or_init(|| {
            tracing::trace!(id, "forcing lazy decoder");
            definition()
        });
        decoder
            .run(input)
            .map_err(|errors| DecodeError::lazy(id, errors))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::draw;
    use rstest::rstest;
    use serde_json::json;
    use std::cell::Cell;

    #[rstest]
    #[case(json!("a"), true)]
    #[case(json!(1), false)]
    #[case(json!(null), false)]
    fn string_accepts_only_strings(#[case] input: Value, #[case] accepted: bool) {
        assert_eq!(string().decode(&input).is_ok(), accepted);
    }

    #[test]
    fn absent_input_draws_as_undefined() {
        let errors = number().decode_option(None).unwrap_err();
        assert_eq!(draw(&errors), "cannot decode undefined, should be number");
    }

    #[test]
    fn literal_expects_json_rendering() {
        let errors = literal(json!("on")).decode(&json!("off")).unwrap_err();
        assert_eq!(draw(&errors), "cannot decode \"off\", should be \"on\"");
    }

    #[test]
    fn nullable_reports_both_members() {
        let errors = nullable(number()).decode(&json!("x")).unwrap_err();
        assert_eq!(
            draw(&errors),
            [
                "member 0",
                "└─ cannot decode \"x\", should be null",
                "member 1",
                "└─ cannot decode \"x\", should be number",
            ]
            .join("\n")
        );
        assert_eq!(nullable(number()).decode(&json!(null)), Ok(None));
    }

    #[test]
    fn undefinable_accepts_absent() {
        assert_eq!(undefinable(string()).decode_option(None), Ok(None));
        assert_eq!(undefinable(string()).decode(&json!("s")), Ok(Some("s".to_string())));
        assert!(undefinable(string()).decode(&json!(null)).is_err());
    }

    #[test]
    fn array_reports_every_bad_index() {
        let errors = array(number()).decode(&json!([1, "a", 3, false])).unwrap_err();
        assert_eq!(
            draw(&errors),
            [
                "optional index 1",
                "└─ cannot decode \"a\", should be number",
                "optional index 3",
                "└─ cannot decode false, should be number",
            ]
            .join("\n")
        );
    }

    #[test]
    fn record_keeps_keys() {
        let decoded = record(boolean()).decode(&json!({ "a": true, "b": false })).unwrap();
        assert_eq!(decoded, BTreeMap::from([("a".to_string(), true), ("b".to_string(), false)]));
        assert_eq!(
            draw(&record(boolean()).decode(&json!([])).unwrap_err()),
            "cannot decode [], should be Record<string, unknown>"
        );
    }

    #[test]
    fn struct_rejects_non_objects() {
        let errors = struct_((("a", number()),)).decode(&json!("nope")).unwrap_err();
        assert_eq!(draw(&errors), "cannot decode \"nope\", should be Record<string, unknown>");
    }

    #[test]
    fn partial_skips_absent_properties() {
        let decoder = partial((("a", number()), ("b", string())));
        assert_eq!(decoder.decode(&json!({ "b": "x" })), Ok((None, Some("x".to_string()))));

        let errors = decoder.decode(&json!({ "a": "1" })).unwrap_err();
        assert_eq!(
            draw(&errors),
            "cannot decode struct\n└─ optional property \"a\"\n   └─ cannot decode \"1\", \
             should be number"
        );
    }

    #[test]
    fn tuple_decodes_by_position() {
        let decoder = tuple((string(), number(), boolean()));
        assert_eq!(decoder.decode(&json!(["a", 1, true])), Ok(("a".to_string(), 1.0, true)));

        let errors = decoder.decode(&json!(["a"])).unwrap_err();
        assert_eq!(
            draw(&errors),
            [
                "cannot decode tuple",
                "├─ required index 1",
                "│  └─ cannot decode undefined, should be number",
                "└─ required index 2",
                "   └─ cannot decode undefined, should be boolean",
            ]
            .join("\n")
        );
    }

    #[test]
    fn union_takes_first_success_and_tags_failures() {
        let decoder = union(vec![number().map(|n| n.to_string()), string()]);
        assert_eq!(decoder.decode(&json!("s")), Ok("s".to_string()));
        assert_eq!(decoder.decode(&json!(2)), Ok("2".to_string()));

        let errors = decoder.decode(&json!(true)).unwrap_err();
        assert_eq!(
            draw(&errors),
            [
                "member 0",
                "└─ cannot decode true, should be number",
                "member 1",
                "└─ cannot decode true, should be string",
            ]
            .join("\n")
        );
    }

    #[test]
    fn empty_union_never_succeeds() {
        let errors = union::<i32>(Vec::new()).decode(&json!(1)).unwrap_err();
        assert_eq!(draw(&errors), "cannot decode 1, should be never");
    }

    #[test]
    fn refine_and_parse() {
        let positive = number().refine(|n| *n > 0.0, "PositiveNumber");
        assert!(positive.decode(&json!(2)).is_ok());
        assert_eq!(
            draw(&positive.decode(&json!(-2)).unwrap_err()),
            "cannot decode -2, should be PositiveNumber"
        );

        let integer = number().parse(|n| {
            if n.fract() == 0.0 {
                success(n as i64)
            } else {
                failure(None, "integer")
            }
        });
        assert_eq!(integer.decode(&json!(3)), Ok(3));
        assert!(integer.decode(&json!(3.5)).is_err());
    }

    #[test]
    fn with_message_wraps_errors() {
        let decoder = number().with_message(|_, _| "expected a count".to_string());
        assert_eq!(
            draw(&decoder.decode(&json!("x")).unwrap_err()),
            "expected a count\n└─ cannot decode \"x\", should be number"
        );
    }

    #[test]
    fn compose_feeds_output_forward() {
        let unwrap_data = struct_((("data", unknown()),)).map(|(data,)| data);
        let count = unwrap_data.compose(number());
        assert_eq!(count.decode(&json!({ "data": 4 })), Ok(4.0));
    }

    #[test]
    fn alt_is_binary_union() {
        let decoder = boolean().alt(literal(json!("yes")).map(|_| true));
        assert_eq!(decoder.decode(&json!("yes")), Ok(true));
        assert_eq!(decoder.decode(&json!(false)), Ok(false));
    }

    #[test]
    fn lazy_forces_definition_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let decoder = lazy("Count", move || {
            counter.set(counter.get() + 1);
            number()
        });

        assert!(decoder.decode(&json!(1)).is_ok());
        assert!(decoder.decode(&json!(2)).is_ok());
        assert_eq!(calls.get(), 1);

        assert_eq!(
            draw(&decoder.decode(&json!("x")).unwrap_err()),
            "lazy type Count\n└─ cannot decode \"x\", should be number"
        );
    }

    #[test]
    fn from_guard_passes_json_through() {
        let decoder = from_guard(crate::decoder::guard::string(), "string");
        assert_eq!(decoder.decode(&json!("a")), Ok(json!("a")));
        assert!(decoder.decode(&json!(1)).is_err());
    }

    #[test]
    fn extract_draws_failure() {
        let failure = extract(boolean().decode(&json!(0))).unwrap_err();
        assert_eq!(failure.message(), "cannot decode 0, should be boolean");
    }
}
