//! End-to-end decoding tests: error accumulation, drawing, and one schema
//! definition interpreted as a decoder, a guard and a JSON Schema.

use optica::decoder::{
    array, draw, extract, guard, lazy, literal, nullable, number, partial, string, struct_, union,
    DecodeError, Decoder, DecoderBrand, FieldKind, GuardBrand, JsonSchemaBrand, Schema, SchemaCache,
    Schemable,
};
use optica::optics::{Lens, LensCompose, Optional};
use optica::Lenses;
use rstest::rstest;
use serde_json::{json, Value};

#[test]
fn struct_intersect_partial_scenario() {
    let decoder = struct_((("one", number()),)).intersect(partial((("two", string()),)));

    assert_eq!(
        decoder.decode(&json!({ "one": 1, "two": "two" })),
        Ok(((1.0,), (Some("two".to_string()),)))
    );

    let errors = decoder.decode(&json!({ "one": "one" })).unwrap_err();
    assert_eq!(
        draw(&errors),
        [
            "cannot decode struct",
            "└─ required property \"one\"",
            "   └─ cannot decode \"one\", should be number",
        ]
        .join("\n")
    );
}

#[test]
fn struct_reports_every_failing_field() {
    let decoder = struct_((("one", number()), ("two", number())));
    let errors = decoder.decode(&json!({ "one": "x", "two": "y" })).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(
        draw(&errors),
        [
            "cannot decode struct",
            "├─ required property \"one\"",
            "│  └─ cannot decode \"x\", should be number",
            "└─ required property \"two\"",
            "   └─ cannot decode \"y\", should be number",
        ]
        .join("\n")
    );
}

#[test]
fn nested_failures_keep_their_path() {
    let user = struct_((("name", string()), ("age", nullable(number()))));
    let decoder = struct_((("users", array(user)),));
    let errors = decoder
        .decode(&json!({ "users": [{ "name": "Ada", "age": null }, { "name": 7, "age": 1 }] }))
        .unwrap_err();

    assert_eq!(
        draw(&errors),
        [
            "cannot decode struct",
            "└─ required property \"users\"",
            "   └─ optional index 1",
            "      └─ cannot decode struct",
            "         └─ required property \"name\"",
            "            └─ cannot decode 7, should be string",
        ]
        .join("\n")
    );
}

#[derive(Clone, Debug, PartialEq)]
struct Category {
    name: String,
    children: Vec<Category>,
}

fn category() -> Decoder<Category> {
    lazy("Category", || {
        struct_((("name", string()), ("children", array(category()))))
            .map(|(name, children)| Category { name, children })
    })
}

#[test]
fn recursive_decoder_reports_lazy_frames() {
    let decoded = category()
        .decode(&json!({ "name": "root", "children": [{ "name": "leaf", "children": [] }] }))
        .unwrap();
    assert_eq!(decoded.children[0].name, "leaf");

    let errors = category()
        .decode(&json!({ "name": "root", "children": [{ "name": false, "children": [] }] }))
        .unwrap_err();
    assert_eq!(
        draw(&errors),
        [
            "lazy type Category",
            "└─ cannot decode struct",
            "   └─ required property \"children\"",
            "      └─ optional index 0",
            "         └─ lazy type Category",
            "            └─ cannot decode struct",
            "               └─ required property \"name\"",
            "                  └─ cannot decode false, should be string",
        ]
        .join("\n")
    );
}

#[rstest]
#[case(json!("circle"), Ok("circle".to_string()))]
#[case(json!("square"), Ok("square".to_string()))]
fn literal_union_accepts_members(#[case] input: Value, #[case] expected: Result<String, ()>) {
    let kind = union(vec![literal(json!("circle")), literal(json!("square"))])
        .map(|value| value.as_str().map(str::to_string).unwrap_or_default());
    assert_eq!(kind.decode(&input).map_err(|_| ()), expected);
}

#[derive(Clone, Debug, PartialEq, Lenses)]
struct Server {
    host: String,
    ports: Vec<f64>,
}

fn load(input: &Value) -> Result<Server, Box<dyn std::error::Error>> {
    let decoder = struct_((("host", string()), ("ports", array(number()))))
        .map(|(host, ports)| Server { host, ports });
    Ok(extract(decoder.decode(input))?)
}

#[test]
fn decoded_values_feed_optics() {
    let server = load(&json!({ "host": "localhost", "ports": [80, 443] })).unwrap();
    let first_port = Server::ports_lens().index(0);

    assert_eq!(first_port.get_option(&server), Some(80.0));
    assert_eq!(Server::host_lens().get(&server), "localhost");

    let moved = first_port.set(server, 8080.0);
    assert_eq!(moved.ports, vec![8080.0, 443.0]);
}

#[test]
fn decode_failure_propagates_with_question_mark() {
    let failure = load(&json!({ "host": 1, "ports": [] })).unwrap_err();
    assert_eq!(
        failure.to_string(),
        "cannot decode struct\n└─ required property \"host\"\n   └─ cannot decode 1, \
         should be string"
    );
}

struct Person;

impl Schema for Person {
    type Output = (String, Option<f64>, Vec<String>);

    fn define<S: Schemable>() -> S::Repr<Self::Output> {
        let fields = S::struct_((("name", S::string()), ("tags", S::array(S::string()))));
        let extra = S::partial((("age", S::number()),));
        S::map(S::intersect(fields, extra), |((name, tags), (age,))| (name, age, tags))
    }
}

#[rstest]
#[case(json!({ "name": "Ada", "tags": [] }), true)]
#[case(json!({ "name": "Ada", "tags": ["x"], "age": 36 }), true)]
#[case(json!({ "name": "Ada", "tags": ["x"], "age": "36" }), false)]
#[case(json!({ "tags": [] }), false)]
#[case(json!([]), false)]
fn guard_and_decoder_agree(#[case] input: Value, #[case] accepted: bool) {
    let mut decoders = SchemaCache::<DecoderBrand>::new();
    let mut guards = SchemaCache::<GuardBrand>::new();

    assert_eq!(decoders.interpret::<Person>().decode(&input).is_ok(), accepted);
    assert_eq!(guards.interpret::<Person>().is(&input), accepted);
}

#[test]
fn schema_renders_as_json_schema() {
    assert_eq!(
        Person::interpret::<JsonSchemaBrand>().to_value(),
        json!({
            "allOf": [
                {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "tags": { "type": "array", "items": { "type": "string" } }
                    },
                    "required": ["name", "tags"]
                },
                {
                    "type": "object",
                    "properties": { "age": { "type": "number" } }
                }
            ]
        })
    );
}

struct Contact;

impl Schema for Contact {
    type Output = (String, Option<f64>);

    fn define<S: Schemable>() -> S::Repr<Self::Output> {
        S::struct_((("name", S::string()), ("age", S::undefinable(S::number()))))
    }
}

#[test]
fn undefinable_property_may_be_absent_in_every_interpreter() {
    let input = json!({ "name": "Ada" });

    assert_eq!(Contact::interpret::<DecoderBrand>().decode(&input), Ok(("Ada".to_string(), None)));
    assert!(Contact::interpret::<GuardBrand>().is(&input));
    assert_eq!(Contact::interpret::<JsonSchemaBrand>().to_value()["required"], json!(["name"]));
}

#[test]
fn guard_combinators_match_decoder_shapes() {
    let point = guard::tuple((guard::number(), guard::number()));

    assert!(point.is(&json!([1, 2])));
    assert!(!point.is(&json!([1])));
    assert!(!point.is(&json!({ "0": 1, "1": 2 })));

    let labels = guard::record(guard::union(vec![
        guard::string(),
        guard::nullable(guard::string()).retype(),
    ]));
    assert!(labels.is(&json!({ "a": "x", "b": null })));
    assert!(!labels.is(&json!({ "a": 1 })));
}

#[test]
fn large_failures_are_accumulated_and_dropped() {
    let input = Value::Array(
        (0..120_000)
            .map(|index| Value::from(format!("item {index}")))
            .collect(),
    );
    let errors = array(number()).decode(&input).unwrap_err();

    assert_eq!(errors.len(), 120_000);
    assert!(matches!(
        errors.iter().last(),
        Some(DecodeError::Index { index: 119_999, kind: FieldKind::Optional, .. })
    ));
    assert_eq!(draw(&errors).lines().count(), 240_000);

    let copy = errors.clone();
    assert_eq!(copy, errors);
    drop(copy);
    drop(errors);
}
