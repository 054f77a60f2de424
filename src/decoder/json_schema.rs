//! JSON Schema generation.
//!
//! [`JsonSchema<A>`] renders the schema of an `A` as a JSON Schema
//! (draft 2020-12) document. Lazy definitions become `$ref`s into `$defs`,
//! so recursive schemas render to finite documents.
//!
//! # Examples
//!
//! ```rust
//! use optica::decoder::{JsonSchemaBrand, Schemable};
//! use serde_json::json;
//!
//! let schema = JsonSchemaBrand::struct_((("id", JsonSchemaBrand::number()),));
//!
//! assert_eq!(
//!     schema.to_value(),
//!     json!({
//!         "type": "object",
//!         "properties": { "id": { "type": "number" } },
//!         "required": ["id"]
//!     })
//! );
//! ```

use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::rc::Rc;

use serde_json::{json, Map, Value};

use super::schemable::{Position, Represent, Schemable};

/// `$defs` entries collected while rendering.
type Definitions = BTreeMap<String, Value>;

/// A renderable JSON Schema for an `A`.
pub struct JsonSchema<A> {
    render: Rc<dyn Fn(&mut Definitions) -> Value>,
    // Whether the value may be left out entirely; such properties are not
    // listed under `required`.
    accepts_absent: bool,
    _marker: PhantomData<fn() -> A>,
}

impl<A> Clone for JsonSchema<A> {
    fn clone(&self) -> Self {
        Self {
            render: Rc::clone(&self.render),
            accepts_absent: self.accepts_absent,
            _marker: PhantomData,
        }
    }
}

impl<A> std::fmt::Debug for JsonSchema<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("JsonSchema")
            .field("accepts_absent", &self.accepts_absent)
            .finish_non_exhaustive()
    }
}

impl<A> JsonSchema<A> {
    fn new(render: impl Fn(&mut Definitions) -> Value + 'static) -> Self {
        Self {
            render: Rc::new(render),
            accepts_absent: false,
            _marker: PhantomData,
        }
    }

    fn accepting_absent(mut self, accepts_absent: bool) -> Self {
        self.accepts_absent = accepts_absent;
        self
    }

    /// Whether a property with this schema may be omitted.
    #[must_use]
    pub const fn accepts_absent(&self) -> bool {
        self.accepts_absent
    }

    fn constant(schema: Value) -> Self {
        Self::new(move |_| schema.clone())
    }

    fn retype<B>(self) -> JsonSchema<B> {
        JsonSchema {
            render: self.render,
            accepts_absent: self.accepts_absent,
            _marker: PhantomData,
        }
    }

    /// Renders the schema, with a `$defs` section when it has lazy parts.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut definitions = Definitions::new();
        let mut schema = (self.render)(&mut definitions);
        if let Value::Object(object) = &mut schema {
            if !definitions.is_empty() {
                let definitions = Value::Object(definitions.into_iter().collect());
                object.insert("$defs".to_string(), definitions);
            }
        }
        schema
    }
}

struct FieldSchema {
    position: Position,
    schema: Value,
    required: bool,
}

/// Fields rendered as object properties or tuple items.
pub struct JsonSchemaFields<A> {
    render: Rc<dyn Fn(&mut Definitions) -> Vec<FieldSchema>>,
    _marker: PhantomData<fn() -> A>,
}

impl<A> Clone for JsonSchemaFields<A> {
    fn clone(&self) -> Self {
        Self {
            render: Rc::clone(&self.render),
            _marker: PhantomData,
        }
    }
}

impl<A> std::fmt::Debug for JsonSchemaFields<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("JsonSchemaFields").finish_non_exhaustive()
    }
}

impl<A> JsonSchemaFields<A> {
    fn new(render: impl Fn(&mut Definitions) -> Vec<FieldSchema> + 'static) -> Self {
        Self {
            render: Rc::new(render),
            _marker: PhantomData,
        }
    }

    fn field<B>(position: Position, repr: JsonSchema<B>, required: bool) -> Self {
        Self::new(move |definitions| {
            vec![FieldSchema {
                position,
                schema: (repr.render)(definitions),
                required,
            }]
        })
    }
}

/// Interpreter brand producing [`JsonSchema`]s.
#[derive(Debug, Clone, Copy)]
pub enum JsonSchemaBrand {}

impl<A: 'static> Represent<JsonSchemaBrand> for JsonSchema<A> {
    type Target = A;

    fn into_repr(self) -> Self {
        self
    }
}

impl Schemable for JsonSchemaBrand {
    type Repr<A: 'static> = JsonSchema<A>;
    type Fields<A: 'static> = JsonSchemaFields<A>;

    fn unknown() -> JsonSchema<Value> {
        JsonSchema::constant(json!({}))
    }

    fn string() -> JsonSchema<String> {
        JsonSchema::constant(json!({ "type": "string" }))
    }

    fn number() -> JsonSchema<f64> {
        JsonSchema::constant(json!({ "type": "number" }))
    }

    fn boolean() -> JsonSchema<bool> {
        JsonSchema::constant(json!({ "type": "boolean" }))
    }

    fn literal(value: Value) -> JsonSchema<Value> {
        JsonSchema::constant(json!({ "const": value }))
    }

    fn nullable<A: 'static>(inner: JsonSchema<A>) -> JsonSchema<Option<A>> {
        let accepts_absent = inner.accepts_absent;
        JsonSchema::new(move |definitions| {
            json!({ "anyOf": [(inner.render)(definitions), { "type": "null" }] })
        })
        .accepting_absent(accepts_absent)
    }

    fn undefinable<A: 'static>(inner: JsonSchema<A>) -> JsonSchema<Option<A>> {
        inner.retype().accepting_absent(true)
    }

    fn array<A: 'static>(item: JsonSchema<A>) -> JsonSchema<Vec<A>> {
        JsonSchema::new(move |definitions| {
            json!({ "type": "array", "items": (item.render)(definitions) })
        })
    }

    fn record<A: 'static>(value: JsonSchema<A>) -> JsonSchema<BTreeMap<String, A>> {
        JsonSchema::new(move |definitions| {
            json!({ "type": "object", "additionalProperties": (value.render)(definitions) })
        })
    }

    fn required<A: 'static>(position: Position, repr: JsonSchema<A>) -> JsonSchemaFields<A> {
        let required = !repr.accepts_absent;
        JsonSchemaFields::field(position, repr, required)
    }

    fn optional<A: 'static>(
        position: Position,
        repr: JsonSchema<A>,
    ) -> JsonSchemaFields<Option<A>> {
        JsonSchemaFields::field(position, repr, false)
    }

    fn zip<A: 'static, B: 'static>(
        first: JsonSchemaFields<A>,
        second: JsonSchemaFields<B>,
    ) -> JsonSchemaFields<(A, B)> {
        JsonSchemaFields::new(move |definitions| {
            let mut fields = (first.render)(definitions);
            fields.extend((second.render)(definitions));
            fields
        })
    }

    fn map_fields<A: 'static, B: 'static>(
        fields: JsonSchemaFields<A>,
        _function: impl Fn(A) -> B + 'static,
    ) -> JsonSchemaFields<B> {
        JsonSchemaFields {
            render: fields.render,
            _marker: PhantomData,
        }
    }

    fn structure<A: 'static>(fields: JsonSchemaFields<A>) -> JsonSchema<A> {
        JsonSchema::new(move |definitions| {
            let mut properties = Map::new();
            let mut required = Vec::new();
            for field in (fields.render)(definitions) {
                if let Position::Key(key) = field.position {
                    if field.required {
                        required.push(Value::from(key));
                    }
                    properties.insert(key.to_string(), field.schema);
                }
            }

            let mut schema = json!({ "type": "object", "properties": properties });
            if !required.is_empty() {
                schema["required"] = Value::Array(required);
            }
            schema
        })
    }

    fn positional<A: 'static>(fields: JsonSchemaFields<A>) -> JsonSchema<A> {
        JsonSchema::new(move |definitions| {
            let fields = (fields.render)(definitions);
            let min_items = fields
                .iter()
                .rposition(|field| field.required)
                .map_or(0, |last| last + 1);
            let items: Vec<Value> = fields.into_iter().map(|field| field.schema).collect();
            json!({
                "type": "array",
                "prefixItems": items,
                "minItems": min_items,
                "maxItems": items.len(),
            })
        })
    }

    fn intersect<A: 'static, B: 'static>(
        left: JsonSchema<A>,
        right: JsonSchema<B>,
    ) -> JsonSchema<(A, B)> {
        let accepts_absent = left.accepts_absent && right.accepts_absent;
        JsonSchema::new(move |definitions| {
            json!({ "allOf": [(left.render)(definitions), (right.render)(definitions)] })
        })
        .accepting_absent(accepts_absent)
    }

    fn union<A: 'static>(members: Vec<JsonSchema<A>>) -> JsonSchema<A> {
        let accepts_absent = members.iter().any(|member| member.accepts_absent);
        JsonSchema::new(move |definitions| {
            let members: Vec<Value> =
                members.iter().map(|member| (member.render)(definitions)).collect();
            json!({ "anyOf": members })
        })
        .accepting_absent(accepts_absent)
    }

    fn lazy<A: 'static>(
        id: &'static str,
        definition: impl Fn() -> JsonSchema<A> + 'static,
    ) -> JsonSchema<A> {
        JsonSchema::new(move |definitions| {
            if !definitions.contains_key(id) {
                tracing::trace!(id, "rendering lazy schema definition");
                definitions.insert(id.to_string(), Value::Null);
                let rendered = (definition().render)(definitions);
                definitions.insert(id.to_string(), rendered);
            }
            json!({ "$ref": format!("#/$defs/{id}") })
        })
    }

    fn map<A: 'static, B: 'static>(
        repr: JsonSchema<A>,
        _function: impl Fn(A) -> B + 'static,
    ) -> JsonSchema<B> {
        repr.retype()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type J = JsonSchemaBrand;

    #[test]
    fn partial_has_no_required_list() {
        let schema = J::partial((("a", J::string()), ("b", J::boolean())));
        assert_eq!(
            schema.to_value(),
            json!({
                "type": "object",
                "properties": { "a": { "type": "string" }, "b": { "type": "boolean" } }
            })
        );
    }

    #[test]
    fn tuple_uses_prefix_items() {
        let schema = J::tuple((J::string(), J::number()));
        assert_eq!(
            schema.to_value(),
            json!({
                "type": "array",
                "prefixItems": [{ "type": "string" }, { "type": "number" }],
                "minItems": 2,
                "maxItems": 2
            })
        );
    }

    #[test]
    fn undefinable_properties_are_not_required() {
        let schema = J::struct_((("name", J::string()), ("age", J::undefinable(J::number()))));
        assert_eq!(
            schema.to_value(),
            json!({
                "type": "object",
                "properties": { "name": { "type": "string" }, "age": { "type": "number" } },
                "required": ["name"]
            })
        );
        assert!(J::nullable(J::undefinable(J::number())).accepts_absent());
        assert!(J::map(J::undefinable(J::number()), |_| ()).accepts_absent());
        assert!(!J::number().accepts_absent());
    }

    #[test]
    fn trailing_undefinable_items_lower_min_items() {
        let schema = J::tuple((J::string(), J::undefinable(J::number())));
        assert_eq!(
            schema.to_value(),
            json!({
                "type": "array",
                "prefixItems": [{ "type": "string" }, { "type": "number" }],
                "minItems": 1,
                "maxItems": 2
            })
        );
    }

    #[test]
    fn combinators_render_as_keywords() {
        assert_eq!(
            J::nullable(J::number()).to_value(),
            json!({ "anyOf": [{ "type": "number" }, { "type": "null" }] })
        );
        assert_eq!(
            J::union(vec![J::literal(json!("a")), J::literal(json!("b"))]).to_value(),
            json!({ "anyOf": [{ "const": "a" }, { "const": "b" }] })
        );
        assert_eq!(
            J::record(J::boolean()).to_value(),
            json!({ "type": "object", "additionalProperties": { "type": "boolean" } })
        );
        assert_eq!(
            J::intersect(J::unknown(), J::string()).to_value(),
            json!({ "allOf": [{}, { "type": "string" }] })
        );
    }

    #[test]
    fn recursive_schema_terminates_with_defs() {
        fn tree() -> JsonSchema<(f64, Vec<()>)> {
            J::lazy("Tree", || {
                J::struct_((("value", J::number()), ("children", J::array(J::map(tree(), |_| ())))))
            })
        }

        assert_eq!(
            tree().to_value(),
            json!({
                "$ref": "#/$defs/Tree",
                "$defs": {
                    "Tree": {
                        "type": "object",
                        "properties": {
                            "value": { "type": "number" },
                            "children": { "type": "array", "items": { "$ref": "#/$defs/Tree" } }
                        },
                        "required": ["value", "children"]
                    }
                }
            })
        );
    }
}
