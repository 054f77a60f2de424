//! Concatenation of decode errors is associative once drawn: the tree shape
//! of a `FreeSemigroup` never shows through in the rendered report.

use optica::decoder::{draw, DecodeError, DecodeErrors, FieldKind, FreeSemigroup};
use optica::typeclass::Semigroup;
use proptest::prelude::*;
use serde_json::Value;

fn error_strategy() -> impl Strategy<Value = DecodeErrors> {
    let leaf = (proptest::option::of(any::<i32>()), "[a-z]{1,6}")
        .prop_map(|(actual, expected)| DecodeError::leaf(actual.map(Value::from), expected));

    leaf.prop_recursive(3, 12, 2, |inner| {
        prop_oneof![
            ("[a-z]{1,4}", inner.clone())
                .prop_map(|(key, errors)| DecodeError::key(key, FieldKind::Required, errors)),
            (0usize..4, inner.clone())
                .prop_map(|(index, errors)| DecodeError::index(index, FieldKind::Optional, errors)),
            (inner.clone(), inner).prop_map(|(left, right)| FreeSemigroup::concat(left, right)),
        ]
    })
}

proptest! {
    #[test]
    fn prop_concat_is_associative_under_draw(
        a in error_strategy(),
        b in error_strategy(),
        c in error_strategy(),
    ) {
        let left = FreeSemigroup::concat(FreeSemigroup::concat(a.clone(), b.clone()), c.clone());
        let right = FreeSemigroup::concat(a, FreeSemigroup::concat(b, c));
        prop_assert_eq!(draw(&left), draw(&right));
    }

    #[test]
    fn prop_combine_keeps_every_error(a in error_strategy(), b in error_strategy()) {
        let expected = a.len() + b.len();
        prop_assert_eq!(a.combine(b).len(), expected);
    }
}

#[test]
fn leaf_draws_actual_and_expected() {
    let errors: DecodeErrors = DecodeError::leaf(Some(Value::from(1)), "string".to_string());
    assert_eq!(draw(&errors), "cannot decode 1, should be string");
}
