//! Tests for `#[derive(Lenses)]` and `#[derive(Prisms)]`.

use optica::optics::{
    Lens, LensCompose, Optional, OptionalCompose, Prism, PrismCompose, Traversal, TraversalCompose,
};
use optica::{Lenses, Prisms};
use proptest::prelude::*;
use rstest::rstest;

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Address {
    street: String,
    city: String,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Person {
    name: String,
    age: u32,
    addresses: Vec<Address>,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Container<T> {
    value: T,
    label: String,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Keyword {
    r#type: String,
}

#[derive(Clone, PartialEq, Debug, Prisms)]
enum Shape {
    Circle(f64),
    Rectangle(f64, f64),
    Labeled { name: String, sides: u8 },
    Empty,
}

#[derive(Clone, PartialEq, Debug, Prisms)]
enum Event {
    KeyPress(char),
    MouseClick { x: i32, y: i32 },
}

#[derive(Clone, PartialEq, Debug, Prisms)]
enum Maybe<T> {
    Just(T),
    Nothing,
}

fn alice() -> Person {
    Person {
        name: "Alice".to_string(),
        age: 30,
        addresses: vec![Address {
            street: "Main St".to_string(),
            city: "Tokyo".to_string(),
        }],
    }
}

#[test]
fn derived_lens_gets_and_sets() {
    let person = alice();

    assert_eq!(Person::name_lens().get(&person), "Alice");
    assert_eq!(Person::age_lens().set(person.clone(), 31).age, 31);
    assert_eq!(Person::age_lens().modify(person, |age| age + 1).age, 31);
}

#[test]
fn derived_lenses_compose_through_combinators() {
    let first_city = Person::addresses_lens().index(0).prop(Address::city_lens());
    let person = alice();

    assert_eq!(first_city.get_option(&person), Some("Tokyo".to_string()));
    assert_eq!(first_city.set(person, "Osaka".to_string()).addresses[0].city, "Osaka");

    let streets = Person::addresses_lens().each().prop(Address::street_lens());
    assert_eq!(streets.get_all(&alice()), vec!["Main St".to_string()]);
}

#[test]
fn derived_lens_on_generic_struct() {
    let container = Container {
        value: 42,
        label: "answer".to_string(),
    };

    assert_eq!(Container::<i32>::value_lens().get(&container), 42);
    assert_eq!(Container::<i32>::label_lens().set(container, "x".to_string()).label, "x");
}

#[test]
fn derived_lens_strips_raw_identifier_prefix() {
    let keyword = Keyword {
        r#type: "object".to_string(),
    };
    assert_eq!(Keyword::type_lens().get(&keyword), "object");
}

#[rstest]
#[case(Shape::Circle(1.5), Some(1.5))]
#[case(Shape::Rectangle(1.0, 2.0), None)]
#[case(Shape::Empty, None)]
fn derived_single_field_prism(#[case] shape: Shape, #[case] expected: Option<f64>) {
    assert_eq!(Shape::circle_prism().get_option(&shape), expected);
}

#[test]
fn derived_prisms_focus_on_tuples_for_multi_field_variants() {
    assert_eq!(
        Shape::rectangle_prism().get_option(&Shape::Rectangle(3.0, 4.0)),
        Some((3.0, 4.0))
    );
    assert_eq!(
        Shape::labeled_prism().reverse_get(("tri".to_string(), 3)),
        Shape::Labeled {
            name: "tri".to_string(),
            sides: 3
        }
    );
    assert_eq!(Shape::empty_prism().get_option(&Shape::Empty), Some(()));
    assert_eq!(Shape::empty_prism().reverse_get(()), Shape::Empty);
}

#[test]
fn derived_prism_names_are_snake_case() {
    assert_eq!(Event::key_press_prism().get_option(&Event::KeyPress('q')), Some('q'));
    assert_eq!(
        Event::mouse_click_prism().get_option(&Event::MouseClick { x: 1, y: 2 }),
        Some((1, 2))
    );
    assert_eq!(Event::mouse_click_prism().get_option(&Event::KeyPress('q')), None);
}

#[test]
fn derived_prism_on_generic_enum() {
    let just = Maybe::<i32>::just_prism();

    assert_eq!(just.get_option(&Maybe::Just(1)), Some(1));
    assert_eq!(just.get_option(&Maybe::Nothing), None);
    assert_eq!(just.modify(Maybe::Just(1), |n| n + 1), Maybe::Just(2));
    assert_eq!(Maybe::<i32>::nothing_prism().get_option(&Maybe::Nothing), Some(()));
}

#[test]
fn derived_prisms_compose() {
    let circle_in_maybe = Maybe::<Shape>::just_prism().compose_prism(Shape::circle_prism());

    assert_eq!(circle_in_maybe.get_option(&Maybe::Just(Shape::Circle(2.0))), Some(2.0));
    assert_eq!(circle_in_maybe.reverse_get(2.0), Maybe::Just(Shape::Circle(2.0)));
    assert_eq!(circle_in_maybe.get_option(&Maybe::Just(Shape::Empty)), None);
}

proptest! {
    #[test]
    fn prop_derived_lens_laws(name in "[a-z]{0,8}", age in any::<u32>(), value in any::<u32>()) {
        let person = Person { name, age, addresses: Vec::new() };
        let age_lens = Person::age_lens();

        prop_assert_eq!(age_lens.set(person.clone(), age_lens.get(&person)), person.clone());
        prop_assert_eq!(age_lens.get(&age_lens.set(person, value)), value);
    }

    #[test]
    fn prop_derived_prism_laws(x in any::<i32>(), y in any::<i32>()) {
        let click = Event::mouse_click_prism();
        prop_assert_eq!(click.get_option(&click.reverse_get((x, y))), Some((x, y)));
    }
}
